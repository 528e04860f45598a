//! ElevenLabs Client - 调用 ElevenLabs TTS HTTP API
//!
//! 实现 SpeechEnginePort trait，通过 HTTP 调用 ElevenLabs 服务
//!
//! 外部 API:
//! POST {base}/v1/text-to-speech/{voice_id}
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: 音频二进制 (MP3)
//!
//! GET {base}/v1/voices
//! Response: {"voices": [{"voice_id": "...", "name": "...", "languages": [...]}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    SpeechEnginePort, SpeechError, SynthesisRequest, SynthesisResponse, VoiceDescriptor,
};
use crate::domain::voice::VoiceSettings;

/// 认证头名称
const API_KEY_HEADER: &str = "xi-api-key";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesisHttpRequest {
    /// 要合成的文本
    text: String,
    /// 模型标识
    model_id: String,
    /// 语音参数
    voice_settings: VoiceSettingsBody,
}

#[derive(Debug, Serialize)]
struct VoiceSettingsBody {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl From<&VoiceSettings> for VoiceSettingsBody {
    fn from(settings: &VoiceSettings) -> Self {
        Self {
            stability: settings.stability,
            similarity_boost: settings.similarity_boost,
            style: settings.style,
            use_speaker_boost: settings.use_speaker_boost,
        }
    }
}

/// 语音列表响应体 (JSON)
#[derive(Debug, Deserialize)]
struct VoicesHttpResponse {
    voices: Vec<VoiceDescriptor>,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// API 密钥
    pub api_key: String,
    /// 目标语音 ID
    pub voice_id: String,
    /// 模型标识
    pub model_id: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            api_key: String::new(),
            voice_id: String::new(),
            model_id: "eleven_multilingual_v2".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ElevenLabs 客户端
///
/// 不落盘，只负责网络往返；文件写入由 AudioSink 完成
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    /// 创建新的 ElevenLabs 客户端
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        )
    }

    /// 获取语音列表 URL
    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.config.base_url)
    }

    fn map_transport_error(e: reqwest::Error) -> SpeechError {
        if e.is_timeout() {
            SpeechError::Timeout
        } else if e.is_connect() {
            SpeechError::Network(format!("Cannot connect to TTS provider: {}", e))
        } else {
            SpeechError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl SpeechEnginePort for ElevenLabsClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechError> {
        let http_request = SynthesisHttpRequest {
            text: request.text.clone(),
            model_id: self.config.model_id.clone(),
            voice_settings: VoiceSettingsBody::from(&request.settings),
        };

        tracing::debug!(
            url = %self.synthesis_url(),
            unit_id = %request.unit_id,
            text_len = http_request.text.len(),
            "Sending synthesis request"
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            unit_id = %request.unit_id,
            audio_size = audio_data.len(),
            "Synthesis completed"
        );

        Ok(SynthesisResponse { audio_data })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        tracing::debug!(url = %self.voices_url(), "Fetching voice list");

        let response = self
            .client
            .get(self.voices_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: VoicesHttpResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse voices: {}", e)))?;

        tracing::info!(count = body.voices.len(), "Voice list fetched");

        Ok(body.voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config(server: &mockito::ServerGuard) -> ElevenLabsClientConfig {
        ElevenLabsClientConfig {
            base_url: server.url(),
            api_key: "key-1".to_string(),
            voice_id: "voice-1".to_string(),
            ..Default::default()
        }
    }

    fn request(unit_id: &str, text: &str) -> SynthesisRequest {
        SynthesisRequest {
            unit_id: unit_id.to_string(),
            text: text.to_string(),
            settings: VoiceSettings::default(),
        }
    }

    #[test]
    fn test_config_default() {
        let config = ElevenLabsClientConfig::default();
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.model_id, "eleven_multilingual_v2");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = ElevenLabsClientConfig::new("http://example.com:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[tokio::test]
    async fn test_synthesize_returns_audio_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/text-to-speech/voice-1")
            .match_header(API_KEY_HEADER, "key-1")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::PartialJson(json!({
                "text": "こんにちは",
                "model_id": "eleven_multilingual_v2",
                "voice_settings": { "use_speaker_boost": true },
            })))
            .with_status(200)
            .with_body(b"mp3 audio bytes".as_slice())
            .create_async()
            .await;

        let client = ElevenLabsClient::new(test_config(&server)).unwrap();
        let response = client.synthesize(request("a", "こんにちは")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.audio_data, b"mp3 audio bytes");
    }

    #[tokio::test]
    async fn test_synthesize_rejection_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/text-to-speech/voice-1")
            .with_status(500)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let client = ElevenLabsClient::new(test_config(&server)).unwrap();
        let result = client.synthesize(request("a", "text")).await;

        match result {
            Err(SpeechError::Rejected { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_voices_parses_descriptors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/voices")
            .match_header(API_KEY_HEADER, "key-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "voices": [
                        { "voice_id": "v1", "name": "Alice", "languages": ["en"] },
                        { "voice_id": "v2", "name": "Bill", "languages": ["ja", "en"],
                          "description": "落ち着いた男性声" },
                        { "voice_id": "v3", "name": "NoLang" },
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = ElevenLabsClient::new(test_config(&server)).unwrap();
        let voices = client.list_voices().await.unwrap();

        assert_eq!(voices.len(), 3);
        assert_eq!(voices[1].voice_id, "v2");
        assert_eq!(voices[1].languages, vec!["ja", "en"]);
        assert_eq!(voices[1].description.as_deref(), Some("落ち着いた男性声"));
        assert!(voices[2].languages.is_empty());
    }

    #[tokio::test]
    async fn test_list_voices_rejection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/voices")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let client = ElevenLabsClient::new(test_config(&server)).unwrap();
        let result = client.list_voices().await;

        assert!(matches!(
            result,
            Err(SpeechError::Rejected { status: 401, .. })
        ));
    }
}
