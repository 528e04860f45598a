//! Fake Speech Client - 用于测试的合成客户端
//!
//! 按剧本返回固定音频或预设失败，不实际调用外部服务

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{
    SpeechEnginePort, SpeechError, SynthesisRequest, SynthesisResponse, VoiceDescriptor,
};

/// Fake Speech Client 配置
#[derive(Debug, Clone)]
pub struct FakeSpeechClientConfig {
    /// 成功时返回的固定音频数据
    pub audio_data: Vec<u8>,
    /// 这些单元返回 HTTP 500 拒绝
    pub reject_unit_ids: Vec<String>,
    /// 这些单元模拟传输中断
    pub drop_unit_ids: Vec<String>,
    /// 语音列表接口的返回值
    pub voices: Vec<VoiceDescriptor>,
}

impl Default for FakeSpeechClientConfig {
    fn default() -> Self {
        Self {
            audio_data: b"fake mp3 audio".to_vec(),
            reject_unit_ids: Vec::new(),
            drop_unit_ids: Vec::new(),
            voices: Vec::new(),
        }
    }
}

/// Fake Speech Client
///
/// 记录收到的合成请求顺序，供测试断言
pub struct FakeSpeechClient {
    config: FakeSpeechClientConfig,
    calls: Mutex<Vec<String>>,
}

impl FakeSpeechClient {
    pub fn new(config: FakeSpeechClientConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的合成请求单元 ID，按调用顺序
    pub fn synthesized_unit_ids(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl SpeechEnginePort for FakeSpeechClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(request.unit_id.clone());

        if self.config.reject_unit_ids.contains(&request.unit_id) {
            return Err(SpeechError::Rejected {
                status: 500,
                body: "scripted rejection".to_string(),
            });
        }
        if self.config.drop_unit_ids.contains(&request.unit_id) {
            return Err(SpeechError::Network("scripted connection reset".to_string()));
        }

        tracing::debug!(
            unit_id = %request.unit_id,
            text_len = request.text.len(),
            "FakeSpeechClient: returning fixed audio"
        );

        Ok(SynthesisResponse {
            audio_data: self.config.audio_data.clone(),
        })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        Ok(self.config.voices.clone())
    }
}
