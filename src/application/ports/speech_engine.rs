//! Speech Engine Port - 语音合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::voice::VoiceSettings;

/// 合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Provider rejected request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成请求
///
/// 由一个旁白单元加上进程级语音参数派生，一单元一请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 单元 ID（用于日志和追踪）
    pub unit_id: String,
    /// 要合成的文本内容
    pub text: String,
    /// 语音合成参数
    pub settings: VoiceSettings,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// 语音描述符
///
/// 服务商语音列表接口返回的单条语音信息
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoiceDescriptor {
    pub voice_id: String,
    pub name: String,
    /// 支持的语言代码集合
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Speech Engine Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    /// 执行一次语音合成
    ///
    /// 发送文本到外部服务，成功时返回完整的音频数据
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechError>;

    /// 列出服务商可用语音（诊断用）
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError>;
}
