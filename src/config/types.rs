//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::voice::VoiceSettings;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务商配置
    #[serde(default)]
    pub provider: ProviderConfig,

    /// 语音参数配置
    #[serde(default)]
    pub voice: VoiceConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 批量渲染配置
    #[serde(default)]
    pub batch: BatchConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            voice: VoiceConfig::default(),
            output: OutputConfig::default(),
            batch: BatchConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务商配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// 服务基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API 密钥（未设置时不可发起真实请求）
    #[serde(default)]
    pub api_key: String,

    /// 目标语音 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// 模型标识
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    // Bill - 落ち着いた男性声
    "pqHfZKP75CvOlQylNhV4".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_provider_timeout() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            timeout_secs: default_provider_timeout(),
        }
    }
}

/// 语音参数配置
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    /// 声线稳定度 (0.0 - 1.0)
    #[serde(default = "default_stability")]
    pub stability: f32,

    /// 与基准声线的相似度 (0.0 - 1.0)
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,

    /// 情感起伏强度 (0.0 - 1.0)
    #[serde(default = "default_style")]
    pub style: f32,

    /// 是否启用扬声器增强
    #[serde(default = "default_speaker_boost")]
    pub use_speaker_boost: bool,
}

fn default_stability() -> f32 {
    0.5
}

fn default_similarity_boost() -> f32 {
    0.75
}

fn default_style() -> f32 {
    0.3
}

fn default_speaker_boost() -> bool {
    true
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            style: default_style(),
            use_speaker_boost: default_speaker_boost(),
        }
    }
}

impl VoiceConfig {
    /// 转换为领域层语音参数
    pub fn settings(&self) -> VoiceSettings {
        VoiceSettings {
            stability: self.stability,
            similarity_boost: self.similarity_boost,
            style: self.style,
            use_speaker_boost: self.use_speaker_boost,
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 音频输出目录
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("audio/jp")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// 批量渲染配置
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// 相邻请求之间的固定间隔（秒）
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// 外部台本文件路径（TOML）
    /// 未设置时使用内置演示台本
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// 语音列表过滤用的目标语言代码
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_interval_secs() -> u64 {
    1
}

fn default_language() -> String {
    "ja".to_string()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            catalog_path: None,
            language: default_language(),
        }
    }
}

impl BatchConfig {
    /// 获取请求间隔
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.provider.model_id, "eleven_multilingual_v2");
        assert!(config.provider.api_key.is_empty());
        assert_eq!(config.output.dir, PathBuf::from("audio/jp"));
        assert_eq!(config.batch.interval_secs, 1);
        assert_eq!(config.batch.language, "ja");
        assert!(config.batch.catalog_path.is_none());
    }

    #[test]
    fn test_voice_settings_conversion() {
        let config = VoiceConfig::default();
        let settings = config.settings();
        assert_eq!(settings.stability, 0.5);
        assert_eq!(settings.similarity_boost, 0.75);
        assert_eq!(settings.style, 0.3);
        assert!(settings.use_speaker_boost);
    }

    #[test]
    fn test_batch_interval() {
        let config = BatchConfig::default();
        assert_eq!(config.interval(), Duration::from_secs(1));
    }
}
