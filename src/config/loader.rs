//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `KURAVOICE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `KURAVOICE_PROVIDER__API_KEY=sk_xxx`
/// - `KURAVOICE_PROVIDER__VOICE_ID=pqHfZKP75CvOlQylNhV4`
/// - `KURAVOICE_OUTPUT__DIR=audio/jp`
/// - `KURAVOICE_BATCH__INTERVAL_SECS=2`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("provider.base_url", "https://api.elevenlabs.io")?
        .set_default("provider.api_key", "")?
        .set_default("provider.voice_id", "pqHfZKP75CvOlQylNhV4")?
        .set_default("provider.model_id", "eleven_multilingual_v2")?
        .set_default("provider.timeout_secs", 30)?
        .set_default("voice.stability", 0.5)?
        .set_default("voice.similarity_boost", 0.75)?
        .set_default("voice.style", 0.3)?
        .set_default("voice.use_speaker_boost", true)?
        .set_default("output.dir", "audio/jp")?
        .set_default("batch.interval_secs", 1)?
        .set_default("batch.language", "ja")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: KURAVOICE_
    // 层级分隔符: __ (双下划线)
    // 例如: KURAVOICE_PROVIDER__API_KEY=sk_xxx
    builder = builder.add_source(
        Environment::with_prefix("KURAVOICE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证服务商 URL
    if config.provider.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Provider base URL cannot be empty".to_string(),
        ));
    }

    // 验证模型与语音标识
    if config.provider.model_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "Provider model id cannot be empty".to_string(),
        ));
    }
    if config.provider.voice_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "Provider voice id cannot be empty".to_string(),
        ));
    }

    // 验证语音参数范围
    config
        .voice
        .settings()
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    // 验证输出目录
    if config.output.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output directory cannot be empty".to_string(),
        ));
    }

    // 验证过滤语言
    if config.batch.language.is_empty() {
        return Err(ConfigError::ValidationError(
            "Batch language cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// API 密钥只打印是否已设置
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Provider URL: {}", config.provider.base_url);
    tracing::info!(
        "Provider API Key: {}",
        if config.provider.api_key.is_empty() {
            "(not set)"
        } else {
            "(set)"
        }
    );
    tracing::info!("Voice ID: {}", config.provider.voice_id);
    tracing::info!("Model: {}", config.provider.model_id);
    tracing::info!("Request Timeout: {}s", config.provider.timeout_secs);
    tracing::info!(
        "Voice Settings: stability={} similarity={} style={} speaker_boost={}",
        config.voice.stability,
        config.voice.similarity_boost,
        config.voice.style,
        config.voice.use_speaker_boost
    );
    tracing::info!("Output Directory: {:?}", config.output.dir);
    tracing::info!("Request Interval: {}s", config.batch.interval_secs);
    match &config.batch.catalog_path {
        Some(path) => tracing::info!("Catalog: {:?}", path),
        None => tracing::info!("Catalog: (built-in demo)"),
    }
    tracing::info!("Language Filter: {}", config.batch.language);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.batch.interval_secs, 1);
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.provider.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_voice_id() {
        let mut config = AppConfig::default();
        config.provider.voice_id = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_out_of_range_stability() {
        let mut config = AppConfig::default();
        config.voice.stability = 1.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_language() {
        let mut config = AppConfig::default();
        config.batch.language = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [provider]
                api_key = "sk_test"

                [batch]
                interval_secs = 2
            "#,
        )
        .unwrap();

        let config = load_config_from_path(Some(path.as_path())).unwrap();
        assert_eq!(config.provider.api_key, "sk_test");
        assert_eq!(config.batch.interval_secs, 2);
        // 未覆盖的键保持默认值
        assert_eq!(config.provider.base_url, "https://api.elevenlabs.io");
    }
}
