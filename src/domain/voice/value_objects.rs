//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 语音合成参数
///
/// 随每次合成请求发送给服务商，进程内全局唯一一份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// 声线稳定度 (0.0 - 1.0)
    pub stability: f32,
    /// 与基准声线的相似度 (0.0 - 1.0)
    pub similarity_boost: f32,
    /// 情感起伏强度 (0.0 - 1.0)
    pub style: f32,
    /// 是否启用扬声器增强
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.3,
            use_speaker_boost: true,
        }
    }
}

impl VoiceSettings {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.0..=1.0).contains(&self.stability) {
            return Err("稳定度必须在 0.0 到 1.0 之间");
        }
        if !(0.0..=1.0).contains(&self.similarity_boost) {
            return Err("相似度必须在 0.0 到 1.0 之间");
        }
        if !(0.0..=1.0).contains(&self.style) {
            return Err("情感强度必须在 0.0 到 1.0 之间");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        assert!(VoiceSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let settings = VoiceSettings {
            stability: 1.5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = VoiceSettings {
            style: -0.1,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
