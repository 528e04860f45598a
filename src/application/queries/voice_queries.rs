//! Voice Queries - 语音列表查询
//!
//! 服务商语音列表的只读过滤，供诊断模式使用

use crate::application::ports::VoiceDescriptor;

/// 过滤出支持指定语言的语音
pub fn voices_for_language(
    voices: Vec<VoiceDescriptor>,
    language: &str,
) -> Vec<VoiceDescriptor> {
    voices
        .into_iter()
        .filter(|v| v.languages.iter().any(|l| l == language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(id: &str, languages: &[&str]) -> VoiceDescriptor {
        VoiceDescriptor {
            voice_id: id.to_string(),
            name: format!("voice {}", id),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            description: None,
        }
    }

    #[test]
    fn test_filters_by_language_tag() {
        let voices = vec![voice("v1", &["en"]), voice("v2", &["ja", "en"])];
        let matched = voices_for_language(voices, "ja");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].voice_id, "v2");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let voices = vec![voice("v1", &["en"]), voice("v2", &[])];
        assert!(voices_for_language(voices, "ja").is_empty());
    }
}
