//! File Sink - 文件系统音频落盘实现
//!
//! 实现 AudioSinkPort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioSinkPort, SinkError};

/// 输出文件扩展名，与服务商返回的音频格式一致
const AUDIO_EXT: &str = "mp3";

/// 文件系统音频落盘
///
/// 输出路径只由 stem 决定，重复渲染同一单元为覆盖写
pub struct FileAudioSink {
    /// 输出根目录
    base_dir: PathBuf,
}

impl FileAudioSink {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 获取输出根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioSinkPort for FileAudioSink {
    fn audio_path(&self, stem: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", stem, AUDIO_EXT))
    }

    async fn save(&self, stem: &str, data: &[u8]) -> Result<PathBuf, SinkError> {
        // 目录不存在时先建目录
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| SinkError::Io(e.to_string()))?;

        let audio_path = self.audio_path(stem);

        fs::write(&audio_path, data)
            .await
            .map_err(|e| SinkError::Io(e.to_string()))?;

        tracing::debug!(
            "Saved audio: stem={}, path={}, size={} bytes",
            stem,
            audio_path.display(),
            data.len()
        );

        Ok(audio_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_audio_path_is_deterministic() {
        let sink = FileAudioSink::new("audio/jp");
        assert_eq!(sink.audio_path("intro_1"), PathBuf::from("audio/jp/intro_1.mp3"));
        assert_eq!(sink.audio_path("intro_1"), sink.audio_path("intro_1"));
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_writes() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("audio").join("jp");
        let sink = FileAudioSink::new(&nested);

        let data = b"mp3 payload";
        let path = sink.save("a", data).await.unwrap();

        assert_eq!(path, nested.join("a.mp3"));
        assert_eq!(std::fs::read(&path).unwrap(), data);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let temp_dir = tempdir().unwrap();
        let sink = FileAudioSink::new(temp_dir.path());

        sink.save("a", b"first").await.unwrap();
        let path = sink.save("a", b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
