//! Audio Sink Port - 音频落盘抽象
//!
//! 合成结果的持久化接口，路径由单元 ID 决定

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 落盘错误
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Audio Sink Port
///
/// 不变量: 同一 stem 总是映射到同一路径，重复写入为覆盖
#[async_trait]
pub trait AudioSinkPort: Send + Sync {
    /// 计算 stem 对应的输出路径（确定性，不触盘）
    fn audio_path(&self, stem: &str) -> PathBuf;

    /// 写入完整音频数据，返回实际写入路径
    ///
    /// 目录不存在时自动创建，已有同名文件被覆盖
    async fn save(&self, stem: &str, data: &[u8]) -> Result<PathBuf, SinkError>;
}
