//! Narration Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("旁白 ID 不能为空")]
    EmptyId,

    #[error("旁白文本不能为空: {0}")]
    EmptyText(String),

    #[error("旁白 ID 重复: {0}")]
    DuplicateId(String),

    #[error("时长必须为正数: {0}")]
    ZeroDuration(String),

    #[error("台本文件解析失败: {0}")]
    ParseError(String),
}
