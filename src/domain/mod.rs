//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Narration Context: 旁白台本管理
//! - Voice Context: 语音参数管理

pub mod narration;
pub mod voice;
