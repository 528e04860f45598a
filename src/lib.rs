//! Kuravoice - 旁白批量音频生成工具
//!
//! 将导览台本批量渲染为音频文件，调用 ElevenLabs TTS API
//!
//! 架构: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Narration Context: 旁白台本管理
//! - Voice Context: 语音参数管理
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechEngine, AudioSink, RateGate）
//! - Batch: 批量渲染工作流与结果报告
//! - Queries: 语音列表查询
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: ElevenLabs 客户端、文件落盘、固定间隔节流

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
