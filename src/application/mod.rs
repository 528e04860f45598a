//! Application Layer - 应用层
//!
//! - Ports: 端口定义（SpeechEngine, AudioSink, RateGate）
//! - Batch: 批量渲染工作流与结果报告
//! - Queries: 语音列表查询

pub mod batch;
pub mod ports;
pub mod queries;
