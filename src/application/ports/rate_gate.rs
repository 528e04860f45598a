//! Rate Gate Port - 请求节流抽象
//!
//! 批量渲染在相邻服务商请求之间通过该接口等待

use async_trait::async_trait;

/// Rate Gate Port
#[async_trait]
pub trait RateGatePort: Send + Sync {
    /// 等待至允许发起下一次请求
    async fn wait(&self);
}
