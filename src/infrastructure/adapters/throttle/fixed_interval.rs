//! Fixed Interval Gate - 固定间隔速率闸门
//!
//! 实现 RateGatePort trait：每次 wait 挂起固定时长，
//! 用于在相邻服务商请求之间保持最小间隔

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::RateGatePort;

/// 固定间隔速率闸门
///
/// 无自适应退避，无抖动；间隔为 0 时等价于不节流
#[derive(Debug, Clone)]
pub struct FixedIntervalGate {
    interval: Duration,
}

impl FixedIntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedIntervalGate {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl RateGatePort for FixedIntervalGate {
    async fn wait(&self) {
        tokio::time::sleep(self.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_is_one_second() {
        assert_eq!(FixedIntervalGate::default().interval(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_suspends_for_interval() {
        let gate = FixedIntervalGate::new(Duration::from_secs(1));

        let started = tokio::time::Instant::now();
        gate.wait().await;
        gate.wait().await;

        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
