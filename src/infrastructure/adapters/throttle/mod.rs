//! Throttle Adapter - 请求节流实现

mod fixed_interval;

pub use fixed_interval::FixedIntervalGate;
