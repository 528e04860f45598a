//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod sink;
pub mod throttle;
pub mod tts;

pub use sink::*;
pub use throttle::*;
pub use tts::*;
