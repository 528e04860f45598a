//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_sink;
mod rate_gate;
mod speech_engine;

pub use audio_sink::{AudioSinkPort, SinkError};
pub use rate_gate::RateGatePort;
pub use speech_engine::{
    SpeechEnginePort, SpeechError, SynthesisRequest, SynthesisResponse, VoiceDescriptor,
};
