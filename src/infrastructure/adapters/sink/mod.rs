//! Sink Adapter - 音频落盘实现

mod file_sink;

pub use file_sink::FileAudioSink;
