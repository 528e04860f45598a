//! Voice Context - 语音参数管理

mod value_objects;

pub use value_objects::VoiceSettings;
