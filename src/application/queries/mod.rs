//! Application Queries - 只读查询

mod voice_queries;

pub use voice_queries::voices_for_language;
