mod pacer;
mod text_generator;

pub use pacer::{NoopPacer, Pacer, SleepPacer};
pub use text_generator::{GeneratedText, GenerationRequest, TextGenerator, UsageRecord};
