mod assembler;
mod backend_http;
mod catalog;
mod orchestrator;
mod refiner;

pub use assembler::{Assembler, LayoutIntrospector, RegexIntrospector, WrapperShell};
pub use backend_http::HttpTextGenerator;
pub use catalog::PromptCatalog;
pub use orchestrator::{PipelineRunner, RunOutcome, RunState};
pub use refiner::Refiner;
