//! foliogen: generate multi-section portfolio pages through a generative
//! text backend.
//!
//! The crate is laid out hexagonally: pure types in [`domain`], trait ports
//! in [`ports`], concrete services (prompt catalog, HTTP backend adapter,
//! orchestrator, assembler, refiner) in [`services`], and the wired-up HTTP
//! endpoint and flow in [`app`].

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::AppContext;
pub use app::api::{ApiResponse, dispatch, serve};
pub use app::flow::{FlowOutput, PipelineRequest, execute};
pub use domain::{
    API_KEY_ENV, AppError, BackendConfig, FolioConfig, GenerationParameters, PipelinePlan,
    PlanKind, PortfolioCode, SectionId, extract_code,
};
pub use ports::{
    GeneratedText, GenerationRequest, NoopPacer, Pacer, SleepPacer, TextGenerator, UsageRecord,
};
pub use services::{Assembler, HttpTextGenerator, PipelineRunner, PromptCatalog, Refiner, RunState};
