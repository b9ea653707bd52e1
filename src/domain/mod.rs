pub mod config;
pub mod error;
pub mod params;
pub mod plan;
pub mod sanitize;
pub mod section;

pub use config::{API_KEY_ENV, BackendConfig, FolioConfig};
pub use error::AppError;
pub use params::GenerationParameters;
pub use plan::{ModelOptions, PipelinePlan, PlanKind};
pub use sanitize::extract_code;
pub use section::{PortfolioCode, SectionId};
