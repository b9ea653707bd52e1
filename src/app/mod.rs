pub mod api;
pub mod context;
pub mod flow;

pub use context::AppContext;
