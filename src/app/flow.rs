//! End-to-end generation flow shared by the HTTP endpoint and the CLI.

use serde::Deserialize;

use crate::app::AppContext;
use crate::domain::{AppError, GenerationParameters, PipelinePlan, PortfolioCode};
use crate::ports::{Pacer, TextGenerator, UsageRecord};
use crate::services::{Assembler, PipelineRunner, Refiner};

/// Inbound request for one pipeline invocation.
#[derive(Debug, Deserialize)]
pub struct PipelineRequest {
    /// Parameters substituted into prompts and skeleton slots.
    #[serde(flatten)]
    pub params: GenerationParameters,
    /// Pipeline preset name; defaults to `portfolio`.
    #[serde(default)]
    pub pipeline: Option<String>,
    /// Override the plan's refinement default.
    #[serde(default)]
    pub refine: Option<bool>,
}

impl Default for PipelineRequest {
    fn default() -> Self {
        Self { params: GenerationParameters::default(), pipeline: None, refine: None }
    }
}

/// Everything one successful flow produces.
#[derive(Debug)]
pub struct FlowOutput {
    /// Per-section sanitized fragments.
    pub portfolio_code: PortfolioCode,
    /// The assembled (and possibly refined) composite artifact.
    pub complete_code: String,
    /// One usage entry per backend call made, in call order.
    pub token_track: Vec<UsageRecord>,
}

/// Run the full pipeline: generate every section, assemble, and optionally
/// refine. All-or-nothing: any backend error discards the partial result.
pub fn execute<G: TextGenerator, P: Pacer>(
    ctx: &AppContext<G, P>,
    request: PipelineRequest,
) -> Result<FlowOutput, AppError> {
    let plan = match request.pipeline.as_deref() {
        Some(name) => PipelinePlan::by_name(name)?,
        None => PipelinePlan::portfolio(),
    };
    let refine = request.refine.unwrap_or_else(|| plan.refines_by_default());

    let mut runner = PipelineRunner::new(ctx.generator(), ctx.pacer(), ctx.model());
    let mut outcome = runner.run(&plan, &request.params)?;

    let assembler = Assembler::new();
    let mut complete_code = assembler.assemble(&plan, &outcome.code, &request.params);

    if refine {
        let refiner = Refiner::new(ctx.generator(), ctx.model(), plan.refine_options());
        let refined = refiner.refine(&complete_code)?;
        if let Some(record) = refined.usage {
            outcome.usage.push(record);
        }
        complete_code = refined.text;
    }

    Ok(FlowOutput { portfolio_code: outcome.code, complete_code, token_track: outcome.usage })
}
