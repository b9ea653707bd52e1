//! Sequential section-by-section pipeline driver.

use crate::domain::{AppError, GenerationParameters, PipelinePlan, PortfolioCode, extract_code};
use crate::ports::{GenerationRequest, Pacer, TextGenerator, UsageRecord};
use crate::services::PromptCatalog;

/// Run progress, one state per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    /// Currently generating the section at this plan index.
    Generating(usize),
    Completed,
    Failed,
}

/// Everything a completed run produces.
#[derive(Debug)]
pub struct RunOutcome {
    /// Sanitized fragment per section, in plan order.
    pub code: PortfolioCode,
    /// Token counts, one entry per backend call in call order.
    pub usage: Vec<UsageRecord>,
}

/// Drives one pipeline run: for each section in plan order, pace, resolve the
/// prompt, call the backend, sanitize, and store the fragment.
///
/// Sections are generated strictly sequentially; the first backend error
/// aborts the run and the partial map is dropped rather than surfaced. There
/// is no retry and no cancellation.
pub struct PipelineRunner<'a> {
    generator: &'a dyn TextGenerator,
    pacer: &'a dyn Pacer,
    model: String,
    catalog: PromptCatalog,
    state: RunState,
}

impl<'a> PipelineRunner<'a> {
    pub fn new(generator: &'a dyn TextGenerator, pacer: &'a dyn Pacer, model: &str) -> Self {
        Self {
            generator,
            pacer,
            model: model.to_string(),
            catalog: PromptCatalog::new(),
            state: RunState::Idle,
        }
    }

    /// Current run state, observable for tests and progress reporting.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Generate every section of the plan in order.
    pub fn run(
        &mut self,
        plan: &PipelinePlan,
        params: &GenerationParameters,
    ) -> Result<RunOutcome, AppError> {
        let mut code = PortfolioCode::new();
        let mut usage = Vec::new();

        match self.execute(plan, params, &mut code, &mut usage) {
            Ok(()) => {
                self.state = RunState::Completed;
                Ok(RunOutcome { code, usage })
            }
            Err(err) => {
                self.state = RunState::Failed;
                Err(err)
            }
        }
    }

    fn execute(
        &mut self,
        plan: &PipelinePlan,
        params: &GenerationParameters,
        code: &mut PortfolioCode,
        usage: &mut Vec<UsageRecord>,
    ) -> Result<(), AppError> {
        let options = plan.section_options();

        for (index, section) in plan.sections().iter().enumerate() {
            self.state = RunState::Generating(index);

            // Pacing applies between calls, never before the first one.
            if index > 0 {
                self.pacer.pause(plan.pacing());
            }

            let prompt = self.catalog.resolve(plan.kind(), section, params)?;
            let request = GenerationRequest {
                prompt,
                system: None,
                model: self.model.clone(),
                max_tokens: options.max_tokens,
                temperature: options.temperature,
            };

            let reply = self.generator.generate(&request)?;
            if let Some(record) = reply.usage {
                usage.push(record);
            }
            code.insert(section.clone(), extract_code(&reply.text));
        }

        Ok(())
    }
}
