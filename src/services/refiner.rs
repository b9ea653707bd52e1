//! Whole-document refinement pass.

use crate::domain::{AppError, ModelOptions, extract_code};
use crate::ports::{GeneratedText, GenerationRequest, TextGenerator};

const REFINE_SYSTEM: &str = "You are cleaning up a single generated React component. Remove \
                             redundancy, duplicate imports, and dead code without changing \
                             behavior or adding commentary. Output only the final code.";

/// Optional second pass that feeds the assembled document back through the
/// backend for cleanup. A backend failure here is the flow's failure; there
/// is no silent fallback to the unrefined document.
pub struct Refiner<'a> {
    generator: &'a dyn TextGenerator,
    model: &'a str,
    options: ModelOptions,
}

impl<'a> Refiner<'a> {
    pub fn new(generator: &'a dyn TextGenerator, model: &'a str, options: ModelOptions) -> Self {
        Self { generator, model, options }
    }

    /// Refine the composite document; the reply is fence-stripped like any
    /// other backend response.
    pub fn refine(&self, composite: &str) -> Result<GeneratedText, AppError> {
        let request = GenerationRequest {
            prompt: composite.to_string(),
            system: Some(REFINE_SYSTEM.to_string()),
            model: self.model.to_string(),
            max_tokens: self.options.max_tokens,
            temperature: self.options.temperature,
        };

        let reply = self.generator.generate(&request)?;
        Ok(GeneratedText { text: extract_code(&reply.text), usage: reply.usage })
    }
}
