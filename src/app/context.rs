use crate::ports::{Pacer, TextGenerator};

/// Application context holding the injected backend and pacing dependencies.
///
/// Constructed once at process start; each pipeline run borrows it, so runs
/// share nothing mutable with each other.
pub struct AppContext<G: TextGenerator, P: Pacer> {
    generator: G,
    pacer: P,
    model: String,
}

impl<G: TextGenerator, P: Pacer> AppContext<G, P> {
    /// Create a new application context.
    pub fn new(generator: G, pacer: P, model: impl Into<String>) -> Self {
        Self { generator, pacer, model: model.into() }
    }

    /// Get a reference to the text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the pacer.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Model identifier used for every backend call.
    pub fn model(&self) -> &str {
        &self.model
    }
}
