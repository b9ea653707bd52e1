//! Named pipeline plans: ordered sections, pacing, and model options.

use std::time::Duration;

use crate::domain::{AppError, SectionId};

/// Output-length and sampling options fixed per call site.
#[derive(Debug, Clone, Copy)]
pub struct ModelOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Built-in pipeline preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    /// Nine-section portfolio page.
    Portfolio,
    /// Three-section landing page.
    Landing,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Portfolio => "portfolio",
            PlanKind::Landing => "landing",
        }
    }
}

/// One named pipeline configuration.
///
/// The section order defines both the generation sequence and the assembly
/// position of every fragment. Pacing is data on the plan rather than a
/// constant baked into the orchestrator.
#[derive(Debug, Clone)]
pub struct PipelinePlan {
    kind: PlanKind,
    sections: Vec<SectionId>,
    pacing: Duration,
    section_options: ModelOptions,
    refine_options: ModelOptions,
    refine_by_default: bool,
}

impl PipelinePlan {
    /// The nine-section portfolio pipeline.
    pub fn portfolio() -> Self {
        Self {
            kind: PlanKind::Portfolio,
            sections: section_ids(&[
                "imports",
                "header",
                "about",
                "experience",
                "skills",
                "projects",
                "contact",
                "footer",
                "layout",
            ]),
            pacing: Duration::from_millis(500),
            section_options: ModelOptions { max_tokens: 1500, temperature: 0.7 },
            refine_options: ModelOptions { max_tokens: 3000, temperature: 0.2 },
            refine_by_default: false,
        }
    }

    /// The three-section landing-page pipeline.
    pub fn landing() -> Self {
        Self {
            kind: PlanKind::Landing,
            sections: section_ids(&["imports", "header", "mainBody"]),
            pacing: Duration::from_millis(800),
            section_options: ModelOptions { max_tokens: 3000, temperature: 0.8 },
            refine_options: ModelOptions { max_tokens: 3000, temperature: 0.2 },
            refine_by_default: true,
        }
    }

    /// Look up a preset by its wire name.
    pub fn by_name(name: &str) -> Result<Self, AppError> {
        match name {
            "portfolio" => Ok(Self::portfolio()),
            "landing" => Ok(Self::landing()),
            other => Err(AppError::InvalidRequest(format!(
                "Unknown pipeline '{}': expected 'portfolio' or 'landing'",
                other
            ))),
        }
    }

    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Fixed wait inserted between consecutive backend calls.
    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub fn section_options(&self) -> ModelOptions {
        self.section_options
    }

    pub fn refine_options(&self) -> ModelOptions {
        self.refine_options
    }

    /// Whether the refinement pass runs when the request does not say.
    pub fn refines_by_default(&self) -> bool {
        self.refine_by_default
    }
}

fn section_ids(ids: &[&'static str]) -> Vec<SectionId> {
    ids.iter().map(|id| SectionId::fixed(id)).collect()
}
