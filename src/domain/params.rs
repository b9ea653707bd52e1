//! User-supplied generation parameters.

use serde::{Deserialize, Serialize};

/// Free-form inputs substituted into prompt templates and skeleton slots.
///
/// Every field has a default, so an empty request body still generates; the
/// intake form fields beyond name/title/description come from the portfolio
/// builder's parameter panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationParameters {
    /// Name shown in the skeleton slots and woven into prompts.
    pub user_name: String,
    /// Professional title.
    pub title: String,
    /// Short free-form description of the person or project.
    pub description: String,
    /// Accent color requested for the generated design.
    pub accent_color: String,
    /// Target component framework.
    pub technology: String,
    /// Styling method the generated code should use.
    pub styling: String,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            user_name: "Developer".to_string(),
            title: "Full-Stack Developer".to_string(),
            description: "A passionate web developer".to_string(),
            accent_color: "blue".to_string(),
            technology: "React".to_string(),
            styling: "Tailwind CSS".to_string(),
        }
    }
}
