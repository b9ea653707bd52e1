//! Prompt catalog: section id to parameterized prompt text.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, GenerationParameters, PlanKind, SectionId};

/// Resolves the prompt sent to the backend for one section.
///
/// Resolution is total: a section without a dedicated template receives a
/// synthesized generic prompt embedding the id and the parameters verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptCatalog;

impl PromptCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        kind: PlanKind,
        section: &SectionId,
        params: &GenerationParameters,
    ) -> Result<String, AppError> {
        match template_for(kind, section.as_str()) {
            Some(template) => render(section.as_str(), template, params),
            None => Ok(fallback_prompt(section, params)),
        }
    }
}

fn fallback_prompt(section: &SectionId, params: &GenerationParameters) -> String {
    format!(
        "Generate the {} section code for a {} portfolio page for {} ({}) using {}. \
         Return ONLY the code for this section, nothing else.",
        section, params.technology, params.user_name, params.title, params.styling
    )
}

fn render(name: &str, template: &str, params: &GenerationParameters) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, params)
        .map_err(|err| AppError::Template { name: name.to_string(), reason: err.to_string() })
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_for(kind: PlanKind, section: &str) -> Option<&'static str> {
    match kind {
        PlanKind::Portfolio => portfolio_template(section),
        PlanKind::Landing => landing_template(section),
    }
}

fn portfolio_template(section: &str) -> Option<&'static str> {
    let template = match section {
        "imports" => {
            "Generate ONLY the import statements section for a {{ technology }} portfolio page \
             using {{ styling }}. Include all necessary imports for a modern portfolio including \
             React, icons (react-icons), and any other essential libraries. Do not include any \
             component code or explanations, just the import statements.\n\n\
             Return ONLY the import code, nothing else. The code should be directly usable in a \
             React component."
        }
        "header" => {
            "Generate ONLY the header/hero section code for a {{ technology }} portfolio using \
             {{ styling }}. This is the top part of the portfolio for {{ userName }}, a \
             {{ title }}. It includes the name, the title, a brief introduction, and potentially \
             a profile picture placeholder and social links. Use {{ accentColor }} as the accent \
             color.\n\n\
             Return ONLY the JSX code for the header section with {{ styling }} styling, nothing \
             else. Do not include imports or the full component structure."
        }
        "about" => {
            "Generate ONLY the \"About Me\" section code for a {{ technology }} portfolio using \
             {{ styling }}. The person is {{ userName }}, {{ title }}: {{ description }}. Include \
             a section title, paragraphs about the person, and appropriate styling.\n\n\
             Return ONLY the JSX code for the About section with {{ styling }} styling, nothing \
             else. Do not include imports or the full component structure."
        }
        "experience" => {
            "Generate ONLY the \"Work Experience\" section code for a {{ technology }} portfolio \
             using {{ styling }}. Create a component that displays work history in a visually \
             appealing way.\n\n\
             Return ONLY the JSX code for the Experience section with {{ styling }} styling, \
             nothing else. If specific experience details aren't provided, generate reasonable \
             placeholder experience items for a {{ title }}. Do not include imports or the full \
             component structure."
        }
        "skills" => {
            "Generate ONLY the \"Skills\" section code for a {{ technology }} portfolio using \
             {{ styling }}. Create a component that displays technical skills in an organized, \
             visually appealing way.\n\n\
             Return ONLY the JSX code for the Skills section with {{ styling }} styling, nothing \
             else. If specific skills aren't provided, generate reasonable skills based on the \
             title {{ title }} and this description: {{ description }}. Do not include imports or \
             the full component structure."
        }
        "projects" => {
            "Generate ONLY the \"Projects\" section code for a {{ technology }} portfolio using \
             {{ styling }}. Create a component that displays projects in a responsive grid or \
             list with filtering capability.\n\n\
             Return ONLY the JSX code for the Projects section with {{ styling }} styling, \
             nothing else. Include state management for filtering projects by category. If \
             specific projects aren't provided, generate reasonable placeholder projects. Do not \
             include imports or the full component structure."
        }
        "contact" => {
            "Generate ONLY the \"Contact\" section code for a {{ technology }} portfolio using \
             {{ styling }}. Create a component with a contact form and additional contact \
             information for {{ userName }}.\n\n\
             Return ONLY the JSX code for the Contact section with {{ styling }} styling, nothing \
             else. Do not include imports or the full component structure."
        }
        "footer" => {
            "Generate ONLY the footer section code for a {{ technology }} portfolio using \
             {{ styling }}. Create a simple, elegant footer with copyright information for \
             {{ userName }} and possibly additional links.\n\n\
             Return ONLY the JSX code for the Footer section with {{ styling }} styling, nothing \
             else. Do not include imports or the full component structure."
        }
        "layout" => {
            "Generate ONLY the main component structure that combines all sections of a \
             {{ technology }} portfolio. This should create the layout that incorporates all the \
             individual sections (header, about, experience, skills, projects, contact, \
             footer).\n\n\
             Return ONLY the main component structure with the component function declaration \
             and return statement that incorporates all sections. Include any necessary state \
             management at the component level, but do not include the actual code for the \
             individual sections. Add navigation if appropriate."
        }
        _ => return None,
    };
    Some(template)
}

fn landing_template(section: &str) -> Option<&'static str> {
    let template = match section {
        "imports" => {
            "Generate ONLY the import statements for a single-file {{ technology }} landing page \
             using {{ styling }}. Do not include any component code or explanations, just the \
             import statements.\n\n\
             Return ONLY the import code, nothing else."
        }
        "header" => {
            "Generate ONLY the hero/header JSX for a landing page for {{ userName }} \
             ({{ title }}) using {{ styling }}. Use {{ accentColor }} as the accent color.\n\n\
             Return ONLY the JSX code, nothing else. Do not include imports or the full \
             component structure."
        }
        "mainBody" => {
            "Generate ONLY the main body JSX for a sophisticated, modern landing page for \
             {{ userName }}, {{ title }}: {{ description }}. Use {{ styling }} with a fresh \
             layout and {{ accentColor }} accents. Output only the final code without any extra \
             explanation. Do not use comments. Do not include imports or the full component \
             structure."
        }
        _ => return None,
    };
    Some(template)
}
