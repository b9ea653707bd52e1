//! Deterministic weaving of section fragments into one composite document.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{GenerationParameters, PipelinePlan, PlanKind, PortfolioCode, SectionId};

const IMPORTS: &str = "imports";
const LAYOUT: &str = "layout";
const DEFAULT_WRAPPER_OPEN: &str = "<div className=\"min-h-screen bg-gray-50\">";

/// Top-level wrapper element lifted from a generated layout fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperShell {
    /// Opening tag, e.g. `<div className="...">`.
    pub open: String,
}

/// Best-effort structural introspection on a generated layout fragment.
///
/// Implementations must never fail: when no structure is recognized the
/// assembler falls back to its default wrapper. A stricter parser can be
/// swapped in without touching the assembly contract.
pub trait LayoutIntrospector {
    /// State-declaration statements to lift to the top of the component.
    fn state_declarations(&self, layout: &str) -> Vec<String>;

    /// Top-level wrapping container, if one is recognized.
    fn wrapper(&self, layout: &str) -> Option<WrapperShell>;
}

/// Regex-based introspector matching `useState` declarations and a top-level
/// `<div>` wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexIntrospector;

impl LayoutIntrospector for RegexIntrospector {
    fn state_declarations(&self, layout: &str) -> Vec<String> {
        state_pattern().find_iter(layout).map(|m| m.as_str().to_string()).collect()
    }

    fn wrapper(&self, layout: &str) -> Option<WrapperShell> {
        let captures = wrapper_pattern().captures(layout)?;
        Some(WrapperShell { open: captures.get(1)?.as_str().to_string() })
    }
}

fn state_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"const \[\w+, set\w+\] = useState\([^;]*\);")
            .expect("state pattern must compile")
    })
}

fn wrapper_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)(<div[^>]*>)(.*)</div>").expect("wrapper pattern must compile")
    })
}

/// Assembles the composite artifact from generated fragments.
///
/// Assembly is a pure function of the plan, the fragment map, and the
/// parameters: identical inputs yield byte-identical output. Sections absent
/// from the map are skipped without error.
pub struct Assembler {
    introspector: Box<dyn LayoutIntrospector>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self { introspector: Box::new(RegexIntrospector) }
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the layout introspection strategy.
    pub fn with_introspector(introspector: Box<dyn LayoutIntrospector>) -> Self {
        Self { introspector }
    }

    pub fn assemble(
        &self,
        plan: &PipelinePlan,
        code: &PortfolioCode,
        params: &GenerationParameters,
    ) -> String {
        match plan.kind() {
            PlanKind::Portfolio => self.assemble_portfolio(plan, code, params),
            PlanKind::Landing => self.assemble_landing(plan, code, params),
        }
    }

    fn assemble_portfolio(
        &self,
        plan: &PipelinePlan,
        code: &PortfolioCode,
        params: &GenerationParameters,
    ) -> String {
        let mut out = String::new();

        if let Some(imports) = code.get(&SectionId::fixed(IMPORTS)) {
            out.push_str(imports);
        }

        out.push_str(&format!(
            "\n\n// Portfolio of {}, {}\nexport default function Portfolio() {{\n",
            params.user_name, params.title
        ));

        let layout = code.get(&SectionId::fixed(LAYOUT)).unwrap_or("");

        let states = self.introspector.state_declarations(layout);
        if !states.is_empty() {
            out.push_str("\n  // State management\n");
            for statement in &states {
                out.push_str("  ");
                out.push_str(statement);
                out.push('\n');
            }
        }

        out.push_str("\n  return (\n");

        let wrapper_open = self
            .introspector
            .wrapper(layout)
            .map(|shell| shell.open)
            .unwrap_or_else(|| DEFAULT_WRAPPER_OPEN.to_string());
        out.push_str("    ");
        out.push_str(&wrapper_open);
        out.push_str("\n      {/* Portfolio Sections */}\n");

        for section in plan.sections() {
            if section.as_str() == IMPORTS || section.as_str() == LAYOUT {
                continue;
            }
            let Some(fragment) = code.get(section) else { continue };
            push_section(&mut out, section, fragment);
        }

        out.push_str("    </div>\n  );\n}\n");
        out
    }

    fn assemble_landing(
        &self,
        plan: &PipelinePlan,
        code: &PortfolioCode,
        params: &GenerationParameters,
    ) -> String {
        let mut out = String::new();

        if let Some(imports) = code.get(&SectionId::fixed(IMPORTS)) {
            out.push_str(imports);
        }

        out.push_str(&format!(
            "\n\n// Landing page for {}, {}\nexport default function LandingPage() {{\n  return (\n",
            params.user_name, params.title
        ));
        out.push_str("    <main className=\"min-h-screen\">\n");

        for section in plan.sections() {
            if section.as_str() == IMPORTS {
                continue;
            }
            let Some(fragment) = code.get(section) else { continue };
            push_section(&mut out, section, fragment);
        }

        out.push_str("    </main>\n  );\n}\n");
        out
    }
}

fn push_section(out: &mut String, section: &SectionId, fragment: &str) {
    out.push_str(&format!("\n      {{/* {} Section */}}\n", capitalize(section.as_str())));
    for line in fragment.lines() {
        out.push_str("      ");
        out.push_str(line);
        out.push('\n');
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PipelinePlan;

    fn filled_portfolio_code() -> PortfolioCode {
        let mut code = PortfolioCode::new();
        let plan = PipelinePlan::portfolio();
        for section in plan.sections() {
            code.insert(section.clone(), format!("<section id=\"{}\" />", section));
        }
        code
    }

    #[test]
    fn assemble_is_deterministic() {
        let assembler = Assembler::new();
        let plan = PipelinePlan::portfolio();
        let code = filled_portfolio_code();
        let params = GenerationParameters::default();

        let first = assembler.assemble(&plan, &code, &params);
        let second = assembler.assemble(&plan, &code, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn portfolio_skeleton_substitutes_parameters_into_slots_only() {
        let assembler = Assembler::new();
        let plan = PipelinePlan::portfolio();
        let code = filled_portfolio_code();
        let params = GenerationParameters {
            user_name: "Ada".to_string(),
            title: "Engineer".to_string(),
            ..Default::default()
        };

        let out = assembler.assemble(&plan, &code, &params);
        assert!(out.contains("// Portfolio of Ada, Engineer"));
        assert!(out.contains("export default function Portfolio() {"));
        // Fragments go in verbatim.
        assert!(out.contains("<section id=\"header\" />"));
        assert!(out.contains("{/* Header Section */}"));
    }

    #[test]
    fn missing_sections_are_skipped_and_order_is_preserved() {
        let assembler = Assembler::new();
        let plan = PipelinePlan::portfolio();
        let mut code = filled_portfolio_code();
        let mut without_skills = PortfolioCode::new();
        for (id, text) in code.iter() {
            if id.as_str() != "skills" {
                without_skills.insert(id.clone(), text.to_string());
            }
        }
        code = without_skills;

        let out = assembler.assemble(&plan, &code, &GenerationParameters::default());
        assert!(!out.contains("{/* Skills Section */}"));

        let positions: Vec<usize> = ["Header", "About", "Experience", "Projects", "Contact"]
            .iter()
            .map(|name| out.find(&format!("{{/* {} Section */}}", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn layout_state_and_wrapper_are_lifted() {
        let assembler = Assembler::new();
        let plan = PipelinePlan::portfolio();
        let mut code = filled_portfolio_code();
        code.insert(
            SectionId::fixed("layout"),
            concat!(
                "const [activeTab, setActiveTab] = useState('home');\n",
                "const [dark, setDark] = useState(false);\n",
                "<div className=\"custom-shell\">\n  <p>slots</p>\n</div>"
            )
            .to_string(),
        );

        let out = assembler.assemble(&plan, &code, &GenerationParameters::default());
        assert!(out.contains("const [activeTab, setActiveTab] = useState('home');"));
        assert!(out.contains("const [dark, setDark] = useState(false);"));
        assert!(out.contains("<div className=\"custom-shell\">"));
        assert!(!out.contains(DEFAULT_WRAPPER_OPEN));
        // The layout fragment itself is never inlined as a section.
        assert!(!out.contains("{/* Layout Section */}"));
    }

    #[test]
    fn unrecognized_layout_falls_back_to_default_wrapper() {
        let assembler = Assembler::new();
        let plan = PipelinePlan::portfolio();
        let mut code = filled_portfolio_code();
        code.insert(SectionId::fixed("layout"), "<span>no wrapper here</span>".to_string());

        let out = assembler.assemble(&plan, &code, &GenerationParameters::default());
        assert!(out.contains(DEFAULT_WRAPPER_OPEN));
        assert!(!out.contains("// State management"));
    }

    #[test]
    fn landing_skeleton_weaves_header_then_main_body() {
        let assembler = Assembler::new();
        let plan = PipelinePlan::landing();
        let mut code = PortfolioCode::new();
        code.insert(SectionId::fixed("imports"), "import React from 'react';".to_string());
        code.insert(SectionId::fixed("header"), "<header>Hero</header>".to_string());
        code.insert(SectionId::fixed("mainBody"), "<section>Body</section>".to_string());

        let params = GenerationParameters {
            user_name: "Ada".to_string(),
            title: "Engineer".to_string(),
            ..Default::default()
        };
        let out = assembler.assemble(&plan, &code, &params);

        assert!(out.starts_with("import React from 'react';"));
        assert!(out.contains("// Landing page for Ada, Engineer"));
        let header_at = out.find("<header>Hero</header>").unwrap();
        let body_at = out.find("<section>Body</section>").unwrap();
        assert!(header_at < body_at);
    }

    #[test]
    fn introspection_strategy_can_be_swapped() {
        struct FixedShell;

        impl LayoutIntrospector for FixedShell {
            fn state_declarations(&self, _layout: &str) -> Vec<String> {
                vec!["const [open, setOpen] = useState(false);".to_string()]
            }

            fn wrapper(&self, _layout: &str) -> Option<WrapperShell> {
                Some(WrapperShell { open: "<div id=\"shell\">".to_string() })
            }
        }

        let assembler = Assembler::with_introspector(Box::new(FixedShell));
        let out = assembler.assemble(
            &PipelinePlan::portfolio(),
            &filled_portfolio_code(),
            &GenerationParameters::default(),
        );

        assert!(out.contains("const [open, setOpen] = useState(false);"));
        assert!(out.contains("<div id=\"shell\">"));
    }

    #[test]
    fn empty_code_still_produces_a_well_formed_shell() {
        let assembler = Assembler::new();
        let out = assembler.assemble(
            &PipelinePlan::portfolio(),
            &PortfolioCode::new(),
            &GenerationParameters::default(),
        );

        assert!(out.contains("export default function Portfolio() {"));
        assert!(out.contains(DEFAULT_WRAPPER_OPEN));
        assert!(out.ends_with("  );\n}\n"));
    }
}
