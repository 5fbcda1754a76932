//! Print-control stylesheet generation.
//!
//! A [`PrintStylesheet`] has two independent blocks:
//!
//! - the **page-size block**, a single `@page` rule with the exact paper size
//!   (orientation already applied) and the four margins;
//! - the **print-mode block**, an `@media print` block that hides everything
//!   except the badge container, sizes each badge cell, and puts one cell per
//!   sheet.
//!
//! Both blocks are built from one call to
//! [`paper_dimensions`](crate::layout::paper_dimensions) so the preview and the
//! printout cannot disagree.
//!
//! The badge container may sit anywhere in the document. Only elements that are
//! neither inside the container nor one of its ancestors are hidden.
//!
//! Print engines take the orientation from the `@page` size, whose lengths are
//! already swapped for landscape; CSS does not allow an explicit size and a
//! `portrait`/`landscape` keyword together. The print-mode block also declares
//! the orientation as the `--badge-paper-orientation` custom property on the
//! container. No engine acts on it; it is there for host styles that lay out
//! the badge preview.

use crate::config::PaperSizeConfiguration;
use crate::layout::{paper_dimensions, Margins, PaperDimensions};
use crate::units::Mm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved identifiers shared by the generated CSS and the host document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSelectors {
    /// `id` of the injected `<style>` element
    pub style_id: String,
    /// `id` of the element holding every badge cell
    pub container_id: String,
    /// class of each badge cell
    pub badge_class: String,
    /// class of elements that must never be printed
    pub no_print_class: String,
}

impl Default for StyleSelectors {
    fn default() -> Self {
        StyleSelectors {
            style_id: "badge-print-styles".to_string(),
            container_id: "badge-print-container".to_string(),
            badge_class: "badge-print-item".to_string(),
            no_print_class: "no-print".to_string(),
        }
    }
}

/// One CSS rule: a selector (or at-rule prelude) and its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<(&'static str, String)>,
}

impl CssRule {
    fn new<S: ToString>(selector: S) -> CssRule {
        CssRule {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    fn declare<V: ToString>(mut self, property: &'static str, value: V) -> CssRule {
        self.declarations.push((property, value.to_string()));
        self
    }

    /// The value of the first declaration of `property`
    pub fn value(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this rule removes its targets from the printout
    pub fn hides(&self) -> bool {
        self.value("display")
            .is_some_and(|v| v.starts_with("none"))
            || self
                .value("visibility")
                .is_some_and(|v| v.starts_with("hidden"))
    }
}

/// Writes the rule as CSS. The alternate form (`{:#}`) indents it one level,
/// for nesting inside an at-rule block.
impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { "  " } else { "" };
        writeln!(f, "{indent}{} {{", self.selector)?;
        for (property, value) in &self.declarations {
            writeln!(f, "{indent}  {property}: {value};")?;
        }
        writeln!(f, "{indent}}}")
    }
}

struct PrintModeBlock<'a>(&'a [CssRule]);

impl fmt::Display for PrintModeBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@media print {{")?;
        for rule in self.0 {
            write!(f, "{rule:#}")?;
        }
        writeln!(f, "}}")
    }
}

/// Generated print-control CSS for one configuration and badge size.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStylesheet {
    pub page_size: CssRule,
    pub print_mode: Vec<CssRule>,
}

impl PrintStylesheet {
    /// Build the stylesheet with the default [`StyleSelectors`].
    ///
    /// ```
    /// use badge_print::{Margins, Mm, PaperSizeConfiguration, PaperSizeType, PrintStylesheet};
    ///
    /// let config = PaperSizeConfiguration::new(PaperSizeType::A4).with_margins(Margins::all(10.0));
    /// let css = PrintStylesheet::generate(&config, Mm(85.6), Mm(53.98)).to_css();
    /// assert!(css.contains("size: 210mm 297mm;"));
    /// assert!(css.contains("width: 85.6mm;"));
    /// ```
    pub fn generate(
        config: &PaperSizeConfiguration,
        badge_width: Mm,
        badge_height: Mm,
    ) -> PrintStylesheet {
        PrintStylesheet::generate_with(config, badge_width, badge_height, &StyleSelectors::default())
    }

    /// Build the stylesheet for a host that uses its own reserved identifiers
    pub fn generate_with(
        config: &PaperSizeConfiguration,
        badge_width: Mm,
        badge_height: Mm,
        selectors: &StyleSelectors,
    ) -> PrintStylesheet {
        let paper = paper_dimensions(config);
        PrintStylesheet {
            page_size: page_size_rule(&paper, &config.margins),
            print_mode: print_mode_rules(config, badge_width, badge_height, selectors),
        }
    }

    /// The `@page` block
    pub fn page_size_css(&self) -> String {
        self.page_size.to_string()
    }

    /// The `@media print` block
    pub fn print_mode_css(&self) -> String {
        PrintModeBlock(&self.print_mode).to_string()
    }

    /// Both blocks, ready to drop into a `<style>` element
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Selectors of every print-mode rule that hides its targets
    pub fn hidden_selectors(&self) -> impl Iterator<Item = &str> {
        self.print_mode
            .iter()
            .filter(|rule| rule.hides())
            .map(|rule| rule.selector.as_str())
    }
}

impl fmt::Display for PrintStylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.page_size, PrintModeBlock(&self.print_mode))
    }
}

fn page_size_rule(paper: &PaperDimensions, margins: &Margins) -> CssRule {
    CssRule::new("@page")
        .declare("size", format!("{} {}", paper.width, paper.height))
        .declare("margin-top", margins.top)
        .declare("margin-right", margins.right)
        .declare("margin-bottom", margins.bottom)
        .declare("margin-left", margins.left)
}

fn print_mode_rules(
    config: &PaperSizeConfiguration,
    badge_width: Mm,
    badge_height: Mm,
    selectors: &StyleSelectors,
) -> Vec<CssRule> {
    let container = format!("#{}", selectors.container_id);
    let badge = format!(".{}", selectors.badge_class);

    vec![
        // everything outside the container, except the container's ancestors
        CssRule::new(format!(
            "body *:not({container}):not({container} *):not(:has({container}))"
        ))
        .declare("display", "none !important"),
        CssRule::new(format!(".{}", selectors.no_print_class))
            .declare("display", "none !important"),
        CssRule::new("html, body")
            .declare("margin", 0)
            .declare("padding", 0)
            .declare("background", "white"),
        CssRule::new(&container)
            .declare("display", "block")
            .declare("margin", 0)
            .declare("padding", 0)
            .declare("--badge-paper-orientation", config.orientation.keyword()),
        CssRule::new(&badge)
            .declare("width", badge_width)
            .declare("height", badge_height)
            .declare("overflow", "hidden")
            .declare("break-inside", "avoid")
            .declare("page-break-inside", "avoid")
            .declare("break-after", "page")
            .declare("page-break-after", "always"),
        CssRule::new(format!("{badge}:last-child"))
            .declare("break-after", "auto")
            .declare("page-break-after", "auto"),
    ]
}
