//! The seams between the print engine and the document it runs in.
//!
//! A browser front end implements these over the DOM; tests implement them
//! over a plain in-memory document.

use crate::error::ProbeError;
use crate::units::{Mm, Px};

/// Document operations the [`PrintController`](crate::PrintController) needs.
pub trait PrintHost {
    /// Whether the host has a native print action at all
    fn supports_print(&self) -> bool;

    /// Whether an element with this `id` exists in the document
    fn has_element(&self, id: &str) -> bool;

    /// Whether a `<style>` element with this `id` exists in the document
    fn has_style(&self, id: &str) -> bool;

    /// Append a `<style>` element with this `id` and contents
    fn insert_style(&mut self, id: &str, css: &str);

    /// Remove every `<style>` element with this `id`, returning whether any existed
    fn remove_style(&mut self, id: &str) -> bool;

    /// Open the native print dialog. Returns straight away; the dialog's outcome
    /// is never reported back.
    fn print(&mut self);
}

/// Best-effort questions about the rendering engine, answered with a throwaway
/// trial element.
pub trait CapabilityProbe {
    /// Render a hidden trial element whose width is declared as `width` in
    /// physical units, measure it, and remove it again. `Ok(None)` means the
    /// host could not lay the element out.
    fn measure_trial_element(&mut self, width: Mm) -> Result<Option<Px>, ProbeError>;

    /// The host's user agent string, if it has one
    fn user_agent(&self) -> Option<String>;
}

/// Rendering engine family, used to phrase manual paper-size instructions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HostEngine {
    Chromium,
    Edge,
    Firefox,
    Safari,
    Unknown,
}

impl HostEngine {
    /// Identify the engine from a user agent string. Order matters: Edge and
    /// Chrome both claim to be Safari.
    pub fn from_user_agent(user_agent: &str) -> HostEngine {
        if user_agent.contains("Edg/") || user_agent.contains("Edge/") {
            HostEngine::Edge
        } else if user_agent.contains("Firefox/") {
            HostEngine::Firefox
        } else if user_agent.contains("Chrome/") || user_agent.contains("Chromium/") {
            HostEngine::Chromium
        } else if user_agent.contains("Safari/") {
            HostEngine::Safari
        } else {
            HostEngine::Unknown
        }
    }

    /// Instructions for setting the paper size by hand in this engine's print dialog
    pub fn paper_size_hint(self, width: Mm, height: Mm) -> String {
        let size = format!("{width} × {height}");
        match self {
            HostEngine::Chromium => format!(
                "In the print dialog, open \"More settings\", set \"Paper size\" to {size} and \"Margins\" to \"None\"."
            ),
            HostEngine::Edge => format!(
                "In the print dialog, open \"More settings\", set \"Paper size\" to {size} and \"Margins\" to \"None\"; set \"Scale\" to 100."
            ),
            HostEngine::Firefox => format!(
                "In the print dialog, choose \"More settings\", set \"Paper size\" to {size}, \"Scale\" to 100 and \"Margins\" to \"None\"."
            ),
            HostEngine::Safari => format!(
                "In the print dialog, click \"Show Details\", choose \"Manage Custom Sizes…\" to add {size}, and set \"Scale\" to 100%."
            ),
            HostEngine::Unknown => format!(
                "Set the paper size to {size}, scaling to 100% and margins to none in your print settings."
            ),
        }
    }
}
