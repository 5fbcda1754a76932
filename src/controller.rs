use crate::config::PaperSizeConfiguration;
use crate::error::PrintError;
use crate::host::{CapabilityProbe, PrintHost};
use crate::layout::paper_dimensions;
use crate::probe;
use crate::stylesheet::{PrintStylesheet, StyleSelectors};
use crate::units::Mm;
use log::{debug, info, warn};

/// Outcome of a print attempt, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintResult {
    pub success: bool,
    pub error: Option<String>,
}

impl PrintResult {
    pub fn ok() -> PrintResult {
        PrintResult {
            success: true,
            error: None,
        }
    }
}

impl From<PrintError> for PrintResult {
    fn from(e: PrintError) -> Self {
        PrintResult {
            success: false,
            error: Some(e.to_string()),
        }
    }
}

/// Owns the one live print stylesheet in a host document and triggers printing.
///
/// There is never more than one stylesheet under the reserved id: injecting
/// again removes the previous one first. A stylesheet is left in place after
/// [`print_with_configuration`](PrintController::print_with_configuration)
/// returns, because the native print dialog is still using it; it goes away on
/// the next injection (from this or any later controller on the same document),
/// on [`remove_print_styles`](PrintController::remove_print_styles), or with the
/// page itself. Dropping the controller leaves it alone.
///
/// ```
/// # use badge_print::{PrintController, PrintHost, PaperSizeConfiguration, PaperSizeType, Mm};
/// # #[derive(Default)]
/// # struct Page { styles: Vec<(String, String)>, printed: usize }
/// # impl PrintHost for Page {
/// #     fn supports_print(&self) -> bool { true }
/// #     fn has_element(&self, id: &str) -> bool { id == "badge-print-container" }
/// #     fn has_style(&self, id: &str) -> bool { self.styles.iter().any(|(i, _)| i == id) }
/// #     fn insert_style(&mut self, id: &str, css: &str) { self.styles.push((id.into(), css.into())) }
/// #     fn remove_style(&mut self, id: &str) -> bool {
/// #         let before = self.styles.len();
/// #         self.styles.retain(|(i, _)| i != id);
/// #         before != self.styles.len()
/// #     }
/// #     fn print(&mut self) { self.printed += 1 }
/// # }
/// let mut controller = PrintController::new(Page::default());
/// let config = PaperSizeConfiguration::new(PaperSizeType::A4);
///
/// let result = controller.print_with_configuration(&config, Mm(85.6), Mm(53.98));
/// assert!(result.success);
/// assert!(controller.has_print_styles());
/// assert_eq!(controller.host().printed, 1);
/// ```
pub struct PrintController<H: PrintHost> {
    host: H,
    selectors: StyleSelectors,
    active: Option<PrintStylesheet>,
}

impl<H: PrintHost> PrintController<H> {
    /// A controller using the default reserved identifiers
    pub fn new(host: H) -> PrintController<H> {
        PrintController::with_selectors(host, StyleSelectors::default())
    }

    pub fn with_selectors(host: H, selectors: StyleSelectors) -> PrintController<H> {
        PrintController {
            host,
            selectors,
            active: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn selectors(&self) -> &StyleSelectors {
        &self.selectors
    }

    /// The stylesheet this controller last injected, if it is still live
    pub fn active_stylesheet(&self) -> Option<&PrintStylesheet> {
        self.active.as_ref()
    }

    /// Whether the host document currently holds a print stylesheet
    pub fn has_print_styles(&self) -> bool {
        self.host.has_style(&self.selectors.style_id)
    }

    /// Generate and inject the print stylesheet, replacing any previous one.
    pub fn inject_print_styles(
        &mut self,
        config: &PaperSizeConfiguration,
        badge_width: Mm,
        badge_height: Mm,
    ) -> &PrintStylesheet {
        let stylesheet =
            PrintStylesheet::generate_with(config, badge_width, badge_height, &self.selectors);
        self.remove_print_styles();
        self.host
            .insert_style(&self.selectors.style_id, &stylesheet.to_css());
        debug!(
            "injected print styles #{} ({} {})",
            self.selectors.style_id, config.size_type, config.orientation.keyword()
        );
        self.active.insert(stylesheet)
    }

    /// Remove the print stylesheet, returning whether one was present
    pub fn remove_print_styles(&mut self) -> bool {
        self.active = None;
        let removed = self.host.remove_style(&self.selectors.style_id);
        if removed {
            debug!("removed print styles #{}", self.selectors.style_id);
        }
        removed
    }

    fn check_environment(&self) -> Result<(), PrintError> {
        if !self.host.supports_print() {
            return Err(PrintError::PrintUnsupported);
        }
        if !self.host.has_element(&self.selectors.container_id) {
            return Err(PrintError::BadgeContainerMissing(
                self.selectors.container_id.clone(),
            ));
        }
        Ok(())
    }

    fn try_print(
        &mut self,
        config: &PaperSizeConfiguration,
        badge_width: Mm,
        badge_height: Mm,
    ) -> Result<(), PrintError> {
        self.check_environment()?;
        self.inject_print_styles(config, badge_width, badge_height);
        info!(
            "printing {badge_width} × {badge_height} badges on {} {}",
            config.size_type,
            config.orientation.keyword()
        );
        self.host.print();
        Ok(())
    }

    /// Check the host can print, inject the stylesheet, and open the native
    /// print dialog. Failures come back as data; nothing is retried.
    pub fn print_with_configuration(
        &mut self,
        config: &PaperSizeConfiguration,
        badge_width: Mm,
        badge_height: Mm,
    ) -> PrintResult {
        match self.try_print(config, badge_width, badge_height) {
            Ok(()) => PrintResult::ok(),
            Err(e) => {
                warn!("cannot print badges: {e}");
                e.into()
            }
        }
    }
}

impl<H: PrintHost + CapabilityProbe> PrintController<H> {
    /// Best-effort check that the host honours physical page sizes
    pub fn supports_page_size(&mut self) -> bool {
        probe::supports_page_size(&mut self.host)
    }

    /// Manual paper-size instructions when the host may ignore the generated size
    pub fn paper_size_hint(&mut self, config: &PaperSizeConfiguration) -> Option<String> {
        probe::paper_size_hint(&mut self.host, &paper_dimensions(config))
    }
}
