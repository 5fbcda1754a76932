//! Best-effort detection of `@page` size support.
//!
//! Probing never blocks printing. Any failure is logged and treated as
//! "supported", so the worst case is a missing hint, not a missing printout.

use crate::host::{CapabilityProbe, HostEngine};
use crate::layout::PaperDimensions;
use crate::units::{mm_to_pixels, Mm};
use log::debug;

/// Width of the throwaway trial element
const TRIAL_WIDTH: Mm = Mm(100.0);
/// How far the measured width may drift from the expected pixel width
const TRIAL_TOLERANCE_PX: f64 = 1.0;

/// What the trial element told us about physical-unit support
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageSizeSupport {
    Supported,
    Unsupported,
    Inconclusive,
}

/// Lay out a trial element declared in millimetres and check it renders at the
/// reference resolution.
pub fn detect_page_size_support<P: CapabilityProbe + ?Sized>(probe: &mut P) -> PageSizeSupport {
    let expected = mm_to_pixels(*TRIAL_WIDTH);
    match probe.measure_trial_element(TRIAL_WIDTH) {
        Ok(Some(measured)) if (*measured - expected).abs() <= TRIAL_TOLERANCE_PX => {
            PageSizeSupport::Supported
        }
        Ok(Some(measured)) => {
            debug!("trial element measured {measured}, expected {expected}px");
            PageSizeSupport::Unsupported
        }
        Ok(None) => PageSizeSupport::Inconclusive,
        Err(e) => {
            debug!("{e}; assuming page sizes are supported");
            PageSizeSupport::Supported
        }
    }
}

/// Whether the host is expected to honour the generated `@page` size. Anything
/// short of a clear "no" counts as yes.
pub fn supports_page_size<P: CapabilityProbe + ?Sized>(probe: &mut P) -> bool {
    detect_page_size_support(probe) != PageSizeSupport::Unsupported
}

/// Manual paper-size instructions for the host's print dialog, or `None` when
/// the host is known to honour the generated page size.
pub fn paper_size_hint<P: CapabilityProbe + ?Sized>(
    probe: &mut P,
    paper: &PaperDimensions,
) -> Option<String> {
    if detect_page_size_support(probe) == PageSizeSupport::Supported {
        return None;
    }
    let engine = probe
        .user_agent()
        .map(|ua| HostEngine::from_user_agent(&ua))
        .unwrap_or(HostEngine::Unknown);
    Some(engine.paper_size_hint(paper.width, paper.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::units::Px;

    struct StubProbe {
        measured: Result<Option<Px>, ProbeError>,
        user_agent: Option<String>,
        calls: usize,
    }

    impl StubProbe {
        fn new(measured: Result<Option<Px>, ProbeError>) -> StubProbe {
            StubProbe {
                measured,
                user_agent: None,
                calls: 0,
            }
        }
    }

    impl CapabilityProbe for StubProbe {
        fn measure_trial_element(&mut self, width: Mm) -> Result<Option<Px>, ProbeError> {
            assert_eq!(width, TRIAL_WIDTH);
            self.calls += 1;
            self.measured.clone()
        }

        fn user_agent(&self) -> Option<String> {
            self.user_agent.clone()
        }
    }

    fn paper() -> PaperDimensions {
        PaperDimensions {
            width: Mm(210.0),
            height: Mm(297.0),
        }
    }

    #[test]
    fn exact_measurement_is_supported() {
        let mut probe = StubProbe::new(Ok(Some(Px(mm_to_pixels(100.0) + 0.4))));
        assert_eq!(detect_page_size_support(&mut probe), PageSizeSupport::Supported);
        assert!(supports_page_size(&mut probe));
        assert_eq!(paper_size_hint(&mut probe, &paper()), None);
        assert_eq!(probe.calls, 3);
    }

    #[test]
    fn wrong_measurement_is_unsupported() {
        let mut probe = StubProbe::new(Ok(Some(Px(100.0))));
        assert_eq!(detect_page_size_support(&mut probe), PageSizeSupport::Unsupported);
        assert!(!supports_page_size(&mut probe));
    }

    #[test]
    fn probe_failure_fails_open() {
        let mut probe = StubProbe::new(Err(ProbeError("no layout engine".to_string())));
        assert_eq!(detect_page_size_support(&mut probe), PageSizeSupport::Supported);
        assert!(supports_page_size(&mut probe));
        assert_eq!(paper_size_hint(&mut probe, &paper()), None);
    }

    #[test]
    fn inconclusive_probe_gives_engine_hint() {
        let mut probe = StubProbe::new(Ok(None));
        probe.user_agent = Some("Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0".to_string());
        assert!(supports_page_size(&mut probe));
        let hint = paper_size_hint(&mut probe, &paper()).expect("hint");
        assert_eq!(hint, HostEngine::Firefox.paper_size_hint(Mm(210.0), Mm(297.0)));
    }

    #[test]
    fn inconclusive_probe_without_user_agent_gives_generic_hint() {
        let mut probe = StubProbe::new(Ok(None));
        let hint = paper_size_hint(&mut probe, &paper()).expect("hint");
        assert!(hint.contains("210mm × 297mm"));
    }
}
