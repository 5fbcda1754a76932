//! Range and fit checks for paper configuration input.
//!
//! These run on every keystroke of a configuration form, so they are cheap,
//! never panic, and report problems as data.

use crate::config::PaperSizeConfiguration;
use crate::layout::{printable_area, Margins};
use crate::units::Mm;

/// Smallest accepted custom paper side
pub const MIN_CUSTOM_DIMENSION: Mm = Mm(50.0);
/// Largest accepted custom paper side
pub const MAX_CUSTOM_DIMENSION: Mm = Mm(500.0);
/// Smallest accepted margin
pub const MIN_MARGIN: Mm = Mm(0.0);
/// Largest accepted margin
pub const MAX_MARGIN: Mm = Mm(50.0);

/// Outcome of a validation check, with a user-facing message when invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> ValidationResult {
        ValidationResult {
            valid: true,
            error: None,
        }
    }

    pub fn invalid<S: ToString>(error: S) -> ValidationResult {
        ValidationResult {
            valid: false,
            error: Some(error.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

fn within(value: Mm, min: Mm, max: Mm) -> bool {
    value >= min && value <= max
}

/// Both sides of a custom paper size must lie within 50–500 mm inclusive.
/// Out-of-range values are rejected, never clamped.
///
/// ```
/// use badge_print::{validate_custom_dimensions, Mm};
///
/// assert!(validate_custom_dimensions(Mm(50.0), Mm(500.0)).valid);
/// let result = validate_custom_dimensions(Mm(49.9), Mm(100.0));
/// assert_eq!(result.error.as_deref(), Some("Width must be between 50mm and 500mm"));
/// ```
pub fn validate_custom_dimensions(width: Mm, height: Mm) -> ValidationResult {
    for (name, value) in [("Width", width), ("Height", height)] {
        if !within(value, MIN_CUSTOM_DIMENSION, MAX_CUSTOM_DIMENSION) {
            return ValidationResult::invalid(format!(
                "{name} must be between {MIN_CUSTOM_DIMENSION} and {MAX_CUSTOM_DIMENSION}"
            ));
        }
    }
    ValidationResult::ok()
}

/// Every margin must lie within 0–50 mm inclusive; the first offending side
/// (top, right, bottom, left) is reported.
///
/// This does not look at the paper size: margins that pass here can still
/// leave nothing printable on a small custom sheet.
pub fn validate_margins(margins: &Margins) -> ValidationResult {
    for (side, value) in margins.sides() {
        if !within(value, MIN_MARGIN, MAX_MARGIN) {
            let mut side = side.to_string();
            side[..1].make_ascii_uppercase();
            return ValidationResult::invalid(format!(
                "{side} margin must be between {MIN_MARGIN} and {MAX_MARGIN}"
            ));
        }
    }
    ValidationResult::ok()
}

/// The badge must fit inside the printable area without rotating it.
pub fn validate_badge_fits_on_paper(
    badge_width: Mm,
    badge_height: Mm,
    config: &PaperSizeConfiguration,
) -> ValidationResult {
    let area = printable_area(config);
    if badge_width > area.width || badge_height > area.height {
        return ValidationResult::invalid(format!(
            "Badge size ({:.1}mm × {:.1}mm) exceeds printable area ({:.1}mm × {:.1}mm)",
            *badge_width, *badge_height, *area.width, *area.height
        ));
    }
    ValidationResult::ok()
}
