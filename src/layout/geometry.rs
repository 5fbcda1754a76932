use crate::config::PaperSizeConfiguration;
use crate::pagesize::{PaperSizeType, CUSTOM_FALLBACK};
use crate::units::{Mm, Px};

/// Size of the sheet after orientation has been applied
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaperDimensions {
    pub width: Mm,
    pub height: Mm,
}

impl PaperDimensions {
    /// Size in device pixels, for on-screen previews
    pub fn to_pixels(&self) -> (Px, Px) {
        (self.width.into(), self.height.into())
    }
}

/// The part of the sheet inside the margins. Either side may be zero or
/// negative when the margins are larger than the paper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PrintableArea {
    pub width: Mm,
    pub height: Mm,
}

/// Resolve the paper size for a configuration.
///
/// Catalog sizes come from [`pagesize`](crate::pagesize); custom sizes fall back to
/// 100 × 150 mm for whichever side was never entered. Landscape swaps the axes.
///
/// ```
/// use badge_print::{paper_dimensions, Mm, Orientation, PaperSizeConfiguration, PaperSizeType};
///
/// let config = PaperSizeConfiguration::new(PaperSizeType::A4)
///     .with_orientation(Orientation::Landscape);
/// let paper = paper_dimensions(&config);
/// assert_eq!((paper.width, paper.height), (Mm(297.0), Mm(210.0)));
/// ```
pub fn paper_dimensions(config: &PaperSizeConfiguration) -> PaperDimensions {
    let baseline = match config.size_type {
        PaperSizeType::Custom => (
            config.custom_width.unwrap_or(CUSTOM_FALLBACK.0),
            config.custom_height.unwrap_or(CUSTOM_FALLBACK.1),
        ),
        size_type => size_type.size().unwrap_or(CUSTOM_FALLBACK),
    };
    let (width, height) = config.orientation.apply(baseline);
    PaperDimensions { width, height }
}

/// Paper size minus the two opposing margins on each axis.
pub fn printable_area(config: &PaperSizeConfiguration) -> PrintableArea {
    let paper = paper_dimensions(config);
    let margins = &config.margins;
    PrintableArea {
        width: paper.width - margins.left - margins.right,
        height: paper.height - margins.top - margins.bottom,
    }
}
