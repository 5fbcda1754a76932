//! Pre-defined paper sizes for sheets and badge card stock.
//!
//! All sizes are stored in their baseline orientation (width, height) where
//! width ≤ height, so that switching to landscape is always a plain swap of the
//! two axes. Use [`Orientation::apply`](crate::Orientation::apply) or the
//! [`PageOrientation`] trait to get the other orientation.
//!
//! # Available Sizes
//!
//! ## ISO A-Series
//! `A3` through `A6`
//!
//! ## North American
//! `LETTER`, `LEGAL`
//!
//! ## Badge stock
//! `CR80` (ID-1 card), `BADGE_4X3`, `BADGE_4X6`
//!
//! # Example
//!
//! ```
//! use badge_print::pagesize::{self, PageOrientation, PaperSizeType};
//!
//! assert_eq!(PaperSizeType::A4.size(), Some(pagesize::A4));
//! let landscape = pagesize::A4.landscape();
//! assert_eq!(landscape, pagesize::swap_dimensions(pagesize::A4.0, pagesize::A4.1));
//! ```

use crate::error::ConfigError;
use crate::units::Mm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paper dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

// iso a-series
pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const A5: PageSize = (Mm(148.0), Mm(210.0));
pub const A6: PageSize = (Mm(105.0), Mm(148.0));

// north american sizes
pub const LETTER: PageSize = (Mm(215.9), Mm(279.4));
pub const LEGAL: PageSize = (Mm(215.9), Mm(355.6));

// badge stock
pub const CR80: PageSize = (Mm(53.98), Mm(85.6));
pub const BADGE_4X3: PageSize = (Mm(76.2), Mm(101.6));
pub const BADGE_4X6: PageSize = (Mm(101.6), Mm(152.4));

/// Fallback used for [`PaperSizeType::Custom`] when no custom size was entered.
pub const CUSTOM_FALLBACK: PageSize = (Mm(100.0), Mm(150.0));

/// Exchange width and height. Applying it twice returns the original pair.
pub fn swap_dimensions(width: Mm, height: Mm) -> PageSize {
    (height, width)
}

/// Identifier of a paper size in the catalog, or `Custom` for user-entered sizes.
///
/// The serialized names (`"A4"`, `"Letter"`, `"CR80"`, ...) are the identifiers
/// stored by whatever persists paper configurations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSizeType {
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    #[serde(rename = "CR80")]
    Cr80,
    #[serde(rename = "4x3")]
    Badge4x3,
    #[serde(rename = "4x6")]
    Badge4x6,
    Custom,
}

impl PaperSizeType {
    /// Every size type, in the order editors should present them.
    pub const ALL: [PaperSizeType; 10] = [
        PaperSizeType::A4,
        PaperSizeType::A3,
        PaperSizeType::A5,
        PaperSizeType::A6,
        PaperSizeType::Letter,
        PaperSizeType::Legal,
        PaperSizeType::Cr80,
        PaperSizeType::Badge4x3,
        PaperSizeType::Badge4x6,
        PaperSizeType::Custom,
    ];

    /// Baseline (portrait) size from the catalog. `Custom` has no catalog entry.
    pub fn size(self) -> Option<PageSize> {
        match self {
            PaperSizeType::A3 => Some(A3),
            PaperSizeType::A4 => Some(A4),
            PaperSizeType::A5 => Some(A5),
            PaperSizeType::A6 => Some(A6),
            PaperSizeType::Letter => Some(LETTER),
            PaperSizeType::Legal => Some(LEGAL),
            PaperSizeType::Cr80 => Some(CR80),
            PaperSizeType::Badge4x3 => Some(BADGE_4X3),
            PaperSizeType::Badge4x6 => Some(BADGE_4X6),
            PaperSizeType::Custom => None,
        }
    }

    /// The identifier used on the wire.
    pub fn id(self) -> &'static str {
        match self {
            PaperSizeType::A3 => "A3",
            PaperSizeType::A4 => "A4",
            PaperSizeType::A5 => "A5",
            PaperSizeType::A6 => "A6",
            PaperSizeType::Letter => "Letter",
            PaperSizeType::Legal => "Legal",
            PaperSizeType::Cr80 => "CR80",
            PaperSizeType::Badge4x3 => "4x3",
            PaperSizeType::Badge4x6 => "4x6",
            PaperSizeType::Custom => "Custom",
        }
    }

    /// Human readable name, including the dimensions for catalog sizes.
    pub fn label(self) -> &'static str {
        match self {
            PaperSizeType::A3 => "A3 (297 × 420 mm)",
            PaperSizeType::A4 => "A4 (210 × 297 mm)",
            PaperSizeType::A5 => "A5 (148 × 210 mm)",
            PaperSizeType::A6 => "A6 (105 × 148 mm)",
            PaperSizeType::Letter => "US Letter (8.5 × 11 in)",
            PaperSizeType::Legal => "US Legal (8.5 × 14 in)",
            PaperSizeType::Cr80 => "CR80 card (53.98 × 85.6 mm)",
            PaperSizeType::Badge4x3 => "Badge 4 × 3 in",
            PaperSizeType::Badge4x6 => "Badge 4 × 6 in",
            PaperSizeType::Custom => "Custom size",
        }
    }
}

impl fmt::Display for PaperSizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaperSizeType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperSizeType::ALL
            .into_iter()
            .find(|size_type| size_type.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownSizeType(s.to_string()))
    }
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            swap_dimensions(self.0, self.1)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            swap_dimensions(self.0, self.1)
        }
    }
}
