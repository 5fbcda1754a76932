//! Paper geometry and badge packing.
//!
//! Everything here is recomputed from a [`PaperSizeConfiguration`](crate::PaperSizeConfiguration)
//! on every call; nothing is cached between calls.
//!
//! - [`paper_dimensions`](crate::layout::paper_dimensions) - catalog or custom size, with orientation applied
//! - [`printable_area`](crate::layout::printable_area) - paper size minus margins
//! - [`badges_per_page`](crate::layout::badges_per_page) - how many badges fit on a uniform grid
//!
//! # Example
//!
//! ```
//! use badge_print::layout::{badges_per_page, printable_area, BadgeDimensions, Margins};
//! use badge_print::{Mm, PaperSizeConfiguration, PaperSizeType};
//!
//! let config = PaperSizeConfiguration::new(PaperSizeType::Letter)
//!     .with_margins(Margins::all(Mm(5.0)));
//! let area = printable_area(&config);
//! let badge = BadgeDimensions::new(Mm(101.6), Mm(76.2));
//! assert!(area.width > badge.width);
//! assert_eq!(badges_per_page(&config, badge), 6);
//! ```

mod geometry;
mod grid;
mod margins;

pub use geometry::*;
pub use grid::*;
pub use margins::*;
