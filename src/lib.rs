//! Paper geometry, badge packing and print-control stylesheets for badge printing.
//!
//! Given a [`PaperSizeConfiguration`] and a badge size, this crate works out the
//! paper and printable dimensions, validates user input, counts how many badges
//! fit on a sheet, and generates the CSS that makes a hosting rendering engine
//! print at exact physical dimensions. [`PrintController`] owns the one live
//! stylesheet in the host document and triggers the native print dialog.

mod config;
pub use config::*;

mod controller;
pub use controller::*;

mod error;
pub use error::*;

/// Document and capability seams implemented by the hosting environment
pub mod host;
pub use host::{CapabilityProbe, HostEngine, PrintHost};

/// Paper geometry and badge packing
pub mod layout;
pub use layout::{
    badges_per_page, paper_dimensions, printable_area, BadgeDimensions, Margins,
    PaperDimensions, PrintableArea,
};

pub mod pagesize;
pub use pagesize::{swap_dimensions, PaperSizeType};

pub mod probe;

mod stylesheet;
pub use stylesheet::*;

mod units;
pub use units::*;

mod validation;
pub use validation::*;
