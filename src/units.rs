//! Physical and device units.
//!
//! Millimetres ([`Mm`]) are the authoritative unit for everything in this crate;
//! device pixels ([`Px`]) only exist for on-screen previews and assume the CSS
//! reference resolution of 96 px per inch.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// Device pixels per inch at the CSS reference resolution.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Device pixels per millimetre, ≈3.7795275591.
pub const PIXELS_PER_MM: f64 = PIXELS_PER_INCH / MM_PER_INCH;

/// A length in millimetres.
///
/// Displays with its unit suffix, so `Mm(53.98)` formats as `53.98mm`, which is
/// exactly the form print stylesheets expect.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}mm")]
#[serde(transparent)]
pub struct Mm(pub f64);

/// A length in device pixels at 96 px/inch.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}px")]
#[serde(transparent)]
pub struct Px(pub f64);

/// Convert millimetres to device pixels.
///
/// ```
/// use badge_print::mm_to_pixels;
///
/// assert!((mm_to_pixels(25.4) - 96.0).abs() < 1e-9);
/// ```
pub fn mm_to_pixels(mm: f64) -> f64 {
    mm * PIXELS_PER_MM
}

/// Convert device pixels to millimetres.
pub fn pixels_to_mm(px: f64) -> f64 {
    px / PIXELS_PER_MM
}

impl From<Mm> for Px {
    fn from(mm: Mm) -> Self {
        Px(mm_to_pixels(mm.0))
    }
}

impl From<Px> for Mm {
    fn from(px: Px) -> Self {
        Mm(pixels_to_mm(px.0))
    }
}
