//! The paper configuration supplied by template editors.
//!
//! A [`PaperSizeConfiguration`] is plain data: it is created and edited
//! elsewhere, persisted as opaque JSON, and read back right before every
//! validation, geometry or print call. Nothing here caches it.

use crate::error::ConfigError;
use crate::layout::Margins;
use crate::pagesize::{swap_dimensions, PageSize, PaperSizeType};
use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Which way round the paper is fed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Apply this orientation to a baseline size. Landscape is an unconditional
    /// swap, so applying it to an already swapped pair swaps it back.
    pub fn apply(self, size: PageSize) -> PageSize {
        match self {
            Orientation::Portrait => size,
            Orientation::Landscape => swap_dimensions(size.0, size.1),
        }
    }

    /// The CSS keyword for this orientation
    pub fn keyword(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Target sheet size, orientation and margins for a print run.
///
/// `custom_width` and `custom_height` only mean something when `size_type` is
/// [`PaperSizeType::Custom`]; they are kept (and round-tripped) either way.
///
/// ```
/// use badge_print::{Margins, Orientation, PaperSizeConfiguration, PaperSizeType};
///
/// let config = PaperSizeConfiguration::new(PaperSizeType::A4)
///     .with_orientation(Orientation::Landscape)
///     .with_margins(Margins::all(10.0));
/// let json = config.to_json().expect("can serialize");
/// assert_eq!(PaperSizeConfiguration::from_json(&json).expect("can parse"), config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSizeConfiguration {
    pub size_type: PaperSizeType,
    pub orientation: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_width: Option<Mm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_height: Option<Mm>,
    pub margins: Margins,
}

impl PaperSizeConfiguration {
    /// A portrait configuration for `size_type` with no margins
    pub fn new(size_type: PaperSizeType) -> PaperSizeConfiguration {
        PaperSizeConfiguration {
            size_type,
            orientation: Orientation::Portrait,
            custom_width: None,
            custom_height: None,
            margins: Margins::empty(),
        }
    }

    /// A portrait custom-size configuration with no margins
    pub fn custom(width: Mm, height: Mm) -> PaperSizeConfiguration {
        PaperSizeConfiguration {
            custom_width: Some(width),
            custom_height: Some(height),
            ..PaperSizeConfiguration::new(PaperSizeType::Custom)
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Parse a persisted configuration
    pub fn from_json(json: &str) -> Result<PaperSizeConfiguration, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration for persistence
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for PaperSizeConfiguration {
    fn default() -> Self {
        PaperSizeConfiguration::new(PaperSizeType::A4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_configs() -> Vec<PaperSizeConfiguration> {
        let mut configs = Vec::new();
        for size_type in PaperSizeType::ALL {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let mut config = PaperSizeConfiguration::new(size_type)
                    .with_orientation(orientation)
                    .with_margins(Margins::trbl(Mm(0.0), Mm(12.7), Mm(3.3), Mm(50.0)));
                if size_type == PaperSizeType::Custom {
                    config.custom_width = Some(Mm(53.98));
                    config.custom_height = Some(Mm(499.99));
                }
                configs.push(config);
            }
        }
        configs
    }

    #[test]
    fn round_trips_every_field() {
        for config in sample_configs() {
            let json = config.to_json().expect("can serialize");
            let back = PaperSizeConfiguration::from_json(&json).expect("can parse");
            assert_eq!(back, config, "json was {json}");
        }
    }

    #[test]
    fn round_trips_awkward_floats_bit_for_bit() {
        let config = PaperSizeConfiguration::custom(Mm(0.1 + 0.2), Mm(1.0 / 3.0))
            .with_margins(Margins::all(Mm(std::f64::consts::PI)));
        let back = PaperSizeConfiguration::from_json(&config.to_json().expect("can serialize"))
            .expect("can parse");
        assert_eq!(back.custom_width.map(|w| w.0.to_bits()), Some((0.1f64 + 0.2).to_bits()));
        assert_eq!(back, config);
    }

    #[test]
    fn uses_camel_case_wire_names() {
        let json = r#"{
            "sizeType": "Custom",
            "orientation": "landscape",
            "customWidth": 120,
            "customHeight": 80.5,
            "margins": { "top": 5, "right": 6, "bottom": 7, "left": 8 }
        }"#;
        let config = PaperSizeConfiguration::from_json(json).expect("can parse");
        assert_eq!(config.size_type, PaperSizeType::Custom);
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.custom_width, Some(Mm(120.0)));
        assert_eq!(config.custom_height, Some(Mm(80.5)));
        assert_eq!(config.margins, Margins::trbl(Mm(5.0), Mm(6.0), Mm(7.0), Mm(8.0)));
    }

    #[test]
    fn missing_custom_size_is_allowed() {
        let json = r#"{"sizeType":"Custom","orientation":"portrait","margins":{"top":0,"right":0,"bottom":0,"left":0}}"#;
        let config = PaperSizeConfiguration::from_json(json).expect("can parse");
        assert_eq!(config.custom_width, None);
        assert_eq!(config.custom_height, None);
    }

    #[test]
    fn missing_margins_are_rejected() {
        let json = r#"{"sizeType":"A4","orientation":"portrait"}"#;
        assert!(matches!(
            PaperSizeConfiguration::from_json(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn orientation_apply_swaps_only_for_landscape() {
        let size = (Mm(53.98), Mm(85.6));
        assert_eq!(Orientation::Portrait.apply(size), size);
        assert_eq!(Orientation::Landscape.apply(size), (Mm(85.6), Mm(53.98)));
        assert_eq!(
            Orientation::Landscape.apply(Orientation::Landscape.apply(size)),
            size
        );
    }
}
