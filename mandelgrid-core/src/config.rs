//! Seed configuration and the persistence-facing view state.

use crate::color::Palette;
use crate::real::Real;
use crate::region::PlaneRegion;
use serde::{Deserialize, Serialize};

/// Scan shape of a grid: full-width rows, or rows clipped to the largest
/// inscribed circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridShape {
    Rectangle,
    Circle,
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape::Rectangle
    }
}

/// Every parameter consumed by `seed()`, in one explicit bundle.
///
/// Coordinates are decimal strings so a configuration can describe zoom
/// depths beyond what f64 represents; `region()` parses them into the
/// active numeric backend. Defaults: center -0.5 + 0i, half-distances 1,
/// rectangular scan, grayscale palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub center_x: String,
    pub center_y: String,
    pub half_width: String,
    pub half_height: String,
    pub shape: GridShape,
    pub palette: Palette,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            center_x: "-0.5".to_string(),
            center_y: "0".to_string(),
            half_width: "1".to_string(),
            half_height: "1".to_string(),
            shape: GridShape::default(),
            palette: Palette::default(),
        }
    }
}

impl SeedConfig {
    /// Capture an in-memory region back into configuration form.
    pub fn from_region<T: Real>(region: &PlaneRegion<T>, shape: GridShape, palette: Palette) -> Self {
        Self {
            center_x: region.center_x.to_string(),
            center_y: region.center_y.to_string(),
            half_width: region.half_width.to_string(),
            half_height: region.half_height.to_string(),
            shape,
            palette,
        }
    }

    /// Parse the coordinate strings into a region over the given backend.
    pub fn region<T: Real>(&self) -> Result<PlaneRegion<T>, String> {
        Ok(PlaneRegion::new(
            T::from_decimal_str(&self.center_x)?,
            T::from_decimal_str(&self.center_y)?,
            T::from_decimal_str(&self.half_width)?,
            T::from_decimal_str(&self.half_height)?,
        ))
    }
}

/// Flat key-value view description exchanged with the external persistence
/// layer (URL hash or equivalent). The encoding format itself is the
/// host's business; this is the tuple it encodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center_x: String,
    pub center_y: String,
    pub half_width: String,
    pub half_height: String,
    pub palette_id: u8,
    pub arbitrary_precision: bool,
}

impl ViewState {
    pub fn from_seed(config: &SeedConfig, arbitrary_precision: bool) -> Self {
        Self {
            center_x: config.center_x.clone(),
            center_y: config.center_y.clone(),
            half_width: config.half_width.clone(),
            half_height: config.half_height.clone(),
            palette_id: config.palette.id(),
            arbitrary_precision,
        }
    }

    /// Rebuild a seed configuration from a persisted view.
    ///
    /// The scan shape is not part of the persisted tuple and comes back as
    /// the default.
    pub fn to_seed(&self) -> Result<SeedConfig, String> {
        let palette = Palette::from_id(self.palette_id)
            .ok_or_else(|| format!("unknown palette id {}", self.palette_id))?;
        Ok(SeedConfig {
            center_x: self.center_x.clone(),
            center_y: self.center_y.clone(),
            half_width: self.half_width.clone(),
            half_height: self.half_height.clone(),
            shape: GridShape::default(),
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real::DecFloat;

    #[test]
    fn default_config_is_the_classic_view() {
        let config = SeedConfig::default();
        let region = config.region::<f64>().unwrap();
        assert_eq!(region.center_x, -0.5);
        assert_eq!(region.center_y, 0.0);
        assert_eq!(region.half_width, 1.0);
        assert_eq!(region.half_height, 1.0);
        assert_eq!(config.palette, Palette::Grayscale);
        assert_eq!(config.shape, GridShape::Rectangle);
    }

    #[test]
    fn region_parses_into_decimal_backend() {
        let config = SeedConfig {
            center_x: "-0.74364388703715870475".to_string(),
            center_y: "0.13182590420531197049".to_string(),
            half_width: "1e-18".to_string(),
            half_height: "1e-18".to_string(),
            ..SeedConfig::default()
        };
        let region = config.region::<DecFloat>().unwrap();
        assert!(!region.is_degenerate());
        assert!((region.half_width.to_f64() - 1e-18).abs() < 1e-30);
    }

    #[test]
    fn region_rejects_unparsable_coordinates() {
        let config = SeedConfig {
            center_x: "bogus".to_string(),
            ..SeedConfig::default()
        };
        assert!(config.region::<f64>().is_err());
    }

    #[test]
    fn from_region_captures_coordinates() {
        let region = PlaneRegion::<f64>::from_f64(-1.25, 0.75, 0.75, 0.75);
        let config = SeedConfig::from_region(&region, GridShape::Circle, Palette::BrightHsv);
        let parsed = config.region::<f64>().unwrap();
        assert_eq!(parsed, region);
        assert_eq!(config.shape, GridShape::Circle);
        assert_eq!(config.palette, Palette::BrightHsv);
    }

    #[test]
    fn view_state_roundtrips_through_json() {
        let state = ViewState::from_seed(&SeedConfig::default(), true);
        let json = serde_json::to_string(&state).unwrap();
        let restored: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn view_state_to_seed_restores_palette() {
        let config = SeedConfig {
            palette: Palette::MutedHsv,
            ..SeedConfig::default()
        };
        let state = ViewState::from_seed(&config, false);
        assert_eq!(state.palette_id, 3);
        let restored = state.to_seed().unwrap();
        assert_eq!(restored.palette, Palette::MutedHsv);
        assert_eq!(restored.center_x, config.center_x);
    }

    #[test]
    fn view_state_rejects_unknown_palette_id() {
        let state = ViewState {
            palette_id: 42,
            ..ViewState::from_seed(&SeedConfig::default(), false)
        };
        assert!(state.to_seed().is_err());
    }
}
