use std::fmt;

use serde::{Deserialize, Serialize};

use crate::basemaps::NONE_BASEMAP;

pub const VIEWPORT_MIN_ZOOM: u8 = 5;
pub const VIEWPORT_MAX_ZOOM: u8 = 14;

/// A position as (longitude, latitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        LngLat { lng, lat }
    }

    /// `[lat, lng]`, the order the mapping library expects.
    pub fn to_lat_lng(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Initial state of the map viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    pub center: LngLat,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub initial_basemap: &'static str,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        // Grand Mesa, Colorado
        ViewportConfig {
            center: LngLat::new(-107.98118591308595, 39.02785219375274),
            zoom: 10,
            min_zoom: VIEWPORT_MIN_ZOOM,
            max_zoom: VIEWPORT_MAX_ZOOM,
            initial_basemap: NONE_BASEMAP,
        }
    }
}

impl ViewportConfig {
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Diagnostic line emitted when a pan or zoom gesture finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTrace {
    pub center: LngLat,
    pub zoom: i32,
}

impl fmt::Display for MoveTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center=({}, {}), zoom={}",
            self.center.lng, self.center.lat, self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_trace_whole_degrees() {
        let trace = MoveTrace {
            center: LngLat::new(-101.0, 37.0),
            zoom: 10,
        };
        assert_eq!(trace.to_string(), "center=(-101, 37), zoom=10");
    }

    #[test]
    fn test_move_trace_fractional_degrees() {
        let trace = MoveTrace {
            center: LngLat::new(-107.98118591308595, 39.02785219375274),
            zoom: 12,
        };
        assert_eq!(
            trace.to_string(),
            "center=(-107.98118591308595, 39.02785219375274), zoom=12"
        );
    }

    #[test]
    fn test_default_viewport() {
        let cfg = ViewportConfig::default();
        assert_eq!(cfg.min_zoom, 5);
        assert_eq!(cfg.max_zoom, 14);
        assert_eq!(cfg.initial_basemap, NONE_BASEMAP);
        assert_eq!(cfg.clamp_zoom(cfg.zoom), cfg.zoom);
    }

    #[test]
    fn test_clamp_zoom() {
        let cfg = ViewportConfig::default();
        assert_eq!(cfg.clamp_zoom(0), 5);
        assert_eq!(cfg.clamp_zoom(22), 14);
        assert_eq!(cfg.clamp_zoom(9), 9);
    }

    #[test]
    fn test_lat_lng_order() {
        assert_eq!(LngLat::new(-101.0, 37.0).to_lat_lng(), [37.0, -101.0]);
    }
}
