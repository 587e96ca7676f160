use dioxus::logger::tracing::info;
use thiserror::Error;
use tileview_shared::basemaps;
use tileview_shared::models::OverlayDescriptor;
use tileview_shared::viewport::{LngLat, MoveTrace, ViewportConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::layers::{LayerRef, LayerToggle};
use crate::leaflet::{self, MapOptions};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("map container #{id} could not be initialized: {reason}")]
    Container { id: String, reason: String },
    #[error("invalid layer options: {0}")]
    Options(String),
}

/// Operations the page performs on the rendered map.
pub trait MapSurface {
    /// Create a tile layer for `overlay` without showing it.
    fn add_overlay(&mut self, overlay: &OverlayDescriptor) -> Result<(), SurfaceError>;

    fn set_visible(&mut self, layer: LayerRef, visible: bool);

    /// Frame `[[south, west], [north, east]]` in the viewport.
    fn fit_bounds(&mut self, corners: [[f64; 2]; 2]) -> Result<(), SurfaceError>;

    fn apply(&mut self, toggle: LayerToggle) {
        self.set_visible(toggle.layer, toggle.visible);
    }
}

/// Leaflet map bound to a DOM container.
pub struct LeafletSurface {
    map: leaflet::Map,
    basemaps: Vec<leaflet::TileLayer>,
    overlays: Vec<leaflet::TileLayer>,
    _on_moveend: Closure<dyn FnMut()>,
}

impl LeafletSurface {
    /// Build the map, one tile layer per registry basemap, and the move logger.
    pub fn initialize(container_id: &str, config: &ViewportConfig) -> Result<Self, SurfaceError> {
        let options = leaflet::to_js(&MapOptions {
            center: config.center.to_lat_lng(),
            zoom: config.clamp_zoom(config.zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        })
        .map_err(SurfaceError::Options)?;

        let map = leaflet::create_map(container_id, &options).map_err(|e| {
            SurfaceError::Container {
                id: container_id.to_string(),
                reason: format!("{:?}", e),
            }
        })?;

        let basemap_layers = basemaps::REGISTRY
            .iter()
            .map(|b| -> Result<leaflet::TileLayer, SurfaceError> {
                let options = leaflet::to_js(&b.layer_options()).map_err(SurfaceError::Options)?;
                Ok(leaflet::create_tile_layer(b.url_template, &options))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let initial = basemaps::find(config.initial_basemap)
            .map(|(i, _)| i)
            .unwrap_or(0);
        if let Some(layer) = basemap_layers.get(initial) {
            map.add_layer(layer);
        }

        let handle = map.clone();
        let on_moveend = Closure::<dyn FnMut()>::new(move || {
            let center = handle.get_center();
            let trace = MoveTrace {
                center: LngLat::new(center.lng(), center.lat()),
                zoom: handle.get_zoom().round() as i32,
            };
            info!("{}", trace);
        });
        map.on("moveend", on_moveend.as_ref().unchecked_ref());

        Ok(LeafletSurface {
            map,
            basemaps: basemap_layers,
            overlays: Vec::new(),
            _on_moveend: on_moveend,
        })
    }

    fn layer(&self, layer: LayerRef) -> Option<&leaflet::TileLayer> {
        match layer {
            LayerRef::Basemap(i) => self.basemaps.get(i),
            LayerRef::Overlay(i) => self.overlays.get(i),
        }
    }
}

impl MapSurface for LeafletSurface {
    fn add_overlay(&mut self, overlay: &OverlayDescriptor) -> Result<(), SurfaceError> {
        let options =
            leaflet::to_js(&overlay.layer_options()).map_err(SurfaceError::Options)?;
        self.overlays
            .push(leaflet::create_tile_layer(&overlay.url_template, &options));
        Ok(())
    }

    fn set_visible(&mut self, layer: LayerRef, visible: bool) {
        let Some(tile_layer) = self.layer(layer) else {
            return;
        };
        if visible {
            self.map.add_layer(tile_layer);
        } else {
            self.map.remove_layer(tile_layer);
        }
    }

    fn fit_bounds(&mut self, corners: [[f64; 2]; 2]) -> Result<(), SurfaceError> {
        let bounds = leaflet::to_js(&corners).map_err(SurfaceError::Options)?;
        self.map.fit_bounds(&bounds);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;

    #[test]
    fn test_apply_forwards_toggle() {
        let mut surface = RecordingSurface::default();
        let toggle = LayerToggle {
            layer: LayerRef::Overlay(3),
            visible: true,
        };
        surface.apply(toggle);
        assert_eq!(surface.toggles, vec![toggle]);
    }

    #[test]
    fn test_container_error_message() {
        let err = SurfaceError::Container {
            id: "map".to_string(),
            reason: "Map container not found.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "map container #map could not be initialized: Map container not found."
        );
    }
}
