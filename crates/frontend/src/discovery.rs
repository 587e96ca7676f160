use dioxus::logger::tracing::{info, warn};
use tileview_shared::bounds::{self, BoundingBox};
use tileview_shared::models::OverlayDescriptor;

use crate::layers::LayerSwitcherState;
use crate::surface::MapSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryOutcome {
    /// Overlays that made it into the switcher, in arrival order.
    pub registered: Vec<String>,
    /// Box the viewport was fitted to, if any.
    pub fitted: Option<BoundingBox>,
}

/// Register every overlay and frame their union.
///
/// Registration and the fit happen in one synchronous pass, so every overlay
/// is in the switcher before the viewport moves.
pub fn apply_overlays<S: MapSurface>(
    overlays: &[OverlayDescriptor],
    switcher: &mut LayerSwitcherState,
    surface: &mut S,
) -> DiscoveryOutcome {
    let union = bounds::union_of(overlays.iter().map(OverlayDescriptor::bounding_box));

    let mut registered = Vec::with_capacity(overlays.len());
    for overlay in overlays {
        match surface.add_overlay(overlay) {
            Ok(()) => {
                switcher.add_overlay(&overlay.name);
                registered.push(overlay.name.clone());
            }
            Err(e) => warn!(name = %overlay.name, error = %e, "skipping overlay"),
        }
    }

    let fitted = fit_viewport(surface, union);
    DiscoveryOutcome { registered, fitted }
}

/// Fit the viewport to `union`. An absent or inverted box leaves the view alone.
pub fn fit_viewport<S: MapSurface>(surface: &mut S, union: Option<BoundingBox>) -> Option<BoundingBox> {
    let Some(bbox) = union else {
        info!("no overlays discovered, keeping initial view");
        return None;
    };
    if !bbox.is_valid() {
        warn!(bounds = ?bbox.to_bounds(), "overlay bounds are inverted, keeping initial view");
        return None;
    }
    match surface.fit_bounds(bbox.fit_corners()) {
        Ok(()) => Some(bbox),
        Err(e) => {
            warn!(error = %e, "could not fit viewport to overlays");
            None
        }
    }
}
