use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use tileview_shared::viewport::ViewportConfig;

use crate::api;
use crate::discovery;
use crate::layers::LayerSwitcherState;
use crate::surface::LeafletSurface;

/// DOM id the map binds to. Must exist before the map is initialized.
pub const MAP_CONTAINER_ID: &str = "map";

/// Fetch the overlay list once and hand it to the map.
///
/// Any failure is logged and otherwise ignored: the basemap stays up and the
/// view is not moved.
async fn discover_overlays(
    mut surface: Signal<Option<LeafletSurface>>,
    mut switcher: Signal<LayerSwitcherState>,
) {
    let doc = match api::maps_url() {
        Ok(url) => api::fetch_maps(&url).await,
        Err(e) => Err(e),
    };
    let doc = match doc {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "overlay discovery failed");
            return;
        }
    };

    let mut guard = surface.write();
    let Some(map) = guard.as_mut() else {
        return;
    };
    let outcome = discovery::apply_overlays(&doc.maps, &mut switcher.write(), map);
    info!(
        overlays = outcome.registered.len(),
        fitted = outcome.fitted.is_some(),
        "overlay discovery complete"
    );
}

#[component]
pub fn MapView(
    mut surface: Signal<Option<LeafletSurface>>,
    switcher: Signal<LayerSwitcherState>,
    mut init_error: Signal<Option<String>>,
) -> Element {
    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "map-container",
            onmounted: move |_| {
                if surface.read().is_some() {
                    return;
                }
                match LeafletSurface::initialize(MAP_CONTAINER_ID, &ViewportConfig::default()) {
                    Ok(map) => {
                        surface.set(Some(map));
                        spawn(discover_overlays(surface, switcher));
                    }
                    Err(e) => {
                        error!(error = %e, "map initialization failed");
                        init_error.set(Some(e.to_string()));
                    }
                }
            },
        }
    }
}
