use dioxus::prelude::*;
use tileview_shared::basemaps;
use tileview_shared::viewport::ViewportConfig;

use crate::components::layer_switcher::LayerSwitcher;
use crate::components::map_view::MapView;
use crate::layers::LayerSwitcherState;
use crate::surface::LeafletSurface;

#[component]
pub fn Viewer() -> Element {
    let switcher = use_signal(|| {
        LayerSwitcherState::new(
            &basemaps::REGISTRY,
            ViewportConfig::default().initial_basemap,
        )
    });
    // Populated once the map container is mounted
    let surface = use_signal(|| None::<LeafletSurface>);
    let init_error = use_signal(|| None::<String>);

    rsx! {
        div { class: "app",
            MapView { surface, switcher, init_error }
            LayerSwitcher { switcher, surface }
            if let Some(err) = init_error.read().as_ref() {
                div { class: "map-error", "Map unavailable: {err}" }
            }
        }
    }
}
