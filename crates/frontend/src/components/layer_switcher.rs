use dioxus::prelude::*;

use crate::layers::{LayerSwitcherState, LayerToggle};
use crate::surface::{LeafletSurface, MapSurface};

fn apply_toggles(
    mut surface: Signal<Option<LeafletSurface>>,
    toggles: impl IntoIterator<Item = LayerToggle>,
) {
    if let Some(map) = surface.write().as_mut() {
        for toggle in toggles {
            map.apply(toggle);
        }
    }
}

/// Basemap radio group plus one checkbox per discovered overlay.
#[component]
pub fn LayerSwitcher(
    mut switcher: Signal<LayerSwitcherState>,
    surface: Signal<Option<LeafletSurface>>,
) -> Element {
    let state = switcher.read();
    let collapsed = state.collapsed;
    let active = state.active_basemap();
    let summary = match (state.active_basemap_name(), state.visible_overlays().count()) {
        (Some(name), 0) => name.to_string(),
        (Some(name), n) => format!("{} + {} overlay(s)", name, n),
        (None, _) => String::new(),
    };
    let basemaps: Vec<(usize, &'static str)> =
        state.basemaps().iter().copied().enumerate().collect();
    let overlays: Vec<(usize, String, bool)> = state
        .overlays()
        .iter()
        .enumerate()
        .map(|(i, o)| (i, o.name.clone(), o.visible))
        .collect();
    drop(state);

    rsx! {
        div { class: if collapsed { "layer-switcher collapsed" } else { "layer-switcher" },
            button {
                class: "layer-switcher-toggle",
                "aria-label": "Toggle layer list",
                title: "{summary}",
                onclick: move |_| switcher.write().toggle_collapsed(),
                "Layers"
            }
            if !collapsed {
                fieldset { class: "basemaps",
                    legend { "Basemap" }
                    for (i, name) in basemaps {
                        label { key: "{name}",
                            input {
                                r#type: "radio",
                                name: "basemap",
                                value: "{name}",
                                checked: i == active,
                                onchange: move |_| {
                                    let toggles = switcher.write().select_basemap(i);
                                    apply_toggles(surface, toggles);
                                },
                            }
                            " {name}"
                        }
                    }
                }
                if !overlays.is_empty() {
                    fieldset { class: "overlays",
                        legend { "Overlays" }
                        for (i, name, visible) in overlays {
                            label { key: "{i}",
                                input {
                                    r#type: "checkbox",
                                    checked: visible,
                                    onchange: move |_| {
                                        let toggle = switcher.write().toggle_overlay(i);
                                        apply_toggles(surface, toggle);
                                    },
                                }
                                " {name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
