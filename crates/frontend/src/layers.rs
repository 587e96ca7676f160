use tileview_shared::models::BasemapDescriptor;

/// A layer known to both the switcher and the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRef {
    Basemap(usize),
    Overlay(usize),
}

/// Visibility change the map surface must apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerToggle {
    pub layer: LayerRef,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    pub name: String,
    pub visible: bool,
}

/// Selection state behind the layer switcher.
///
/// Exactly one basemap is active at a time. Overlays are independent and
/// start hidden until the user checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSwitcherState {
    basemaps: Vec<&'static str>,
    active_basemap: usize,
    overlays: Vec<OverlayEntry>,
    pub collapsed: bool,
}

impl LayerSwitcherState {
    /// Unknown `initial` names fall back to the first registry entry.
    pub fn new(registry: &[BasemapDescriptor], initial: &str) -> Self {
        let basemaps: Vec<&'static str> = registry.iter().map(|b| b.name).collect();
        let active_basemap = basemaps.iter().position(|n| *n == initial).unwrap_or(0);
        LayerSwitcherState {
            basemaps,
            active_basemap,
            overlays: Vec::new(),
            collapsed: false,
        }
    }

    pub fn basemaps(&self) -> &[&'static str] {
        &self.basemaps
    }

    pub fn active_basemap(&self) -> usize {
        self.active_basemap
    }

    pub fn active_basemap_name(&self) -> Option<&'static str> {
        self.basemaps.get(self.active_basemap).copied()
    }

    pub fn overlays(&self) -> &[OverlayEntry] {
        &self.overlays
    }

    /// Make `index` the active basemap, returning the hide/show pair.
    ///
    /// Selecting the active basemap or an unknown index changes nothing.
    pub fn select_basemap(&mut self, index: usize) -> Vec<LayerToggle> {
        if index == self.active_basemap || index >= self.basemaps.len() {
            return Vec::new();
        }
        let previous = std::mem::replace(&mut self.active_basemap, index);
        vec![
            LayerToggle {
                layer: LayerRef::Basemap(previous),
                visible: false,
            },
            LayerToggle {
                layer: LayerRef::Basemap(index),
                visible: true,
            },
        ]
    }

    /// Register an overlay, hidden. Returns its index.
    pub fn add_overlay(&mut self, name: &str) -> usize {
        self.overlays.push(OverlayEntry {
            name: name.to_string(),
            visible: false,
        });
        self.overlays.len() - 1
    }

    pub fn toggle_overlay(&mut self, index: usize) -> Option<LayerToggle> {
        let entry = self.overlays.get_mut(index)?;
        entry.visible = !entry.visible;
        Some(LayerToggle {
            layer: LayerRef::Overlay(index),
            visible: entry.visible,
        })
    }

    pub fn visible_overlays(&self) -> impl Iterator<Item = &str> {
        self.overlays
            .iter()
            .filter(|o| o.visible)
            .map(|o| o.name.as_str())
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileview_shared::basemaps::{NONE_BASEMAP, REGISTRY};

    fn state() -> LayerSwitcherState {
        LayerSwitcherState::new(&REGISTRY, NONE_BASEMAP)
    }

    #[test]
    fn test_initial_basemap_is_placeholder() {
        let s = state();
        assert_eq!(s.active_basemap_name(), Some(NONE_BASEMAP));
        assert_eq!(s.basemaps().len(), 4);
        assert!(s.overlays().is_empty());
        assert!(!s.collapsed);
    }

    #[test]
    fn test_unknown_initial_falls_back_to_first() {
        let s = LayerSwitcherState::new(&REGISTRY, "Nope");
        assert_eq!(s.active_basemap(), 0);
    }

    #[test]
    fn test_select_basemap_is_mutually_exclusive() {
        let mut s = state();
        let none = s.active_basemap();
        let toggles = s.select_basemap(0);
        assert_eq!(
            toggles,
            vec![
                LayerToggle { layer: LayerRef::Basemap(none), visible: false },
                LayerToggle { layer: LayerRef::Basemap(0), visible: true },
            ]
        );
        assert_eq!(s.active_basemap(), 0);

        let toggles = s.select_basemap(2);
        assert_eq!(toggles[0].layer, LayerRef::Basemap(0));
        assert!(!toggles[0].visible);
        assert_eq!(s.active_basemap(), 2);
    }

    #[test]
    fn test_reselecting_active_basemap_is_noop() {
        let mut s = state();
        let active = s.active_basemap();
        assert!(s.select_basemap(active).is_empty());
        assert_eq!(s.active_basemap(), active);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut s = state();
        assert!(s.select_basemap(99).is_empty());
        assert_eq!(s.active_basemap_name(), Some(NONE_BASEMAP));
    }

    #[test]
    fn test_overlays_start_hidden_and_toggle_independently() {
        let mut s = state();
        assert_eq!(s.add_overlay("A"), 0);
        assert_eq!(s.add_overlay("B"), 1);
        assert_eq!(s.visible_overlays().count(), 0);

        let t = s.toggle_overlay(1).unwrap();
        assert_eq!(t, LayerToggle { layer: LayerRef::Overlay(1), visible: true });
        assert_eq!(s.visible_overlays().collect::<Vec<_>>(), vec!["B"]);

        s.toggle_overlay(0);
        assert_eq!(s.visible_overlays().collect::<Vec<_>>(), vec!["A", "B"]);

        let t = s.toggle_overlay(1).unwrap();
        assert!(!t.visible);
        assert_eq!(s.visible_overlays().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_overlay_toggle_does_not_touch_basemap() {
        let mut s = state();
        s.add_overlay("A");
        let before = s.active_basemap();
        s.toggle_overlay(0);
        assert_eq!(s.active_basemap(), before);
    }

    #[test]
    fn test_toggle_unknown_overlay() {
        let mut s = state();
        assert!(s.toggle_overlay(0).is_none());
    }

    #[test]
    fn test_toggle_collapsed() {
        let mut s = state();
        s.toggle_collapsed();
        assert!(s.collapsed);
        s.toggle_collapsed();
        assert!(!s.collapsed);
    }
}
