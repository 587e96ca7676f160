//! Built-in background tile sources.
//!
//! Every basemap allows zoom 0-22, wider than the viewport itself permits.

use crate::models::BasemapDescriptor;

pub const BASEMAP_MIN_ZOOM: u8 = 0;
pub const BASEMAP_MAX_ZOOM: u8 = 22;

/// Name of the blank placeholder basemap.
pub const NONE_BASEMAP: &str = "None";

/// Fully transparent 1x1 PNG, served for every tile of the placeholder.
const BLANK_TILE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub const REGISTRY: [BasemapDescriptor; 4] = [
    BasemapDescriptor {
        name: "OpenStreetMap",
        url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: BASEMAP_MAX_ZOOM,
    },
    BasemapDescriptor {
        name: "OpenTopoMap",
        url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (CC-BY-SA)",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: BASEMAP_MAX_ZOOM,
    },
    BasemapDescriptor {
        name: "Esri World Imagery",
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles &copy; Esri",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: BASEMAP_MAX_ZOOM,
    },
    BasemapDescriptor {
        name: NONE_BASEMAP,
        url_template: BLANK_TILE,
        attribution: "",
        min_zoom: BASEMAP_MIN_ZOOM,
        max_zoom: BASEMAP_MAX_ZOOM,
    },
];

/// Look up a registry entry by name.
pub fn find(name: &str) -> Option<(usize, &'static BasemapDescriptor)> {
    REGISTRY.iter().enumerate().find(|(_, b)| b.name == name)
}
