use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;

/// Opacity applied to every discovered overlay.
pub const OVERLAY_OPACITY: f64 = 0.7;

/// One raster overlay advertised by the `/maps.json` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url_template: String,
    /// `[min_lng, min_lat, max_lng, max_lat]`
    pub bounds: [f64; 4],
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl OverlayDescriptor {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_bounds(self.bounds)
    }

    /// Overlays are TMS-addressed, semi-transparent and carry no attribution.
    pub fn layer_options(&self) -> TileLayerOptions {
        TileLayerOptions {
            tms: true,
            opacity: OVERLAY_OPACITY,
            attribution: String::new(),
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

/// Body of `GET /maps.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapsDocument {
    pub maps: Vec<OverlayDescriptor>,
}

impl MapsDocument {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Background tile source. Registry entries are compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasemapDescriptor {
    pub name: &'static str,
    /// XYZ template, or an inline `data:` image for the blank placeholder.
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl BasemapDescriptor {
    pub fn layer_options(&self) -> TileLayerOptions {
        TileLayerOptions {
            tms: false,
            opacity: 1.0,
            attribution: self.attribution.to_string(),
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

/// Option object handed to the mapping library's tile layer constructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub tms: bool,
    pub opacity: f64,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MAPS: &str = r#"{"maps":[{"name":"A","urlTemplate":"t/{z}/{x}/{y}","bounds":[-100,30,-90,40],"minZoom":5,"maxZoom":14},{"name":"B","urlTemplate":"t2/{z}/{x}/{y}","bounds":[-95,35,-85,45],"minZoom":5,"maxZoom":14}]}"#;

    #[test]
    fn test_maps_document_parses() {
        let doc = MapsDocument::parse(TWO_MAPS).unwrap();
        assert_eq!(doc.maps.len(), 2);
        assert_eq!(doc.maps[0].name, "A");
        assert_eq!(doc.maps[0].url_template, "t/{z}/{x}/{y}");
        assert_eq!(doc.maps[1].bounds, [-95.0, 35.0, -85.0, 45.0]);
        assert_eq!(doc.maps[1].min_zoom, 5);
        assert_eq!(doc.maps[1].max_zoom, 14);
        assert!(doc.maps[0].id.is_none());
    }

    #[test]
    fn test_maps_document_accepts_server_id() {
        let json = r#"{"maps":[{"id":"grand_mesa","name":"Grand Mesa","urlTemplate":"http://h/grand_mesa/{z}/{x}/{y}.png","bounds":[-108.5,38.9,-107.7,39.2],"minZoom":8,"maxZoom":14}]}"#;
        let doc = MapsDocument::parse(json).unwrap();
        assert_eq!(doc.maps[0].id.as_deref(), Some("grand_mesa"));
    }

    #[test]
    fn test_maps_document_empty_list() {
        let doc = MapsDocument::parse(r#"{"maps":[]}"#).unwrap();
        assert!(doc.maps.is_empty());
    }

    #[test]
    fn test_maps_document_rejects_wrong_shape() {
        assert!(MapsDocument::parse(r#"[{"name":"A"}]"#).is_err());
        assert!(MapsDocument::parse(r#"{"maps":[{"name":"A","urlTemplate":"t","bounds":[1,2,3],"minZoom":5,"maxZoom":14}]}"#).is_err());
        assert!(MapsDocument::parse("not json").is_err());
    }

    #[test]
    fn test_overlay_serializes_camel_case_without_id() {
        let doc = MapsDocument::parse(TWO_MAPS).unwrap();
        let json = serde_json::to_value(&doc.maps[0]).unwrap();
        assert_eq!(json["urlTemplate"], "t/{z}/{x}/{y}");
        assert_eq!(json["minZoom"], 5);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_overlay_layer_options() {
        let doc = MapsDocument::parse(TWO_MAPS).unwrap();
        let opts = doc.maps[0].layer_options();
        assert!(opts.tms);
        assert!((opts.opacity - 0.7).abs() < 1e-9);
        assert!(opts.attribution.is_empty());
        assert_eq!((opts.min_zoom, opts.max_zoom), (5, 14));

        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["tms"], true);
        assert_eq!(json["maxZoom"], 14);
    }

    #[test]
    fn test_overlay_bounding_box() {
        let doc = MapsDocument::parse(TWO_MAPS).unwrap();
        let b = doc.maps[0].bounding_box();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-100.0, 30.0, -90.0, 40.0));
    }
}
