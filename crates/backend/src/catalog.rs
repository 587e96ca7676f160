use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tileview_shared::bounds::BoundingBox;
use tileview_shared::models::{MapsDocument, OverlayDescriptor};
use tileview_shared::names::display_name;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate overlay id {0:?}")]
    DuplicateId(String),
    #[error("overlay {id:?} has min zoom {min} above max zoom {max}")]
    ZoomRange { id: String, min: u8, max: u8 },
    #[error("overlay {id:?} has inverted bounds {bounds:?}")]
    Bounds { id: String, bounds: [f64; 4] },
}

/// One overlay as listed in `catalog.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub bounds: [f64; 4],
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Absolute template; generated from the tile base URL when absent.
    #[serde(default)]
    pub url_template: Option<String>,
}

impl CatalogEntry {
    fn validate(&self) -> Result<(), CatalogError> {
        if self.min_zoom > self.max_zoom {
            return Err(CatalogError::ZoomRange {
                id: self.id.clone(),
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !BoundingBox::from_bounds(self.bounds).is_valid() {
            return Err(CatalogError::Bounds {
                id: self.id.clone(),
                bounds: self.bounds,
            });
        }
        Ok(())
    }

    fn descriptor(&self, base_url: &str) -> OverlayDescriptor {
        OverlayDescriptor {
            id: Some(self.id.clone()),
            name: self
                .name
                .clone()
                .unwrap_or_else(|| display_name(&self.id)),
            url_template: self
                .url_template
                .clone()
                .unwrap_or_else(|| tile_url_template(base_url, &self.id)),
            bounds: self.bounds,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    maps: Vec<CatalogEntry>,
}

/// `<base>/<id>/{z}/{x}/{y}.png`
pub fn tile_url_template(base_url: &str, id: &str) -> String {
    format!("{}/{}/{{z}}/{{x}}/{{y}}.png", base_url.trim_end_matches('/'), id)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), overlays = catalog.len(), "Loaded overlay catalog");
        Ok(catalog)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let mut seen = HashSet::new();
        for entry in &file.maps {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
            entry.validate()?;
        }
        Ok(Catalog {
            entries: file.maps,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// The `/maps.json` body, with templates rooted at `base_url`.
    pub fn maps_document(&self, base_url: &str) -> MapsDocument {
        MapsDocument {
            maps: self.entries.iter().map(|e| e.descriptor(base_url)).collect(),
        }
    }
}
