use thiserror::Error;
use tileview_shared::models::MapsDocument;

/// Overlay metadata endpoint, relative to the page origin.
pub const MAPS_PATH: &str = "/maps.json";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("page location unavailable")]
    Location,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed maps document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Build the metadata URL from a page origin such as `http://localhost:8234`.
pub fn build_maps_url(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), MAPS_PATH)
}

/// Metadata URL on the origin serving this page.
pub fn maps_url() -> Result<String, DiscoveryError> {
    let origin = web_sys::window()
        .ok_or(DiscoveryError::Location)?
        .location()
        .origin()
        .map_err(|_| DiscoveryError::Location)?;
    Ok(build_maps_url(&origin))
}

/// Map a response status and body to the overlay list.
pub fn parse_maps_response(status: u16, body: &str) -> Result<MapsDocument, DiscoveryError> {
    if !(200..300).contains(&status) {
        return Err(DiscoveryError::Status(status));
    }
    Ok(MapsDocument::parse(body)?)
}

/// Single GET of the overlay list. No retry, no timeout.
pub async fn fetch_maps(url: &str) -> Result<MapsDocument, DiscoveryError> {
    let resp = reqwest::Client::new().get(url).send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    parse_maps_response(status, &body)
}
