use iced::widget::image;

/// Download a thumbnail for the result grid.
///
/// Returns `None` on any failure; the cell then shows a placeholder.
pub async fn fetch(http: reqwest::Client, url: String) -> Option<image::Handle> {
    let response = match http.get(&url).send().await.and_then(|r| r.error_for_status()) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Thumbnail request for {} failed: {}", url, e);
            return None;
        }
    };
    match response.bytes().await {
        Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
        Err(e) => {
            tracing::debug!("Thumbnail body for {} failed: {}", url, e);
            None
        }
    }
}
