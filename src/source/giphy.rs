use serde::Deserialize;

use crate::error::FetchError;
use crate::source::{ImageSource, SearchFuture, SearchParams, SearchResult};

pub const DEFAULT_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/search";

/// Giphy GIF search over HTTP
pub struct GiphySource {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GiphySource {
    /// `http` should already carry the request timeout; see [`crate::config::ApiConfig`].
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

impl ImageSource for GiphySource {
    fn name(&self) -> &str {
        "giphy"
    }

    fn search(&self, params: SearchParams) -> SearchFuture {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        Box::pin(async move {
            let api_key = api_key.ok_or(FetchError::MissingApiKey)?;
            let response = http
                .get(&endpoint)
                .query(&query_pairs(&api_key, &params))
                .send()
                .await?
                .error_for_status()?;
            let body = response.bytes().await?;
            parse_response(&body)
        })
    }
}

fn query_pairs(api_key: &str, params: &SearchParams) -> Vec<(&'static str, String)> {
    vec![
        ("api_key", api_key.to_string()),
        ("q", params.phrase.clone()),
        ("limit", params.limit.to_string()),
        ("offset", params.offset.to_string()),
        ("rating", params.rating.clone()),
        ("lang", params.lang.clone()),
    ]
}

#[derive(Deserialize)]
struct Response {
    data: Vec<Gif>,
}

#[derive(Deserialize)]
struct Gif {
    id: String,
    #[serde(default)]
    title: String,
    url: String,
    images: Renditions,
}

#[derive(Deserialize)]
struct Renditions {
    fixed_height: Rendition,
    fixed_height_still: Option<Rendition>,
}

#[derive(Deserialize)]
struct Rendition {
    url: String,
}

/// Decode a search response body, keeping the API's order.
pub fn parse_response(body: &[u8]) -> Result<Vec<SearchResult>, FetchError> {
    let response: Response =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(response
        .data
        .into_iter()
        .map(|gif| SearchResult {
            id: gif.id,
            title: gif.title,
            thumbnail_url: gif.images.fixed_height.url,
            still_url: gif.images.fixed_height_still.map(|r| r.url),
            page_url: gif.url,
        })
        .collect())
}
