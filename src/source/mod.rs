pub mod giphy;

use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;

/// One image returned by a source, in the order the source returned it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Source-assigned unique identifier
    pub id: String,
    /// Display title (may be empty)
    pub title: String,
    /// Animated thumbnail URL
    pub thumbnail_url: String,
    /// First-frame still of the thumbnail, when the source provides one
    pub still_url: Option<String>,
    /// Page to open when the user follows the item's link
    pub page_url: String,
}

impl SearchResult {
    /// URL the grid downloads for the cell image. Prefers the still frame.
    pub fn preview_url(&self) -> &str {
        self.still_url.as_deref().unwrap_or(&self.thumbnail_url)
    }
}

/// Parameters of one outbound search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Full search phrase, qualifiers already appended
    pub phrase: String,
    pub limit: u32,
    pub offset: u32,
    /// Content rating filter (e.g. "g")
    pub rating: String,
    /// Locale hint (e.g. "vi")
    pub lang: String,
}

pub type SearchFuture = Pin<Box<dyn Future<Output = Result<Vec<SearchResult>, FetchError>> + Send>>;

/// Trait for image search backends (the external collaborator)
pub trait ImageSource: Send + Sync {
    /// Name of this source, used in logs
    fn name(&self) -> &str;

    /// Run one search. Implementations must not retry.
    fn search(&self, params: SearchParams) -> SearchFuture;
}
