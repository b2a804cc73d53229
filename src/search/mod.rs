//! Search request lifecycle.
//!
//! [`SearchController`] owns the query text and a single [`RequestState`]. A
//! submit hands back a [`SearchRequest`] tagged with a generation number; the
//! caller runs it (see [`execute`]) and feeds the [`SearchOutcome`] back through
//! [`SearchController::complete`]. Outcomes from anything but the latest
//! generation are dropped, so a slow response can never overwrite newer state.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::messages;
use crate::source::{ImageSource, SearchParams, SearchResult};

/// Why the current submission ended without results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    /// Query was empty after trimming; no request was made
    EmptyQuery,
    /// Request succeeded but matched nothing
    NoResults,
    /// Client-side timeout reported by the source
    Timeout,
    /// Any other transport, status or decode failure
    Request,
}

impl Failure {
    pub fn message(self) -> &'static str {
        messages::failure_message(self)
    }

    fn from_fetch(err: &FetchError) -> Self {
        if err.is_timeout() {
            Failure::Timeout
        } else {
            Failure::Request
        }
    }
}

/// Rendering mode of the widget. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<SearchResult>),
    Failed(Failure),
}

/// Fixed parameters appended to every outbound search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Words appended to the user's text to narrow the domain
    pub qualifiers: Vec<String>,
    pub limit: u32,
    pub offset: u32,
    pub rating: String,
    pub lang: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for SearchSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            qualifiers: config.qualifiers.clone(),
            limit: config.limit,
            offset: config.offset,
            rating: config.rating.clone(),
            lang: config.lang.clone(),
        }
    }
}

impl SearchSettings {
    /// Build the outbound phrase from an already trimmed query.
    pub fn phrase(&self, trimmed: &str) -> String {
        let mut phrase = trimmed.to_string();
        for word in &self.qualifiers {
            phrase.push(' ');
            phrase.push_str(word);
        }
        phrase
    }

    fn params(&self, trimmed: &str) -> SearchParams {
        SearchParams {
            phrase: self.phrase(trimmed),
            limit: self.limit,
            offset: self.offset,
            rating: self.rating.clone(),
            lang: self.lang.clone(),
        }
    }
}

/// A request the controller has committed to; run it with [`execute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub params: SearchParams,
}

/// Result of running a [`SearchRequest`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub generation: u64,
    pub result: Result<Vec<SearchResult>, FetchError>,
}

pub struct SearchController {
    settings: SearchSettings,
    query: String,
    state: RequestState,
    /// Bumped by every submit and clear; 0 = nothing issued yet
    generation: u64,
}

impl SearchController {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            query: String::new(),
            state: RequestState::Idle,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    /// Current generation; bumped by every submit and every clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn results(&self) -> &[SearchResult] {
        match &self.state {
            RequestState::Success(results) => results,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self.state {
            RequestState::Failed(failure) => Some(failure.message()),
            _ => None,
        }
    }

    /// Whether the clear control should be offered
    pub fn can_clear(&self) -> bool {
        !self.query.is_empty() && !self.is_loading()
    }

    /// Replace the query verbatim. Dismisses a displayed error.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }

    /// Reset query, results and error. Anything still tied to the current
    /// generation (an in-flight request, pending thumbnails) is orphaned.
    pub fn clear_query(&mut self) {
        self.query.clear();
        if self.is_loading() {
            tracing::debug!("Clearing while request #{} is in flight", self.generation);
        }
        self.generation += 1;
        self.state = RequestState::Idle;
    }

    /// Validate the query and start a request.
    ///
    /// Returns `None` when nothing should be sent: either the trimmed query is
    /// empty (state becomes `Failed(EmptyQuery)`) or a request is already
    /// loading (state untouched).
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        if self.is_loading() {
            tracing::warn!(
                "Ignoring submit while request #{} is loading",
                self.generation
            );
            return None;
        }

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.state = RequestState::Failed(Failure::EmptyQuery);
            return None;
        }

        let params = self.settings.params(trimmed);
        self.generation += 1;
        self.state = RequestState::Loading;
        tracing::debug!("Request #{}: q='{}'", self.generation, params.phrase);

        Some(SearchRequest {
            generation: self.generation,
            params,
        })
    }

    /// Apply a finished request. Returns false if the outcome was stale and ignored.
    pub fn complete(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                "Dropping stale response #{} (latest #{})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(results) if results.is_empty() => RequestState::Failed(Failure::NoResults),
            Ok(results) => {
                tracing::info!("Request #{} returned {} results", outcome.generation, results.len());
                RequestState::Success(results)
            }
            Err(err) => {
                tracing::error!("Request #{} failed: {}", outcome.generation, err);
                RequestState::Failed(Failure::from_fetch(&err))
            }
        };
        true
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

/// Run a request against a source exactly once.
pub async fn execute(source: Arc<dyn ImageSource>, request: SearchRequest) -> SearchOutcome {
    tracing::debug!("Searching {} for request #{}", source.name(), request.generation);
    let result = source.search(request.params).await;
    SearchOutcome {
        generation: request.generation,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            title: format!("{id} title"),
            thumbnail_url: format!("https://media.example/{id}.gif"),
            still_url: None,
            page_url: format!("https://giphy.com/gifs/{id}"),
        }
    }

    fn submitted(query: &str) -> (SearchController, SearchRequest) {
        let mut controller = SearchController::default();
        controller.update_query(query);
        let request = controller.submit_search().expect("request issued");
        (controller, request)
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = SearchController::default();
        assert_eq!(controller.query(), "");
        assert_eq!(controller.state(), &RequestState::Idle);
        assert!(!controller.is_loading());
        assert!(!controller.can_clear());
    }

    #[test]
    fn whitespace_queries_fail_validation_without_request() {
        for query in ["", " ", "\t", "  \n  ", "\u{3000}"] {
            let mut controller = SearchController::default();
            controller.update_query(query);
            assert_eq!(controller.submit_search(), None, "query {query:?}");
            assert_eq!(
                controller.state(),
                &RequestState::Failed(Failure::EmptyQuery)
            );
            assert_eq!(
                controller.error_message(),
                Some("Vui lòng nhập từ khóa tìm kiếm")
            );
            assert!(controller.results().is_empty());
            assert_eq!(controller.generation(), 0);
        }
    }

    #[test]
    fn phrase_is_trimmed_query_plus_qualifiers() {
        let (controller, request) = submitted("  Toyota  ");
        assert_eq!(request.params.phrase, "Toyota car automobile");
        assert_eq!(request.params.limit, 15);
        assert_eq!(request.params.offset, 0);
        assert_eq!(request.params.rating, "g");
        assert_eq!(request.params.lang, "vi");
        // the stored query is left as typed
        assert_eq!(controller.query(), "  Toyota  ");
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        let (_, request) = submitted(" Mercedes  Benz ");
        assert_eq!(request.params.phrase, "Mercedes  Benz car automobile");
    }

    #[test]
    fn submit_enters_loading() {
        let (controller, request) = submitted("BMW");
        assert!(controller.is_loading());
        assert_eq!(request.generation, 1);
        assert!(controller.results().is_empty());
        assert_eq!(controller.error_message(), None);
        assert!(!controller.can_clear());
    }

    #[test]
    fn results_are_kept_in_order() {
        let (mut controller, request) = submitted("Toyota");
        let items = vec![item("c"), item("a"), item("b")];
        assert!(controller.complete(SearchOutcome {
            generation: request.generation,
            result: Ok(items.clone()),
        }));
        assert!(!controller.is_loading());
        assert_eq!(controller.state(), &RequestState::Success(items.clone()));
        assert_eq!(controller.results(), items.as_slice());
    }

    #[test]
    fn zero_results_is_a_failure() {
        let (mut controller, request) = submitted("zzz99");
        controller.complete(SearchOutcome {
            generation: request.generation,
            result: Ok(Vec::new()),
        });
        assert!(!controller.is_loading());
        assert_eq!(controller.state(), &RequestState::Failed(Failure::NoResults));
        assert_eq!(
            controller.error_message(),
            Some("Không tìm thấy hình ảnh nào. Vui lòng thử từ khóa khác.")
        );
    }

    #[test]
    fn timeout_and_other_errors_are_classified() {
        let cases = [
            (FetchError::Timeout, Failure::Timeout),
            (FetchError::Status(500), Failure::Request),
            (FetchError::Transport("dns".into()), Failure::Request),
            (FetchError::Decode("eof".into()), Failure::Request),
            (FetchError::MissingApiKey, Failure::Request),
        ];
        for (err, expected) in cases {
            let (mut controller, request) = submitted("BMW");
            controller.complete(SearchOutcome {
                generation: request.generation,
                result: Err(err),
            });
            assert!(!controller.is_loading());
            assert_eq!(controller.state(), &RequestState::Failed(expected));
        }
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let (mut controller, first) = submitted("BMW");
        controller.update_query("Audi");
        assert_eq!(controller.submit_search(), None);
        assert!(controller.is_loading());
        assert_eq!(controller.generation(), first.generation);
    }

    #[test]
    fn update_query_dismisses_error_only() {
        let mut controller = SearchController::default();
        controller.submit_search();
        assert!(controller.error_message().is_some());

        controller.update_query("H");
        assert_eq!(controller.state(), &RequestState::Idle);
        assert_eq!(controller.query(), "H");

        let (mut controller, request) = submitted("Honda");
        controller.complete(SearchOutcome {
            generation: request.generation,
            result: Ok(vec![item("a")]),
        });
        controller.update_query("Hond");
        assert_eq!(controller.results().len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let (mut controller, request) = submitted("Honda");
        controller.complete(SearchOutcome {
            generation: request.generation,
            result: Ok(vec![item("a"), item("b")]),
        });
        assert!(controller.can_clear());

        controller.clear_query();
        assert_eq!(controller.query(), "");
        assert_eq!(controller.state(), &RequestState::Idle);
        assert!(controller.results().is_empty());
        assert_eq!(controller.error_message(), None);

        let before = controller.generation();
        controller.clear_query();
        assert!(controller.generation() > before);

        let mut failed = SearchController::default();
        failed.submit_search();
        failed.clear_query();
        assert_eq!(failed.state(), &RequestState::Idle);
    }

    #[test]
    fn clear_orphans_in_flight_request() {
        let (mut controller, request) = submitted("Honda");
        controller.clear_query();
        assert!(!controller.is_loading());

        let applied = controller.complete(SearchOutcome {
            generation: request.generation,
            result: Ok(vec![item("late")]),
        });
        assert!(!applied);
        assert_eq!(controller.state(), &RequestState::Idle);
    }

    #[test]
    fn only_latest_generation_is_applied() {
        let (mut controller, first) = submitted("Honda");
        controller.complete(SearchOutcome {
            generation: first.generation,
            result: Err(FetchError::Timeout),
        });
        controller.update_query("Kia");
        let second = controller.submit_search().unwrap();
        assert_eq!(second.generation, first.generation + 1);

        assert!(!controller.complete(SearchOutcome {
            generation: first.generation,
            result: Ok(vec![item("old")]),
        }));
        assert!(controller.is_loading());

        assert!(controller.complete(SearchOutcome {
            generation: second.generation,
            result: Ok(vec![item("new")]),
        }));
        assert_eq!(controller.results()[0].id, "new");

        // a duplicate delivery after settling is ignored too
        assert!(!controller.complete(SearchOutcome {
            generation: second.generation,
            result: Err(FetchError::Timeout),
        }));
        assert_eq!(controller.results().len(), 1);
    }

    #[test]
    fn custom_qualifiers() {
        let settings = SearchSettings {
            qualifiers: vec!["truck".into()],
            ..SearchSettings::default()
        };
        assert_eq!(settings.phrase("Volvo"), "Volvo truck");

        let bare = SearchSettings {
            qualifiers: Vec::new(),
            ..SearchSettings::default()
        };
        assert_eq!(bare.phrase("Volvo"), "Volvo");
    }
}
