use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::{column, container, image, text};
use iced::window;
use iced::{Alignment, Element, Fill, Padding, Size, Subscription, Task, Theme};

use crate::config::Config;
use crate::messages;
use crate::search::{self, SearchController, SearchOutcome, SearchSettings};
use crate::source::giphy::GiphySource;
use crate::source::ImageSource;
use crate::thumbnail;
use crate::ui::{result_grid, search_input, status, theme};

pub struct State {
    controller: SearchController,
    source: Arc<dyn ImageSource>,
    /// Shared client for thumbnail downloads
    http: reqwest::Client,

    /// Downloaded thumbnails for the current results, keyed by result id
    thumbnails: HashMap<String, image::Handle>,
    /// Result id under the pointer
    hovered: Option<String>,
    /// Current window width, drives the grid column count
    window_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ClearQuery,
    Submit,
    SearchCompleted(SearchOutcome),
    ThumbnailLoaded {
        generation: u64,
        id: String,
        handle: Option<image::Handle>,
    },
    Hovered(String),
    Unhovered(String),
    OpenLink(String),
    WindowResized(Size),
}

impl State {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let http = match reqwest::Client::builder()
            .timeout(config.api.timeout())
            .user_agent(concat!("carlens/", env!("CARGO_PKG_VERSION")))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Failed to build HTTP client: {}, using defaults", e);
                reqwest::Client::new()
            }
        };

        let api_key = config.api.api_key();
        if api_key.is_none() {
            tracing::warn!(
                "No API key found in ${} or config; searches will fail",
                crate::config::API_KEY_ENV
            );
        }

        let source = GiphySource::new(http.clone(), config.api.endpoint.clone(), api_key);
        let state = Self::with_source(
            SearchSettings::from(&config.search),
            Arc::new(source),
            http,
            config.window.width,
        );

        (
            state,
            iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
        )
    }

    pub fn with_source(
        settings: SearchSettings,
        source: Arc<dyn ImageSource>,
        http: reqwest::Client,
        window_width: f32,
    ) -> Self {
        Self {
            controller: SearchController::new(settings),
            source,
            http,
            thumbnails: HashMap::new(),
            hovered: None,
            window_width,
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn title(&self) -> String {
        String::from("Carlens")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.controller.update_query(query);
                Task::none()
            }
            Message::ClearQuery => {
                self.controller.clear_query();
                self.reset_grid();
                iced::widget::operation::focus(search_input::SEARCH_INPUT_ID)
            }
            Message::Submit => match self.controller.submit_search() {
                Some(request) => {
                    self.reset_grid();
                    Task::perform(
                        search::execute(self.source.clone(), request),
                        Message::SearchCompleted,
                    )
                }
                None => Task::none(),
            },
            Message::SearchCompleted(outcome) => {
                let generation = outcome.generation;
                if self.controller.complete(outcome) {
                    self.load_thumbnails(generation)
                } else {
                    Task::none()
                }
            }
            Message::ThumbnailLoaded {
                generation,
                id,
                handle,
            } => {
                if generation == self.controller.generation() {
                    if let Some(handle) = handle {
                        self.thumbnails.insert(id, handle);
                    }
                }
                Task::none()
            }
            Message::Hovered(id) => {
                self.hovered = Some(id);
                Task::none()
            }
            Message::Unhovered(id) => {
                // the pointer may already be over another cell
                if self.hovered.as_deref() == Some(id.as_str()) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::OpenLink(url) => {
                tracing::info!("Opening {}", url);
                if let Err(e) = open::that(&url) {
                    tracing::error!("Failed to open {}: {}", url, e);
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = text(messages::HEADING).size(32).color(theme::TEXT_PRIMARY);
        let form = search_input::view(&self.controller);
        let status = status::view(self.controller.state());
        let grid = result_grid::view(
            self.controller.results(),
            &self.thumbnails,
            self.hovered.as_deref(),
            self.window_width,
        );

        let content = column![heading, form, status, grid]
            .spacing(20)
            .padding(Padding::new(20.0))
            .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    // ---- Helpers ----

    fn load_thumbnails(&self, generation: u64) -> Task<Message> {
        let tasks = self.controller.results().iter().map(|item| {
            let id = item.id.clone();
            Task::perform(
                thumbnail::fetch(self.http.clone(), item.preview_url().to_string()),
                move |handle| Message::ThumbnailLoaded {
                    generation,
                    id,
                    handle,
                },
            )
        });
        Task::batch(tasks)
    }

    fn reset_grid(&mut self) {
        self.thumbnails.clear();
        self.hovered = None;
    }
}
