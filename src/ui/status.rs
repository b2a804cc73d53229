use iced::widget::{column, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::messages;
use crate::search::RequestState;
use crate::ui::theme;

/// Error banner or loading indicator for the current request state.
/// Empty for `Idle` and `Success`.
pub fn view(state: &RequestState) -> Element<'_, Message> {
    match state {
        RequestState::Failed(failure) => container(text(failure.message()).size(15))
            .padding(Padding::from([10, 14]))
            .width(Fill)
            .max_width(800)
            .style(theme::error_banner)
            .into(),
        RequestState::Loading => container(
            text(messages::LOADING)
                .size(15)
                .color(theme::TEXT_SECONDARY),
        )
        .padding(20)
        .center_x(Fill)
        .into(),
        RequestState::Idle | RequestState::Success(_) => column![].into(),
    }
}
