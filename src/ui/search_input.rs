use iced::widget::{button, container, row, text, text_input, Row};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::messages;
use crate::search::SearchController;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "carlens-search-input";

/// Build the search form: input, clear control and submit button.
/// Input and submit are disabled while a request is loading.
pub fn view(controller: &SearchController) -> Element<'_, Message> {
    let loading = controller.is_loading();

    let input = text_input(messages::PLACEHOLDER, controller.query())
        .on_input_maybe((!loading).then_some(Message::QueryChanged))
        .on_submit_maybe((!loading).then_some(Message::Submit))
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(16)
        .width(Fill)
        .style(theme::search_input);

    let mut field = Row::new().push(input).align_y(Alignment::Center);
    if controller.can_clear() {
        field = field.push(
            button(text(messages::CLEAR).size(22))
                .on_press(Message::ClearQuery)
                .padding([0, 6])
                .style(theme::clear_button),
        );
    }

    let submit = button(text(messages::submit_label(loading)).size(16))
        .on_press_maybe((!loading).then_some(Message::Submit))
        .padding([12, 20])
        .style(theme::submit_button);

    container(
        row![field.width(Fill), submit]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .max_width(800)
    .into()
}
