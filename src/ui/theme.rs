use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Window background
pub const BACKGROUND: Color = Color {
    r: 0.97,
    g: 0.97,
    b: 0.98,
    a: 1.0,
};

/// Input and card surface
const SURFACE: Color = Color::WHITE;

/// Accent color for focus rings and the submit button
const ACCENT: Color = Color {
    r: 0.0,
    g: 0.48,
    b: 1.0,
    a: 1.0,
};

const BORDER: Color = Color {
    r: 0.87,
    g: 0.87,
    b: 0.87,
    a: 1.0,
};

const DISABLED: Color = Color {
    r: 0.96,
    g: 0.96,
    b: 0.96,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.2,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

pub const TEXT_SECONDARY: Color = Color {
    r: 0.4,
    g: 0.4,
    b: 0.4,
    a: 1.0,
};

const ERROR_TEXT: Color = Color {
    r: 0.86,
    g: 0.21,
    b: 0.27,
    a: 1.0,
};

const ERROR_BACKGROUND: Color = Color {
    r: 1.0,
    g: 0.92,
    b: 0.93,
    a: 1.0,
};

/// Style for the main container wrapping the whole window
pub fn main_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the search text input
pub fn search_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    let disabled = matches!(status, text_input::Status::Disabled);
    text_input::Style {
        background: if disabled { DISABLED } else { SURFACE }.into(),
        border: Border {
            color: if focused { ACCENT } else { BORDER },
            width: 2.0,
            radius: 8.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color { a: 0.25, ..ACCENT },
    }
}

pub fn submit_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => Color { a: 0.5, ..ACCENT },
        button::Status::Hovered | button::Status::Pressed => Color {
            r: 0.0,
            g: 0.34,
            b: 0.7,
            a: 1.0,
        },
        button::Status::Active => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// The "×" inside the search field
pub fn clear_button(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: if matches!(status, button::Status::Hovered) {
            TEXT_PRIMARY
        } else {
            TEXT_SECONDARY
        },
        ..button::Style::default()
    }
}

pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(ERROR_BACKGROUND.into()),
        text_color: Some(ERROR_TEXT),
        border: Border {
            color: ERROR_TEXT,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Style for one grid cell
pub fn cell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.1, ..Color::BLACK },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Dark scrim shown over a hovered cell
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.7, ..Color::BLACK }.into()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn view_link(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = if matches!(status, button::Status::Hovered) {
        1.0
    } else {
        0.85
    };
    button::Style {
        background: Some(Color { a: alpha, ..Color::WHITE }.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
