use carlens::app::State;
use carlens::config;
use iced::Size;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();
    let size = Size::new(config.window.width, config.window.height);

    tracing::info!("Starting Carlens");

    iced::application(move || State::new(&config), State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .window_size(size)
        .run()
}
