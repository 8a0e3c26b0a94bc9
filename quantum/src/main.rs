mod app;
mod catalog;
mod components;
mod layout;
mod routers;
mod shared;
mod state;
mod widgets;

use std::sync::Arc;

use env_logger::Env;
use iced::{Size, window};
use image::ImageFormat;

use crate::app::{
    App, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::shared::ui::icons::APP_ICON_DATA;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let course = match catalog::load_embedded() {
        Ok(course) => Arc::new(course),
        Err(err) => {
            log::error!("failed to load the course catalog: {err}");
            std::process::exit(1);
        },
    };
    log::info!("loaded course \"{}\"", course.title);

    iced::application(
        move || App::new(Arc::clone(&course)),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .antialiasing(true)
    .window(window::Settings {
        size: Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        },
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        icon: window::icon::from_file_data(
            APP_ICON_DATA,
            Some(ImageFormat::Png),
        )
        .ok(),
        ..window::Settings::default()
    })
    .resizable(true)
    .subscription(App::subscription)
    .run()
}
