mod app;
mod components;
mod config;
mod error;
mod message;
mod model;
mod services;
mod utils;
mod views;
mod workflow;

pub fn main() -> iced::Result {
    app::run()
}
