use curator_editor::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("curator_editor", LevelFilter::Debug)
        .filter_module("curator_core", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::warn!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
        log::info!("Initializing logger from env");
    }

    let config = match AppConfig::from_environment() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load editor configuration: {err:#}");
            std::process::exit(2);
        }
    };

    app::application(config).run()
}
