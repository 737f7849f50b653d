// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod card_images;
mod catalog;
mod completion;
mod config;
mod error;
mod image_cache;
mod image_loader;
mod services;
mod startup;
mod state;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app_state = startup::load_app_state()?;
    let app = AppWindow::new()?;

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);
    startup::configure_startup_images(&app, &app_state);

    app.run()?;

    Ok(())
}
