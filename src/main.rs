#![windows_subsystem = "windows"]

mod about;
mod app;
mod deck;
mod egui_winit_wgpu_context;
mod event;
mod fonts;
#[cfg(feature = "fps")]
mod fps_counter;
mod i18n;
mod main_window;
mod shortcut;
mod theme;
mod tilt;
mod ui;
mod window;
mod window_icon;

fn main() {
    env_logger::init();

    if let Err(err) = i18n::select_system_locales() {
        log::warn!("Failed to select system locales: {}", err);
    }

    let app = app::App::new().unwrap();

    app.run();
}
