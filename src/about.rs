use crate::{
    egui_winit_wgpu_context::EguiWinitWgpuContext, i18n::LANGUAGE_LOADER, theme::Theme,
    window::WindowExt, window_icon::window_icon,
};
use anyhow::Result;
use egui::CentralPanel;
use i18n_embed_fl::fl;
use raw_window_handle::RawWindowHandle;
use winit::{
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder, WindowId},
};

const ABOUT_HEIGHT: f64 = 200.0;
const ABOUT_WIDTH: f64 = 360.0;

pub struct AboutWindow {
    context: EguiWinitWgpuContext,
    window: Window,
}

impl AboutWindow {
    pub fn new<T>(
        event_loop: &EventLoopWindowTarget<T>,
        parent: Option<RawWindowHandle>,
        theme: Theme,
    ) -> Result<Self> {
        let mut builder = WindowBuilder::new()
            .with_title(fl!(LANGUAGE_LOADER, "about"))
            .with_inner_size(LogicalSize::new(ABOUT_WIDTH, ABOUT_HEIGHT))
            .with_resizable(false)
            .with_window_icon(window_icon());

        builder = unsafe { builder.with_parent_window(parent) };

        let window = builder.build(event_loop)?;

        let context = EguiWinitWgpuContext::new(&window, event_loop, theme)?;

        Ok(Self { context, window })
    }
}

impl WindowExt for AboutWindow {
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.context.handle_window_event(event)
    }

    fn on_resized(&mut self, width: u32, height: u32) {
        self.context.on_resized(width, height);
    }

    fn on_scaled(&mut self, scale_factor: f32) {
        self.context.on_scaled(scale_factor);
    }

    fn render(&mut self) {
        self.context.render(&self.window, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(32.0);
                    ui.heading("Tiltdeck");
                    ui.strong(env!("CARGO_PKG_VERSION"));

                    ui.add_space(16.0);
                    ui.label(fl!(LANGUAGE_LOADER, "about-homepage"));
                    ui.hyperlink(env!("CARGO_PKG_HOMEPAGE"));
                });
            });
        });
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.context.set_theme(theme);
    }

    fn window_id(&self) -> WindowId {
        self.window.id()
    }
}
