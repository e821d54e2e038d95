use crate::{
    fonts,
    theme::{palette, Theme},
};
use anyhow::Result;
use egui::{ClippedPrimitive, Color32, Context};
use egui_wgpu::{winit::Painter, WgpuConfiguration};
use egui_winit::State;
use winit::{event_loop::EventLoopWindowTarget, window::Window};

/// One egui context, winit state and wgpu painter, bundled per window.
pub struct EguiWinitWgpuContext {
    clear_color: Color32,
    context: Context,
    painter: Painter,
    state: State,
}

impl EguiWinitWgpuContext {
    pub fn new<T>(
        window: &Window,
        event_loop: &EventLoopWindowTarget<T>,
        theme: Theme,
    ) -> Result<Self> {
        let mut painter = Painter::new(WgpuConfiguration::default(), 1, None, true);

        futures::executor::block_on(painter.set_window(Some(window)))?;

        let mut state = State::new(event_loop);
        state.set_pixels_per_point(window.scale_factor() as f32);

        let context = Context::default();
        fonts::install(&context);

        let mut egui_context = Self {
            clear_color: Color32::BLACK,
            context,
            painter,
            state,
        };
        egui_context.set_theme(theme);

        Ok(egui_context)
    }

    pub fn handle_window_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        self.state.on_event(&self.context, event).repaint
    }

    pub fn on_resized(&mut self, width: u32, height: u32) {
        self.painter.on_window_resized(width, height);
    }

    pub fn on_scaled(&mut self, scale_factor: f32) {
        self.state.set_pixels_per_point(scale_factor);
    }

    pub fn render(&mut self, window: &Window, run_ui: impl FnOnce(&Context)) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            run_ui(ctx);
        });

        self.state
            .handle_platform_output(window, &self.context, full_output.platform_output);

        let clipped_primitives: &[ClippedPrimitive] = &self.context.tessellate(full_output.shapes);

        self.painter.paint_and_update_textures(
            window.scale_factor() as f32,
            self.clear_color.to_normalized_gamma_f32(),
            clipped_primitives,
            &full_output.textures_delta,
            false,
        );
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.clear_color = palette::Palette::of(theme).window_fill;
        self.context.set_visuals(palette::visuals(theme));
    }
}
