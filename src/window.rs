use crate::theme::Theme;
use winit::{event::WindowEvent, window::WindowId};

pub trait WindowExt {
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool;

    fn on_resized(&mut self, width: u32, height: u32);

    fn on_scaled(&mut self, scale_factor: f32);

    fn render(&mut self);

    fn request_redraw(&self);

    fn set_theme(&mut self, theme: Theme);

    fn window_id(&self) -> WindowId;
}
