#[cfg(feature = "fps")]
use crate::fps_counter::FpsCounter;
use crate::{
    deck::Section,
    egui_winit_wgpu_context::EguiWinitWgpuContext,
    event::{AppStatus, EventProxyWinit, UserEvent},
    i18n::LANGUAGE_LOADER,
    shortcut::Shortcut,
    theme::{palette::Palette, Theme},
    ui::{self, UiState},
    window::WindowExt,
    window_icon::window_icon,
};
use anyhow::Result;
use i18n_embed_fl::fl;
use raw_window_handle::{HasRawWindowHandle, RawWindowHandle};
use std::time::Instant;
use winit::{
    dpi::{LogicalSize, Size},
    event::WindowEvent,
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder, WindowId},
};

const INITIAL_HEIGHT: f64 = 640.0;
const INITIAL_WIDTH: f64 = 960.0;
const MIN_HEIGHT: f64 = 480.0;
const MIN_WIDTH: f64 = 720.0;

pub struct MainWindow {
    context: EguiWinitWgpuContext,
    event_proxy: EventProxyWinit<UserEvent>,
    #[cfg(feature = "fps")]
    fps_counter: FpsCounter,
    selected: Option<Section>,
    shortcut: Shortcut,
    status: AppStatus,
    status_clock: Instant,
    theme: Theme,
    window: Window,
}

impl MainWindow {
    pub fn new(
        event_loop: &EventLoopWindowTarget<UserEvent>,
        event_proxy: EventProxyWinit<UserEvent>,
        theme: Theme,
    ) -> Result<Self> {
        let window = WindowBuilder::new()
            .with_title("Tiltdeck")
            .with_inner_size(Size::Logical(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT)))
            .with_min_inner_size(Size::Logical(LogicalSize::new(MIN_WIDTH, MIN_HEIGHT)))
            .with_window_icon(window_icon())
            .build(event_loop)?;

        let context = EguiWinitWgpuContext::new(&window, event_loop, theme)?;

        Ok(Self {
            context,
            event_proxy,
            #[cfg(feature = "fps")]
            fps_counter: FpsCounter::new(),
            selected: None,
            shortcut: Shortcut::new(),
            status: AppStatus::Idle,
            status_clock: Instant::now(),
            theme,
            window,
        })
    }

    pub fn change_status(&mut self, status: AppStatus) {
        self.status = status;

        self.status_clock = Instant::now();
    }

    pub fn raw_window_handle(&self) -> RawWindowHandle {
        self.window.raw_window_handle()
    }

    pub fn select_section(&mut self, section: Section) {
        log::info!("Opened section: {:?}", section);

        self.selected = Some(section);
        self.change_status(AppStatus::Info(fl!(
            LANGUAGE_LOADER,
            "status-section-opened",
            section = section.title()
        )));
    }
}

impl WindowExt for MainWindow {
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
        if self.status_clock.elapsed().as_secs() > 5 {
            self.status = AppStatus::Idle;
        }

        #[cfg(feature = "fps")]
        log::info!("FPS: {}", self.fps_counter.tick());

        let state = UiState {
            palette: Palette::of(self.theme),
            selected: self.selected,
            status: self.status.clone(),
            theme: self.theme,
        };

        let Self {
            context,
            event_proxy,
            shortcut,
            window,
            ..
        } = self;

        context.render(window, |ctx| {
            ui::draw(ctx, state, shortcut, event_proxy);
        });
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.context.set_theme(theme);
    }

    fn window_id(&self) -> WindowId {
        self.window.id()
    }
}
