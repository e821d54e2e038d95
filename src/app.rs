use crate::{
    about::AboutWindow,
    event::{AppStatus, EventProxyWinit, UserEvent},
    i18n::{self, LANGUAGE_LOADER},
    main_window::MainWindow,
    theme::{store::FileThemeStore, Theme, ThemeController, ThemeSink},
    window::WindowExt,
};
use anyhow::Result;
use i18n_embed_fl::fl;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder},
};

pub struct App {
    event_loop: EventLoop<UserEvent>,
    main_window: MainWindow,
    theme: ThemeController<FileThemeStore>,
}

impl App {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

        let mut theme = ThemeController::new(FileThemeStore::from_config_dir());

        let event_proxy = EventProxyWinit::from_proxy(event_loop.create_proxy());

        let mut main_window = MainWindow::new(&event_loop, event_proxy, theme.theme())?;

        theme.init(&mut Windows {
            about_window: &mut None,
            main_window: &mut main_window,
        });

        Ok(Self {
            event_loop,
            main_window,
            theme,
        })
    }

    pub fn run(mut self) {
        let mut about_window: Option<AboutWindow> = None;

        self.event_loop.run(move |event, event_loop, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::MainEventsCleared => {
                    self.main_window.request_redraw();

                    if let Some(window) = &about_window {
                        window.request_redraw();
                    }
                }
                Event::RedrawRequested(window_id) => {
                    if window_id == self.main_window.window_id() {
                        self.main_window.render();
                    } else if let Some(window) = about_window.as_mut() {
                        if window_id == window.window_id() {
                            window.render();
                        }
                    }
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } => {
                    if window_id == self.main_window.window_id() {
                        match event {
                            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                            _ => {
                                if forward_window_event(&mut self.main_window, event) {
                                    self.main_window.request_redraw();
                                }
                            }
                        }
                    } else {
                        let mut close_about = false;

                        if let Some(window) = about_window.as_mut() {
                            if window_id == window.window_id() {
                                if matches!(event, WindowEvent::CloseRequested) {
                                    close_about = true;
                                } else if forward_window_event(window, event) {
                                    window.request_redraw();
                                }
                            }
                        }

                        if close_about {
                            about_window = None;
                        }
                    }
                }
                Event::UserEvent(event) => match event {
                    UserEvent::OpenAbout => {
                        if about_window.is_none() {
                            match AboutWindow::new(
                                event_loop,
                                Some(self.main_window.raw_window_handle()),
                                self.theme.theme(),
                            ) {
                                Ok(window) => about_window = Some(window),
                                Err(err) => {
                                    log::error!("Failed to open the about window: {}", err);

                                    self.main_window.change_status(AppStatus::Error(fl!(
                                        LANGUAGE_LOADER,
                                        "status-about-failed"
                                    )));
                                }
                            }
                        }
                    }
                    UserEvent::OpenSection(section) => self.main_window.select_section(section),
                    UserEvent::Quit => *control_flow = ControlFlow::Exit,
                    UserEvent::SelectLanguage(id) => match i18n::select_locales(&[id]) {
                        Ok(()) => log::info!("Switched language to {}", id),
                        Err(err) => {
                            log::warn!("Failed to switch language: {}", err);

                            self.main_window.change_status(AppStatus::Warning(fl!(
                                LANGUAGE_LOADER,
                                "status-language-failed"
                            )));
                        }
                    },
                    UserEvent::ToggleTheme => {
                        let theme = self.theme.toggle(&mut Windows {
                            about_window: &mut about_window,
                            main_window: &mut self.main_window,
                        });

                        log::info!("Switched theme to {}", theme);
                    }
                },
                _ => {}
            }
        });
    }
}

/// The open windows, viewed as one place to apply a theme.
struct Windows<'a> {
    about_window: &'a mut Option<AboutWindow>,
    main_window: &'a mut MainWindow,
}

impl ThemeSink for Windows<'_> {
    fn set_theme(&mut self, theme: Theme) {
        self.main_window.set_theme(theme);

        if let Some(window) = self.about_window.as_mut() {
            window.set_theme(theme);
        }
    }
}

fn forward_window_event(window: &mut impl WindowExt, event: &WindowEvent) -> bool {
    let repaint = window.handle_window_event(event);

    match event {
        WindowEvent::Resized(physical_size) => {
            window.on_resized(physical_size.width, physical_size.height);
        }
        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
            window.on_scaled(*scale_factor as f32);
        }
        _ => {}
    }

    repaint
}
