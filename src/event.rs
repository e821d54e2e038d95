use crate::deck::Section;
use winit::event_loop::EventLoopProxy;

#[derive(Clone, Debug)]
pub enum AppStatus {
    Error(String),
    Idle,
    Info(String),
    Warning(String),
}

#[derive(Clone, Copy, Debug)]
pub enum UserEvent {
    OpenAbout,
    OpenSection(Section),
    Quit,
    SelectLanguage(&'static str),
    ToggleTheme,
}

pub trait EventProxy<T> {
    fn send_event(&self, event: T);
}

pub struct EventProxyWinit<T: 'static> {
    inner: EventLoopProxy<T>,
}

impl<T> EventProxy<T> for EventProxyWinit<T> {
    fn send_event(&self, event: T) {
        if self.inner.send_event(event).is_err() {
            log::warn!("Event loop is gone, dropping event");
        }
    }
}

impl<T> EventProxyWinit<T> {
    pub fn from_proxy(inner: EventLoopProxy<T>) -> Self {
        Self { inner }
    }
}
