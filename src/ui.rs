mod tilt_card;

use crate::{
    deck::Section,
    event::{AppStatus, EventProxy, UserEvent},
    i18n::{self, LANGUAGE_LOADER, LANGUAGES},
    shortcut::Shortcut,
    theme::{palette::Palette, Theme},
};
use egui::{vec2, Align, CentralPanel, Color32, ComboBox, Context, Layout, TopBottomPanel, Ui};
use i18n_embed_fl::fl;
use tilt_card::TiltCard;

const CARD_HEIGHT: f32 = 140.0;
const CARD_WIDTH: f32 = 220.0;

pub struct UiState {
    pub palette: Palette,
    pub selected: Option<Section>,
    pub status: AppStatus,
    pub theme: Theme,
}

pub fn draw(
    ctx: &Context,
    state: UiState,
    shortcut: &Shortcut,
    event_proxy: &impl EventProxy<UserEvent>,
) {
    consume_shortcuts(ctx, shortcut, event_proxy);

    TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Tiltdeck");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(theme_toggle_label(state.theme)).clicked() {
                    event_proxy.send_event(UserEvent::ToggleTheme);
                }

                language_menu(ui, event_proxy);

                if ui.button(fl!(LANGUAGE_LOADER, "about")).clicked() {
                    event_proxy.send_event(UserEvent::OpenAbout);
                }
            });
        });
        ui.add_space(4.0);
    });

    let is_dark = ctx.style().visuals.dark_mode;
    TopBottomPanel::bottom("status").show(ctx, |ui| match state.status {
        AppStatus::Info(message) => {
            ui.label(message);
        }
        AppStatus::Warning(message) => {
            ui.colored_label(
                if is_dark {
                    Color32::KHAKI
                } else {
                    Color32::DARK_RED
                },
                message,
            );
        }
        AppStatus::Error(message) => {
            ui.colored_label(
                if is_dark {
                    Color32::LIGHT_RED
                } else {
                    Color32::DARK_RED
                },
                message,
            );
        }
        AppStatus::Idle => {}
    });

    CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.label(fl!(LANGUAGE_LOADER, "deck-intro"));
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for section in Section::ALL {
                let card = TiltCard::new(section.icon(), section.title(), &state.palette)
                    .size(vec2(CARD_WIDTH, CARD_HEIGHT))
                    .selected(state.selected == Some(section));

                if ui.add(card).clicked() {
                    event_proxy.send_event(UserEvent::OpenSection(section));
                }
            }
        });

        if let Some(section) = state.selected {
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);
            ui.heading(section.title());
            ui.label(section.description());
        }
    });
}

fn consume_shortcuts(ctx: &Context, shortcut: &Shortcut, event_proxy: &impl EventProxy<UserEvent>) {
    if ctx.input_mut(|input| input.consume_shortcut(&shortcut.app_quit)) {
        event_proxy.send_event(UserEvent::Quit);
    }

    if ctx.input_mut(|input| input.consume_shortcut(&shortcut.theme_toggle)) {
        event_proxy.send_event(UserEvent::ToggleTheme);
    }
}

fn language_menu(ui: &mut Ui, event_proxy: &impl EventProxy<UserEvent>) {
    let current = i18n::current_language();
    let current_label = LANGUAGES
        .iter()
        .find(|language| language.id == current)
        .map_or("English", |language| language.label);

    ComboBox::from_id_source("language")
        .selected_text(current_label)
        .show_ui(ui, |ui| {
            for language in &LANGUAGES {
                if ui
                    .selectable_label(language.id == current, language.label)
                    .clicked()
                {
                    event_proxy.send_event(UserEvent::SelectLanguage(language.id));
                }
            }
        })
        .response
        .on_hover_text(fl!(LANGUAGE_LOADER, "language"));
}

fn theme_toggle_label(theme: Theme) -> String {
    match theme {
        Theme::Dark => fl!(LANGUAGE_LOADER, "switch-to-light"),
        Theme::Light => fl!(LANGUAGE_LOADER, "switch-to-dark"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_names_the_opposite_theme() {
        assert_eq!(
            theme_toggle_label(Theme::Light),
            fl!(LANGUAGE_LOADER, "switch-to-dark")
        );
        assert_eq!(
            theme_toggle_label(Theme::Dark),
            fl!(LANGUAGE_LOADER, "switch-to-light")
        );
    }

    #[test]
    fn toggle_labels_differ() {
        assert_ne!(
            theme_toggle_label(Theme::Light),
            theme_toggle_label(Theme::Dark)
        );
    }
}
