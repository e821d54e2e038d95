use crate::{theme::palette::Palette, tilt::Tilt};
use egui::{vec2, Align2, CursorIcon, FontId, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};

// The lifted quad overhangs the card rect; the allocation includes this
// margin on every side.
const LIFT_MARGIN: f32 = 8.0;

const ICON_OFFSET_Y: f32 = -22.0;
const ICON_SIZE: f32 = 36.0;
const TITLE_OFFSET_Y: f32 = 24.0;
const TITLE_SIZE: f32 = 17.0;

pub struct TiltCard<'a> {
    icon: char,
    title: String,
    palette: &'a Palette,

    selected: bool,
    size: Vec2,
}

impl<'a> Widget for TiltCard<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let response =
            ui.allocate_response(self.size + Vec2::splat(LIFT_MARGIN * 2.0), Sense::click());

        let rect = response.rect.shrink(LIFT_MARGIN);

        let tilt = match response.hover_pos() {
            Some(pointer) => Tilt::from_pointer(rect, pointer),
            None => Tilt::NEUTRAL,
        };

        let fill = if tilt.is_neutral() {
            self.palette.card_fill
        } else {
            self.palette.card_fill_hovered
        };
        let stroke = if self.selected {
            Stroke::new(2.0, self.palette.accent)
        } else {
            Stroke::new(1.0, self.palette.card_stroke)
        };

        let quad = tilt.project_quad(rect);
        ui.painter()
            .add(Shape::convex_polygon(quad.to_vec(), fill, stroke));

        // Text rides the tilted plane: anchors are projected like the quad
        // corners and font sizes follow the lift.
        let scale = tilt.lift_scale();

        ui.painter().text(
            tilt.project(rect.center(), vec2(0.0, ICON_OFFSET_Y)),
            Align2::CENTER_CENTER,
            self.icon,
            FontId::proportional(ICON_SIZE * scale),
            self.palette.accent,
        );
        ui.painter().text(
            tilt.project(rect.center(), vec2(0.0, TITLE_OFFSET_Y)),
            Align2::CENTER_CENTER,
            &self.title,
            FontId::proportional(TITLE_SIZE * scale),
            self.palette.card_text,
        );

        if response.hovered() {
            ui.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
        }

        response
    }
}

impl<'a> TiltCard<'a> {
    pub fn new(icon: char, title: String, palette: &'a Palette) -> Self {
        Self {
            icon,
            title,
            palette,
            selected: false,
            size: vec2(220.0, 140.0),
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}
