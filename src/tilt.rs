use egui::{vec2, Pos2, Rect, Vec2};

pub const MAX_ROTATE_DEG: f32 = 8.0;
pub const MAX_TRANSLATE_Z: f32 = 16.0;
pub const PERSPECTIVE: f32 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rot_x_deg: f32,
    pub rot_y_deg: f32,
    pub translate_z: f32,
}

impl Tilt {
    pub const NEUTRAL: Self = Self {
        rot_x_deg: 0.0,
        rot_y_deg: 0.0,
        translate_z: 0.0,
    };

    /// Tilt for a pointer hovering a card.
    ///
    /// The card tips toward the pointer: the hovered half rotates away from
    /// the viewer while the whole card lifts by [`MAX_TRANSLATE_Z`].
    pub fn from_pointer(rect: Rect, pointer: Pos2) -> Self {
        let half = rect.size() / 2.0;

        if half.x <= 0.0 || half.y <= 0.0 {
            return Self::NEUTRAL;
        }

        let offset = pointer - rect.center();
        let ratio_x = (offset.x / half.x).clamp(-1.0, 1.0);
        let ratio_y = (offset.y / half.y).clamp(-1.0, 1.0);

        Self {
            rot_x_deg: -ratio_y * MAX_ROTATE_DEG,
            rot_y_deg: ratio_x * MAX_ROTATE_DEG,
            translate_z: MAX_TRANSLATE_Z,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    pub fn lift_scale(&self) -> f32 {
        PERSPECTIVE / (PERSPECTIVE - self.translate_z)
    }

    /// Projects a point of the card plane back onto the screen.
    ///
    /// `offset` is relative to the card center, in screen coordinates with x
    /// to the right, y down and z toward the viewer. The point is lifted by
    /// `translate_z`, rotated around y then x, and perspective-divided at
    /// [`PERSPECTIVE`] distance.
    pub fn project(&self, center: Pos2, offset: Vec2) -> Pos2 {
        let (sin_y, cos_y) = self.rot_y_deg.to_radians().sin_cos();
        let (sin_x, cos_x) = self.rot_x_deg.to_radians().sin_cos();

        let (x, y, z) = (offset.x, offset.y, self.translate_z);
        let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);
        let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);

        let scale = PERSPECTIVE / (PERSPECTIVE - z);

        center + vec2(x, y) * scale
    }

    pub fn project_quad(&self, rect: Rect) -> [Pos2; 4] {
        let center = rect.center();
        let half = rect.size() / 2.0;

        [
            self.project(center, vec2(-half.x, -half.y)),
            self.project(center, vec2(half.x, -half.y)),
            self.project(center, vec2(half.x, half.y)),
            self.project(center, vec2(-half.x, half.y)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn card() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 120.0))
    }

    #[test]
    fn center_pointer_lifts_without_rotation() {
        let tilt = Tilt::from_pointer(card(), card().center());

        assert_eq!(tilt.rot_x_deg, 0.0);
        assert_eq!(tilt.rot_y_deg, 0.0);
        assert_eq!(tilt.translate_z, MAX_TRANSLATE_Z);
    }

    #[test]
    fn top_left_corner_reaches_both_rotation_extremes() {
        let tilt = Tilt::from_pointer(card(), card().left_top());

        assert_eq!(tilt.rot_x_deg, MAX_ROTATE_DEG);
        assert_eq!(tilt.rot_y_deg, -MAX_ROTATE_DEG);
    }

    #[test]
    fn bottom_right_corner_mirrors_top_left() {
        let tilt = Tilt::from_pointer(card(), card().right_bottom());

        assert_eq!(tilt.rot_x_deg, -MAX_ROTATE_DEG);
        assert_eq!(tilt.rot_y_deg, MAX_ROTATE_DEG);
    }

    #[test]
    fn pointer_outside_the_rect_clamps_to_the_edges() {
        let tilt = Tilt::from_pointer(card(), pos2(card().right() + 40.0, card().top() - 40.0));

        assert_eq!(tilt.rot_x_deg, MAX_ROTATE_DEG);
        assert_eq!(tilt.rot_y_deg, MAX_ROTATE_DEG);
    }

    #[test]
    fn degenerate_rect_is_neutral() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), Vec2::ZERO);

        assert!(Tilt::from_pointer(rect, pos2(10.0, 10.0)).is_neutral());
    }

    #[test]
    fn neutral_quad_is_the_rect_itself() {
        let quad = Tilt::NEUTRAL.project_quad(card());

        assert_eq!(quad[0], card().left_top());
        assert_eq!(quad[1], card().right_top());
        assert_eq!(quad[2], card().right_bottom());
        assert_eq!(quad[3], card().left_bottom());
    }

    #[test]
    fn lift_scales_the_quad_up() {
        let tilt = Tilt {
            translate_z: MAX_TRANSLATE_Z,
            ..Tilt::NEUTRAL
        };
        let quad = tilt.project_quad(card());

        let width = quad[1].x - quad[0].x;
        assert!((width / card().width() - tilt.lift_scale()).abs() < 1e-4);
        assert!(tilt.lift_scale() > 1.0);
    }

    #[test]
    fn hovered_edge_recedes() {
        let tilt = Tilt::from_pointer(card(), pos2(card().right(), card().center().y));
        let quad = tilt.project_quad(card());

        let left_height = quad[3].y - quad[0].y;
        let right_height = quad[2].y - quad[1].y;
        assert!(right_height < left_height);
    }
}
