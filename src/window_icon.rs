use winit::window::Icon;

const ICON_SIZE: u32 = 32;

pub fn window_icon() -> Option<Icon> {
    match Icon::from_rgba(icon_rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("Failed to build window icon: {}", err);
            None
        }
    }
}

// A card motif drawn in code, split along the diagonal into a lit and a
// shaded facet.
fn icon_rgba(size: u32) -> Vec<u8> {
    let margin = size / 8;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let inside =
                (margin..size - margin).contains(&x) && (margin..size - margin).contains(&y);

            let pixel: [u8; 4] = if !inside {
                [0, 0, 0, 0]
            } else if x + y < size {
                [120, 170, 255, 255]
            } else {
                [38, 98, 217, 255]
            };

            rgba.extend_from_slice(&pixel);
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_buffer_covers_the_full_square() {
        assert_eq!(icon_rgba(ICON_SIZE).len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn corners_are_transparent_and_the_center_is_not() {
        let rgba = icon_rgba(ICON_SIZE);

        assert_eq!(rgba[3], 0);

        let center = ((ICON_SIZE / 2) * ICON_SIZE + ICON_SIZE / 2) as usize * 4;
        assert_eq!(rgba[center + 3], 255);
    }

    #[test]
    fn icon_builds() {
        assert!(window_icon().is_some());
    }
}
