/// Resting and lifted styles of a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub translate_y_px: i32,
    pub shadow: &'static str,
}

pub fn card_style(hovered: bool) -> CardStyle {
    if hovered {
        CardStyle {
            translate_y_px: -8,
            shadow: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        }
    } else {
        CardStyle {
            translate_y_px: 0,
            shadow: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
        }
    }
}
