/// Class set on a `.form-group` while its label floats.
pub const FOCUSED_CLASS: &str = "focused";

pub fn focused_on_focus() -> bool {
    true
}

/// Filled fields keep their label floated after losing focus.
pub fn focused_on_blur(value: &str, currently_focused: bool) -> bool {
    if value.is_empty() {
        false
    } else {
        currently_focused
    }
}
