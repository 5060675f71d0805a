pub const SCROLLED_CLASS: &str = "scrolled";
pub const MENU_OPEN_CLASS: &str = "active";

pub fn navbar_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Mobile menu; the same open flag drives both the button and the link list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Scroll destination for an in-page anchor, leaving room for the fixed header.
pub fn smooth_scroll_top(offset_top: f64, header_offset_px: f64) -> f64 {
    offset_top - header_offset_px
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, scroll_y: f64, pre_offset_px: f64) -> bool {
        let top = self.offset_top - pre_offset_px;
        top <= scroll_y && scroll_y < top + self.height
    }
}

/// Index of the first section whose range holds `scroll_y`.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    pre_offset_px: f64,
) -> Option<usize> {
    sections
        .iter()
        .position(|section| section.contains(scroll_y, pre_offset_px))
}

/// One flag per section: `true` for the single highlighted link, `false` for
/// every link that must be cleared.
pub fn link_highlights(
    sections: &[SectionBounds],
    scroll_y: f64,
    pre_offset_px: f64,
) -> Vec<bool> {
    let active = active_section(sections, scroll_y, pre_offset_px);
    (0..sections.len()).map(|i| Some(i) == active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                offset_top: 0.0,
                height: 600.0,
            },
            SectionBounds {
                offset_top: 600.0,
                height: 800.0,
            },
            SectionBounds {
                offset_top: 1400.0,
                height: 500.0,
            },
        ]
    }

    #[test]
    fn navbar_marks_scrolled_past_threshold() {
        assert!(!navbar_scrolled(0.0, 50.0));
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(51.0, 50.0));
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn smooth_scroll_compensates_for_header() {
        assert_eq!(smooth_scroll_top(1400.0, 80.0), 1320.0);
    }

    #[test]
    fn only_the_containing_section_is_highlighted() {
        // Section B spans [500, 1300) once the 100px lead is applied.
        assert_eq!(link_highlights(&page(), 900.0, 100.0), vec![false, true, false]);
        assert_eq!(link_highlights(&page(), 500.0, 100.0), vec![false, true, false]);
        assert_eq!(link_highlights(&page(), 1300.0, 100.0), vec![false, false, true]);
    }

    #[test]
    fn scroll_outside_every_section_clears_all() {
        assert_eq!(link_highlights(&page(), 5000.0, 100.0), vec![false, false, false]);
        assert_eq!(active_section(&[], 10.0, 100.0), None);
    }
}
