use std::cell::Cell;
use std::rc::Rc;

use landing_core::config::NavConfig;
use landing_core::nav::{
    link_highlights, navbar_scrolled, smooth_scroll_top, SectionBounds, MENU_OPEN_CLASS,
    SCROLLED_CLASS,
};
use landing_core::{LandingError, MenuState};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions};

use crate::interop::{
    listen, offset_box, query_all, query_all_in, require, set_class, set_style, window,
};

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = "section[id]";

pub fn bind_scrolled_navbar(document: &Document, config: &NavConfig) -> Result<(), LandingError> {
    let navbar = require(document, NAVBAR_SELECTOR)?;
    let window = window()?;
    let threshold = config.scrolled_threshold_px;

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_: Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        set_class(&navbar, SCROLLED_CLASS, navbar_scrolled(scroll_y, threshold));
    })
}

pub fn bind_mobile_menu(document: &Document) -> Result<(), LandingError> {
    let button = require(document, MENU_BUTTON_SELECTOR)?;
    let links = require(document, NAV_LINKS_SELECTOR)?;
    let menu = Rc::new(Cell::new(MenuState::default()));

    let apply = {
        let button = button.clone();
        let links = links.clone();
        move |state: MenuState| {
            set_class(&button, MENU_OPEN_CLASS, state.is_open());
            set_class(&links, MENU_OPEN_CLASS, state.is_open());
        }
    };

    {
        let menu = Rc::clone(&menu);
        let apply = apply.clone();
        listen(&button, "click", move |_: Event| {
            let mut state = menu.get();
            state.toggle();
            menu.set(state);
            apply(state);
        })?;
    }

    for link in query_all_in(&links, "a") {
        let menu = Rc::clone(&menu);
        let apply = apply.clone();
        listen(&link, "click", move |_: Event| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            apply(state);
        })?;
    }

    Ok(())
}

pub fn bind_smooth_scroll(document: &Document, config: &NavConfig) -> Result<(), LandingError> {
    let window = window()?;
    let header_offset = config.header_offset_px;

    for anchor in query_all(document, ANCHOR_SELECTOR) {
        let document = document.clone();
        let window = window.clone();
        let source = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();

            let Some(href) = source.get_attribute("href") else {
                return;
            };
            // "#" alone is not a valid selector; treat it like a missing target.
            let Some(target) = document.query_selector(&href).ok().flatten() else {
                return;
            };
            let Some((offset_top, _)) = offset_box(&target) else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(smooth_scroll_top(offset_top, header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    Ok(())
}

pub fn bind_active_links(document: &Document, config: &NavConfig) -> Result<(), LandingError> {
    let tracked: Vec<(Element, Element)> = query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|section| {
            let link_selector = format!("{} a[href=\"#{}\"]", NAV_LINKS_SELECTOR, section.id());
            let link = document.query_selector(&link_selector).ok().flatten()?;
            Some((section, link))
        })
        .collect();
    if tracked.is_empty() {
        return Ok(());
    }

    let window = window()?;
    let scroll_window = window.clone();
    let pre_offset = config.section_pre_offset_px;
    let color = config.active_link_color.clone();

    listen(&window, "scroll", move |_: Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        let bounds: Vec<SectionBounds> = tracked
            .iter()
            .map(|(section, _)| {
                let (offset_top, height) = offset_box(section).unwrap_or((0.0, 0.0));
                SectionBounds { offset_top, height }
            })
            .collect();

        for ((_, link), active) in tracked
            .iter()
            .zip(link_highlights(&bounds, scroll_y, pre_offset))
        {
            set_style(link, "color", if active { color.as_str() } else { "" });
        }
    })
}
