use std::rc::Rc;

use landing_core::config::PointerConfig;
use landing_core::pointer::{parallax_offsets, stack_lift, stack_reset, translate_px};
use landing_core::{CardRect, LandingError, Tilt};
use web_sys::{Document, Event, MouseEvent};

use crate::interop::{listen, query_all, set_style, viewport_size, window};

pub const CARD_SELECTOR: &str = ".product-card";
pub const SHAPE_SELECTOR: &str = ".shape";
pub const LAYER_SELECTOR: &str = ".stack-layer";

pub fn bind_card_tilt(document: &Document, config: &PointerConfig) -> Result<(), LandingError> {
    for card in query_all(document, CARD_SELECTOR) {
        let tilted = card.clone();
        let config_move = config.clone();
        listen(&card, "mousemove", move |event: MouseEvent| {
            let rect = tilted.get_bounding_client_rect();
            let tilt = Tilt::at(
                CardRect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                config_move.tilt_divisor,
            );
            set_style(&tilted, "transform", &tilt.transform(&config_move));
        })?;

        let rested = card.clone();
        let rest = Tilt::rest_transform(config);
        listen(&card, "mouseleave", move |_: Event| {
            set_style(&rested, "transform", &rest);
        })?;
    }

    Ok(())
}

pub fn bind_parallax(document: &Document, config: &PointerConfig) -> Result<(), LandingError> {
    let shapes = query_all(document, SHAPE_SELECTOR);
    if shapes.is_empty() {
        return Ok(());
    }

    let window = window()?;
    let viewport_window = window.clone();
    let speed_step = config.parallax_speed_step;

    listen(&window, "mousemove", move |event: MouseEvent| {
        let offsets = parallax_offsets(
            (f64::from(event.client_x()), f64::from(event.client_y())),
            viewport_size(&viewport_window),
            shapes.len(),
            speed_step,
        );
        for (shape, offset) in shapes.iter().zip(offsets) {
            set_style(shape, "transform", &translate_px(offset));
        }
    })
}

pub fn bind_stack_layers(document: &Document, config: &PointerConfig) -> Result<(), LandingError> {
    let layers = Rc::new(query_all(document, LAYER_SELECTOR));

    for (index, layer) in layers.iter().enumerate() {
        let lifted = Rc::clone(&layers);
        let config = config.clone();
        listen(layer, "mouseenter", move |_: Event| {
            for (other, transform) in lifted.iter().zip(stack_lift(index, lifted.len(), &config)) {
                if let Some(transform) = transform {
                    set_style(other, "transform", &transform);
                }
            }
        })?;

        let reset = Rc::clone(&layers);
        listen(layer, "mouseleave", move |_: Event| {
            for (other, transform) in reset.iter().zip(stack_reset(reset.len())) {
                set_style(other, "transform", &transform);
            }
        })?;
    }

    Ok(())
}
