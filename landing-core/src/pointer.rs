//! Pointer-driven decorations: card tilt, hero parallax and the layered stack.

use crate::config::PointerConfig;

/// Card bounds in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees for a hovered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn at(rect: CardRect, client_x: f64, client_y: f64, divisor: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: normalize_zero((y - center_y) / divisor),
            rotate_y: normalize_zero((center_x - x) / divisor),
        }
    }

    pub fn transform(self, config: &PointerConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
            config.tilt_perspective_px, self.rotate_x, self.rotate_y, config.tilt_lift_px
        )
    }

    /// Transform applied when the pointer leaves the card.
    pub fn rest_transform(config: &PointerConfig) -> String {
        format!(
            "perspective({}px) rotateX(0) rotateY(0) translateY(0)",
            config.tilt_perspective_px
        )
    }
}

/// Offsets for each hero shape; shape `i` moves `(i + 1) * speed_step` pixels
/// across the full viewport.
pub fn parallax_offsets(
    client: (f64, f64),
    viewport: (f64, f64),
    shape_count: usize,
    speed_step: f64,
) -> Vec<(f64, f64)> {
    let (width, height) = viewport;
    if width <= 0.0 || height <= 0.0 {
        return vec![(0.0, 0.0); shape_count];
    }

    let mouse_x = client.0 / width - 0.5;
    let mouse_y = client.1 / height - 0.5;

    (0..shape_count)
        .map(|index| {
            let speed = (index + 1) as f64 * speed_step;
            (normalize_zero(mouse_x * speed), normalize_zero(mouse_y * speed))
        })
        .collect()
}

pub fn translate_px((x, y): (f64, f64)) -> String {
    format!("translate({x}px, {y}px)")
}

/// Entering layer `entered` lifts every earlier layer and leaves the rest
/// untouched (`None`).
pub fn stack_lift(
    entered: usize,
    layer_count: usize,
    config: &PointerConfig,
) -> Vec<Option<String>> {
    let lift = format!("translateY(-{}px)", config.stack_lift_px);
    (0..layer_count)
        .map(|index| (index < entered).then(|| lift.clone()))
        .collect()
}

/// Leaving any layer clears every layer's transform.
pub fn stack_reset(layer_count: usize) -> Vec<String> {
    vec![String::new(); layer_count]
}

// Avoid "-0" in generated CSS.
fn normalize_zero(value: f64) -> f64 {
    value + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardRect = CardRect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 400.0,
    };

    #[test]
    fn center_of_card_has_no_rotation() {
        let tilt = Tilt::at(CARD, 250.0, 400.0, 20.0);
        assert_eq!(tilt, Tilt::NEUTRAL);
        assert_eq!(
            tilt.transform(&PointerConfig::default()),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-8px)"
        );
    }

    #[test]
    fn corner_tilts_toward_pointer() {
        let tilt = Tilt::at(CARD, 100.0, 200.0, 20.0);
        assert_eq!(tilt.rotate_x, -10.0);
        assert_eq!(tilt.rotate_y, 7.5);
    }

    #[test]
    fn leaving_resets_to_neutral() {
        assert_eq!(
            Tilt::rest_transform(&PointerConfig::default()),
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
        );
    }

    #[test]
    fn parallax_scales_with_shape_index() {
        let offsets = parallax_offsets((1000.0, 250.0), (1000.0, 1000.0), 3, 10.0);
        assert_eq!(offsets, vec![(5.0, -2.5), (10.0, -5.0), (15.0, -7.5)]);
        assert_eq!(translate_px(offsets[0]), "translate(5px, -2.5px)");
    }

    #[test]
    fn parallax_at_viewport_center_is_still() {
        let offsets = parallax_offsets((500.0, 400.0), (1000.0, 800.0), 2, 10.0);
        assert_eq!(offsets, vec![(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(translate_px(offsets[1]), "translate(0px, 0px)");
    }

    #[test]
    fn zero_viewport_yields_no_offset() {
        assert_eq!(parallax_offsets((10.0, 10.0), (0.0, 0.0), 2, 10.0), vec![(0.0, 0.0); 2]);
    }

    #[test]
    fn stack_lifts_only_preceding_layers() {
        let config = PointerConfig::default();
        let lifted = stack_lift(2, 4, &config);
        assert_eq!(
            lifted,
            vec![
                Some("translateY(-5px)".to_string()),
                Some("translateY(-5px)".to_string()),
                None,
                None
            ]
        );
        assert!(stack_lift(0, 3, &config).iter().all(Option::is_none));
        assert_eq!(stack_reset(2), vec![String::new(), String::new()]);
    }
}
