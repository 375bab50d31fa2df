use std::fmt;

/// One of the two stacked preview cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Back,
    Front,
}

impl Layer {
    pub fn z_index(self) -> u32 {
        match self {
            Layer::Back => 10,
            Layer::Front => 20,
        }
    }
}

/// Normalized pointer position inside the hover region, both axes in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of the hover region, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionRect {
    /// Normalizes client coordinates against this rect.
    /// A collapsed region is treated as one unit wide/high so the result stays finite.
    pub fn sample(&self, client_x: f64, client_y: f64) -> PointerSample {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);
        PointerSample {
            x: ((client_x - self.left) / width).clamp(0.0, 1.0),
            y: ((client_y - self.top) / height).clamp(0.0, 1.0),
        }
    }
}

impl Default for PointerSample {
    fn default() -> Self {
        PointerSample { x: 0.0, y: 0.0 }
    }
}

/// Resting pose of a single layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPose {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    /// Percent. `None` leaves horizontal offset out of the resting transform.
    pub translate_x: Option<f64>,
    pub translate_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub perspective_px: f64,
    /// Degrees of tilt per unit of pointer offset from the region's center.
    pub sensitivity: f64,
    /// Extra horizontal shift (percent) applied to the front layer while hovering.
    pub hover_shift_x: f64,
    pub back: LayerPose,
    pub front: LayerPose,
}

impl ParallaxConfig {
    pub fn pose(&self, layer: Layer) -> &LayerPose {
        match layer {
            Layer::Back => &self.back,
            Layer::Front => &self.front,
        }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ParallaxConfig {
            perspective_px: 2000.0,
            sensitivity: 2.0,
            hover_shift_x: 2.0,
            back: LayerPose {
                rotate_x: 8.0,
                rotate_y: 4.0,
                scale: 0.95,
                translate_x: None,
                translate_y: -5.0,
            },
            front: LayerPose {
                rotate_x: 8.0,
                rotate_y: 4.0,
                scale: 0.85,
                translate_x: Some(8.0),
                translate_y: 12.0,
            },
        }
    }
}

/// A composed CSS transform. Displays as
/// `perspective rotateX rotateY [translateX] translateY scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub perspective_px: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub translate_x: Option<f64>,
    pub translate_y: f64,
    pub scale: f64,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            self.perspective_px, self.rotate_x, self.rotate_y
        )?;
        if let Some(tx) = self.translate_x {
            write!(f, " translateX({}%)", tx)?;
        }
        write!(f, " translateY({}%) scale({})", self.translate_y, self.scale)
    }
}

pub fn compute_transform(config: &ParallaxConfig, layer: Layer, pointer: PointerSample, hovering: bool) -> Transform {
    let base = config.pose(layer);

    if !hovering {
        return Transform {
            perspective_px: config.perspective_px,
            rotate_x: base.rotate_x,
            rotate_y: base.rotate_y,
            translate_x: match layer {
                Layer::Back => None,
                Layer::Front => base.translate_x,
            },
            translate_y: base.translate_y,
            scale: base.scale,
        };
    }

    let rotate_x_delta = (pointer.y - 0.5) * config.sensitivity;
    let rotate_y_delta = (pointer.x - 0.5) * config.sensitivity;
    let translate_x = match layer {
        Layer::Back => 0.0,
        Layer::Front => base.translate_x.unwrap_or(0.0) + config.hover_shift_x,
    };

    Transform {
        perspective_px: config.perspective_px,
        rotate_x: base.rotate_x + rotate_x_delta,
        rotate_y: base.rotate_y + rotate_y_delta,
        translate_x: Some(translate_x),
        translate_y: base.translate_y,
        scale: base.scale,
    }
}

/// Short easing while tracking the pointer, a slower settle back to rest.
pub fn transition(hovering: bool) -> &'static str {
    if hovering {
        "transform 0.1s ease-out"
    } else {
        "transform 0.4s ease-out"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: PointerSample = PointerSample { x: 0.5, y: 0.5 };

    fn at(x: f64, y: f64) -> PointerSample {
        PointerSample { x, y }
    }

    fn rect(left: f64, top: f64, width: f64, height: f64) -> RegionRect {
        RegionRect { left, top, width, height }
    }

    #[test]
    fn resting_transform_ignores_pointer() {
        let config = ParallaxConfig::default();
        for layer in [Layer::Back, Layer::Front] {
            let a = compute_transform(&config, layer, at(0.0, 0.0), false);
            let b = compute_transform(&config, layer, at(0.9, 0.1), false);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn resting_strings_match_layer_pose() {
        let config = ParallaxConfig::default();
        assert_eq!(
            compute_transform(&config, Layer::Back, PointerSample::default(), false).to_string(),
            "perspective(2000px) rotateX(8deg) rotateY(4deg) translateY(-5%) scale(0.95)"
        );
        assert_eq!(
            compute_transform(&config, Layer::Front, PointerSample::default(), false).to_string(),
            "perspective(2000px) rotateX(8deg) rotateY(4deg) translateX(8%) translateY(12%) scale(0.85)"
        );
    }

    #[test]
    fn centered_pointer_adds_no_tilt() {
        let config = ParallaxConfig::default();
        let t = compute_transform(&config, Layer::Back, CENTER, true);
        assert_eq!(t.rotate_x, 8.0);
        assert_eq!(t.rotate_y, 4.0);
    }

    #[test]
    fn corners_tilt_by_one_degree() {
        let config = ParallaxConfig::default();

        let far = compute_transform(&config, Layer::Front, at(1.0, 1.0), true);
        assert_eq!(far.rotate_x, 9.0);
        assert_eq!(far.rotate_y, 5.0);

        let near = compute_transform(&config, Layer::Front, at(0.0, 0.0), true);
        assert_eq!(near.rotate_x, 7.0);
        assert_eq!(near.rotate_y, 3.0);
    }

    #[test]
    fn hover_shifts_front_layer_only() {
        let config = ParallaxConfig::default();
        for p in [at(0.0, 0.0), at(0.3, 0.8), at(1.0, 1.0)] {
            let front = compute_transform(&config, Layer::Front, p, true);
            let back = compute_transform(&config, Layer::Back, p, true);
            assert_eq!(front.translate_x, Some(10.0));
            assert_eq!(back.translate_x, Some(0.0));
            assert_eq!(front.translate_y, 12.0);
            assert_eq!(back.scale, 0.95);
        }
    }

    #[test]
    fn hovering_string_keeps_component_order() {
        let config = ParallaxConfig::default();
        let s = compute_transform(&config, Layer::Back, at(0.75, 0.25), true).to_string();
        assert_eq!(
            s,
            "perspective(2000px) rotateX(7.5deg) rotateY(4.5deg) translateX(0%) translateY(-5%) scale(0.95)"
        );
    }

    #[test]
    fn custom_poses_flow_through() {
        let mut config = ParallaxConfig::default();
        config.perspective_px = 1200.0;
        config.front.translate_x = Some(4.0);
        config.hover_shift_x = 1.0;
        let t = compute_transform(&config, Layer::Front, CENTER, true);
        assert_eq!(t.perspective_px, 1200.0);
        assert_eq!(t.translate_x, Some(5.0));
    }

    #[test]
    fn pointer_is_normalized_against_region() {
        let p = rect(100.0, 50.0, 200.0, 100.0).sample(150.0, 75.0);
        assert_eq!(p, at(0.25, 0.25));
    }

    #[test]
    fn collapsed_region_stays_finite() {
        let p = rect(10.0, 10.0, 0.0, 0.0).sample(10.0, 10.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p, at(0.0, 0.0));
    }

    #[test]
    fn pointer_outside_region_is_clamped() {
        let p = rect(0.0, 0.0, 100.0, 100.0).sample(-20.0, 500.0);
        assert_eq!(p, at(0.0, 1.0));
    }

    #[test]
    fn transition_is_faster_while_hovering() {
        assert_eq!(transition(true), "transform 0.1s ease-out");
        assert_eq!(transition(false), "transform 0.4s ease-out");
    }
}
