//! Pure mapping from (wedges, rotation) to what the wheel draws.
//!
//! Angles are degrees clockwise from 12 o'clock. SVG's own zero points east,
//! so every conversion to coordinates subtracts 90.

use std::f64::consts::PI;

use crate::constants::{
    FULL_TURN_DEGREES, HUB_RADIUS, ICON_RADIUS_RATIO, SPIN_EASING, WHEEL_CENTER, WHEEL_RADIUS,
};
use crate::shared_twister_game::{Limb, Wedge};

pub const POINTER_PATH: &str = "M 20 40 L 10 10 L 30 10 Z";

#[derive(Debug, Clone, PartialEq)]
pub struct WedgeShape {
    pub id: String,
    pub path: String,
    pub fill: String,
    pub icon: IconPlacement,
}

/// Where a wedge's icon and side letter go. The transform leaves the glyph
/// upright relative to its sector.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPlacement {
    pub transform: String,
    pub limb: Limb,
    pub side_label: &'static str,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub wedges: Vec<WedgeShape>,
    pub rotation_degrees: f64,
    pub hub_radius: f64,
}

impl WheelLayout {
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    /// Transform for the rotating layer, pivoting on the wheel center.
    pub fn rotation_transform(&self) -> String {
        rotation_transform(self.rotation_degrees)
    }
}

pub fn sector_angle(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    FULL_TURN_DEGREES / count as f64
}

fn point_on_rim(degrees_from_top: f64) -> (f64, f64) {
    let rad = (degrees_from_top - 90.0) * (PI / 180.0);
    (
        WHEEL_CENTER + WHEEL_RADIUS * rad.cos(),
        WHEEL_CENTER + WHEEL_RADIUS * rad.sin(),
    )
}

/// SVG path for sector `index` of `count`.
pub fn wedge_path(index: usize, count: usize) -> String {
    if count == 1 {
        // An arc whose endpoints coincide draws nothing; use two half arcs.
        let (top_x, top_y) = point_on_rim(0.0);
        let (bottom_x, bottom_y) = point_on_rim(180.0);
        return format!(
            "M {top_x} {top_y} A {r} {r} 0 1 1 {bottom_x} {bottom_y} A {r} {r} 0 1 1 {top_x} {top_y} Z",
            r = WHEEL_RADIUS
        );
    }

    let angle = sector_angle(count);
    let (x1, y1) = point_on_rim(index as f64 * angle);
    let (x2, y2) = point_on_rim((index + 1) as f64 * angle);
    let large_arc = if angle > 180.0 { 1 } else { 0 };

    format!(
        "M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z",
        c = WHEEL_CENTER,
        r = WHEEL_RADIUS
    )
}

pub fn mid_angle(index: usize, count: usize) -> f64 {
    let angle = sector_angle(count);
    index as f64 * angle + angle / 2.0
}

pub fn icon_transform(index: usize, count: usize) -> String {
    format!(
        "translate({c}, {c}) rotate({}) translate({}, 0) rotate(90)",
        mid_angle(index, count) - 90.0,
        WHEEL_RADIUS * ICON_RADIUS_RATIO,
        c = WHEEL_CENTER
    )
}

pub fn rotation_transform(rotation_degrees: f64) -> String {
    format!("rotate({} {c} {c})", rotation_degrees, c = WHEEL_CENTER)
}

pub fn layout(wedges: &[Wedge], rotation_degrees: f64) -> WheelLayout {
    let count = wedges.len();
    let shapes = wedges
        .iter()
        .enumerate()
        .map(|(index, wedge)| WedgeShape {
            id: wedge.id.clone(),
            path: wedge_path(index, count),
            fill: wedge.color_value.clone(),
            icon: IconPlacement {
                transform: icon_transform(index, count),
                limb: wedge.part.limb(),
                side_label: wedge.side().as_str(),
                text_color: wedge.text_color.clone(),
            },
        })
        .collect();

    WheelLayout {
        wedges: shapes,
        rotation_degrees,
        hub_radius: HUB_RADIUS,
    }
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn spin() -> Self {
        let (x1, y1, x2, y2) = SPIN_EASING;
        Self::new(x1, y1, x2, y2)
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope_x(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * self.x1 + 6.0 * u * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let slope = self.slope_x(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Newton stalled: bisect
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn at(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// One tween of the rotating layer from its previous value to a new target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    easing: CubicBezier,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing: CubicBezier::spin(),
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms).max(0.0);
        self.from + (self.to - self.from) * self.easing.at(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Color, Palette};
    use crate::shared_twister_game::build_wedges;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_first_wedge_starts_at_top() {
        let path = wedge_path(0, 4);
        assert!(path.starts_with("M 150 150 L 150 0 A 150 150 0 0 1 300 150"), "{}", path);
    }

    #[test]
    fn test_single_wedge_is_full_disk() {
        let path = wedge_path(0, 1);
        assert_eq!(path.matches('A').count(), 2);
    }

    #[test]
    fn test_icon_sits_mid_sector() {
        assert!(close(mid_angle(0, 8), 22.5));
        assert!(close(mid_angle(3, 8), 157.5));
        assert_eq!(
            icon_transform(0, 4),
            "translate(150, 150) rotate(-45) translate(112.5, 0) rotate(90)"
        );
    }

    #[test]
    fn test_layout_follows_wedges() {
        let palette = Palette::new(vec![Color::new("g", "#22c55e", "Green")]);
        let wedges = build_wedges(&palette);
        let wheel = layout(&wedges, 720.0);
        assert_eq!(wheel.wedges.len(), 4);
        assert_eq!(wheel.wedges[1].id, "g-Right Hand");
        assert_eq!(wheel.wedges[1].fill, "#22c55e");
        assert_eq!(wheel.wedges[1].icon.side_label, "R");
        assert_eq!(wheel.rotation_transform(), "rotate(720 150 150)");
    }

    #[test]
    fn test_empty_layout() {
        let wheel = layout(&[], 10.0);
        assert!(wheel.is_empty());
        assert_eq!(sector_angle(0), 0.0);
    }

    #[test]
    fn test_easing_endpoints_and_shape() {
        let ease = CubicBezier::spin();
        assert_eq!(ease.at(0.0), 0.0);
        assert_eq!(ease.at(1.0), 1.0);
        // Fast start: well past linear early on
        assert!(ease.at(0.2) > 0.5);
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease.at(step as f64 / 100.0);
            assert!(value >= last - 1e-9);
            last = value;
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let x = step as f64 / 10.0;
            assert!((linear.at(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_animation_lands_on_target() {
        let anim = SpinAnimation::new(90.0, 1890.0, 4000.0);
        assert_eq!(anim.rotation_at(0.0), 90.0);
        assert!(anim.rotation_at(2000.0) > 990.0);
        assert_eq!(anim.rotation_at(4000.0), 1890.0);
        assert!(anim.is_finished(4500.0));
    }

    #[test]
    fn test_instant_animation() {
        let anim = SpinAnimation::new(0.0, 1800.0, 0.0);
        assert!(anim.is_finished(0.0));
        assert_eq!(anim.rotation_at(0.0), 1800.0);
    }
}
