use glam::{Vec2, Vec3};

use crate::options::BoundsOptions;

/// Clamp that never panics, even for inverted or NaN limits.
///
/// Below `min` yields `min`, above `max` yields `max`; otherwise the value
/// passes through unchanged.
#[must_use]
pub(crate) fn clamp_total(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Horizontal rectangle the rig position is confined to for one frame.
///
/// Its center follows the live follow offset, so the window shifts as the
/// zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsWindow {
    /// Lower corner on the XZ plane (`x`, `z`).
    pub min: Vec2,
    /// Upper corner on the XZ plane (`x`, `z`).
    pub max: Vec2,
}

impl BoundsWindow {
    /// Window for the given bounds and live follow offset.
    #[must_use]
    pub fn new(bounds: &BoundsOptions, follow_offset: Vec3) -> Self {
        let center = window_center(bounds, follow_offset);
        let half = Vec2::new(bounds.bound_x, bounds.bound_z) / 2.0;
        Self {
            min: Vec2::new(center.x, center.z) - half,
            max: Vec2::new(center.x, center.z) + half,
        }
    }

    /// Clamp X and Z into the window, leaving Y untouched.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            clamp_total(position.x, self.min.x, self.max.x),
            position.y,
            clamp_total(position.z, self.min.y, self.max.y),
        )
    }

    /// Whether X and Z already lie inside the window.
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.z)
    }
}

/// World-space center of the bounds window: the origin shifted back by
/// half the live follow offset. Y is always the origin's Y.
#[must_use]
pub fn window_center(bounds: &BoundsOptions, follow_offset: Vec3) -> Vec3 {
    Vec3::new(
        bounds.origin.x - follow_offset.x / 2.0,
        bounds.origin.y,
        bounds.origin.z - follow_offset.z / 2.0,
    )
}

/// Bounds Clamp: restrict `position` so the look-at point stays inside the
/// play area.
#[must_use]
pub fn clamp_position(
    position: Vec3,
    follow_offset: Vec3,
    bounds: &BoundsOptions,
) -> Vec3 {
    BoundsWindow::new(bounds, follow_offset).clamp(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f32) -> BoundsOptions {
        BoundsOptions {
            bound_x: size,
            bound_z: size,
            ..BoundsOptions::default()
        }
    }

    #[test]
    fn window_follows_offset() {
        let window =
            BoundsWindow::new(&square(100.0), Vec3::new(0.0, 30.0, -40.0));
        assert_eq!(window.min, Vec2::new(-50.0, -30.0));
        assert_eq!(window.max, Vec2::new(50.0, 70.0));
    }

    #[test]
    fn far_rig_clamps_to_corner() {
        let clamped = clamp_position(
            Vec3::new(200.0, 5.0, 200.0),
            Vec3::new(0.0, 30.0, -40.0),
            &square(100.0),
        );
        assert_eq!(clamped, Vec3::new(50.0, 5.0, 70.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let bounds = square(80.0);
        let offset = Vec3::new(6.0, 25.0, 12.0);
        let once =
            clamp_position(Vec3::new(-300.0, 1.0, 44.0), offset, &bounds);
        let twice = clamp_position(once, offset, &bounds);
        assert_eq!(once, twice);
    }

    #[test]
    fn in_range_position_is_untouched() {
        let position = Vec3::new(10.0, -3.0, 15.0);
        let offset = Vec3::new(0.0, 30.0, -40.0);
        let clamped = clamp_position(position, offset, &square(100.0));
        assert_eq!(clamped, position);
    }

    #[test]
    fn clamp_never_touches_y() {
        let clamped = clamp_position(
            Vec3::new(1e6, 1234.5, -1e6),
            Vec3::ZERO,
            &square(10.0),
        );
        assert_eq!(clamped.y, 1234.5);
    }

    #[test]
    fn origin_shifts_the_window() {
        let bounds = BoundsOptions {
            origin: Vec3::new(100.0, 0.0, -100.0),
            ..square(20.0)
        };
        let window = BoundsWindow::new(&bounds, Vec3::ZERO);
        assert_eq!(window.min, Vec2::new(90.0, -110.0));
        assert_eq!(window.max, Vec2::new(110.0, -90.0));
        assert!(window.contains(Vec3::new(100.0, 50.0, -100.0)));
        assert!(!window.contains(Vec3::ZERO));
    }

    #[test]
    fn clamped_position_is_contained() {
        let bounds = square(60.0);
        let offset = Vec3::new(-8.0, 40.0, 22.0);
        let window = BoundsWindow::new(&bounds, offset);
        for p in [
            Vec3::new(500.0, 0.0, 500.0),
            Vec3::new(-500.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, -500.0),
        ] {
            assert!(window.contains(window.clamp(p)));
        }
    }

    #[test]
    fn clamp_total_handles_inverted_limits() {
        assert_eq!(clamp_total(5.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp_total(20.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp_total(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_total(11.0, 0.0, 10.0), 10.0);
    }
}
