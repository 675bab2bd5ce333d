use glam::Vec3;

use super::bounds::clamp_total;
use crate::options::ZoomOptions;

/// Apply one discrete zoom step for a frame's scroll delta.
///
/// Scrolling up (positive) brings the camera closer by lowering the target
/// Y; scrolling down raises it. Magnitude is ignored. The result always
/// lies in `[follow_offset_min_y, follow_offset_max_y]`.
#[must_use]
pub fn step_target_y(target_y: f32, scroll: f32, options: &ZoomOptions) -> f32 {
    let mut y = target_y;
    if scroll > 0.0 {
        y -= options.zoom_amount;
    }
    if scroll < 0.0 {
        y += options.zoom_amount;
    }
    clamp_total(y, options.follow_offset_min_y, options.follow_offset_max_y)
}

/// One exponential smoothing step of the live offset toward the target.
///
/// All three components are interpolated with the same factor, clamped to
/// `[0, 1]` so a long frame lands on the target instead of overshooting.
#[must_use]
pub fn smooth_offset(
    live: Vec3,
    target: Vec3,
    zoom_speed: f32,
    delta_time: f32,
) -> Vec3 {
    live.lerp(target, (zoom_speed * delta_time).clamp(0.0, 1.0))
}
