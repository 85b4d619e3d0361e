//! Smoothing functions that pull a value toward a target over time

use crate::math::Vec3;

/// Distance under which the spring policy snaps onto its target
pub const SNAP_EPSILON: f32 = 0.001;

/// Shortest smoothing time the spring accepts
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Fraction of the remaining distance covered this frame by the lerp policy
pub fn lerp_factor(delta: f32, rate: f32) -> f32 {
    (delta * rate).clamp(0.0, 1.0)
}

/// Linear-damped lerp: approaches the target exponentially, never overshoots
pub fn damp_lerp(current: Vec3, target: Vec3, rate: f32, delta: f32) -> Vec3 {
    current.lerp(&target, lerp_factor(delta, rate))
}

/// Critically damped spring on one axis.
///
/// `smooth_time` is roughly the time to cover most of the distance. The
/// exponential decay uses a cubic approximation of `exp(-x)`. The result never
/// passes the target; when it would, it lands on it and the velocity stops.
///
/// `velocity` is carried between calls. Starting from rest, the distance to a
/// fixed target shrinks every frame. After the target moves mid-flight, the
/// old velocity keeps pushing the value away from the new target for a few
/// frames before the spring turns it around.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta: f32,
) -> f32 {
    if (current - target).abs() <= SNAP_EPSILON {
        *velocity = 0.0;
        return target;
    }
    if delta <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * delta;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta;
    *velocity = (*velocity - omega * temp) * decay;

    let output = target + (change + temp) * decay;

    // Overshoot check: heading up and ended above, or heading down and ended below
    if (target > current) == (output > target) {
        *velocity = 0.0;
        return target;
    }

    output
}

/// Per-axis [`smooth_damp`] on a vector
pub fn smooth_damp3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    delta: f32,
) -> Vec3 {
    Vec3::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, delta),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, delta),
        smooth_damp(current.z, target.z, &mut velocity.z, smooth_time, delta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_lerp_factor_clamps() {
        assert_eq!(lerp_factor(-1.0, 1.5), 0.0);
        assert_eq!(lerp_factor(10.0, 1.5), 1.0);
        assert!((lerp_factor(DT, 1.5) - 0.025).abs() < 1e-6);
    }

    #[test]
    fn test_damp_lerp_huge_delta_lands_on_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(damp_lerp(Vec3::ZERO, target, 1.5, 5.0), target);
    }

    #[test]
    fn test_damp_lerp_monotonic_convergence() {
        let target = Vec3::new(3.0, -2.0, 0.5);
        let mut current = Vec3::new(-10.0, 8.0, 4.0);
        let mut prev = current.max_axis_distance(&target);

        for _ in 0..1000 {
            current = damp_lerp(current, target, 1.5, DT);
            let dist = current.max_axis_distance(&target);
            assert!(dist <= prev);
            prev = dist;
        }
        assert!(prev < 1e-3, "still {} away", prev);
    }

    #[test]
    fn test_smooth_damp_monotonic_from_rest() {
        let mut velocity = 0.0;
        let mut current = 10.0;
        let mut prev = current;

        for _ in 0..600 {
            current = smooth_damp(current, 0.0, &mut velocity, 1.2, DT);
            assert!(current <= prev + 1e-6, "moved away: {} -> {}", prev, current);
            assert!(current >= 0.0, "overshot to {}", current);
            prev = current;
        }
        assert_eq!(current, 0.0);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_smooth_damp_velocity_carries_over_target_change() {
        let mut velocity = 0.0;
        let mut current = 10.0;
        for _ in 0..60 {
            current = smooth_damp(current, 0.0, &mut velocity, 1.2, DT);
        }
        assert!(velocity < -1.0);

        // Reverse: keeps heading down for a while, then turns and settles
        let before = 10.0 - current;
        current = smooth_damp(current, 10.0, &mut velocity, 1.2, DT);
        assert!(10.0 - current > before, "no carry-over: {} -> {}", before, 10.0 - current);

        for _ in 0..600 {
            current = smooth_damp(current, 10.0, &mut velocity, 1.2, DT);
            assert!(current <= 10.0);
        }
        assert_eq!(current, 10.0);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_smooth_damp_frame_rate_independent() {
        let run = |dt: f32, frames: usize| {
            let mut v = 0.0;
            let mut x = 5.0;
            for _ in 0..frames {
                x = smooth_damp(x, 0.0, &mut v, 2.5, dt);
            }
            x
        };

        let at_60 = run(1.0 / 60.0, 60);
        let at_30 = run(1.0 / 30.0, 30);
        assert!((at_60 - at_30).abs() < 0.05, "60fps {} vs 30fps {}", at_60, at_30);
    }

    #[test]
    fn test_smooth_damp_zero_delta_holds_position() {
        let mut v = 0.3;
        assert_eq!(smooth_damp(4.0, 0.0, &mut v, 1.2, 0.0), 4.0);
        assert_eq!(v, 0.3);
    }

    #[test]
    fn test_smooth_damp_never_passes_target_with_large_step() {
        let mut v = 0.0;
        let x = smooth_damp(-3.0, 1.0, &mut v, 0.01, 1.0);
        assert!(x <= 1.0);
    }

    #[test]
    fn test_smooth_damp3_axes_independent() {
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(1.0, 0.0, 0.0);
        let next = smooth_damp3(Vec3::ZERO, target, &mut velocity, 1.2, DT);
        assert!(next.x > 0.0);
        assert_eq!(next.y, 0.0);
        assert_eq!(next.z, 0.0);
        assert_eq!(velocity.y, 0.0);
    }
}
