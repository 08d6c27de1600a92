/// Symmetric ease-in-out cubic. Input is clamped to `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation between `start` and `target` at eased progress `t`.
pub fn interpolate(start: f64, target: f64, t: f64) -> f64 {
    start + (target - start) * ease_in_out_cubic(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.5), 1.0);
    }

    #[test]
    fn curve_is_monotonic_and_never_overshoots() {
        let mut previous = 0.0;
        for step in 0..=1000 {
            let eased = ease_in_out_cubic(step as f64 / 1000.0);
            assert!(eased >= previous, "dipped at step {step}");
            assert!((0.0..=1.0).contains(&eased));
            previous = eased;
        }
    }

    #[test]
    fn interpolated_position_approaches_target_in_both_directions() {
        for (start, target) in [(0.0, 900.0), (2700.0, 900.0)] {
            let mut distance = f64::INFINITY;
            for step in 0..=60 {
                let position = interpolate(start, target, step as f64 / 60.0);
                let remaining = (target - position).abs();
                assert!(remaining <= distance);
                distance = remaining;
            }
            assert_eq!(distance, 0.0);
        }
    }
}
