//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn ordered_by_spawn_counter() {
        assert!(AgentId(3) < AgentId(4));
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod math {
    use crate::Vec3;
    use crate::math::{clamp_unit, lerp_clamped, limit_length};

    #[test]
    fn clamp_unit_shrinks_long_vectors_only() {
        let long = clamp_unit(Vec3::new(3.0, 4.0, 0.0));
        assert!((long.length() - 1.0).abs() < 1e-6);
        assert!((long - Vec3::new(0.6, 0.8, 0.0)).length() < 1e-6);

        let short = Vec3::new(0.3, 0.0, 0.4);
        assert_eq!(clamp_unit(short), short);
    }

    #[test]
    fn clamp_unit_zero_is_zero() {
        assert_eq!(clamp_unit(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn limit_length_within_bounds_is_none() {
        assert_eq!(limit_length(Vec3::new(1.0, 2.0, 2.0), 3.0), None);
        assert_eq!(limit_length(Vec3::ZERO, 0.0), None);
    }

    #[test]
    fn limit_length_survives_squared_overflow() {
        let v = Vec3::new(3.0e38, -3.0e38, 0.0);
        let limited = limit_length(v, 1.0e38).expect("over the limit");
        assert!(((limited / 1.0e38).length() - 1.0).abs() < 1e-5, "{limited:?}");
        // Direction kept: +x, -y in equal parts.
        assert!(limited.x > 0.0 && limited.z == 0.0);
        assert!((limited.x + limited.y).abs() < 1.0e32);

        // Huge but within a huge limit.
        assert_eq!(limit_length(Vec3::splat(1.0e38), f32::MAX), None);
    }

    #[test]
    fn limit_length_rescales() {
        let v = limit_length(Vec3::new(20.0, 0.0, 0.0), 10.0).expect("over the limit");
        assert_eq!(v, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        assert_eq!(lerp_clamped(a, b, 0.5), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(lerp_clamped(a, b, 3.0), b);
        assert_eq!(lerp_clamped(a, b, -1.0), a);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(3));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn config_validation() {
        let mut cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.delta_secs = 0.0;
        assert!(cfg.validate().is_err());
        cfg.delta_secs = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn snapshot_schedule() {
        let cfg = SimConfig { snapshot_interval_ticks: 10, ..SimConfig::default() };
        assert!(cfg.snapshot_due(Tick(0)));
        assert!(!cfg.snapshot_due(Tick(5)));
        assert!(cfg.snapshot_due(Tick(20)));

        let off = SimConfig { snapshot_interval_ticks: 0, ..SimConfig::default() };
        assert!(!off.snapshot_due(Tick(0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.in_cube(5.0), r2.in_cube(5.0));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        assert_ne!(r0.in_cube(5.0), r1.in_cube(5.0));
    }

    #[test]
    fn in_cube_stays_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let p = rng.in_cube(2.5);
            assert!(p.abs().max_element() <= 2.5, "{p:?} outside cube");
        }
    }

    #[test]
    fn huge_half_width_does_not_overflow() {
        let mut rng = SimRng::new(4);
        for half in [2.0e38, f32::MAX] {
            for _ in 0..100 {
                let p = rng.in_cube(half);
                assert!(p.is_finite(), "{p:?}");
                assert!(p.abs().max_element() <= half);
            }
        }
    }

    #[test]
    fn degenerate_half_width_is_origin() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.in_cube(0.0), crate::Vec3::ZERO);
        assert_eq!(rng.in_cube(-1.0), crate::Vec3::ZERO);
    }
}
