use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn same_frame_yields_same_bits() {
    let s = Spring::new(fps30(), SpringOptions::default()).unwrap();
    for f in [0, 1, 7, 33, 120] {
        assert_eq!(s.sample(f).to_bits(), s.sample(f).to_bits());
    }
    let a = spring(17, fps30(), &SpringOptions::default()).unwrap();
    assert_eq!(a.to_bits(), s.sample(17).to_bits());
}

#[test]
fn before_trigger_reports_from() {
    let s = Spring::new(fps30(), SpringOptions::default()).unwrap();
    assert_eq!(s.sample(-10), 0.0);
    assert_eq!(s.sample(0), 0.0);

    let delayed = Spring::new(fps30(), SpringOptions::default().delay(20)).unwrap();
    assert_eq!(delayed.sample(20), 0.0);
    assert!(delayed.sample(21) > 0.0);
}

#[test]
fn settles_at_target_far_out() {
    let s = Spring::new(fps30(), SpringOptions::default()).unwrap();
    assert!((s.sample(100_000) - 1.0).abs() < 1e-3);

    let ranged = Spring::new(fps30(), SpringOptions::default().range(40.0, 0.0)).unwrap();
    assert_eq!(ranged.sample(0), 40.0);
    assert!(ranged.sample(10_000).abs() < 1e-3);
}

#[test]
fn stretched_spring_is_settled_at_its_duration() {
    let opts = SpringOptions::new(SpringConfig::damped(200.0)).duration(30);
    let s = Spring::new(fps30(), opts).unwrap();
    assert!((s.sample(30) - 1.0).abs() < SETTLE_THRESHOLD);
    assert!(s.sample(10) < s.sample(20));
}

#[test]
fn underdamped_overshoots() {
    let s = Spring::new(fps30(), SpringOptions::default()).unwrap();
    assert!(SpringConfig::default().is_underdamped());
    assert!((0..120).any(|f| s.sample(f) > 1.0));

    let clamped = SpringConfig {
        overshoot_clamping: true,
        ..SpringConfig::default()
    };
    let s = Spring::new(fps30(), SpringOptions::new(clamped)).unwrap();
    assert!((0..120).all(|f| s.sample(f) <= 1.0));
}

#[test]
fn critical_and_overdamped_never_overshoot() {
    for config in [SpringConfig::damped(20.0), SpringConfig::damped(200.0)] {
        assert!(!config.is_underdamped());
        let s = Spring::new(fps30(), SpringOptions::new(config)).unwrap();
        let mut prev = s.sample(0);
        for f in 1..600 {
            let v = s.sample(f);
            assert!(v <= 1.0, "frame {f} gave {v}");
            assert!(v >= prev);
            prev = v;
        }
    }
}

#[test]
fn reverse_runs_from_target_back_to_start() {
    let opts = SpringOptions::new(SpringConfig::damped(200.0)).duration(30).reversed();
    let s = Spring::new(fps30(), opts).unwrap();
    assert!((s.sample(0) - 1.0).abs() < SETTLE_THRESHOLD);
    assert_eq!(s.sample(30), 0.0);
    assert_eq!(s.sample(45), 0.0);
    assert!(s.sample(10) > s.sample(20));
}

#[test]
fn invalid_configs_are_rejected() {
    for config in [
        SpringConfig::new(10.0, 0.0),
        SpringConfig::new(0.0, 100.0),
        SpringConfig::new(-1.0, 100.0),
        SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig::new(f64::NAN, 100.0),
    ] {
        let err = Spring::new(fps30(), SpringOptions::new(config)).unwrap_err();
        assert!(matches!(err, FramecastError::Animation(_)));
    }

    let zero = SpringOptions::default().duration(0);
    assert!(Spring::new(fps30(), zero).is_err());
    assert!(measure_spring(fps30(), SpringConfig::default(), 0.0).is_err());
}

#[test]
fn stiffer_damping_settles_faster_than_default() {
    let soft = measure_spring(fps30(), SpringConfig::default(), SETTLE_THRESHOLD).unwrap();
    let firm = measure_spring(fps30(), SpringConfig::damped(20.0), SETTLE_THRESHOLD).unwrap();
    assert!(firm < soft);
    assert!(soft > 0);
}
