use plotdomain::domain::config::{ClassifyCfg, RangeCfg, StationaryCfg, WindowCfg, ZeroCfg};
use plotdomain::domain::errors::ConfigError;
use plotdomain::numerics::errors::DescentError;

type TestResult = Result<(), ConfigError>;

#[test]
fn stationary_defaults() {
    let cfg = StationaryCfg::default();
    assert_eq!((cfg.low(), cfg.high()), (-100.0, 100.0));
    assert_eq!(cfg.cuts(), 1001);
    assert_eq!(cfg.cuts_divisor(), 5);
    assert_eq!(cfg.max_depth(), 5);
    assert_eq!(cfg.max_point_count(), 50);
    assert!(!cfg.include_cusps());
    assert_eq!(cfg.descent().steps(), 100);
}

#[test]
fn resolution_shrinks_by_divisor() {
    let cfg = StationaryCfg::default();
    let r: Vec<usize> = (0..6).map(|d| cfg.resolution(d)).collect();
    assert_eq!(r, vec![1001, 200, 40, 8, 1, 0]);
    assert_eq!(cfg.resolution(usize::MAX), 0);
}

#[test]
fn ceiling_formula() -> TestResult {
    let cfg = StationaryCfg::new()
        .set_max_evaluations(1000)?
        .set_cuts(11)?
        .set_max_point_count(3)?
        .set_descent_steps(10)?;
    assert_eq!(cfg.evaluation_ceiling(), 1000 + 11 + 4 * (2 + 6 * 10));
    Ok(())
}

#[test]
fn stationary_rejects_bad_values() {
    let cfg = StationaryCfg::new();
    assert_eq!(cfg.set_cuts(2).unwrap_err(), ConfigError::InvalidCuts { got: 2 });
    assert_eq!(cfg.set_cuts_divisor(1).unwrap_err(), ConfigError::InvalidCutsDivisor { got: 1 });
    assert_eq!(cfg.set_max_depth(0).unwrap_err(), ConfigError::InvalidMaxDepth { got: 0 });
    assert_eq!(cfg.set_max_point_count(0).unwrap_err(), ConfigError::InvalidMaxPointCount { got: 0 });
    assert_eq!(cfg.set_max_evaluations(0).unwrap_err(), ConfigError::InvalidMaxEvaluations { got: 0 });
    assert_eq!(cfg.set_unbounded_sample(0).unwrap_err(), ConfigError::InvalidUnboundedSample { got: 0 });
    assert!(matches!(cfg.set_interval(1.0, 1.0), Err(ConfigError::InvalidInterval { .. })));
    assert!(matches!(cfg.set_interval(f64::NEG_INFINITY, 0.0), Err(ConfigError::InvalidInterval { .. })));
}

#[test]
fn descent_errors_pass_through() {
    let err = StationaryCfg::new().set_descent_steps(0).unwrap_err();
    assert_eq!(err, ConfigError::Descent(DescentError::InvalidSteps { got: 0 }));

    let err = ZeroCfg::new().set_descent_rate(-1.0).unwrap_err();
    assert!(matches!(err, ConfigError::Descent(DescentError::InvalidRate { .. })));

    let err = ClassifyCfg::new().set_curvature_step(0.0).unwrap_err();
    assert!(matches!(err, ConfigError::Descent(DescentError::InvalidStep { .. })));
}

#[test]
fn zero_cfg_rejects_bad_values() {
    let cfg = ZeroCfg::new();
    assert_eq!(cfg.set_samples(1).unwrap_err(), ConfigError::InvalidSamples { got: 1, min: 2 });
    assert_eq!(cfg.set_candidates(0).unwrap_err(), ConfigError::InvalidCandidates { got: 0 });
    assert!(matches!(cfg.set_residual_factor(0.5), Err(ConfigError::InvalidResidualFactor { .. })));
    assert!(matches!(cfg.set_residual_factor(f64::NAN), Err(ConfigError::InvalidResidualFactor { .. })));
}

#[test]
fn classify_cfg_rejects_bad_values() {
    let cfg = ClassifyCfg::new();
    assert!(matches!(cfg.set_tolerances(0.0, 1e-6), Err(ConfigError::InvalidFlatTolerance { .. })));
    assert!(matches!(cfg.set_tolerances(1e-2, f64::NAN), Err(ConfigError::InvalidFlatTolerance { .. })));
    assert!(matches!(cfg.set_strict_fraction(0.0), Err(ConfigError::InvalidFlatFraction { .. })));
    assert!(matches!(cfg.set_strict_fraction(1.5), Err(ConfigError::InvalidFlatFraction { .. })));
}

#[test]
fn range_and_window_reject_bad_padding() {
    assert!(matches!(RangeCfg::new().set_padding(-0.1), Err(ConfigError::InvalidPadding { .. })));
    assert!(matches!(RangeCfg::new().set_fallback_half_width(0.0), Err(ConfigError::InvalidPadding { .. })));
    assert!(matches!(WindowCfg::new().set_padding(f64::INFINITY), Err(ConfigError::InvalidPadding { .. })));
    assert!(matches!(WindowCfg::new().set_samples(1), Err(ConfigError::InvalidSamples { .. })));
}

#[test]
fn errors_render_the_offending_value() {
    let msg = ConfigError::InvalidCuts { got: 2 }.to_string();
    assert!(msg.contains("cuts=2"));

    let msg = ConfigError::from(DescentError::InvalidSteps { got: 0 }).to_string();
    assert!(msg.contains("steps=0"));
}
