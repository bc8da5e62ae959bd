use approx::assert_abs_diff_eq;
use plotdomain::numerics::descent::{descend, find_stationary, find_zero, DescentCfg, Termination};
use plotdomain::numerics::errors::DescentError;
use proptest::prelude::*;

type TestResult = Result<(), DescentError>;

#[test]
fn minimizes_shifted_parabola() {
    let f = |x: f64| (x - 3.0).powi(2) + 1.0;
    let res = descend(&f, 0.0, &DescentCfg::default());

    assert_abs_diff_eq!(res.x, 3.0, epsilon = 1e-4);
    assert_abs_diff_eq!(res.value, 1.0, epsilon = 1e-8);
    assert_eq!(res.termination, Termination::StepLimit);
    assert_eq!(res.iterations, DescentCfg::DEFAULT_STEPS);
    assert!(res.trace.is_none());
}

#[test]
fn step_budget_bounds_evaluations() -> TestResult {
    let f = |x: f64| (x + 1.0).powi(2);
    let cfg = DescentCfg::new().set_steps(20)?;
    let res = descend(&f, 4.0, &cfg);

    assert!(res.iterations <= 20);
    assert!(res.evaluations <= 1 + 3 * 20);
    Ok(())
}

#[test]
fn flat_objective_stops_on_zero_gradient() {
    let f = |_x: f64| 5.0;
    let res = descend(&f, 2.0, &DescentCfg::default());

    assert_eq!(res.termination, Termination::ZeroGradient);
    assert_eq!(res.x, 2.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 3);
}

#[test]
fn divergence_returns_start() -> TestResult {
    let f = |x: f64| -x;
    let cfg = DescentCfg::new().set_max_position(10.0)?;
    let res = descend(&f, 0.0, &cfg);

    assert_eq!(res.termination, Termination::Diverged);
    assert_eq!(res.x, 0.0);
    Ok(())
}

#[test]
fn out_of_bounds_start_is_diverged() {
    let f = |x: f64| x * x;
    for start in [f64::NAN, f64::INFINITY, 1e19] {
        let res = descend(&f, start, &DescentCfg::default());
        assert_eq!(res.termination, Termination::Diverged);
        assert_eq!(res.iterations, 0);
    }
}

#[test]
fn find_zero_refines_sqrt_2() {
    let f = |x: f64| x * x - 2.0;
    let res = find_zero(&f, 1.0, &DescentCfg::default());
    assert_abs_diff_eq!(res.x, 2.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn find_stationary_refines_vertex() {
    let f = |x: f64| (x - 1.5).powi(2) - 4.0;
    let res = find_stationary(&f, 0.0, &DescentCfg::default());

    assert_abs_diff_eq!(res.x, 1.5, epsilon = 1e-6);
    // two calls of f per objective evaluation
    assert_eq!(res.evaluations % 2, 0);
    assert!(res.evaluations > 0);
}

#[test]
fn trace_starts_at_initial_value() {
    let f = |x: f64| (x - 3.0).powi(2);
    let res = descend(&f, 0.0, &DescentCfg::new().with_trace(true));

    let trace = res.trace.unwrap();
    assert_eq!(trace[0], 9.0);
    assert_eq!(*trace.last().unwrap(), res.value);
}

#[test]
fn rejects_bad_settings() {
    assert_eq!(DescentCfg::new().set_steps(0).unwrap_err(), DescentError::InvalidSteps { got: 0 });
    assert!(matches!(DescentCfg::new().set_initial_rate(0.0), Err(DescentError::InvalidRate { .. })));
    assert!(matches!(DescentCfg::new().set_initial_rate(f64::NAN), Err(DescentError::InvalidRate { .. })));
    assert!(matches!(DescentCfg::new().set_step(-1.0), Err(DescentError::InvalidStep { .. })));
    assert!(matches!(DescentCfg::new().set_max_position(0.0), Err(DescentError::InvalidMaxPosition { .. })));
    assert!(DescentCfg::new().set_max_position(f64::INFINITY).is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn accepted_values_never_increase(start in -50.0f64..50.0, target in -10.0f64..10.0) {
        let f = move |x: f64| (x - target).powi(2) + (3.0 * x).sin();
        let res = descend(&f, start, &DescentCfg::new().with_trace(true));
        let trace = res.trace.unwrap();

        prop_assert!(trace.windows(2).all(|w| w[1] <= w[0]));
        prop_assert!(res.value <= f(start));
        prop_assert_eq!(*trace.last().unwrap(), res.value);
    }
}
