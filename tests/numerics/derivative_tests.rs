use approx::assert_abs_diff_eq;
use plotdomain::numerics::derivative::{derivative, Derivative, DEFAULT_STEP};
use plotdomain::numerics::errors::DescentError;
use plotdomain::numerics::eval::{Counted, Evaluate};

type TestResult = Result<(), DescentError>;

#[test]
fn central_difference_of_square() {
    let f = |x: f64| x * x;
    assert_abs_diff_eq!(derivative(&f, 2.0, DEFAULT_STEP), 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(derivative(&f, -3.0, DEFAULT_STEP), -6.0, epsilon = 1e-6);
}

#[test]
fn central_difference_of_sine() {
    for x in [-2.0, -0.5, 0.0, 1.0, 3.0_f64] {
        assert_abs_diff_eq!(derivative(&f64::sin, x, DEFAULT_STEP), x.cos(), epsilon = 1e-8);
    }
}

#[test]
fn derivative_costs_two_evaluations() {
    let f = |x: f64| x.exp();
    let counted = Counted::new(&f);
    let _ = derivative(&counted, 0.3, DEFAULT_STEP);
    assert_eq!(counted.calls(), 2);
}

#[test]
fn nested_operator_gives_curvature() -> TestResult {
    let f   = |x: f64| x * x * x;
    let df  = Derivative::new(&f).set_step(1e-3)?;
    let d2f = Derivative::new(&df).set_step(1e-3)?;

    assert_abs_diff_eq!(df.eval(1.0), 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(d2f.eval(1.0), 6.0, epsilon = 1e-4);
    assert_abs_diff_eq!(d2f.eval(-2.0), -12.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn default_operator_step() {
    let f = |x: f64| x;
    assert_eq!(Derivative::new(&f).step(), DEFAULT_STEP);
}

#[test]
fn rejects_bad_step() {
    let f = |x: f64| x;
    for bad in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Derivative::new(&f).set_step(bad),
            Err(DescentError::InvalidStep { .. })
        ));
    }
}
