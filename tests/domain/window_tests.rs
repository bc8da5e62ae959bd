use approx::assert_abs_diff_eq;
use plotdomain::domain::config::WindowCfg;
use plotdomain::domain::errors::ConfigError;
use plotdomain::domain::report::Range;
use plotdomain::domain::window::vertical_window;

type TestResult = Result<(), ConfigError>;

#[test]
fn trimming_removes_pole_spike() {
    let f = |x: f64| 1.0 / x;
    let domain = Range::new(-1.0, 1.0);

    let raw = vertical_window(f, domain, &WindowCfg::new().with_trim(0));
    let trimmed = vertical_window(f, domain, &WindowCfg::default());

    assert!(raw.hi > 190.0 && raw.lo < -190.0);
    assert!(trimmed.hi < 100.0 && trimmed.lo > -100.0);
    assert!(trimmed.hi > 1.0 && trimmed.lo < -1.0);
}

#[test]
fn line_is_padded() -> TestResult {
    let cfg = WindowCfg::new().with_trim(0).set_padding(0.5)?;
    let w = vertical_window(|x: f64| x, Range::new(0.0, 4.0), &cfg);
    assert_abs_diff_eq!(w.lo, -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(w.hi, 6.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn flat_function_gets_nonzero_height() {
    let w = vertical_window(|_x: f64| 3.0, Range::new(-1.0, 1.0), &WindowCfg::default());
    assert_eq!(w, Range::new(2.0, 4.0));

    let w = vertical_window(|_x: f64| 1e20, Range::new(-1.0, 1.0), &WindowCfg::default());
    assert!(w.lo < 1e20 && 1e20 < w.hi);
}

#[test]
fn non_finite_samples_fall_back() {
    let w = vertical_window(|_x: f64| f64::NAN, Range::new(0.0, 1.0), &WindowCfg::default());
    assert_eq!(w, Range::new(-1.0, 1.0));
}
