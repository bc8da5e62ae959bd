use approx::assert_abs_diff_eq;
use plotdomain::domain::config::ZeroCfg;
use plotdomain::domain::errors::ConfigError;
use plotdomain::domain::zeros::find_roots;
use plotdomain::numerics::dedupe::dedupe;

type TestResult = Result<(), ConfigError>;

#[test]
fn finds_both_quadratic_roots() {
    let f = |x: f64| (x - 2.0) * (x + 3.0);
    let roots = dedupe(&find_roots(&f, &ZeroCfg::default()), 1e-4);

    assert_eq!(roots.len(), 2);
    assert_abs_diff_eq!(roots[0], -3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(roots[1], 2.0, epsilon = 1e-6);
}

#[test]
fn finds_cubic_roots() {
    let f = |x: f64| x * x * x - 6.0 * x * x + 11.0 * x - 6.0;
    let roots = dedupe(&find_roots(&f, &ZeroCfg::default()), 1e-4);

    assert_eq!(roots.len(), 3);
    for (got, want) in roots.iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
}

#[test]
fn rootless_function_returns_closest_approach() {
    let f = |x: f64| x * x + 1.0;
    let roots = find_roots(&f, &ZeroCfg::default());

    assert!(!roots.is_empty());
    assert!(roots.iter().all(|r| r.abs() < 1e-3));
}

#[test]
fn restricted_interval() -> TestResult {
    let cfg = ZeroCfg::new().set_interval(0.0, 10.0)?.set_samples(51)?;
    let f = |x: f64| (x - 2.0) * (x + 3.0);
    let roots = dedupe(&find_roots(&f, &cfg), 1e-4);

    assert_eq!(roots.len(), 1);
    assert_abs_diff_eq!(roots[0], 2.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn all_nan_gives_nothing() {
    let roots = find_roots(&|_x: f64| f64::NAN, &ZeroCfg::default());
    assert!(roots.is_empty());
}
