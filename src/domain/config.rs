//! Configuration for the domain searches.
//!
//! Every search takes a validated configuration value:
//!
//! ┌ [`StationaryCfg`] : worklist search for stationary points
//! ├ [`ZeroCfg`]       : coarse root search
//! ├ [`ClassifyCfg`]   : constant / affine detection
//! ├ [`RangeCfg`]      : orchestrator, bundles the three above
//! └ [`WindowCfg`]     : vertical window for plot consumers
//!
//! Construct with `new()` (defaults), then chain the fallible `set_*`
//! setters. Searches that refine with descent embed a [`DescentCfg`] and
//! gain `set_descent*` setters from `impl_descent_cfg!`.

use crate::domain::errors::ConfigError;
use crate::numerics::descent::DescentCfg;


macro_rules! impl_descent_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Replaces the refinement descent settings.
            #[must_use]
            pub fn with_descent(mut self, v: $crate::numerics::descent::DescentCfg) -> Self {
                self.descent = v;
                self
            }
            pub fn set_descent_steps(
                mut self, v: usize
            ) -> Result<Self, $crate::domain::errors::ConfigError> {
                self.descent = self.descent.set_steps(v)?;
                Ok(self)
            }
            pub fn set_descent_rate(
                mut self, v: f64
            ) -> Result<Self, $crate::domain::errors::ConfigError> {
                self.descent = self.descent.set_initial_rate(v)?;
                Ok(self)
            }
            #[inline] #[must_use]
            pub fn descent(&self) -> &$crate::numerics::descent::DescentCfg { &self.descent }
        }
    };
}


fn check_interval(low: f64, high: f64) -> Result<(), ConfigError> {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Err(ConfigError::InvalidInterval { low, high });
    }
    Ok(())
}

fn check_padding(v: f64) -> Result<(), ConfigError> {
    if !v.is_finite() || v < 0.0 {
        return Err(ConfigError::InvalidPadding { got: v });
    }
    Ok(())
}


/// Stationary-point finder configuration.
///
/// # Defaults
/// ┌ seed interval     : [-100, 100]
/// ├ `cuts`            : 1001 samples at depth 0
/// ├ `cuts_divisor`    : 5, resolution at depth d is `cuts / 5^d`
/// ├ `max_depth`       : 5, also the cap on extension rounds
/// ├ `max_point_count` : 50
/// ├ `include_cusps`   : false
/// ├ `unbounded_sample`: 5 points kept when the set looks unbounded
/// ├ `max_evaluations` : 200_000 evaluator calls for the search phase
/// └ `descent`         : [`DescentCfg::default`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StationaryCfg {
    low: f64,
    high: f64,
    cuts: usize,
    cuts_divisor: usize,
    max_depth: usize,
    max_point_count: usize,
    include_cusps: bool,
    unbounded_sample: usize,
    max_evaluations: usize,
    descent: DescentCfg,
}

impl StationaryCfg {
    pub const DEFAULT_LOW: f64 = -100.0;
    pub const DEFAULT_HIGH: f64 = 100.0;
    pub const DEFAULT_CUTS: usize = 1001;
    pub const DEFAULT_CUTS_DIVISOR: usize = 5;
    pub const DEFAULT_MAX_DEPTH: usize = 5;
    pub const DEFAULT_MAX_POINT_COUNT: usize = 50;
    pub const DEFAULT_UNBOUNDED_SAMPLE: usize = 5;
    pub const DEFAULT_MAX_EVALUATIONS: usize = 200_000;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_interval(mut self, low: f64, high: f64) -> Result<Self, ConfigError> {
        check_interval(low, high)?;
        self.low = low;
        self.high = high;
        Ok(self)
    }

    pub fn set_cuts(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 3 {
            return Err(ConfigError::InvalidCuts { got: v });
        }
        self.cuts = v;
        Ok(self)
    }

    pub fn set_cuts_divisor(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 2 {
            return Err(ConfigError::InvalidCutsDivisor { got: v });
        }
        self.cuts_divisor = v;
        Ok(self)
    }

    pub fn set_max_depth(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxDepth { got: v });
        }
        self.max_depth = v;
        Ok(self)
    }

    pub fn set_max_point_count(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxPointCount { got: v });
        }
        self.max_point_count = v;
        Ok(self)
    }

    pub fn set_unbounded_sample(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidUnboundedSample { got: v });
        }
        self.unbounded_sample = v;
        Ok(self)
    }

    pub fn set_max_evaluations(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxEvaluations { got: v });
        }
        self.max_evaluations = v;
        Ok(self)
    }

    /// Accept floor intervals whose one-sided slopes disagree sharply.
    #[must_use]
    pub fn with_cusps(mut self, on: bool) -> Self { self.include_cusps = on; self }

    #[inline] #[must_use] pub fn low(&self)              -> f64   { self.low }
    #[inline] #[must_use] pub fn high(&self)             -> f64   { self.high }
    #[inline] #[must_use] pub fn cuts(&self)             -> usize { self.cuts }
    #[inline] #[must_use] pub fn cuts_divisor(&self)     -> usize { self.cuts_divisor }
    #[inline] #[must_use] pub fn max_depth(&self)        -> usize { self.max_depth }
    #[inline] #[must_use] pub fn max_point_count(&self)  -> usize { self.max_point_count }
    #[inline] #[must_use] pub fn include_cusps(&self)    -> bool  { self.include_cusps }
    #[inline] #[must_use] pub fn unbounded_sample(&self) -> usize { self.unbounded_sample }
    #[inline] #[must_use] pub fn max_evaluations(&self)  -> usize { self.max_evaluations }

    /// Sampling resolution at recursion depth `depth`:
    /// `cuts / cuts_divisor^depth`, saturating to 0.
    pub fn resolution(&self, depth: usize) -> usize {
        let divisor = u32::try_from(depth)
            .ok()
            .and_then(|d| self.cuts_divisor.checked_pow(d));
        match divisor {
            Some(div) => self.cuts / div,
            None      => 0,
        }
    }

    /// Hard upper bound on evaluator calls made by one
    /// [`stationary_points`](crate::domain::stationary::stationary_points)
    /// call with this configuration.
    ///
    /// `max_evaluations + max(cuts, 4) + (max_point_count + 1) * (2 + 6 * steps)`
    ///
    /// ├ the search phase stops once `max_evaluations` is passed, and the
    /// │ task in flight costs at most `max(cuts, 4)` calls
    /// └ at most `max_point_count + 1` candidates are refined, each descent
    ///   costing `2 + 6 * steps` calls
    pub fn evaluation_ceiling(&self) -> usize {
        let per_descent = self.descent.steps().saturating_mul(6).saturating_add(2);
        self.max_evaluations
            .saturating_add(self.cuts.max(4))
            .saturating_add(self.max_point_count.saturating_add(1).saturating_mul(per_descent))
    }
}

impl Default for StationaryCfg {
    fn default() -> Self {
        Self {
            low:              Self::DEFAULT_LOW,
            high:             Self::DEFAULT_HIGH,
            cuts:             Self::DEFAULT_CUTS,
            cuts_divisor:     Self::DEFAULT_CUTS_DIVISOR,
            max_depth:        Self::DEFAULT_MAX_DEPTH,
            max_point_count:  Self::DEFAULT_MAX_POINT_COUNT,
            include_cusps:    false,
            unbounded_sample: Self::DEFAULT_UNBOUNDED_SAMPLE,
            max_evaluations:  Self::DEFAULT_MAX_EVALUATIONS,
            descent:          DescentCfg::default(),
        }
    }
}
impl_descent_cfg!(StationaryCfg);


/// Zero finder configuration.
///
/// # Defaults
/// ┌ sample interval   : [-100, 100]
/// ├ `samples`         : 201
/// ├ `candidates`      : 10 best samples refined
/// ├ `residual_factor` : 10, keep roots within 10x the best residual
/// └ `descent`         : [`DescentCfg::default`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZeroCfg {
    low: f64,
    high: f64,
    samples: usize,
    candidates: usize,
    residual_factor: f64,
    descent: DescentCfg,
}

impl ZeroCfg {
    pub const DEFAULT_SAMPLES: usize = 201;
    pub const DEFAULT_CANDIDATES: usize = 10;
    pub const DEFAULT_RESIDUAL_FACTOR: f64 = 10.0;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_interval(mut self, low: f64, high: f64) -> Result<Self, ConfigError> {
        check_interval(low, high)?;
        self.low = low;
        self.high = high;
        Ok(self)
    }

    pub fn set_samples(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 2 {
            return Err(ConfigError::InvalidSamples { got: v, min: 2 });
        }
        self.samples = v;
        Ok(self)
    }

    pub fn set_candidates(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidCandidates { got: v });
        }
        self.candidates = v;
        Ok(self)
    }

    pub fn set_residual_factor(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v < 1.0 {
            return Err(ConfigError::InvalidResidualFactor { got: v });
        }
        self.residual_factor = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn low(&self)             -> f64   { self.low }
    #[inline] #[must_use] pub fn high(&self)            -> f64   { self.high }
    #[inline] #[must_use] pub fn samples(&self)         -> usize { self.samples }
    #[inline] #[must_use] pub fn candidates(&self)      -> usize { self.candidates }
    #[inline] #[must_use] pub fn residual_factor(&self) -> f64   { self.residual_factor }
}

impl Default for ZeroCfg {
    fn default() -> Self {
        Self {
            low:             StationaryCfg::DEFAULT_LOW,
            high:            StationaryCfg::DEFAULT_HIGH,
            samples:         Self::DEFAULT_SAMPLES,
            candidates:      Self::DEFAULT_CANDIDATES,
            residual_factor: Self::DEFAULT_RESIDUAL_FACTOR,
            descent:         DescentCfg::default(),
        }
    }
}
impl_descent_cfg!(ZeroCfg);


/// Constant / affine classifier configuration.
///
/// A sampled derivative `g` counts as flat when, with `n` the finite-difference
/// round-off bound at that sample,
/// ├ every sample has `|g| <= loose_tol + n`, and
/// └ at least `strict_fraction` of samples have `|g| < strict_tol + n`
///
/// # Defaults
/// ┌ grid              : 1001 points over [-100, 100]
/// ├ `loose_tol`       : 1e-2
/// ├ `strict_tol`      : 1e-6
/// ├ `strict_fraction` : 0.8
/// └ `curvature_step`  : 1e-3, finite-difference step for the second
///                       derivative
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClassifyCfg {
    low: f64,
    high: f64,
    samples: usize,
    loose_tol: f64,
    strict_tol: f64,
    strict_fraction: f64,
    curvature_step: f64,
}

impl ClassifyCfg {
    pub const DEFAULT_SAMPLES: usize = 1001;
    pub const DEFAULT_LOOSE_TOL: f64 = 1e-2;
    pub const DEFAULT_STRICT_TOL: f64 = 1e-6;
    pub const DEFAULT_STRICT_FRACTION: f64 = 0.8;
    pub const DEFAULT_CURVATURE_STEP: f64 = 1e-3;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_interval(mut self, low: f64, high: f64) -> Result<Self, ConfigError> {
        check_interval(low, high)?;
        self.low = low;
        self.high = high;
        Ok(self)
    }

    pub fn set_samples(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 2 {
            return Err(ConfigError::InvalidSamples { got: v, min: 2 });
        }
        self.samples = v;
        Ok(self)
    }

    pub fn set_tolerances(mut self, loose: f64, strict: f64) -> Result<Self, ConfigError> {
        for v in [loose, strict] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::InvalidFlatTolerance { got: v });
            }
        }
        self.loose_tol = loose;
        self.strict_tol = strict;
        Ok(self)
    }

    pub fn set_strict_fraction(mut self, v: f64) -> Result<Self, ConfigError> {
        if !(v > 0.0 && v <= 1.0) {
            return Err(ConfigError::InvalidFlatFraction { got: v });
        }
        self.strict_fraction = v;
        Ok(self)
    }

    pub fn set_curvature_step(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(crate::numerics::errors::DescentError::InvalidStep { got: v }.into());
        }
        self.curvature_step = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn low(&self)             -> f64   { self.low }
    #[inline] #[must_use] pub fn high(&self)            -> f64   { self.high }
    #[inline] #[must_use] pub fn samples(&self)         -> usize { self.samples }
    #[inline] #[must_use] pub fn loose_tol(&self)       -> f64   { self.loose_tol }
    #[inline] #[must_use] pub fn strict_tol(&self)      -> f64   { self.strict_tol }
    #[inline] #[must_use] pub fn strict_fraction(&self) -> f64   { self.strict_fraction }
    #[inline] #[must_use] pub fn curvature_step(&self)  -> f64   { self.curvature_step }
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self {
            low:             StationaryCfg::DEFAULT_LOW,
            high:            StationaryCfg::DEFAULT_HIGH,
            samples:         Self::DEFAULT_SAMPLES,
            loose_tol:       Self::DEFAULT_LOOSE_TOL,
            strict_tol:      Self::DEFAULT_STRICT_TOL,
            strict_fraction: Self::DEFAULT_STRICT_FRACTION,
            curvature_step:  Self::DEFAULT_CURVATURE_STEP,
        }
    }
}


/// Range orchestrator configuration.
///
/// # Defaults
/// ┌ `stationary`        : [`StationaryCfg::default`]
/// ├ `zeros`             : [`ZeroCfg::default`]
/// ├ `classify`          : [`ClassifyCfg::default`]
/// ├ `padding`           : 0.5 of the point span on each side
/// └ `fallback_half_width`: 10, used around a lone point or the origin
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangeCfg {
    stationary: StationaryCfg,
    zeros: ZeroCfg,
    classify: ClassifyCfg,
    padding: f64,
    fallback_half_width: f64,
}

impl RangeCfg {
    pub const DEFAULT_PADDING: f64 = 0.5;
    pub const DEFAULT_FALLBACK_HALF_WIDTH: f64 = 10.0;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use] pub fn with_stationary(mut self, v: StationaryCfg) -> Self { self.stationary = v; self }
    #[must_use] pub fn with_zeros     (mut self, v: ZeroCfg)       -> Self { self.zeros = v; self }
    #[must_use] pub fn with_classify  (mut self, v: ClassifyCfg)   -> Self { self.classify = v; self }

    pub fn set_padding(mut self, v: f64) -> Result<Self, ConfigError> {
        check_padding(v)?;
        self.padding = v;
        Ok(self)
    }

    pub fn set_fallback_half_width(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidPadding { got: v });
        }
        self.fallback_half_width = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn stationary(&self)          -> &StationaryCfg { &self.stationary }
    #[inline] #[must_use] pub fn zeros(&self)               -> &ZeroCfg       { &self.zeros }
    #[inline] #[must_use] pub fn classify(&self)            -> &ClassifyCfg   { &self.classify }
    #[inline] #[must_use] pub fn padding(&self)             -> f64            { self.padding }
    #[inline] #[must_use] pub fn fallback_half_width(&self) -> f64            { self.fallback_half_width }
}

impl Default for RangeCfg {
    fn default() -> Self {
        Self {
            stationary:          StationaryCfg::default(),
            zeros:               ZeroCfg::default(),
            classify:            ClassifyCfg::default(),
            padding:             Self::DEFAULT_PADDING,
            fallback_half_width: Self::DEFAULT_FALLBACK_HALF_WIDTH,
        }
    }
}


/// Vertical window configuration for plot consumers.
///
/// # Defaults
/// ┌ `samples` : 200
/// ├ `trim`    : 4 largest-magnitude samples discarded
/// └ `padding` : 0.1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WindowCfg {
    samples: usize,
    trim: usize,
    padding: f64,
}

impl WindowCfg {
    pub const DEFAULT_SAMPLES: usize = 200;
    pub const DEFAULT_TRIM: usize = 4;
    pub const DEFAULT_PADDING: f64 = 0.1;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_samples(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 2 {
            return Err(ConfigError::InvalidSamples { got: v, min: 2 });
        }
        self.samples = v;
        Ok(self)
    }

    /// Number of largest-magnitude samples to drop; may be zero.
    #[must_use]
    pub fn with_trim(mut self, v: usize) -> Self { self.trim = v; self }

    pub fn set_padding(mut self, v: f64) -> Result<Self, ConfigError> {
        check_padding(v)?;
        self.padding = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn samples(&self) -> usize { self.samples }
    #[inline] #[must_use] pub fn trim(&self)    -> usize { self.trim }
    #[inline] #[must_use] pub fn padding(&self) -> f64   { self.padding }
}

impl Default for WindowCfg {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
            trim:    Self::DEFAULT_TRIM,
            padding: Self::DEFAULT_PADDING,
        }
    }
}
