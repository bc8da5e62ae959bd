//! Result types produced by the domain searches.
//!
//! ┌ [`PointSet`]    : candidates from the stationary-point finder
//! ├ [`Range`]       : final finite interval with `lo < hi`
//! ├ [`Shape`]       : constant / affine / general classification
//! ├ [`Tier`]        : which stage supplied the final point set
//! └ [`RangeReport`] : everything the orchestrator decided


/// Stationary-point candidates.
///
/// [`PointSet`]
/// - `candidates`   : refined x-values, deduplicated
/// - `is_unbounded` : more points very likely exist beyond this sample;
///                    `candidates` then holds the ones nearest the origin
/// - `evaluations`  : evaluator calls spent, refinement included
/// - `rounds`       : extension rounds performed
///
/// # Notes
/// `is_unbounded` comes from capped effort (point count, depth, evaluation
/// budget), not from a proof. A function with many but finitely many
/// stationary points can be flagged, and a sparse one whose points lie far
/// out may not be.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    pub candidates   : Vec<f64>,
    pub is_unbounded : bool,
    pub evaluations  : usize,
    pub rounds       : usize,
}


const MIN_RELATIVE_HALF_WIDTH: f64 = 1e-12;


/// Plot interval `[lo, hi]`.
///
/// Produced values are finite with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Symmetric window of half-width `half_width` around `center`.
    ///
    /// The half-width is raised to `|center| * 1e-12` so that far-out
    /// centers, where `half_width` is below one ULP, still get `lo < hi`.
    #[inline]
    pub fn around(center: f64, half_width: f64) -> Self {
        let half = half_width.max(center.abs() * MIN_RELATIVE_HALF_WIDTH);
        Self { lo: center - half, hi: center + half }
    }

    #[inline] pub fn width(&self) -> f64 { self.hi - self.lo }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

impl From<Range> for (f64, f64) {
    fn from(r: Range) -> Self { r.as_tuple() }
}


/// Shape detected before the point search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Constant,
    Affine,
    General,
}


/// Stage that settled the final point set.
/// - [`Tier::Classified`]  : constant/affine shortcut
/// - [`Tier::Stationary`]  : stationary and curvature-change points
/// - [`Tier::UnitSlope`]   : points where `|f'| = 1` were added
/// - [`Tier::Roots`]       : roots from the zero finder were added
/// - [`Tier::Cusps`]       : cusp-tolerant searches were added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Classified,
    Stationary,
    UnitSlope,
    Roots,
    Cusps,
}


/// Full outcome of [`analyze`](crate::domain::range::analyze).
///
/// [`RangeReport`]
/// - `range`       : chosen plot interval
/// - `shape`       : [`Shape`] of the function
/// - `tier`        : last [`Tier`] consulted
/// - `points`      : interesting x-values the range was built from
/// - `unbounded`   : a stationary search hit its caps
/// - `evaluations` : evaluator calls spent in total
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub range       : Range,
    pub shape       : Shape,
    pub tier        : Tier,
    pub points      : Vec<f64>,
    pub unbounded   : bool,
    pub evaluations : usize,
}
