//! Radial coordinate grids.
//!
//! Two spacings are provided: a uniform grid over `[0, r_max]` and a grid that
//! is uniform in `log₁₀ r`, which concentrates points near the origin where
//! bound-state wavefunctions have the most curvature.

use std::f64::consts::LN_10;
use ndarray as nd;

/// Spacing of a [`RadialGrid`], along with the bounds it was built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Spacing {
    /// Uniform spacing over `[0, rmax]`.
    Linear { rmax: f64 },
    /// Uniform spacing in the decimal exponent over
    /// `[10^log_rmin, 10^log_rmax]`.
    Log { log_rmin: f64, log_rmax: f64 },
}

impl Spacing {
    /// Return `true` if `self` is `Linear`.
    pub fn is_linear(&self) -> bool { matches!(self, Self::Linear { .. }) }

    /// Return `true` if `self` is `Log`.
    pub fn is_log(&self) -> bool { matches!(self, Self::Log { .. }) }
}

/// An ordered sequence of `N + 1` radius samples with per-point `r²` and `√r`.
///
/// All arrays are guaranteed to have the same length and radii are strictly
/// increasing. Grids are immutable once built and are meant to be borrowed by
/// everything downstream.
#[derive(Clone, Debug)]
pub struct RadialGrid {
    spacing: Spacing,
    // number of intervals; there are n + 1 points
    n: usize,
    // step in r (linear) or in log₁₀ r (log)
    step: f64,
    r: nd::Array1<f64>,
    r_sq: nd::Array1<f64>,
    r_sqrt: nd::Array1<f64>,
}

impl RadialGrid {
    fn from_radii(spacing: Spacing, n: usize, step: f64, r: nd::Array1<f64>)
        -> Self
    {
        let r_sq = r.mapv(|rk| rk * rk);
        let r_sqrt = r.mapv(f64::sqrt);
        Self { spacing, n, step, r, r_sq, r_sqrt }
    }

    /// Create a uniform grid of `n + 1` points from 0 to `rmax` inclusive.
    ///
    /// *Panics if `n == 0`*.
    pub fn linear(rmax: f64, n: usize) -> Self {
        assert!(n >= 1, "grid::RadialGrid::linear: n must be at least 1");
        let step = rmax / n as f64;
        let r: nd::Array1<f64> = (0..=n).map(|i| i as f64 * step).collect();
        Self::from_radii(Spacing::Linear { rmax }, n, step, r)
    }

    /// Create a logarithmic grid of `n + 1` points with
    /// `r[i] = 10^(log_rmin + i * step)`, `step = (log_rmax - log_rmin) / n`.
    ///
    /// *Panics if `n == 0`*.
    pub fn log(log_rmin: f64, log_rmax: f64, n: usize) -> Self {
        assert!(n >= 1, "grid::RadialGrid::log: n must be at least 1");
        let step = (log_rmax - log_rmin) / n as f64;
        let r: nd::Array1<f64>
            = (0..=n)
            .map(|i| 10.0_f64.powf(log_rmin + i as f64 * step))
            .collect();
        Self::from_radii(Spacing::Log { log_rmin, log_rmax }, n, step, r)
    }

    /// Get the spacing kind and bounds.
    pub fn spacing(&self) -> Spacing { self.spacing }

    /// Get the number of intervals `N`; the grid holds `N + 1` points.
    pub fn intervals(&self) -> usize { self.n }

    /// Get the number of points, `N + 1`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n + 1 }

    /// Get the grid step, in `r` for linear grids and in `log₁₀ r` for log
    /// grids.
    pub fn step(&self) -> f64 { self.step }

    /// Get the step in the coordinate the radial equation is integrated over:
    /// `r` for linear grids and `ln r` for log grids.
    pub fn dx(&self) -> f64 {
        match self.spacing {
            Spacing::Linear { .. } => self.step,
            Spacing::Log { .. } => self.step * LN_10,
        }
    }

    /// Get a reference to the radius array.
    pub fn r(&self) -> &nd::Array1<f64> { &self.r }

    /// Get a reference to the squared radius array.
    pub fn r_sq(&self) -> &nd::Array1<f64> { &self.r_sq }

    /// Get a reference to the square-rooted radius array.
    pub fn r_sqrt(&self) -> &nd::Array1<f64> { &self.r_sqrt }

    /// Get the largest radius.
    pub fn rmax(&self) -> f64 { self.r[self.n] }

    /// Get the smallest radius.
    pub fn rmin(&self) -> f64 { self.r[0] }
}
