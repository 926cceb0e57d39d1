//! Construction of effective potentials on a [`RadialGrid`].
//!
//! On a linear grid the centrifugal barrier `l(l + 1) / 2r²` is folded into
//! the sampled potential. On a log grid the substitution `y = u / √r`,
//! `x = ln r` turns the barrier into the constant `(l + ½)²`, which is carried
//! alongside the (central) potential instead.

use ndarray as nd;
use crate::{
    error::LengthError,
    grid::{ RadialGrid, Spacing },
};

/// Value stored wherever a potential is singular at `r = 0`.
///
/// The radial function `u(r) = r ψ(r)` vanishes at the origin, so the value
/// there never contributes.
pub const ORIGIN_SENTINEL: f64 = 0.0;

/// Coulomb potential `-Z / r` of a bare nucleus.
pub fn coulomb(z: f64) -> impl Fn(f64) -> f64 + Copy {
    move |r: f64| -z / r
}

/// Centrifugal barrier `l(l + 1) / 2r²`.
pub fn centrifugal(l: usize) -> impl Fn(f64) -> f64 + Copy {
    let l = l as f64;
    move |r: f64| 0.5 * l * (l + 1.0) / (r * r)
}

/// Log-grid centrifugal constant `(l + ½)²`.
pub fn log_centrifugal(l: usize) -> f64 { (l as f64 + 0.5).powi(2) }

/// Effective potential sampled on a grid.
///
/// `values` is always the same length as the grid it was built for. The
/// `centrifugal` constant is only read by log-grid propagation; it is zero for
/// potentials built for linear grids.
#[derive(Clone, Debug)]
pub struct EffectivePotential {
    values: nd::Array1<f64>,
    l: usize,
    centrifugal: f64,
}

impl EffectivePotential {
    /// Sample a central potential `v` for angular momentum `l` on `grid`.
    ///
    /// For linear grids the centrifugal term is added pointwise; for log grids
    /// it becomes the constant `(l + ½)²`. Points at `r = 0` are set to
    /// [`ORIGIN_SENTINEL`].
    pub fn central<F>(grid: &RadialGrid, l: usize, v: F) -> Self
    where F: Fn(f64) -> f64
    {
        match grid.spacing() {
            Spacing::Linear { .. } => {
                let vc = centrifugal(l);
                let values = grid.r().mapv(|r| {
                    if r == 0.0 { ORIGIN_SENTINEL } else { v(r) + vc(r) }
                });
                Self { values, l, centrifugal: 0.0 }
            },
            Spacing::Log { .. } => {
                let values = grid.r().mapv(&v);
                Self { values, l, centrifugal: log_centrifugal(l) }
            },
        }
    }

    /// Wrap a precomputed array of potential values for angular momentum `l`
    /// on `grid`.
    ///
    /// On linear grids `values` must already include the centrifugal barrier.
    pub fn from_values(grid: &RadialGrid, values: nd::Array1<f64>, l: usize)
        -> Result<Self, LengthError>
    {
        LengthError::check(grid.r(), &values)?;
        let centrifugal
            = if grid.spacing().is_log() { log_centrifugal(l) } else { 0.0 };
        Ok(Self { values, l, centrifugal })
    }

    /// Add another grid-aligned contribution (e.g. an exchange-correlation
    /// potential) to the sampled values.
    pub fn add_values(mut self, other: &nd::Array1<f64>)
        -> Result<Self, LengthError>
    {
        LengthError::check(&self.values, other)?;
        self.values += other;
        Ok(self)
    }

    /// Get a reference to the sampled values.
    pub fn values(&self) -> &nd::Array1<f64> { &self.values }

    /// Get the angular momentum quantum number.
    pub fn l(&self) -> usize { self.l }

    /// Get the log-grid centrifugal constant.
    pub fn centrifugal(&self) -> f64 { self.centrifugal }

    /// Get the number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.values.len() }
}
