//! Normalized bound states and derived radial observables.

use std::{ cmp, f64::consts::PI, ops::Range };
use ndarray as nd;
use crate::{
    error::RError,
    grid::{ RadialGrid, Spacing },
    interp::{ self, Direction },
    potential::EffectivePotential,
    utils::{ wf_norm, wf_normalized },
};

// relative magnitude below which samples are ignored when looking for nodes
const NODE_THRESHOLD: f64 = 1e-6;

/// A single normalized bound state of the radial equation.
///
/// This struct is usually only returned by
/// [`Shooter::solve_eigenstate`][crate::solve::Shooter::solve_eigenstate];
/// the wavefunction is the reduced radial function `u(r) = r ψ(r)`, sampled on
/// the grid it was solved on and normalized so that `∫ u² dr = 1`.
#[derive(Clone, Debug)]
pub struct Eigenstate {
    /// Energy
    pub e: f64,
    /// Principal quantum number
    pub n: usize,
    /// Angular momentum quantum number
    pub l: usize,
    /// Reduced radial wavefunction `u(r)`
    pub wf: nd::Array1<f64>,
    /// Number of root-finder iterations spent on the energy
    pub iters: usize,
    /// Whether the energy search met its convergence criterion
    pub converged: bool,
    // radius samples
    r: nd::Array1<f64>,
    // integration step in r (linear) or ln r (log)
    dx: f64,
    spacing: Spacing,
}

impl Eigenstate {
    /// Normalize a raw solution sampled on `grid` and wrap it with its quantum
    /// numbers.
    ///
    /// On log grids the normalization integral is taken over `x = ln r` with
    /// the Jacobian `r`.
    ///
    /// *Panics if the grid has an even number of points*, since Simpson's rule
    /// is then undefined.
    pub fn new(
        e: f64,
        n: usize,
        l: usize,
        raw: nd::Array1<f64>,
        grid: &RadialGrid,
        iters: usize,
        converged: bool,
    ) -> Self
    {
        let spacing = grid.spacing();
        let dx = grid.dx();
        let r = grid.r().clone();
        let wf = wf_normalized(&raw, jacobian(spacing, &r), dx);
        Self { e, n, l, wf, iters, converged, r, dx, spacing }
    }

    /// Compare two `Eigenstate`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Get a reference to the radius samples.
    pub fn r(&self) -> &nd::Array1<f64> { &self.r }

    /// Get the grid spacing the state was solved on.
    pub fn spacing(&self) -> Spacing { self.spacing }

    /// Compute `∫ u² dr`, which should be 1 up to rounding.
    pub fn norm(&self) -> f64 {
        wf_norm(&self.wf, jacobian(self.spacing, &self.r), self.dx)
    }

    /// Compute the expectation value `∫ u² f(r) dr` of a radial function.
    pub fn expectation<F>(&self, f: F) -> f64
    where F: Fn(f64) -> f64
    {
        let fr = self.r.mapv(f);
        let w = match self.spacing {
            Spacing::Linear { .. } => fr,
            Spacing::Log { .. } => fr * &self.r,
        };
        wf_norm(&self.wf, Some(&w), self.dx)
    }

    /// Return the radial probability density `u(r)²`.
    pub fn probability_density(&self) -> nd::Array1<f64> {
        self.wf.mapv(|u| u * u)
    }

    /// Return the volumetric density `ρ(r) = (u(r) / r)² / 4π`, taking
    /// `ρ(0) = 0`.
    pub fn volumetric_density(&self) -> nd::Array1<f64> {
        nd::Zip::from(&self.wf).and(&self.r)
            .map_collect(|u, r| {
                if *r > 0.0 { (u / r).powi(2) / (4.0 * PI) } else { 0.0 }
            })
    }

    // index range over which the wavefunction is resolved above the residual
    // left at the shooting boundary, excluding the first and last samples
    fn resolved(&self) -> Range<usize> {
        let n = self.wf.len();
        let thresh = NODE_THRESHOLD * self.wf.iter().fold(0.0, |m, uk| uk.abs().max(m));
        let first = self.wf.iter().position(|uk| uk.abs() > thresh).unwrap_or(0);
        let last = self.wf.iter().rposition(|uk| uk.abs() > thresh).unwrap_or(n);
        cmp::max(first, 1)..cmp::min(last + 1, n - 1)
    }

    /// Count the sign changes of the wavefunction strictly inside the grid.
    ///
    /// The first and last samples are skipped, as are the tails where `|u|`
    /// stays below a millionth of its maximum: the residual left at the
    /// shooting boundary can flip the sign of either. Exact zeros are passed
    /// over.
    pub fn node_count(&self) -> usize {
        self.wf.slice(nd::s![self.resolved()]).iter()
            .filter(|uk| **uk != 0.0)
            .fold((0, None), |(count, last): (usize, Option<bool>), uk| {
                let positive = *uk > 0.0;
                match last {
                    Some(prev) if prev != positive => (count + 1, Some(positive)),
                    _ => (count, Some(positive)),
                }
            })
            .0
    }

    /// Locate the radial nodes by interpolating the wavefunction near each
    /// sign change, over the same range as [`node_count`][Self::node_count].
    pub fn node_positions(&self) -> Result<Vec<f64>, RError> {
        let inner = self.resolved();
        let nodes = interp::crossings(
            &self.r.slice(nd::s![inner.clone()]),
            &self.wf.slice(nd::s![inner]),
            Direction::Either,
        )?;
        Ok(nodes)
    }

    /// Find the outermost classical turning point, where the effective
    /// potential (including the centrifugal barrier) rises through the
    /// state's energy.
    ///
    /// Returns `None` if the energy lies above the potential everywhere on the
    /// grid.
    pub fn turning_point(&self, pot: &EffectivePotential)
        -> Result<Option<f64>, RError>
    {
        let veff: nd::Array1<f64> = match self.spacing {
            Spacing::Linear { .. } => pot.values().clone(),
            Spacing::Log { .. } => {
                let l = self.l as f64;
                nd::Zip::from(pot.values()).and(&self.r)
                    .map_collect(|v, r| v + 0.5 * l * (l + 1.0) / (r * r))
            },
        };
        let diff = veff - self.e;
        let points = interp::crossings(&self.r, &diff, Direction::Up)?;
        Ok(points.last().copied())
    }
}

// quadrature weights for the normalization integral
fn jacobian(spacing: Spacing, r: &nd::Array1<f64>) -> Option<&nd::Array1<f64>> {
    match spacing {
        Spacing::Linear { .. } => None,
        Spacing::Log { .. } => Some(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::potential::{ self, EffectivePotential };

    // analytic hydrogen 2s state, u(r) = r (1 - r / 2) exp(-r / 2)
    fn hydrogen_2s(grid: &RadialGrid) -> Eigenstate {
        let raw = grid.r().mapv(|r| r * (1.0 - r / 2.0) * (-r / 2.0).exp());
        Eigenstate::new(-0.125, 2, 0, raw, grid, 0, true)
    }

    #[test]
    fn normalizes_on_construction() {
        let grid = RadialGrid::linear(40.0, 4000);
        let state = hydrogen_2s(&grid);
        assert_abs_diff_eq!(state.norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            crate::utils::simpson(&state.probability_density(), grid.dx()),
            1.0,
            epsilon = 1e-9
        );
        // ⟨r⟩ = 6 for 2s
        assert_abs_diff_eq!(state.expectation(|r| r), 6.0, epsilon = 1e-6);
    }

    #[test]
    fn log_grid_normalization_uses_jacobian() {
        let grid = RadialGrid::log(-6.0, 2.0, 2000);
        let raw = grid.r().mapv(|r| 2.0 * r * (-r).exp());
        let state = Eigenstate::new(-0.5, 1, 0, raw, &grid, 0, true);
        assert_abs_diff_eq!(state.norm(), 1.0, epsilon = 1e-9);
        // the analytic 1s state is already normalized
        let r = grid.r();
        let i = 1500;
        assert_abs_diff_eq!(state.wf[i], 2.0 * r[i] * (-r[i]).exp(), epsilon = 1e-6);
        assert_abs_diff_eq!(state.expectation(|r| r), 1.5, epsilon = 1e-6);
    }

    #[test]
    fn volumetric_density_vanishes_at_origin() {
        let grid = RadialGrid::linear(40.0, 4000);
        let state = hydrogen_2s(&grid);
        let rho = state.volumetric_density();
        assert_eq!(rho[0], 0.0);
        let r = grid.r()[100];
        let expected = state.wf[100].powi(2) / r.powi(2) / (4.0 * PI);
        assert_abs_diff_eq!(rho[100], expected, epsilon = 1e-15);
    }

    #[test]
    fn nodes_of_2s_state() {
        let grid = RadialGrid::linear(40.0, 4000);
        let state = hydrogen_2s(&grid);
        assert_eq!(state.node_count(), 1);
        let nodes = state.node_positions().unwrap();
        assert_eq!(nodes.len(), 1);
        assert_abs_diff_eq!(nodes[0], 2.0, epsilon = 1e-6);
    }

    #[test]
    fn touching_zero_is_not_a_node() {
        let grid = RadialGrid::linear(8.0, 8);
        let raw = nd::array![0.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, -1.0, -2.0];
        let state = Eigenstate::new(-0.5, 2, 0, raw, &grid, 0, true);
        let nodes = state.node_positions().unwrap();
        assert_eq!(state.node_count(), 1);
        assert_eq!(nodes.len(), state.node_count());
        assert_abs_diff_eq!(nodes[0], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn turning_point_of_2s_state() {
        let grid = RadialGrid::linear(40.0, 4000);
        let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
        let state = hydrogen_2s(&grid);
        // -1 / r = -1 / 8
        let tp = state.turning_point(&pot).unwrap().unwrap();
        assert_abs_diff_eq!(tp, 8.0, epsilon = 1e-6);
    }

    #[test]
    #[should_panic]
    fn even_point_count_is_fatal() {
        let grid = RadialGrid::linear(10.0, 5);
        let raw = grid.r().mapv(|r| r * (-r).exp());
        Eigenstate::new(-0.5, 1, 0, raw, &grid, 0, true);
    }
}
