//! Functions to compute bound-state solutions to the radial, time-independent
//! Schrödinger equation via Numerov integration and the shooting method.
//!
//! The main entry point is [`Shooter`], which borrows a [`RadialGrid`] and an
//! [`EffectivePotential`] and owns the work arrays reused across trial
//! energies.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ LengthError, RError },
    grid::{ RadialGrid, Spacing },
    potential::EffectivePotential,
    root::{ Root, SolverConfig },
    state::Eigenstate,
};

pub type RResult<T> = Result<T, RError>;

/// Perform a Numerov integration of `y'' + k(x) y = 0` starting from the last
/// two samples and heading toward index 0.
///
/// `seed` gives `(y[n - 1], y[n - 2])`. Assumes `k` is sampled over even
/// intervals of width `dx`.
///
/// *Panics if `y` has length less than 3 or `k` is shorter than `y`*.
pub fn numerov_inward<S, T>(
    dx: f64,
    k: &Arr1<S>,
    seed: (f64, f64),
    y: &mut Arr1<T>,
)
where
    S: nd::Data<Elem = f64>,
    T: nd::DataMut<Elem = f64>,
{
    let n = y.len();
    assert!(n >= 3, "solve::numerov_inward: need at least 3 points; got {}", n);
    let c = dx.powi(2) / 12.0;
    y[n - 1] = seed.0;
    y[n - 2] = seed.1;
    for i in (1..n - 1).rev() {
        y[i - 1] = (
            2.0 * (1.0 - 5.0 * c * k[i]) * y[i]
            - (1.0 + c * k[i + 1]) * y[i + 1]
        ) / (1.0 + c * k[i - 1]);
    }
}

/// Perform a Numerov integration of `y'' + k(x) y = 0` starting from the first
/// two samples and heading toward the last index.
///
/// `seed` gives `(y[0], y[1])`. Assumes `k` is sampled over even intervals of
/// width `dx`.
///
/// *Panics if `y` has length less than 3 or `k` is shorter than `y`*.
pub fn numerov_outward<S, T>(
    dx: f64,
    k: &Arr1<S>,
    seed: (f64, f64),
    y: &mut Arr1<T>,
)
where
    S: nd::Data<Elem = f64>,
    T: nd::DataMut<Elem = f64>,
{
    let n = y.len();
    assert!(n >= 3, "solve::numerov_outward: need at least 3 points; got {}", n);
    let c = dx.powi(2) / 12.0;
    y[0] = seed.0;
    y[1] = seed.1;
    for i in 1..n - 1 {
        y[i + 1] = (
            2.0 * (1.0 - 5.0 * c * k[i]) * y[i]
            - (1.0 + c * k[i - 1]) * y[i - 1]
        ) / (1.0 + c * k[i + 1]);
    }
}

/// End of the grid at which the shooting target `u = 0` is checked.
///
/// Integration always starts from the opposite end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Seed a decaying solution at the outer edge, integrate inward, and read
    /// the residual at the innermost point.
    #[default]
    Origin,
    /// Seed a regular solution `~ r^(l + 1)` at the origin, integrate outward,
    /// and read the residual at the outermost point.
    Outer,
}

impl Boundary {
    /// Return the array index of the boundary for an array of length `n`.
    pub fn index(self, n: usize) -> usize {
        match self {
            Self::Origin => 0,
            Self::Outer => n - 1,
        }
    }
}

/// An energy interval across which the shooting residual changes sign.
///
/// Intervals returned by [`Shooter::scan_intervals`] are numbered from 1 in
/// order of increasing energy. This numbering only matches the principal
/// quantum number (less `l`) if the scan resolved every bound state in the
/// range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyInterval {
    /// Position of the interval in the scan, starting from 1.
    pub index: usize,
    /// Lower energy bound.
    pub lower: f64,
    /// Upper energy bound.
    pub upper: f64,
}

impl EnergyInterval {
    /// Return `true` if `e` lies within the interval (inclusive).
    pub fn contains(&self, e: f64) -> bool { self.lower <= e && e <= self.upper }

    fn bounds(&self) -> (f64, f64) { (self.lower, self.upper) }
}

/// Shooting-method solver context.
///
/// The grid and potential are borrowed read-only; the coefficient (`K`) and
/// solution work arrays are owned and rewritten in full on every trial energy.
/// All propagating methods take `&mut self`, so a single `Shooter` can never
/// be driven by two propagations at once. Independent searches should each use
/// their own `Shooter` over the same grid and potential.
#[derive(Clone, Debug)]
pub struct Shooter<'a> {
    grid: &'a RadialGrid,
    pot: &'a EffectivePotential,
    boundary: Boundary,
    config: SolverConfig,
    k: nd::Array1<f64>,
    sol: nd::Array1<f64>,
}

impl<'a> Shooter<'a> {
    /// Create a new solver context with the default root refinement settings,
    /// checking that the potential was sampled on a grid of the same size.
    ///
    /// *Panics if the grid has fewer than 3 points*.
    pub fn new(grid: &'a RadialGrid, pot: &'a EffectivePotential)
        -> RResult<Self>
    {
        LengthError::check(grid.r(), pot.values())?;
        assert!(grid.len() >= 3, "solve::Shooter::new: need at least 3 points");
        let n = grid.len();
        Ok(Self {
            grid,
            pot,
            boundary: Boundary::default(),
            config: SolverConfig::default(),
            k: nd::Array1::zeros(n),
            sol: nd::Array1::zeros(n),
        })
    }

    /// Set the shooting boundary.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the root refinement parameters.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the shooting boundary.
    pub fn boundary(&self) -> Boundary { self.boundary }

    /// Get the root refinement parameters.
    pub fn config(&self) -> SolverConfig { self.config }

    /// Get a reference to the grid.
    pub fn grid(&self) -> &'a RadialGrid { self.grid }

    /// Get a reference to the potential.
    pub fn potential(&self) -> &'a EffectivePotential { self.pot }

    /// Get a view of the coefficient array from the last propagation.
    pub fn k(&self) -> nd::ArrayView1<f64> { self.k.view() }

    // fill `self.k` for energy `e`
    fn set_k(&mut self, e: f64) {
        let v = self.pot.values();
        match self.grid.spacing() {
            Spacing::Linear { .. } => {
                nd::Zip::from(&mut self.k).and(v)
                    .for_each(|kk, vk| { *kk = 2.0 * (e - vk); });
            },
            Spacing::Log { .. } => {
                let c = self.pot.centrifugal();
                nd::Zip::from(&mut self.k).and(v).and(self.grid.r_sq())
                    .for_each(|kk, vk, r2k| { *kk = 2.0 * r2k * (e - vk) - c; });
            },
        }
    }

    // two starting values for the integration, ordered from the seeded edge
    // inward
    fn seed(&self, e: f64) -> (f64, f64) {
        let r = self.grid.r();
        let n = r.len();
        let log = self.grid.spacing().is_log();
        match self.boundary {
            Boundary::Origin => {
                let alpha = (-2.0 * e).sqrt();
                let f = |rk: f64| {
                    let pre = if log { rk.sqrt() } else { rk };
                    pre * (-alpha * rk).exp()
                };
                (f(r[n - 1]), f(r[n - 2]))
            },
            Boundary::Outer => {
                let l = self.pot.l() as f64;
                let p = if log { l + 0.5 } else { l + 1.0 };
                (r[0].powf(p), r[1].powf(p))
            },
        }
    }

    /// Integrate the radial equation at energy `e`, returning a view of the
    /// (unnormalized) solution `u(r)`.
    ///
    /// On log grids the integration is carried out for `y = u / √r` over
    /// `x = ln r` and the result is converted back to `u`.
    ///
    /// When shooting toward the origin this assumes `e < 0`; the asymptotic
    /// seed is meaningless otherwise.
    pub fn propagate(&mut self, e: f64) -> nd::ArrayView1<f64> {
        self.set_k(e);
        let seed = self.seed(e);
        let dx = self.grid.dx();
        match self.boundary {
            Boundary::Origin => numerov_inward(dx, &self.k, seed, &mut self.sol),
            Boundary::Outer => numerov_outward(dx, &self.k, seed, &mut self.sol),
        }
        if self.grid.spacing().is_log() {
            self.sol *= self.grid.r_sqrt();
        }
        self.sol.view()
    }

    /// Integrate at energy `e` and return the value of the solution at the
    /// shooting boundary, which vanishes for bound states.
    pub fn residual(&mut self, e: f64) -> f64 {
        let idx = self.boundary.index(self.sol.len());
        self.propagate(e)[idx]
    }

    /// Compute the [residual][Self::residual] for each of a set of energies.
    pub fn residuals<S>(&mut self, energies: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        energies.mapv(|e| self.residual(e))
    }

    /// Scan energies `emin + k de < emax` for sign changes in the residual,
    /// returning the intervals `[E, E + de]` across which they occur. The last
    /// interval is clipped to end at `emax`.
    ///
    /// Each step costs one propagation. Sign changes that are closer together
    /// than `de` can cancel out and go unreported.
    pub fn scan_intervals(&mut self, emin: f64, emax: f64, de: f64)
        -> RResult<Vec<EnergyInterval>>
    {
        RError::check_scan(emin, emax, de)?;
        let mut intervals: Vec<EnergyInterval> = Vec::new();
        let mut lower = emin;
        let mut res_lower = self.residual(lower);
        let mut k: usize = 1;
        while lower < emax {
            let upper = (emin + k as f64 * de).min(emax);
            let res_upper = self.residual(upper);
            if res_lower * res_upper < 0.0 {
                let interval = EnergyInterval {
                    index: intervals.len() + 1,
                    lower,
                    upper,
                };
                log::debug!("solve::scan_intervals: found {:?}", interval);
                intervals.push(interval);
            }
            lower = upper;
            res_lower = res_upper;
            k += 1;
        }
        Ok(intervals)
    }

    /// Refine the energy of a bound state within `interval` with the
    /// configured root finder.
    ///
    /// When a root is found, the work arrays are left holding the last trial
    /// solution evaluated by the refiner, which is not necessarily the one at
    /// the returned energy.
    pub fn refine(&mut self, interval: EnergyInterval) -> RResult<Root> {
        let config = self.config;
        config.refine(|e| self.residual(e), interval.bounds())
    }

    /// Refine the energy within `interval` and build the normalized
    /// [`Eigenstate`] at that energy.
    ///
    /// Returns `Ok(None)` if the residual does not change sign across
    /// `interval`. The eigenstate's principal quantum number is taken as
    /// `interval.index + l`. If the root finder hits its iteration cap, the
    /// eigenstate is still built from the last iterate and marked as
    /// unconverged.
    pub fn solve_eigenstate(&mut self, interval: EnergyInterval)
        -> RResult<Option<Eigenstate>>
    {
        let root = self.refine(interval)?;
        let (e, iters, converged) = match root {
            Root::Converged { x, iters } => (x, iters, true),
            Root::MaxIters { x, iters } => {
                log::warn!(
                    "solve::solve_eigenstate: energy search in [{}, {}] \
                    reached maxiters",
                    interval.lower, interval.upper,
                );
                (x, iters, false)
            },
            Root::NoBracket => {
                log::debug!(
                    "solve::solve_eigenstate: no sign change in [{}, {}]",
                    interval.lower, interval.upper,
                );
                return Ok(None);
            },
        };
        let l = self.pot.l();
        let raw = self.propagate(e).to_owned();
        let state = Eigenstate::new(
            e, interval.index + l, l, raw, self.grid, iters, converged);
        log::info!(
            "solve::solve_eigenstate: n = {}, l = {}: E = {:.8} ({} iterations)",
            state.n, state.l, state.e, iters,
        );
        Ok(Some(state))
    }

    /// Scan `[emin, emax)` in steps of `de` and solve for an eigenstate in each
    /// interval found, in order of increasing energy.
    pub fn solve_all(&mut self, emin: f64, emax: f64, de: f64)
        -> RResult<Vec<Eigenstate>>
    {
        let intervals = self.scan_intervals(emin, emax, de)?;
        let mut states: Vec<Eigenstate> = Vec::with_capacity(intervals.len());
        for interval in intervals {
            if let Some(state) = self.solve_eigenstate(interval)? {
                states.push(state);
            }
        }
        Ok(states)
    }
}
