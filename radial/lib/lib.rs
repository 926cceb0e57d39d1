#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for the automated solution of
//! the radial, time-independent Schrödinger equation for central potentials via
//! Numerov's scheme and the shooting method.
//!
//! Provides implementations for the following numerical routines:
//! - Uniform and logarithmic radial grids
//! - Inward (naive) Numerov integration from a decaying asymptotic boundary
//!   condition, in both `u(r) = r ψ(r)` and log-grid `y(x) = u(r) / √r` forms
//! - Coarse bracketing of the origin residual over an energy range
//! - Bracketed root refinement (Brent's method and a bisection-guarded secant
//!   search)
//! - Simpson normalization and derived radial observables (densities, nodes,
//!   turning points, expectation values)
//!
//! along with the collaborators a calculation needs around them: Coulomb and
//! centrifugal potentials, local-density exchange-correlation formulas, and
//! two-column data files.
//!
//! Potentials are taken to be in Hartree atomic units. See [`docs`] for
//! theoretical background.
//!
//! ```
//! use radial::{ grid::RadialGrid, potential::{ self, EffectivePotential } };
//! use radial::solve::Shooter;
//!
//! let grid = RadialGrid::linear(10.0, 4000);
//! let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
//! let mut shooter = Shooter::new(&grid, &pot).unwrap();
//! let brackets = shooter.scan_intervals(-1.0, 0.0, 0.07).unwrap();
//! let ground = shooter.solve_eigenstate(brackets[0]).unwrap().unwrap();
//! assert_eq!(ground.n, 1);
//! assert!((ground.e + 0.5).abs() < 1e-4);
//! ```

pub mod error;
pub mod grid;
pub mod interp;
pub mod io;
pub mod potential;
pub mod root;
pub mod solve;
pub mod state;
pub mod units;
pub mod utils;
pub mod xc;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 50;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
