//! Error types for the radial solver.
//!
//! Everything here derives [`thiserror::Error`], so library errors nest through
//! `#[from]` conversions and pass straight into [`anyhow`][anyhow] in
//! application code.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::path::PathBuf;
use ndarray as nd;
use thiserror::Error;

/// Two arrays that must be aligned point-for-point (e.g. a potential and the
/// grid it is sampled on) have different lengths.
#[derive(Debug, Error)]
#[error("misaligned arrays: lengths {left} and {right}")]
pub struct LengthError {
    pub left: usize,
    pub right: usize,
}

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let (left, right) = (a.len(), b.len());
        (left == right).then_some(()).ok_or(Self { left, right })
    }
}

/// Too few samples to locate zeros by four-point interpolation in
/// [`crossings`][crate::interp::crossings].
#[derive(Debug, Error)]
#[error("zero search needs at least 5 samples; got {0}")]
pub struct ShortDataError(pub usize);

impl ShortDataError {
    const MIN: usize = 5;

    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n >= Self::MIN).then_some(()).ok_or(Self(n))
    }
}

/// Returned from functions in [`interp`][crate::interp].
#[derive(Debug, Error)]
pub enum InterpError {
    #[error(transparent)]
    Length(#[from] LengthError),

    #[error(transparent)]
    Short(#[from] ShortDataError),
}

/// Returned from grid-level solver operations: scanning, refinement, and
/// eigenstate construction.
#[derive(Debug, Error)]
pub enum RError {
    /// Root-finder tolerance was zero or negative.
    #[error("root tolerance must be positive; got {0}")]
    BadEpsilon(f64),

    /// Root-finder iteration cap was zero.
    #[error("root iteration cap must be nonzero")]
    BadMaxiters(usize),

    /// Energy scan step was zero or negative.
    #[error("energy scan step must be positive; got {0}")]
    BadEnergyStep(f64),

    /// Energy scan range was empty or reversed.
    #[error("energy scan needs emin < emax; got [{0}, {1}]")]
    BadEnergyRange(f64, f64),

    #[error("potential does not match grid: {0}")]
    Length(#[from] LengthError),

    #[error("node/turning point search: {0}")]
    Interp(#[from] InterpError),
}

impl RError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        if epsilon > 0.0 { Ok(()) } else { Err(Self::BadEpsilon(epsilon)) }
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        if maxiters > 0 { Ok(()) } else { Err(Self::BadMaxiters(maxiters)) }
    }

    pub(crate) fn check_scan(emin: f64, emax: f64, de: f64)
        -> Result<(), Self>
    {
        if de <= 0.0 || de.is_nan() {
            Err(Self::BadEnergyStep(de))
        } else if !(emin < emax) {
            Err(Self::BadEnergyRange(emin, emax))
        } else {
            Ok(())
        }
    }
}

/// Returned from functions in [`io`][crate::io].
#[derive(Debug, Error)]
pub enum IoError {
    /// A file could not be created, written, or read.
    #[error("{path}: {1}", path = .0.display())]
    File(PathBuf, #[source] std::io::Error),

    /// A line of a two-column file did not hold exactly two numbers.
    #[error("{path}:{1}: expected two numbers, got {2:?}", path = .0.display())]
    Parse(PathBuf, usize, String),

    #[error("column lengths differ: {0}")]
    Length(#[from] LengthError),
}
