//! Sign-change location in sampled functions, used for radial nodes and
//! classical turning points.
//!
//! Each sign change between adjacent samples is refined by inverse Lagrange
//! interpolation, i.e. by fitting `x` as a polynomial in `y` through the
//! neighboring samples and evaluating it at `y = 0`.
//!
//! ```
//! use ndarray as nd;
//! use radial::interp::{ crossings, Direction };
//!
//! // nodes of the hydrogen 3s radial function
//! let r: nd::Array1<f64> = nd::Array::linspace(0.05, 20.0, 1000);
//! let u = r.mapv(|rk| rk * (27.0 - 18.0 * rk + 2.0 * rk * rk) * (-rk / 3.0).exp());
//! let nodes = crossings(&r, &u, Direction::Either).unwrap();
//! let expected = [(9.0 - 27.0_f64.sqrt()) / 2.0, (9.0 + 27.0_f64.sqrt()) / 2.0];
//! assert_eq!(nodes.len(), 2);
//! for (node, exp) in nodes.iter().zip(expected) {
//!     assert!((node - exp).abs() < 1e-6);
//! }
//! ```

use ndarray as nd;
use crate::{ Arr1, error::{ InterpError, LengthError, ShortDataError } };

pub type InterpResult<T> = Result<T, InterpError>;

// samples on either side of a sign change used for refinement
const HALF_WINDOW: usize = 2;

/// Direction of a sign change, read in order of increasing index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Positive to negative.
    Down,
    /// Negative to positive.
    Up,
    /// Either way.
    Either,
}

impl Direction {
    fn accepts(self, before: f64, after: f64) -> bool {
        match self {
            Self::Down => before > 0.0 && after < 0.0,
            Self::Up => before < 0.0 && after > 0.0,
            Self::Either => before * after < 0.0,
        }
    }
}

/// Evaluate the polynomial through all points `(xs[j], ys[j])` at `x`.
pub fn lagrange<S, T>(xs: &Arr1<S>, ys: &Arr1<T>, x: f64) -> InterpResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(xs, ys)?;
    let mut acc = 0.0;
    for (j, (&xj, &yj)) in xs.iter().zip(ys).enumerate() {
        let mut basis = 1.0;
        for (m, &xm) in xs.iter().enumerate() {
            if m != j { basis *= (x - xm) / (xj - xm); }
        }
        acc += yj * basis;
    }
    Ok(acc)
}

/// Locate every sign change of `y(x)` in the given direction, in order of
/// increasing `x`.
///
/// Exact zeros are passed over, so a sign change is found between consecutive
/// nonzero samples; a zero that the function only touches is not reported.
/// When the change straddles a run of exact zeros, the middle sample of the
/// run is reported as it is. Other crossings are refined from up to four
/// surrounding samples, so `y` must be monotonic on that scale.
pub fn crossings<S, T>(x: &Arr1<S>, y: &Arr1<T>, dir: Direction)
    -> InterpResult<Vec<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, y)?;
    ShortDataError::check(x)?;
    let n = x.len();
    let mut found: Vec<f64> = Vec::new();
    let mut last: Option<usize> = None;
    for i in 0..n {
        if y[i] == 0.0 { continue; }
        let Some(j) = last.replace(i) else { continue; };
        if !dir.accepts(y[j], y[i]) { continue; }
        if i - j > 1 {
            found.push(x[(i + j) / 2]);
            continue;
        }
        let lo = i.saturating_sub(HALF_WINDOW);
        let hi = (i + HALF_WINDOW).min(n);
        if hi - lo < 2 * HALF_WINDOW {
            log::warn!(
                "interp::crossings: sign change at index {} is too close to the \
                edge for full refinement",
                i,
            );
        }
        let win = nd::s![lo..hi];
        found.push(lagrange(&y.slice(win), &x.slice(win), 0.0)?);
    }
    Ok(found)
}
