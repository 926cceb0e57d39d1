//! Bracketed, derivative-free root finding for scalar functions.
//!
//! Both refiners require a sign change across the initial bounds and report
//! [`Root::NoBracket`] otherwise. Iteration stops once the sign change has been
//! pinned to within a relative width of about `epsilon`; if `maxiters` is
//! reached first the last iterate is still returned, flagged as
//! [`Root::MaxIters`].
//!
//! ```
//! use radial::root::{ brent, Root };
//!
//! let root = brent(|x: f64| x.powi(3) - 2.0, (-1.0, 3.0), 1e-10, 100);
//! assert!(root.is_converged());
//! assert!((root.value().unwrap() - 2.0_f64.cbrt()).abs() < 1e-8);
//!
//! let none = brent(|x: f64| x * x + 1.0, (-1.0, 1.0), 1e-10, 100);
//! assert_eq!(none, Root::NoBracket);
//! ```

use crate::{ error::RError, DEF_EPSILON, DEF_MAXITERS };

/// Outcome of a bracketed root search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Root {
    /// The convergence criterion was met.
    Converged {
        /// Location of the root.
        x: f64,
        /// Number of iterations taken.
        iters: usize,
    },
    /// The iteration cap was reached; `x` is the last iterate.
    MaxIters {
        /// Last iterate.
        x: f64,
        /// Number of iterations taken (equal to the cap).
        iters: usize,
    },
    /// The function has the same sign at both ends of the initial bounds.
    NoBracket,
}

impl Root {
    /// Return the root location, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Converged { x, .. } | Self::MaxIters { x, .. } => Some(*x),
            Self::NoBracket => None,
        }
    }

    /// Return the number of iterations taken, if a search was performed.
    pub fn iters(&self) -> Option<usize> {
        match self {
            Self::Converged { iters, .. } | Self::MaxIters { iters, .. }
                => Some(*iters),
            Self::NoBracket => None,
        }
    }

    /// Return `true` if `self` is `Converged`.
    pub fn is_converged(&self) -> bool { matches!(self, Self::Converged { .. }) }

    /// Return `true` if `self` is `NoBracket`.
    pub fn is_no_bracket(&self) -> bool { matches!(self, Self::NoBracket) }
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Bounds<T>(pub(crate) T, pub(crate) T);

impl Bounds<f64> {
    pub(crate) fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }

    pub(crate) fn contains(self, x: f64) -> bool { self.0 < x && x < self.1 }

    pub(crate) fn width(self) -> f64 { self.1 - self.0 }
}

impl<T> Bounds<T> {
    pub(crate) fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Bounds<U> {
        Bounds(f(self.0), f(self.1))
    }
}

impl<T: PartialOrd> Bounds<T> {
    pub(crate) fn from_ord(xx: (T, T)) -> Self {
        if xx.0 > xx.1 { Self(xx.1, xx.0) } else { Self(xx.0, xx.1) }
    }
}

// screen the initial bounds; returns early on a missing bracket or an exact
// zero at either end
fn check_bracket(xb: Bounds<f64>, fb: Bounds<f64>) -> Option<Root> {
    if fb.0 * fb.1 > 0.0 || fb.0.is_nan() || fb.1.is_nan() {
        Some(Root::NoBracket)
    } else if fb.0 == 0.0 {
        Some(Root::Converged { x: xb.0, iters: 0 })
    } else if fb.1 == 0.0 {
        Some(Root::Converged { x: xb.1, iters: 0 })
    } else {
        None
    }
}

/// Find a root of `f` within `bounds` using Brent's method.
///
/// Each step takes an inverse quadratic interpolation (or secant) step from
/// the three most recent points, falling back to bisection whenever the
/// interpolated point would leave the bracket or the bracket is not shrinking
/// quickly enough.
pub fn brent<F>(mut f: F, bounds: (f64, f64), epsilon: f64, maxiters: usize)
    -> Root
where F: FnMut(f64) -> f64
{
    let xb = Bounds::from_ord(bounds);
    let fxb = xb.map(&mut f);
    if let Some(early) = check_bracket(xb, fxb) { return early; }

    let Bounds(mut a, mut b) = xb;
    let Bounds(mut fa, mut fb) = fxb;
    let (mut c, mut fc) = (b, fb);
    let mut d: f64 = b - a;
    let mut e: f64 = d;
    for k in 0..maxiters {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = (2.0 * f64::EPSILON + 0.5 * epsilon) * b.abs();
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Root::Converged { x: b, iters: k };
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let mut p: f64;
            let mut q: f64;
            if a == c {
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                let qa = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * xm * qa * (qa - r) - (b - a) * (r - 1.0));
                q = (qa - 1.0) * (r - 1.0) * (s - 1.0);
            }
            if p > 0.0 { q = -q; }
            p = p.abs();
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        // convergence is decided by the bracket width alone
        b += if d.abs() > tol { d } else { tol.copysign(xm) };
        fb = f(b);
        log::debug!("root::brent: x = {:.10e}, f(x) = {:.6e}", b, fb);
    }
    log::warn!("root::brent: reached maxiters; returning last iterate");
    Root::MaxIters { x: b, iters: maxiters }
}

/// Find a root of `f` within `bounds` using secant steps guarded by
/// bisection.
///
/// The bracket is narrowed with every evaluation. Whenever a secant step would
/// land outside the current bracket (or the last two function values
/// coincide), the bracket midpoint is taken instead. Steps are at least
/// `epsilon / 2` in relative size, so an iterate that approaches the root from
/// one side eventually crosses it and closes the bracket.
pub fn secant_bracketed<F>(
    mut f: F,
    bounds: (f64, f64),
    epsilon: f64,
    maxiters: usize,
) -> Root
where F: FnMut(f64) -> f64
{
    let mut xb = Bounds::from_ord(bounds);
    let mut fxb = xb.map(&mut f);
    if let Some(early) = check_bracket(xb, fxb) { return early; }

    // the first step is always a bisection
    let (mut x1, mut f1) = (xb.0, fxb.0);
    let mut x2 = xb.midpoint();
    let mut f2 = f(x2);
    for k in 0..maxiters {
        if f2 == 0.0 { return Root::Converged { x: x2, iters: k }; }
        if fxb.0 * f2 < 0.0 {
            xb.1 = x2;
            fxb.1 = f2;
        } else {
            xb.0 = x2;
            fxb.0 = f2;
        }
        let tol = 0.5 * epsilon * x2.abs();
        if xb.width() <= 2.0 * tol { return Root::Converged { x: x2, iters: k }; }
        let mut x
            = if f2 != f1 { x2 - (x2 - x1) * f2 / (f2 - f1) } else { f64::NAN };
        // minimum step, so a one-sided approach eventually crosses the root
        if (x - x2).abs() < tol { x = x2 + tol.copysign(x - x2); }
        if !xb.contains(x) { x = xb.midpoint(); }
        let fx = f(x);
        log::debug!("root::secant_bracketed: x = {:.10e}, f(x) = {:.6e}", x, fx);
        x1 = x2;
        f1 = f2;
        x2 = x;
        f2 = fx;
    }
    log::warn!("root::secant_bracketed: reached maxiters; returning last iterate");
    Root::MaxIters { x: x2, iters: maxiters }
}

/// Root refiner selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RootMethod {
    /// Use [`brent`].
    #[default]
    Brent,
    /// Use [`secant_bracketed`].
    Secant,
}

/// Root refinement parameters.
///
/// Unset fields fall back to crate defaults (`epsilon = 1e-6`,
/// `maxiters = 50`).
#[derive(Copy, Clone, Debug, Default)]
pub struct SolverConfig {
    /// Refinement method.
    pub method: RootMethod,
    /// Desired relative accuracy (default: `1e-6`).
    pub epsilon: Option<f64>,
    /// Maximum number of iterations (default: `50`).
    pub maxiters: Option<usize>,
}

impl SolverConfig {
    /// Get the accuracy bound, filling in the default.
    pub fn epsilon(&self) -> f64 { self.epsilon.unwrap_or(DEF_EPSILON) }

    /// Get the iteration cap, filling in the default.
    pub fn maxiters(&self) -> usize { self.maxiters.unwrap_or(DEF_MAXITERS) }

    /// Check parameters and refine a root of `f` within `bounds` with the
    /// configured method.
    pub fn refine<F>(&self, f: F, bounds: (f64, f64)) -> Result<Root, RError>
    where F: FnMut(f64) -> f64
    {
        let epsilon = self.epsilon();
        let maxiters = self.maxiters();
        RError::check_epsilon(epsilon)?;
        RError::check_maxiters(maxiters)?;
        let root = match self.method {
            RootMethod::Brent => brent(f, bounds, epsilon, maxiters),
            RootMethod::Secant => secant_bracketed(f, bounds, epsilon, maxiters),
        };
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cubic(x: f64) -> f64 { x.powi(3) - 2.0 }

    #[test]
    fn brent_finds_cube_root() {
        let root = brent(cubic, (-1.0, 3.0), 1e-6, 50);
        assert!(root.is_converged());
        assert_abs_diff_eq!(root.value().unwrap(), 2.0_f64.cbrt(), epsilon = 1e-5);
    }

    #[test]
    fn secant_finds_cube_root() {
        let root = secant_bracketed(cubic, (-1.0, 3.0), 1e-6, 50);
        assert!(root.is_converged());
        assert_abs_diff_eq!(root.value().unwrap(), 2.0_f64.cbrt(), epsilon = 1e-5);
    }

    #[test]
    fn reversed_bounds_are_reordered() {
        let root = brent(cubic, (3.0, -1.0), 1e-6, 50);
        assert_abs_diff_eq!(root.value().unwrap(), 2.0_f64.cbrt(), epsilon = 1e-5);
    }

    #[test]
    fn same_sign_ends_report_no_bracket() {
        for (a, b) in [(2.0, 3.0), (-3.0, -2.0), (0.0, 1.0)] {
            assert_eq!(brent(cubic, (a, b), 1e-6, 50), Root::NoBracket);
            assert_eq!(secant_bracketed(cubic, (a, b), 1e-6, 50), Root::NoBracket);
        }
        assert!(Root::NoBracket.value().is_none());
    }

    #[test]
    fn exact_zero_at_bound_is_returned() {
        let root = brent(|x| x - 1.0, (1.0, 2.0), 1e-6, 50);
        assert_eq!(root, Root::Converged { x: 1.0, iters: 0 });
    }

    // f(-5) ≈ -1e6 against f(50) ≈ 5e21, so interpolated steps start out tiny
    fn steep(x: f64) -> f64 { x.exp() - 1e6 }

    #[test]
    fn steep_function_is_not_stopped_early() {
        let exact = 1e6_f64.ln();
        for root in [
            brent(steep, (-5.0, 50.0), 1e-6, 50),
            secant_bracketed(steep, (-5.0, 50.0), 1e-6, 50),
        ] {
            assert!(root.is_converged(), "{:?}", root);
            assert_abs_diff_eq!(root.value().unwrap(), exact, epsilon = 1e-4);
        }
    }

    #[test]
    fn iteration_cap_returns_last_iterate() {
        let root = brent(f64::sin, (3.0, 3.5), 1e-15, 1);
        match root {
            Root::MaxIters { x, iters } => {
                assert_eq!(iters, 1);
                assert!((3.0..=3.5).contains(&x));
            },
            other => panic!("expected MaxIters, got {:?}", other),
        }
    }

    #[test]
    fn config_validates_parameters() {
        let bad_eps = SolverConfig { epsilon: Some(0.0), ..Default::default() };
        assert!(matches!(bad_eps.refine(cubic, (-1.0, 3.0)), Err(RError::BadEpsilon(_))));
        let bad_iters = SolverConfig { maxiters: Some(0), ..Default::default() };
        assert!(matches!(bad_iters.refine(cubic, (-1.0, 3.0)), Err(RError::BadMaxiters(0))));
        let secant = SolverConfig { method: RootMethod::Secant, ..Default::default() };
        let root = secant.refine(cubic, (-1.0, 3.0)).unwrap();
        assert_abs_diff_eq!(root.value().unwrap(), 2.0_f64.cbrt(), epsilon = 1e-5);
    }
}
