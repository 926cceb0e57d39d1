//! Quadrature and wavefunction normalization tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.iter().skip(1).take(n - 2).fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

// composite Simpson sum over an iterator of samples
fn simpson_iter<I, A>(y: I, n: usize, dx: A) -> A
where
    I: Iterator<Item = A>,
    A: Float,
{
    assert!(
        n % 2 == 1 && n >= 3,
        "utils::simpson: number of samples must be odd and at least 3; got {}",
        n,
    );
    let two = A::one() + A::one();
    let four = two + two;
    let three = two + A::one();
    let s = y.enumerate()
        .fold(A::zero(), |acc, (k, yk)| {
            if k == 0 || k == n - 1 {
                acc + yk
            } else if k % 2 == 1 {
                acc + four * yk
            } else {
                acc + two * yk
            }
        });
    dx * s / three
}

/// Integrate using the composite Simpson rule.
///
/// ```
/// use ndarray as nd;
/// use radial::utils::simpson;
///
/// let y = nd::array![0.0_f64, 1.0, 4.0, 9.0, 16.0];
/// assert!((simpson(&y, 1.0) - 64.0 / 3.0).abs() < 1e-12);
/// ```
///
/// *Panics if `y` has an even number of elements or fewer than 3*.
pub fn simpson<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    simpson_iter(y.iter().copied(), y.len(), dx)
}

/// Calculate the (squared) norm of a wavefunction, `∫ q² w dx`, with optional
/// pointwise quadrature weights `w` (e.g. the Jacobian of a coordinate
/// change).
///
/// *Panics if `q` has an even number of elements or fewer than 3, or if `w` is
/// shorter than `q`*.
pub fn wf_norm<S, A>(
    q: &nd::ArrayBase<S, Ix1>,
    w: Option<&nd::Array1<A>>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n = q.len();
    match w {
        Some(w) => {
            assert!(w.len() >= n, "utils::wf_norm: weights are too short");
            simpson_iter(q.iter().zip(w).map(|(qk, wk)| *qk * *qk * *wk), n, dx)
        },
        None => simpson_iter(q.iter().map(|qk| *qk * *qk), n, dx),
    }
}

/// Renormalize a wavefunction in place.
///
/// *Panics under the same conditions as [`wf_norm`]*.
pub fn wf_renormalize<S, A>(
    q: &mut nd::ArrayBase<S, Ix1>,
    w: Option<&nd::Array1<A>>,
    dx: A,
)
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, w, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics under the same conditions as [`wf_norm`]*.
pub fn wf_normalized<S, A>(
    q: &nd::ArrayBase<S, Ix1>,
    w: Option<&nd::Array1<A>>,
    dx: A,
) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, w, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn simpson_is_exact_for_squares() {
        let y = nd::array![0.0_f64, 1.0, 4.0, 9.0, 16.0];
        assert_abs_diff_eq!(simpson(&y, 1.0), 64.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_integrates_sine() {
        let x: nd::Array1<f64>
            = nd::Array1::linspace(0.0, std::f64::consts::PI, 201);
        let dx = x[1] - x[0];
        assert_abs_diff_eq!(simpson(&x.mapv(f64::sin), dx), 2.0, epsilon = 1e-8);
    }

    #[test]
    #[should_panic]
    fn simpson_rejects_even_sample_count() {
        let y = nd::array![0.0, 1.0, 4.0, 9.0];
        simpson(&y, 1.0);
    }

    #[test]
    fn trapz_integrates_line() {
        let y = nd::array![0.0, 1.0, 2.0, 3.0];
        assert_abs_diff_eq!(trapz(&y, 1.0), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn normalization_is_idempotent() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 10.0, 1001);
        let dx = x[1] - x[0];
        let q = x.mapv(|xk| xk * (-xk).exp());
        let once = wf_normalized(&q, None, dx);
        let twice = wf_normalized(&once, None, dx);
        assert_abs_diff_eq!(wf_norm(&once, None, dx), 1.0, epsilon = 1e-12);
        once.iter().zip(&twice)
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = 1e-9));
    }

    #[test]
    fn weighted_norm_matches_manual_product() {
        let q = nd::array![1.0, 2.0, 3.0, 2.0, 1.0];
        let w = nd::array![1.0, 0.5, 2.0, 0.5, 1.0];
        let manual: nd::Array1<f64> = &q * &q * &w;
        assert_abs_diff_eq!(
            wf_norm(&q, Some(&w), 0.1),
            simpson(&manual, 0.1),
            epsilon = 1e-12
        );
        let mut r = q.clone();
        wf_renormalize(&mut r, Some(&w), 0.1);
        assert_abs_diff_eq!(wf_norm(&r, Some(&w), 0.1), 1.0, epsilon = 1e-12);
    }
}
