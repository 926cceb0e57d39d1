//! Local-density exchange and correlation formulas, in Hartree, as functions of
//! the Wigner-Seitz radius `rs = (3 / 4πρ)^(1/3)`.
//!
//! Each parametrization is a variant of [`ExchangeCorrelation`]; variants of
//! the von Barth-Hedin family carry their own `(C, A)` coefficients.
//!
//! References:
//! - U. von Barth and L. Hedin, J. Phys. C **5**, 1629 (1972)
//! - O. Gunnarsson and B. I. Lundqvist, Phys. Rev. B **13**, 4274 (1976)
//! - V. L. Moruzzi, J. F. Janak, and A. R. Williams, *Calculated Electronic
//!   Properties of Metals* (Pergamon, 1978)
//! - S. H. Vosko, L. Wilk, and M. Nusair, Can. J. Phys. **58**, 1200 (1980)
//! - J. P. Perdew and A. Zunger, Phys. Rev. B **23**, 5048 (1981)

use std::f64::consts::PI;
use ndarray as nd;
use crate::Arr1;

/// `(3 / 2π)^(2/3)`
pub const ALPHA_X: f64 = 0.610887057710857;

// Perdew-Zunger
const PZ_A: f64 = 0.0311;
const PZ_B: f64 = -0.048;
const PZ_C: f64 = 0.002;
const PZ_D: f64 = -0.0116;
const PZ_GAMMA: f64 = -0.1423;
const PZ_BETA1: f64 = 1.0529;
const PZ_BETA2: f64 = 0.3334;

// Vosko-Wilk-Nusair, paramagnetic
const VWN_A: f64 = 0.0621814;
const VWN_X0: f64 = -0.10498;
const VWN_B: f64 = 3.72744;
const VWN_C: f64 = 12.9352;
const VWN_Q: f64 = 6.1519908;
const VWN_C1: f64 = 1.2117833;
const VWN_C2: f64 = 1.1435257;
const VWN_C3: f64 = -0.031167608;

/// Exchange-correlation parametrization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExchangeCorrelation {
    /// von Barth-Hedin-type correlation with coefficients `c` and `a`.
    BarthHedin {
        /// Correlation prefactor.
        c: f64,
        /// Scale of `rs`.
        a: f64,
    },
    /// Vosko-Wilk-Nusair correlation.
    VoskoWilkNusair,
    /// Perdew-Zunger parametrization of Ceperley-Alder correlation.
    PerdewZunger,
}

impl ExchangeCorrelation {
    /// von Barth and Hedin (1972).
    pub const VON_BARTH_HEDIN: Self = Self::BarthHedin { c: 0.0504, a: 30.0 };

    /// Gunnarsson and Lundqvist (1976).
    pub const GUNNARSSON_LUNDQVIST: Self = Self::BarthHedin { c: 0.0666, a: 11.4 };

    /// Moruzzi, Janak, and Williams (1978).
    pub const MORUZZI_JANAK_WILLIAMS: Self = Self::BarthHedin { c: 0.045, a: 21.0 };

    /// Exchange potential `Vx`.
    pub fn vx(&self, rs: f64) -> f64 { -ALPHA_X / rs }

    /// Exchange energy density `εx`.
    pub fn ex(&self, rs: f64) -> f64 { -0.75 * ALPHA_X / rs }

    /// `εx - Vx`.
    pub fn ex_minus_vx(&self, rs: f64) -> f64 { 0.25 * ALPHA_X / rs }

    /// Correlation potential `Vc`.
    pub fn vc(&self, rs: f64) -> f64 {
        match *self {
            Self::BarthHedin { c, a } => {
                let x = rs / a;
                -0.5 * c * (1.0 + x.recip()).ln()
            },
            Self::VoskoWilkNusair => {
                let x = rs.sqrt();
                let xpx = x * x + VWN_B * x + VWN_C;
                let atnp = VWN_Q.atan2(2.0 * x + VWN_B);
                let ecp = 0.5 * VWN_A * (
                    (x * x / xpx).ln()
                    + VWN_C1 * atnp
                    - VWN_C3 * (((x - VWN_X0).powi(2) / xpx).ln() + VWN_C2 * atnp)
                );
                ecp - VWN_A / 6.0 * (VWN_C * (x - VWN_X0) - VWN_B * x * VWN_X0)
                    / ((x - VWN_X0) * xpx)
            },
            Self::PerdewZunger => {
                if rs > 1.0 {
                    let sq = rs.sqrt();
                    let den = 1.0 + PZ_BETA1 * sq + PZ_BETA2 * rs;
                    PZ_GAMMA / den
                        * (1.0 + 7.0 / 6.0 * PZ_BETA1 * sq + PZ_BETA2 * rs)
                        / den
                } else {
                    PZ_A * rs.ln() + PZ_B - PZ_A / 3.0
                        + 2.0 / 3.0 * PZ_C * rs * rs.ln()
                        + (2.0 * PZ_D - PZ_C) * rs / 3.0
                }
            },
        }
    }

    /// `εc - Vc`.
    pub fn ec_minus_vc(&self, rs: f64) -> f64 {
        match *self {
            Self::BarthHedin { c, a } => {
                let x = rs / a;
                let ec = -0.5 * c * (
                    (1.0 + x.powi(3)) * (1.0 + x.recip()).ln()
                    + 0.5 * x - x * x - 1.0 / 3.0
                );
                ec - self.vc(rs)
            },
            Self::VoskoWilkNusair => {
                let x = rs.sqrt();
                VWN_A / 6.0 * (VWN_C * (x - VWN_X0) - VWN_B * x * VWN_X0)
                    / ((x - VWN_X0) * (x * x + VWN_B * x + VWN_C))
            },
            Self::PerdewZunger => {
                if rs > 1.0 {
                    PZ_GAMMA / (1.0 + PZ_BETA1 * rs.sqrt() + PZ_BETA2 * rs)
                        - self.vc(rs)
                } else {
                    PZ_A * rs.ln() + PZ_B + PZ_C * rs * rs.ln() + PZ_D * rs
                        - self.vc(rs)
                }
            },
        }
    }

    /// Correlation energy density `εc`.
    pub fn ec(&self, rs: f64) -> f64 { self.ec_minus_vc(rs) + self.vc(rs) }

    /// Exchange-correlation potential `Vx + Vc`.
    pub fn vxc(&self, rs: f64) -> f64 { self.vx(rs) + self.vc(rs) }

    /// Sample `Vxc` for an electron density `ρ(r)`, giving zero wherever the
    /// density vanishes.
    pub fn lda_potential<S>(&self, density: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        density.mapv(|rho| {
            if rho > 0.0 { self.vxc(wigner_seitz(rho)) } else { 0.0 }
        })
    }
}

/// Wigner-Seitz radius `(3 / 4πρ)^(1/3)` for density `ρ`.
pub fn wigner_seitz(rho: f64) -> f64 { (3.0 / (4.0 * PI * rho)).cbrt() }

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [ExchangeCorrelation; 5] = [
        ExchangeCorrelation::VON_BARTH_HEDIN,
        ExchangeCorrelation::GUNNARSSON_LUNDQVIST,
        ExchangeCorrelation::MORUZZI_JANAK_WILLIAMS,
        ExchangeCorrelation::VoskoWilkNusair,
        ExchangeCorrelation::PerdewZunger,
    ];

    #[test]
    fn exchange_is_shared() {
        for xc in ALL {
            assert_abs_diff_eq!(xc.vx(1.0), -ALPHA_X, epsilon = 1e-15);
            assert_abs_diff_eq!(xc.ex(2.0) - xc.vx(2.0), xc.ex_minus_vx(2.0), epsilon = 1e-15);
        }
    }

    #[test]
    fn correlation_is_negative_and_finite() {
        for xc in ALL {
            for rs in [0.1, 0.5, 1.0, 2.0, 5.0, 10.0] {
                let vc = xc.vc(rs);
                let ec = xc.ec(rs);
                assert!(vc.is_finite() && vc < 0.0, "{:?} vc({}) = {}", xc, rs, vc);
                assert!(ec.is_finite() && ec < 0.0, "{:?} ec({}) = {}", xc, rs, ec);
            }
        }
    }

    #[test]
    fn perdew_zunger_branches_meet_at_rs_1() {
        let xc = ExchangeCorrelation::PerdewZunger;
        // the fit matches εc across rs = 1 but not its derivative
        assert_abs_diff_eq!(xc.ec(1.0 - 1e-9), -0.0596, epsilon = 1e-6);
        assert_abs_diff_eq!(xc.ec(1.0 - 1e-9), xc.ec(1.0 + 1e-9), epsilon = 1e-4);
        assert_abs_diff_eq!(xc.vc(1.0 - 1e-9), xc.vc(1.0 + 1e-9), epsilon = 5e-3);
    }

    #[test]
    fn barth_hedin_family_shares_formula() {
        let ExchangeCorrelation::BarthHedin { c, a } = ExchangeCorrelation::VON_BARTH_HEDIN
            else { panic!("expected a von Barth-Hedin variant") };
        assert_eq!((c, a), (0.0504, 30.0));
        let vc = ExchangeCorrelation::VON_BARTH_HEDIN.vc(a);
        assert_abs_diff_eq!(vc, -0.5 * c * 2.0_f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn lda_potential_skips_empty_regions() {
        // rs = 2
        let rho = nd::array![0.0, 3.0 / (32.0 * PI), 1e-3];
        let v = ExchangeCorrelation::PerdewZunger.lda_potential(&rho);
        assert_eq!(v[0], 0.0);
        assert_abs_diff_eq!(wigner_seitz(rho[1]), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            v[1],
            -ALPHA_X / 2.0 + ExchangeCorrelation::PerdewZunger.vc(2.0),
            epsilon = 1e-9
        );
        assert!(v[2] < 0.0);
    }
}
