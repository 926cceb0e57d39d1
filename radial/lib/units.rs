#![allow(non_upper_case_globals)]

//! Conversion to and from Hartree atomic units, in which all potentials and
//! energies in this crate are expressed.
//!
//! Concrete physical constants are taken from NIST.

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// Hartree energy (eV)
pub const Eh_eV: f64 = Eh / e;

/// Bohr radius (Å)
pub const a0_angstrom: f64 = a0 * 1e10;

/// Convert an energy in Hartree to electronvolts.
pub fn hartree_to_ev(x: f64) -> f64 { x * Eh_eV }

/// Convert an energy in electronvolts to Hartree.
pub fn ev_to_hartree(x: f64) -> f64 { x / Eh_eV }

/// Convert a length in Bohr radii to ångströms.
pub fn bohr_to_angstrom(x: f64) -> f64 { x * a0_angstrom }

/// Convert a length in ångströms to Bohr radii.
pub fn angstrom_to_bohr(x: f64) -> f64 { x / a0_angstrom }

/// Length and energy scales of a two-body Coulomb problem with a finite
/// nuclear mass, relative to Hartree atomic units.
///
/// Solutions computed with an infinite nuclear mass (the default everywhere
/// else in this crate) are mapped onto the reduced-mass problem by scaling
/// radii by `1 / μ` and energies by `μ`, with `μ` in electron masses.
#[derive(Copy, Clone, Debug)]
pub struct AtomicUnits {
    /// Reduced mass in electron masses.
    pub mu: f64,
    /// Length unit in meters.
    pub a: f64,
    /// Energy unit in joules.
    pub e: f64,
}

impl AtomicUnits {
    /// Scales for an infinitely heavy nucleus.
    pub fn infinite_mass() -> Self { Self { mu: 1.0, a: a0, e: Eh } }

    /// Scales for a nucleus of mass `nuclear_mass`, given in kilograms.
    pub fn reduced(nuclear_mass: f64) -> Self {
        let mu = nuclear_mass / (me + nuclear_mass);
        Self { mu, a: a0 / mu, e: Eh * mu }
    }

    /// Convert a radius from the infinite-mass problem to meters.
    pub fn length_si(&self, r: f64) -> f64 { r * self.a }

    /// Convert an energy from the infinite-mass problem to joules.
    pub fn energy_si(&self, en: f64) -> f64 { en * self.e }

    /// Convert an energy from the infinite-mass problem to electronvolts.
    pub fn energy_ev(&self, en: f64) -> f64 { self.energy_si(en) / e }
}
