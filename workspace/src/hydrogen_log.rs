use std::path::PathBuf;
use ndarray as nd;
use radial::{
    grid::RadialGrid,
    io::write_columns,
    potential::{ self, EffectivePotential },
    solve::Shooter,
    units,
    xc::ExchangeCorrelation,
};

const Z: f64 = 1.0;
const LOG_RMIN: f64 = -6.0; // log₁₀(r / a₀)
const LOG_RMAX: f64 = 2.0;
const N: usize = 2000;
const LMAX: usize = 2;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    let grid = RadialGrid::log(LOG_RMIN, LOG_RMAX, N);
    let outdir = PathBuf::from("output");
    let mut density: Option<nd::Array1<f64>> = None;
    for l in 0..=LMAX {
        let pot = EffectivePotential::central(&grid, l, potential::coulomb(Z));
        let mut shooter = Shooter::new(&grid, &pot)?;
        let states = shooter.solve_all(-0.7 * Z * Z, -0.02 * Z * Z, 0.0045)?;
        if l == 0 {
            density = states.first().map(|gs| gs.volumetric_density());
        }
        for state in states.iter() {
            let turning = state.turning_point(&pot)?;
            log::info!(
                "E({}{}) = {:.8} Eh = {:.6} eV; exact {:.8}; turning point {:?} a0 \
                ({:?} Å)",
                state.n, state.l, state.e, units::hartree_to_ev(state.e),
                -0.5 * Z * Z / (state.n as f64).powi(2),
                turning, turning.map(units::bohr_to_angstrom),
            );
            let tag = format!("{}{}", state.n, state.l);
            write_columns(outdir.join(format!("psi_{}.dat", tag)), grid.r(), &state.wf)?;
            write_columns(
                outdir.join(format!("dens_{}.dat", tag)),
                grid.r(),
                &state.probability_density(),
            )?;
            write_columns(
                outdir.join(format!("rho_{}.dat", tag)),
                grid.r(),
                &state.volumetric_density(),
            )?;
        }
    }
    let pot = EffectivePotential::central(&grid, 0, potential::coulomb(Z));
    write_columns(outdir.join("pot.dat"), grid.r(), pot.values())?;

    // exchange-correlation potential of the 1s density, for comparison only
    if let Some(rho) = density {
        let vxc = ExchangeCorrelation::PerdewZunger.lda_potential(&rho);
        write_columns(outdir.join("vxc_10.dat"), grid.r(), &vxc)?;
    }
    Ok(())
}
