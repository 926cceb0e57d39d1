use std::path::PathBuf;
use radial::{
    grid::RadialGrid,
    io::write_columns,
    potential::{ self, EffectivePotential },
    solve::Shooter,
    units,
};

const Z: f64 = 1.0;
const L: usize = 0;
const RMAX: f64 = 10.0; // a₀
const N: usize = 4000;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    let grid = RadialGrid::linear(RMAX, N);
    let pot = EffectivePotential::central(&grid, L, potential::coulomb(Z));
    let mut shooter = Shooter::new(&grid, &pot)?;

    let intervals = shooter.scan_intervals(-10.0, 0.0, 1.0)?;
    log::info!("found {} bracket(s): {:?}", intervals.len(), intervals);
    let interval = intervals.into_iter()
        .find(|interval| interval.contains(-0.5))
        .ok_or_else(|| anyhow::anyhow!("no bracket around the ground state"))?;
    let state = shooter.solve_eigenstate(interval)?
        .ok_or_else(|| anyhow::anyhow!("no sign change in {:?}", interval))?;
    log::info!(
        "E({}{}) = {:.8} Eh = {:.6} eV; {} node(s); <r> = {:.6} a0",
        state.n, state.l, state.e, units::hartree_to_ev(state.e),
        state.node_count(), state.expectation(|r| r),
    );

    let outdir = PathBuf::from("output");
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
    write_columns(outdir.join("pot.dat"), grid.r(), pot.values())?;
    Ok(())
}
