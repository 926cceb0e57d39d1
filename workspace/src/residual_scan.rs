use std::path::PathBuf;
use ndarray as nd;
use radial::{
    grid::RadialGrid,
    io::write_columns,
    potential::{ self, EffectivePotential },
    solve::Shooter,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    let grid = RadialGrid::linear(10.0, 4000);
    let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
    let mut shooter = Shooter::new(&grid, &pot)?;
    let e: nd::Array1<f64> = nd::Array1::linspace(-1.0, -0.01, 2000);
    let f: nd::Array1<f64> = shooter.residuals(&e);
    let crossings
        = f.iter().zip(f.iter().skip(1))
        .filter(|(fk, fkp1)| **fk * **fkp1 < 0.0)
        .count();
    log::info!("residual changes sign {} time(s) over [{}, {}]", crossings, e[0], e[e.len() - 1]);

    let outdir = PathBuf::from("output");
    write_columns(outdir.join("residual.dat"), &e, &f)?;
    // trial solution away from any eigenvalue
    let trial = shooter.propagate(-0.45).to_owned();
    write_columns(outdir.join("trial.dat"), grid.r(), &trial)?;
    Ok(())
}
