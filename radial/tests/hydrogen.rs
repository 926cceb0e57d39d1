use approx::assert_abs_diff_eq;
use ndarray as nd;
use radial::{
    grid::RadialGrid,
    io,
    potential::{ self, EffectivePotential },
    root::{ RootMethod, SolverConfig },
    solve::Shooter,
    utils,
};

fn exact(n: usize) -> f64 { -0.5 / (n * n) as f64 }

#[test]
fn linear_grid_ground_state() {
    let grid = RadialGrid::linear(10.0, 4000);
    let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
    let mut shooter = Shooter::new(&grid, &pot).unwrap();
    let intervals = shooter.scan_intervals(-10.0, 0.0, 1.0).unwrap();
    assert_eq!(intervals.len(), 1);
    assert_eq!((intervals[0].lower, intervals[0].upper), (-1.0, 0.0));

    let state = shooter.solve_eigenstate(intervals[0]).unwrap().unwrap();
    assert_eq!((state.n, state.l), (1, 0));
    assert!(state.converged);
    assert_abs_diff_eq!(state.e, exact(1), epsilon = 1e-4);
    assert_eq!(state.node_count(), 0);
    // u(r) = 2 r exp(-r)
    let i = 400;
    let r = grid.r()[i];
    assert_abs_diff_eq!(state.wf[i].abs(), 2.0 * r * (-r).exp(), epsilon = 1e-3);
    assert_abs_diff_eq!(state.expectation(|r| r), 1.5, epsilon = 1e-3);
}

#[test]
fn secant_and_brent_agree() {
    let grid = RadialGrid::linear(10.0, 4000);
    let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
    let mut brent = Shooter::new(&grid, &pot).unwrap();
    let mut secant = Shooter::new(&grid, &pot).unwrap()
        .with_config(SolverConfig { method: RootMethod::Secant, ..Default::default() });
    let interval = brent.scan_intervals(-1.0, -0.02, 0.03).unwrap()[0];
    let eb = brent.solve_eigenstate(interval).unwrap().unwrap();
    let es = secant.solve_eigenstate(interval).unwrap().unwrap();
    assert_abs_diff_eq!(eb.e, es.e, epsilon = 1e-5);
    assert_abs_diff_eq!(es.e, exact(1), epsilon = 1e-4);
}

#[test]
fn log_grid_s_spectrum() {
    let grid = RadialGrid::log(-6.0, 2.0, 2000);
    let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
    let mut shooter = Shooter::new(&grid, &pot).unwrap();
    let states = shooter.solve_all(-0.7, -0.04, 0.013).unwrap();
    assert_eq!(states.len(), 3);
    for (k, state) in states.iter().enumerate() {
        assert_eq!(state.n, k + 1);
        assert_abs_diff_eq!(state.e, exact(k + 1), epsilon = 1e-5);
        assert_eq!(state.node_count(), k);
        assert_abs_diff_eq!(state.norm(), 1.0, epsilon = 1e-9);
    }

    // distinct eigenstates are orthogonal: ∫ u_a u_b r dx
    let dx = grid.dx();
    for a in 0..states.len() {
        for b in a + 1..states.len() {
            let integrand: nd::Array1<f64> = &states[a].wf * &states[b].wf * grid.r();
            assert_abs_diff_eq!(utils::simpson(&integrand, dx), 0.0, epsilon = 1e-5);
        }
    }

    // 2s node at r = 2
    let nodes = states[1].node_positions().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_abs_diff_eq!(nodes[0], 2.0, epsilon = 1e-3);
}

#[test]
fn log_grid_p_states() {
    let grid = RadialGrid::log(-6.0, 2.0, 2000);
    let pot = EffectivePotential::central(&grid, 1, potential::coulomb(1.0));
    let mut shooter = Shooter::new(&grid, &pot).unwrap();
    let states = shooter.solve_all(-0.2, -0.04, 0.013).unwrap();
    assert_eq!(states.len(), 2);
    for (k, state) in states.iter().enumerate() {
        assert_eq!((state.n, state.l), (k + 2, 1));
        assert_abs_diff_eq!(state.e, exact(k + 2), epsilon = 1e-5);
        assert_eq!(state.node_count(), k);
    }
}

#[test]
fn eigenstate_files_round_trip() {
    let grid = RadialGrid::linear(10.0, 4000);
    let pot = EffectivePotential::central(&grid, 0, potential::coulomb(1.0));
    let mut shooter = Shooter::new(&grid, &pot).unwrap();
    let interval = shooter.scan_intervals(-10.0, 0.0, 1.0).unwrap()[0];
    let state = shooter.solve_eigenstate(interval).unwrap().unwrap();

    let path = std::env::temp_dir()
        .join(format!("radial-hydrogen-{}", std::process::id()))
        .join("psi_10.dat");
    io::write_columns(&path, grid.r(), &state.wf).unwrap();
    let (r, u) = io::read_columns(&path).unwrap();
    assert_eq!(r.len(), grid.len());
    assert_abs_diff_eq!(r[grid.len() - 1], 10.0, epsilon = 1e-7);
    let norm = utils::simpson(&u.mapv(|uk| uk * uk), grid.dx());
    assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-6);
    std::fs::remove_file(&path).ok();
}
