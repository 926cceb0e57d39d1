//! Reading and writing two-column `(r, f(r))` data files.
//!
//! Files are plain text with no header: one tab-separated row per grid point,
//! in the order the arrays are given, with values written as `{:.8e}`.

use std::{
    fs,
    io::{ BufRead, BufReader, BufWriter, Write },
    path::Path,
};
use ndarray as nd;
use crate::{ Arr1, error::{ IoError, LengthError } };

pub type IoResult<T> = Result<T, IoError>;

/// Write `x` and `y` as two tab-separated columns to `path`, creating any
/// missing parent directories.
pub fn write_columns<P, S, T>(path: P, x: &Arr1<S>, y: &Arr1<T>)
    -> IoResult<()>
where
    P: AsRef<Path>,
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let path = path.as_ref();
    LengthError::check(x, y)?;
    let file_err = |err: std::io::Error| IoError::File(path.to_path_buf(), err);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(file_err)?;
        }
    }
    let mut out = BufWriter::new(fs::File::create(path).map_err(file_err)?);
    for (xk, yk) in x.iter().zip(y) {
        writeln!(out, "{:.8e}\t{:.8e}", xk, yk).map_err(file_err)?;
    }
    out.flush().map_err(file_err)?;
    log::debug!("io::write_columns: wrote {} rows to {}", x.len(), path.display());
    Ok(())
}

/// Read a file written by [`write_columns`] back into its two columns.
///
/// Blank lines are skipped; any other line must hold exactly two
/// whitespace-separated numbers.
pub fn read_columns<P>(path: P) -> IoResult<(nd::Array1<f64>, nd::Array1<f64>)>
where P: AsRef<Path>
{
    let path = path.as_ref();
    let file_err = |err: std::io::Error| IoError::File(path.to_path_buf(), err);
    let reader = BufReader::new(fs::File::open(path).map_err(file_err)?);
    let mut x: Vec<f64> = Vec::new();
    let mut y: Vec<f64> = Vec::new();
    for (k, line) in reader.lines().enumerate() {
        let line = line.map_err(file_err)?;
        if line.trim().is_empty() { continue; }
        let parse_err = || IoError::Parse(path.to_path_buf(), k + 1, line.clone());
        let values: Vec<f64>
            = line.split_whitespace()
            .map(|s| s.parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| parse_err())?;
        match values[..] {
            [xk, yk] => { x.push(xk); y.push(yk); },
            _ => { return Err(parse_err()); },
        }
    }
    Ok((x.into(), y.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("radial-io-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn columns_round_trip() {
        let path = scratch("round_trip.dat");
        let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 5);
        let f = r.mapv(|rk| rk * (-rk).exp());
        write_columns(&path, &r, &f).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "0.00000000e0\t0.00000000e0");
        assert_eq!(text.lines().count(), 5);

        let (r2, f2) = read_columns(&path).unwrap();
        assert_eq!(r2.len(), 5);
        r.iter().zip(&r2).chain(f.iter().zip(&f2))
            .for_each(|(a, b)| assert!((a - b).abs() <= 1e-8 * a.abs().max(1e-300)));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let path = scratch("mismatched.dat");
        let r: nd::Array1<f64> = nd::Array1::zeros(3);
        let f: nd::Array1<f64> = nd::Array1::zeros(4);
        assert!(matches!(write_columns(&path, &r, &f), Err(IoError::Length(_))));
        assert!(!path.exists());
    }

    #[test]
    fn malformed_lines_are_reported() {
        let path = scratch("malformed.dat");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "1.0\t2.0\n\n3.0\n").unwrap();
        match read_columns(&path) {
            Err(IoError::Parse(_, line, _)) => assert_eq!(line, 3),
            other => panic!("expected a parse error, got {:?}", other),
        }
        fs::remove_file(&path).ok();
        assert!(matches!(read_columns(&path), Err(IoError::File(..))));
    }
}
