//! Tabular export and import: whitespace-separated columns, one row per
//! line, full `f64` precision — the file format `SamplingHistogram` and
//! the optimiser's profilers write diagnostics in.

use crate::error::ConfigError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// `f64`'s `digits10 + 1` in the original: enough decimal digits to
/// round-trip an `f64` exactly.
const PRECISION: usize = 17;

/// Writes `rows` as whitespace-separated columns, one row per line.
pub fn save(rows: &[(f64, f64)], path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(ConfigError::Io)?;
    for &(a, b) in rows {
        writeln!(file, "{:.*} {:.*}", PRECISION, a, PRECISION, b).map_err(ConfigError::Io)?;
    }
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Reads whitespace-separated columns of `f64`, one row per line, blank
/// lines silently skipped.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(ConfigError::Io)?;
    let reader = BufReader::new(file);

    let mut data = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(ConfigError::Io)?;
        let row: Vec<f64> = line
            .split_whitespace()
            .filter_map(|tok| tok.parse::<f64>().ok())
            .collect();
        if !row.is_empty() {
            data.push(row);
        }
    }
    Ok(data)
}

/// The `histogram_<name>` file name a [`crate::histogram::SamplingHistogram`]
/// export uses.
pub fn histogram_file_name(name: &str) -> String {
    format!("histogram_{name}")
}

/// The `entropy_<name>` file name [`crate::histogram::SamplingHistogram::export_entropy_rows`]
/// is written under.
pub fn entropy_file_name(name: &str) -> String {
    format!("entropy_{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir().join(format!("chaos-sampling-io-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rows.dat");

        let rows = vec![(0.0, 1.5), (1.0, -2.25), (2.0, 3.0)];
        save(&rows, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), rows.len());
        for (row, &(a, b)) in loaded.iter().zip(rows.iter()) {
            assert_eq!(row.len(), 2);
            assert!((row[0] - a).abs() < 1e-12);
            assert!((row[1] - b).abs() < 1e-12);
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_skips_blank_lines() {
        let dir = std::env::temp_dir().join(format!("chaos-sampling-io-test2-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rows.dat");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "1.0 2.0").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "3.0 4.0").unwrap();
        drop(file);

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_name_helpers_prefix_correctly() {
        assert_eq!(histogram_file_name("tent"), "histogram_tent");
        assert_eq!(entropy_file_name("tent"), "entropy_tent");
    }
}
