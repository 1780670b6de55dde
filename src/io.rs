// Hex-line files shared between the attack phases and the external solver:
// one 64-bit value per LF-terminated line, written as 16 lower-case hex
// digits and parsed leniently.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("line {line}: invalid hex value {value:?}")]
    BadHex { line: usize, value: String },
    #[error("expected at least {expected} lines, found {found}")]
    TooShort { expected: usize, found: usize },
}

/// Contents of a parameters file: the recovered rows and the chosen cube
/// masks, one per remaining line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub a: u64,
    pub e: u64,
    pub cubes: Vec<u64>,
}

/// Reads every non-empty line as a hex u64.
pub fn read_hex_lines(path: &Path) -> Result<Vec<u64>, ParameterError> {
    let text = fs::read_to_string(path).map_err(|source| ParameterError::Read {
        path: path.display().to_string(),
        source,
    })?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            u64::from_str_radix(line.trim(), 16).map_err(|_| ParameterError::BadHex {
                line: index + 1,
                value: line.to_string(),
            })
        })
        .collect()
}

/// Writes one value per line.
pub fn write_hex_lines(path: &Path, values: &[u64]) -> std::io::Result<()> {
    let mut out = String::with_capacity(values.len() * 17);
    for value in values {
        out.push_str(&format!("{value:016x}\n"));
    }
    fs::write(path, out)
}

pub fn read_parameters(path: &Path) -> Result<Parameters, ParameterError> {
    let lines = read_hex_lines(path)?;
    if lines.len() < 3 {
        return Err(ParameterError::TooShort {
            expected: 3,
            found: lines.len(),
        });
    }
    Ok(Parameters {
        a: lines[0],
        e: lines[1],
        cubes: lines[2..].to_vec(),
    })
}

pub fn write_parameters(path: &Path, parameters: &Parameters) -> std::io::Result<()> {
    let mut values = vec![parameters.a, parameters.e];
    values.extend_from_slice(&parameters.cubes);
    write_hex_lines(path, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cube-attack-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_parameters_round_trip() {
        let path = scratch_file("params");
        let parameters = Parameters {
            a: 0xdeadbeef00112233,
            e: 0x0000000000000001,
            cubes: vec![0xffff0000ffff0000, 0x1],
        };
        write_parameters(&path, &parameters).unwrap();
        assert_eq!(read_parameters(&path).unwrap(), parameters);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unpadded_hex_is_accepted() {
        let path = scratch_file("lenient");
        fs::write(&path, "ab\n0\nFFFFFFFFFFFFFFFF\n").unwrap();
        assert_eq!(read_hex_lines(&path).unwrap(), vec![0xab, 0, u64::MAX]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_bad_hex_reports_line() {
        let path = scratch_file("bad");
        fs::write(&path, "12\nnot-hex\n").unwrap();
        match read_hex_lines(&path) {
            Err(ParameterError::BadHex { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected BadHex, got {other:?}"),
        }
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_short_parameter_file_is_rejected() {
        let path = scratch_file("short");
        fs::write(&path, "12\n34\n").unwrap();
        assert!(matches!(
            read_parameters(&path),
            Err(ParameterError::TooShort { found: 2, .. })
        ));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            read_parameters(Path::new("/nonexistent/parameters.txt")),
            Err(ParameterError::Read { .. })
        ));
    }
}
