use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Ordered sequence of numeric observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    values: Vec<f64>,
}

impl Observations {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Reads one number per line.
    ///
    /// Surrounding whitespace is ignored, but every line must hold a number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InputError> {
        let mut values = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let value = line
                .trim()
                .parse::<f64>()
                .map_err(|_| InputError::MalformedLine {
                    line: i + 1,
                    content: line.clone(),
                })?;
            values.push(value);
        }
        log::debug!("loaded {} observations", values.len());
        Ok(Self { values })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(InputError::InvalidFile(path.to_owned()));
        }
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0:?} is not a regular file")]
    InvalidFile(PathBuf),

    #[error("line {line} is not a number: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reader_works() -> Result<(), anyhow::Error> {
        let input = "1\n2\r\n  2.5 \n-3e2\n";
        let observations = Observations::from_reader(input.as_bytes())?;
        assert_eq!(observations.values(), [1.0, 2.0, 2.5, -300.0]);
        assert_eq!(observations.len(), 4);
        assert!(!observations.is_empty());

        let observations = Observations::from_reader(&b""[..])?;
        assert!(observations.is_empty());
        Ok(())
    }

    #[test]
    fn from_values_matches_loaded_input() -> Result<(), anyhow::Error> {
        let loaded = Observations::from_reader("0.5\n1.7\n2.2\n".as_bytes())?;
        let built = Observations::from_values(vec![0.5, 1.7, 2.2]);
        assert_eq!(built, loaded);
        assert_eq!(built.len(), 3);
        assert!(Observations::from_values(Vec::new()).is_empty());
        Ok(())
    }

    #[test]
    fn malformed_line_fails_whole_load() {
        let err = Observations::from_reader("1\nabc\n3\n".as_bytes()).unwrap_err();
        match err {
            InputError::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            e => panic!("unexpected error: {}", e),
        }

        assert!(matches!(
            Observations::from_reader("1\n\n3\n".as_bytes()),
            Err(InputError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_invalid() {
        let path = std::env::temp_dir().join("freqstats-missing-input.txt");
        assert!(matches!(
            Observations::from_path(&path),
            Err(InputError::InvalidFile(p)) if p == path
        ));
        assert!(matches!(
            Observations::from_path(std::env::temp_dir()),
            Err(InputError::InvalidFile(_))
        ));
    }

    #[test]
    fn from_path_works() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir().join(format!("freqstats-input-{}.txt", std::process::id()));
        std::fs::write(&path, "1\n2\n2\n3\n4\n")?;
        let observations = Observations::from_path(&path);
        std::fs::remove_file(&path)?;
        assert_eq!(observations?.values(), [1.0, 2.0, 2.0, 3.0, 4.0]);
        Ok(())
    }
}
