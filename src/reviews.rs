//! Line ingestion: one review per input line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::IngestError;

/// Read every line of `path` as a review, in file order.
pub fn read_reviews(path: &Path) -> Result<Vec<String>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    reviews_from_reader(BufReader::new(file), path)
}

/// Same as [`read_reviews`] over any buffered reader. `origin` only labels errors.
///
/// Bytes that are not valid UTF-8 are replaced, not rejected; only I/O failures error.
pub fn reviews_from_reader<R: BufRead>(mut reader: R, origin: &Path) -> Result<Vec<String>, IngestError> {
    let mut reviews = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|source| IngestError::Read {
            path: origin.to_path_buf(),
            line: reviews.len() + 1,
            source,
        })?;
        if n == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        reviews.push(String::from_utf8_lossy(line).into_owned());
    }
    debug!("loaded {} reviews from {}", reviews.len(), origin.display());
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, ErrorKind, Read};

    #[test]
    fn one_review_per_line() {
        let input = "Great pool.\r\n\nStaff were nice!\n";
        let reviews = reviews_from_reader(Cursor::new(input), Path::new("mem")).unwrap();
        assert_eq!(reviews, vec!["Great pool.", "", "Staff were nice!"]);
    }

    #[test]
    fn empty_input() {
        let reviews = reviews_from_reader(Cursor::new(""), Path::new("mem")).unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn fixture_file() {
        let reviews = read_reviews(Path::new("tests/fixtures/gym_reviews.txt")).unwrap();
        assert_eq!(reviews.len(), 6);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_reviews(&path).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn latin1_line_is_ingested_and_scores() {
        let input: &[u8] = b"Great caf\xe9 and clean pool.\nStaff were nice.\n";
        let reviews = reviews_from_reader(Cursor::new(input), Path::new("mem")).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0], "Great caf\u{FFFD} and clean pool.");
        assert_eq!(crate::highlight::buzzwords::buzzword_count(&reviews[0]), 3);
    }

    #[test]
    fn last_line_without_newline() {
        let reviews = reviews_from_reader(Cursor::new("one\r\ntwo"), Path::new("mem")).unwrap();
        assert_eq!(reviews, vec!["one", "two"]);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn io_failure_reports_line() {
        let err = reviews_from_reader(BufReader::new(Broken), Path::new("mem")).unwrap_err();
        assert!(matches!(err, IngestError::Read { line: 1, .. }));
        assert!(err.to_string().contains("disk gone"));
    }
}
