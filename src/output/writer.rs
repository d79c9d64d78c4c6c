// Tue Jan 13 2026 - Alex

use crate::orchestration::collector::SortedResults;
use crate::output::error::{OutputError, OutputResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the final result set, one line per entry, overwriting the target.
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the number of lines written.
    pub fn write(&self, results: &SortedResults) -> OutputResult<usize> {
        ensure_parent_dir(&self.path)?;

        let write_err = |source| OutputError::Write {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(write_err)?;
        let mut out = BufWriter::new(file);

        for line in results.lines() {
            writeln!(out, "{}", line).map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;

        Ok(results.len())
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> OutputResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn results(lines: &[&str]) -> SortedResults {
        SortedResults::from_set(lines.iter().map(|s| s.to_string()).collect::<HashSet<_>>())
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("kali").join("subs.txt");

        let count = ResultWriter::new(&path)
            .write(&results(&["b.kali.org", "a.kali.org"]))
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a.kali.org\nb.kali.org\n");
    }

    #[test]
    fn test_existing_directory_and_file_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.txt");
        fs::write(&path, "stale.example.com\nolder.example.com\n").unwrap();

        ResultWriter::new(&path).write(&results(&["www.example.com"])).unwrap();
        ResultWriter::new(&path).write(&results(&["www.example.com"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "www.example.com\n");
    }

    #[test]
    fn test_empty_results_write_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        assert_eq!(ResultWriter::new(&path).write(&SortedResults::default()).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_output_lines_strictly_ascending_without_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.txt");
        ResultWriter::new(&path)
            .write(&results(&["m.example.com", "a.example.com", "z.example.com", "A.example.com"]))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines.iter().all(|l| !l.is_empty()));
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parent_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = ResultWriter::new(blocker.join("subs.txt"))
            .write(&results(&["www.example.com"]))
            .unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }
}
