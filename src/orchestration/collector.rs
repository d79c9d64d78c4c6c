// Tue Jan 13 2026 - Alex

use crate::engine::result::TaskOutcome;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Accumulates domain-bearing lines from successful outcomes. The only
/// writer of the result set; safe to share between worker threads.
pub struct ResultCollector {
    domain: String,
    lines: Mutex<HashSet<String>>,
}

impl ResultCollector {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            lines: Mutex::new(HashSet::new()),
        }
    }

    /// Folds one outcome in and returns how many new lines it added.
    /// Anything but an `ok` outcome adds nothing.
    pub fn collect(&self, outcome: &TaskOutcome) -> usize {
        match outcome.output() {
            Some(output) => self.collect_output(output),
            None => 0,
        }
    }

    pub fn collect_output(&self, output: &str) -> usize {
        let candidates: Vec<&str> = matching_lines(output, &self.domain).collect();
        if candidates.is_empty() {
            return 0;
        }

        let mut lines = self.lines.lock();
        candidates
            .into_iter()
            .filter(|line| lines.insert((*line).to_string()))
            .count()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.lock().contains(line)
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn finalize(self) -> SortedResults {
        SortedResults::from_set(self.lines.into_inner())
    }
}

/// Trimmed, non-empty lines containing `domain` as a literal, case-sensitive
/// substring.
pub fn matching_lines<'a>(output: &'a str, domain: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    output
        .lines()
        .map(str::trim)
        .filter(move |line| !line.is_empty() && line.contains(domain))
}

/// The frozen result set in ascending byte-wise order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedResults {
    lines: Vec<String>,
}

impl SortedResults {
    pub fn from_set(set: HashSet<String>) -> Self {
        let mut lines: Vec<String> = set.into_iter().collect();
        lines.sort_unstable();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_filters_trims_and_skips_blank_lines() {
        let collector = ResultCollector::new("example.com");
        let added = collector.collect_output("  www.example.com  \n\n\tapi.example.com\r\nunrelated.org\n   \n");

        assert_eq!(added, 2);
        assert!(collector.contains("www.example.com"));
        assert!(collector.contains("api.example.com"));
        assert!(!collector.contains("unrelated.org"));
    }

    #[test]
    fn test_duplicates_across_tools_collapse() {
        let collector = ResultCollector::new("example.com");
        let first = TaskOutcome::ok("assetfinder", "www.example.com\n".to_string(), Duration::ZERO);
        let second = TaskOutcome::ok("subfinder", "  www.example.com\nmail.example.com\n".to_string(), Duration::ZERO);

        assert_eq!(collector.collect(&first), 1);
        assert_eq!(collector.collect(&second), 1);
        assert_eq!(collector.finalize().lines(), ["mail.example.com", "www.example.com"]);
    }

    #[test]
    fn test_non_ok_outcomes_contribute_nothing() {
        let collector = ResultCollector::new("example.com");

        assert_eq!(collector.collect(&TaskOutcome::not_found("a")), 0);
        assert_eq!(collector.collect(&TaskOutcome::timed_out("b", Duration::from_secs(180))), 0);
        assert_eq!(collector.collect(&TaskOutcome::failed("c", "www.example.com".to_string(), Duration::ZERO)), 0);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive_without_normalization() {
        let collector = ResultCollector::new("example.com");
        collector.collect_output("WWW.EXAMPLE.COM\nwww.example.com.\nwww.example.com\nnotexample.com.evil\n");

        let results = collector.finalize();
        assert_eq!(results.lines(), ["notexample.com.evil", "www.example.com", "www.example.com."]);
    }

    #[test]
    fn test_sorted_bytewise() {
        let collector = ResultCollector::new("example.com");
        collector.collect_output("b.example.com\nZ.example.com\na.example.com\n_dmarc.example.com\n");

        assert_eq!(
            collector.finalize().lines(),
            ["Z.example.com", "_dmarc.example.com", "a.example.com", "b.example.com"]
        );
    }

    #[test]
    fn test_concurrent_producers_lose_nothing() {
        let collector = Arc::new(ResultCollector::new("example.com"));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let collector = Arc::clone(&collector);
                thread::spawn(move || {
                    let output: String = (0..200)
                        .map(|i| format!("host{}-{}.example.com\nshared{}.example.com\n", t, i, i))
                        .collect();
                    collector.collect_output(&output);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(collector.len(), 8 * 200 + 200);
    }
}
