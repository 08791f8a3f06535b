//! End-of-run crawl report
//!
//! Accumulated by the coordinator as items are processed and printed once
//! the frontier drains. The failure count drives the process exit code.

use std::time::Duration;

/// Counters for one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Pages whose markup and screenshot were written
    pub pages_captured: u64,

    /// Pages that failed render or capture and were skipped
    pub pages_failed: u64,

    /// Frontier items dropped because their URL was already visited
    pub duplicates_skipped: u64,

    /// Same-origin links enqueued by discovery
    pub links_discovered: u64,

    /// Captured pages whose MHTML snapshot was missing
    pub snapshots_missing: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlReport {
    /// True when every processed item succeeded
    pub fn is_clean(&self) -> bool {
        self.pages_failed == 0
    }
}

/// Prints the run summary to stdout
pub fn print_report(report: &CrawlReport) {
    println!("=== Crawl Summary ===");
    println!("Pages captured:     {}", report.pages_captured);
    println!("Pages failed:       {}", report.pages_failed);
    println!("Links discovered:   {}", report.links_discovered);
    println!("Duplicates skipped: {}", report.duplicates_skipped);
    if report.snapshots_missing > 0 {
        println!("MHTML snapshots missing: {}", report.snapshots_missing);
    }
    println!("Elapsed:            {:.1}s", report.elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_is_clean() {
        assert!(CrawlReport::default().is_clean());
    }

    #[test]
    fn test_failed_report_is_not_clean() {
        let report = CrawlReport {
            pages_failed: 1,
            ..CrawlReport::default()
        };
        assert!(!report.is_clean());
    }
}
