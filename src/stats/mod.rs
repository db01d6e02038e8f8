use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct FetchStats {
    pub start_time: DateTime<Utc>,
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub transport_errors: usize,
    pub bytes_downloaded: usize,
    pub status_codes: HashMap<u16, usize>,
    pub average_response_time: f64, // in milliseconds
}

/// Shared counters for every request a fetcher issues. Clones share state.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<FetchStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(FetchStats {
                start_time: Utc::now(),
                total_requests: 0,
                successful_requests: 0,
                failed_requests: 0,
                transport_errors: 0,
                bytes_downloaded: 0,
                status_codes: HashMap::new(),
                average_response_time: 0.0,
            })),
        }
    }

    pub fn record_request(&self, status: u16, size: usize, duration: Duration) {
        let mut stats = self.stats.write();
        stats.total_requests += 1;

        if (200..300).contains(&status) {
            stats.successful_requests += 1;
        } else {
            stats.failed_requests += 1;
        }

        *stats.status_codes.entry(status).or_insert(0) += 1;
        stats.bytes_downloaded += size;

        // Transport errors carry no duration and stay out of the average.
        let timed = stats.successful_requests + stats.failed_requests;
        let current_total = stats.average_response_time * (timed - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_response_time = (current_total + new_duration) / timed as f64;
    }

    pub fn record_transport_error(&self) {
        let mut stats = self.stats.write();
        stats.total_requests += 1;
        stats.transport_errors += 1;
    }

    pub fn get_stats(&self) -> FetchStats {
        self.stats.read().clone()
    }

    pub fn summary(&self) -> String {
        let stats = self.stats.read();
        let mut codes: Vec<_> = stats.status_codes.iter().collect();
        codes.sort();

        let codes = codes
            .iter()
            .map(|(code, count)| format!("{}={}", code, count))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "requests={} ok={} failed={} transport_errors={} bytes={} avg_ms={:.2} status=[{}]",
            stats.total_requests,
            stats.successful_requests,
            stats.failed_requests,
            stats.transport_errors,
            stats.bytes_downloaded,
            stats.average_response_time,
            codes
        )
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_counts_and_average() {
        let tracker = StatsTracker::new();
        tracker.record_request(200, 100, Duration::milliseconds(10));
        tracker.record_request(404, 20, Duration::milliseconds(30));
        tracker.record_transport_error();

        let stats = tracker.get_stats();
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert_eq!(stats.transport_errors, 1);
        assert_eq!(stats.bytes_downloaded, 120);
        assert_eq!(stats.status_codes.get(&404), Some(&1));
        assert!((stats.average_response_time - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transport_errors_do_not_dilute_average() {
        let tracker = StatsTracker::new();
        tracker.record_transport_error();
        tracker.record_request(200, 1, Duration::milliseconds(10));
        tracker.record_transport_error();
        tracker.record_request(500, 1, Duration::milliseconds(30));

        let stats = tracker.get_stats();
        assert_eq!(stats.total_requests, 4);
        assert_eq!(stats.transport_errors, 2);
        assert!((stats.average_response_time - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clones_share_counters() {
        let tracker = StatsTracker::new();
        let clone = tracker.clone();
        clone.record_request(200, 5, Duration::milliseconds(1));

        assert_eq!(tracker.get_stats().total_requests, 1);
        assert!(tracker.summary().contains("status=[200=1]"));
    }
}
