use crate::report::constants::TOP_N;
use crate::report::duration::DurationMs;
use crate::report::ordered_map;
use crate::report::parse::parse_line;
use crate::report::types::{HttpMethod, ParsedRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

struct AddressCount {
    count: u64,
    first_seen: u64,
}

struct RankedRequest {
    duration_ms: DurationMs,
    request: ParsedRequest,
}

/// Counters describing what the aggregator saw, independent of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub lines: u64,
    pub matched: u64,
    pub skipped: u64,
    pub invalid_durations: u64,
}

/// Streaming accumulator for one report run.
///
/// Address counts are kept for every distinct address (they can change until
/// the last line), but only the current top [`TOP_N`] requests by duration
/// are retained.
pub struct MetricsAggregator {
    methods: [u64; HttpMethod::COUNT],
    addresses: HashMap<String, AddressCount>,
    longest: Vec<RankedRequest>,
    stats: AggregationStats,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self {
            methods: [0; HttpMethod::COUNT],
            addresses: HashMap::new(),
            longest: Vec::with_capacity(TOP_N + 1),
            stats: AggregationStats::default(),
        }
    }

    /// Feeds every line of `lines` through [`MetricsAggregator::push_line`].
    pub fn consume<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.stats.lines += 1;

        let Some(request) = parse_line(line) else {
            self.stats.skipped += 1;
            warn!(line = %line.trim_end(), "no match found for log line");
            return;
        };

        self.stats.matched += 1;
        self.push_request(request);
    }

    pub fn push_request(&mut self, request: ParsedRequest) {
        let first_seen = self.addresses.len() as u64;
        match self.addresses.get_mut(&request.ip) {
            Some(entry) => entry.count += 1,
            None => {
                self.addresses.insert(
                    request.ip.clone(),
                    AddressCount {
                        count: 1,
                        first_seen,
                    },
                );
            }
        }

        self.methods[request.method.index()] += 1;

        self.rank_by_duration(request);
    }

    fn rank_by_duration(&mut self, request: ParsedRequest) {
        let Ok(duration_ms) = request.duration.parse::<DurationMs>() else {
            self.stats.invalid_durations += 1;
            warn!(
                duration = %request.duration,
                ip = %request.ip,
                url = %request.url,
                "request duration is not an integer, excluded from longest requests"
            );
            return;
        };

        // Strictly greater only: among equal durations the earliest request wins.
        let pos = self
            .longest
            .iter()
            .position(|r| r.duration_ms < duration_ms)
            .unwrap_or(self.longest.len());

        if pos >= TOP_N {
            return;
        }

        self.longest.insert(pos, RankedRequest { duration_ms, request });
        self.longest.truncate(TOP_N);
    }

    pub fn stats(&self) -> AggregationStats {
        self.stats
    }

    pub fn finish(self) -> MetricsSnapshot {
        let mut method_metrics: Vec<(HttpMethod, u64)> = HttpMethod::ALL
            .iter()
            .map(|m| (*m, self.methods[m.index()]))
            .collect();
        // sort_by is stable: ties keep enumeration order.
        method_metrics.sort_by(|a, b| b.1.cmp(&a.1));

        let request_count = method_metrics.iter().map(|(_, c)| *c).sum();

        // Ties go to the address seen first.
        let mut addresses: Vec<(String, AddressCount)> =
            self.addresses.into_iter().collect();
        addresses.sort_unstable_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });
        let ip_metrics = addresses
            .into_iter()
            .take(TOP_N)
            .map(|(ip, a)| (ip, a.count))
            .collect();

        let request_metrics = self.longest.into_iter().map(|r| r.request).collect();

        MetricsSnapshot {
            request_count,
            method_metrics,
            ip_metrics,
            request_metrics,
        }
    }
}

/// Final result of one run; rendered to the console and written as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub request_count: u64,
    #[serde(with = "ordered_map")]
    pub method_metrics: Vec<(HttpMethod, u64)>,
    #[serde(with = "ordered_map")]
    pub ip_metrics: Vec<(String, u64)>,
    pub request_metrics: Vec<ParsedRequest>,
}
