use crate::report::aggregation::MetricsSnapshot;
use std::io::{self, Write};

pub fn render_report(snapshot: &MetricsSnapshot) -> Vec<String> {
    let mut out = Vec::with_capacity(
        4 + snapshot.method_metrics.len()
            + snapshot.ip_metrics.len()
            + snapshot.request_metrics.len(),
    );

    out.push(format!(
        "Total number of completed requests: {}",
        snapshot.request_count
    ));

    out.push("Number of requests by HTTP methods:".to_string());
    for (method, count) in &snapshot.method_metrics {
        out.push(format!("\t{method} - {count}"));
    }

    out.push("Top 3 IP addresses from which requests were made:".to_string());
    for (ip, count) in &snapshot.ip_metrics {
        out.push(format!("\t{ip} - {count}"));
    }

    out.push("Top 3 longest requests:".to_string());
    for r in &snapshot.request_metrics {
        out.push(format!(
            "\t{} {} {} {}ms {}",
            r.method, r.url, r.ip, r.duration, r.time
        ));
    }

    out
}

pub fn write_report<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
