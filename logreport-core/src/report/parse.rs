use crate::report::types::ParsedRequest;
use once_cell::sync::Lazy;
use regex::Regex;

// Combined log format with a trailing request duration:
// ip ident user [time] "METHOD url protocol" status size "referrer" "agent" duration
const LINE_PATTERN: &str = concat!(
    r"^(?P<ip>\S+)\s+",
    r"\S+\s+",
    r"\S+\s+",
    r"\[(?P<time>.+)\]\s+",
    r#""(?P<method>OPTIONS|GET|HEAD|POST|PUT|PATCH|DELETE|TRACE|CONNECT)\s+"#,
    r"(?P<url>\S+)\s+",
    r#"\S+"\s+"#,
    r"\d{3}\s+",
    r"\S+\s+",
    r#"".*"\s+"#,
    r#"".*"\s+"#,
    r"(?P<duration>\S+)",
);

static LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINE_PATTERN).expect("access log pattern must compile"));

/// Decomposes one raw access-log line.
///
/// Returns `None` when the line does not have the expected shape, including
/// request lines whose method is not one of the nine known tokens. Only the
/// start of the line is anchored; anything after the duration is ignored.
pub fn parse_line(line: &str) -> Option<ParsedRequest> {
    let caps = LINE_REGEX.captures(line)?;

    Some(ParsedRequest {
        ip: caps["ip"].to_string(),
        time: caps["time"].to_string(),
        method: caps["method"].parse().ok()?,
        url: caps["url"].to_string(),
        duration: caps["duration"].to_string(),
    })
}
