use crate::report::tests::test_helpers::log_line;
use crate::report::{HttpMethod, ParsedRequest, parse_line};
use pretty_assertions::assert_eq;

#[test]
fn parses_minimal_combined_line() {
    let line = r#"10.0.0.1 - - [01/Jan/2024:00:00:00] "GET /a HTTP/1.1" 200 123 "-" "-" 50"#;

    let parsed = parse_line(line).unwrap();

    assert_eq!(
        parsed,
        ParsedRequest {
            ip: "10.0.0.1".into(),
            time: "01/Jan/2024:00:00:00".into(),
            method: HttpMethod::Get,
            url: "/a".into(),
            duration: "50".into(),
        }
    );
}

#[test]
fn parsing_is_idempotent() {
    let line = log_line("192.168.1.7", "POST", "/api/login", "812");

    assert_eq!(parse_line(&line), parse_line(&line));
}

#[test]
fn keeps_timezone_in_time_field() {
    let line = log_line("192.168.1.7", "PUT", "/items/3", "4");

    let parsed = parse_line(&line).unwrap();

    assert_eq!(parsed.time, "10/Oct/2023:13:55:36 +0000");
    assert_eq!(parsed.method, HttpMethod::Put);
    assert_eq!(parsed.url, "/items/3");
}

#[test]
fn accepts_every_known_method() {
    for method in HttpMethod::ALL {
        let line = log_line("1.1.1.1", method.as_str(), "/", "1");

        let parsed = parse_line(&line).unwrap();

        assert_eq!(parsed.method, method);
    }
}

#[test]
fn rejects_unknown_method() {
    let line = log_line("1.1.1.1", "FOO", "/", "1");

    assert_eq!(parse_line(&line), None);
}

#[test]
fn method_is_case_sensitive() {
    let line = log_line("1.1.1.1", "get", "/", "1");

    assert_eq!(parse_line(&line), None);
}

#[test]
fn rejects_non_numeric_status() {
    let line = r#"1.1.1.1 - - [01/Jan/2024:00:00:00] "GET / HTTP/1.1" abc 1 "-" "-" 5"#;

    assert_eq!(parse_line(line), None);
}

#[test]
fn rejects_line_without_duration() {
    let line = r#"1.1.1.1 - - [01/Jan/2024:00:00:00] "GET / HTTP/1.1" 200 1 "-" "-""#;

    assert_eq!(parse_line(line), None);
}

#[test]
fn rejects_empty_and_garbage_lines() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("not an access log line"), None);
}

#[test]
fn user_agent_with_quotes_and_spaces_is_skipped_over() {
    let line = r#"8.8.8.8 - frank [01/Jan/2024:00:00:00 +0100] "DELETE /x?y=1 HTTP/2.0" 204 - "https://ref.example/a b" "curl/8.0 \"quoted\" agent" 1234"#;

    let parsed = parse_line(line).unwrap();

    assert_eq!(parsed.ip, "8.8.8.8");
    assert_eq!(parsed.method, HttpMethod::Delete);
    assert_eq!(parsed.url, "/x?y=1");
    assert_eq!(parsed.duration, "1234");
}

#[test]
fn duration_is_kept_verbatim_even_if_not_numeric() {
    let line = log_line("1.1.1.1", "GET", "/", "12.5");

    let parsed = parse_line(&line).unwrap();

    assert_eq!(parsed.duration, "12.5");
}

#[test]
fn trailing_newline_is_ignored() {
    let line = format!("{}\n", log_line("1.1.1.1", "HEAD", "/", "9"));

    let parsed = parse_line(&line).unwrap();

    assert_eq!(parsed.duration, "9");
}
