use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn flatkey() -> Command {
    let bin_path = project_root().join("target/debug/flatkey");
    let mut cmd = Command::new(bin_path);
    cmd.current_dir(project_root());
    cmd
}

#[test]
fn test_query_text() {
    flatkey()
        .args(["query", "limit=15&q=foo&lang=fr_ch&desc=true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit:        15"))
        .stdout(predicate::str::contains("q:            foo"))
        .stdout(predicate::str::contains("lang:         fr-CH"))
        .stdout(predicate::str::contains("desc:         true"))
        .stdout(predicate::str::contains("min:          -"));
}

#[test]
fn test_query_json() {
    flatkey()
        .args([
            "query",
            "min=2015-10-21T07:28:00Z&limit=3",
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"limit\": 3"))
        .stdout(predicate::str::contains("\"min\": \"2015-10-21T07:28:00Z\""))
        .stdout(predicate::str::contains("\"max\": null"));
}

#[test]
fn test_query_from_stdin() {
    flatkey()
        .arg("query")
        .write_stdin("?limit=7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("limit:        7"));
}

#[test]
fn test_query_invalid_value() {
    flatkey()
        .args(["query", "limit=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn test_query_invalid_value_is_logged() {
    flatkey()
        .args(["query", "min=20"])
        .env("RUST_LOG", "warn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("http.parse.err"))
        .stderr(predicate::str::contains("failed to initialise logging").not());
}

#[test]
fn test_range_text() {
    flatkey()
        .args(["range", "bytes 0-63/128"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start:  0"))
        .stdout(predicate::str::contains("end:    63"))
        .stdout(predicate::str::contains("length: 64"));
}

#[test]
fn test_range_json() {
    flatkey()
        .args(["range", "bytes 10-19/100", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"size\": 100"))
        .stdout(predicate::str::contains("\"length\": 10"));
}

#[test]
fn test_range_rejects_inverted_range() {
    flatkey().args(["range", "bytes 9-1/10"]).assert().failure();
}

#[test]
fn test_retry_after_parse_seconds() {
    flatkey()
        .args(["retry-after", "parse", "120"])
        .assert()
        .success()
        .stdout("120\n");
}

#[test]
fn test_retry_after_parse_http_date() {
    flatkey()
        .args([
            "retry-after",
            "parse",
            "Wed, 21 Oct 2015 07:28:00 GMT",
            "--now",
            "2015-10-21T07:28:15Z",
        ])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn test_retry_after_parse_invalid() {
    flatkey()
        .args(["retry-after", "parse", "soon"])
        .assert()
        .failure();
}

#[test]
fn test_retry_after_format() {
    flatkey()
        .args(["retry-after", "format", "90"])
        .assert()
        .success()
        .stdout("Retry-After: 90\n");
}

#[test]
fn test_retry_after_format_negative() {
    flatkey()
        .args(["retry-after", "format", "-5"])
        .assert()
        .success()
        .stdout("Retry-After: 0\n");
}

#[test]
fn test_lang_parse() {
    flatkey()
        .args(["lang", "parse", "zh_hant_tw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag:    zh-Hant-TW"))
        .stdout(predicate::str::contains("base:   zh"))
        .stdout(predicate::str::contains("script: Hant"))
        .stdout(predicate::str::contains("region: TW"));
}

#[test]
fn test_lang_parse_invalid() {
    flatkey().args(["lang", "parse", "not a tag"]).assert().failure();
}

#[test]
fn test_lang_accept() {
    flatkey()
        .args([
            "lang",
            "accept",
            "de;q=0.5, fr-CH, fr;q=0.9",
            "--supported",
            "en,fr-CH,de",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("preferred: fr-CH, fr, de"))
        .stdout(predicate::str::contains("best:      fr-CH"));
}

#[test]
fn test_lang_accept_falls_back_to_default() {
    flatkey()
        .args(["lang", "accept", "ja", "--supported", "en,fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("best:      en"));
}

#[test]
fn test_time_localized() {
    flatkey()
        .args(["time", "2006-01-02T15:30:45Z", "--lang", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date long:  2 janvier 2006"))
        .stdout(predicate::str::contains("time short: 15:30"));
}

#[test]
fn test_time_floor() {
    flatkey()
        .args(["time", "2006-01-02T15:30:45Z", "--floor", "3600", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rfc3339\": \"2006-01-02T15:00:00Z\""))
        .stdout(predicate::str::contains("\"time_short\": \"3:00 PM\""));
}

#[test]
fn test_time_rejects_zero_precision() {
    flatkey()
        .args(["time", "2006-01-02T15:30:45Z", "--ceil", "0"])
        .assert()
        .failure();
}
