#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hostpulse_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:3123"
sampler:
  interval_mz: 5000 # typo should fail
"#;

    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "0.0.0.0:3123");
    assert_eq!(cfg.sampler.interval_ms, 5000);
}

#[test]
fn ok_overridden_listen_and_cadence() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9100"
sampler:
  interval_ms: 10000
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:9100");
    assert_eq!(cfg.sampler.interval().as_secs(), 10);
}

#[test]
fn rejects_unsupported_version() {
    config::load_from_str("version: 2\n").expect_err("must fail");
}

#[test]
fn rejects_out_of_range_interval() {
    let bad = r#"
version: 1
sampler:
  interval_ms: 50
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn rejects_unparseable_listen() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn missing_file_yields_defaults() {
    let cfg = config::load_or_default("does-not-exist.yaml").expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:3123");
    assert_eq!(cfg.sampler.interval_ms, 5000);
}
