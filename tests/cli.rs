use assert_cmd::Command;
use csv::Reader;
use predicates::prelude::*;
use std::fs;

#[test]
fn hohmann_writes_csv_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out/trajectory.csv");
    let json_path = dir.path().join("out/summary.json");

    Command::cargo_bin("hohmann")
        .expect("hohmann bin")
        .args([
            "--samples",
            "300",
            "--output",
            csv_path.to_str().unwrap(),
            "--summary",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Earth -> Mars"))
        .stdout(predicate::str::contains("Intercept"));

    let mut reader = Reader::from_path(&csv_path).expect("csv");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.get(0), Some("index"));
    assert_eq!(headers.get(11), Some("phase"));
    let records: Vec<_> = reader.records().map(|r| r.expect("record")).collect();
    assert_eq!(records.len(), 300);
    assert_eq!(&records[0][11], "transfer");
    assert_eq!(&records[299][11], "captured");
    let d0: f64 = records[0][10].parse().unwrap();
    assert_eq!(d0, 0.0);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(summary["samples"], 300);
    assert_eq!(summary["phase_offset_deg"], 44.75);
}

#[test]
fn hohmann_streams_csv_to_stdout() {
    Command::cargo_bin("hohmann")
        .expect("hohmann bin")
        .args(["--samples", "5", "--output", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("index,time_s,time_days"))
        .stdout(predicate::str::contains("Intercept").not());
}

#[test]
fn hohmann_rejects_zero_samples() {
    Command::cargo_bin("hohmann")
        .expect("hohmann bin")
        .args(["--samples", "0", "--output", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples must be at least 1"));
}

#[test]
fn hohmann_plot_renders_pngs_and_gif() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("scenario.yaml");
    fs::write(&config_path, "samples: 24\n").unwrap();

    Command::cargo_bin("hohmann_plot")
        .expect("hohmann_plot bin")
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
            "--width",
            "400",
            "--height",
            "300",
            "--frame-size",
            "300",
            "--stride",
            "6",
        ])
        .assert()
        .success();

    for name in ["angle.png", "distance.png", "transfer.gif"] {
        let metadata = fs::metadata(dir.path().join(name)).expect(name);
        assert!(metadata.len() > 0, "{name} should not be empty");
    }
}

#[test]
fn hohmann_rejects_absurd_sample_counts() {
    Command::cargo_bin("hohmann")
        .expect("hohmann bin")
        .args(["--samples", "100000000000", "--output", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples must not exceed"));
}

#[test]
fn hohmann_plot_accepts_arc_angle_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("scenario.toml");
    fs::write(&config_path, "samples = 30\n").unwrap();

    Command::cargo_bin("hohmann_plot")
        .expect("hohmann_plot bin")
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
            "--width",
            "400",
            "--height",
            "300",
            "--no-animation",
            "--angle-source",
            "arc",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(dir.path().join("angle.png")).expect("angle.png");
    assert!(metadata.len() > 0);
    assert!(!dir.path().join("transfer.gif").exists());
}
