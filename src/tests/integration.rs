use num_bigint::{BigInt, BigUint};

use super::{eval_poly, shares_of};
use crate::{encode_base, reconstruct_secret, ShareSet};

#[test]
fn test_small_record_set() {
    // P(x) = x^2 + 3; entry "6" lies past n and is never read.
    let set = ShareSet::from_json_str(
        r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4", "value": "213" }
        }"#,
    )
    .expect("parse failed");

    assert_eq!(set.points.len(), 3);
    assert_eq!(set.reconstruct().unwrap(), BigInt::from(3));
}

#[test]
fn test_line_any_pair() {
    let points = shares_of(&[BigInt::from(1), BigInt::from(2)], &[1, 2, 3, 4]);

    for i in 0..points.len() {
        for j in 0..points.len() {
            if i == j {
                continue;
            }
            let pair = vec![points[i].clone(), points[j].clone()];
            assert_eq!(reconstruct_secret(&pair, 2).unwrap(), BigInt::from(1));
        }
    }
}

#[test]
fn test_large_mixed_base_record_set() {
    let secret: BigInt = "79836264049851"
        .repeat(15)
        .parse()
        .expect("valid decimal");
    let coeffs = vec![
        secret.clone(),
        "3141592653589793238462643383279502884197".parse().unwrap(),
        "2718281828459045235360287471352662497757".parse().unwrap(),
        BigInt::from(-977),
        "1618033988749894848204586834365638117720".parse().unwrap(),
        BigInt::from(12_345_678_901_234_567i64),
    ];
    let k = coeffs.len();
    let n = 10u64;
    let bases = [2u32, 3, 7, 8, 10, 12, 15, 16, 20, 36];

    let mut json = serde_json::Map::new();
    json.insert("keys".into(), serde_json::json!({ "n": n.to_string(), "k": k }));
    for x in 1..=n {
        // Shares 4 and 7 are withheld.
        if x == 4 || x == 7 {
            continue;
        }
        let y = eval_poly(&coeffs, x);
        let y: BigUint = y.to_biguint().expect("share values stay positive");
        let base = bases[(x - 1) as usize];
        let mut value = encode_base(&y, base).unwrap();
        if x % 2 == 0 {
            value = value.to_uppercase();
        }
        json.insert(
            x.to_string(),
            serde_json::json!({ "base": base.to_string(), "value": value }),
        );
    }

    let set = ShareSet::from_json_str(&serde_json::Value::Object(json).to_string()).unwrap();
    assert_eq!(set.points.len(), 8);
    assert_eq!(set.points[3].x, 5);
    assert_eq!(set.reconstruct().unwrap(), secret);

    let report = set.check_consistency().unwrap();
    assert_eq!(report.secret, secret);
    assert_eq!(report.checked, 2);
    assert!(report.is_consistent());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("shamir-recover-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "keys": { "n": "2", "k": "2" },
             "1": { "base": "16", "value": "1a" },
             "2": { "base": "10", "value": "30" } }"#,
    )
    .unwrap();

    let set = ShareSet::load(&path);
    std::fs::remove_file(&path).unwrap();
    let set = set.expect("load failed");

    assert_eq!(set.points[0].y, BigInt::from(26));
    // y = 4x + 22
    assert_eq!(set.reconstruct().unwrap(), BigInt::from(22));
}

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("shamir-recover-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_batch_isolates_failing_files() {
    use crate::driver::{process_files, DriverOptions};

    let bad = write_temp(
        "bad.json",
        r#"{ "keys": { "n": 2, "k": 2 },
             "1": { "base": 10, "value": "g" },
             "2": { "base": 10, "value": "5" } }"#,
    );
    let good = write_temp(
        "good.json",
        r#"{ "keys": { "n": 3, "k": 2 },
             "1": { "base": 10, "value": "3" },
             "3": { "base": 10, "value": "7" } }"#,
    );
    let missing = std::env::temp_dir().join("shamir-recover-missing-share-file.json");
    let files = vec![bad.clone(), good.clone(), missing];

    let mut out = Vec::new();
    let failed = process_files(&files, DriverOptions { verify: true, json: true }, &mut out);
    std::fs::remove_file(&bad).unwrap();
    std::fs::remove_file(&good).unwrap();

    assert_eq!(failed, 2);

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("output line is not JSON"))
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["secret"], "1");
    assert_eq!(lines[0]["k"], 2);
    assert_eq!(lines[0]["file"], good.display().to_string());
}

#[test]
fn test_json_output_carries_no_log_lines() {
    use crate::driver::{process_files, DriverOptions};

    let good = write_temp(
        "json-only.json",
        r#"{ "keys": { "n": 2, "k": 2 },
             "1": { "base": 16, "value": "1a" },
             "2": { "base": 10, "value": "30" } }"#,
    );

    // Logs are emitted during the run but must not reach the output writer.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::sink)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let mut out = Vec::new();
    let failed = tracing::subscriber::with_default(subscriber, || {
        process_files(&[good.clone()], DriverOptions { verify: false, json: true }, &mut out)
    });
    std::fs::remove_file(&good).unwrap();

    assert_eq!(failed, 0);
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().count(), 1);
    let line: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(line["secret"], "22");
}

#[test]
fn test_batch_without_json_writes_nothing() {
    use crate::driver::{process_files, DriverOptions};

    let good = write_temp(
        "quiet.json",
        r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": 2, "value": "101" } }"#,
    );
    let mut out = Vec::new();
    let failed = process_files(&[good.clone()], DriverOptions::default(), &mut out);
    std::fs::remove_file(&good).unwrap();

    assert_eq!(failed, 0);
    assert!(out.is_empty());
}
