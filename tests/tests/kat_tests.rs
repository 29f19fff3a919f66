//! Known-answer tests for Streebog and GOST R 34.10-2018

use gostsig_tests::kat::*;

#[test]
fn test_bundled_vectors_pass() -> Result<()> {
    let suite = load_gost_suite()?;
    assert_eq!(suite.case_count(), 16);

    let engine = GostEngine::default();
    let runner = Runner::new(&engine);
    let summary = runner.run_suite(&suite);
    assert_eq!(summary, Summary { passed: 16, failed: 0 });
    runner.check_suite(&suite)
}

#[test]
fn test_bundled_fields_are_whole_bytes() {
    let suite = load_gost_suite().unwrap();
    for group in &suite.test_groups {
        for case in &group.tests {
            for (name, value) in &case.fields {
                assert!(
                    hex::decode(value).is_ok(),
                    "group {} case {} field {} is not even-length hex",
                    group.tg_id,
                    case.tc_id,
                    name
                );
            }
        }
    }
}

#[test]
fn test_wrong_digest_is_reported() {
    let json = r#"{
        "name": "tampered",
        "testGroups": [{
            "tgId": 1,
            "algorithm": "Streebog-256",
            "testType": "AFT",
            "tests": [{ "tcId": 1, "msg": "", "md": "00" }]
        }]
    }"#;
    let suite = load_suite(json).unwrap();
    let engine = GostEngine::default();
    let runner = Runner::new(&engine);

    assert_eq!(runner.run_suite(&suite), Summary { passed: 0, failed: 1 });
    assert!(matches!(
        runner.check_suite(&suite),
        Err(EngineError::Failures { failed: 1, total: 1 })
    ));
}

#[test]
fn test_single_case_through_engine() {
    let suite = load_gost_suite().unwrap();
    let group = suite
        .test_groups
        .iter()
        .find(|g| g.test_type == "sigVer")
        .unwrap();
    let case = group.tests.iter().find(|c| c.expects_valid()).unwrap();

    let engine = GostEngine::default();
    assert!(engine.run(group, case).is_ok());
}

#[test]
fn test_unsupported_group() {
    let json = r#"{
        "name": "unknown",
        "testGroups": [{
            "tgId": 9,
            "algorithm": "GOST3410-2018",
            "testType": "keyGen",
            "tests": [{ "tcId": 1 }]
        }]
    }"#;
    let suite = load_suite(json).unwrap();
    let engine = GostEngine::default();
    let err = engine.run(&suite.test_groups[0], &suite.test_groups[0].tests[0]).unwrap_err();
    assert!(matches!(err, EngineError::Unsupported { .. }));
}

#[test]
fn test_missing_field() {
    let json = r#"{
        "name": "missing",
        "testGroups": [{
            "tgId": 1,
            "algorithm": "Streebog-512",
            "testType": "AFT",
            "tests": [{ "tcId": 1, "msg": "616263" }]
        }]
    }"#;
    let suite = load_suite(json).unwrap();
    let engine = GostEngine::default();
    let err = engine.run(&suite.test_groups[0], &suite.test_groups[0].tests[0]).unwrap_err();
    assert!(matches!(err, EngineError::MissingField("md")));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(load_suite("{ not json"), Err(EngineError::Json(_))));
}
