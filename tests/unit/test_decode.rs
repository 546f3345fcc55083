use semver_lite::Version;
use serde::Deserialize;

/// Carrier for the single-field manifests used by configuration loaders
#[derive(Debug, Deserialize)]
struct Manifest {
    version: Version,
}

#[test]
fn test_decode_version_string() {
    let manifest: Manifest = serde_json::from_str(r#"{"version": "1.0"}"#).unwrap();
    assert_eq!(manifest.version, "1.0".parse::<Version>().unwrap());
}

#[test]
fn test_decode_malformed_version_fails() {
    let result = serde_json::from_str::<Manifest>(r#"{"version": "x.0"}"#);
    assert!(result.is_err());
}

#[test]
fn test_decode_error_reports_offending_literal() {
    let err = serde_json::from_str::<Manifest>(r#"{"version": "x.0"}"#).unwrap_err();
    assert!(err.to_string().contains("x.0"));
}

#[test]
fn test_decode_pre_release_version() {
    let manifest: Manifest = serde_json::from_str(r#"{"version": "1.2.3-beta.2"}"#).unwrap();
    assert_eq!(manifest.version.to_string(), "1.2.3-beta.2");
}

#[test]
fn test_decode_rejects_non_string_values() {
    assert!(serde_json::from_str::<Manifest>(r#"{"version": 1}"#).is_err());
}

#[test]
fn test_serialize_as_string_scalar() {
    let version = Version::new(1, 2, 3);
    assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.2.3\"");
}

#[test]
fn test_json_round_trip() {
    let version = Version::with_qualifiers(1, 0, 0, Some(vec!["alpha".to_string()]), None).unwrap();
    let json = serde_json::to_string(&version).unwrap();
    let decoded: Version = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, version);
}
