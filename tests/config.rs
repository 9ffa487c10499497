use spdx_engine::findings::DEFAULT_LICENSE_FILE_PATTERNS;

mod utils;
use utils::{cr, lic, load_config};

#[test]
fn empty_config_uses_defaults() {
    let matcher = load_config("").unwrap();

    assert_eq!(matcher.tolerance_lines(), 5);
    assert_eq!(
        matcher.license_file_matcher().patterns(),
        DEFAULT_LICENSE_FILE_PATTERNS
    );
}

#[test]
fn configured_matcher_is_used() {
    let matcher = load_config(
        r#"
tolerance-lines = 0
license-files = ["NOTICE*"]
"#,
    )
    .unwrap();

    let licenses = [
        lic("MIT", "NOTICE.md", 1),
        lic("MIT", "src/a.rs", 10),
        lic("ISC", "src/a.rs", 20),
    ];
    let copyrights = [cr("(c) Exact", "src/a.rs", 10), cr("(c) Off", "src/a.rs", 11)];

    let result = matcher.match_findings(&licenses, &copyrights);
    let isc = result.iter().find(|lf| lf.license == "ISC").unwrap();
    let mit = result.iter().find(|lf| lf.license == "MIT").unwrap();

    assert!(isc.copyrights.is_empty());
    assert_eq!(
        mit.copyrights
            .iter()
            .map(|c| c.statement.as_str())
            .collect::<Vec<_>>(),
        ["(c) Exact", "(c) Off"]
    );
}

#[test]
fn empty_pattern_list_disables_root_licenses() {
    let matcher = load_config("license-files = []").unwrap();

    assert!(matcher.license_file_matcher().patterns().is_empty());
    assert!(!matcher.license_file_matcher().matches("LICENSE"));
}

#[test]
fn reports_invalid_patterns() {
    let rendered = load_config(r#"license-files = ["LICENSE*", "[unclosed"]"#).unwrap_err();

    assert!(rendered.contains("error[invalid-glob]: invalid license file pattern"));
    assert!(rendered.contains("matcher.toml"));
    assert!(rendered.contains("[unclosed"));
}

#[test]
fn reports_unknown_keys() {
    let rendered = load_config("tolerance = 3").unwrap_err();
    assert!(rendered.contains("error[invalid-config]"));
}

#[test]
fn reports_wrong_types() {
    let rendered = load_config(r#"tolerance-lines = "five""#).unwrap_err();
    assert!(rendered.contains("error[invalid-config]"));
}

#[test]
fn reports_malformed_toml() {
    assert!(load_config("license-files = [").is_err());
}
