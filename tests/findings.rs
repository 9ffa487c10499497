use spdx_engine::{
    findings::{InvalidLocation, LicenseFileMatcher, PackageFindings},
    CopyrightFinding, FindingsMatcher, LicenseFinding, LicenseFindings, TextLocation,
};
use std::collections::BTreeSet;

mod utils;
use utils::{cr, lic};

fn find<'r>(result: &'r BTreeSet<LicenseFindings>, license: &str) -> &'r LicenseFindings {
    result
        .iter()
        .find(|lf| lf.license == license)
        .unwrap_or_else(|| panic!("no findings for '{license}'"))
}

fn statements<'r>(result: &'r BTreeSet<LicenseFindings>, license: &str) -> Vec<&'r str> {
    find(result, license)
        .copyrights
        .iter()
        .map(|c| c.statement.as_str())
        .collect()
}

#[test]
fn single_license_file_takes_every_copyright() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("MIT", "src/a.rs", 1)];
    let copyrights = [cr("(c) A", "src/a.rs", 100), cr("(c) B", "src/a.rs", 200)];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(result.len(), 1);
    assert_eq!(statements(&result, "MIT"), ["(c) A", "(c) B"]);
}

#[test]
fn repeated_license_counts_once() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("MIT", "src/a.rs", 1), lic("MIT", "src/a.rs", 500)];
    let copyrights = [cr("(c) A", "src/a.rs", 250)];

    let result = matcher.match_findings(&licenses, &copyrights);

    let mit = find(&result, "MIT");
    assert_eq!(mit.locations.len(), 2);
    assert_eq!(statements(&result, "MIT"), ["(c) A"]);
}

#[test]
fn multi_license_file_uses_proximity() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("MIT", "a.c", 1), lic("Apache-2.0", "a.c", 100)];
    let copyrights = [cr("(c) X", "a.c", 3)];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(statements(&result, "MIT"), ["(c) X"]);
    assert!(statements(&result, "Apache-2.0").is_empty());
}

#[test]
fn tolerance_is_inclusive() {
    let licenses = [lic("MIT", "a.c", 10), lic("Apache-2.0", "a.c", 100)];
    let copyrights = [cr("(c) X", "a.c", 15), cr("(c) Y", "a.c", 16)];

    let result = FindingsMatcher::default().match_findings(&licenses, &copyrights);
    assert_eq!(statements(&result, "MIT"), ["(c) X"]);

    let result = FindingsMatcher::default()
        .with_tolerance_lines(6)
        .match_findings(&licenses, &copyrights);
    assert_eq!(statements(&result, "MIT"), ["(c) X", "(c) Y"]);
}

#[test]
fn unmatched_copyrights_go_to_root_licenses() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("BSD-3-Clause", "LICENSE", 1)];
    let copyrights = [cr("(c) Y", "c.py", 5)];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(statements(&result, "BSD-3-Clause"), ["(c) Y"]);
}

#[test]
fn distant_copyrights_go_to_root_licenses() {
    let matcher = FindingsMatcher::default();

    let licenses = [
        lic("MIT", "src/lib.rs", 1),
        lic("ISC", "src/lib.rs", 2),
        lic("Apache-2.0", "docs/COPYING.txt", 1),
    ];
    let copyrights = [cr("(c) Far", "src/lib.rs", 900)];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(statements(&result, "Apache-2.0"), ["(c) Far"]);
    assert!(statements(&result, "MIT").is_empty());
    assert!(statements(&result, "ISC").is_empty());
}

#[test]
fn unmatched_copyrights_without_root_licenses_are_dropped() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("MIT", "src/a.rs", 1)];
    let copyrights = [cr("(c) Lost", "src/b.rs", 1)];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(result.len(), 1);
    assert!(statements(&result, "MIT").is_empty());
}

#[test]
fn root_licenses_always_appear() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("Zlib", "COPYING", 1), lic("MIT", "src/a.rs", 1)];

    let result = matcher.match_findings(&licenses, &[]);

    assert!(find(&result, "Zlib").copyrights.is_empty());
    assert!(find(&result, "MIT").copyrights.is_empty());
    assert_eq!(
        matcher.root_licenses(&licenses).into_iter().collect::<Vec<_>>(),
        ["Zlib"]
    );
}

#[test]
fn unknown_lines_are_never_near() {
    let matcher = FindingsMatcher::default();

    let licenses = [
        lic("MIT", "a.c", 1),
        LicenseFinding::new("ISC", TextLocation::unknown("a.c").unwrap()),
    ];
    let copyrights = [
        CopyrightFinding::new("(c) U", TextLocation::unknown("a.c").unwrap()),
        cr("(c) K", "a.c", 2),
    ];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(statements(&result, "MIT"), ["(c) K"]);
    assert!(statements(&result, "ISC").is_empty());
}

#[test]
fn groups_copyright_locations() {
    let matcher = FindingsMatcher::default();

    let licenses = [lic("MIT", "LICENSE", 1)];
    let copyrights = [
        cr("(c) Same", "LICENSE", 3),
        cr("(c) Same", "src/a.rs", 1),
        cr("(c) Same", "src/b.rs", 1),
    ];

    let result = matcher.match_findings(&licenses, &copyrights);

    let mit = find(&result, "MIT");
    assert_eq!(mit.copyrights.len(), 1);

    let paths: Vec<_> = mit
        .copyrights
        .iter()
        .flat_map(|c| c.locations.iter().map(|l| l.path()))
        .collect();
    assert_eq!(paths, ["LICENSE", "src/a.rs", "src/b.rs"]);
}

#[test]
fn matching_is_deterministic() {
    let matcher = FindingsMatcher::default();

    let licenses = [
        lic("MIT", "LICENSE-MIT", 1),
        lic("Apache-2.0", "LICENSE-APACHE", 1),
        lic("MIT", "src/x.rs", 10),
        lic("BSD-2-Clause", "src/x.rs", 40),
    ];
    let copyrights = [
        cr("(c) One", "src/x.rs", 12),
        cr("(c) Two", "src/x.rs", 41),
        cr("(c) Three", "src/x.rs", 25),
        cr("(c) Four", "src/y.rs", 1),
    ];

    let first = matcher.match_findings(&licenses, &copyrights);

    let mut reversed_licenses = licenses.clone();
    reversed_licenses.reverse();
    let mut reversed_copyrights = copyrights.clone();
    reversed_copyrights.reverse();

    assert_eq!(
        first,
        matcher.match_findings(&reversed_licenses, &reversed_copyrights)
    );
    assert_eq!(first, matcher.match_findings(&licenses, &copyrights));

    assert_eq!(statements(&first, "MIT"), ["(c) Four", "(c) One", "(c) Three"]);
    assert_eq!(statements(&first, "Apache-2.0"), ["(c) Four", "(c) Three"]);
    assert_eq!(statements(&first, "BSD-2-Clause"), ["(c) Two"]);
}

#[test]
fn custom_license_file_patterns() {
    let matcher = FindingsMatcher::new(
        LicenseFileMatcher::new(["legal/*.txt"]).unwrap(),
        5,
    );

    assert!(matcher.license_file_matcher().matches("legal/notice.txt"));
    assert!(!matcher.license_file_matcher().matches("LICENSE"));

    let licenses = [lic("MPL-2.0", "legal/notice.txt", 1), lic("MIT", "LICENSE", 1)];
    let copyrights = [cr("(c) Z", "src/z.rs", 1)];

    let result = matcher.match_findings(&licenses, &copyrights);

    assert_eq!(statements(&result, "MPL-2.0"), ["(c) Z"]);
    assert!(statements(&result, "MIT").is_empty());
}

#[test]
fn matches_packages_in_order() {
    let json = r#"[
        {
            "id": "pkg:cargo/a@1.0.0",
            "licenses": [
                { "license": "MIT", "location": { "path": "LICENSE", "start_line": 1, "end_line": 21 } }
            ],
            "copyrights": [
                { "statement": "Copyright (c) A", "location": { "path": "src/lib.rs", "start_line": 2, "end_line": 2 } }
            ]
        },
        { "id": "pkg:cargo/empty@0.1.0" },
        {
            "id": "pkg:cargo/b@2.0.0",
            "licenses": [
                { "license": "Apache-2.0", "location": { "path": "src/main.rs", "start_line": 0, "end_line": 0 } }
            ]
        }
    ]"#;

    let packages: Vec<PackageFindings> = serde_json::from_str(json).unwrap();
    assert_eq!(packages.len(), 3);
    assert!(packages[1].licenses.is_empty());

    let matched = FindingsMatcher::default().match_packages(&packages);

    let ids: Vec<_> = matched.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["pkg:cargo/a@1.0.0", "pkg:cargo/empty@0.1.0", "pkg:cargo/b@2.0.0"]);

    assert_eq!(statements(&matched[0].license_findings, "MIT"), ["Copyright (c) A"]);
    assert!(matched[1].license_findings.is_empty());
    assert!(!find(&matched[2].license_findings, "Apache-2.0")
        .locations
        .iter()
        .any(|l| l.has_known_lines()));

    let out = serde_json::to_value(&matched[0]).unwrap();
    assert_eq!(
        out,
        serde_json::json!({
            "id": "pkg:cargo/a@1.0.0",
            "license_findings": [{
                "license": "MIT",
                "locations": [{ "path": "LICENSE", "start_line": 1, "end_line": 21 }],
                "copyrights": [{
                    "statement": "Copyright (c) A",
                    "locations": [{ "path": "src/lib.rs", "start_line": 2, "end_line": 2 }],
                }],
            }],
        })
    );
}

#[test]
fn rejects_invalid_locations() {
    assert_eq!(TextLocation::new("", 1, 1), Err(InvalidLocation::EmptyPath));
    assert!(TextLocation::new("a", 5, 4).is_err());
    assert!(TextLocation::new("a", 0, 4).is_err());

    let bad = r#"{ "path": "a", "start_line": 9, "end_line": 3 }"#;
    assert!(serde_json::from_str::<TextLocation>(bad).is_err());

    let location = TextLocation::new("src/a.rs", 3, 7).unwrap();
    assert_eq!(location.to_string(), "src/a.rs:3-7");
    assert_eq!(TextLocation::line("a", 2).unwrap().to_string(), "a:2");
    assert_eq!(TextLocation::unknown("a").unwrap().to_string(), "a");
}
