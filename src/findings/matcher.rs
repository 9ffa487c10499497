use super::{
    CopyrightFinding, CopyrightFindings, LicenseFileMatcher, LicenseFinding, LicenseFindings,
    PackageFindings, TextLocation,
};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::{BTreeMap, BTreeSet};

/// The default maximum distance, in lines, between a license and a copyright
/// in the same file for them to be associated
pub const DEFAULT_TOLERANCE_LINES: u32 = 5;

/// Associates copyright findings with license findings.
///
/// Within a single file, copyrights are associated with the only license
/// found in that file, or, if the file contains several licenses, with each
/// license found within [`Self::tolerance_lines`] of the copyright. Any
/// copyright that is not associated this way falls back to the "root"
/// licenses, ie. those found in license files such as `LICENSE`, and is
/// dropped if there are none.
///
/// The matcher holds no mutable state, so a single instance can be used from
/// any number of threads at once.
#[derive(Clone, Debug)]
pub struct FindingsMatcher {
    license_file_matcher: LicenseFileMatcher,
    tolerance_lines: u32,
}

impl Default for FindingsMatcher {
    fn default() -> Self {
        Self {
            license_file_matcher: LicenseFileMatcher::default(),
            tolerance_lines: DEFAULT_TOLERANCE_LINES,
        }
    }
}

/// The matched findings of a single package
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchedPackage {
    pub id: String,
    pub license_findings: BTreeSet<LicenseFindings>,
}

#[derive(Default)]
struct Accumulated<'f> {
    locations: BTreeSet<TextLocation>,
    copyrights: BTreeMap<&'f str, BTreeSet<TextLocation>>,
}

impl<'f> Accumulated<'f> {
    #[inline]
    fn associate(&mut self, copyright: &'f CopyrightFinding) {
        self.copyrights
            .entry(copyright.statement.as_str())
            .or_default()
            .insert(copyright.location.clone());
    }
}

type FileFindings<'f> = (
    SmallVec<[&'f LicenseFinding; 4]>,
    SmallVec<[&'f CopyrightFinding; 4]>,
);

impl FindingsMatcher {
    #[inline]
    pub fn new(license_file_matcher: LicenseFileMatcher, tolerance_lines: u32) -> Self {
        Self {
            license_file_matcher,
            tolerance_lines,
        }
    }

    #[inline]
    pub fn with_tolerance_lines(mut self, tolerance_lines: u32) -> Self {
        self.tolerance_lines = tolerance_lines;
        self
    }

    #[inline]
    pub fn tolerance_lines(&self) -> u32 {
        self.tolerance_lines
    }

    #[inline]
    pub fn license_file_matcher(&self) -> &LicenseFileMatcher {
        &self.license_file_matcher
    }

    /// The distinct licenses found in license files
    pub fn root_licenses<'f>(&self, licenses: &'f [LicenseFinding]) -> BTreeSet<&'f str> {
        licenses
            .iter()
            .filter(|lf| self.license_file_matcher.matches(lf.location.path()))
            .map(|lf| lf.license.as_str())
            .collect()
    }

    /// Whether a copyright is close enough to a license to be associated with
    /// it, findings without a known line are never close to anything
    #[inline]
    fn is_near(&self, license: &TextLocation, copyright: &TextLocation) -> bool {
        license.has_known_lines()
            && copyright.has_known_lines()
            && license.start_line().abs_diff(copyright.start_line()) <= self.tolerance_lines
    }

    /// Associates the copyrights with the licenses found in the same source
    /// tree, returning one entry per distinct license
    pub fn match_findings(
        &self,
        licenses: &[LicenseFinding],
        copyrights: &[CopyrightFinding],
    ) -> BTreeSet<LicenseFindings> {
        let root_licenses = self.root_licenses(licenses);

        let mut by_path = BTreeMap::<&str, FileFindings<'_>>::new();
        for lf in licenses {
            by_path.entry(lf.location.path()).or_default().0.push(lf);
        }
        for cf in copyrights {
            by_path.entry(cf.location.path()).or_default().1.push(cf);
        }

        let mut accumulated = BTreeMap::<&str, Accumulated<'_>>::new();
        for lf in licenses {
            accumulated
                .entry(lf.license.as_str())
                .or_default()
                .locations
                .insert(lf.location.clone());
        }

        let mut unmatched = Vec::new();

        for (path, (file_licenses, file_copyrights)) in &by_path {
            if file_copyrights.is_empty() {
                continue;
            }

            let distinct: BTreeSet<_> = file_licenses.iter().map(|lf| lf.license.as_str()).collect();

            match distinct.len() {
                0 => unmatched.extend(file_copyrights.iter().copied()),
                1 => {
                    let license = distinct.into_iter().next().unwrap_or_default();
                    let acc = accumulated.entry(license).or_default();
                    for cf in file_copyrights {
                        acc.associate(cf);
                    }
                }
                _ => {
                    for cf in file_copyrights {
                        let mut matched = false;

                        for lf in file_licenses {
                            if self.is_near(&lf.location, &cf.location) {
                                accumulated
                                    .entry(lf.license.as_str())
                                    .or_default()
                                    .associate(cf);
                                matched = true;
                            }
                        }

                        if !matched {
                            log::trace!(
                                "copyright '{}' in '{path}' is not near any of its {} licenses",
                                cf.statement,
                                distinct.len()
                            );
                            unmatched.push(*cf);
                        }
                    }
                }
            }
        }

        if !unmatched.is_empty() {
            if root_licenses.is_empty() {
                log::debug!(
                    "dropping {} copyright finding(s) that match no license, there are no root licenses",
                    unmatched.len()
                );
            } else {
                log::debug!(
                    "associating {} unmatched copyright finding(s) with {} root license(s)",
                    unmatched.len(),
                    root_licenses.len()
                );

                for license in &root_licenses {
                    let acc = accumulated.entry(*license).or_default();
                    for cf in &unmatched {
                        acc.associate(cf);
                    }
                }
            }
        }

        accumulated
            .into_iter()
            .map(|(license, acc)| LicenseFindings {
                license: license.to_owned(),
                locations: acc.locations,
                copyrights: acc
                    .copyrights
                    .into_iter()
                    .map(|(statement, locations)| CopyrightFindings {
                        statement: statement.to_owned(),
                        locations,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Matches the findings of every package in parallel, the results are in
    /// the same order as the input
    pub fn match_packages(&self, packages: &[PackageFindings]) -> Vec<MatchedPackage> {
        use rayon::prelude::*;

        packages
            .par_iter()
            .map(|pkg| MatchedPackage {
                id: pkg.id.clone(),
                license_findings: self.match_findings(&pkg.licenses, &pkg.copyrights),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lic(license: &str, path: &str, line: u32) -> LicenseFinding {
        LicenseFinding::new(license, TextLocation::line(path, line).unwrap())
    }

    fn cr(statement: &str, path: &str, line: u32) -> CopyrightFinding {
        CopyrightFinding::new(statement, TextLocation::line(path, line).unwrap())
    }

    fn statements<'r>(result: &'r BTreeSet<LicenseFindings>, license: &str) -> Vec<&'r str> {
        result
            .iter()
            .find(|lf| lf.license == license)
            .map(|lf| lf.copyrights.iter().map(|c| c.statement.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn finds_root_licenses() {
        let matcher = FindingsMatcher::default();
        let licenses = [
            lic("MIT", "LICENSE", 1),
            lic("Apache-2.0", "sub/LICENSE-APACHE", 1),
            lic("BSD-3-Clause", "src/lib.rs", 1),
        ];

        assert_eq!(
            matcher.root_licenses(&licenses).into_iter().collect::<Vec<_>>(),
            ["Apache-2.0", "MIT"]
        );
    }

    #[test]
    fn tolerance_is_inclusive() {
        let matcher = FindingsMatcher::default().with_tolerance_lines(2);
        let result = matcher.match_findings(
            &[lic("MIT", "a.rs", 10), lic("Apache-2.0", "a.rs", 20)],
            &[cr("(c) Edge", "a.rs", 12), cr("(c) Far", "a.rs", 15)],
        );

        assert_eq!(statements(&result, "MIT"), ["(c) Edge"]);
        assert!(statements(&result, "Apache-2.0").is_empty());
    }

    #[test]
    fn unknown_lines_are_never_near() {
        let matcher = FindingsMatcher::default();
        let unknown = CopyrightFinding::new("(c) Nowhere", TextLocation::unknown("a.rs").unwrap());

        let result = matcher.match_findings(
            &[lic("MIT", "a.rs", 1), lic("Apache-2.0", "a.rs", 2)],
            std::slice::from_ref(&unknown),
        );

        assert!(statements(&result, "MIT").is_empty());
        assert!(statements(&result, "Apache-2.0").is_empty());

        // But a single license file takes everything
        let result = matcher.match_findings(&[lic("MIT", "a.rs", 1)], &[unknown]);
        assert_eq!(statements(&result, "MIT"), ["(c) Nowhere"]);
    }

    #[test]
    fn same_license_twice_is_a_single_license() {
        let matcher = FindingsMatcher::default();
        let result = matcher.match_findings(
            &[lic("MIT", "a.rs", 1), lic("MIT", "a.rs", 500)],
            &[cr("(c) Middle", "a.rs", 250)],
        );

        assert_eq!(result.len(), 1);
        assert_eq!(statements(&result, "MIT"), ["(c) Middle"]);
    }

    #[test]
    fn drops_copyrights_without_root_licenses() {
        let matcher = FindingsMatcher::default();
        let result = matcher.match_findings(
            &[lic("MIT", "a.rs", 1)],
            &[cr("(c) Lost", "b.rs", 1)],
        );

        assert_eq!(result.len(), 1);
        assert!(statements(&result, "MIT").is_empty());

        assert!(matcher.match_findings(&[], &[cr("(c) Lost", "b.rs", 1)]).is_empty());
    }
}
