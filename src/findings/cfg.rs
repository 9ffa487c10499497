//! Configuration for the [`FindingsMatcher`], loaded from TOML.
//!
//! ```toml
//! tolerance-lines = 5
//! license-files = ["copying*", "license*", "docs/legal/*.txt"]
//! ```

use super::{file_matcher, FindingsMatcher, LicenseFileMatcher, DEFAULT_LICENSE_FILE_PATTERNS};
use crate::{
    diag::{Diagnostic, DiagnosticCode, FileId, Label},
    Spanned,
};
use toml_span::{de_helpers::TableHelper, value::Value, DeserError, Deserialize};

/// The unvalidated matcher configuration, every key is optional
#[derive(Default)]
pub struct MatcherConfig {
    /// The maximum line distance between a copyright and a license in a file
    /// with several licenses for them to be associated
    pub tolerance_lines: Option<Spanned<u32>>,
    /// The glob patterns of license files, replaces the defaults
    pub license_files: Option<Vec<Spanned<String>>>,
}

impl<'de> Deserialize<'de> for MatcherConfig {
    fn deserialize(value: &mut Value<'de>) -> Result<Self, DeserError> {
        let mut th = TableHelper::new(value)?;

        let tolerance_lines = th.optional_s("tolerance-lines");
        let license_files = th.optional("license-files");

        th.finalize(None)?;

        Ok(Self {
            tolerance_lines,
            license_files,
        })
    }
}

impl MatcherConfig {
    /// Parses the configuration from the contents of a TOML file
    pub fn parse(contents: &str) -> Result<Self, DeserError> {
        let mut value = toml_span::parse(contents)?;
        Self::deserialize(&mut value)
    }

    /// Compiles the license file patterns, every invalid pattern is reported
    pub fn validate(self, file_id: FileId) -> Result<FindingsMatcher, Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();

        let patterns: Vec<String> = match self.license_files {
            Some(patterns) => {
                for pattern in &patterns {
                    if let Err(err) = file_matcher::glob(&pattern.value) {
                        diagnostics.push(
                            Diagnostic::error()
                                .with_message("invalid license file pattern")
                                .with_code(DiagnosticCode::InvalidGlob.as_str())
                                .with_labels(vec![Label::primary(file_id, pattern.span)
                                    .with_message(err.kind().to_string())]),
                        );
                    }
                }

                if patterns.is_empty() {
                    log::warn!("no license file patterns configured, there will be no root licenses");
                }

                patterns.into_iter().map(|p| p.value).collect()
            }
            None => DEFAULT_LICENSE_FILE_PATTERNS
                .iter()
                .map(|p| (*p).to_owned())
                .collect(),
        };

        if !diagnostics.is_empty() {
            return Err(diagnostics);
        }

        let license_file_matcher = LicenseFileMatcher::new(patterns).map_err(|err| {
            vec![Diagnostic::error()
                .with_message(format!("failed to build license file matcher: {err}"))
                .with_code(DiagnosticCode::InvalidGlob.as_str())]
        })?;

        let tolerance_lines = self
            .tolerance_lines
            .map_or(super::DEFAULT_TOLERANCE_LINES, |tl| tl.value);

        Ok(FindingsMatcher::new(license_file_matcher, tolerance_lines))
    }
}

/// Converts a deserialization error into diagnostics
pub fn deser_diagnostics(err: &DeserError, file_id: FileId) -> Vec<Diagnostic> {
    err.errors
        .iter()
        .map(|err| {
            err.to_diagnostic(file_id)
                .with_code(DiagnosticCode::InvalidConfig.as_str())
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let matcher = MatcherConfig::parse("").unwrap().validate(0).unwrap();
        assert_eq!(matcher.tolerance_lines(), 5);
        assert_eq!(
            matcher.license_file_matcher().patterns().len(),
            DEFAULT_LICENSE_FILE_PATTERNS.len()
        );
    }

    #[test]
    fn reads_all_keys() {
        let cfg = MatcherConfig::parse(
            r#"
tolerance-lines = 12
license-files = ["legal/*.txt", "NOTICE"]
"#,
        )
        .unwrap();

        let matcher = cfg.validate(0).unwrap();
        assert_eq!(matcher.tolerance_lines(), 12);
        assert!(matcher.license_file_matcher().matches("legal/terms.txt"));
        assert!(matcher.license_file_matcher().matches("NOTICE"));
        assert!(!matcher.license_file_matcher().matches("LICENSE"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(MatcherConfig::parse("tolerance = 1").is_err());
    }

    #[test]
    fn reports_invalid_globs() {
        let contents = r#"license-files = ["license*", "licen[se", "{a,b"]"#;
        let diags = MatcherConfig::parse(contents)
            .unwrap()
            .validate(0)
            .unwrap_err();

        assert_eq!(diags.len(), 2);

        let label = &diags[0].labels[0];
        assert!(contents[label.range.clone()].contains("licen[se"));
    }
}
