#![allow(dead_code)]

use spdx_engine::{
    diag::{self, Files},
    findings::{cfg::MatcherConfig, FindingsMatcher},
    CopyrightFinding, LicenseFinding, SpdxExpression, TextLocation,
};

/// Parses an expression that is known to be valid
#[inline]
pub fn expr(s: &str) -> SpdxExpression {
    SpdxExpression::parse(s).unwrap_or_else(|err| panic!("failed to parse:\n{err}"))
}

#[inline]
pub fn lic(license: &str, path: &str, line: u32) -> LicenseFinding {
    LicenseFinding::new(license, TextLocation::line(path, line).unwrap())
}

#[inline]
pub fn cr(statement: &str, path: &str, line: u32) -> CopyrightFinding {
    CopyrightFinding::new(statement, TextLocation::line(path, line).unwrap())
}

/// Loads a matcher configuration, rendering any diagnostics on failure
pub fn load_config(contents: &str) -> Result<FindingsMatcher, String> {
    let mut files = Files::new();
    let file_id = files.add("matcher.toml", contents);

    let diags = match MatcherConfig::parse(files.source(file_id)) {
        Ok(cfg) => match cfg.validate(file_id) {
            Ok(matcher) => return Ok(matcher),
            Err(diags) => diags,
        },
        Err(err) => spdx_engine::findings::cfg::deser_diagnostics(&err, file_id),
    };

    Err(diag::render(&files, &diags).unwrap())
}
