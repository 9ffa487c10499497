use crate::Path;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

/// The file names commonly used for files that contain the license(s) of an
/// entire project
pub const DEFAULT_LICENSE_FILE_PATTERNS: &[&str] = &[
    "copying*",
    "copyright",
    "licence*",
    "license*",
    "*.licence",
    "*.license",
    "patents",
    "unlicence",
    "unlicense",
];

/// Compiles a single license file pattern, matching is case-insensitive
pub(crate) fn glob(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
}

/// Determines whether a path is a license file. Patterns without a `/` are
/// matched against the file name, wherever the file is in the tree, while
/// patterns containing a `/` are matched against the whole relative path.
#[derive(Clone, Debug)]
pub struct LicenseFileMatcher {
    patterns: Vec<String>,
    names: GlobSet,
    paths: GlobSet,
}

impl LicenseFileMatcher {
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = GlobSetBuilder::new();
        let mut paths = GlobSetBuilder::new();

        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();

        for pattern in &patterns {
            let compiled = glob(pattern)?;
            if pattern.contains('/') {
                paths.add(compiled);
            } else {
                names.add(compiled);
            }
        }

        Ok(Self {
            names: names.build()?,
            paths: paths.build()?,
            patterns,
        })
    }

    /// The patterns the matcher was built from
    #[inline]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = Path::new(path);

        if !self.paths.is_empty() && self.paths.is_match(path.as_str()) {
            return true;
        }

        path.file_name()
            .map_or(false, |name| self.names.is_match(name))
    }
}

impl Default for LicenseFileMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_LICENSE_FILE_PATTERNS.iter().copied())
            .expect("default license file patterns are valid globs")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_default_names() {
        let lfm = LicenseFileMatcher::default();

        for path in [
            "LICENSE",
            "LICENSE-MIT",
            "sub/dir/License.txt",
            "COPYING",
            "copying.lesser",
            "COPYRIGHT",
            "foo.LICENSE",
            "PATENTS",
            "UNLICENSE",
            "LICENCE.md",
        ] {
            assert!(lfm.matches(path), "{path} should be a license file");
        }

        for path in ["src/main.rs", "README.md", "my-license-notes", "COPYRIGHT.txt"] {
            assert!(!lfm.matches(path), "{path} should not be a license file");
        }
    }

    #[test]
    fn matches_paths() {
        let lfm = LicenseFileMatcher::new(["docs/*.txt", "NOTICE"]).unwrap();

        assert!(lfm.matches("docs/terms.txt"));
        assert!(!lfm.matches("other/docs/terms.txt"));
        assert!(lfm.matches("deep/down/notice"));
        assert!(!lfm.matches("LICENSE"));
    }

    #[test]
    fn rejects_invalid_patterns() {
        assert!(LicenseFileMatcher::new(["licen[se"]).is_err());
    }
}
