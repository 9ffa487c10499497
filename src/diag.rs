//! Rendering of expression parse errors and configuration errors as
//! [`codespan_reporting`] diagnostics, pointing at the exact location of the
//! problem in the source text.

use crate::{
    expr::{Lexer, ParseError, Strictness, Token},
    PathBuf,
};
use std::{collections::BTreeMap, ops::Range};

pub use codespan_reporting::diagnostic::Severity;

pub type FileId = usize;

pub type FilesErr = codespan_reporting::files::Error;
pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<FileId>;
pub type Label = codespan_reporting::diagnostic::Label<FileId>;

/// The codes attached to the diagnostics this crate emits
#[derive(strum::EnumIter, strum::IntoStaticStr, Copy, Clone, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum DiagnosticCode {
    /// An SPDX expression could not be parsed
    ParseError,
    /// An expression uses identifiers that the requested strictness forbids
    DisallowedIdentifier,
    /// A declared license could not be mapped to an SPDX expression
    UnmappedLicense,
    /// A license file pattern is not a valid glob
    InvalidGlob,
    /// The configuration could not be deserialized
    InvalidConfig,
}

impl DiagnosticCode {
    #[inline]
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

struct File {
    name: PathBuf,
    source: String,
    line_starts: Vec<u32>,
}

/// Implementation of [`codespan_reporting::files::Files`] which can also
/// query the [`FileId`] of a path. Expressions given on the command line are
/// added as pseudo files so their errors can be rendered the same way.
#[derive(Default)]
pub struct Files {
    files: Vec<File>,
    map: BTreeMap<PathBuf, FileId>,
}

impl Files {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn id_for_path(&self, path: &crate::Path) -> Option<FileId> {
        self.map.get(path).copied()
    }

    /// Adds a new file, if the path has already been added its source is
    /// replaced and the existing id is returned
    pub fn add(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> FileId {
        let name = path.into();
        let source = source.into();

        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| (i + 1) as u32))
            .collect();

        if let Some(id) = self.id_for_path(&name) {
            let file = &mut self.files[id];
            file.source = source;
            file.line_starts = line_starts;
            return id;
        }

        let id = self.files.len();
        self.map.insert(name.clone(), id);
        self.files.push(File {
            name,
            source,
            line_starts,
        });

        id
    }

    /// The source of the file, or an empty string for an unknown id
    #[inline]
    pub fn source(&self, id: FileId) -> &str {
        self.files.get(id).map_or("", |f| f.source.as_str())
    }
}

impl<'f> codespan_reporting::files::Files<'f> for Files {
    type FileId = FileId;
    type Name = &'f crate::Path;
    type Source = &'f str;

    fn source(&'f self, id: Self::FileId) -> Result<Self::Source, FilesErr> {
        self.files
            .get(id)
            .map(|f| f.source.as_str())
            .ok_or(FilesErr::FileMissing)
    }

    fn name(&'f self, id: Self::FileId) -> Result<Self::Name, FilesErr> {
        self.files
            .get(id)
            .map(|f| f.name.as_path())
            .ok_or(FilesErr::FileMissing)
    }

    fn line_index(&'f self, id: Self::FileId, byte_index: usize) -> Result<usize, FilesErr> {
        let file = self.files.get(id).ok_or(FilesErr::FileMissing)?;

        let byte_index: u32 = byte_index
            .try_into()
            .map_err(|_e| FilesErr::IndexTooLarge {
                given: byte_index,
                max: file.source.len(),
            })?;

        Ok(match file.line_starts.binary_search(&byte_index) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        })
    }

    fn line_range(&'f self, id: Self::FileId, line_index: usize) -> Result<Range<usize>, FilesErr> {
        let file = self.files.get(id).ok_or(FilesErr::FileMissing)?;

        let start = *file
            .line_starts
            .get(line_index)
            .ok_or(FilesErr::LineTooLarge {
                given: line_index,
                max: file.line_starts.len(),
            })?;
        let end = file
            .line_starts
            .get(line_index + 1)
            .map_or(file.source.len(), |ls| *ls as usize);

        Ok(start as usize..end)
    }
}

/// Converts an expression parse error into a diagnostic, the expression is
/// expected to be the entire contents of `file_id`, or to start at `offset`
/// within it
pub fn parse_error(err: &ParseError, file_id: FileId, offset: usize) -> Diagnostic {
    Diagnostic::error()
        .with_message("failed to parse SPDX license expression")
        .with_code(DiagnosticCode::ParseError.as_str())
        .with_labels(vec![Label::primary(
            file_id,
            err.span.start + offset..err.span.end + offset,
        )
        .with_message(err.reason.to_string())])
}

/// Reports identifiers rejected by a [`Strictness`], labelling each occurrence
/// in `original`, the expression text that is the entire contents of `file_id`
pub fn disallowed_identifiers(
    original: &str,
    invalid: &[&str],
    strictness: Strictness,
    file_id: FileId,
) -> Diagnostic {
    let labels = Lexer::new(original)
        .filter_map(Result::ok)
        .filter(|lt| matches!(lt.token, Token::Term(term) if invalid.contains(&term)))
        .map(|lt| {
            Label::primary(file_id, lt.span)
                .with_message(format!("not allowed by `{strictness}`"))
        })
        .collect();

    Diagnostic::error()
        .with_message(format!("identifiers not allowed by `{strictness}`"))
        .with_code(DiagnosticCode::DisallowedIdentifier.as_str())
        .with_labels(labels)
}

/// Reports a declared license that could not be mapped, `file_id` holds
/// exactly the declared string
pub fn unmapped_license(declared: &str, file_id: FileId) -> Diagnostic {
    Diagnostic::error()
        .with_message("unable to map declared license to an SPDX expression")
        .with_code(DiagnosticCode::UnmappedLicense.as_str())
        .with_labels(vec![Label::primary(file_id, 0..declared.len())
            .with_message("no alias or catalog entry matches")])
        .with_notes(vec![
            "use `--namespace` to substitute a `LicenseRef-` placeholder".to_owned(),
        ])
}

/// The rendering configuration shared by the binary and tests
pub fn codespan_config() -> codespan_reporting::term::Config {
    let mut config = codespan_reporting::term::Config::default();
    config.chars.note_bullet = '├';
    config.chars.single_primary_caret = '━';
    config.chars.single_secondary_caret = '─';
    config
}

/// Renders diagnostics to a string without colors
pub fn render(files: &Files, diags: &[Diagnostic]) -> Result<String, FilesErr> {
    let mut term = codespan_reporting::term::termcolor::NoColor::new(Vec::new());
    let config = codespan_config();

    for diag in diags {
        codespan_reporting::term::emit(&mut term, &config, files, diag)?;
    }

    Ok(String::from_utf8_lossy(&term.into_inner()).into_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_unique() {
        let mut unique = std::collections::BTreeSet::<&'static str>::new();

        for code in DiagnosticCode::iter() {
            if !unique.insert(code.as_str()) {
                panic!("existing code '{code}'");
            }
        }

        insta::assert_debug_snapshot!(unique, @r###"
        {
            "disallowed-identifier",
            "invalid-config",
            "invalid-glob",
            "parse-error",
            "unmapped-license",
        }
        "###);
    }

    #[test]
    fn tracks_lines() {
        use codespan_reporting::files::Files as _;

        let mut files = Files::new();
        let id = files.add("a.toml", "one\ntwo\nthree");

        assert_eq!(files.line_index(id, 0).unwrap(), 0);
        assert_eq!(files.line_index(id, 5).unwrap(), 1);
        assert_eq!(files.line_range(id, 1).unwrap(), 4..8);
        assert_eq!(files.line_range(id, 2).unwrap(), 8..13);

        assert_eq!(files.add("a.toml", "replaced"), id);
        assert_eq!(files.source(id), "replaced");
    }

    #[test]
    fn renders_parse_errors() {
        let mut files = Files::new();
        let expr = "MIT OR";
        let id = files.add("<expr>", expr);

        let err = crate::SpdxExpression::parse(expr).unwrap_err();
        let rendered = render(&files, &[parse_error(&err, id, 0)]).unwrap();

        assert!(rendered.contains("error[parse-error]: failed to parse SPDX license expression"));
        assert!(rendered.contains("expected one of `<license>`, `(` here"));
    }

    #[test]
    fn labels_disallowed_identifiers() {
        let mut files = Files::new();
        let expr = "MIT OR Made-Up-1.0 AND (Made-Up-1.0 OR GPL-2.0)";
        let id = files.add("<expr>", expr);

        let parsed = crate::SpdxExpression::parse(expr).unwrap();
        let invalid = parsed.invalid_ids(Strictness::AllowCurrent);
        let diag = disallowed_identifiers(expr, &invalid, Strictness::AllowCurrent, id);

        assert_eq!(diag.code.as_deref(), Some("disallowed-identifier"));

        let labelled: Vec<_> = diag.labels.iter().map(|l| &expr[l.range.clone()]).collect();
        assert_eq!(labelled, ["Made-Up-1.0", "Made-Up-1.0", "GPL-2.0"]);

        let rendered = render(&files, &[diag]).unwrap();
        assert!(rendered.contains("error[disallowed-identifier]"));
        assert!(rendered.contains("not allowed by `allow-current`"));
    }

    #[test]
    fn renders_unmapped_licenses() {
        let mut files = Files::new();
        let declared = "Some Vendor EULA";
        let id = files.add("<declared 1>", declared);

        let rendered = render(&files, &[unmapped_license(declared, id)]).unwrap();

        assert!(rendered.contains(
            "error[unmapped-license]: unable to map declared license to an SPDX expression"
        ));
        assert!(rendered.contains("no alias or catalog entry matches"));
    }
}
