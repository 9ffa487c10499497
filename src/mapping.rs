//! Maps the free-text license names that package manifests declare, eg.
//! `The Apache Software License, Version 2.0`, onto SPDX expressions.
//!
//! The mapping is purely data driven, a declared string is looked up in a
//! curated alias table and, failing that, in the license catalog. There is no
//! fuzzy matching, a string either matches exactly (ignoring case and
//! surrounding whitespace) or it is unmappable.

mod table;

use crate::{
    catalog,
    expr::{CompoundExpression, LicenseIdExpression, LicenseRefExpression, SpdxOperator},
    SpdxExpression,
};

/// Looks up the lowercased key in the alias table
fn lookup(key: &str) -> Option<&'static str> {
    table::ALIASES
        .binary_search_by(|(alias, _)| (*alias).cmp(key))
        .ok()
        .map(|i| table::ALIASES[i].1)
}

/// Maps a declared license string onto an SPDX expression.
///
/// The string is trimmed and folded to lowercase, then looked up in the alias
/// table. If there is no alias, a case-insensitive catalog lookup of a license
/// with that identifier is attempted, a trailing `+` is kept as the "or later"
/// operator. `None` means the string is unmappable,
/// it is up to the caller what to do about that, see
/// [`license_ref_placeholder`] for one option.
pub fn map(declared: &str) -> Option<SpdxExpression> {
    let trimmed = declared.trim();
    if trimmed.is_empty() {
        return None;
    }

    let key = trimmed.to_lowercase();

    if let Some(expression) = lookup(&key) {
        return match SpdxExpression::parse(expression) {
            Ok(expr) => Some(expr),
            Err(err) => {
                log::error!("alias '{key}' maps to an invalid expression: {err}");
                None
            }
        };
    }

    if let Some(lic) = catalog::license_ignore_case(trimmed) {
        return Some(SpdxExpression::from_catalog_license(lic.name));
    }

    if let Some(lic) = trimmed
        .strip_suffix('+')
        .and_then(|stem| catalog::license_ignore_case(stem.trim_end()))
    {
        return SpdxExpression::license_or_later(lic.name).ok();
    }

    log::trace!("unable to map declared license '{trimmed}'");
    None
}

/// Iterates over every `(declared, expression)` pair of the alias table, in
/// key order
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    table::ALIASES.iter().copied()
}

/// Rewrites every license of the expression through the alias table and the
/// catalog, eg. `gpl-2.0+ AND apache-2.0` becomes
/// `GPL-2.0-or-later AND Apache-2.0`. Licenses that can't be mapped, and
/// `LicenseRef-`s, are kept as they are.
pub fn normalize(expr: &SpdxExpression) -> SpdxExpression {
    match expr {
        SpdxExpression::LicenseId(lic) => normalize_license(lic).unwrap_or_else(|| expr.clone()),
        SpdxExpression::LicenseRef(_) => expr.clone(),
        SpdxExpression::LicenseException(exc) => catalog::exception_ignore_case(exc.id())
            .map_or_else(|| expr.clone(), |e| SpdxExpression::from_catalog_exception(e.name)),
        SpdxExpression::Compound(c) => {
            let left = normalize(c.left());
            let right = normalize(c.right());

            if c.operator() == SpdxOperator::With {
                // An alias can expand a license into an expression that can't
                // be the left hand side of a WITH, so keep the original then
                SpdxExpression::compound(left, SpdxOperator::With, right.clone())
                    .or_else(|_err| {
                        SpdxExpression::compound(c.left().clone(), SpdxOperator::With, right)
                    })
                    .unwrap_or_else(|_err| expr.clone())
            } else {
                CompoundExpression::new_unchecked(left, c.operator(), right).into()
            }
        }
    }
}

fn normalize_license(lic: &LicenseIdExpression) -> Option<SpdxExpression> {
    // The table knows about the deprecated `+` forms, eg. `GPL-2.0+`
    if let Some(mapped) = map(&lic.to_string()) {
        return Some(mapped);
    }

    let entry = catalog::license_ignore_case(lic.id())?;

    let normalized = if lic.has_or_later_operator() {
        SpdxExpression::license_or_later(entry.name).ok()?
    } else {
        SpdxExpression::from_catalog_license(entry.name)
    };

    Some(normalized)
}

/// Builds a `LicenseRef-<namespace>-<slug>` reference for a declared license
/// that could not be mapped, the slug being the declared string lowercased
/// with every run of characters other than ASCII letters and digits replaced
/// by a single `-`.
pub fn license_ref_placeholder(namespace: &str, declared: &str) -> SpdxExpression {
    let namespace = slug(namespace);
    let mut declared = slug(declared);
    if declared.is_empty() {
        declared.push_str("unknown");
    }

    let id = if namespace.is_empty() {
        format!("LicenseRef-{declared}")
    } else {
        format!("LicenseRef-{namespace}-{declared}")
    };

    SpdxExpression::LicenseRef(LicenseRefExpression::new_unchecked(id))
}

fn slug(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());

    for c in s.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
