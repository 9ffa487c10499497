//! The typed tree for SPDX license expressions.
//!
//! An expression is either a single license identifier (optionally with the
//! `+` "or later" operator), a `LicenseRef-` reference, a license exception
//! (which may only appear on the right hand side of `WITH`), or a binary
//! compound of two expressions joined by `AND`, `OR` or `WITH`.
//!
//! Expressions are immutable once built, either by [`SpdxExpression::parse`]
//! or by the checked combinators [`SpdxExpression::and`],
//! [`SpdxExpression::or`] and [`SpdxExpression::with`]. Equality is purely
//! structural, `A AND B` is not equal to `B AND A`.

mod error;
mod lexer;
mod parser;

pub use error::{ConstructionError, ParseError, Reason};
pub use lexer::{Lexer, LexerToken, Token};

/// The maximum depth of an expression tree, a single license has a depth of
/// 1 and every operator adds one level. Every operation on a tree recurses
/// through it, so deeper trees are rejected both when parsing and when
/// building them.
pub const MAX_DEPTH: usize = 256;

use crate::catalog;
use smallvec::SmallVec;
use std::{collections::BTreeSet, fmt};

/// The operators that combine two expressions
#[derive(
    strum::Display,
    strum::EnumString,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SpdxOperator {
    And,
    Or,
    With,
}

impl SpdxOperator {
    /// The binding priority of the operator, higher binds tighter
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            Self::Or => 0,
            Self::And => 1,
            Self::With => 2,
        }
    }
}

/// How strictly license identifiers are checked against the catalog
#[derive(strum::Display, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum Strictness {
    /// Any syntactically valid identifier is accepted
    #[default]
    AllowAny,
    /// Identifiers must be in the catalog, deprecated ones are accepted
    AllowDeprecated,
    /// Identifiers must be in the catalog and not be deprecated
    AllowCurrent,
}

/// `AND`, `OR` and `WITH` in any case can't be identifiers
#[inline]
fn is_operator_keyword(id: &str) -> bool {
    id.parse::<SpdxOperator>().is_ok()
}

#[inline]
pub(crate) fn is_idstring(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// Splits a license reference into its optional document reference and the
/// name following `LicenseRef-`
fn split_license_ref(id: &str) -> Option<(Option<&str>, &str)> {
    let (doc, lref) = match id.strip_prefix("DocumentRef-") {
        Some(rest) => {
            let (doc, lref) = rest.split_once(':')?;
            if !is_idstring(doc) {
                return None;
            }
            (Some(doc), lref)
        }
        None => (None, id),
    };

    let name = lref.strip_prefix("LicenseRef-")?;
    is_idstring(name).then_some((doc, name))
}

#[inline]
pub(crate) fn is_license_ref(id: &str) -> bool {
    id.starts_with("LicenseRef-") || id.starts_with("DocumentRef-") || id.contains(':')
}

/// Determines if the identifier names a license exception, either because it
/// is in the catalog, or because it lexically looks like one, ie. it ends
/// with `-exception` or contains `-exception-<id>`
pub(crate) fn is_exception_id(id: &str) -> bool {
    if catalog::exception(id).is_some() {
        return true;
    }

    let lower = id.to_ascii_lowercase();
    if lower.ends_with("-exception") {
        return true;
    }

    lower
        .match_indices("-exception-")
        .any(|(i, m)| is_idstring(&lower[i + m.len()..]))
}

/// A single SPDX license identifier, eg. `MIT` or `GPL-2.0+`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LicenseIdExpression {
    id: String,
    or_later: bool,
}

impl LicenseIdExpression {
    pub fn new(id: impl Into<String>, or_later: bool) -> Result<Self, ConstructionError> {
        let id = id.into();
        if !is_idstring(&id) || is_operator_keyword(&id) || is_license_ref(&id) {
            return Err(ConstructionError::InvalidIdentifier(id));
        }

        if catalog::license(&id).is_none() && is_exception_id(&id) {
            return Err(ConstructionError::ExceptionOperand(id));
        }

        Ok(Self { id, or_later })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True if the license was suffixed with `+`, meaning "this version or
    /// any later version"
    #[inline]
    pub fn has_or_later_operator(&self) -> bool {
        self.or_later
    }

    /// The catalog entry for the identifier, if it is a known license
    #[inline]
    pub fn catalog_entry(&self) -> Option<catalog::LicenseId> {
        catalog::license(&self.id)
    }
}

impl fmt::Display for LicenseIdExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if self.or_later {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// A reference to a license that is not in the catalog, of the form
/// `LicenseRef-<name>` or `DocumentRef-<doc>:LicenseRef-<name>`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LicenseRefExpression {
    id: String,
}

impl LicenseRefExpression {
    pub fn new(id: impl Into<String>) -> Result<Self, ConstructionError> {
        let id = id.into();
        if split_license_ref(&id).is_none() {
            return Err(ConstructionError::InvalidIdentifier(id));
        }

        Ok(Self { id })
    }

    #[inline]
    pub(crate) fn new_unchecked(id: String) -> Self {
        Self { id }
    }

    /// The full reference, including the `LicenseRef-` prefix
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The document the reference is scoped to, if any
    #[inline]
    pub fn document_ref(&self) -> Option<&str> {
        split_license_ref(&self.id).and_then(|(doc, _)| doc)
    }

    /// The name following `LicenseRef-`
    #[inline]
    pub fn license_ref(&self) -> &str {
        split_license_ref(&self.id).map_or(self.id.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for LicenseRefExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A license exception, only valid as the right hand side of `WITH`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LicenseExceptionExpression {
    id: String,
}

impl LicenseExceptionExpression {
    pub fn new(id: impl Into<String>) -> Result<Self, ConstructionError> {
        let id = id.into();
        let well_formed = if is_license_ref(&id) {
            split_license_ref(&id).is_some()
        } else {
            is_idstring(&id)
        };

        if !well_formed || is_operator_keyword(&id) {
            return Err(ConstructionError::InvalidIdentifier(id));
        }

        if !is_exception_id(&id) {
            return Err(ConstructionError::NotAnException(id));
        }

        Ok(Self { id })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The catalog entry for the exception, if it is a known SPDX exception
    #[inline]
    pub fn catalog_entry(&self) -> Option<catalog::ExceptionId> {
        catalog::exception(&self.id)
    }
}

impl fmt::Display for LicenseExceptionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Two expressions joined by an operator
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompoundExpression {
    left: Box<SpdxExpression>,
    operator: SpdxOperator,
    right: Box<SpdxExpression>,
    depth: usize,
}

impl CompoundExpression {
    /// Joins two expressions, validating that a `WITH` only ever combines a
    /// single license with an exception, and that exceptions are never used
    /// with `AND`/`OR`
    pub fn new(
        left: SpdxExpression,
        operator: SpdxOperator,
        right: SpdxExpression,
    ) -> Result<Self, ConstructionError> {
        if operator == SpdxOperator::With {
            if !matches!(
                left,
                SpdxExpression::LicenseId(_) | SpdxExpression::LicenseRef(_)
            ) {
                return Err(ConstructionError::WithRequiresSimpleLicense);
            }

            if !matches!(right, SpdxExpression::LicenseException(_)) {
                return Err(ConstructionError::NotAnException(right.to_string()));
            }
        } else {
            for operand in [&left, &right] {
                if let SpdxExpression::LicenseException(exc) = operand {
                    return Err(ConstructionError::ExceptionOperand(exc.id.clone()));
                }
            }
        }

        let compound = Self::new_unchecked(left, operator, right);
        if compound.depth > MAX_DEPTH {
            return Err(ConstructionError::TooDeep);
        }

        Ok(compound)
    }

    #[inline]
    pub(crate) fn new_unchecked(
        left: SpdxExpression,
        operator: SpdxOperator,
        right: SpdxExpression,
    ) -> Self {
        let depth = left.depth().max(right.depth()) + 1;

        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            depth,
        }
    }

    #[inline]
    pub fn left(&self) -> &SpdxExpression {
        &self.left
    }

    #[inline]
    pub fn operator(&self) -> SpdxOperator {
        self.operator
    }

    #[inline]
    pub fn right(&self) -> &SpdxExpression {
        &self.right
    }

    /// The number of levels in the tree rooted at this node
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl fmt::Display for CompoundExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priority = self.operator.priority();

        // Operators are left associative, so a right operand of the same
        // priority needs parens to keep its grouping
        let left_parens = self
            .left
            .as_compound()
            .map_or(false, |c| c.operator.priority() < priority);
        let right_parens = self
            .right
            .as_compound()
            .map_or(false, |c| c.operator.priority() <= priority);

        if left_parens {
            write!(f, "({})", self.left)?;
        } else {
            write!(f, "{}", self.left)?;
        }

        write!(f, " {} ", self.operator)?;

        if right_parens {
            write!(f, "({})", self.right)
        } else {
            write!(f, "{}", self.right)
        }
    }
}

/// A parsed, or programmatically built, SPDX license expression
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpdxExpression {
    LicenseId(LicenseIdExpression),
    LicenseRef(LicenseRefExpression),
    LicenseException(LicenseExceptionExpression),
    Compound(CompoundExpression),
}

impl SpdxExpression {
    /// Parses an expression, see the crate documentation for the grammar
    #[inline]
    pub fn parse(original: &str) -> Result<Self, ParseError> {
        parser::parse(original)
    }

    /// A single license identifier
    #[inline]
    pub fn license(id: impl Into<String>) -> Result<Self, ConstructionError> {
        LicenseIdExpression::new(id, false).map(Self::LicenseId)
    }

    /// A single license identifier with the `+` operator
    #[inline]
    pub fn license_or_later(id: impl Into<String>) -> Result<Self, ConstructionError> {
        LicenseIdExpression::new(id, true).map(Self::LicenseId)
    }

    /// A `LicenseRef-`
    #[inline]
    pub fn license_ref(id: impl Into<String>) -> Result<Self, ConstructionError> {
        LicenseRefExpression::new(id).map(Self::LicenseRef)
    }

    /// A license exception, to be used with [`Self::with`]
    #[inline]
    pub fn exception(id: impl Into<String>) -> Result<Self, ConstructionError> {
        LicenseExceptionExpression::new(id).map(Self::LicenseException)
    }

    #[inline]
    pub(crate) fn from_catalog_license(id: &str) -> Self {
        Self::LicenseId(LicenseIdExpression {
            id: id.to_owned(),
            or_later: false,
        })
    }

    #[inline]
    pub(crate) fn from_catalog_exception(id: &str) -> Self {
        Self::LicenseException(LicenseExceptionExpression { id: id.to_owned() })
    }

    /// Joins two expressions with the specified operator
    #[inline]
    pub fn compound(
        left: Self,
        operator: SpdxOperator,
        right: Self,
    ) -> Result<Self, ConstructionError> {
        CompoundExpression::new(left, operator, right).map(Self::Compound)
    }

    /// `self AND other`
    #[inline]
    pub fn and(self, other: Self) -> Result<Self, ConstructionError> {
        Self::compound(self, SpdxOperator::And, other)
    }

    /// `self OR other`
    #[inline]
    pub fn or(self, other: Self) -> Result<Self, ConstructionError> {
        Self::compound(self, SpdxOperator::Or, other)
    }

    /// `self WITH exception`, fails if `exception` is not an exception or
    /// `self` is not a single license
    #[inline]
    pub fn with(self, exception: Self) -> Result<Self, ConstructionError> {
        Self::compound(self, SpdxOperator::With, exception)
    }

    /// The number of levels in the tree, at most [`MAX_DEPTH`] for parsed
    /// or checked expressions
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            Self::Compound(c) => c.depth,
            _ => 1,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&CompoundExpression> {
        match self {
            Self::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// True for a single license, license reference, or exception
    #[inline]
    pub fn is_simple(&self) -> bool {
        !matches!(self, Self::Compound(_))
    }

    /// True if the expression is a single license, optionally with an
    /// exception, ie. it contains no `AND` or `OR`
    pub fn is_single_license(&self) -> bool {
        match self {
            Self::Compound(c) => c.operator == SpdxOperator::With,
            _ => true,
        }
    }

    /// Visits every simple node of the tree, left to right
    fn visit_simple<'e>(&'e self, f: &mut impl FnMut(&'e Self)) {
        match self {
            Self::Compound(c) => {
                c.left.visit_simple(f);
                c.right.visit_simple(f);
            }
            simple => f(simple),
        }
    }

    /// The distinct licenses referenced by the expression, sorted. Exceptions
    /// are not included, and the `+` operator is kept
    pub fn licenses(&self) -> Vec<String> {
        let mut licenses = BTreeSet::new();
        self.visit_simple(&mut |e| match e {
            Self::LicenseId(lic) => {
                licenses.insert(lic.to_string());
            }
            Self::LicenseRef(lr) => {
                licenses.insert(lr.to_string());
            }
            _ => {}
        });

        licenses.into_iter().collect()
    }

    /// The distinct exceptions referenced by the expression, sorted
    pub fn exceptions(&self) -> Vec<&str> {
        let mut exceptions = BTreeSet::new();
        self.visit_simple(&mut |e| {
            if let Self::LicenseException(exc) = e {
                exceptions.insert(exc.id.as_str());
            }
        });

        exceptions.into_iter().collect()
    }

    /// True if the expression contains an `OR`, meaning a licensee can choose
    /// between licenses
    pub fn offers_choice(&self) -> bool {
        match self {
            Self::Compound(c) => {
                c.operator == SpdxOperator::Or || c.left.offers_choice() || c.right.offers_choice()
            }
            _ => false,
        }
    }

    /// Every single license leaf of the expression, a `X WITH E` compound is
    /// regarded as a single leaf
    pub fn decompose(&self) -> BTreeSet<SpdxExpression> {
        let mut leaves = BTreeSet::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut BTreeSet<SpdxExpression>) {
        match self {
            Self::Compound(c) if c.operator != SpdxOperator::With => {
                c.left.collect_leaves(leaves);
                c.right.collect_leaves(leaves);
            }
            leaf => {
                leaves.insert(leaf.clone());
            }
        }
    }

    /// Converts the expression into disjunctive normal form, a list of
    /// alternatives where each alternative is the set of single license
    /// leaves that all apply together. `OR` is fully distributed over
    /// `AND`, so `(A OR B) AND C` yields `[{A, C}, {B, C}]`.
    ///
    /// The alternatives are deduplicated and kept in the order they first
    /// appear in the expression.
    pub fn disjunctive_normal_form(&self) -> Vec<BTreeSet<SpdxExpression>> {
        fn push_unique(
            out: &mut Vec<BTreeSet<SpdxExpression>>,
            conjunction: BTreeSet<SpdxExpression>,
        ) {
            if !out.contains(&conjunction) {
                out.push(conjunction);
            }
        }

        match self {
            Self::Compound(c) if c.operator == SpdxOperator::Or => {
                let mut out = c.left.disjunctive_normal_form();
                for conjunction in c.right.disjunctive_normal_form() {
                    push_unique(&mut out, conjunction);
                }
                out
            }
            Self::Compound(c) if c.operator == SpdxOperator::And => {
                let left = c.left.disjunctive_normal_form();
                let right = c.right.disjunctive_normal_form();

                let mut out = Vec::with_capacity(left.len() * right.len());
                for l in &left {
                    for r in &right {
                        push_unique(&mut out, l.union(r).cloned().collect());
                    }
                }
                out
            }
            leaf => vec![std::iter::once(leaf.clone()).collect()],
        }
    }

    /// Every alternative of the [disjunctive normal form](Self::disjunctive_normal_form),
    /// rebuilt as an expression of `AND`ed leaves
    pub fn valid_choices(&self) -> Vec<SpdxExpression> {
        self.disjunctive_normal_form()
            .into_iter()
            .filter_map(|conjunction| {
                conjunction.into_iter().reduce(|acc, leaf| {
                    Self::Compound(CompoundExpression::new_unchecked(
                        acc,
                        SpdxOperator::And,
                        leaf,
                    ))
                })
            })
            .collect()
    }

    /// Checks whether `choice` is one of the alternatives this expression
    /// offers. The choice must not itself offer a choice.
    pub fn is_valid_choice(&self, choice: &SpdxExpression) -> bool {
        let mut dnf = choice.disjunctive_normal_form();
        if dnf.len() != 1 {
            return false;
        }

        let Some(chosen) = dnf.pop() else {
            return false;
        };

        self.disjunctive_normal_form().contains(&chosen)
    }

    /// Removes duplicate operands from chains of the same operator, keeping
    /// the first occurrence of each, so `A OR B OR A` becomes `A OR B`. The
    /// grouping of different operators is left intact.
    pub fn simplify(&self) -> SpdxExpression {
        let Self::Compound(c) = self else {
            return self.clone();
        };

        if c.operator == SpdxOperator::With {
            return self.clone();
        }

        let mut operands = SmallVec::<[&SpdxExpression; 4]>::new();
        flatten(self, c.operator, &mut operands);

        let mut unique: Vec<SpdxExpression> = Vec::with_capacity(operands.len());
        for operand in operands {
            let simplified = operand.simplify();
            if !unique.contains(&simplified) {
                unique.push(simplified);
            }
        }

        unique
            .into_iter()
            .reduce(|acc, operand| {
                Self::Compound(CompoundExpression::new_unchecked(acc, c.operator, operand))
            })
            .unwrap_or_else(|| self.clone())
    }

    /// The license and exception identifiers that don't satisfy the
    /// strictness, in the order they appear
    pub fn invalid_ids(&self, strictness: Strictness) -> Vec<&str> {
        let mut invalid = Vec::new();

        if strictness == Strictness::AllowAny {
            return invalid;
        }

        let allow_deprecated = strictness == Strictness::AllowDeprecated;

        self.visit_simple(&mut |e| {
            let (id, entry) = match e {
                Self::LicenseId(lic) => (
                    lic.id.as_str(),
                    lic.catalog_entry().map(catalog::Entry::License),
                ),
                Self::LicenseException(exc) if !is_license_ref(&exc.id) => (
                    exc.id.as_str(),
                    exc.catalog_entry().map(catalog::Entry::Exception),
                ),
                _ => return,
            };

            match entry {
                Some(entry) if allow_deprecated || !entry.is_deprecated() => {}
                _ => invalid.push(id),
            }
        });

        invalid
    }

    /// Checks the identifiers of the expression against the catalog,
    /// `LicenseRef-`s are always valid
    #[inline]
    pub fn is_valid(&self, strictness: Strictness) -> bool {
        self.invalid_ids(strictness).is_empty()
    }
}

fn flatten<'e>(
    expr: &'e SpdxExpression,
    operator: SpdxOperator,
    operands: &mut SmallVec<[&'e SpdxExpression; 4]>,
) {
    match expr {
        SpdxExpression::Compound(c) if c.operator == operator => {
            flatten(&c.left, operator, operands);
            flatten(&c.right, operator, operands);
        }
        other => operands.push(other),
    }
}

impl fmt::Display for SpdxExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LicenseId(lic) => lic.fmt(f),
            Self::LicenseRef(lr) => lr.fmt(f),
            Self::LicenseException(exc) => exc.fmt(f),
            Self::Compound(c) => c.fmt(f),
        }
    }
}

impl std::str::FromStr for SpdxExpression {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<LicenseIdExpression> for SpdxExpression {
    fn from(lic: LicenseIdExpression) -> Self {
        Self::LicenseId(lic)
    }
}

impl From<LicenseRefExpression> for SpdxExpression {
    fn from(lr: LicenseRefExpression) -> Self {
        Self::LicenseRef(lr)
    }
}

impl From<LicenseExceptionExpression> for SpdxExpression {
    fn from(exc: LicenseExceptionExpression) -> Self {
        Self::LicenseException(exc)
    }
}

impl From<CompoundExpression> for SpdxExpression {
    fn from(c: CompoundExpression) -> Self {
        Self::Compound(c)
    }
}

impl serde::Serialize for SpdxExpression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for SpdxExpression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
        Self::parse(&s).map_err(|err| serde::de::Error::custom(err.reason))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lic(id: &str) -> SpdxExpression {
        SpdxExpression::license(id).unwrap()
    }

    fn exc(id: &str) -> SpdxExpression {
        SpdxExpression::exception(id).unwrap()
    }

    #[test]
    fn operator_priorities() {
        assert!(SpdxOperator::With.priority() > SpdxOperator::And.priority());
        assert!(SpdxOperator::And.priority() > SpdxOperator::Or.priority());
        assert_eq!("with".parse::<SpdxOperator>().unwrap(), SpdxOperator::With);
        assert_eq!("Or".parse::<SpdxOperator>().unwrap(), SpdxOperator::Or);
        assert_eq!(SpdxOperator::And.to_string(), "AND");
    }

    #[test]
    fn recognizes_exceptions() {
        assert!(is_exception_id("Classpath-exception-2.0"));
        assert!(is_exception_id("LLVM-exception"));
        assert!(is_exception_id("Linux-syscall-note"));
        assert!(is_exception_id("LicenseRef-scancode-generic-exception"));
        assert!(!is_exception_id("MIT"));
        assert!(!is_exception_id("Foo-exception-"));
    }

    #[test]
    fn with_requires_an_exception() {
        assert_eq!(
            lic("Apache-2.0").with(lic("MIT")),
            Err(ConstructionError::NotAnException("MIT".to_owned()))
        );

        let and = lic("MIT").and(lic("Apache-2.0")).unwrap();
        assert_eq!(
            and.with(exc("LLVM-exception")),
            Err(ConstructionError::WithRequiresSimpleLicense)
        );

        let with = lic("Apache-2.0").with(exc("LLVM-exception")).unwrap();
        assert_eq!(with.to_string(), "Apache-2.0 WITH LLVM-exception");
    }

    #[test]
    fn exceptions_are_not_operands() {
        assert_eq!(
            lic("MIT").or(exc("LLVM-exception")),
            Err(ConstructionError::ExceptionOperand("LLVM-exception".to_owned()))
        );
        assert!(SpdxExpression::license("Classpath-exception-2.0").is_err());
        // Deprecated license ids that happen to end in -exception are still
        // licenses
        assert!(SpdxExpression::license("GPL-2.0-with-classpath-exception").is_ok());
    }

    #[test]
    fn validates_identifiers() {
        assert!(SpdxExpression::license("MIT OR X11").is_err());
        assert!(SpdxExpression::license("-MIT").is_err());
        assert!(SpdxExpression::license_ref("MIT").is_err());
        assert!(SpdxExpression::license_ref("LicenseRef-").is_err());

        let lr = LicenseRefExpression::new("DocumentRef-spdx-tool-1.2:LicenseRef-MIT-Style-2")
            .unwrap();
        assert_eq!(lr.document_ref(), Some("spdx-tool-1.2"));
        assert_eq!(lr.license_ref(), "MIT-Style-2");
    }

    #[test]
    fn parenthesizes_only_when_needed() {
        let a_or_b = lic("A").or(lic("B")).unwrap();
        let and = a_or_b.clone().and(lic("C")).unwrap();
        assert_eq!(and.to_string(), "(A OR B) AND C");

        let or = lic("C").or(a_or_b).unwrap();
        assert_eq!(or.to_string(), "C OR (A OR B)");

        let chain = lic("A")
            .and(lic("B"))
            .unwrap()
            .and(lic("C"))
            .unwrap();
        assert_eq!(chain.to_string(), "A AND B AND C");
    }

    #[test]
    fn simplifies_duplicates() {
        let expr = lic("A")
            .or(lic("B"))
            .unwrap()
            .or(lic("A"))
            .unwrap();
        assert_eq!(expr.simplify().to_string(), "A OR B");

        let same = lic("MIT").and(lic("MIT")).unwrap();
        assert_eq!(same.simplify(), lic("MIT"));
    }

    #[test]
    fn checks_strictness() {
        let expr = SpdxExpression::parse("GPL-2.0+ OR Made-Up OR LicenseRef-foo").unwrap();
        assert!(expr.is_valid(Strictness::AllowAny));
        assert_eq!(expr.invalid_ids(Strictness::AllowDeprecated), vec!["Made-Up"]);
        assert_eq!(
            expr.invalid_ids(Strictness::AllowCurrent),
            vec!["GPL-2.0", "Made-Up"]
        );
    }

    #[test]
    fn rejects_ambiguous_identifiers() {
        for id in ["AND", "or", "With", "LicenseRef-foo", "DocumentRef-x"] {
            assert_eq!(
                SpdxExpression::license(id),
                Err(ConstructionError::InvalidIdentifier(id.to_owned())),
            );
        }

        assert_eq!(
            SpdxExpression::exception("WITH"),
            Err(ConstructionError::InvalidIdentifier("WITH".to_owned()))
        );
    }

    #[test]
    fn limits_depth() {
        let mut expr = lic("MIT");
        for _ in 1..MAX_DEPTH {
            expr = expr.and(lic("MIT")).unwrap();
        }
        assert_eq!(expr.depth(), MAX_DEPTH);

        assert_eq!(expr.and(lic("MIT")), Err(ConstructionError::TooDeep));
    }
}
