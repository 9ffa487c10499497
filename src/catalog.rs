//! The catalog is the read-only vocabulary of canonical SPDX license and
//! exception identifiers. It is backed by the SPDX license list that ships
//! with the [`spdx`] crate, so it is a process wide constant that needs no
//! initialization and can be shared between threads freely.
//!
//! Lookups never fail, an identifier that isn't part of the list simply
//! yields `None`.

use crate::expr::SpdxExpression;
use std::fmt;

pub use spdx::{ExceptionId, LicenseId};

/// An entry in the catalog, either a license or a license exception
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    License(LicenseId),
    Exception(ExceptionId),
}

impl Entry {
    /// The canonical, case-correct, SPDX identifier
    #[inline]
    pub fn id(self) -> &'static str {
        match self {
            Self::License(lic) => lic.name,
            Self::Exception(exc) => exc.name,
        }
    }

    /// The human readable name, exceptions don't have one so their id is
    /// returned instead
    #[inline]
    pub fn full_name(self) -> &'static str {
        match self {
            Self::License(lic) => lic.full_name,
            Self::Exception(exc) => exc.name,
        }
    }

    #[inline]
    pub fn is_deprecated(self) -> bool {
        match self {
            Self::License(lic) => lic.is_deprecated(),
            Self::Exception(exc) => exc.is_deprecated(),
        }
    }

    #[inline]
    pub fn is_exception(self) -> bool {
        matches!(self, Self::Exception(_))
    }

    /// The canonical text of the license or exception
    #[inline]
    pub fn text(self) -> &'static str {
        match self {
            Self::License(lic) => lic.text(),
            Self::Exception(exc) => exc.text(),
        }
    }

    /// Wraps the entry in the trivial expression for it, a single license
    /// id or a license exception
    pub fn to_expression(self) -> SpdxExpression {
        match self {
            Self::License(lic) => SpdxExpression::from_catalog_license(lic.name),
            Self::Exception(exc) => SpdxExpression::from_catalog_exception(exc.name),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Case-sensitive lookup of a license identifier. The lookup is exact, so
/// `MIT+` does not find `MIT`
#[inline]
pub fn license(id: &str) -> Option<LicenseId> {
    spdx::license_id(id).filter(|lic| lic.name == id)
}

/// Case-insensitive lookup of a license identifier, eg. `apache-2.0` will
/// find `Apache-2.0`
pub fn license_ignore_case(id: &str) -> Option<LicenseId> {
    license(id).or_else(|| {
        spdx::identifiers::LICENSES
            .iter()
            .find(|(name, ..)| name.eq_ignore_ascii_case(id))
            .and_then(|(name, ..)| spdx::license_id(name))
    })
}

/// Case-sensitive lookup of a license exception identifier
#[inline]
pub fn exception(id: &str) -> Option<ExceptionId> {
    spdx::exception_id(id).filter(|exc| exc.name == id)
}

/// Case-insensitive lookup of a license exception identifier
pub fn exception_ignore_case(id: &str) -> Option<ExceptionId> {
    exception(id).or_else(|| {
        spdx::identifiers::EXCEPTIONS
            .iter()
            .find(|(name, ..)| name.eq_ignore_ascii_case(id))
            .and_then(|(name, ..)| spdx::exception_id(name))
    })
}

/// Case-sensitive lookup of either a license or an exception, licenses take
/// precedence
#[inline]
pub fn for_id(id: &str) -> Option<Entry> {
    license(id)
        .map(Entry::License)
        .or_else(|| exception(id).map(Entry::Exception))
}

/// Case-insensitive variant of [`for_id`]
#[inline]
pub fn for_id_ignore_case(id: &str) -> Option<Entry> {
    license_ignore_case(id)
        .map(Entry::License)
        .or_else(|| exception_ignore_case(id).map(Entry::Exception))
}

/// Iterates over every license in the catalog, including deprecated ones
pub fn licenses() -> impl Iterator<Item = LicenseId> {
    spdx::identifiers::LICENSES
        .iter()
        .filter_map(|(name, ..)| spdx::license_id(name))
}

/// Iterates over every license exception in the catalog
pub fn exceptions() -> impl Iterator<Item = ExceptionId> {
    spdx::identifiers::EXCEPTIONS
        .iter()
        .filter_map(|(name, ..)| spdx::exception_id(name))
}
