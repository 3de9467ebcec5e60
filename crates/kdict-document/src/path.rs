//! Dotted paths for addressing within documents
//!
//! Provides [`DottedPath`] for resolving nested mapping keys such as
//! `material.crystal_structure.spacegroup_number`.

use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Path through nested mappings
///
/// Segments are taken verbatim from the `.`-separated input, so `"a..b"`
/// addresses the empty key between `a` and `b`.
///
/// # Invariants
/// - At least one segment
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DottedPath(Vec<String>);

impl DottedPath {
    /// Create path from a single segment
    #[inline]
    #[must_use]
    pub fn single(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Final segment and the segments leading to it
    #[must_use]
    pub fn split_last(&self) -> (&str, &[String]) {
        match self.0.split_last() {
            Some((last, parents)) => (last.as_str(), parents),
            None => ("", &[]),
        }
    }

    /// Get parent path (if more than one segment)
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() > 1 {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        } else {
            None
        }
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for DottedPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for DottedPath {
    fn from(s: &str) -> Self {
        Self(s.split('.').map(str::to_owned).collect())
    }
}

impl From<String> for DottedPath {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for DottedPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
