//! Template identifiers

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::TemplateError;

/// Registered template identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKind {
    /// Simulated material sample: composition, crystal structure, cell
    Sample,
    /// Calculated property attached to samples
    Property,
    /// Computational workflow: method, software, inputs and outputs
    Workflow,
    /// Atomic-scale operation transforming one sample into another
    Operation,
    /// Generic knowledge record with metadata, content and schema
    #[default]
    Knowledge,
    /// Title, description and free-form data only
    Minimal,
    /// Knowledge record with licensing and provenance tracking
    Extended,
    /// Graph of computational samples and workflows
    KnowledgeGraph,
}

impl TemplateKind {
    /// Every registered kind, in registry order
    pub const ALL: [Self; 8] = [
        Self::Sample,
        Self::Property,
        Self::Workflow,
        Self::Operation,
        Self::Knowledge,
        Self::Minimal,
        Self::Extended,
        Self::KnowledgeGraph,
    ];

    /// Registered identifier
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Property => "property",
            Self::Workflow => "workflow",
            Self::Operation => "operation",
            Self::Knowledge => "knowledge",
            Self::Minimal => "minimal",
            Self::Extended => "extended",
            Self::KnowledgeGraph => "knowledge_graph",
        }
    }

    /// Position in [`TemplateKind::ALL`]
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TemplateError::unknown(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_kind() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.as_str().parse::<TemplateKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Sample".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in TemplateKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn display_uses_identifier() {
        assert_eq!(TemplateKind::KnowledgeGraph.to_string(), "knowledge_graph");
    }
}
