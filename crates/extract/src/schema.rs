use serde::{Deserialize, Serialize};

/// A single extracted statement: `source → (relation) → target`.
///
/// Triples are produced by the parser from model output, consumed once by
/// the graph writer, and also serve as the row shape when stored edges are
/// read back for story generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub source: String,
    pub relation: String,
    pub target: String,
}

impl Triple {
    pub fn new(
        source: impl Into<String>,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            relation: relation.into(),
            target: target.into(),
        }
    }

    /// Render back into the arrow form the extraction model emits.
    pub fn render(&self) -> String {
        format!("{} → ({}) → {}", self.source, self.relation, self.target)
    }
}
