use neo4rs::{Graph, Query};

use thiserror::Error;

/// Failures from the underlying property-graph store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("graph store error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

/// The two node categories. Persons are the closed per-batch set identified
/// by extraction; entities are every other concept, place, object, emotion,
/// or concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLabel {
    Person,
    Entity,
}

impl NodeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeLabel::Person => "Person",
            NodeLabel::Entity => "Entity",
        }
    }
}

/// Write surface the normalizer drives. Node and edge upserts are idempotent
/// on their identity keys; `create_edge` is the non-idempotent variant used
/// for description materialization.
#[allow(async_fn_in_trait)]
pub trait GraphStore {
    async fn upsert_node(&self, label: NodeLabel, name: &str) -> Result<(), StorageError>;

    /// Upsert both endpoint nodes, then merge a directed edge between them
    /// keyed on the exact (source, relation, target) tuple.
    async fn upsert_edge(
        &self,
        source_label: NodeLabel,
        relation: &str,
        target_label: NodeLabel,
        source: &str,
        target: &str,
    ) -> Result<(), StorageError>;

    /// Upsert both endpoint nodes, then create a new directed edge without
    /// merge semantics. Repeating this call duplicates the edge.
    async fn create_edge(
        &self,
        source_label: NodeLabel,
        relation: &str,
        target_label: NodeLabel,
        source: &str,
        target: &str,
    ) -> Result<(), StorageError>;
}

/// Neo4j-backed store. Node labels come from the closed `NodeLabel` enum and
/// are interpolated into Cypher; names and relation labels are always bound
/// as parameters. The free-form relation label rides on a fixed `RELATES`
/// relationship type as its `name` property, which keeps dynamic labels out
/// of the query text entirely.
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, StorageError> {
        let graph = Graph::new(uri, user, password).await?;
        Ok(Self { graph })
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        self.graph.run(neo4rs::query("RETURN 1")).await?;
        Ok(())
    }

    pub(crate) fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl GraphStore for Neo4jStore {
    async fn upsert_node(&self, label: NodeLabel, name: &str) -> Result<(), StorageError> {
        let query = Query::new(format!("MERGE (n:{} {{name: $name}})", label.as_str()))
            .param("name", name.to_string());

        self.graph.run(query).await?;
        Ok(())
    }

    async fn upsert_edge(
        &self,
        source_label: NodeLabel,
        relation: &str,
        target_label: NodeLabel,
        source: &str,
        target: &str,
    ) -> Result<(), StorageError> {
        let query = Query::new(format!(
            "MERGE (a:{} {{name: $source}}) \
             MERGE (b:{} {{name: $target}}) \
             MERGE (a)-[r:RELATES {{name: $relation}}]->(b)",
            source_label.as_str(),
            target_label.as_str(),
        ))
        .param("source", source.to_string())
        .param("target", target.to_string())
        .param("relation", relation.to_string());

        self.graph.run(query).await?;
        Ok(())
    }

    async fn create_edge(
        &self,
        source_label: NodeLabel,
        relation: &str,
        target_label: NodeLabel,
        source: &str,
        target: &str,
    ) -> Result<(), StorageError> {
        let query = Query::new(format!(
            "MERGE (a:{} {{name: $source}}) \
             MERGE (b:{} {{name: $target}}) \
             CREATE (a)-[r:RELATES {{name: $relation}}]->(b)",
            source_label.as_str(),
            target_label.as_str(),
        ))
        .param("source", source.to_string())
        .param("target", target.to_string())
        .param("relation", relation.to_string());

        self.graph.run(query).await?;
        Ok(())
    }
}
