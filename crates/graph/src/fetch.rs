use extract::Triple;
use neo4rs::Query;
use serde::Serialize;
use tracing::debug;

use crate::store::{Neo4jStore, StorageError};

/// Everything stored in the graph, split by source-node label. Feeds the
/// story generator.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StoredData {
    pub persons: Vec<Triple>,
    pub entities: Vec<Triple>,
}

impl Neo4jStore {
    /// All edges whose source is a Person node, as triples.
    pub async fn fetch_person_triples(&self) -> Result<Vec<Triple>, StorageError> {
        self.fetch_triples("Person").await
    }

    /// All edges whose source is an Entity node, as triples.
    pub async fn fetch_entity_triples(&self) -> Result<Vec<Triple>, StorageError> {
        self.fetch_triples("Entity").await
    }

    pub async fn fetch_all(&self) -> Result<StoredData, StorageError> {
        let data = StoredData {
            persons: self.fetch_person_triples().await?,
            entities: self.fetch_entity_triples().await?,
        };
        debug!(
            persons = data.persons.len(),
            entities = data.entities.len(),
            "fetched stored triples"
        );
        Ok(data)
    }

    async fn fetch_triples(&self, source_label: &str) -> Result<Vec<Triple>, StorageError> {
        let query = Query::new(format!(
            "MATCH (s:{source_label})-[r:RELATES]->(t) \
             RETURN s.name AS source, r.name AS relation, t.name AS target"
        ));

        let mut result = self.graph().execute(query).await?;
        let mut triples = Vec::new();

        while let Some(row) = result.next().await? {
            let source: String = row.get("source").unwrap_or_default();
            let relation: String = row.get("relation").unwrap_or_default();
            let target: String = row.get("target").unwrap_or_default();
            triples.push(Triple::new(source, relation, target));
        }

        Ok(triples)
    }
}
