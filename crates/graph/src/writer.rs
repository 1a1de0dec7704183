use std::collections::HashMap;

use extract::Triple;
use serde::Serialize;
use tracing::debug;

use crate::classify::{Classifier, TripleKind};
use crate::store::{GraphStore, NodeLabel, StorageError};

/// What one write batch did, for request logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub persons: usize,
    pub edges: usize,
    pub descriptions: usize,
}

struct Description {
    relation: String,
    description: String,
}

/// Normalize one batch of (persons, triples) into graph writes.
///
/// Pass 1 upserts a Person node for every identified name, so person nodes
/// exist even when no triple mentions them. Pass 2 routes each triple by its
/// classified kind; description triples are held back in a per-batch map
/// (last writer wins per target). Pass 3 materializes the held descriptions
/// as entity nodes linked by a created, non-merged edge, so re-ingesting the
/// same description duplicates that edge while every other write stays
/// idempotent.
///
/// The first failing write aborts the remaining passes. Writes already
/// committed stay committed; there is no retry and no rollback.
pub async fn store_batch<S: GraphStore>(
    store: &S,
    persons: &[String],
    triples: &[Triple],
) -> Result<WriteReport, StorageError> {
    let classifier = Classifier::new(persons.iter().cloned());
    let mut report = WriteReport::default();

    for name in persons {
        store.upsert_node(NodeLabel::Person, name).await?;
        report.persons += 1;
    }

    let mut deferred: HashMap<String, Description> = HashMap::new();

    for triple in triples {
        match classifier.classify(triple) {
            TripleKind::DeferredDescription => {
                deferred.insert(
                    triple.target.clone(),
                    Description {
                        relation: triple.relation.clone(),
                        description: triple.source.clone(),
                    },
                );
            }
            TripleKind::PersonToPerson { bidirectional } => {
                store
                    .upsert_edge(
                        NodeLabel::Person,
                        &triple.relation,
                        NodeLabel::Person,
                        &triple.source,
                        &triple.target,
                    )
                    .await?;
                report.edges += 1;

                // Same label both ways; the label is not semantically
                // inverted.
                if bidirectional {
                    store
                        .upsert_edge(
                            NodeLabel::Person,
                            &triple.relation,
                            NodeLabel::Person,
                            &triple.target,
                            &triple.source,
                        )
                        .await?;
                    report.edges += 1;
                }
            }
            TripleKind::PersonToEntity => {
                store
                    .upsert_edge(
                        NodeLabel::Person,
                        &triple.relation,
                        NodeLabel::Entity,
                        &triple.source,
                        &triple.target,
                    )
                    .await?;
                report.edges += 1;
            }
            TripleKind::EntityToEntity => {
                store
                    .upsert_edge(
                        NodeLabel::Entity,
                        &triple.relation,
                        NodeLabel::Entity,
                        &triple.source,
                        &triple.target,
                    )
                    .await?;
                report.edges += 1;
            }
        }
    }

    for (target, held) in &deferred {
        store
            .create_edge(
                NodeLabel::Entity,
                &held.relation,
                NodeLabel::Entity,
                &held.description,
                target,
            )
            .await?;
        report.descriptions += 1;
    }

    debug!(
        persons = report.persons,
        edges = report.edges,
        descriptions = report.descriptions,
        "write batch finished"
    );

    Ok(report)
}
