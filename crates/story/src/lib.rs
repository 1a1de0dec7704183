pub mod mood;
pub mod prompt;

pub use mood::{analyze_mood, MoodSummary};

use extract::{GroqClient, OracleError, Triple};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("no stored data available for story generation")]
    NoData,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Synthesizes an uplifting short story from previously stored triples.
pub struct StoryGenerator {
    client: GroqClient,
}

impl StoryGenerator {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    /// Summarize the user's mood from person-sourced triples, fold in the
    /// entity triples, and have the story model write the result.
    pub async fn generate(
        &self,
        person_triples: &[Triple],
        entity_triples: &[Triple],
    ) -> Result<String, StoryError> {
        if person_triples.is_empty() {
            return Err(StoryError::NoData);
        }

        let mood = mood::analyze_mood(person_triples);
        info!(
            emotions = mood.emotions.len(),
            concerns = mood.concerns.len(),
            details = mood.personal_details.len(),
            "generating story"
        );

        let prompt = prompt::story_prompt(&mood, entity_triples);
        let story = self.client.complete(&prompt).await?;

        Ok(story.trim().to_string())
    }
}
