pub mod llm;
pub mod parser;
pub mod prompt;
pub mod schema;

pub use llm::{GroqClient, OracleError};
pub use parser::{parse_people, parse_triples};
pub use schema::Triple;

/// Turns free-text narrative into persons and triples via the model oracle.
pub struct Extractor {
    client: GroqClient,
}

impl Extractor {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    /// Ask the model which persons the text names.
    pub async fn extract_people(&self, text: &str) -> Result<Vec<String>, OracleError> {
        let prompt = prompt::people_prompt(text);
        let response = self.client.complete(&prompt).await?;
        Ok(parser::parse_people(&response))
    }

    /// Extract relationship and emotion triples, given the persons already
    /// identified for this text. Noncompliant response lines are dropped by
    /// the parser, so this returns however many triples the model managed.
    pub async fn extract_triples(
        &self,
        text: &str,
        persons: &[String],
    ) -> Result<Vec<Triple>, OracleError> {
        let prompt = prompt::relations_prompt(text, persons);
        let response = self.client.complete(&prompt).await?;
        Ok(parser::parse_triples(&response))
    }
}
