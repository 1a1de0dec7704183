use serde::{Deserialize, Serialize};

/// Per-user profile captured before the questionnaire starts. One profile is
/// held process-wide and overwritten by each store call; requests work from
/// an immutable snapshot taken when they begin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub gender: String,
}

impl UserProfile {
    /// Prefix the narrative with the speaker so the model can resolve "I".
    pub fn compose_input(&self, text: &str) -> String {
        format!("{} ({}, {}): {}", self.name, self.age, self.gender, text)
    }
}
