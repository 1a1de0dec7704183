use extract::Triple;

use crate::mood::MoodSummary;

/// Build the story-generation prompt from the mood summary plus the stored
/// entity-to-entity triples.
pub fn story_prompt(mood: &MoodSummary, entities: &[Triple]) -> String {
    let mut prompt = String::from(
        "Create an uplifting, motivational, and comforting short story for the user \
         based on the following details:\n\n",
    );

    if !mood.emotions.is_empty() {
        prompt.push_str("USER'S CURRENT EMOTIONS:\n");
        for emotion in &mood.emotions {
            prompt.push_str(&format!("- {}\n", emotion));
        }
        prompt.push('\n');
    }

    if !mood.concerns.is_empty() {
        prompt.push_str("USER'S CONCERNS:\n");
        for concern in &mood.concerns {
            prompt.push_str(&format!("- {}\n", concern));
        }
        prompt.push('\n');
    }

    prompt.push_str("ADDITIONAL DETAILS ABOUT THE USER:\n");
    for detail in &mood.personal_details {
        prompt.push_str(&format!("- {}\n", detail));
    }
    for entity in entities {
        prompt.push_str(&format!("- {}\n", entity.render()));
    }

    prompt.push_str(
        "\nINSTRUCTIONS FOR THE STORY:\n\
         - The story should be uplifting, inspiring, and emotionally reassuring.\n\
         - Acknowledge the user's current emotions but guide them towards hope, \
         courage, and happiness.\n\
         - Use gentle, warm, and encouraging storytelling.\n\
         - Incorporate the user's details into the story in a natural way.\n\
         - End with an inspiring message about growth, love, and resilience.\n\n\
         Return only the story, with no other commentary.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_every_section_when_populated() {
        let mood = MoodSummary {
            emotions: vec!["Anxious".to_string()],
            concerns: vec!["Exams".to_string()],
            personal_details: vec!["Tanvi → (Lives in) → Vadodara".to_string()],
        };
        let entities = vec![Triple::new("Vadodara", "Located in", "Gujarat")];

        let prompt = story_prompt(&mood, &entities);

        assert!(prompt.contains("USER'S CURRENT EMOTIONS:\n- Anxious"));
        assert!(prompt.contains("USER'S CONCERNS:\n- Exams"));
        assert!(prompt.contains("- Tanvi → (Lives in) → Vadodara"));
        assert!(prompt.contains("- Vadodara → (Located in) → Gujarat"));
        assert!(prompt.contains("Return only the story"));
    }

    #[test]
    fn omits_emotion_and_concern_sections_when_empty() {
        let mood = MoodSummary {
            personal_details: vec!["Tanvi → (Hobby) → Chess".to_string()],
            ..MoodSummary::default()
        };

        let prompt = story_prompt(&mood, &[]);

        assert!(!prompt.contains("USER'S CURRENT EMOTIONS"));
        assert!(!prompt.contains("USER'S CONCERNS"));
        assert!(prompt.contains("- Tanvi → (Hobby) → Chess"));
    }
}
