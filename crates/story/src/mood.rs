use extract::Triple;
use serde::Serialize;

/// Relation labels that carry the user's emotional state.
const EMOTION_RELATIONS: &[&str] = &["Feeling", "State of Mind"];

const CONCERN_RELATION: &str = "Concern";

/// The user's stored triples, partitioned for the story prompt.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MoodSummary {
    pub emotions: Vec<String>,
    pub concerns: Vec<String>,
    pub personal_details: Vec<String>,
}

/// Partition person-sourced triples into emotions, concerns, and everything
/// else. Emotions and concerns keep only the target value; remaining triples
/// are rendered back to their readable arrow form. Order-preserving, no
/// mutation of the input.
pub fn analyze_mood(triples: &[Triple]) -> MoodSummary {
    let mut summary = MoodSummary::default();

    for triple in triples {
        if EMOTION_RELATIONS.contains(&triple.relation.as_str()) {
            summary.emotions.push(triple.target.clone());
        } else if triple.relation == CONCERN_RELATION {
            summary.concerns.push(triple.target.clone());
        } else {
            summary.personal_details.push(triple.render());
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_by_relation_label() {
        let triples = vec![
            Triple::new("Tanvi", "Feeling", "Anxious"),
            Triple::new("Tanvi", "Concern", "Exams"),
            Triple::new("Tanvi", "Lives in", "Vadodara"),
        ];

        let summary = analyze_mood(&triples);

        assert_eq!(summary.emotions, vec!["Anxious"]);
        assert_eq!(summary.concerns, vec!["Exams"]);
        assert_eq!(
            summary.personal_details,
            vec!["Tanvi → (Lives in) → Vadodara"]
        );
    }

    #[test]
    fn state_of_mind_counts_as_emotion() {
        let summary = analyze_mood(&[Triple::new("Tanvi", "State of Mind", "Hopeful")]);
        assert_eq!(summary.emotions, vec!["Hopeful"]);
        assert!(summary.concerns.is_empty());
        assert!(summary.personal_details.is_empty());
    }

    #[test]
    fn keeps_input_order_within_each_bucket() {
        let triples = vec![
            Triple::new("Tanvi", "Feeling", "Anxious"),
            Triple::new("Tanvi", "Hobby", "Chess"),
            Triple::new("Tanvi", "Feeling", "Hopeful"),
            Triple::new("Tanvi", "Sibling", "Rakshit"),
        ];

        let summary = analyze_mood(&triples);

        assert_eq!(summary.emotions, vec!["Anxious", "Hopeful"]);
        assert_eq!(
            summary.personal_details,
            vec!["Tanvi → (Hobby) → Chess", "Tanvi → (Sibling) → Rakshit"]
        );
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert_eq!(analyze_mood(&[]), MoodSummary::default());
    }
}
