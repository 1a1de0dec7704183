pub fn people_prompt(text: &str) -> String {
    format!(
        r#"Identify and extract all persons mentioned in the following text.

OUTPUT FORMAT:
- Just return names, one per line.
- Do not add any extra text or explanations.
- Do not return relationships, only names.

EXAMPLE INPUT:
"Tanvi and Rakshit went to visit their cousin Siddhant in Mumbai."

EXPECTED OUTPUT:
Tanvi
Rakshit
Siddhant

Now, analyze the following text:
{}"#,
        text
    )
}

pub fn relations_prompt(text: &str, persons: &[String]) -> String {
    let persons_str = persons.join(", ");

    format!(
        r#"Extract all relationships, attributes, emotions, and state of mind about the person(s) mentioned in the following text.

IDENTIFIED PERSONS: {persons_str}

OUTPUT FORMAT (one statement per line, nothing else):
Person → (Relation) → Value       (relationships and attributes)
Person → (Relation) → Person      (two related people)
Entity → (Relation) → Entity      (relation between two entities)
Person → (Feeling) → Emotion      (emotions and mental state)

RULES:
- Only extract what the text states; never invent or return "not mentioned".
- Capture personal details, locations, roles, dates, and events.
- Capture emotional state as Feeling / State of Mind / Concern / Belief lines; at most 3 feelings.
- Orient person-to-person relations from person to person, e.g. "Tanvi → (Sibling) → Rakshit" rather than "Rakshit → (Relation) → Brother".
- Avoid redundant relationships (one line per fact, no "Sibling" plus "Brother" variants).
- Do not append parenthetical explanations to the value.

EXAMPLE INPUT:
"Tanvi is feeling anxious about her upcoming exams, but she is hopeful that her hard work will pay off. She lives in Vadodara and enjoys playing chess to relax."

EXPECTED OUTPUT:
Tanvi → (Lives in) → Vadodara
Tanvi → (Hobby) → Playing Chess
Tanvi → (Feeling) → Anxious
Tanvi → (Concern) → Upcoming exams
Tanvi → (Belief) → Hard work will pay off
Tanvi → (State of Mind) → Hopeful

Now, analyze the following text. The first line of the text is user information;
if the text says "I", it refers to that user.

{text}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relations_prompt_lists_identified_persons() {
        let prompt = relations_prompt(
            "Tanvi misses Rakshit.",
            &["Tanvi".to_string(), "Rakshit".to_string()],
        );

        assert!(prompt.contains("IDENTIFIED PERSONS: Tanvi, Rakshit"));
        assert!(prompt.contains("Tanvi misses Rakshit."));
    }
}
