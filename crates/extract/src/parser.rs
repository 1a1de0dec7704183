use regex::Regex;

use crate::schema::Triple;

/// Parse a block of model output into triples.
///
/// Each line is matched against `<source> → (<relation>) → <target>`. Lines
/// that do not fit the pattern (headers, chatter, blank lines) are dropped
/// rather than treated as errors, so a partially compliant model response
/// simply yields fewer triples. Order is preserved and duplicates are kept;
/// deduplication happens downstream via merge semantics in the graph store.
pub fn parse_triples(text: &str) -> Vec<Triple> {
    let pattern = Regex::new(r"(.+?)\s*→\s*\((.+?)\)\s*→\s*(.+)").unwrap();

    text.lines()
        .filter_map(|line| {
            let caps = pattern.captures(line.trim())?;
            let source = caps[1].trim();
            let relation = caps[2].trim();
            let target = caps[3].trim();
            if source.is_empty() || relation.is_empty() || target.is_empty() {
                return None;
            }
            Some(Triple::new(source, relation, target))
        })
        .collect()
}

/// Parse the person-listing response: one name per line, blanks dropped.
pub fn parse_people(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let text = "Tanvi → (Lives in) → Vadodara\nTanvi → (Feeling) → Anxious";
        let triples = parse_triples(text);

        assert_eq!(
            triples,
            vec![
                Triple::new("Tanvi", "Lives in", "Vadodara"),
                Triple::new("Tanvi", "Feeling", "Anxious"),
            ]
        );
    }

    #[test]
    fn drops_unmatched_lines_without_error() {
        let text = "Here are the relationships:\n\
                    Tanvi → (Hobby) → Playing Chess\n\
                    \n\
                    - just a bullet point\n\
                    Tanvi → missing parens → Chess";
        let triples = parse_triples(text);

        assert_eq!(triples, vec![Triple::new("Tanvi", "Hobby", "Playing Chess")]);
    }

    #[test]
    fn drops_lines_with_empty_segments() {
        let triples = parse_triples(" → (Sibling) → Rakshit");
        assert!(triples.is_empty());
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let text = "A → (Likes) → B\nA → (Likes) → B\nA → (Knows) → C";
        let triples = parse_triples(text);

        assert_eq!(triples.len(), 3);
        assert_eq!(triples[0], triples[1]);
        assert_eq!(triples[2], Triple::new("A", "Knows", "C"));
    }

    #[test]
    fn render_then_reparse_round_trips() {
        let text = "Tanvi → (Sibling) → Rakshit\n\
                    Tanvi → (Concern) → Upcoming exams\n\
                    Because she loves music → (Reason) → Piano";
        let first = parse_triples(text);

        let rendered = first
            .iter()
            .map(Triple::render)
            .collect::<Vec<_>>()
            .join("\n");
        let second = parse_triples(&rendered);

        assert_eq!(first, second);
    }

    #[test]
    fn people_listing_trims_and_drops_blanks() {
        let people = parse_people("Tanvi\n  Rakshit  \n\nSiddhant\n");
        assert_eq!(people, vec!["Tanvi", "Rakshit", "Siddhant"]);
    }
}
