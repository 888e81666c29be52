//! Keyword expansion for wizard flavor notes.

use crate::domain::preferences::FlavorNote;

/// Substrings looked up (case-insensitively) in catalog flavor-profile words.
pub const FLAVOR_KEYWORDS: &[(FlavorNote, &[&str])] = &[
    (FlavorNote::Fruity, &["fruit", "berry", "citrus"]),
    (FlavorNote::Chocolatey, &["chocolate", "cocoa"]),
    (FlavorNote::Nutty, &["nut", "caramel"]),
    (FlavorNote::Floral, &["floral", "tea"]),
    (FlavorNote::Earthy, &["earth", "spic"]),
    (FlavorNote::Sweet, &["sweet", "smooth"]),
];

pub fn keywords(note: FlavorNote) -> &'static [&'static str] {
    FLAVOR_KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == note)
        .map(|(_, keywords)| *keywords)
        .unwrap_or_default()
}

pub fn note_matches(note: FlavorNote, flavor_profile: &[String]) -> bool {
    let keywords = keywords(note);
    flavor_profile.iter().any(|word| {
        let lowered = word.to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword))
    })
}

/// Number of requested notes with at least one keyword hit.
pub fn matching_note_count(notes: &[FlavorNote], flavor_profile: &[String]) -> usize {
    notes.iter().filter(|note| note_matches(**note, flavor_profile)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    #[test]
    fn every_note_has_keywords() {
        for note in FlavorNote::ALL {
            assert!(!keywords(note).is_empty(), "{note} has no keywords");
        }
    }

    #[test]
    fn fruity_matches_capitalized_blueberry() {
        assert!(note_matches(FlavorNote::Fruity, &profile(&["Blueberry", "Jasmine"])));
    }

    #[test]
    fn earthy_matches_spice_and_spicy_via_stem() {
        assert!(note_matches(FlavorNote::Earthy, &profile(&["Spice"])));
        assert!(note_matches(FlavorNote::Earthy, &profile(&["Spicy finish"])));
    }

    #[test]
    fn nutty_matches_caramel_and_hazelnut() {
        assert!(note_matches(FlavorNote::Nutty, &profile(&["Caramel"])));
        assert!(note_matches(FlavorNote::Nutty, &profile(&["Hazelnut"])));
        assert!(!note_matches(FlavorNote::Nutty, &profile(&["Lemon"])));
    }

    #[test]
    fn counts_distinct_matching_notes() {
        let words = profile(&["Milk chocolate", "Caramel", "Red apple"]);
        let notes = [FlavorNote::Chocolatey, FlavorNote::Nutty, FlavorNote::Floral];
        assert_eq!(matching_note_count(&notes, &words), 2);
    }

    #[test]
    fn empty_profile_matches_nothing() {
        assert!(!note_matches(FlavorNote::Sweet, &[]));
    }
}
