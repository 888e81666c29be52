//! Brewing tips chosen from preference answers in a fixed priority order.

use std::iter;

use crate::domain::preferences::{
    BrewingTime, CaffeineLevel, ExperienceLevel, FlavorNote, Intensity, PriceRange,
    WizardPreferences,
};

pub const CLOSING_TIP: &str =
    "Fresh beans matter: buy whole beans roasted within the last month \
     and grind just before brewing.";

pub struct TipRule {
    pub name: &'static str,
    applies: fn(&WizardPreferences) -> bool,
    pub tips: &'static [&'static str],
}

impl TipRule {
    const fn new(
        name: &'static str,
        applies: fn(&WizardPreferences) -> bool,
        tips: &'static [&'static str],
    ) -> Self {
        Self { name, applies, tips }
    }

    pub fn applies(&self, preferences: &WizardPreferences) -> bool {
        (self.applies)(preferences)
    }
}

/// Highest priority first. Tips past the limit are dropped from the end.
pub const TIP_RULES: &[TipRule] = &[
    TipRule::new(
        "beginner",
        |p| p.experience == ExperienceLevel::Beginner,
        &[
            "Start with a medium roast: it is forgiving and balanced while you learn.",
            "Use a kitchen scale and begin with a 1:16 coffee-to-water ratio.",
        ],
    ),
    TipRule::new(
        "advanced",
        |p| p.experience == ExperienceLevel::Advanced,
        &["Change one variable at a time when dialing in grind, dose, or temperature."],
    ),
    TipRule::new(
        "strong_intensity",
        |p| p.intensity == Intensity::Strong,
        &["For a stronger cup, raise the dose instead of grinding finer to avoid bitterness."],
    ),
    TipRule::new(
        "mild_intensity",
        |p| p.intensity == Intensity::Mild,
        &["For a gentler cup, try a slightly coarser grind and a 1:17 ratio."],
    ),
    TipRule::new(
        "fruity_notes",
        |p| p.flavor_notes.contains(&FlavorNote::Fruity),
        &["Light roasts from Ethiopia and Kenya show off bright, fruity notes."],
    ),
    TipRule::new(
        "chocolatey_notes",
        |p| p.flavor_notes.contains(&FlavorNote::Chocolatey),
        &["Brazilian and Colombian beans bring out chocolate and cocoa sweetness."],
    ),
    TipRule::new(
        "floral_notes",
        |p| p.flavor_notes.contains(&FlavorNote::Floral),
        &["Brew floral coffees slightly cooler, around 92C, to keep delicate aromas."],
    ),
    TipRule::new(
        "quick_brewing",
        |p| p.brewing_time == BrewingTime::Quick,
        &["An AeroPress makes a great cup in about two minutes."],
    ),
    TipRule::new(
        "patient_brewing",
        |p| p.brewing_time == BrewingTime::Patient,
        &["Cold brew rewards patience: steep 12 to 24 hours for a smooth concentrate."],
    ),
    TipRule::new(
        "low_caffeine",
        |p| p.caffeine_level == CaffeineLevel::Low,
        &["Swiss Water decaf keeps most of the flavor with almost none of the caffeine."],
    ),
    TipRule::new(
        "budget_gear",
        |p| p.budget == PriceRange::Budget,
        &["A burr grinder is the best-value upgrade for any budget setup."],
    ),
];

/// Tips in priority order followed by [`CLOSING_TIP`], truncated to `limit`.
pub fn build_tips(preferences: &WizardPreferences, limit: usize) -> Vec<String> {
    TIP_RULES
        .iter()
        .filter(|rule| rule.applies(preferences))
        .flat_map(|rule| rule.tips.iter().copied())
        .chain(iter::once(CLOSING_TIP))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Names of the rules whose condition holds, in priority order.
pub fn matched_tip_rules(preferences: &WizardPreferences) -> Vec<&'static str> {
    TIP_RULES.iter().filter(|rule| rule.applies(preferences)).map(|rule| rule.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preferences::Selection;

    #[test]
    fn beginner_tips_come_first() {
        let tips = build_tips(&WizardPreferences::default(), 5);
        assert_eq!(tips[0], TIP_RULES[0].tips[0]);
        assert_eq!(tips[1], TIP_RULES[0].tips[1]);
    }

    #[test]
    fn closing_tip_is_always_appended_when_room_remains() {
        let preferences = WizardPreferences {
            experience: ExperienceLevel::Intermediate,
            ..WizardPreferences::default()
        };
        let tips = build_tips(&preferences, 5);
        assert_eq!(tips, vec![CLOSING_TIP.to_string()]);
    }

    #[test]
    fn lower_priority_tips_are_dropped_past_the_limit() {
        let preferences = WizardPreferences {
            experience: ExperienceLevel::Beginner,
            intensity: Intensity::Strong,
            flavor_notes: Selection::only([FlavorNote::Fruity, FlavorNote::Chocolatey]),
            brewing_time: BrewingTime::Quick,
            caffeine_level: CaffeineLevel::Low,
            budget: PriceRange::Budget,
            ..WizardPreferences::default()
        };

        let tips = build_tips(&preferences, 5);
        assert_eq!(tips.len(), 5);
        assert_eq!(
            matched_tip_rules(&preferences),
            [
                "beginner",
                "strong_intensity",
                "fruity_notes",
                "chocolatey_notes",
                "quick_brewing",
                "low_caffeine",
                "budget_gear"
            ]
        );
        assert!(!tips.contains(&CLOSING_TIP.to_string()));
        assert!(tips.iter().any(|tip| tip.contains("Brazilian")));
        assert!(!tips.iter().any(|tip| tip.contains("AeroPress")));
    }

    #[test]
    fn any_flavor_selection_triggers_no_flavor_tip() {
        let preferences =
            WizardPreferences { flavor_notes: Selection::Any, ..WizardPreferences::default() };
        let matched = matched_tip_rules(&preferences);
        assert!(!matched.iter().any(|name| name.ends_with("_notes")));
    }

    #[test]
    fn zero_limit_yields_no_tips() {
        assert!(build_tips(&WizardPreferences::default(), 0).is_empty());
    }
}
