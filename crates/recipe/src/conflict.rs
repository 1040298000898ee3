use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::{RestrictionTable, selected};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Diet,
    Health,
}

/// One triggered tag and the forbidden terms found for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub tag: String,
    pub terms: BTreeSet<String>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self
            .terms
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            ConflictKind::Diet => write!(
                f,
                "Dietary conflict: a {} recipe cannot contain {}.",
                self.tag, terms
            ),
            ConflictKind::Health => write!(
                f,
                "Health warning: {} not recommended for {}.",
                terms, self.tag
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    conflicts: Vec<Conflict>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn messages(&self) -> Vec<String> {
        self.conflicts.iter().map(ToString::to_string).collect()
    }

    /// Turns a non-empty report into the error that blocks a recipe write.
    pub fn into_result(self) -> chefshare_shared::Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        Err(chefshare_shared::Error::Conflict(self.messages()))
    }
}

impl RestrictionTable {
    /// Cross-checks ingredient text against the selected diet and health tags.
    ///
    /// Matching is plain case-insensitive substring containment, so `ham`
    /// also matches inside `shampoo`. Tags without an entry never conflict,
    /// and empty ingredient text is never reported.
    pub fn validate(
        &self,
        ingredients: &str,
        dietary: Option<&str>,
        health_condition: Option<&str>,
    ) -> ConflictReport {
        let dietary = selected(dietary);
        let health_condition = selected(health_condition);

        if dietary.is_none() && health_condition.is_none() {
            return ConflictReport::default();
        }

        if ingredients.trim().is_empty() {
            return ConflictReport::default();
        }

        let blob = ingredients.to_lowercase();
        let mut report = ConflictReport::default();

        let tags = [
            (ConflictKind::Diet, dietary),
            (ConflictKind::Health, health_condition),
        ];

        for (kind, tag) in tags {
            let Some(tag) = tag else {
                continue;
            };

            let Some(terms) = self.terms(tag) else {
                continue;
            };

            let found = terms
                .iter()
                .filter(|term| blob.contains(term.as_str()))
                .cloned()
                .collect::<BTreeSet<_>>();

            if found.is_empty() {
                continue;
            }

            report.conflicts.push(Conflict {
                kind,
                tag: tag.to_owned(),
                terms: found,
            });
        }

        report
    }
}

/// [`RestrictionTable::validate`] against the built-in table.
pub fn validate(
    ingredients: &str,
    dietary: Option<&str>,
    health_condition: Option<&str>,
) -> ConflictReport {
    RestrictionTable::builtin().validate(ingredients, dietary, health_condition)
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;
    use crate::{DietaryTag, HealthCondition, IngredientList};

    #[test]
    fn every_term_of_every_tag_conflicts_in_upper_case() {
        let table = RestrictionTable::builtin();
        let diets = DietaryTag::VARIANTS
            .iter()
            .map(|tag| (ConflictKind::Diet, tag.to_string()));
        let conditions = HealthCondition::VARIANTS
            .iter()
            .map(|tag| (ConflictKind::Health, tag.to_string()));

        for (kind, tag) in diets.chain(conditions) {
            let Some(terms) = table.terms(&tag) else {
                continue;
            };

            for term in terms {
                let text = format!("2 CUPS {}", term.to_uppercase());
                let report = match kind {
                    ConflictKind::Diet => validate(&text, Some(&tag), None),
                    ConflictKind::Health => validate(&text, None, Some(&tag)),
                };

                assert_eq!(report.conflicts().len(), 1, "{tag}: {text}");
                let conflict = &report.conflicts()[0];
                assert_eq!(conflict.kind, kind, "{tag}: {text}");
                assert_eq!(conflict.tag, tag, "{tag}: {text}");
                assert!(conflict.terms.contains(term), "{tag}: {text}");
            }
        }
    }

    #[test]
    fn forbidden_term_in_any_casing_conflicts() {
        let report = validate("2 Chicken BREASTS\nrice", Some("Vegan"), None);

        assert_eq!(report.conflicts().len(), 1);
        let conflict = &report.conflicts()[0];
        assert_eq!(conflict.kind, ConflictKind::Diet);
        assert_eq!(conflict.tag, "Vegan");
        assert!(conflict.terms.contains("chicken"));
        assert!(report.messages()[0].contains("chicken"));
        assert!(report.messages()[0].contains("Vegan"));
    }

    #[test]
    fn every_matched_term_is_reported_once() {
        let report = validate("ham, cheese, ham hock, milk", Some("vegan"), None);

        let terms = &report.conflicts()[0].terms;
        assert_eq!(
            terms.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["cheese", "ham", "milk"]
        );
    }

    #[test]
    fn diet_and_health_are_reported_separately() {
        let report = validate("bacon, white sugar, flour", Some("Halal"), Some("Diabetes"));

        assert_eq!(report.conflicts().len(), 2);
        assert_eq!(report.conflicts()[0].kind, ConflictKind::Diet);
        assert_eq!(report.conflicts()[1].kind, ConflictKind::Health);

        let messages = report.messages();
        assert!(messages[0].starts_with("Dietary conflict"));
        assert!(messages[1].starts_with("Health warning"));
        assert!(messages[1].contains("sugar"));
    }

    #[test]
    fn unknown_tags_never_conflict() {
        let report = validate("pork belly, lard", Some("Mediterranean"), Some("Anemia"));

        assert!(report.is_empty());
        assert!(validate("pork", Some("Flexitarian"), None).is_empty());
    }

    #[test]
    fn nothing_selected_means_nothing_to_check() {
        assert!(validate("pork, bacon", None, None).is_empty());
        assert!(validate("pork, bacon", Some("None"), Some("")).is_empty());
        assert!(validate("pork, bacon", Some("Select"), Some("None")).is_empty());
    }

    #[test]
    fn empty_ingredients_are_not_checked() {
        assert!(validate("", Some("Vegan"), Some("Diabetes")).is_empty());
        assert!(validate("  \n", Some("Halal"), None).is_empty());
    }

    #[test]
    fn substring_matches_are_kept() {
        let report = validate("herbal shampoo", Some("Halal"), None);

        assert!(report.conflicts()[0].terms.contains("ham"));
    }

    #[test]
    fn vegan_chicken_recipe_is_rejected() {
        let ingredients: IngredientList = ["chicken breast", "rice"].into_iter().collect();
        let report = validate(&ingredients.search_text(), Some("Vegan"), None);

        assert!(report.messages().iter().any(|m| m.contains("chicken")));
        assert!(matches!(
            report.into_result(),
            Err(chefshare_shared::Error::Conflict(messages)) if messages.len() == 1
        ));
    }

    #[test]
    fn vegan_rice_and_beans_is_accepted() {
        let ingredients: IngredientList = ["rice", "beans"].into_iter().collect();
        let report = validate(&ingredients.search_text(), Some("Vegan"), Some("None"));

        assert!(report.is_empty());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn custom_table_is_honoured() {
        let table = RestrictionTable::from_entries([("Low-FODMAP", &["garlic", "onion"][..])]);
        let report = table.validate("Red Onion, tomato", Some("low-fodmap"), None);

        assert_eq!(report.conflicts()[0].tag, "low-fodmap");
        assert!(report.conflicts()[0].terms.contains("onion"));
    }
}
