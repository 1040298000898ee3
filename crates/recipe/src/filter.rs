//! Recommendation filter pipeline.
//!
//! The pipeline is written once against [`RecipeFilter`], the collection
//! query capability of the storage layer, and narrows the recipe set stage by
//! stage in this order:
//!
//! 1. health condition (session)
//! 2. dietary tag (session)
//! 3. allergy exclusion (session)
//! 4. free-text search on title, description and origin country (request)
//! 5. exact dietary tag (request)
//! 6. budget range (request)
//! 7. meal time membership (request)
//! 8. meal type membership (request)
//!
//! Only the session stages switch on recommendation mode.

use serde::{Deserialize, Serialize};

use crate::{Recipe, expand_allergens, selected};

/// Recommendation preference kept per user session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFilterState {
    pub health_condition: Option<String>,
    pub dietary: Option<String>,
    pub allergies: Option<String>,
}

/// Filters taken from the query string of a single listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdHocFilters {
    pub search: Option<String>,
    pub dietary: Option<String>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub meal_times: Vec<String>,
    pub meal_types: Vec<String>,
}

/// Raw listing parameters as they arrive from the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub q: Option<String>,
    pub dietary: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    #[serde(default)]
    pub meal_time: Vec<String>,
    #[serde(default)]
    pub meal_type: Vec<String>,
}

impl From<ListingParams> for AdHocFilters {
    fn from(params: ListingParams) -> Self {
        Self {
            search: params.q.filter(|q| !q.is_empty()),
            dietary: params.dietary.filter(|d| !d.is_empty()),
            min_budget: params.min_price.as_deref().and_then(parse_bound),
            max_budget: params.max_price.as_deref().and_then(parse_bound),
            meal_times: params.meal_time,
            meal_types: params.meal_type,
        }
    }
}

/// A malformed bound is ignored rather than failing the listing.
fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::debug!(bound = raw, "Ignoring non numeric budget bound");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
    OriginCountry,
    Ingredients,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    HealthCondition,
    Dietary,
    MealTime,
    MealType,
}

/// Collection query capability the pipeline narrows with.
///
/// Text predicates are case-insensitive substring tests; tag predicates are
/// exact, case-sensitive comparisons. A recipe with no value in the field
/// never matches a positive predicate.
pub trait RecipeFilter: Sized {
    fn matching_any(self, fields: &[TextField], needle: &str) -> Self;
    /// Drops recipes whose field contains any of the needles.
    fn excluding_any(self, field: TextField, needles: &[String]) -> Self;
    fn tag_equals(self, field: TagField, value: &str) -> Self;
    fn tag_in(self, field: TagField, values: &[String]) -> Self;
    fn budget_at_least(self, min: f64) -> Self;
    fn budget_at_most(self, max: f64) -> Self;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered<F> {
    pub recipes: F,
    pub is_recommendation_active: bool,
}

const SEARCH_FIELDS: [TextField; 3] = [
    TextField::Title,
    TextField::Description,
    TextField::OriginCountry,
];

/// Runs every stage over an already recency-ordered collection.
pub fn apply<F: RecipeFilter>(
    mut recipes: F,
    session: Option<&SessionFilterState>,
    request: &AdHocFilters,
) -> Filtered<F> {
    let mut is_recommendation_active = false;

    if let Some(session) = session {
        if let Some(health_condition) = selected(session.health_condition.as_deref()) {
            recipes = recipes.tag_equals(TagField::HealthCondition, health_condition);
            is_recommendation_active = true;
        }

        if let Some(dietary) = selected(session.dietary.as_deref()) {
            recipes = recipes.tag_equals(TagField::Dietary, dietary);
            is_recommendation_active = true;
        }

        if let Some(allergies) = session.allergies.as_deref().filter(|a| !a.is_empty()) {
            is_recommendation_active = true;

            let allergens = expand_allergens(allergies);
            if !allergens.is_empty() {
                recipes = recipes.excluding_any(TextField::Ingredients, &allergens);
            }
        }
    }

    if let Some(search) = request.search.as_deref().filter(|s| !s.is_empty()) {
        recipes = recipes.matching_any(&SEARCH_FIELDS, search);
    }

    if let Some(dietary) = request.dietary.as_deref().filter(|d| !d.is_empty()) {
        recipes = recipes.tag_equals(TagField::Dietary, dietary);
    }

    if let Some(min) = request.min_budget {
        recipes = recipes.budget_at_least(min);
    }

    if let Some(max) = request.max_budget {
        recipes = recipes.budget_at_most(max);
    }

    if !request.meal_times.is_empty() {
        recipes = recipes.tag_in(TagField::MealTime, &request.meal_times);
    }

    if !request.meal_types.is_empty() {
        recipes = recipes.tag_in(TagField::MealType, &request.meal_types);
    }

    Filtered {
        recipes,
        is_recommendation_active,
    }
}

/// Filters an in-memory collection, newest recipes first.
pub fn filter_recipes(
    mut recipes: Vec<Recipe>,
    session: Option<&SessionFilterState>,
    request: &AdHocFilters,
) -> Filtered<Vec<Recipe>> {
    recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    apply(recipes, session, request)
}

impl Recipe {
    /// Lower-cased field text; the ingredient blob is flattened and
    /// lower-cased in a single pass.
    fn lowered_text(&self, field: TextField) -> String {
        match field {
            TextField::Title => self.title.to_lowercase(),
            TextField::Description => self.description.to_lowercase(),
            TextField::OriginCountry => self
                .origin_country
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default(),
            TextField::Ingredients => self.ingredients.search_text(),
        }
    }

    fn tag(&self, field: TagField) -> Option<&str> {
        match field {
            TagField::HealthCondition => self.health_condition.as_deref(),
            TagField::Dietary => self.dietary.as_deref(),
            TagField::MealTime => self.meal_time.as_deref(),
            TagField::MealType => self.meal_type.as_deref(),
        }
    }
}

impl RecipeFilter for Vec<Recipe> {
    fn matching_any(mut self, fields: &[TextField], needle: &str) -> Self {
        let needle = needle.to_lowercase();

        self.retain(|recipe| {
            fields
                .iter()
                .any(|field| recipe.lowered_text(*field).contains(needle.as_str()))
        });
        self
    }

    fn excluding_any(mut self, field: TextField, needles: &[String]) -> Self {
        let needles = needles
            .iter()
            .map(|needle| needle.to_lowercase())
            .collect::<Vec<_>>();

        self.retain(|recipe| {
            let haystack = recipe.lowered_text(field);
            !needles.iter().any(|needle| haystack.contains(needle.as_str()))
        });
        self
    }

    fn tag_equals(mut self, field: TagField, value: &str) -> Self {
        self.retain(|recipe| recipe.tag(field) == Some(value));
        self
    }

    fn tag_in(mut self, field: TagField, values: &[String]) -> Self {
        self.retain(|recipe| {
            recipe
                .tag(field)
                .is_some_and(|tag| values.iter().any(|value| value == tag))
        });
        self
    }

    fn budget_at_least(mut self, min: f64) -> Self {
        self.retain(|recipe| recipe.budget.is_some_and(|budget| budget >= min));
        self
    }

    fn budget_at_most(mut self, max: f64) -> Self {
        self.retain(|recipe| recipe.budget.is_some_and(|budget| budget <= max));
        self
    }
}
