use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Form values meaning "no tag selected".
pub const NOT_SELECTED: [&str; 3] = ["None", "", "Select"];

/// Returns the tag when it carries a real selection.
pub fn selected(tag: Option<&str>) -> Option<&str> {
    tag.filter(|tag| !NOT_SELECTED.contains(tag))
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum DietaryTag {
    Vegan,
    Vegetarian,
    Pescatarian,
    Halal,
    Kosher,
    #[strum(to_string = "Gluten-Free")]
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[strum(to_string = "Dairy-Free")]
    #[serde(rename = "Dairy-Free")]
    DairyFree,
    #[strum(to_string = "Nut-Free")]
    #[serde(rename = "Nut-Free")]
    NutFree,
    Keto,
    Mediterranean,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum HealthCondition {
    Diabetes,
    Hypertension,
    #[strum(to_string = "Heart Disease")]
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    #[strum(to_string = "Celiac Disease")]
    #[serde(rename = "Celiac Disease")]
    CeliacDisease,
    #[strum(to_string = "Lactose Intolerance")]
    #[serde(rename = "Lactose Intolerance")]
    LactoseIntolerance,
    Gout,
    #[strum(to_string = "Kidney Disease")]
    #[serde(rename = "Kidney Disease")]
    KidneyDisease,
    Anemia,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum MealType {
    Appetizer,
    #[strum(to_string = "Main Course")]
    #[serde(rename = "Main Course")]
    MainCourse,
    #[strum(to_string = "Side Dish")]
    #[serde(rename = "Side Dish")]
    SideDish,
    Dessert,
    Soup,
    Salad,
    Drink,
}

/// Offered values of each tag field, as shown on the authoring and
/// recommendation forms.
#[derive(Debug, Clone, Serialize)]
pub struct Choices {
    pub dietary: Vec<String>,
    pub health_condition: Vec<String>,
    pub meal_time: Vec<String>,
    pub meal_type: Vec<String>,
}

impl Choices {
    pub fn offered() -> Self {
        Self {
            dietary: DietaryTag::VARIANTS.iter().map(|v| v.to_string()).collect(),
            health_condition: HealthCondition::VARIANTS
                .iter()
                .map(|v| v.to_string())
                .collect(),
            meal_time: MealTime::VARIANTS.iter().map(|v| v.to_string()).collect(),
            meal_type: MealType::VARIANTS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IngredientRepr")]
pub struct Ingredient {
    pub name: String,
    pub qty: String,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qty: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientRepr {
    Name(String),
    Entry {
        name: String,
        #[serde(default, alias = "quantity")]
        qty: Option<serde_json::Value>,
    },
}

impl From<IngredientRepr> for Ingredient {
    fn from(value: IngredientRepr) -> Self {
        match value {
            IngredientRepr::Name(name) => Ingredient::named(name),
            IngredientRepr::Entry { name, qty } => {
                let qty = match qty {
                    Some(serde_json::Value::String(qty)) => qty,
                    Some(serde_json::Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                };

                Ingredient { name, qty }
            }
        }
    }
}

/// Ordered ingredient entries of a recipe.
///
/// Accepts a JSON list (of names or `{name, qty}` objects) or a raw string
/// blob. A blob that is not a JSON list becomes a single entry holding the
/// whole text so nothing the author typed is lost.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ListRepr<Ingredient>")]
pub struct IngredientList(pub Vec<Ingredient>);

impl IngredientList {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<Vec<Ingredient>>(raw) {
            Ok(entries) => Self(entries),
            Err(_) => Self(vec![Ingredient::named(raw)]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.0.iter()
    }

    /// Lower-cased flattening searched by the conflict validator and the
    /// allergy exclusion. Every name and quantity survives as a substring.
    pub fn search_text(&self) -> String {
        self.0
            .iter()
            .map(|ingredient| {
                if ingredient.qty.is_empty() {
                    ingredient.name.to_owned()
                } else {
                    format!("{} {}", ingredient.qty, ingredient.name)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }
}

impl<S: Into<String>> FromIterator<S> for IngredientList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Ingredient::named).collect())
    }
}

/// Ordered instruction steps of a recipe, parsed with the same leniency as
/// [`IngredientList`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ListRepr<String>")]
pub struct Instructions(pub Vec<String>);

impl Instructions {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(steps) => Self(steps),
            Err(_) => Self(vec![raw.to_owned()]),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListRepr<T> {
    List(Vec<T>),
    Raw(String),
}

impl From<ListRepr<Ingredient>> for IngredientList {
    fn from(value: ListRepr<Ingredient>) -> Self {
        match value {
            ListRepr::List(entries) => Self(entries),
            ListRepr::Raw(raw) => Self::parse(&raw),
        }
    }
}

impl From<ListRepr<String>> for Instructions {
    fn from(value: ListRepr<String>) -> Self {
        match value {
            ListRepr::List(steps) => Self(steps),
            ListRepr::Raw(raw) => Self::parse(&raw),
        }
    }
}

/// Recipe as seen by the validator and the filter pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub chef_id: String,
    pub title: String,
    pub description: String,
    pub origin_country: Option<String>,
    pub ingredients: IngredientList,
    pub instructions: Instructions,
    pub health_condition: Option<String>,
    pub dietary: Option<String>,
    pub meal_type: Option<String>,
    pub meal_time: Option<String>,
    pub budget: Option<f64>,
    pub currency: String,
    pub cooking_time: u32,
    pub video_url: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}
