use std::str::FromStr;

use chefshare_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    DietaryTag, HealthCondition, IngredientList, Instructions, MealTime, MealType, selected,
};

mod create;
mod delete;
mod review;
mod save;
mod update;

pub use review::ReviewInput;
pub use save::SaveToggled;

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Owner of a recipe, `None` when it does not exist.
    async fn owner(&self, id: &str) -> chefshare_shared::Result<Option<String>> {
        let (sql, values) = Query::select()
            .column(Recipe::ChefId)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(|(chef_id,)| chef_id))
    }

    async fn ensure_owner(&self, id: &str, request_by: &str) -> chefshare_shared::Result<()> {
        let Some(owner) = self.owner(id).await? else {
            chefshare_shared::not_found!("recipe");
        };

        if owner != request_by {
            chefshare_shared::forbidden!("not owner of recipe");
        }

        Ok(())
    }
}

/// Authoring payload shared by create and update.
#[derive(Validate, Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecipeInput {
    #[validate(length(min = 3, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(max = 100))]
    pub origin_country: Option<String>,
    #[serde(default)]
    pub ingredients: IngredientList,
    #[serde(default)]
    pub instructions: Instructions,
    #[validate(custom(function = "validate_health_condition"))]
    pub health_condition: Option<String>,
    #[validate(custom(function = "validate_dietary"))]
    pub dietary: Option<String>,
    #[validate(custom(function = "validate_meal_type"))]
    pub meal_type: Option<String>,
    #[validate(custom(function = "validate_meal_time"))]
    pub meal_time: Option<String>,
    #[validate(range(min = 0.0))]
    pub budget: Option<f64>,
    #[serde(default = "default_currency")]
    #[validate(length(min = 1, max = 10))]
    pub currency: String,
    #[serde(default = "default_cooking_time")]
    #[validate(range(min = 1, max = 1440))]
    pub cooking_time: u32,
    #[validate(url)]
    pub video_url: Option<String>,
}

fn default_currency() -> String {
    "XAF".to_owned()
}

fn default_cooking_time() -> u32 {
    30
}

impl RecipeInput {
    /// Tag values with the "not selected" sentinels mapped to `None`.
    fn tag(value: &Option<String>) -> Option<String> {
        selected(value.as_deref()).map(str::to_owned)
    }

    /// Lower-cased origin country searched by the listing.
    fn origin_country_text(&self) -> Option<String> {
        self.origin_country.as_deref().map(str::to_lowercase)
    }

    /// Blocks the write when the ingredients clash with the chosen tags.
    fn check_conflicts(&self) -> chefshare_shared::Result<()> {
        crate::validate(
            &self.ingredients.search_text(),
            self.dietary.as_deref(),
            self.health_condition.as_deref(),
        )
        .into_result()
    }
}

fn choice<T: FromStr>(value: &str, code: &'static str) -> Result<(), validator::ValidationError> {
    if selected(Some(value)).is_none() || T::from_str(value).is_ok() {
        return Ok(());
    }

    let mut error = validator::ValidationError::new(code);
    error.message = Some(std::borrow::Cow::from(format!("'{value}' is not an offered choice")));
    Err(error)
}

fn validate_dietary(value: &str) -> Result<(), validator::ValidationError> {
    choice::<DietaryTag>(value, "invalid_dietary")
}

fn validate_health_condition(value: &str) -> Result<(), validator::ValidationError> {
    choice::<HealthCondition>(value, "invalid_health_condition")
}

fn validate_meal_type(value: &str) -> Result<(), validator::ValidationError> {
    choice::<MealType>(value, "invalid_meal_type")
}

fn validate_meal_time(value: &str) -> Result<(), validator::ValidationError> {
    choice::<MealTime>(value, "invalid_meal_time")
}
