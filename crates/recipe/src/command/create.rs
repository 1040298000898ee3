use chefshare_db::table::Recipe;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    #[tracing::instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: RecipeInput,
        chef_id: &str,
    ) -> chefshare_shared::Result<String> {
        input.validate()?;
        input.check_conflicts()?;

        let id = ulid::Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::ChefId,
                Recipe::Title,
                Recipe::TitleText,
                Recipe::Description,
                Recipe::DescriptionText,
                Recipe::OriginCountry,
                Recipe::OriginCountryText,
                Recipe::Ingredients,
                Recipe::IngredientsText,
                Recipe::Instructions,
                Recipe::HealthCondition,
                Recipe::Dietary,
                Recipe::MealType,
                Recipe::MealTime,
                Recipe::Budget,
                Recipe::Currency,
                Recipe::CookingTime,
                Recipe::VideoUrl,
                Recipe::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                chef_id.into(),
                input.title.to_owned().into(),
                input.title.to_lowercase().into(),
                input.description.to_owned().into(),
                input.description.to_lowercase().into(),
                input.origin_country.to_owned().into(),
                input.origin_country_text().into(),
                serde_json::to_string(&input.ingredients)?.into(),
                input.ingredients.search_text().into(),
                serde_json::to_string(&input.instructions)?.into(),
                RecipeInput::tag(&input.health_condition).into(),
                RecipeInput::tag(&input.dietary).into(),
                RecipeInput::tag(&input.meal_type).into(),
                RecipeInput::tag(&input.meal_time).into(),
                input.budget.into(),
                input.currency.to_owned().into(),
                input.cooking_time.into(),
                input.video_url.to_owned().into(),
                chefshare_shared::timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(recipe = %id, "Recipe created");

        Ok(id)
    }
}
