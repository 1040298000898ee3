use chefshare_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    #[tracing::instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: &str,
        input: RecipeInput,
        request_by: &str,
    ) -> chefshare_shared::Result<()> {
        input.validate()?;
        self.ensure_owner(id, request_by).await?;
        input.check_conflicts()?;

        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Title, input.title.to_owned().into()),
                (Recipe::TitleText, input.title.to_lowercase().into()),
                (Recipe::Description, input.description.to_owned().into()),
                (
                    Recipe::DescriptionText,
                    input.description.to_lowercase().into(),
                ),
                (Recipe::OriginCountry, input.origin_country.to_owned().into()),
                (Recipe::OriginCountryText, input.origin_country_text().into()),
                (
                    Recipe::Ingredients,
                    serde_json::to_string(&input.ingredients)?.into(),
                ),
                (Recipe::IngredientsText, input.ingredients.search_text().into()),
                (
                    Recipe::Instructions,
                    serde_json::to_string(&input.instructions)?.into(),
                ),
                (
                    Recipe::HealthCondition,
                    RecipeInput::tag(&input.health_condition).into(),
                ),
                (Recipe::Dietary, RecipeInput::tag(&input.dietary).into()),
                (Recipe::MealType, RecipeInput::tag(&input.meal_type).into()),
                (Recipe::MealTime, RecipeInput::tag(&input.meal_time).into()),
                (Recipe::Budget, input.budget.into()),
                (Recipe::Currency, input.currency.to_owned().into()),
                (Recipe::CookingTime, input.cooking_time.into()),
                (Recipe::VideoUrl, input.video_url.to_owned().into()),
                (Recipe::UpdatedAt, chefshare_shared::timestamp().into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
