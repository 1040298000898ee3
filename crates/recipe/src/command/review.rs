use chefshare_db::table::RecipeReview;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Clone, Debug, Deserialize)]
pub struct ReviewInput {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

impl super::Command {
    #[tracing::instrument(skip(self, input))]
    pub async fn add_review(
        &self,
        recipe_id: &str,
        input: ReviewInput,
        user_id: &str,
    ) -> chefshare_shared::Result<String> {
        input.validate()?;

        if self.owner(recipe_id).await?.is_none() {
            chefshare_shared::not_found!("recipe");
        }

        let id = ulid::Ulid::new().to_string();
        let (sql, values) = Query::insert()
            .into_table(RecipeReview::Table)
            .columns([
                RecipeReview::Id,
                RecipeReview::RecipeId,
                RecipeReview::UserId,
                RecipeReview::Rating,
                RecipeReview::Content,
                RecipeReview::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                recipe_id.into(),
                user_id.into(),
                input.rating.into(),
                input.content.into(),
                chefshare_shared::timestamp().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(id)
    }
}
