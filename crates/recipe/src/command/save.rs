use chefshare_db::table::{Recipe, RecipeSaved};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveToggled {
    pub saved: bool,
    pub recipe_title: String,
}

impl super::Command {
    /// Saves the recipe for the user, or unsaves it when already saved.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_save(
        &self,
        recipe_id: &str,
        user_id: &str,
    ) -> chefshare_shared::Result<SaveToggled> {
        let (sql, values) = Query::select()
            .column(Recipe::Title)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(recipe_id))
            .build_sqlx(SqliteQueryBuilder);

        let Some((recipe_title,)) = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            chefshare_shared::not_found!("recipe");
        };

        let (sql, values) = Query::delete()
            .from_table(RecipeSaved::Table)
            .and_where(Expr::col(RecipeSaved::RecipeId).eq(recipe_id))
            .and_where(Expr::col(RecipeSaved::UserId).eq(user_id))
            .build_sqlx(SqliteQueryBuilder);

        let removed = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .rows_affected();

        if removed > 0 {
            return Ok(SaveToggled {
                saved: false,
                recipe_title,
            });
        }

        let (sql, values) = Query::insert()
            .into_table(RecipeSaved::Table)
            .columns([
                RecipeSaved::UserId,
                RecipeSaved::RecipeId,
                RecipeSaved::CreatedAt,
            ])
            .values_panic([
                user_id.into(),
                recipe_id.into(),
                chefshare_shared::timestamp().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(SaveToggled {
            saved: true,
            recipe_title,
        })
    }
}
