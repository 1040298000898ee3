use chefshare_db::table::{Recipe, RecipeReview, RecipeSaved};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Removes the recipe together with its reviews and saves.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str, request_by: &str) -> chefshare_shared::Result<()> {
        self.ensure_owner(id, request_by).await?;

        let statements = [
            Query::delete()
                .from_table(RecipeReview::Table)
                .and_where(Expr::col(RecipeReview::RecipeId).eq(id))
                .to_owned(),
            Query::delete()
                .from_table(RecipeSaved::Table)
                .and_where(Expr::col(RecipeSaved::RecipeId).eq(id))
                .to_owned(),
            Query::delete()
                .from_table(Recipe::Table)
                .and_where(Expr::col(Recipe::Id).eq(id))
                .to_owned(),
        ];

        let mut tx = self.0.begin().await?;

        for statement in statements {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
