use chefshare_db::table::{self, RecipeReview, RecipeSaved};
use sea_query::{
    Cond, Expr, ExprTrait, Func, LikeExpr, Order, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{
    AdHocFilters, Filtered, IngredientList, Instructions, Recipe, RecipeFilter,
    SessionFilterState, TagField, TextField,
};

#[derive(Clone)]
pub struct Query(pub SqlitePool);

#[derive(Debug, Default, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub chef_id: String,
    pub title: String,
    pub description: String,
    pub origin_country: Option<String>,
    pub ingredients: sqlx::types::Json<IngredientList>,
    pub instructions: sqlx::types::Json<Instructions>,
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

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            chef_id: row.chef_id,
            title: row.title,
            description: row.description,
            origin_country: row.origin_country,
            ingredients: row.ingredients.0,
            instructions: row.instructions.0,
            health_condition: row.health_condition,
            dietary: row.dietary,
            meal_type: row.meal_type,
            meal_time: row.meal_time,
            budget: row.budget,
            currency: row.currency,
            cooking_time: row.cooking_time,
            video_url: row.video_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewRow {
    pub id: String,
    pub recipe_id: String,
    pub user_id: String,
    pub rating: u8,
    pub content: String,
    pub created_at: i64,
}

/// SQL backing of [`RecipeFilter`]: every stage adds one `WHERE` narrowing.
#[derive(Debug, Clone)]
pub struct RecipeSelect(pub SelectStatement);

impl RecipeSelect {
    pub fn new() -> Self {
        let statement = sea_query::Query::select()
            .columns([
                (table::Recipe::Table, table::Recipe::Id),
                (table::Recipe::Table, table::Recipe::ChefId),
                (table::Recipe::Table, table::Recipe::Title),
                (table::Recipe::Table, table::Recipe::Description),
                (table::Recipe::Table, table::Recipe::OriginCountry),
                (table::Recipe::Table, table::Recipe::Ingredients),
                (table::Recipe::Table, table::Recipe::Instructions),
                (table::Recipe::Table, table::Recipe::HealthCondition),
                (table::Recipe::Table, table::Recipe::Dietary),
                (table::Recipe::Table, table::Recipe::MealType),
                (table::Recipe::Table, table::Recipe::MealTime),
                (table::Recipe::Table, table::Recipe::Budget),
                (table::Recipe::Table, table::Recipe::Currency),
                (table::Recipe::Table, table::Recipe::CookingTime),
                (table::Recipe::Table, table::Recipe::VideoUrl),
                (table::Recipe::Table, table::Recipe::CreatedAt),
                (table::Recipe::Table, table::Recipe::UpdatedAt),
            ])
            .from(table::Recipe::Table)
            .to_owned();

        Self(statement)
    }

    /// Newest first; the id breaks ties between recipes created in the same
    /// second.
    pub fn newest_first(mut self) -> Self {
        self.0
            .order_by(table::Recipe::CreatedAt, Order::Desc)
            .order_by(table::Recipe::Id, Order::Desc);
        self
    }
}

impl Default for RecipeSelect {
    fn default() -> Self {
        Self::new()
    }
}

/// Columns holding the text lower-cased on write, so matching never relies on
/// SQLite's ASCII-only `LOWER()`.
fn text_column(field: TextField) -> table::Recipe {
    match field {
        TextField::Title => table::Recipe::TitleText,
        TextField::Description => table::Recipe::DescriptionText,
        TextField::OriginCountry => table::Recipe::OriginCountryText,
        TextField::Ingredients => table::Recipe::IngredientsText,
    }
}

fn tag_column(field: TagField) -> table::Recipe {
    match field {
        TagField::HealthCondition => table::Recipe::HealthCondition,
        TagField::Dietary => table::Recipe::Dietary,
        TagField::MealTime => table::Recipe::MealTime,
        TagField::MealType => table::Recipe::MealType,
    }
}

/// `%needle%` with LIKE wildcards in the needle taken literally.
fn contains_pattern(needle: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(needle.len());

    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

impl RecipeFilter for RecipeSelect {
    fn matching_any(mut self, fields: &[TextField], needle: &str) -> Self {
        let cond = fields.iter().fold(Cond::any(), |cond, field| {
            cond.add(Expr::col(text_column(*field)).like(contains_pattern(needle)))
        });

        self.0.cond_where(cond);
        self
    }

    fn excluding_any(mut self, field: TextField, needles: &[String]) -> Self {
        for needle in needles {
            self.0
                .and_where(Expr::col(text_column(field)).not_like(contains_pattern(needle)));
        }
        self
    }

    fn tag_equals(mut self, field: TagField, value: &str) -> Self {
        self.0.and_where(Expr::col(tag_column(field)).eq(value));
        self
    }

    fn tag_in(mut self, field: TagField, values: &[String]) -> Self {
        self.0
            .and_where(Expr::col(tag_column(field)).is_in(values.iter().cloned()));
        self
    }

    fn budget_at_least(mut self, min: f64) -> Self {
        self.0.and_where(Expr::col(table::Recipe::Budget).gte(min));
        self
    }

    fn budget_at_most(mut self, max: f64) -> Self {
        self.0.and_where(Expr::col(table::Recipe::Budget).lte(max));
        self
    }
}

impl Query {
    /// Recipes visible on the dashboard for the given session and request.
    pub async fn filter(
        &self,
        session: Option<&SessionFilterState>,
        request: &AdHocFilters,
    ) -> anyhow::Result<Filtered<Vec<Recipe>>> {
        let Filtered {
            recipes: select,
            is_recommendation_active,
        } = crate::apply(RecipeSelect::new(), session, request);

        let (sql, values) = select.newest_first().0.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(Filtered {
            recipes: rows.into_iter().map(Recipe::from).collect(),
            is_recommendation_active,
        })
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<Recipe>> {
        let (sql, values) = RecipeSelect::new()
            .0
            .and_where(Expr::col(table::Recipe::Id).eq(id.into()))
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Recipe::from))
    }

    /// Mean review rating, or 0 when the recipe has no reviews.
    pub async fn average_rating(&self, recipe_id: impl Into<String>) -> anyhow::Result<f64> {
        let (sql, values) = sea_query::Query::select()
            .expr(Func::avg(Expr::col(RecipeReview::Rating)))
            .from(RecipeReview::Table)
            .and_where(Expr::col(RecipeReview::RecipeId).eq(recipe_id.into()))
            .build_sqlx(SqliteQueryBuilder);

        let (average,) = sqlx::query_as_with::<_, (Option<f64>,), _>(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(average.unwrap_or(0.0))
    }

    pub async fn reviews(&self, recipe_id: impl Into<String>) -> anyhow::Result<Vec<ReviewRow>> {
        let (sql, values) = sea_query::Query::select()
            .columns([
                RecipeReview::Id,
                RecipeReview::RecipeId,
                RecipeReview::UserId,
                RecipeReview::Rating,
                RecipeReview::Content,
                RecipeReview::CreatedAt,
            ])
            .from(RecipeReview::Table)
            .and_where(Expr::col(RecipeReview::RecipeId).eq(recipe_id.into()))
            .order_by(RecipeReview::CreatedAt, Order::Desc)
            .order_by(RecipeReview::Id, Order::Desc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ReviewRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn is_saved(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> anyhow::Result<bool> {
        let (sql, values) = sea_query::Query::select()
            .column(RecipeSaved::RecipeId)
            .from(RecipeSaved::Table)
            .and_where(Expr::col(RecipeSaved::RecipeId).eq(recipe_id.into()))
            .and_where(Expr::col(RecipeSaved::UserId).eq(user_id.into()))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.is_some())
    }

    /// Recipes the user saved, most recently saved first.
    pub async fn saved(&self, user_id: impl Into<String>) -> anyhow::Result<Vec<Recipe>> {
        let mut select = RecipeSelect::new().0;
        select
            .inner_join(
                RecipeSaved::Table,
                Expr::col((RecipeSaved::Table, RecipeSaved::RecipeId))
                    .equals((table::Recipe::Table, table::Recipe::Id)),
            )
            .and_where(Expr::col((RecipeSaved::Table, RecipeSaved::UserId)).eq(user_id.into()))
            .order_by((RecipeSaved::Table, RecipeSaved::CreatedAt), Order::Desc);

        let (sql, values) = select.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}
