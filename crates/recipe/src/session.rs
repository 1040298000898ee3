//! Per-session storage of the recommendation preference.
//!
//! Overwrites are last writer wins. A missing key reads as `None`.

use std::collections::HashMap;
use std::sync::Arc;

use chefshare_db::table::FilterSession;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use tokio::sync::RwLock;

use crate::SessionFilterState;

#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<SessionFilterState>>;
    async fn set(&self, key: &str, state: SessionFilterState) -> anyhow::Result<()>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Default)]
pub struct MemorySessionStore {
    states: Arc<RwLock<HashMap<String, SessionFilterState>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<SessionFilterState>> {
        Ok(self.states.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, state: SessionFilterState) -> anyhow::Result<()> {
        self.states.write().await.insert(key.to_owned(), state);

        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.states.write().await.remove(key);

        Ok(())
    }
}

/// Session states kept in the `filter_session` table, so they survive a
/// restart and are shared between server processes.
#[derive(Clone)]
pub struct SqliteSessionStore(pub SqlitePool);

#[derive(FromRow)]
struct FilterSessionRow {
    health_condition: Option<String>,
    dietary: Option<String>,
    allergies: Option<String>,
}

#[async_trait::async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<SessionFilterState>> {
        let (sql, values) = Query::select()
            .columns([
                FilterSession::HealthCondition,
                FilterSession::Dietary,
                FilterSession::Allergies,
            ])
            .from(FilterSession::Table)
            .and_where(Expr::col(FilterSession::Id).eq(key))
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, FilterSessionRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(|row| SessionFilterState {
            health_condition: row.health_condition,
            dietary: row.dietary,
            allergies: row.allergies,
        }))
    }

    async fn set(&self, key: &str, state: SessionFilterState) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(FilterSession::Table)
            .columns([
                FilterSession::Id,
                FilterSession::HealthCondition,
                FilterSession::Dietary,
                FilterSession::Allergies,
                FilterSession::UpdatedAt,
            ])
            .values_panic([
                key.into(),
                state.health_condition.into(),
                state.dietary.into(),
                state.allergies.into(),
                chefshare_shared::timestamp().into(),
            ])
            .on_conflict(
                OnConflict::column(FilterSession::Id)
                    .update_columns([
                        FilterSession::HealthCondition,
                        FilterSession::Dietary,
                        FilterSession::Allergies,
                        FilterSession::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let (sql, values) = Query::delete()
            .from_table(FilterSession::Table)
            .and_where(Expr::col(FilterSession::Id).eq(key))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_overwrites_and_deletes() -> anyhow::Result<()> {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("sid").await?, None);

        store
            .set(
                "sid",
                SessionFilterState {
                    dietary: Some("Vegan".to_owned()),
                    ..Default::default()
                },
            )
            .await?;
        store
            .set(
                "sid",
                SessionFilterState {
                    health_condition: Some("Gout".to_owned()),
                    ..Default::default()
                },
            )
            .await?;

        let state = store.get("sid").await?.unwrap_or_default();
        assert_eq!(state.health_condition.as_deref(), Some("Gout"));
        assert_eq!(state.dietary, None);

        store.delete("sid").await?;
        store.delete("sid").await?;
        assert_eq!(store.get("sid").await?, None);

        Ok(())
    }
}
