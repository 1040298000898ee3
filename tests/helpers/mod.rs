//! Router and database setup shared by the HTTP tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chefshare::config::{
    Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SessionBackend, SessionConfig,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::str::FromStr;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub cookie: Option<String>,
    pub location: Option<String>,
    pub body: Value,
}

pub fn test_config(backend: SessionBackend) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        session: SessionConfig {
            backend,
            cookie_name: "sid".to_owned(),
        },
    }
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_backend(SessionBackend::Memory).await
    }

    pub async fn with_backend(backend: SessionBackend) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.child("chefshare.db");
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        chefshare_db::migrate(&pool).await?;

        let state = chefshare::app_state(test_config(backend), pool.clone(), pool.clone());

        Ok(Self {
            router: chefshare::routes::router(state),
            pool,
            _dir: dir,
        })
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, cookie, None).await
    }

    pub async fn post_json(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            cookie,
            Some(("application/json", body.to_string())),
        )
        .await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        cookie: Option<&str>,
        fields: &[(&str, &str)],
    ) -> TestResponse {
        let body = serde_urlencoded::to_string(fields).unwrap();

        self.send(
            Method::POST,
            uri,
            cookie,
            Some(("application/x-www-form-urlencoded", body)),
        )
        .await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, cookie, None).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<(&str, String)>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some((content_type, body)) => builder
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_owned);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            cookie,
            location,
            body,
        }
    }
}

/// Starts a session and returns its `sid=...` cookie pair.
pub async fn start_session(app: &TestApp) -> String {
    app.get("/dashboard", None)
        .await
        .cookie
        .expect("new sessions receive a cookie")
}

pub fn recipe_json(title: &str, ingredients: &[&str]) -> Value {
    serde_json::json!({
        "title": title,
        "description": format!("How to cook {title}"),
        "ingredients": ingredients,
    })
}

/// Pins the creation timestamp so listing order is deterministic.
pub async fn set_created_at(pool: &SqlitePool, id: &str, created_at: i64) -> anyhow::Result<()> {
    sqlx::query("UPDATE recipe SET created_at = ? WHERE id = ?")
        .bind(created_at)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
