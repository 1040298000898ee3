use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

use crate::routes::AppState;

/// Anonymous session of the requester, identified by the session cookie.
///
/// A first visit gets a fresh id; `jar` then carries the cookie to set and
/// must be returned with the response.
pub struct Session {
    pub id: String,
    pub jar: CookieJar,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let cookie_name = state.config.session.cookie_name.to_owned();

        if let Some(id) = jar
            .get(&cookie_name)
            .map(|cookie| cookie.value().to_owned())
            .filter(|id| !id.is_empty())
        {
            return Ok(Session { id, jar });
        }

        let id = ulid::Ulid::new().to_string();
        tracing::debug!(session = %id, "Starting new session");

        let cookie = Cookie::build((cookie_name, id.to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        Ok(Session {
            id,
            jar: jar.add(cookie),
        })
    }
}
