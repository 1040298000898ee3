use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chefshare_recipe::{Recipe, ReviewRow, video_id};
use serde::Serialize;

use crate::{error::AppError, routes::AppState, session::Session};

#[derive(Serialize)]
pub struct DetailView {
    pub recipe: Recipe,
    pub average_rating: f64,
    pub video_id: Option<String>,
    pub is_saved: bool,
    pub reviews: Vec<ReviewRow>,
}

/// GET /recipes/{id} - Recipe with its reviews and rating
pub async fn page(
    session: Session,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(recipe) = app.recipe_query.find(&id).await? else {
        return Err(chefshare_shared::Error::NotFound("recipe".to_owned()).into());
    };

    let average_rating = app.recipe_query.average_rating(&id).await?;
    let reviews = app.recipe_query.reviews(&id).await?;
    let is_saved = app.recipe_query.is_saved(&id, &session.id).await?;
    let video_id = recipe
        .video_url
        .as_deref()
        .and_then(video_id)
        .map(str::to_owned);

    Ok((
        session.jar,
        Json(DetailView {
            recipe,
            average_rating,
            video_id,
            is_saved,
            reviews,
        }),
    ))
}
