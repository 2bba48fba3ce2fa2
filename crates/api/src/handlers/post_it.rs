//! Handlers for the `/postit` resource and the completed listing.

use axum::extract::State;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use stickit_core::error::CoreError;
use stickit_core::types::{checkbox_checked, DbId};
use stickit_core::validation::{validate_description, validate_title};
use stickit_core::weekday::Weekday;
use stickit_db::models::category::Category;
use stickit_db::models::post_it::{CreatePostIt, PostIt, UpdatePostIt};
use stickit_db::repositories::{CategoryRepo, PostItRepo};
use stickit_db::DbPool;

use crate::error::AppResult;
use crate::extract::{Form, Path, Query};
use crate::handlers::category::{owned_by_id as owned_category, TitleParam};
use crate::middleware::auth::SessionUser;
use crate::response::{render, ViewResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /postit`.
#[derive(Debug, Deserialize)]
pub struct NewPostItForm {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    /// Weekday name, any case.
    pub day: String,
    /// Checkbox: present as `"on"` when ticked, absent otherwise.
    pub pinned: Option<String>,
}

/// Form body for `POST /postit/update`.
#[derive(Debug, Deserialize)]
pub struct UpdatePostItForm {
    pub id: DbId,
    pub description: String,
    pub category_id: DbId,
    pub day: String,
    pub pinned: Option<String>,
}

/// Data for the add and update forms.
#[derive(Debug, Serialize)]
pub struct PostItForm {
    pub post_it: Option<PostIt>,
    pub categories: Vec<Category>,
    pub weekdays: [Weekday; 7],
}

#[derive(Debug, Serialize)]
pub struct PostItPage {
    pub post_it: PostIt,
}

#[derive(Debug, Serialize)]
pub struct PostItList {
    pub post_its: Vec<PostIt>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /postit
pub async fn show_form(
    State(state): State<AppState>,
    session: SessionUser,
) -> AppResult<ViewResponse<PostItForm>> {
    let categories = CategoryRepo::list_by_user(&state.pool, session.user.id).await?;
    let message = if categories.is_empty() {
        "Create a category before adding post-its"
    } else {
        "Adding Post-it"
    };
    Ok(render(
        "addPostIt",
        message,
        PostItForm {
            post_it: None,
            categories,
            weekdays: Weekday::ALL,
        },
    ))
}

/// POST /postit
pub async fn create_post_it(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<NewPostItForm>,
) -> AppResult<ViewResponse<PostItPage>> {
    validate_title(&input.title)?;
    validate_description(&input.description)?;
    let day: Weekday = input.day.parse()?;
    let title = input.title.trim();
    let user_id = session.user.id;

    owned_category(&state.pool, user_id, input.category_id).await?;
    if PostItRepo::find_by_title(&state.pool, user_id, title).await?.is_some() {
        return Err(CoreError::Conflict(format!("Post-it '{title}' already exists")).into());
    }

    let post_it = PostItRepo::create(
        &state.pool,
        &CreatePostIt {
            user_id,
            category_id: input.category_id,
            title: title.to_string(),
            description: input.description.trim().to_string(),
            pinned: checkbox_checked(input.pinned.as_deref()),
            day_of_week: day,
        },
    )
    .await?;

    tracing::info!(post_it_id = post_it.id, day = %day, "Post-it created");
    let message = format!("'{}' added successfully", post_it.title);
    Ok(render("postItPage", message, PostItPage { post_it }))
}

/// GET /postit/find?title=
pub async fn find_post_it(
    State(state): State<AppState>,
    session: SessionUser,
    Query(params): Query<TitleParam>,
) -> AppResult<ViewResponse<PostItPage>> {
    let title = params.title.trim();
    let post_it = PostItRepo::find_by_title(&state.pool, session.user.id, title)
        .await?
        .ok_or_else(|| CoreError::not_found("Post-it", title))?;
    Ok(render("postItPage", "", PostItPage { post_it }))
}

/// GET /postits
pub async fn list_post_its(
    State(state): State<AppState>,
    session: SessionUser,
) -> AppResult<ViewResponse<PostItList>> {
    let post_its = PostItRepo::list_by_user(&state.pool, session.user.id).await?;
    let message = if post_its.is_empty() {
        "No post-its yet"
    } else {
        ""
    };
    Ok(render("showAllPostIts", message, PostItList { post_its }))
}

/// GET /update/{id}
///
/// The update form, prefilled with the post-it's current values.
pub async fn show_update_form(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<ViewResponse<PostItForm>> {
    let post_it = owned_post_it(&state.pool, session.user.id, id).await?;
    let categories = CategoryRepo::list_by_user(&state.pool, session.user.id).await?;
    let message = format!("Updating '{}'", post_it.title);
    Ok(render(
        "updatePostIt",
        message,
        PostItForm {
            post_it: Some(post_it),
            categories,
            weekdays: Weekday::ALL,
        },
    ))
}

/// POST /postit/update
pub async fn update_post_it(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<UpdatePostItForm>,
) -> AppResult<ViewResponse<PostItPage>> {
    validate_description(&input.description)?;
    let day: Weekday = input.day.parse()?;
    let user_id = session.user.id;

    let existing = owned_post_it(&state.pool, user_id, input.id).await?;
    owned_category(&state.pool, user_id, input.category_id).await?;

    let update = UpdatePostIt {
        description: input.description.trim().to_string(),
        day_of_week: day,
        category_id: input.category_id,
        pinned: checkbox_checked(input.pinned.as_deref()),
    };
    let post_it = PostItRepo::update_by_title(&state.pool, user_id, &existing.title, &update)
        .await?
        .ok_or_else(|| CoreError::not_found("Post-it", &existing.title))?;

    let message = format!("'{}' updated", post_it.title);
    Ok(render("postItPage", message, PostItPage { post_it }))
}

/// POST /postit/delete/{id}
pub async fn delete_post_it(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !PostItRepo::delete(&state.pool, session.user.id, id).await? {
        return Err(CoreError::not_found("Post-it", id).into());
    }
    tracing::info!(post_it_id = id, "Post-it deleted");
    Ok(Redirect::to("/postits"))
}

/// POST /postit/complete/{id}
pub async fn complete_post_it(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    PostItRepo::mark_completed(&state.pool, session.user.id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Post-it", id))?;
    tracing::info!(post_it_id = id, "Post-it completed");
    Ok(Redirect::to("/complete"))
}

/// GET /complete
pub async fn list_completed(
    State(state): State<AppState>,
    session: SessionUser,
) -> AppResult<ViewResponse<PostItList>> {
    let post_its = PostItRepo::list_completed(&state.pool, session.user.id).await?;
    let message = format!("{} completed post-it(s)", post_its.len());
    Ok(render("completedPage", message, PostItList { post_its }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a post-it by ID, treating other users' post-its as missing.
async fn owned_post_it(pool: &DbPool, user_id: DbId, id: DbId) -> AppResult<PostIt> {
    Ok(PostItRepo::find_by_id(pool, id)
        .await?
        .filter(|p| p.user_id == user_id)
        .ok_or_else(|| CoreError::not_found("Post-it", id))?)
}
