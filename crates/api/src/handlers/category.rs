//! Handlers for the `/category` resource.
//!
//! Every lookup is scoped to the logged-in user; another user's category
//! reads as not found.

use axum::extract::State;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use stickit_core::error::CoreError;
use stickit_core::palette;
use stickit_core::types::DbId;
use stickit_core::validation::{validate_description, validate_title};
use stickit_db::models::category::{Category, CreateCategory};
use stickit_db::models::color::Color;
use stickit_db::repositories::{CategoryRepo, ColorRepo};
use stickit_db::DbPool;

use crate::error::AppResult;
use crate::extract::{Form, Path, Query};
use crate::middleware::auth::SessionUser;
use crate::response::{render, ViewResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /category`.
#[derive(Debug, Deserialize)]
pub struct NewCategoryForm {
    pub title: String,
    pub description: String,
    /// Palette hex code, with or without a leading `#`.
    pub color: String,
}

/// Form body for `POST /category/update`.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryForm {
    pub title: String,
    pub description: String,
}

/// Title lookup, as a query string or a form body.
#[derive(Debug, Deserialize)]
pub struct TitleParam {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct AddCategoryPage {
    pub colors: Vec<Color>,
}

#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub color: Option<Color>,
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /category
///
/// The add-category form, offering only colors no category holds.
pub async fn show_form(
    State(state): State<AppState>,
    _session: SessionUser,
) -> AppResult<ViewResponse<AddCategoryPage>> {
    let colors = ColorRepo::list_available(&state.pool).await?;
    let message = if colors.is_empty() {
        "Every color is in use; delete a category to free one"
    } else {
        "Adding Category"
    };
    Ok(render("addCategory", message, AddCategoryPage { colors }))
}

/// POST /category
pub async fn create_category(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<NewCategoryForm>,
) -> AppResult<ViewResponse<CategoryPage>> {
    validate_title(&input.title)?;
    validate_description(&input.description)?;
    let color_code = palette::validate_color_code(&input.color)?;
    let title = input.title.trim();
    let user_id = session.user.id;

    if CategoryRepo::find_by_title(&state.pool, user_id, title).await?.is_some() {
        return Err(CoreError::Conflict(format!("Category '{title}' already exists")).into());
    }
    if CategoryRepo::find_id_by_color(&state.pool, color_code).await?.is_some() {
        return Err(color_taken(color_code).into());
    }

    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            user_id,
            title: title.to_string(),
            description: input.description.trim().to_string(),
            color_code: color_code.to_string(),
        },
    )
    .await?;

    let color = claim_color(&state.pool, &category).await?;

    tracing::info!(category_id = category.id, color = %color.color_name, "Category created");
    let message = format!("'{}' added successfully", category.title);
    Ok(render(
        "categoryPage",
        message,
        CategoryPage {
            category,
            color: Some(color),
        },
    ))
}

/// GET /category/find?title=
pub async fn find_category(
    State(state): State<AppState>,
    session: SessionUser,
    Query(params): Query<TitleParam>,
) -> AppResult<ViewResponse<CategoryPage>> {
    let category = owned_by_title(&state.pool, session.user.id, &params.title).await?;
    let color = ColorRepo::find_by_category(&state.pool, category.id).await?;
    Ok(render("categoryPage", "", CategoryPage { category, color }))
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    session: SessionUser,
) -> AppResult<ViewResponse<CategoryList>> {
    let categories = CategoryRepo::list_by_user(&state.pool, session.user.id).await?;
    let message = if categories.is_empty() {
        "No categories yet"
    } else {
        ""
    };
    Ok(render("showAllCategories", message, CategoryList { categories }))
}

/// POST /category/update
///
/// Replace the description of the category with the given title.
pub async fn update_category(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<UpdateCategoryForm>,
) -> AppResult<ViewResponse<CategoryPage>> {
    validate_title(&input.title)?;
    validate_description(&input.description)?;
    let title = input.title.trim();

    let category = CategoryRepo::update_description_by_title(
        &state.pool,
        session.user.id,
        title,
        input.description.trim(),
    )
    .await?
    .ok_or_else(|| CoreError::not_found("Category", title))?;
    let color = ColorRepo::find_by_category(&state.pool, category.id).await?;

    let message = format!("'{}' updated", category.title);
    Ok(render("categoryPage", message, CategoryPage { category, color }))
}

/// POST /category/delete
///
/// Delete by title, freeing its color and removing its post-its.
pub async fn delete_category(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<TitleParam>,
) -> AppResult<ViewResponse<CategoryList>> {
    let user_id = session.user.id;
    let title = input.title.trim();
    let category = owned_by_title(&state.pool, user_id, title).await?;

    let released = ColorRepo::release_category(&state.pool, category.id).await?;
    if !CategoryRepo::delete_by_title(&state.pool, user_id, title).await? {
        return Err(CoreError::not_found("Category", title).into());
    }
    tracing::info!(user_id, %title, released, "Category deleted");

    let categories = CategoryRepo::list_by_user(&state.pool, user_id).await?;
    let message = format!("'{title}' deleted");
    Ok(render("showAllCategories", message, CategoryList { categories }))
}

/// POST /category/delete/{id}
pub async fn delete_category_by_id(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let user_id = session.user.id;
    owned_by_id(&state.pool, user_id, id).await?;

    let released = ColorRepo::release_category(&state.pool, id).await?;
    if !CategoryRepo::delete(&state.pool, user_id, id).await? {
        return Err(CoreError::not_found("Category", id).into());
    }
    tracing::info!(user_id, category_id = id, released, "Category deleted");

    Ok(Redirect::to("/categories"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch one of `user_id`'s categories by title.
async fn owned_by_title(pool: &DbPool, user_id: DbId, title: &str) -> AppResult<Category> {
    let title = title.trim();
    Ok(CategoryRepo::find_by_title(pool, user_id, title)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", title))?)
}

/// Fetch a category by ID, treating other users' categories as missing.
pub(crate) async fn owned_by_id(pool: &DbPool, user_id: DbId, id: DbId) -> AppResult<Category> {
    Ok(CategoryRepo::find_by_id(pool, id)
        .await?
        .filter(|c| c.user_id == user_id)
        .ok_or_else(|| CoreError::not_found("Category", id))?)
}

/// Claim the color a freshly created category names.
///
/// Another request may have claimed it since the availability check; the
/// category is then deleted and the claim reported as a conflict.
pub async fn claim_color(pool: &DbPool, category: &Category) -> AppResult<Color> {
    match ColorRepo::assign_category(pool, &category.color_code, category.id).await? {
        Some(color) => Ok(color),
        None => {
            CategoryRepo::delete(pool, category.user_id, category.id).await?;
            tracing::info!(category_id = category.id, "Color claim lost; category removed");
            Err(color_taken(&category.color_code).into())
        }
    }
}

fn color_taken(color_code: &str) -> CoreError {
    let name = palette::find_by_code(color_code).map_or(color_code, |c| c.name);
    CoreError::Conflict(format!("Color {name} is already used by another category"))
}
