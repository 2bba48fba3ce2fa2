//! Integration tests for the repository layer against a real database:
//! - per-user title uniqueness
//! - color assignment and release
//! - cascade deletes from users and categories
//! - weekday and completed listings

use sqlx::PgPool;
use stickit_core::weekday::Weekday;
use stickit_db::models::category::CreateCategory;
use stickit_db::models::post_it::{CreatePostIt, UpdatePostIt};
use stickit_db::models::user::{CreateUser, UpdateUser, User};
use stickit_db::repositories::{CategoryRepo, ColorRepo, PostItRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@stickit.test"),
            password_hash: "not-a-real-hash".to_string(),
            icon_url: "https://example.com/icon.png".to_string(),
        },
    )
    .await
    .unwrap()
}

fn new_category(user_id: i64, title: &str, color_code: &str) -> CreateCategory {
    CreateCategory {
        user_id,
        title: title.to_string(),
        description: format!("{title} things"),
        color_code: color_code.to_string(),
    }
}

fn new_post_it(user_id: i64, category_id: i64, title: &str, day: Weekday) -> CreatePostIt {
    CreatePostIt {
        user_id,
        category_id,
        title: title.to_string(),
        description: format!("Do {title}"),
        pinned: false,
        day_of_week: day,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    new_user(&pool, "ada").await;

    let err = UserRepo::create(
        &pool,
        &CreateUser {
            username: "ada".to_string(),
            email: "other@stickit.test".to_string(),
            password_hash: "x".to_string(),
            icon_url: "x".to_string(),
        },
    )
    .await
    .unwrap_err();

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_user_by_email(pool: PgPool) {
    let user = new_user(&pool, "grace").await;

    let updated = UserRepo::update_by_email(
        &pool,
        &user.email,
        &UpdateUser {
            username: "hopper".to_string(),
            password_hash: "new-hash".to_string(),
            icon_url: user.icon_url.clone(),
        },
    )
    .await
    .unwrap()
    .expect("user should exist");
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.username, "hopper");
    assert!(UserRepo::find_by_username(&pool, "grace").await.unwrap().is_none());

    assert!(UserRepo::delete_by_email(&pool, &user.email).await.unwrap());
    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    assert!(!UserRepo::delete_by_email(&pool, &user.email).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_user_cascades_to_categories_and_post_its(pool: PgPool) {
    let user = new_user(&pool, "linus").await;
    let cat = CategoryRepo::create(&pool, &new_category(user.id, "Work", "FE0000"))
        .await
        .unwrap();
    ColorRepo::assign_category(&pool, "FE0000", cat.id).await.unwrap();
    PostItRepo::create(&pool, &new_post_it(user.id, cat.id, "Ship", Weekday::Monday))
        .await
        .unwrap();

    assert!(UserRepo::delete_by_email(&pool, &user.email).await.unwrap());

    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
    assert!(PostItRepo::list(&pool).await.unwrap().is_empty());
    assert_eq!(ColorRepo::list_available(&pool).await.unwrap().len(), 8);
}

// ---------------------------------------------------------------------------
// Categories and colors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_titles_are_unique_per_user(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let bob = new_user(&pool, "bob").await;

    CategoryRepo::create(&pool, &new_category(alice.id, "Home", "FE0000"))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &new_category(bob.id, "Home", "EF8906"))
        .await
        .expect("another user may reuse the title");

    let err = CategoryRepo::create(&pool, &new_category(alice.id, "Home", "FFD100"))
        .await
        .unwrap_err();
    assert_eq!(
        err.as_database_error().and_then(|e| e.constraint()),
        Some("uq_categories_user_title")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn palette_is_seeded_and_all_available(pool: PgPool) {
    let colors = ColorRepo::list(&pool).await.unwrap();
    assert_eq!(colors.len(), 8);
    assert!(colors.iter().all(|c| c.is_available()));
    assert_eq!(colors[0].color_name, "Red");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn color_can_only_be_assigned_once(pool: PgPool) {
    let user = new_user(&pool, "mia").await;
    let first = CategoryRepo::create(&pool, &new_category(user.id, "A", "94CAEE"))
        .await
        .unwrap();
    let second = CategoryRepo::create(&pool, &new_category(user.id, "B", "94CAEE"))
        .await
        .unwrap();

    let claimed = ColorRepo::assign_category(&pool, "94CAEE", first.id)
        .await
        .unwrap()
        .expect("free color should be claimed");
    assert_eq!(claimed.category_id, Some(first.id));

    let again = ColorRepo::assign_category(&pool, "94CAEE", second.id).await.unwrap();
    assert!(again.is_none(), "held color must not be reassigned");

    assert_eq!(
        CategoryRepo::find_id_by_color(&pool, "94CAEE").await.unwrap(),
        Some(first.id)
    );
    assert_eq!(ColorRepo::list_available(&pool).await.unwrap().len(), 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_category_frees_color_and_removes_post_its(pool: PgPool) {
    let user = new_user(&pool, "noah").await;
    let cat = CategoryRepo::create(&pool, &new_category(user.id, "Gym", "A9E59E"))
        .await
        .unwrap();
    ColorRepo::assign_category(&pool, "A9E59E", cat.id).await.unwrap();
    let note = PostItRepo::create(&pool, &new_post_it(user.id, cat.id, "Legs", Weekday::Friday))
        .await
        .unwrap();

    assert!(CategoryRepo::delete(&pool, user.id, cat.id).await.unwrap());

    assert!(ColorRepo::find_by_category(&pool, cat.id).await.unwrap().is_none());
    assert_eq!(CategoryRepo::find_id_by_color(&pool, "A9E59E").await.unwrap(), None);
    assert!(PostItRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_delete_is_scoped_to_owner(pool: PgPool) {
    let owner = new_user(&pool, "owner").await;
    let other = new_user(&pool, "other").await;
    let cat = CategoryRepo::create(&pool, &new_category(owner.id, "Mine", "D39AFF"))
        .await
        .unwrap();

    assert!(!CategoryRepo::delete(&pool, other.id, cat.id).await.unwrap());
    assert!(!CategoryRepo::delete_by_title(&pool, other.id, "Mine").await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, cat.id).await.unwrap().is_some());

    assert!(CategoryRepo::delete_by_title(&pool, owner.id, "Mine").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn release_and_reset_palette(pool: PgPool) {
    let user = new_user(&pool, "zoe").await;
    let a = CategoryRepo::create(&pool, &new_category(user.id, "A", "ECC8FC"))
        .await
        .unwrap();
    let b = CategoryRepo::create(&pool, &new_category(user.id, "B", "FFFFFF"))
        .await
        .unwrap();
    ColorRepo::assign_category(&pool, "ECC8FC", a.id).await.unwrap();
    ColorRepo::assign_category(&pool, "FFFFFF", b.id).await.unwrap();

    assert_eq!(ColorRepo::release_category(&pool, a.id).await.unwrap(), 1);
    assert_eq!(ColorRepo::release_category(&pool, a.id).await.unwrap(), 0);

    assert_eq!(ColorRepo::reset_palette(&pool).await.unwrap(), 1);
    assert_eq!(ColorRepo::list_available(&pool).await.unwrap().len(), 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_category_description_by_title(pool: PgPool) {
    let user = new_user(&pool, "ivy").await;
    CategoryRepo::create(&pool, &new_category(user.id, "Chores", "FE0000"))
        .await
        .unwrap();

    let updated = CategoryRepo::update_description_by_title(&pool, user.id, "Chores", "Weekly")
        .await
        .unwrap()
        .expect("category should exist");
    assert_eq!(updated.description, "Weekly");

    let missing =
        CategoryRepo::update_description_by_title(&pool, user.id, "Nope", "x").await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Post-its
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_post_it_leaves_weekday_listing(pool: PgPool) {
    let user = new_user(&pool, "kai").await;
    let cat = CategoryRepo::create(&pool, &new_category(user.id, "Errands", "EF8906"))
        .await
        .unwrap();
    let milk = PostItRepo::create(&pool, &new_post_it(user.id, cat.id, "Milk", Weekday::Tuesday))
        .await
        .unwrap();
    PostItRepo::create(&pool, &new_post_it(user.id, cat.id, "Bread", Weekday::Tuesday))
        .await
        .unwrap();
    assert!(!milk.is_completed());

    let done = PostItRepo::mark_completed(&pool, user.id, milk.id)
        .await
        .unwrap()
        .expect("post-it should exist");
    assert!(done.is_completed());

    let tuesday = PostItRepo::list_by_weekday(&pool, user.id, Weekday::Tuesday)
        .await
        .unwrap();
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].title, "Bread");

    let completed = PostItRepo::list_completed(&pool, user.id).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, milk.id);

    assert_eq!(PostItRepo::list_by_user(&pool, user.id).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pinned_post_its_list_first(pool: PgPool) {
    let user = new_user(&pool, "pia").await;
    let cat = CategoryRepo::create(&pool, &new_category(user.id, "Misc", "FFD100"))
        .await
        .unwrap();
    PostItRepo::create(&pool, &new_post_it(user.id, cat.id, "Plain", Weekday::Sunday))
        .await
        .unwrap();
    let mut pinned = new_post_it(user.id, cat.id, "Pinned", Weekday::Sunday);
    pinned.pinned = true;
    PostItRepo::create(&pool, &pinned).await.unwrap();

    let listed = PostItRepo::list_by_weekday(&pool, user.id, Weekday::Sunday)
        .await
        .unwrap();
    assert_eq!(listed[0].title, "Pinned");
    assert!(listed[0].is_pinned());
    assert!(!listed[1].is_pinned());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_post_it_by_title(pool: PgPool) {
    let user = new_user(&pool, "eli").await;
    let cat = CategoryRepo::create(&pool, &new_category(user.id, "School", "94CAEE"))
        .await
        .unwrap();
    let note = PostItRepo::create(&pool, &new_post_it(user.id, cat.id, "Essay", Weekday::Monday))
        .await
        .unwrap();

    let updated = PostItRepo::update_by_title(
        &pool,
        user.id,
        "Essay",
        &UpdatePostIt {
            description: "Final draft".to_string(),
            day_of_week: Weekday::Thursday,
            category_id: cat.id,
            pinned: true,
        },
    )
    .await
    .unwrap()
    .expect("post-it should exist");
    assert_eq!(updated.id, note.id);
    assert_eq!(updated.day_of_week, "thursday");
    assert!(updated.is_pinned());

    assert!(PostItRepo::delete_by_title(&pool, user.id, "Essay").await.unwrap());
    assert!(PostItRepo::find_by_title(&pool, user.id, "Essay").await.unwrap().is_none());
    assert!(!PostItRepo::delete(&pool, user.id, note.id).await.unwrap());
}
