use chrono::{Duration, Utc};
use tasky_backend::{repositories::user as user_repo, types::UserId};

mod support;

#[tokio::test]
async fn lookup_by_email_or_username_is_case_insensitive() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;

    let by_email = user_repo::find_by_email_or_username(&state.pool, &user.email.to_uppercase())
        .await
        .expect("lookup by email")
        .expect("user found");
    assert_eq!(by_email.id, user.id);

    let by_username =
        user_repo::find_by_email_or_username(&state.pool, &user.username.to_uppercase())
            .await
            .expect("lookup by username")
            .expect("user found");
    assert_eq!(by_username.id, user.id);

    let missing = user_repo::find_by_email_or_username(&state.pool, "nobody@example.com")
        .await
        .expect("lookup unknown");
    assert!(missing.is_none());
}

#[tokio::test]
async fn taken_check_skips_the_excluded_account() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let other = support::seed_user(&state.pool).await;

    let against_self =
        user_repo::email_or_username_taken(&state.pool, &user.email, &user.username, Some(user.id))
            .await
            .expect("check against self");
    assert!(!against_self);

    let against_other = user_repo::email_or_username_taken(
        &state.pool,
        &other.email,
        &user.username,
        Some(user.id),
    )
    .await
    .expect("check against other");
    assert!(against_other);

    let without_exclusion =
        user_repo::email_or_username_taken(&state.pool, &user.email, &user.username, None)
            .await
            .expect("check without exclusion");
    assert!(without_exclusion);
}

#[tokio::test]
async fn reset_token_matches_only_while_unexpired() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let digest = format!("digest-{}", UserId::new());

    user_repo::set_reset_token(&state.pool, user.id, &digest, Utc::now() + Duration::hours(1))
        .await
        .expect("store token");

    let active = user_repo::find_by_active_reset_token(&state.pool, &digest)
        .await
        .expect("lookup active token")
        .expect("token matches");
    assert_eq!(active.id, user.id);

    user_repo::set_reset_token(&state.pool, user.id, &digest, Utc::now() - Duration::minutes(1))
        .await
        .expect("expire token");

    let expired = user_repo::find_by_active_reset_token(&state.pool, &digest)
        .await
        .expect("lookup expired token");
    assert!(expired.is_none());
}

#[tokio::test]
async fn completing_a_reset_clears_the_token_fields() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let digest = format!("digest-{}", UserId::new());
    user_repo::set_reset_token(&state.pool, user.id, &digest, Utc::now() + Duration::hours(1))
        .await
        .expect("store token");

    user_repo::complete_password_reset(&state.pool, user.id, "new-hash")
        .await
        .expect("complete reset");

    let reloaded = user_repo::find_by_id(&state.pool, user.id)
        .await
        .expect("reload user")
        .expect("user exists");
    assert_eq!(reloaded.password_hash, "new-hash");
    assert!(reloaded.reset_token_hash.is_none());
    assert!(reloaded.reset_token_expires_at.is_none());
}

#[tokio::test]
async fn update_profile_normalizes_identity_to_lowercase() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let suffix = UserId::new().to_string().replace('-', "");
    let username = format!("Renamed_{}", &suffix[..12]);
    let email = format!("Renamed_{}@Example.COM", &suffix[..12]);

    let updated = user_repo::update_profile(&state.pool, user.id, "Ada", "Lovelace", &username, &email)
        .await
        .expect("update profile")
        .expect("user exists");

    assert_eq!(updated.username, username.to_lowercase());
    assert_eq!(updated.email, email.to_lowercase());

    let missing = user_repo::update_profile(
        &state.pool,
        UserId::new(),
        "No",
        "One",
        "ghost_user",
        "ghost@example.com",
    )
    .await
    .expect("update unknown user");
    assert!(missing.is_none());
}
