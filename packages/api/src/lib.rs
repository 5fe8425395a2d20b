//! # API crate — shared fullstack server functions for the backoffice
//!
//! Defines every Dioxus server function the web frontend calls, plus the
//! modules backing them:
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session key and Argon2 password hashing/verification |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database model (`User`) and its wire types (`UserInfo`, `UserUpdate`, `UserPatch`) |
//!
//! Every public `async fn` here is a server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with the real
//! implementation (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `login`, `logout`
//! - **User administration**: `list_users`, `get_user`, `update_user`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::{UserInfo, UserPatch, UserUpdate};

#[cfg(feature = "server")]
async fn require_session_user(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List all users for the admin index.
#[cfg(feature = "server")]
#[get("/api/users", session: tower_sessions::Session)]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    require_session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY created_at")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(users.iter().map(User::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single user record by id.
#[cfg(feature = "server")]
#[get("/api/users/:id", session: tower_sessions::Session)]
pub async fn get_user(id: String) -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    require_session_user(&session).await?;

    let user_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:id")]
pub async fn get_user(id: String) -> Result<Option<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Apply a partial update to a user and echo back the changed fields.
///
/// Only the columns present in the request are written; a supplied password is
/// hashed before storage and never appears in the returned patch.
#[cfg(feature = "server")]
#[post("/api/users/update", session: tower_sessions::Session)]
pub async fn update_user(update: UserUpdate) -> Result<UserPatch, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    require_session_user(&session).await?;

    let user_uuid =
        uuid::Uuid::parse_str(&update.id).map_err(|e| ServerFnError::new(e.to_string()))?;

    // Defensive mirror of the client-side payload builder: empty strings are
    // treated as absent so they can never blank out stored values.
    let name = update.name.clone().filter(|v| !v.trim().is_empty());
    let email = update
        .email
        .clone()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().to_lowercase());
    let avatar = update.avatar.clone().filter(|v| !v.is_empty());

    let password_hash = match update.password.as_deref().filter(|v| !v.is_empty()) {
        Some(password) => {
            if password.chars().count() < 8 {
                return Err(ServerFnError::new(
                    "Password must be at least 8 characters",
                ));
            }
            Some(auth::hash_password(password).map_err(|e| ServerFnError::new(e.to_string()))?)
        }
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as(
        "UPDATE users SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            password_hash = COALESCE($4, password_hash),
            avatar = COALESCE($5, avatar),
            updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(user_uuid)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(&avatar)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("No such user"));
    };

    Ok(UserPatch {
        name: name.is_some().then(|| user.name.clone()),
        email: email.is_some().then(|| user.email.clone()),
        avatar: avatar.is_some().then(|| user.avatar.clone()).flatten(),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/users/update")]
pub async fn update_user(update: UserUpdate) -> Result<UserPatch, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
