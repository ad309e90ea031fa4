use axum::{
    extract::{Extension, Form, Request},
    middleware::Next,
    response::{Html, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::auth as auth_service;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Authenticated principal, attached to the request by `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Gate for protected routes. Accepts a live session cookie, or HTTP Basic
/// credentials re-verified against the user store on every request.
pub async fn require_auth(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let username = state.sessions.lock().await.get(cookie.value()).cloned();
        if let Some(username) = username {
            req.extensions_mut().insert(AuthUser { username });
            return Ok(next.run(req).await);
        }
    }

    if let Some(Authorization(basic)) = req.headers().typed_get::<Authorization<Basic>>() {
        if let Some(user) =
            auth_service::verify_credentials(&state.pool, basic.username(), basic.password())
                .await?
        {
            req.extensions_mut().insert(AuthUser {
                username: user.username,
            });
            return Ok(next.run(req).await);
        }
    }

    Err(ApiError::Unauthorized)
}

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sign in</title></head>
<body>
<h1>Sign in</h1>
<form method="post" action="/login">
  <label>Username <input type="text" name="username"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Login</button>
</form>
</body>
</html>
"#;

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// Form login: on success establishes a session and redirects to the
/// application root, on failure redirects back to the login view.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let user =
        auth_service::verify_credentials(&state.pool, &form.username, &form.password).await?;

    let Some(user) = user else {
        tracing::warn!(username = %form.username, "form login rejected");
        return Ok((jar, Redirect::to("/login?error")));
    };

    let token = Uuid::new_v4().to_string();
    state
        .sessions
        .lock()
        .await
        .insert(token.clone(), user.username.clone());
    tracing::info!(username = %user.username, "session established");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::to("/")))
}

/// Invalidates the session (if any) and clears the cookie.
pub async fn logout(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.lock().await.remove(cookie.value());
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/");
    (jar.remove(removal), Redirect::to("/login"))
}

/// Form-login success target: a small identity document.
pub async fn index(Extension(user): Extension<AuthUser>) -> Json<serde_json::Value> {
    Json(json!({ "service": "rxdesk", "user": user.username }))
}

/// Storage console stand-in. Reachable without credentials, like the
/// embedded database console it replaces; no interactive SQL surface.
pub async fn console_page() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>Storage console</title></head>\n<body>\n\
         <h1>Storage console</h1>\n\
         <p>This service stores its data in an embedded SQLite database.\n\
         Inspect the file named by <code>DATABASE_URL</code> with any SQLite client.</p>\n\
         </body>\n</html>\n",
    )
}
