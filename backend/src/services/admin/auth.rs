use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use common::requests::{LoginRequest, SessionInfo};

use crate::config::Config;
use crate::error::ApiError;
use crate::{auth, db};

/// `POST /api/admin/login`.
///
/// The 401 body keeps the `{status, message}` envelope the login form
/// expects, and deliberately does not distinguish unknown email from wrong
/// password.
pub async fn login(
    cfg: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;

    let user = auth::find_user(&conn, &body.email)?;
    let (user_id, email) = match user {
        Some((id, email, hash)) if auth::verify_password(&hash, &body.password) => (id, email),
        _ => {
            return Ok(HttpResponse::Unauthorized()
                .json(json!({ "status": "error", "message": "Invalid credentials" })));
        }
    };

    let token = auth::create_session(&conn, &user_id, &email)?;
    Ok(HttpResponse::Ok()
        .cookie(auth::session_cookie(token))
        .json(json!({ "status": "success", "message": "Logged in" })))
}

/// `GET /api/admin/me`.
pub async fn me(cfg: web::Data<Config>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    match auth::admin_from_request(&conn, &req) {
        Some(user) => Ok(HttpResponse::Ok().json(SessionInfo {
            is_admin: true,
            user: Some(user),
        })),
        None => Ok(HttpResponse::Unauthorized().json(SessionInfo {
            is_admin: false,
            user: None,
        })),
    }
}

/// `POST /api/admin/logout`.
pub async fn logout(cfg: web::Data<Config>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    auth::destroy_session(&conn, &req);
    Ok(HttpResponse::Ok()
        .cookie(auth::clear_session_cookie())
        .json(json!({ "status": "ok" })))
}
