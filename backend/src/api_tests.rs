//! Endpoint-level tests over an in-process app with a scratch database and
//! public directory.

use std::fs;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use tempfile::TempDir;

use common::model::event::Event;
use common::model::gallery::GalleryImage;
use common::model::message::Message;
use common::model::registration::EventRegistration;

use crate::config::Config;
use crate::services::carousel::store::GalleryStore;
use crate::{auth, db, services};

fn test_config(dir: &TempDir) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path: dir
            .path()
            .join("test.sqlite")
            .to_string_lossy()
            .into_owned(),
        public_dir: dir.path().join("public"),
        admin_email: None,
        admin_password: None,
    }
}

async fn test_app(
    cfg: Config,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    fs::create_dir_all(cfg.uploads_dir()).unwrap();
    fs::create_dir_all(cfg.gallery_dir()).unwrap();
    let conn = db::open(&cfg).unwrap();
    db::init(&conn).unwrap();

    let gallery = web::Data::new(GalleryStore::new(cfg.gallery_dir()));
    let cfg_data = web::Data::new(cfg);
    test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024))
            .app_data(cfg_data)
            .app_data(gallery)
            .service(services::events::configure_routes())
            .service(services::blogs::configure_routes())
            .service(services::alumni::configure_routes())
            .service(services::projects::configure_routes())
            .service(services::carousel::configure_routes())
            .service(services::admin::configure_routes()),
    )
    .await
}

/// Minimal multipart body builder for form submissions in tests.
fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> (String, Vec<u8>) {
    let boundary = "----test-boundary";
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}

#[actix_web::test]
async fn messages_create_list_delete() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(test_config(&dir)).await;

    // Legacy `name` field is accepted for the sender.
    let req = test::TestRequest::post()
        .uri("/api/admin/messages")
        .set_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.org",
            "subject": "Hello",
            "message": "Keep up the good work"
        }))
        .to_request();
    let created: Message = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.full_name, "Ada");

    let req = test::TestRequest::get()
        .uri("/api/admin/messages")
        .to_request();
    let listed: Vec<Message> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/messages/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/admin/messages")
        .to_request();
    let listed: Vec<Message> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[actix_web::test]
async fn login_session_me_logout_flow() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(&dir);
    {
        fs::create_dir_all(cfg.public_dir.clone()).unwrap();
        let conn = rusqlite::Connection::open(&cfg.database_path).unwrap();
        db::init(&conn).unwrap();
        auth::seed_admin(&conn, "admin@example.org", "correct horse").unwrap();
    }
    let app = test_app(cfg).await;

    // No session yet.
    let req = test::TestRequest::get().uri("/api/admin/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Wrong password.
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(serde_json::json!({
            "email": "admin@example.org",
            "password": "wrong"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Correct credentials set the session cookie.
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(serde_json::json!({
            "email": "admin@example.org",
            "password": "correct horse"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == auth::SESSION_COOKIE)
        .expect("session cookie")
        .into_owned();

    let req = test::TestRequest::get()
        .uri("/api/admin/me")
        .cookie(cookie.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["isAdmin"], true);
    assert_eq!(body["user"]["email"], "admin@example.org");

    let req = test::TestRequest::post()
        .uri("/api/admin/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The server-side session is gone even if the cookie is replayed.
    let req = test::TestRequest::get()
        .uri("/api/admin/me")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn event_crud_and_registration_flow() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(test_config(&dir)).await;

    let (ctype, body) = multipart_body(
        &[
            ("title", "Science Fair"),
            ("description", "Annual fair"),
            ("date", "2026-09-01"),
            ("attendees", "120"),
        ],
        None,
    );
    let req = test::TestRequest::post()
        .uri("/api/events")
        .insert_header(("content-type", ctype))
        .set_payload(body)
        .to_request();
    let event: Event = test::call_and_read_body_json(&app, req).await;
    assert_eq!(event.title, "Science Fair");
    assert_eq!(event.attendees, 120);
    assert_eq!(event.image, "");

    // Unknown event id is a JSON 404.
    let req = test::TestRequest::get()
        .uri("/api/events/nope")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Update only one field; the rest stays.
    let (ctype, body) = multipart_body(&[("location", "Main hall")], None);
    let req = test::TestRequest::put()
        .uri(&format!("/api/events/{}", event.id))
        .insert_header(("content-type", ctype))
        .set_payload(body)
        .to_request();
    let updated: Event = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.location, "Main hall");
    assert_eq!(updated.title, "Science Fair");

    // Register an attendee; the event title is copied in.
    let req = test::TestRequest::post()
        .uri(&format!("/api/events/{}/register", event.id))
        .set_json(serde_json::json!({
            "fullName": "Grace",
            "email": "grace@example.org"
        }))
        .to_request();
    let registration: EventRegistration = test::call_and_read_body_json(&app, req).await;
    assert_eq!(registration.event_title, "Science Fair");

    // Registering for a missing event 404s.
    let req = test::TestRequest::post()
        .uri("/api/events/nope/register")
        .set_json(serde_json::json!({
            "fullName": "Grace",
            "email": "grace@example.org"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/events/{}/registrations", event.id))
        .to_request();
    let per_event: Vec<EventRegistration> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(per_event.len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/events/admin/all-registrations")
        .to_request();
    let all: Vec<EventRegistration> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/events/registrations/{}", registration.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/events/{}", event.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/events").to_request();
    let listed: Vec<Event> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[actix_web::test]
async fn carousel_upload_list_update_reorder_delete() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(&dir);
    let gallery_dir = cfg.gallery_dir();
    let app = test_app(cfg).await;

    // Upload without a file part is a validation error.
    let (ctype, body) = multipart_body(&[("title", "no file")], None);
    let req = test::TestRequest::post()
        .uri("/api/carousel")
        .insert_header(("content-type", ctype))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A disallowed extension is dropped, so the same error surfaces.
    let (ctype, body) = multipart_body(&[], Some(("image", "anim.gif", b"gif")));
    let req = test::TestRequest::post()
        .uri("/api/carousel")
        .insert_header(("content-type", ctype))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Two real uploads.
    let (ctype, body) = multipart_body(
        &[("title", "First"), ("caption", "opening")],
        Some(("image", "first.png", b"png-bytes")),
    );
    let req = test::TestRequest::post()
        .uri("/api/carousel")
        .insert_header(("content-type", ctype))
        .set_payload(body)
        .to_request();
    let first: GalleryImage = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first.order, 1);
    assert_eq!(first.title, "First");
    assert!(first.image.starts_with("/gallery/"));
    assert!(gallery_dir.join(&first.id).exists());

    let (ctype, body) = multipart_body(&[], Some(("image", "second.jpg", b"jpg-bytes")));
    let req = test::TestRequest::post()
        .uri("/api/carousel")
        .insert_header(("content-type", ctype))
        .set_payload(body)
        .to_request();
    let second: GalleryImage = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second.order, 2);

    // Move the first image to the back via an oversized order value.
    let req = test::TestRequest::put()
        .uri(&format!("/api/carousel/{}", first.id))
        .set_json(serde_json::json!({ "order": 99, "caption": "moved" }))
        .to_request();
    let moved: GalleryImage = test::call_and_read_body_json(&app, req).await;
    assert_eq!(moved.order, 2);
    assert_eq!(moved.caption, "moved");

    // Unknown gallery id 404s.
    let req = test::TestRequest::put()
        .uri("/api/carousel/ghost.png")
        .set_json(serde_json::json!({ "caption": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // A fractional order is rejected at the boundary.
    let req = test::TestRequest::put()
        .uri(&format!("/api/carousel/{}", first.id))
        .set_json(serde_json::json!({ "order": 1.5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Bulk reorder: listed first, omitted keep relative order after.
    let req = test::TestRequest::post()
        .uri("/api/carousel/reorder")
        .set_json(serde_json::json!({ "ids": [first.id.clone()] }))
        .to_request();
    let reordered: Vec<GalleryImage> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reordered[0].id, first.id);
    assert_eq!(reordered[0].order, 1);
    assert_eq!(reordered[1].id, second.id);
    assert_eq!(reordered[1].order, 2);

    // Non-array ids are rejected before reaching the store.
    let req = test::TestRequest::post()
        .uri("/api/carousel/reorder")
        .set_json(serde_json::json!({ "ids": "first" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Delete removes file and entry; the listing reflects it.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/carousel/{}", first.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!gallery_dir.join(&first.id).exists());

    let req = test::TestRequest::get().uri("/api/carousel").to_request();
    let listed: Vec<GalleryImage> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[0].order, 1);

    // Deleting it again fails hard: the backing file is already gone.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/carousel/{}", first.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
