/*!
The JSON API.

Every route lives under `/api`. Queries take the global read lock; every
mutation holds the write lock for its whole duration, so mutations are
applied one at a time.
*/
use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json,
    Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::{
    parse_int_prefix,
    config::Glob,
    event::EventDraft,
    registration::NewRegistration,
};
use super::*;

/// Take a string as is; anything else (`null`, numbers, ...) is empty.
fn string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Login request body. Missing or non-string fields are empty and so just
/// fail to match.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct LoginData {
    #[serde(deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub password: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub role: String,
}

pub async fn login(
    Extension(glob): Extension<Arc<RwLock<Glob>>>,
    Json(form): Json<LoginData>,
) -> Response {
    log::trace!(
        "api::login( {:?}, [ password ], {:?} ) called.",
        &form.username, &form.role
    );

    let res = glob.read().await.store.login(&form.username, &form.password, &form.role);

    match res {
        Ok(u) => Json(u).into_response(),
        Err(e) => respond_store_error(e),
    }
}

pub async fn list_events(
    Extension(glob): Extension<Arc<RwLock<Glob>>>
) -> Response {
    log::trace!("api::list_events() called.");

    let events = glob.read().await.store.events().to_vec();
    Json(events).into_response()
}

pub async fn create_event(
    Extension(glob): Extension<Arc<RwLock<Glob>>>,
    Json(draft): Json<EventDraft>,
) -> Response {
    log::trace!("api::create_event( {:?} ) called.", &draft);

    let res = glob.write().await.store.create_event(draft);

    match res {
        Ok(ev) => (StatusCode::CREATED, Json(ev)).into_response(),
        Err(e) => respond_store_error(e),
    }
}

pub async fn delete_event(
    Extension(glob): Extension<Arc<RwLock<Glob>>>,
    Path(id): Path<String>,
) -> Response {
    log::trace!("api::delete_event( {:?} ) called.", &id);

    match parse_int_prefix(&id) {
        Some(id) => { glob.write().await.store.delete_event(id); },
        None => {
            log::debug!("Event id {:?} matches nothing; nothing to delete.", &id);
        },
    }

    StatusCode::NO_CONTENT.into_response()
}

pub async fn list_registrations(
    Extension(glob): Extension<Arc<RwLock<Glob>>>
) -> Response {
    log::trace!("api::list_registrations() called.");

    let regs = glob.read().await.store.registrations().to_vec();
    Json(regs).into_response()
}

pub async fn list_students(
    Extension(glob): Extension<Arc<RwLock<Glob>>>
) -> Response {
    log::trace!("api::list_students() called.");

    let students = glob.read().await.store.students();
    Json(students).into_response()
}

pub async fn create_registration(
    Extension(glob): Extension<Arc<RwLock<Glob>>>,
    Json(new): Json<NewRegistration>,
) -> Response {
    log::trace!("api::create_registration( {:?} ) called.", &new);

    let res = glob.write().await.store.create_registration(new);

    match res {
        Ok(reg) => (StatusCode::CREATED, Json(reg)).into_response(),
        Err(e) => respond_store_error(e),
    }
}

pub async fn verify_registration(
    Extension(glob): Extension<Arc<RwLock<Glob>>>,
    Path(id): Path<String>,
) -> Response {
    log::trace!("api::verify_registration( {:?} ) called.", &id);

    let id = match parse_int_prefix(&id) {
        Some(id) => id,
        None => {
            return respond_store_error(
                StoreError::NotFound("Registration not found.".to_owned())
            );
        },
    };

    let res = glob.write().await.store.verify_registration(id);

    match res {
        Ok(reg) => Json(reg).into_response(),
        Err(e) => respond_store_error(e),
    }
}

/// Assemble the full API router around the shared state.
pub fn router(glob: Arc<RwLock<Glob>>, cors: bool) -> Router {
    let app: Router = Router::new()
        .route("/api/login", post(login))
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:id", delete(delete_event))
        .route(
            "/api/registrations",
            get(list_registrations).post(create_registration)
        )
        .route("/api/registrations/:id/verify", patch(verify_registration))
        .route("/api/users/students", get(list_students))
        .layer(middleware::from_fn(request_identity))
        .layer(Extension(glob));

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
