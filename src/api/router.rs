use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::classrooms::handlers::{
    handle_create_classroom, handle_delete_classroom, handle_get_classroom,
    handle_list_classrooms, handle_replace_classroom, handle_update_classroom,
};
use crate::classrooms::types::Classroom;
use crate::desks::handlers::{
    handle_create_desk, handle_delete_desk, handle_get_desk, handle_list_desks,
    handle_replace_desk, handle_update_desk,
};
use crate::desks::types::Desk;
use crate::health::handlers::{handle_health, handle_health_path};
use crate::storage::memory::ResourceStore;

/// The process-local stores behind the API, shared between the router and
/// any background reporting task.
#[derive(Clone, Default)]
pub struct AppStores {
    pub desks: Arc<ResourceStore<Desk>>,
    pub classrooms: Arc<ResourceStore<Classroom>>,
}

impl AppStores {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Landing message served at the API root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

/// Assembles the full HTTP surface over the supplied stores.
pub fn router(stores: &AppStores) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/health/{path_echo}", get(handle_health_path))
        .route("/desks", post(handle_create_desk).get(handle_list_desks))
        .route(
            "/desks/{desk_id}",
            get(handle_get_desk)
                .patch(handle_update_desk)
                .put(handle_replace_desk)
                .delete(handle_delete_desk),
        )
        .route(
            "/classrooms",
            post(handle_create_classroom).get(handle_list_classrooms),
        )
        .route(
            "/classrooms/{classroom_id}",
            get(handle_get_classroom)
                .patch(handle_update_classroom)
                .put(handle_replace_classroom)
                .delete(handle_delete_classroom),
        )
        .layer(Extension(stores.desks.clone()))
        .layer(Extension(stores.classrooms.clone()))
}

async fn handle_root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Classroom/Desk API".to_string(),
    })
}
