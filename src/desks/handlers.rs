use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::types::{CreateDeskRequest, Desk, DeskDeleted, DeskQuery, UpdateDeskRequest};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::storage::error::StoreError;
use crate::storage::memory::ResourceStore;

pub async fn handle_create_desk(
    Extension(desks): Extension<Arc<ResourceStore<Desk>>>,
    ApiJson(payload): ApiJson<CreateDeskRequest>,
) -> Result<(StatusCode, Json<Desk>), StoreError> {
    let id = payload.id.unwrap_or_else(Uuid::new_v4);
    let desk = desks.insert(Desk::new(id, payload, Utc::now()))?;

    tracing::info!("Created desk {}", desk.id);
    Ok((StatusCode::CREATED, Json(desk)))
}

pub async fn handle_list_desks(
    Extension(desks): Extension<Arc<ResourceStore<Desk>>>,
    ApiQuery(query): ApiQuery<DeskQuery>,
) -> Json<Vec<Desk>> {
    let results = desks.filter(|desk| query.matches(desk));

    tracing::debug!("Listed {} desks", results.len());
    Json(results)
}

pub async fn handle_get_desk(
    Extension(desks): Extension<Arc<ResourceStore<Desk>>>,
    Path(desk_id): Path<Uuid>,
) -> Result<Json<Desk>, StoreError> {
    let desk = desks.get(&desk_id)?;
    Ok(Json(desk))
}

pub async fn handle_update_desk(
    Extension(desks): Extension<Arc<ResourceStore<Desk>>>,
    Path(desk_id): Path<Uuid>,
    ApiJson(patch): ApiJson<UpdateDeskRequest>,
) -> Result<Json<Desk>, StoreError> {
    let desk = desks.update(&desk_id, |desk| desk.apply_update(patch))?;

    tracing::info!("Updated desk {}", desk_id);
    Ok(Json(desk))
}

pub async fn handle_replace_desk(
    Extension(desks): Extension<Arc<ResourceStore<Desk>>>,
    Path(desk_id): Path<Uuid>,
    ApiJson(payload): ApiJson<CreateDeskRequest>,
) -> Json<Desk> {
    // The path id wins; any id in the payload is ignored.
    let (desk, created) = desks.upsert(
        desk_id,
        || Desk::new(desk_id, payload.clone(), Utc::now()),
        |desk| desk.replace_with(payload.clone()),
    );

    if created {
        tracing::info!("Created desk {} via replace", desk_id);
    } else {
        tracing::info!("Replaced desk {}", desk_id);
    }
    Json(desk)
}

pub async fn handle_delete_desk(
    Extension(desks): Extension<Arc<ResourceStore<Desk>>>,
    Path(desk_id): Path<Uuid>,
) -> Result<Json<DeskDeleted>, StoreError> {
    desks.remove(&desk_id)?;

    tracing::info!("Deleted desk {}", desk_id);
    Ok(Json(DeskDeleted {
        confirmation: "Desk deleted successfully".to_string(),
    }))
}
