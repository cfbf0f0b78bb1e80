use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::types::{
    Classroom, ClassroomDeleted, ClassroomQuery, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::storage::error::StoreError;
use crate::storage::memory::ResourceStore;

pub async fn handle_create_classroom(
    Extension(classrooms): Extension<Arc<ResourceStore<Classroom>>>,
    ApiJson(payload): ApiJson<CreateClassroomRequest>,
) -> Result<(StatusCode, Json<Classroom>), StoreError> {
    let id = payload.id.unwrap_or_else(Uuid::new_v4);
    let classroom = classrooms.insert(Classroom::new(id, payload, Utc::now()))?;

    tracing::info!(
        "Created classroom {} with {} desks",
        classroom.id,
        classroom.desks.len()
    );
    Ok((StatusCode::CREATED, Json(classroom)))
}

pub async fn handle_list_classrooms(
    Extension(classrooms): Extension<Arc<ResourceStore<Classroom>>>,
    ApiQuery(query): ApiQuery<ClassroomQuery>,
) -> Json<Vec<Classroom>> {
    let results = classrooms.filter(|classroom| query.matches(classroom));

    tracing::debug!("Listed {} classrooms", results.len());
    Json(results)
}

pub async fn handle_get_classroom(
    Extension(classrooms): Extension<Arc<ResourceStore<Classroom>>>,
    Path(classroom_id): Path<Uuid>,
) -> Result<Json<Classroom>, StoreError> {
    let classroom = classrooms.get(&classroom_id)?;
    Ok(Json(classroom))
}

pub async fn handle_update_classroom(
    Extension(classrooms): Extension<Arc<ResourceStore<Classroom>>>,
    Path(classroom_id): Path<Uuid>,
    ApiJson(patch): ApiJson<UpdateClassroomRequest>,
) -> Result<Json<Classroom>, StoreError> {
    let classroom = classrooms.update(&classroom_id, |classroom| classroom.apply_update(patch))?;

    tracing::info!("Updated classroom {}", classroom_id);
    Ok(Json(classroom))
}

pub async fn handle_replace_classroom(
    Extension(classrooms): Extension<Arc<ResourceStore<Classroom>>>,
    Path(classroom_id): Path<Uuid>,
    ApiJson(payload): ApiJson<CreateClassroomRequest>,
) -> Json<Classroom> {
    // The path id wins; any id in the payload is ignored.
    let (classroom, created) = classrooms.upsert(
        classroom_id,
        || Classroom::new(classroom_id, payload.clone(), Utc::now()),
        |classroom| classroom.replace_with(payload.clone()),
    );

    if created {
        tracing::info!("Created classroom {} via replace", classroom_id);
    } else {
        tracing::info!("Replaced classroom {}", classroom_id);
    }
    Json(classroom)
}

pub async fn handle_delete_classroom(
    Extension(classrooms): Extension<Arc<ResourceStore<Classroom>>>,
    Path(classroom_id): Path<Uuid>,
) -> Result<Json<ClassroomDeleted>, StoreError> {
    classrooms.remove(&classroom_id)?;

    tracing::info!("Deleted classroom {}", classroom_id);
    Ok(Json(ClassroomDeleted {
        confirmation: "Classroom deleted successfully".to_string(),
    }))
}
