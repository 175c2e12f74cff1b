//! Rutas REST genéricas
//!
//! Los mismos handlers sirven a las cuatro entidades; cada router se monta con
//! su propio `EntityService` como estado.

use axum::{
    extract::{FromRequest, Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

use crate::dto::response_dto::ApiResponse;
use crate::models::{Entity, EntityStatus};
use crate::services::EntityService;
use crate::utils::errors::{AppError, AppResult};

/// `Json` cuyo rechazo se responde con el sobre de error de la API
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Router CRUD de una entidad. `with_status_filters` añade `/active` e `/inactive`.
pub fn create_entity_router<E: Entity>(service: EntityService<E>, with_status_filters: bool) -> Router {
    let mut router: Router<EntityService<E>> = Router::new().route("/", get(list_all::<E>).post(create::<E>));

    if with_status_filters {
        router = router
            .route("/active", get(list_active::<E>))
            .route("/inactive", get(list_inactive::<E>));
    }

    router
        .route(
            "/:id",
            get(get_by_id::<E>).put(update::<E>).delete(delete::<E>),
        )
        .route("/:id/activate", patch(activate::<E>))
        .route("/:id/deactivate", patch(deactivate::<E>))
        .with_state(service)
}

async fn list_all<E: Entity>(
    State(service): State<EntityService<E>>,
) -> AppResult<Json<ApiResponse<Vec<E>>>> {
    let records = service.list().await?;
    Ok(Json(ApiResponse::success(records)))
}

async fn list_active<E: Entity>(
    State(service): State<EntityService<E>>,
) -> AppResult<Json<ApiResponse<Vec<E>>>> {
    let records = service.list_by_status(EntityStatus::Active.as_str()).await?;
    Ok(Json(ApiResponse::success(records)))
}

async fn list_inactive<E: Entity>(
    State(service): State<EntityService<E>>,
) -> AppResult<Json<ApiResponse<Vec<E>>>> {
    let records = service.list_by_status(EntityStatus::Inactive.as_str()).await?;
    Ok(Json(ApiResponse::success(records)))
}

async fn get_by_id<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<E>>> {
    let record = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(record)))
}

async fn create<E: Entity>(
    State(service): State<EntityService<E>>,
    AppJson(request): AppJson<E::Request>,
) -> AppResult<(StatusCode, Json<ApiResponse<E>>)> {
    let record = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(record))))
}

async fn update<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
    AppJson(request): AppJson<E::Request>,
) -> AppResult<Json<ApiResponse<E>>> {
    let record = service.update(&id, request).await?;
    Ok(Json(ApiResponse::success(record)))
}

async fn delete<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn activate<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<E>>> {
    let record = service.activate(&id).await?;
    Ok(Json(ApiResponse::success(record)))
}

async fn deactivate<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<E>>> {
    let record = service.deactivate(&id).await?;
    Ok(Json(ApiResponse::success(record)))
}
