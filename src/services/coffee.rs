//! Coffee services - Endpoint HTTP per la risorsa caffè

use crate::core::{AppError, AppState};
use crate::dtos::{CoffeeDTO, CreateCoffeeDTO};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn get_coffees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CoffeeDTO>>, AppError> {
    debug!("Listing all coffees");
    let coffees = state.store.list_all().await?;
    info!("Found {} coffees", coffees.len());
    let coffees_dto = coffees.into_iter().map(CoffeeDTO::from).collect::<Vec<_>>();
    Ok(Json::from(coffees_dto))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_coffee_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>, // parametro dalla URL /coffees/{id}
) -> Result<Json<CoffeeDTO>, AppError> {
    debug!("Fetching coffee by ID");
    let coffee = state.store.find_by_id(&id).await?.ok_or_else(|| {
        warn!("Coffee not found");
        AppError::not_found("Coffee not found")
    })?;
    info!("Coffee found");
    Ok(Json(CoffeeDTO::from(coffee)))
}

#[instrument(skip(state), fields(name = %name))]
pub async fn get_coffee_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>, // parametro dalla URL /coffees/name/{name}
) -> Result<Json<CoffeeDTO>, AppError> {
    debug!("Fetching coffee by name");
    // nomi non univoci: lo store restituisce il primo in ordine naturale
    let coffee = state.store.find_by_name(&name).await?.ok_or_else(|| {
        warn!("Coffee not found");
        AppError::not_found("Coffee not found")
    })?;
    info!("Coffee found");
    Ok(Json(CoffeeDTO::from(coffee)))
}

#[instrument(skip(state, coffee), fields(name = %coffee.name))]
pub async fn post_coffee(
    State(state): State<Arc<AppState>>,
    Json(coffee): Json<CreateCoffeeDTO>,
) -> Result<impl IntoResponse, AppError> {
    coffee.validate()?;
    debug!("Creating coffee");
    let stored = state.store.create(&coffee).await?;
    info!("Coffee created with id {}", stored.id);
    Ok((StatusCode::CREATED, Json(CoffeeDTO::from(stored))))
}

#[instrument(skip(state, coffees), fields(count = coffees.len()))]
pub async fn post_coffees(
    State(state): State<Arc<AppState>>,
    Json(coffees): Json<Vec<CreateCoffeeDTO>>,
) -> Result<impl IntoResponse, AppError> {
    for coffee in &coffees {
        coffee.validate()?;
    }
    debug!("Creating coffee batch");
    let stored = state.store.create_batch(&coffees).await?;
    info!("Created {} coffees", stored.len());
    let stored_dto = stored.into_iter().map(CoffeeDTO::from).collect::<Vec<_>>();
    Ok((StatusCode::CREATED, Json(stored_dto)))
}

/// PUT /coffees/{id}: sostituisce il record con quell'id, oppure lo crea.
/// 200 sulla sostituzione, 201 sulla creazione.
#[instrument(skip(state, coffee), fields(id = %id))]
pub async fn put_coffee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(coffee): Json<CreateCoffeeDTO>,
) -> Result<impl IntoResponse, AppError> {
    coffee.validate()?;
    debug!("Upserting coffee");
    let (stored, was_created) = state.store.upsert(&id, &coffee).await?;

    let status = if was_created {
        info!("Coffee created with id {}", stored.id);
        StatusCode::CREATED
    } else {
        info!("Coffee replaced");
        StatusCode::OK
    };
    Ok((status, Json(CoffeeDTO::from(stored))))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_coffee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting coffee");
    // cancellare un id inesistente è un no-op: 204 in ogni caso
    state.store.delete_by_id(&id).await?;
    info!("Coffee deleted (if it existed)");
    Ok(StatusCode::NO_CONTENT)
}
