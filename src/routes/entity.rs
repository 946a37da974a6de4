//! Resource CRUD routes: `/{path}` and `/{path}/:id` for each of the six entities.

use crate::handlers::entity::{create, delete as delete_handler, list, read, update};
use crate::model::{App, Cadastro, Cliente, Curiosidade, Login, Resource, Video};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes for one resource, mounted at `/{R::PATH}`.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    let item = format!("/{}/:id", R::PATH);
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(
            &item,
            get(read::<R>).put(update::<R>).delete(delete_handler::<R>),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<App>())
        .merge(resource_routes::<Cliente>())
        .merge(resource_routes::<Cadastro>())
        .merge(resource_routes::<Login>())
        .merge(resource_routes::<Video>())
        .merge(resource_routes::<Curiosidade>())
        .with_state(state)
}
