//! OpenAPI document for the resource routes, served at `GET /v3/api-docs`.

use crate::model::{
    App, AppPayload, Cadastro, CadastroPayload, Cliente, ClientePayload, Curiosidade,
    CuriosidadePayload, Login, LoginPayload, Resource, Video, VideoPayload,
};
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::openapi::path::{HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
use utoipa::openapi::{ContentBuilder, Ref, Required, Response, ResponseBuilder};
use utoipa::OpenApi;

pub const DOCS_PATH: &str = "/v3/api-docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sea Kids API",
        description = "CRUD de apps, clientes, cadastros, logins, vídeos e curiosidades do Sea Kids"
    ),
    components(schemas(
        App,
        AppPayload,
        Cliente,
        ClientePayload,
        Cadastro,
        CadastroPayload,
        Login,
        LoginPayload,
        Video,
        VideoPayload,
        Curiosidade,
        CuriosidadePayload
    )),
    tags(
        (name = "App", description = "Operações relacionadas ao recurso App"),
        (name = "Cliente", description = "Operações relacionadas ao recurso Cliente"),
        (name = "Cadastro", description = "Operações relacionadas ao recurso Cadastro"),
        (name = "Login", description = "Operações relacionadas ao recurso Login"),
        (name = "Video", description = "Operações relacionadas ao recurso Video"),
        (name = "Curiosidade", description = "Operações relacionadas ao recurso Curiosidade")
    )
)]
struct ApiDoc;

fn integer_param(name: &str, location: ParameterIn, required: Required) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(location)
        .required(required)
        .schema(Some(Schema::Object(
            ObjectBuilder::new().schema_type(Type::Integer).build(),
        )))
        .build()
}

fn hal_response(description: &str, schema: &str) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/hal+json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(schema)))
                .build(),
        )
        .build()
}

fn described(description: &str) -> Response {
    ResponseBuilder::new().description(description).build()
}

fn operation<R: Resource>(id: &str, summary: &str) -> OperationBuilder {
    OperationBuilder::new()
        .tag(R::DOCS.tag)
        .operation_id(Some(format!("{}_{}", id, R::SINGULAR)))
        .summary(Some(summary))
}

fn json_body<R: Resource>() -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(R::PAYLOAD_SCHEMA)))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

/// The five operations of one resource as `(path, method, operation)`.
fn resource_operations<R: Resource>() -> Vec<(String, HttpMethod, Operation)> {
    let collection = format!("/{}", R::PATH);
    let item = format!("/{}/{{id}}", R::PATH);
    let id_param = || integer_param("id", ParameterIn::Path, Required::True);
    vec![
        (
            collection.clone(),
            HttpMethod::Get,
            operation::<R>("list", R::DOCS.list)
                .parameter(integer_param("page", ParameterIn::Query, Required::False))
                .parameter(integer_param("size", ParameterIn::Query, Required::False))
                .response("200", described("Página de recursos em formato HAL"))
                .response("400", described("Parâmetros de paginação inválidos"))
                .build(),
        ),
        (
            item.clone(),
            HttpMethod::Get,
            operation::<R>("get", R::DOCS.get)
                .parameter(id_param())
                .response("200", hal_response("Sucesso", R::SCHEMA))
                .response("404", described(R::NOT_FOUND))
                .build(),
        ),
        (
            collection,
            HttpMethod::Post,
            operation::<R>("create", R::DOCS.create)
                .request_body(Some(json_body::<R>()))
                .response("201", hal_response("Criado com sucesso", R::SCHEMA))
                .response("400", described("Requisição inválida"))
                .build(),
        ),
        (
            item.clone(),
            HttpMethod::Put,
            operation::<R>("update", R::DOCS.update)
                .parameter(id_param())
                .request_body(Some(json_body::<R>()))
                .response("200", hal_response("Atualizado com sucesso", R::SCHEMA))
                .response("400", described("Requisição inválida"))
                .response("404", described(R::NOT_FOUND))
                .build(),
        ),
        (
            item,
            HttpMethod::Delete,
            operation::<R>("delete", R::DOCS.delete)
                .parameter(id_param())
                .response("204", described("Removido com sucesso"))
                .response("404", described(R::NOT_FOUND))
                .build(),
        ),
    ]
}

fn add_resource<R: Resource>(doc: &mut utoipa::openapi::OpenApi) {
    for (path, method, op) in resource_operations::<R>() {
        doc.paths.add_path_operation(path, vec![method], op);
    }
}

/// Full OpenAPI document: schemas from the model types, paths from the resource descriptions.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    add_resource::<App>(&mut doc);
    add_resource::<Cliente>(&mut doc);
    add_resource::<Cadastro>(&mut doc);
    add_resource::<Login>(&mut doc);
    add_resource::<Video>(&mut doc);
    add_resource::<Curiosidade>(&mut doc);
    doc
}

pub fn docs_routes() -> Router {
    let doc = Arc::new(api_doc());
    Router::new().route(
        DOCS_PATH,
        get(move || {
            let doc = Arc::clone(&doc);
            async move { Json(doc.as_ref().clone()) }
        }),
    )
}
