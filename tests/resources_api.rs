//! HTTP-level CRUD tests for the six resources against a real PostgreSQL database.
//!
//! Each test gets a fresh database from `#[sqlx::test]` with the crate's migrations.
//! Run with `DATABASE_URL` set and `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json, BASE_URL};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn create_app_returns_201_with_links(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/apps",
        json!({"nome": "Sea Kids", "versao": "1.0"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(json["nome"], "Sea Kids");
    assert_eq!(json["versao"], "1.0");
    assert_eq!(json["_links"]["self"]["href"], format!("{BASE_URL}/apps/{id}"));
    assert_eq!(
        json["_links"]["apps"]["href"],
        format!("{BASE_URL}/apps?page=0&size=10")
    );
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn get_app_round_trips(pool: PgPool) {
    let id = create(&pool, "/apps", json!({"nome": "Get Me", "versao": "2.1"})).await;

    let response = get(build_test_app(pool), &format!("/apps/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["nome"], "Get Me");
    assert_eq!(json["versao"], "2.1");
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn get_missing_app_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/apps/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "App não encontrado pelo id :: 999999");
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn update_app_persists_fields(pool: PgPool) {
    let id = create(&pool, "/apps", json!({"nome": "Original", "versao": "1"})).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/apps/{id}"),
        json!({"nome": "Updated", "versao": "2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["nome"], "Updated");

    let json = body_json(get(build_test_app(pool), &format!("/apps/{id}")).await).await;
    assert_eq!(json["nome"], "Updated");
    assert_eq!(json["versao"], "2");
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn update_missing_app_returns_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/apps/424242",
        json!({"nome": "Ghost", "versao": "1.0"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn delete_app_then_get_returns_404(pool: PgPool) {
    let id = create(&pool, "/apps", json!({"nome": "Delete Me", "versao": "1.0"})).await;

    let response = delete(build_test_app(pool.clone()), &format!("/apps/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &format!("/apps/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(pool), &format!("/apps/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn list_apps_is_paginated(pool: PgPool) {
    for n in 1..=5 {
        create(&pool, "/apps", json!({"nome": format!("App {n}"), "versao": "1.0"})).await;
    }

    let response = get(build_test_app(pool.clone()), "/apps?page=1&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["_embedded"]["appList"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["nome"], "App 3");
    assert_eq!(items[1]["nome"], "App 4");
    assert_eq!(
        items[0]["_links"]["apps"]["href"],
        format!("{BASE_URL}/apps?page=1&size=2")
    );
    assert_eq!(
        json["_links"]["self"]["href"],
        format!("{BASE_URL}/apps?page=1&size=2")
    );
    assert_eq!(
        json["page"],
        json!({"size": 2, "totalElements": 5, "totalPages": 3, "number": 1})
    );

    let last = body_json(get(build_test_app(pool), "/apps?page=2&size=2").await).await;
    assert_eq!(last["_embedded"]["appList"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn list_defaults_to_ten_and_omits_empty_embedded(pool: PgPool) {
    let json = body_json(get(build_test_app(pool.clone()), "/apps").await).await;
    assert!(json.get("_embedded").is_none());
    assert_eq!(json["page"]["size"], 10);

    for n in 0..12 {
        create(&pool, "/apps", json!({"nome": format!("A{n}"), "versao": "1.0"})).await;
    }
    let json = body_json(get(build_test_app(pool), "/apps").await).await;
    assert_eq!(json["_embedded"]["appList"].as_array().unwrap().len(), 10);
    assert_eq!(json["page"]["totalElements"], 12);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn page_size_above_maximum_is_rejected(pool: PgPool) {
    let response = get(build_test_app(pool), "/apps?size=51").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Related resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn cliente_belongs_to_app(pool: PgPool) {
    let app_id = create(&pool, "/apps", json!({"nome": "Sea Kids", "versao": "1.0"})).await;
    let response = post_json(
        build_test_app(pool.clone()),
        "/clientes",
        json!({"nome": "Maria", "email": "maria@mar.com", "app_id": app_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["app_id"], app_id);
    assert_eq!(
        json["_links"]["clientes"]["href"],
        format!("{BASE_URL}/clientes?page=0&size=10")
    );
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn cliente_with_invalid_email_is_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/clientes",
        json!({"nome": "Maria", "email": "maria.mar.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["details"][0]["field"], "email");
    assert_eq!(json["error"]["details"][0]["message"], "Formato de email inválido");

    let list = body_json(get(build_test_app(pool), "/clientes").await).await;
    assert_eq!(list["page"]["totalElements"], 0);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn unknown_foreign_key_is_bad_request(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/videos",
        json!({"titulo": "Tubarões", "link": "https://v.example/1", "app_id": 31337}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn update_keeps_foreign_keys(pool: PgPool) {
    let app_id = create(&pool, "/apps", json!({"nome": "Sea Kids", "versao": "1.0"})).await;
    let other_app = create(&pool, "/apps", json!({"nome": "Other", "versao": "1.0"})).await;
    let video_id = create(
        &pool,
        "/videos",
        json!({"titulo": "Polvos", "link": "https://v.example/p", "app_id": app_id}),
    )
    .await;

    let response = put_json(
        build_test_app(pool),
        &format!("/videos/{video_id}"),
        json!({"titulo": "Polvos gigantes", "link": "https://v.example/pg", "app_id": other_app}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["titulo"], "Polvos gigantes");
    assert_eq!(json["link"], "https://v.example/pg");
    assert_eq!(json["app_id"], app_id);
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn cadastro_and_login_lifecycle(pool: PgPool) {
    let app_id = create(&pool, "/apps", json!({"nome": "Sea Kids", "versao": "1.0"})).await;
    let cliente_id = create(
        &pool,
        "/clientes",
        json!({"nome": "João", "email": "joao@mar.com", "app_id": app_id}),
    )
    .await;
    let cadastro_id = create(
        &pool,
        "/cadastros",
        json!({
            "nome": "João",
            "email": "joao@mar.com",
            "senha": "baleia123",
            "app_id": app_id,
            "cliente_id": cliente_id
        }),
    )
    .await;
    let login_id = create(
        &pool,
        "/logins",
        json!({
            "email": "joao@mar.com",
            "senha": "baleia123",
            "cadastro_id": cadastro_id,
            "cliente_id": cliente_id
        }),
    )
    .await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/logins/{login_id}"),
        json!({"email": "joao.silva@mar.com", "senha": "golfinho456"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "joao.silva@mar.com");
    assert_eq!(json["senha"], "golfinho456");
    assert_eq!(json["cadastro_id"], cadastro_id);
    assert_eq!(
        json["_links"]["self"]["href"],
        format!("{BASE_URL}/logins/{login_id}")
    );
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn deleting_app_cascades_to_children(pool: PgPool) {
    let app_id = create(&pool, "/apps", json!({"nome": "Sea Kids", "versao": "1.0"})).await;
    let curiosidade_id = create(
        &pool,
        "/curiosidades",
        json!({
            "titulo": "Polvos têm três corações",
            "imagem": "https://img.example/polvo.png",
            "texto": "Dois bombeiam sangue para as brânquias.",
            "app_id": app_id
        }),
    )
    .await;

    let response = delete(build_test_app(pool.clone()), &format!("/apps/{app_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        build_test_app(pool),
        &format!("/curiosidades/{curiosidade_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["error"]["message"],
        format!("Curiosidade não encontrada pelo id :: {curiosidade_id}")
    );
}

#[sqlx::test(migrator = "sea_kids::MIGRATOR")]
#[ignore = "requires database"]
async fn ready_reports_database_ok(pool: PgPool) {
    let response = get(build_test_app(pool), "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["database"], "ok");
}
