use crate::e2e::helpers;

use greeting_catalog::domain::catalog::{CatalogRepository, Gender};
use greeting_catalog::infrastructure::repositories::SnapshotCatalogRepository;
use helpers::DbTestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::test_context;

async fn create(ctx: &DbTestContext, path: &str, body: Value) -> i64 {
    let response = ctx
        .client
        .post_with_auth(path, &body, &ctx.token)
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    response.body.as_ref().unwrap()["id"].as_i64().unwrap()
}

/// Spanish language with one female voice, name and category
async fn seed_spanish(ctx: &DbTestContext) -> (i64, i64, i64) {
    let language_id = create(ctx, "/admin/languages", json!({ "name": "Spanish", "code": "es" })).await;
    create(
        ctx,
        "/admin/voices",
        json!({ "name": "Lucia", "external_voice_id": "ext-lucia", "gender": "female", "language_id": language_id }),
    )
    .await;
    let name_id = create(
        ctx,
        "/admin/names",
        json!({ "name": "Ana", "gender": "female", "language_id": language_id }),
    )
    .await;
    let category_id = create(
        ctx,
        "/admin/categories",
        json!({ "name": "Calma", "language_id": language_id }),
    )
    .await;
    (language_id, name_id, category_id)
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_normalize_and_list_languages(ctx: &DbTestContext) {
    let response = ctx
        .client
        .post_with_auth(
            "/admin/languages",
            &json!({ "name": "  Spanish ", "code": " ES " }),
            &ctx.token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["name"], json!("Spanish"));
    assert_eq!(body["code"], json!("es"));

    let response = ctx
        .client
        .get_with_auth("/admin/languages", &ctx.token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap().as_array().unwrap().len(), 1);
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_reject_duplicate_language_code(ctx: &DbTestContext) {
    create(ctx, "/admin/languages", json!({ "name": "Spanish", "code": "es" })).await;

    let response = ctx
        .client
        .post_with_auth(
            "/admin/languages",
            &json!({ "name": "Castellano", "code": "es" }),
            &ctx.token,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CONFLICT);
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_reject_blank_fields_and_unknown_language(ctx: &DbTestContext) {
    let response = ctx
        .client
        .post_with_auth("/admin/languages", &json!({ "name": " ", "code": "es" }), &ctx.token)
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .client
        .post_with_auth(
            "/admin/names",
            &json!({ "name": "Ana", "gender": "female", "language_id": 999 }),
            &ctx.token,
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Language 999 does not exist");
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_update_and_delete_names(ctx: &DbTestContext) {
    let (language_id, name_id, _) = seed_spanish(ctx).await;

    let response = ctx
        .client
        .put_with_auth(
            &format!("/admin/names/{}", name_id),
            &json!({ "name": "Anita", "gender": "female", "language_id": language_id }),
            &ctx.token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["name"], json!("Anita"));

    let path = format!("/admin/names/{}", name_id);
    let response = ctx.client.delete_with_auth(&path, &ctx.token).await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.delete_with_auth(&path, &ctx.token).await.unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Name not found");
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_report_orphans_when_deleting_language(ctx: &DbTestContext) {
    let (language_id, _, _) = seed_spanish(ctx).await;

    let response = ctx
        .client
        .delete_with_auth(&format!("/admin/languages/{}", language_id), &ctx.token)
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
    // One voice, one name and one category still point at it
    response.assert_header("x-orphaned-references", "3");
    assert_eq!(ctx.fixtures.count_rows("languages").await.unwrap(), 0);
    assert_eq!(ctx.fixtures.count_rows("names").await.unwrap(), 1);
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_serve_public_reads_after_snapshot_refresh(ctx: &DbTestContext) {
    let (_, name_id, category_id) = seed_spanish(ctx).await;
    ctx.fixtures
        .create_personal(name_id, "greeting", Some("greeting.mp3"))
        .await
        .unwrap();
    ctx.fixtures
        .create_general(category_id, "Calma", "Respira", "female", Some("respira.mp3"))
        .await
        .unwrap();

    // Nothing is public until the snapshot is refreshed
    let query = format!("/simulateAPICall?selectedName={}&selectedTopic=Calma", name_id);
    let response = ctx.client.get(&query).await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .client
        .post_with_auth("/admin/snapshot/refresh", &json!({}), &ctx.token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    let summary = response.body.as_ref().unwrap();
    assert_eq!(summary["names"], json!(1));
    assert_eq!(summary["general"], json!(1));

    let response = ctx.client.get(&query).await.unwrap();
    response.assert_status(StatusCode::OK);
    let files = response.body.as_ref().unwrap()["audioFiles"].clone();
    assert_eq!(
        files,
        json!([
            "https://assets.test/greeting.mp3?expires=3600",
            "https://assets.test/respira.mp3?expires=3600",
        ])
    );

    let response = ctx.client.get("/options").await.unwrap();
    assert_eq!(
        response.body.as_ref().unwrap()["topicOptions"],
        json!([{ "text": "Calma", "value": "Calma" }])
    );
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_resolve_the_same_from_live_store_and_snapshot(ctx: &DbTestContext) {
    let (language_id, name_id, category_id) = seed_spanish(ctx).await;
    let male_name = create(
        ctx,
        "/admin/names",
        json!({ "name": "Juan", "gender": "male", "language_id": language_id }),
    )
    .await;
    let older_greeting = ctx
        .fixtures
        .create_personal(name_id, "greeting", Some("older.mp3"))
        .await
        .unwrap();
    ctx.fixtures
        .create_personal(name_id, "greeting", Some("newer.mp3"))
        .await
        .unwrap();
    for topic in ["Respira", "Descansa", "Sonrie"] {
        ctx.fixtures
            .create_general(category_id, "Calma", topic, "female", Some("x.mp3"))
            .await
            .unwrap();
    }
    ctx.fixtures
        .create_general(category_id, "Calma", "Respira", "male", None)
        .await
        .unwrap();

    let snapshot = SnapshotCatalogRepository::new(ctx.catalog_repo.export_snapshot().await.unwrap());

    assert_eq!(
        ctx.catalog_repo.list_names().await.unwrap(),
        snapshot.list_names().await.unwrap()
    );
    assert_eq!(
        ctx.catalog_repo.list_theme_names().await.unwrap(),
        snapshot.list_theme_names().await.unwrap()
    );
    // Lowest id wins when a name has several greetings
    let live_greeting = ctx.catalog_repo.find_greeting(name_id).await.unwrap();
    assert_eq!(live_greeting, snapshot.find_greeting(name_id).await.unwrap());
    assert_eq!(live_greeting.unwrap().id, older_greeting);
    assert_eq!(ctx.catalog_repo.find_greeting(male_name).await.unwrap(), None);

    for gender in [Gender::Female, Gender::Male] {
        assert_eq!(
            ctx.catalog_repo
                .find_general_candidates("Calma", gender, language_id)
                .await
                .unwrap(),
            snapshot
                .find_general_candidates("Calma", gender, language_id)
                .await
                .unwrap()
        );
    }
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_export_live_store(ctx: &DbTestContext) {
    seed_spanish(ctx).await;

    let response = ctx
        .client
        .get_with_auth("/admin/snapshot", &ctx.token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["languages"][0]["code"], json!("es"));
    assert_eq!(body["voices"][0]["external_voice_id"], json!("ext-lucia"));
    assert_eq!(body["categories"][0]["name"], json!("Calma"));
    assert_eq!(body["general"], json!([]));
}
