use crate::e2e::helpers;

use helpers::DbTestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::test_context;

const THEMES_ANSWER: &str = r#"```json
{"themes": [{"theme_name": "Calma", "topics": ["Respira", "Descansa"]}]}
```"#;

async fn create(ctx: &DbTestContext, path: &str, body: Value) -> Value {
    let response = ctx
        .client
        .post_with_auth(path, &body, &ctx.token)
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    response.body.clone().unwrap()
}

/// Spanish catalog with a female voice; returns (name_id, category_id)
async fn seed(ctx: &DbTestContext) -> (i64, i64) {
    let language = create(ctx, "/admin/languages", json!({ "name": "Spanish", "code": "es" })).await;
    let language_id = language["id"].as_i64().unwrap();
    create(
        ctx,
        "/admin/voices",
        json!({ "name": "Lucia", "elevenlabs_voice_id": "ext-lucia", "gender": "female", "language_id": language_id }),
    )
    .await;
    let name = create(
        ctx,
        "/admin/names",
        json!({ "name": "Ana", "gender": "female", "language_id": language_id }),
    )
    .await;
    let category = create(
        ctx,
        "/admin/categories",
        json!({ "name": "Calma", "language_id": language_id }),
    )
    .await;
    (name["id"].as_i64().unwrap(), category["id"].as_i64().unwrap())
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_generate_and_voice_personal_greeting(ctx: &DbTestContext) {
    let (name_id, _) = seed(ctx).await;
    ctx.text.push_answer("  Hola Anita, <break time=\"1.0s\" /> que bueno verte  ");

    let personal = create(
        ctx,
        &format!("/admin/names/{}/messages", name_id),
        json!({ "type": "greeting" }),
    )
    .await;

    assert_eq!(personal["type"], json!("greeting"));
    assert_eq!(
        personal["text"],
        json!("Hola Anita, <break time=\"1.0s\" /> que bueno verte")
    );
    let key = personal["audio_file"].as_str().unwrap();
    assert!(key.ends_with(".mp3"));
    assert_eq!(
        ctx.assets.object(key).unwrap(),
        b"mp3:ext-lucia:Hola Anita, <break time=\"1.0s\" /> que bueno verte".to_vec()
    );
    assert!(ctx.text.prompts()[0].contains("Ana"));
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_keep_text_when_synthesis_fails(ctx: &DbTestContext) {
    let (name_id, _) = seed(ctx).await;
    ctx.tts.set_failing(true);

    let response = ctx
        .client
        .post_with_auth(
            &format!("/admin/names/{}/messages", name_id),
            &json!({}),
            &ctx.token,
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Speech synthesis unavailable");

    let response = ctx
        .client
        .get_with_auth(&format!("/admin/names/{}/messages", name_id), &ctx.token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    let rows = response.body.as_ref().unwrap().as_array().unwrap().clone();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["text"], json!("Generated text"));
    assert_eq!(rows[0]["audio_file"], Value::Null);
    assert_eq!(ctx.assets.object_count(), 0);

    // Voicing can be retried once the provider is back
    ctx.tts.set_failing(false);
    let personal_id = rows[0]["id"].as_i64().unwrap();
    let response = ctx
        .client
        .post_with_auth(
            &format!("/admin/personal/{}/audio", personal_id),
            &json!({}),
            &ctx.token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert!(response.body.as_ref().unwrap()["audio_file"].is_string());
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_insert_generated_topics_once(ctx: &DbTestContext) {
    let (_, category_id) = seed(ctx).await;
    let path = format!("/admin/categories/{}/themes", category_id);
    let request = json!({
        "description": "Soothing words before sleep",
        "theme_count": 1,
        "topics_per_theme": 2,
        "gender": "female",
    });

    ctx.text.push_answer(THEMES_ANSWER);
    let result = create(ctx, &path, request.clone()).await;
    assert_eq!(result, json!({ "inserted": 2, "skipped": 0 }));

    ctx.text.push_answer(THEMES_ANSWER);
    let result = create(ctx, &path, request).await;
    assert_eq!(result, json!({ "inserted": 0, "skipped": 2 }));

    let response = ctx
        .client
        .get_with_auth(&format!("/admin/categories/{}/general", category_id), &ctx.token)
        .await
        .unwrap();
    let rows = response.body.as_ref().unwrap().as_array().unwrap().clone();
    let topics: Vec<&str> = rows.iter().map(|r| r["topic_name"].as_str().unwrap()).collect();
    assert_eq!(topics, vec!["Respira", "Descansa"]);
    assert!(rows.iter().all(|r| r["text"].is_null()));
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_write_nothing_when_themes_are_malformed(ctx: &DbTestContext) {
    let (_, category_id) = seed(ctx).await;
    ctx.text.push_answer("Here are some themes: Calma, Energia");

    let response = ctx
        .client
        .post_with_auth(
            &format!("/admin/categories/{}/themes", category_id),
            &json!({ "theme_count": 2, "topics_per_theme": 2, "gender": "female" }),
            &ctx.token,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Generated themes could not be parsed");
    assert_eq!(ctx.fixtures.count_rows("general_messages").await.unwrap(), 0);
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_require_a_voice_for_theme_gender(ctx: &DbTestContext) {
    let (_, category_id) = seed(ctx).await;

    let response = ctx
        .client
        .post_with_auth(
            &format!("/admin/categories/{}/themes", category_id),
            &json!({ "theme_count": 1, "topics_per_theme": 1, "gender": "male" }),
            &ctx.token,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.text.prompts().is_empty());
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_fill_general_text_then_audio(ctx: &DbTestContext) {
    let (_, category_id) = seed(ctx).await;
    let general_id = ctx
        .fixtures
        .create_general(category_id, "Calma", "Respira", "female", None)
        .await
        .unwrap();

    ctx.text.push_answer("Respira hondo, solecito");
    let response = ctx
        .client
        .post_with_auth(
            &format!("/admin/general/{}/text", general_id),
            &json!({}),
            &ctx.token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["text"], json!("Respira hondo, solecito"));
    assert_eq!(body["symbols"], json!(23));
    assert_eq!(body["audio_file"], Value::Null);

    let response = ctx
        .client
        .post_with_auth(
            &format!("/admin/general/{}/audio", general_id),
            &json!({}),
            &ctx.token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    let key = response.body.as_ref().unwrap()["audio_file"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(
        ctx.assets.object(&key).unwrap(),
        b"mp3:ext-lucia:Respira hondo, solecito".to_vec()
    );
    assert_eq!(
        ctx.tts.calls(),
        vec![("Respira hondo, solecito".to_string(), "ext-lucia".to_string())]
    );
}

#[test_context(DbTestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_delete_personal_messages(ctx: &DbTestContext) {
    let (name_id, _) = seed(ctx).await;
    let personal_id = ctx
        .fixtures
        .create_personal(name_id, "night", None)
        .await
        .unwrap();

    let path = format!("/admin/personal/{}", personal_id);
    let response = ctx.client.delete_with_auth(&path, &ctx.token).await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.delete_with_auth(&path, &ctx.token).await.unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Personal message not found");
}
