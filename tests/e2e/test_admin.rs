use crate::e2e::helpers;

use greeting_catalog::domain::auth::JwtManager;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_admin_requests_without_token(ctx: &TestContext) {
    let response = ctx.client.get("/admin/languages").await.unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Missing authorization header");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_bearer_authorization(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/admin/names", &[("Authorization", "Basic YWRtaW46YWRtaW4=")])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Invalid authorization format");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_token_signed_with_other_secret(ctx: &TestContext) {
    let token = JwtManager::new("some-other-secret".to_string(), 1)
        .generate_token("intruder")
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/admin/snapshot", &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Invalid token");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_expired_token(ctx: &TestContext) {
    let token = JwtManager::new(helpers::TEST_JWT_SECRET.to_string(), -2)
        .generate_token("operator")
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/admin/voices", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_guard_generation_routes(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/admin/names/7/messages", &json!({ "type": "greeting" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx.client.delete("/admin/personal/10").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .client
        .post("/admin/snapshot/refresh", &json!({}))
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_writes_on_public_routes(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/options", &json!({ "voiceOptions": [] }))
        .await
        .unwrap();

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
