mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_address_success() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;
    let contact_id = app.create_contact(&token, "Yuki").await;

    let response = app
        .post_authenticated(&format!("/api/contacts/{}/addresses", contact_id), &token)
        .json(&json!({
            "street": "Jalan",
            "city": "Jakarta",
            "province": "DKI",
            "country": "Indonesia",
            "postalCode": "12345"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["street"], "Jalan");
    assert_eq!(body["data"]["city"], "Jakarta");
    assert_eq!(body["data"]["province"], "DKI");
    assert_eq!(body["data"]["country"], "Indonesia");
    assert_eq!(body["data"]["postalCode"], "12345");
}

#[tokio::test]
async fn test_create_address_invalid() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;
    let contact_id = app.create_contact(&token, "Yuki").await;

    let response = app
        .post_authenticated(&format!("/api/contacts/{}/addresses", contact_id), &token)
        .json(&json!({
            "country": "",
            "postalCode": "12345678901"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["errors"]["country"].is_string());
    assert!(body["errors"]["postalCode"].is_string());
}

#[tokio::test]
async fn test_create_address_contact_not_found() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;

    let response = app
        .post_authenticated("/api/contacts/missing/addresses", &token)
        .json(&json!({ "country": "Indonesia" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], "Contact not found");
}

#[tokio::test]
async fn test_get_address_not_found_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;
    let contact_id = app.create_contact(&token, "Yuki").await;

    let response = app
        .get_authenticated(
            &format!("/api/contacts/{}/addresses/missing", contact_id),
            &token,
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], "Address not found");
}

#[tokio::test]
async fn test_addresses_under_foreign_contact_are_hidden() {
    let app = TestApp::spawn().await;
    let owner = app.register_and_login("test", "secret").await;
    let stranger = app.register_and_login("other", "secret").await;

    let contact_id = app.create_contact(&owner, "Yuki").await;
    let address_id = app.create_address(&owner, &contact_id, "Indonesia").await;
    let path = format!("/api/contacts/{}/addresses/{}", contact_id, address_id);

    let response = app.get_authenticated(&path, &stranger).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .put_authenticated(&path, &stranger)
        .json(&json!({ "country": "Japan" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .delete_authenticated(&path, &stranger)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get_authenticated(&format!("/api/contacts/{}/addresses", contact_id), &stranger)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post_authenticated(&format!("/api/contacts/{}/addresses", contact_id), &stranger)
        .json(&json!({ "country": "Japan" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Untouched for the owner
    let response = app.get_authenticated(&path, &owner).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["country"], "Indonesia");
}

#[tokio::test]
async fn test_address_of_other_contact_is_hidden() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;

    let first = app.create_contact(&token, "Yuki").await;
    let second = app.create_contact(&token, "Budi").await;
    let address_id = app.create_address(&token, &first, "Indonesia").await;

    let response = app
        .get_authenticated(
            &format!("/api/contacts/{}/addresses/{}", second, address_id),
            &token,
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_addresses() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;
    let contact_id = app.create_contact(&token, "Yuki").await;
    let path = format!("/api/contacts/{}/addresses", contact_id);

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"], json!([]));

    let first = app.create_address(&token, &contact_id, "Indonesia").await;
    let second = app.create_address(&token, &contact_id, "Japan").await;

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();

    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], first.as_str());
    assert_eq!(listed[1]["id"], second.as_str());
}

#[tokio::test]
async fn test_address_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;
    let contact_id = app.create_contact(&token, "Yuki").await;
    let address_id = app.create_address(&token, &contact_id, "Indonesia").await;
    let path = format!("/api/contacts/{}/addresses/{}", contact_id, address_id);

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["id"], address_id.as_str());
    assert_eq!(body["data"]["country"], "Indonesia");

    let response = app
        .put_authenticated(&path, &token)
        .json(&json!({
            "street": "Shibuya",
            "city": "Tokyo",
            "country": "Japan"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["country"], "Japan");
    assert_eq!(body["data"]["city"], "Tokyo");
    assert!(body["data"]["province"].is_null());
    assert!(body["data"]["postalCode"].is_null());

    let response = app.delete_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"], "ok");

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.delete_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_flow() {
    let app = TestApp::spawn().await;

    app.register("test", "secret", "Test").await;
    let session = app.login("test", "secret").await;
    let token = session["token"].as_str().unwrap().to_string();

    let contact_id = app.create_contact(&token, "Yuki").await;
    let address_id = app.create_address(&token, &contact_id, "Indonesia").await;
    let path = format!("/api/contacts/{}/addresses/{}", contact_id, address_id);

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .put_authenticated(&path, &token)
        .json(&json!({ "country": "Japan" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.delete_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], "Address not found");

    let response = app
        .delete_authenticated("/api/auth/logout", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get_authenticated(&format!("/api/contacts/{}", contact_id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_undecodable_path_uses_error_envelope() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("test", "secret").await;

    let response = app
        .get_authenticated("/api/contacts/%FF/addresses", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"].as_str().is_some_and(|e| e.contains("contact_id")));
}
