mod common;

use poem::http::StatusCode;
use serde_json::json;

use common::setup_client;

#[tokio::test]
async fn test_scheme_create_then_list() {
    let cli = setup_client().await;

    let resp = cli
        .post("/api/schemes")
        .body_json(&json!({
            "name": "X",
            "description": "d",
            "eligibility": "e",
            "category": "c"
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body = resp.json().await;
    let created = body.value().object();
    let id = created.get("id").string().to_string();
    assert!(!id.is_empty());
    created.get("name").assert_string("X");
    created.get("description").assert_string("d");
    created.get("eligibility").assert_string("e");
    created.get("category").assert_string("c");

    let resp = cli.get("/api/schemes").send().await;
    resp.assert_status_is_ok();

    let body = resp.json().await;
    let schemes = body.value().array();
    assert_eq!(schemes.len(), 1);
    schemes.get(0).object().get("id").assert_string(&id);
}

#[tokio::test]
async fn test_delete_missing_scheme_is_404_and_leaves_rows() {
    let cli = setup_client().await;

    cli.post("/api/schemes")
        .body_json(&json!({
            "name": "Keep",
            "description": "d",
            "eligibility": "e",
            "category": "c"
        }))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    cli.delete("/api/schemes/no-such-id")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let resp = cli.get("/api/schemes").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 1);
}

#[tokio::test]
async fn test_emergency_contacts_are_scoped_to_owner() {
    let cli = setup_client().await;

    let resp = cli
        .post("/api/emergency-contacts")
        .body_json(&json!({
            "userId": "u1",
            "name": "Asha",
            "phone": "555-0101",
            "relationship": "spouse"
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body = resp.json().await;
    let id = body.value().object().get("id").string().to_string();

    let resp = cli.get("/api/users/u1/emergency-contacts").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let contacts = body.value().array();
    assert_eq!(contacts.len(), 1);
    contacts.get(0).object().get("id").assert_string(&id);
    contacts.get(0).object().get("userId").assert_string("u1");

    let resp = cli.get("/api/users/u2/emergency-contacts").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);
}

#[tokio::test]
async fn test_emergency_contact_patch_and_delete() {
    let cli = setup_client().await;

    let resp = cli
        .post("/api/emergency-contacts")
        .body_json(&json!({
            "userId": "u1",
            "name": "Asha",
            "phone": "555-0101",
            "relationship": "spouse"
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let body = resp.json().await;
    let id = body.value().object().get("id").string().to_string();

    let resp = cli
        .patch(format!("/api/emergency-contacts/{}", id))
        .body_json(&json!({ "phone": "555-0202" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let updated = body.value().object();
    updated.get("phone").assert_string("555-0202");
    updated.get("name").assert_string("Asha");

    cli.patch("/api/emergency-contacts/missing")
        .body_json(&json!({ "phone": "555-0303" }))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    cli.delete(format!("/api/emergency-contacts/{}", id))
        .send()
        .await
        .assert_status_is_ok();

    cli.delete(format!("/api/emergency-contacts/{}", id))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_application_create_defaults_to_pending() {
    let cli = setup_client().await;

    let resp = cli
        .post("/api/applications")
        .body_json(&json!({
            "userId": "u1",
            "schemeId": "s1",
            "schemeName": "Education Grant"
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body = resp.json().await;
    let created = body.value().object();
    created.get("status").assert_string("Pending");
    created.get("schemeName").assert_string("Education Grant");

    let resp = cli.get("/api/applications").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 1);
}

#[tokio::test]
async fn test_marketplace_post_list_delete() {
    let cli = setup_client().await;

    let resp = cli
        .post("/api/marketplace")
        .body_json(&json!({
            "userId": "u1",
            "type": "equipment",
            "title": "Rucksack",
            "description": "80L, good condition",
            "contactInfo": "555-0149"
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body = resp.json().await;
    let created = body.value().object();
    let id = created.get("id").string().to_string();
    created.get("type").assert_string("equipment");

    let resp = cli.get("/api/marketplace").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 1);

    cli.delete(format!("/api/marketplace/{}", id))
        .send()
        .await
        .assert_status_is_ok();

    cli.delete(format!("/api/marketplace/{}", id))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_marketplace_rejects_unknown_listing_type() {
    let cli = setup_client().await;

    cli.post("/api/marketplace")
        .body_json(&json!({
            "userId": "u1",
            "type": "vehicle",
            "title": "Jeep",
            "description": "definitely not allowed",
            "contactInfo": "555-0149"
        }))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
