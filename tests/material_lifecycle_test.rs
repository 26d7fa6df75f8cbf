mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::ServiceExt;

use common::{error_fields, multipart_form, response_json, TestApp};
use texfab_api::entities::{material_details, materials};

const MATERIALS: &str = "/api/v1/master/materials";

async fn material_count(app: &TestApp) -> u64 {
    materials::Entity::find()
        .count(app.state.db.as_ref())
        .await
        .expect("count materials")
}

async fn detail_count(app: &TestApp) -> u64 {
    material_details::Entity::find()
        .count(app.state.db.as_ref())
        .await
        .expect("count details")
}

#[tokio::test]
async fn missing_required_fields_are_rejected_for_every_kind() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    for (kind, missing) in [
        ("yarn", "yarn_type"),
        ("greige", "fabric_type"),
        ("trim", "trim_type"),
    ] {
        let response = app
            .submit_material(
                Method::POST,
                MATERIALS,
                &token,
                &[("kind", kind), ("name", "Incomplete")],
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response_json(response).await;
        assert!(
            error_fields(&body).contains(&missing.to_string()),
            "{kind} submission should report {missing}"
        );
    }

    // finished reports every violation together: both required fields plus
    // the image policy.
    let response = app
        .submit_material(
            Method::POST,
            MATERIALS,
            &token,
            &[("kind", "finished"), ("name", "Incomplete")],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    let fields = error_fields(&body);
    for expected in ["base_fabric_type", "finish_type", "image"] {
        assert!(fields.contains(&expected.to_string()), "missing {expected}");
    }

    // Nothing was written for any of the failed submissions.
    assert_eq!(material_count(&app).await, 0);
    assert_eq!(detail_count(&app).await, 0);
}

#[tokio::test]
async fn finished_image_policy() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let fields = [
        ("kind", "finished"),
        ("name", "Dyed Poplin"),
        ("base_fabric_type", "Poplin"),
        ("finish_type", "dyed"),
    ];

    // No new upload and no stored image: the image field is the only
    // violation.
    let response = app
        .submit_material(Method::POST, MATERIALS, &token, &fields, None)
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["image".to_string()]);
    assert_eq!(material_count(&app).await, 0);

    // The same payload with an image succeeds.
    let response = app
        .submit_material(
            Method::POST,
            MATERIALS,
            &token,
            &fields,
            Some(("swatch.jpg", b"jpeg-bytes")),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["ok"], true);
    let id = body["id"].as_i64().expect("material id");

    let response = app
        .request(Method::GET, &format!("{MATERIALS}/{id}"), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let record = response_json(response).await;
    assert_eq!(record["kind"], "finished");
    assert!(record["image_path"]
        .as_str()
        .is_some_and(|p| p.starts_with("materials/")));

    // Editing without re-uploading keeps the stored image.
    let response = app
        .submit_material(
            Method::PUT,
            &format!("{MATERIALS}/{id}"),
            &token,
            &fields,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = app
        .request(Method::GET, &format!("{MATERIALS}/{id}"), Some(&token), None)
        .await;
    let record = response_json(response).await;
    assert!(record["image_path"].as_str().is_some());
}

#[tokio::test]
async fn yarn_round_trip() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let response = app
        .submit_material(
            Method::POST,
            MATERIALS,
            &token,
            &[
                ("kind", "yarn"),
                ("name", "Cotton 30s"),
                ("yarn_type", "Combed"),
                ("yarn_color", "White"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let id = body["id"].as_i64().expect("material id");

    let response = app
        .request(Method::GET, &format!("{MATERIALS}/{id}"), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let record = response_json(response).await;
    assert_eq!(record["name"], "Cotton 30s");
    assert_eq!(record["kind"], "yarn");
    assert_eq!(record["detail"]["kind"], "yarn");
    assert_eq!(record["detail"]["yarn_type"], "Combed");
    assert_eq!(record["detail"]["color"], "White");
}

#[tokio::test]
async fn kind_change_replaces_the_detail_wholesale() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let response = app
        .submit_material(
            Method::POST,
            MATERIALS,
            &token,
            &[
                ("kind", "greige"),
                ("name", "Plain Weave"),
                ("fabric_type", "Poplin"),
                ("gsm", "120.50"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let id = body["id"].as_i64().expect("material id");

    let detail = material_details::Entity::find_by_id(id)
        .one(app.state.db.as_ref())
        .await
        .expect("query detail")
        .expect("detail row exists");
    assert_eq!(detail.kind, "greige");
    assert_eq!(detail.fabric_type.as_deref(), Some("Poplin"));
    assert_eq!(detail.gsm, Some(dec!(120.50)));

    // Edit the record to a trim: the greige data is discarded, not merged.
    let response = app
        .submit_material(
            Method::PUT,
            &format!("{MATERIALS}/{id}"),
            &token,
            &[
                ("kind", "trim"),
                ("name", "Plain Weave"),
                ("trim_type", "Button"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(detail_count(&app).await, 1);
    let detail = material_details::Entity::find_by_id(id)
        .one(app.state.db.as_ref())
        .await
        .expect("query detail")
        .expect("detail row exists");
    assert_eq!(detail.kind, "trim");
    assert_eq!(detail.trim_type.as_deref(), Some("Button"));
    assert_eq!(detail.fabric_type, None);
    assert_eq!(detail.gsm, None);

    let response = app
        .request(Method::GET, &format!("{MATERIALS}/{id}"), Some(&token), None)
        .await;
    let record = response_json(response).await;
    assert_eq!(record["kind"], "trim");
    assert_eq!(record["detail"]["trim_type"], "Button");
}

#[tokio::test]
async fn delete_removes_the_detail_with_the_material() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let response = app
        .submit_material(
            Method::POST,
            MATERIALS,
            &token,
            &[("kind", "trim"), ("name", "Shirt Button"), ("trim_type", "Button")],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let id = body["id"].as_i64().expect("material id");
    assert_eq!(detail_count(&app).await, 1);

    let response = app
        .request(
            Method::DELETE,
            &format!("{MATERIALS}/{id}?embed=1"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, &format!("{MATERIALS}/{id}"), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(material_count(&app).await, 0);
    assert_eq!(detail_count(&app).await, 0);
}

#[tokio::test]
async fn list_filters_across_common_and_detail_fields() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    for fields in [
        &[
            ("kind", "yarn"),
            ("name", "Cotton 30s"),
            ("yarn_type", "Combed"),
        ][..],
        &[
            ("kind", "greige"),
            ("name", "Plain Weave"),
            ("fabric_type", "Poplin"),
        ][..],
    ] {
        let response = app
            .submit_material(Method::POST, MATERIALS, &token, fields, None)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Needle in a detail field.
    let response = app
        .request(Method::GET, &format!("{MATERIALS}?q=Poplin"), Some(&token), None)
        .await;
    let records = response_json(response).await;
    let records = records.as_array().expect("list response");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Plain Weave");

    // Needle in the name.
    let response = app
        .request(Method::GET, &format!("{MATERIALS}?q=Cotton"), Some(&token), None)
        .await;
    let records = response_json(response).await;
    assert_eq!(records.as_array().expect("list response").len(), 1);

    // No match.
    let response = app
        .request(Method::GET, &format!("{MATERIALS}?q=Denim"), Some(&token), None)
        .await;
    let records = response_json(response).await;
    assert!(records.as_array().expect("list response").is_empty());
}

#[tokio::test]
async fn non_embedded_mutations_redirect_to_the_list() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let (content_type, body) = multipart_form(
        &[("kind", "yarn"), ("name", "Ring Spun"), ("yarn_type", "Ring")],
        None,
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri(MATERIALS)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .expect("request");

    let response = app.router.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], MATERIALS);

    // The XMLHttpRequest marker selects the JSON acknowledgment instead.
    let (content_type, body) = multipart_form(
        &[("kind", "yarn"), ("name", "Open End"), ("yarn_type", "OE")],
        None,
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri(MATERIALS)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .header("x-requested-with", "XMLHttpRequest")
        .body(Body::from(body))
        .expect("request");

    let response = app.router.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["url"], MATERIALS);
}

#[tokio::test]
async fn materials_require_authentication() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, MATERIALS, None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .request(Method::GET, MATERIALS, Some("not-a-token"), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
