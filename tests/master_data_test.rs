mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{error_fields, response_json, TestApp};

const JOBBERS: &str = "/api/v1/master/jobbers";
const JOBBER_TYPES: &str = "/api/v1/master/jobber-types";
const PARTIES: &str = "/api/v1/master/parties";
const LOCATIONS: &str = "/api/v1/master/locations";
const FIRM: &str = "/api/v1/master/firm";
const MATERIAL_TYPES: &str = "/api/v1/utilities/material-types";
const MATERIAL_SHADES: &str = "/api/v1/utilities/material-shades";

#[tokio::test]
async fn jobber_lifecycle_with_type_lookup() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let response = app
        .request(
            Method::POST,
            &format!("{JOBBER_TYPES}?embed=1"),
            Some(&token),
            Some(json!({"name": "Stitching"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let type_id = response_json(response).await["id"].as_i64().expect("type id");

    let response = app
        .request(
            Method::POST,
            &format!("{JOBBERS}?embed=1"),
            Some(&token),
            Some(json!({
                "name": "Ramesh",
                "phone": "9876543210",
                "role": "Supervisor",
                "jobber_type_id": type_id,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let jobber_id = response_json(response).await["id"].as_i64().expect("jobber id");

    let response = app
        .request(
            Method::GET,
            &format!("{JOBBERS}/{jobber_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let jobber = response_json(response).await;
    assert_eq!(jobber["name"], "Ramesh");
    assert_eq!(jobber["role"], "Supervisor");
    assert_eq!(jobber["jobber_type_id"], type_id);

    // Search across name and role.
    let response = app
        .request(Method::GET, &format!("{JOBBERS}?q=Supervisor"), Some(&token), None)
        .await;
    let found = response_json(response).await;
    assert_eq!(found.as_array().expect("jobber list").len(), 1);

    // Unknown role is rejected.
    let response = app
        .request(
            Method::POST,
            JOBBERS,
            Some(&token),
            Some(json!({"name": "Suresh", "role": "Chief"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["role".to_string()]);

    // Duplicate name under the same owner conflicts on the name field.
    let response = app
        .request(
            Method::POST,
            JOBBERS,
            Some(&token),
            Some(json!({"name": "Ramesh"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["name".to_string()]);
}

#[tokio::test]
async fn jobbers_are_owner_scoped() {
    let app = TestApp::new().await;
    let mira = app.signup("mira").await;
    let asha = app.signup("asha").await;

    let response = app
        .request(
            Method::POST,
            &format!("{JOBBERS}?embed=1"),
            Some(&mira),
            Some(json!({"name": "Ramesh"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let jobber_id = response_json(response).await["id"].as_i64().expect("jobber id");

    // The other tenant sees nothing and cannot reach the record.
    let response = app.request(Method::GET, JOBBERS, Some(&asha), None).await;
    let listed = response_json(response).await;
    assert!(listed.as_array().expect("jobber list").is_empty());

    let response = app
        .request(Method::GET, &format!("{JOBBERS}/{jobber_id}"), Some(&asha), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request(
            Method::DELETE,
            &format!("{JOBBERS}/{jobber_id}?embed=1"),
            Some(&asha),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A same-named jobber under the other owner is not a conflict.
    let response = app
        .request(
            Method::POST,
            JOBBERS,
            Some(&asha),
            Some(json!({"name": "Ramesh"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn party_identifier_formats_are_validated() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    let response = app
        .request(
            Method::POST,
            PARTIES,
            Some(&token),
            Some(json!({
                "party_name": "Shree Textiles",
                "pan_number": "not-a-pan",
                "gst_number": "also-wrong",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    let fields = error_fields(&body);
    assert!(fields.contains(&"pan_number".to_string()));
    assert!(fields.contains(&"gst_number".to_string()));

    let response = app
        .request(
            Method::POST,
            &format!("{PARTIES}?embed=1"),
            Some(&token),
            Some(json!({
                "party_name": "Shree Textiles",
                "full_name": "Shree Textiles Pvt Ltd",
                "pan_number": "ABCDE1234F",
                "gst_number": "27ABCDE1234F1Z5",
                "state": "MH",
                "phone_number": "9876543210",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Parties are shared across tenants, newest first.
    let asha = app.signup("asha").await;
    let response = app
        .request(
            Method::POST,
            &format!("{PARTIES}?embed=1"),
            Some(&asha),
            Some(json!({"party_name": "Global Yarns"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request(Method::GET, PARTIES, Some(&token), None).await;
    let listed = response_json(response).await;
    let listed = listed.as_array().expect("party list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["party_name"], "Global Yarns");
    assert_eq!(listed[1]["party_name"], "Shree Textiles");
}

#[tokio::test]
async fn location_lifecycle_and_search() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;

    for (name, city) in [("Unit 1 Godown", "Surat"), ("Finishing Store", "Mumbai")] {
        let response = app
            .request(
                Method::POST,
                &format!("{LOCATIONS}?embed=1"),
                Some(&token),
                Some(json!({"name": name, "city": city, "pincode": "395003"})),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .request(Method::GET, &format!("{LOCATIONS}?q=Surat"), Some(&token), None)
        .await;
    let listed = response_json(response).await;
    let listed = listed.as_array().expect("location list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Unit 1 Godown");

    // Duplicate (owner, name) conflicts.
    let response = app
        .request(
            Method::POST,
            LOCATIONS,
            Some(&token),
            Some(json!({"name": "Unit 1 Godown"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["name".to_string()]);

    // Malformed pincode is a field error.
    let response = app
        .request(
            Method::POST,
            LOCATIONS,
            Some(&token),
            Some(json!({"name": "Yard", "pincode": "1234"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["pincode".to_string()]);
}

#[tokio::test]
async fn firm_profile_is_an_upsert_per_owner() {
    let app = TestApp::new().await;
    let mira = app.signup("mira").await;
    let asha = app.signup("asha").await;

    // Nothing saved yet.
    let response = app.request(Method::GET, FIRM, Some(&mira), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request(
            Method::PUT,
            &format!("{FIRM}?embed=1"),
            Some(&mira),
            Some(json!({
                "firm_name": "Mira Fabrics",
                "firm_type": "proprietorship",
                "city": "Surat",
                "gst_number": "24ABCDE1234F1Z2",
                "bank_name": "SBI",
                "ifsc_code": "SBIN0001234",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first_id = response_json(response).await["id"].as_i64().expect("firm id");

    // Saving again updates the same row.
    let response = app
        .request(
            Method::PUT,
            &format!("{FIRM}?embed=1"),
            Some(&mira),
            Some(json!({
                "firm_name": "Mira Fabrics LLP",
                "firm_type": "llp",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second_id = response_json(response).await["id"].as_i64().expect("firm id");
    assert_eq!(first_id, second_id);

    let response = app.request(Method::GET, FIRM, Some(&mira), None).await;
    let firm = response_json(response).await;
    assert_eq!(firm["firm_name"], "Mira Fabrics LLP");
    assert_eq!(firm["firm_type"], "llp");

    // The other owner still has no firm on record.
    let response = app.request(Method::GET, FIRM, Some(&asha), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Malformed IFSC is a field error.
    let response = app
        .request(
            Method::PUT,
            FIRM,
            Some(&mira),
            Some(json!({
                "firm_name": "Mira Fabrics LLP",
                "firm_type": "llp",
                "ifsc_code": "SBIN123",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["ifsc_code".to_string()]);

    let response = app
        .request(Method::DELETE, &format!("{FIRM}?embed=1"), Some(&mira), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = app.request(Method::GET, FIRM, Some(&mira), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn material_lookups_are_owner_scoped_and_drive_material_forms() {
    let app = TestApp::new().await;
    let mira = app.signup("mira").await;
    let asha = app.signup("asha").await;

    let response = app
        .request(
            Method::POST,
            &format!("{MATERIAL_TYPES}?embed=1"),
            Some(&mira),
            Some(json!({"name": "Cotton Yarn", "material_kind": "yarn"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let type_id = response_json(response).await["id"].as_i64().expect("type id");

    let response = app
        .request(
            Method::POST,
            &format!("{MATERIAL_SHADES}?embed=1"),
            Some(&mira),
            Some(json!({"name": "Optic White", "code": "OW-01"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Owner scoping: the other tenant sees neither lookup.
    let response = app
        .request(Method::GET, MATERIAL_TYPES, Some(&asha), None)
        .await;
    assert!(response_json(response)
        .await
        .as_array()
        .expect("type list")
        .is_empty());
    let response = app
        .request(Method::GET, MATERIAL_SHADES, Some(&asha), None)
        .await;
    assert!(response_json(response)
        .await
        .as_array()
        .expect("shade list")
        .is_empty());

    // A material referencing another owner's type reads as an invalid choice.
    let type_ref = type_id.to_string();
    let response = app
        .submit_material(
            Method::POST,
            "/api/v1/master/materials",
            &asha,
            &[
                ("kind", "yarn"),
                ("name", "Cotton 40s"),
                ("yarn_type", "Carded"),
                ("material_type_id", type_ref.as_str()),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["material_type_id".to_string()]);

    // The owning tenant can classify with it, and the list filters by it.
    let response = app
        .submit_material(
            Method::POST,
            "/api/v1/master/materials",
            &mira,
            &[
                ("kind", "yarn"),
                ("name", "Cotton 40s"),
                ("yarn_type", "Carded"),
                ("material_type_id", type_ref.as_str()),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .submit_material(
            Method::POST,
            "/api/v1/master/materials",
            &mira,
            &[("kind", "trim"), ("name", "Shell Button"), ("trim_type", "Button")],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/master/materials?type={type_id}"),
            Some(&mira),
            None,
        )
        .await;
    let listed = response_json(response).await;
    let listed = listed.as_array().expect("material list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Cotton 40s");
}
