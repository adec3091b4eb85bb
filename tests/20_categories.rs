mod common;

use anyhow::Result;
use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

async fn create_category(app: &Router, token: &str, name: &str) -> Result<()> {
    let (status, payload) = common::send(
        app,
        "POST",
        "/categories",
        Some(json!({ "name": name })),
        Some(token),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payload["results"]["message"], "Success create data");
    Ok(())
}

/// Look an id up by name via select mode (create responses carry no id).
async fn category_id(app: &Router, token: &str, name: &str) -> Result<i64> {
    let uri = format!("/categories?select_mode=1&name={}", name);
    let (status, payload) = common::send(app, "GET", &uri, None, Some(token)).await?;
    assert_eq!(status, StatusCode::OK);
    payload["results"][0]["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("category {} not listed: {}", name, payload))
}

#[tokio::test]
async fn create_then_retrieve_round_trip() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    create_category(&app, &token, "Tools").await?;
    let id = category_id(&app, &token, "Tools").await?;

    let (status, payload) =
        common::send(&app, "GET", &format!("/categories/{}", id), None, Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["results"], json!({ "id": id, "name": "Tools" }));
    assert_eq!(payload["links"], json!({ "next": 0, "prev": 0 }));
    assert_eq!(payload["meta"], json!({}));

    Ok(())
}

#[tokio::test]
async fn retrieve_is_idempotent() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    create_category(&app, &token, "Fasteners").await?;
    let id = category_id(&app, &token, "Fasteners").await?;

    let uri = format!("/categories/{}", id);
    let (_, first) = common::send(&app, "GET", &uri, None, Some(&token)).await?;
    let (_, second) = common::send(&app, "GET", &uri, None, Some(&token)).await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn retrieve_missing_returns_404() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    let (status, payload) =
        common::send(&app, "GET", "/categories/999", None, Some(&token)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["code"], "NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn second_page_of_five() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    for name in ["Hammers", "Saws", "Drills", "Wrenches", "Pliers"] {
        create_category(&app, &token, name).await?;
    }

    // Page size 3: page 2 holds items 4-5, prev=1, next=0 (sentinel).
    let (status, payload) =
        common::send(&app, "GET", "/categories?page=2", None, Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);

    let results = payload["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "Wrenches");
    assert_eq!(results[1]["name"], "Pliers");
    assert_eq!(payload["links"], json!({ "next": 0, "prev": 1 }));

    Ok(())
}

#[tokio::test]
async fn bad_page_params_degrade_silently() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    for name in ["Hammers", "Saws", "Drills", "Wrenches", "Pliers"] {
        create_category(&app, &token, name).await?;
    }

    // Non-numeric page falls back to page 1.
    let (status, payload) =
        common::send(&app, "GET", "/categories?page=abc", None, Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["results"].as_array().unwrap().len(), 3);
    assert_eq!(payload["links"]["prev"], 0);

    // Out-of-range page clamps to the last page.
    let (status, payload) =
        common::send(&app, "GET", "/categories?page=99", None, Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["results"].as_array().unwrap().len(), 2);
    assert_eq!(payload["links"]["prev"], 1);

    Ok(())
}

#[tokio::test]
async fn select_mode_skips_pagination() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    for name in ["Hammers", "Saws", "Drills", "Wrenches", "Pliers"] {
        create_category(&app, &token, name).await?;
    }

    let (status, payload) =
        common::send(&app, "GET", "/categories?select_mode=1", None, Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["results"].as_array().unwrap().len(), 5);
    assert_eq!(payload["links"], json!({ "next": 0, "prev": 0 }));

    Ok(())
}

#[tokio::test]
async fn filters_narrow_and_blank_filters_do_not() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    for name in ["Hand Tools", "Power Tools", "Paint"] {
        create_category(&app, &token, name).await?;
    }

    // Name filter: contains match.
    let (_, payload) =
        common::send(&app, "GET", "/categories?name=Tools", None, Some(&token)).await?;
    assert_eq!(payload["results"].as_array().unwrap().len(), 2);

    // Id filter: exact match.
    let id = category_id(&app, &token, "Paint").await?;
    let uri = format!("/categories?id={}", id);
    let (_, payload) = common::send(&app, "GET", &uri, None, Some(&token)).await?;
    let results = payload["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Paint");

    // Blank filters apply no predicate.
    let (_, payload) =
        common::send(&app, "GET", "/categories?id=&name=", None, Some(&token)).await?;
    assert_eq!(payload["results"].as_array().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
async fn update_overwrites_name() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    create_category(&app, &token, "Glue").await?;
    let id = category_id(&app, &token, "Glue").await?;

    let (status, payload) = common::send(
        &app,
        "PUT",
        &format!("/categories/{}", id),
        Some(json!({ "name": "Adhesives" })),
        Some(&token),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["results"]["message"], "Success update category");

    let (_, payload) =
        common::send(&app, "GET", &format!("/categories/{}", id), None, Some(&token)).await?;
    assert_eq!(payload["results"]["name"], "Adhesives");

    Ok(())
}

#[tokio::test]
async fn update_missing_returns_404() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    let (status, _) = common::send(
        &app,
        "PUT",
        "/categories/999",
        Some(json!({ "name": "Ghost" })),
        Some(&token),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_returns_204_and_removes() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::bearer_token();

    create_category(&app, &token, "Scrap").await?;
    let id = category_id(&app, &token, "Scrap").await?;

    let (status, payload) = common::send(
        &app,
        "DELETE",
        &format!("/categories/{}", id),
        None,
        Some(&token),
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(payload, Value::Null);

    let (status, _) =
        common::send(&app, "GET", &format!("/categories/{}", id), None, Some(&token)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
