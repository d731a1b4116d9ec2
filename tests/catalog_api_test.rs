//! Integration tests: catalog HTTP API.
//!
//! Runs the real handlers and catalog service over the in-memory store,
//! so no database is needed.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use std::sync::Arc;

use video_catalog_service::db::MemoryVideoStore;
use video_catalog_service::handlers;
use video_catalog_service::models::VideoRecord;
use video_catalog_service::services::CatalogService;

fn catalog() -> web::Data<CatalogService> {
    web::Data::new(CatalogService::new(Arc::new(MemoryVideoStore::default())))
}

fn post_video(name: &str, url: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/videos")
        .set_json(serde_json::json!({ "name": name, "url": url }))
}

fn listed_names(body: &serde_json::Value) -> Vec<&str> {
    body["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect()
}

macro_rules! spawn_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data($service)
                .configure(handlers::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn add_video_returns_created_record_with_extracted_id() {
    let app = spawn_app!(catalog());

    let req = test::TestRequest::post()
        .uri("/api/v1/videos")
        .set_json(serde_json::json!({
            "name": "Rust talk",
            "url": "https://www.youtube.com/watch?v=ZDWzXDTxI4Q",
            "notes": "from the conference"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let video: VideoRecord = test::read_body_json(resp).await;
    assert_eq!(video.video_id, "ZDWzXDTxI4Q");
    assert_eq!(video.name, "Rust talk");
    assert_eq!(video.notes.as_deref(), Some("from the conference"));
}

#[actix_web::test]
async fn invalid_url_is_rejected_with_400_and_nothing_is_stored() {
    let service = catalog();
    let app = spawn_app!(service.clone());

    for url in [
        "https://www.github.com",
        "http://www.youtube.com/watch?v=abc",
        "https://www.youtube.com/watch?abc=123",
        "https://www.youtube.com/watch?v=",
    ] {
        let resp = test::call_service(&app, post_video("bad", url).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "url: {url}");
    }

    assert!(service.list_videos(None).await.unwrap().is_empty());
}

#[actix_web::test]
async fn validation_error_body_names_the_offending_url() {
    let app = spawn_app!(catalog());

    let resp =
        test::call_service(&app, post_video("bad", "https://www.github.com").to_request()).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(body["code"], 400);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("https://www.github.com"));
}

#[actix_web::test]
async fn blank_name_is_rejected() {
    let app = spawn_app!(catalog());

    let req = post_video("", "https://www.youtube.com/watch?v=abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn duplicate_video_gets_409_and_count_stays_at_one() {
    let service = catalog();
    let app = spawn_app!(service.clone());

    let req = post_video("first", "https://www.youtube.com/watch?v=abc123").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // Different URL text, same extracted identifier.
    let req = post_video("second", "https://www.youtube.com/watch?v=abc123&t=42").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    assert_eq!(service.list_videos(None).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn listing_is_sorted_case_insensitively() {
    let app = spawn_app!(catalog());
    for (name, id) in [("ZXY", "id1"), ("abc", "id2"), ("AAA", "id3"), ("lmn", "id4")] {
        let url = format!("https://www.youtube.com/watch?v={id}");
        let resp = test::call_service(&app, post_video(name, &url).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/v1/videos").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(listed_names(&body), vec!["AAA", "abc", "lmn", "ZXY"]);
    assert_eq!(body["count"], 4);
    assert_eq!(body["count_label"], "4 videos");
}

#[actix_web::test]
async fn search_filters_case_insensitively() {
    let app = spawn_app!(catalog());
    for (name, id) in [("ZXY", "id1"), ("abc", "id2"), ("AAA", "id3"), ("lmn", "id4")] {
        let url = format!("https://www.youtube.com/watch?v={id}");
        test::call_service(&app, post_video(name, &url).to_request()).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/videos?search=a")
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(listed_names(&body), vec!["AAA", "abc"]);
    assert_eq!(body["count_label"], "2 videos");
}

#[actix_web::test]
async fn empty_catalog_lists_as_zero_videos() {
    let app = spawn_app!(catalog());

    let req = test::TestRequest::get().uri("/api/v1/videos").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(body["videos"], serde_json::json!([]));
    assert_eq!(body["count"], 0);
    assert_eq!(body["count_label"], "0 videos");
}

#[actix_web::test]
async fn single_video_gets_singular_count_label() {
    let app = spawn_app!(catalog());
    let req = post_video("only one", "https://www.youtube.com/watch?v=solo").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/v1/videos").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(body["count_label"], "1 video");
}

#[actix_web::test]
async fn detail_lookup_round_trips() {
    let app = spawn_app!(catalog());
    let req = post_video("detail me", "https://www.youtube.com/watch?v=detail1").to_request();
    let created: VideoRecord = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/videos/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: VideoRecord = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn detail_lookup_of_unknown_id_is_404() {
    let app = spawn_app!(catalog());

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/videos/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
