//! End-to-end enquiry and gallery flow tests.

use chrono::{TimeZone, Utc};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use innovation_school_core::{Email, ImageRef, NewEnquiry};
use innovation_school_client::services::{GalleryItemUpdate, NewGalleryItem};
use innovation_school_integration_tests::TestContext;

fn enquiry_json(id: &str, epoch_secs: i64, read: bool) -> serde_json::Value {
    let submitted_at = Utc
        .timestamp_opt(epoch_secs, 0)
        .single()
        .expect("valid timestamp");
    serde_json::json!({
        "id": id,
        "name": "A Parent",
        "email": "parent@example.com",
        "subject": "Admission",
        "enquiryType": "admission",
        "message": "Hello",
        "submittedAt": submitted_at.to_rfc3339(),
        "isRead": read
    })
}

#[tokio::test]
async fn review_list_is_newest_first() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/enquiries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            enquiry_json("e-100", 100, true),
            enquiry_json("e-300", 300, false),
            enquiry_json("e-200", 200, false),
        ])))
        .mount(&ctx.server)
        .await;

    let inbox = ctx.state.enquiries();
    let enquiries = inbox.list().await.expect("list");
    let ids: Vec<&str> = enquiries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e-300", "e-200", "e-100"]);

    assert_eq!(inbox.unread_count().await.expect("count"), 2);
}

#[tokio::test]
async fn submitted_enquiry_reaches_store_with_stamps() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/enquiries"))
        .and(body_partial_json(serde_json::json!({
            "enquiryType": "general",
            "isRead": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let sent = ctx
        .state
        .enquiries()
        .submit(NewEnquiry {
            name: "A Visitor".to_owned(),
            email: Email::parse("visitor@example.com").expect("valid email"),
            subject: "School timings".to_owned(),
            enquiry_type: "general".to_owned(),
            message: "What are the office hours?".to_owned(),
        })
        .await
        .expect("submit succeeds");

    assert!(!sent.id.is_empty());
    assert!(!sent.is_read);
}

#[tokio::test]
async fn failed_submission_is_reported_sanitized() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/enquiries"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ctx.server)
        .await;

    let error = ctx
        .state
        .enquiries()
        .submit(NewEnquiry {
            name: "A Visitor".to_owned(),
            email: Email::parse("visitor@example.com").expect("valid email"),
            subject: "School timings".to_owned(),
            enquiry_type: "general".to_owned(),
            message: "What are the office hours?".to_owned(),
        })
        .await
        .expect_err("submit fails");

    assert_eq!(
        error.to_string(),
        "Backend service is not available. Please try again in a moment."
    );
}

#[tokio::test]
async fn gallery_create_then_metadata_update_preserves_image() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&ctx.server)
        .await;

    let created = ctx
        .state
        .gallery()
        .create(NewGalleryItem {
            title: "Sports Day".to_owned(),
            category: "Sports".to_owned(),
            image: ImageRef::new("https://cdn.example.com/sports-day.jpg"),
        })
        .await
        .expect("create succeeds");

    // The store now returns the created item; the metadata update re-reads
    // it right before writing, carrying the image reference over.
    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": created.id,
            "title": "Sports Day",
            "category": "Sports",
            "isActive": true,
            "image": "https://cdn.example.com/sports-day.jpg"
        }])))
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/gallery/{}", created.id)))
        .and(body_partial_json(serde_json::json!({
            "title": "Sports Day 2026",
            "isActive": false,
            "image": "https://cdn.example.com/sports-day.jpg"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.state
        .gallery()
        .update(
            &created.id,
            GalleryItemUpdate {
                title: "Sports Day 2026".to_owned(),
                category: "Sports".to_owned(),
                is_active: false,
                image: None,
            },
        )
        .await
        .expect("update succeeds");
}
