//! End-to-end kiosk flows over the public HTTP surface.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use sewavault::Trace;
use sewavault::domain::{TokenRegistry, TokenService};
use sewavault::inbound::http::api_scope;
use sewavault::inbound::http::state::HttpState;
use sewavault::outbound::memory::InMemoryDepositStore;

#[fixture]
fn state() -> HttpState {
    let service = TokenService::new(
        TokenRegistry::standard(),
        Arc::new(InMemoryDepositStore::new()),
        Arc::new(mockable::DefaultClock),
    );
    HttpState::from_service(Arc::new(service))
}

fn deposit_payload(token_number: i64) -> Value {
    json!({
        "tokenNumber": token_number,
        "sangatPhoto": "data:image/jpeg;base64,/9j/4AAQSkZJRg",
        "items": [
            { "name": "Mobile", "quantity": 1 },
            { "name": "Charger", "quantity": 1 }
        ],
        "others": "black backpack"
    })
}

macro_rules! kiosk_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(Trace)
                .service(api_scope()),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn token_1001_deposit_and_return(state: HttpState) {
    let app = kiosk_app!(state);

    let validate = actix_test::TestRequest::get()
        .uri("/api/tokens/1001/validate")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, validate).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["token"]["isInUse"], false);

    let deposit = actix_test::TestRequest::post()
        .uri("/api/deposits")
        .set_json(deposit_payload(1001))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, deposit).await;
    assert_eq!(body, json!({ "success": true }));

    let revalidate = actix_test::TestRequest::get()
        .uri("/api/tokens/1001/validate")
        .to_request();
    let response = actix_test::call_service(&app, revalidate).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let fetch = actix_test::TestRequest::get()
        .uri("/api/tokens/1001")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, fetch).await;
    assert_eq!(body["isInUse"], true);
    assert_eq!(body["barcodeData"], "ABX_1001_IFUD7D_RSSB");
    assert_eq!(body["deposit"]["others"], "black backpack");

    let stats = actix_test::TestRequest::get()
        .uri("/api/tokens/stats")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, stats).await;
    assert_eq!(body, json!({ "inUse": 1, "available": 19 }));

    let collect = actix_test::TestRequest::delete()
        .uri("/api/deposits/1001")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, collect).await;
    assert_eq!(body, json!({ "success": true }));

    let fetch = actix_test::TestRequest::get()
        .uri("/api/tokens/1001")
        .to_request();
    let response = actix_test::call_service(&app, fetch).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "Token is not currently in use");

    let validate = actix_test::TestRequest::get()
        .uri("/api/tokens/1001/validate")
        .to_request();
    let response = actix_test::call_service(&app, validate).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn stats_count_down_as_tokens_fill(state: HttpState) {
    let app = kiosk_app!(state);

    for number in 1011..=1016 {
        let deposit = actix_test::TestRequest::post()
            .uri("/api/deposits")
            .set_json(deposit_payload(number))
            .to_request();
        let response = actix_test::call_service(&app, deposit).await;
        assert_eq!(response.status(), StatusCode::OK, "deposit to {number}");
    }

    let stats = actix_test::TestRequest::get()
        .uri("/api/tokens/stats")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, stats).await;
    assert_eq!(body, json!({ "inUse": 6, "available": 14 }));

    let list = actix_test::TestRequest::get().uri("/api/tokens").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, list).await;
    let in_use: Vec<i64> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter(|token| token["isInUse"] == true)
        .filter_map(|token| token["tokenNumber"].as_i64())
        .collect();
    assert_eq!(in_use, (1011..=1016).collect::<Vec<_>>());
}

#[rstest]
#[actix_web::test]
async fn scanned_barcode_leads_to_deposit(state: HttpState) {
    let app = kiosk_app!(state);

    let resolve = actix_test::TestRequest::post()
        .uri("/api/barcodes/resolve")
        .set_json(json!({ "barcode": "ABX_1019_95FKXI_RSSB" }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, resolve).await;
    assert_eq!(body, json!({ "valid": true, "tokenNumber": 1019 }));

    let token_number = body["tokenNumber"].as_i64().expect("token number");
    let deposit = actix_test::TestRequest::post()
        .uri("/api/deposits")
        .set_json(deposit_payload(token_number))
        .to_request();
    let response = actix_test::call_service(&app, deposit).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[case(9999)]
#[case(1000)]
#[case(0)]
#[actix_web::test]
async fn deposits_to_unregistered_tokens_always_fail(state: HttpState, #[case] number: i64) {
    let app = kiosk_app!(state);

    let deposit = actix_test::TestRequest::post()
        .uri("/api/deposits")
        .set_json(deposit_payload(number))
        .to_request();
    let response = actix_test::call_service(&app, deposit).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "Invalid token number");
}
