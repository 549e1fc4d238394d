//! Concurrency guarantees of the token service over the in-memory store.

use std::sync::Arc;

use futures::future::join_all;
use rstest::{fixture, rstest};

use sewavault::domain::ports::{CreateDepositRequest, DepositCommand, TokenQuery};
use sewavault::domain::{
    DepositedItem, ErrorCode, TokenNumber, TokenRegistry, TokenService, TokenStats,
};
use sewavault::outbound::memory::InMemoryDepositStore;

type KioskService = TokenService<InMemoryDepositStore>;

#[fixture]
fn service() -> Arc<KioskService> {
    Arc::new(TokenService::new(
        TokenRegistry::standard(),
        Arc::new(InMemoryDepositStore::new()),
        Arc::new(mockable::DefaultClock),
    ))
}

fn request(number: i64) -> CreateDepositRequest {
    CreateDepositRequest {
        token_number: TokenNumber::new(number),
        sangat_photo: "data:image/png;base64,AAAA".to_owned(),
        items: vec![DepositedItem::new("Headset", 1)],
        others: None,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_deposits_to_1002_admit_exactly_one(service: Arc<KioskService>) {
    let attempts = (0..2).map(|_| {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.create_deposit(request(1002)).await })
    });

    let outcomes: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task joins"))
        .collect();

    let successes = outcomes.iter().filter(|o| o.is_ok()).count();
    let failures: Vec<ErrorCode> = outcomes
        .iter()
        .filter_map(|o| o.as_ref().err().map(|e| e.code()))
        .collect();
    assert_eq!(successes, 1);
    assert_eq!(failures, vec![ErrorCode::AlreadyInUse]);
    assert_eq!(
        service.stats().await.expect("stats"),
        TokenStats {
            in_use: 1,
            available: 19
        }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_deposits_to_distinct_tokens_all_land(service: Arc<KioskService>) {
    let attempts = (1001..=1020).map(|number| {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.create_deposit(request(number)).await })
    });

    for joined in join_all(attempts).await {
        joined.expect("task joins").expect("deposit succeeds");
    }

    assert_eq!(
        service.stats().await.expect("stats"),
        TokenStats {
            in_use: 20,
            available: 0
        }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn deposit_and_return_storm_leaves_store_consistent(service: Arc<KioskService>) {
    let tasks = (0..40).map(|round| {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let number = 1001 + (round % 5);
            let _ = service.create_deposit(request(number)).await;
            service
                .delete_deposit(TokenNumber::new(number))
                .await
                .expect("delete succeeds");
        })
    });
    for joined in join_all(tasks).await {
        joined.expect("task joins");
    }

    let records = service.list().await.expect("list");
    let held = records.iter().filter(|r| r.is_in_use).count();
    assert_eq!(service.stats().await.expect("stats").in_use, held);
}
