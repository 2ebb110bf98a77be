//! Integration tests for session resolution under concurrency.
//!
//! Drives `SessionResolver` through the in-memory directory with artificial
//! latency, so fetches stay in flight long enough for concurrent callers to
//! pile up. The fetch counter is the ground truth for every coalescing
//! assertion.

use std::sync::Arc;
use std::time::Duration;

use decision_steward::adapters::directory::{FetchOutcome, InMemoryDirectory};
use decision_steward::application::{SessionError, SessionResolver};
use decision_steward::domain::foundation::{OrganizationId, UserId};
use decision_steward::domain::identity::Profile;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn profile(actor: &str) -> Profile {
    Profile::new(
        UserId::new(actor).unwrap(),
        OrganizationId::new(),
        actor.to_string(),
        format!("{actor}@example.com"),
        None,
    )
}

/// Latency long enough that all spawned callers arrive while the first
/// fetch is still sleeping inside the directory.
const FETCH_LATENCY: Duration = Duration::from_millis(25);

#[tokio::test]
async fn concurrent_callers_share_a_single_fetch() {
    init_tracing();
    let directory = InMemoryDirectory::new()
        .with_profile(profile("user-1"))
        .with_delay(FETCH_LATENCY);
    let counter = directory.fetch_counter();
    let resolver = Arc::new(SessionResolver::new(Arc::new(directory)));

    let mut handles = Vec::new();
    for _ in 0..5 {
        let resolver = Arc::clone(&resolver);
        handles.push(tokio::spawn(
            async move { resolver.resolve("user-1").await },
        ));
    }

    for handle in handles {
        let resolved = handle.await.unwrap().unwrap();
        assert_eq!(resolved.user_id.as_str(), "user-1");
    }
    assert_eq!(counter.count("user-1"), 1);
}

#[tokio::test]
async fn concurrent_callers_share_a_single_failure() {
    init_tracing();
    let directory = InMemoryDirectory::new()
        .with_script(
            "user-1",
            vec![FetchOutcome::Timeout, FetchOutcome::Timeout],
        )
        .with_delay(FETCH_LATENCY);
    let counter = directory.fetch_counter();
    let resolver = Arc::new(SessionResolver::with_retry_policy(
        Arc::new(directory),
        1,
        Duration::ZERO,
    ));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let resolver = Arc::clone(&resolver);
        handles.push(tokio::spawn(
            async move { resolver.resolve("user-1").await },
        ));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Err(SessionError::NetworkError));
    }
    // One shared fetch: the initial attempt plus its single retry.
    assert_eq!(counter.count("user-1"), 2);
}

#[tokio::test]
async fn distinct_actors_fetch_independently() {
    init_tracing();
    let directory = InMemoryDirectory::new()
        .with_profile(profile("user-1"))
        .with_profile(profile("user-2"))
        .with_delay(FETCH_LATENCY);
    let counter = directory.fetch_counter();
    let resolver = Arc::new(SessionResolver::new(Arc::new(directory)));

    let a = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.resolve("user-1").await })
    };
    let b = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.resolve("user-2").await })
    };

    assert_eq!(a.await.unwrap().unwrap().user_id.as_str(), "user-1");
    assert_eq!(b.await.unwrap().unwrap().user_id.as_str(), "user-2");
    assert_eq!(counter.count("user-1"), 1);
    assert_eq!(counter.count("user-2"), 1);
}

#[tokio::test]
async fn resolve_after_completion_fetches_fresh() {
    init_tracing();
    let directory = InMemoryDirectory::new()
        .with_profile(profile("user-1"))
        .with_delay(FETCH_LATENCY);
    let counter = directory.fetch_counter();
    let resolver = Arc::new(SessionResolver::new(Arc::new(directory)));

    // A coalesced burst...
    let mut handles = Vec::new();
    for _ in 0..3 {
        let resolver = Arc::clone(&resolver);
        handles.push(tokio::spawn(
            async move { resolver.resolve("user-1").await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(counter.count("user-1"), 1);

    // ...then a fresh call after the marker was cleared.
    resolver.resolve("user-1").await.unwrap();
    assert_eq!(counter.count("user-1"), 2);
}

#[tokio::test]
async fn push_during_fetch_last_write_wins() {
    init_tracing();
    let mut fetched = profile("user-1");
    fetched.display_name = "Fetched".to_string();
    let directory = InMemoryDirectory::new()
        .with_profile(fetched)
        .with_delay(Duration::from_millis(50));
    let resolver = Arc::new(SessionResolver::new(Arc::new(directory)));
    let rx = resolver.subscribe("user-1");

    let in_flight = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.resolve("user-1").await })
    };
    // Let the fetch start, then land a push while it is still in flight.
    tokio::time::sleep(Duration::from_millis(10)).await;
    let mut pushed = profile("user-1");
    pushed.display_name = "Pushed".to_string();
    resolver.apply_push(pushed.clone());
    assert_eq!(rx.borrow().as_ref().unwrap().display_name, "Pushed");

    // The awaiting caller still gets the fetch outcome, and the fetch
    // completion overwrites the pushed state: last write wins.
    let resolved = in_flight.await.unwrap().unwrap();
    assert_eq!(resolved.display_name, "Fetched");
    assert_eq!(
        resolver.best_known("user-1").unwrap().display_name,
        "Fetched"
    );

    // A later push wins in turn.
    resolver.apply_push(pushed);
    assert_eq!(
        resolver.best_known("user-1").unwrap().display_name,
        "Pushed"
    );
}

#[tokio::test]
async fn transient_failure_recovers_within_one_call() {
    init_tracing();
    let directory = InMemoryDirectory::new().with_script(
        "user-1",
        vec![
            FetchOutcome::Unavailable("connection refused".to_string()),
            FetchOutcome::Success(profile("user-1")),
        ],
    );
    let counter = directory.fetch_counter();
    let resolver = SessionResolver::with_retry_policy(Arc::new(directory), 1, Duration::ZERO);

    let resolved = resolver.resolve("user-1").await.unwrap();
    assert_eq!(resolved.user_id.as_str(), "user-1");
    assert_eq!(counter.count("user-1"), 2);
}

#[tokio::test]
async fn missing_profile_ends_the_session_without_retry() {
    init_tracing();
    let directory = InMemoryDirectory::new();
    let counter = directory.fetch_counter();
    let resolver = SessionResolver::new(Arc::new(directory));

    // Pretend a stale push exists, then discover the row is gone.
    resolver.apply_push(profile("ghost"));
    assert_eq!(resolver.resolve("ghost").await, Err(SessionError::NotFound));
    assert_eq!(counter.count("ghost"), 1);
    assert!(resolver.best_known("ghost").is_none());
}
