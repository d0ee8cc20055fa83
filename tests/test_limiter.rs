use std::time::Duration;

use curator::server::limiter::{MAX_REQUESTS_PER_WINDOW, RateLimiter};

#[tokio::test]
async fn admits_up_to_the_threshold_then_rejects() {
    let limiter = RateLimiter::default();

    for _ in 0..MAX_REQUESTS_PER_WINDOW {
        assert!(limiter.admit("10.0.0.1").await);
    }
    assert!(!limiter.admit("10.0.0.1").await);
}

#[tokio::test]
async fn clients_are_tracked_independently() {
    let limiter = RateLimiter::new(2, Duration::from_secs(1));

    assert!(limiter.admit("10.0.0.1").await);
    assert!(limiter.admit("10.0.0.1").await);
    assert!(!limiter.admit("10.0.0.1").await);

    // A different source IP has its own window
    assert!(limiter.admit("10.0.0.2").await);
}

#[tokio::test]
async fn rejection_does_not_consume_a_slot() {
    let limiter = RateLimiter::new(2, Duration::from_millis(200));

    assert!(limiter.admit("c").await);
    assert!(limiter.admit("c").await);
    for _ in 0..10 {
        assert!(!limiter.admit("c").await);
    }

    // Had the rejected attempts been recorded, the client would still be
    // blocked after the original two stamps age out.
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(limiter.admit("c").await);
}

#[tokio::test]
async fn window_slides_rather_than_resetting() {
    let limiter = RateLimiter::new(2, Duration::from_millis(300));

    assert!(limiter.admit("c").await);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(limiter.admit("c").await);
    assert!(!limiter.admit("c").await);

    // First stamp is now ~350ms old and out of the window, second is ~150ms
    // old and still inside it.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(limiter.admit("c").await);
    assert!(!limiter.admit("c").await);
}

#[tokio::test]
async fn rate_below_the_threshold_is_never_limited() {
    let limiter = RateLimiter::new(5, Duration::from_millis(200));

    // 50ms spacing keeps at most four stamps inside any 200ms window
    for _ in 0..15 {
        assert!(limiter.admit("c").await);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn retry_hint_is_one_window() {
    assert_eq!(RateLimiter::default().retry_after_secs(), 1);
    // Sub-second windows still hint at a whole second
    assert_eq!(
        RateLimiter::new(5, Duration::from_millis(100)).retry_after_secs(),
        1
    );
}
