use gymdesk_client::api_client::ApiError;
use gymdesk_client::cache::{QueryCache, QueryKey};
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn a_read_is_retried_once_after_a_transport_failure() {
    let cache = QueryCache::new();
    let calls = AtomicUsize::new(0);

    let value = cache
        .fetch(QueryKey::Members, || async {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                // An unusable URL fails before any bytes hit the wire.
                let err = reqwest::Client::new()
                    .get("http://")
                    .send()
                    .await
                    .unwrap_err();
                Err(ApiError::from(err))
            } else {
                Ok(vec!["m-1".to_string()])
            }
        })
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(*value, vec!["m-1".to_string()]);
}

#[tokio::test]
async fn a_non_transport_failure_is_not_retried() {
    let cache = QueryCache::new();
    let calls = AtomicUsize::new(0);

    let result = cache
        .fetch::<Vec<String>, _, _>(QueryKey::Members, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Validation("bad filter".into()))
        })
        .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn member_invalidation_spares_unrelated_keys() {
    let cache = QueryCache::new();
    cache
        .fetch(QueryKey::MembershipPlans, || async { Ok::<_, ApiError>(1u32) })
        .await
        .unwrap();
    cache
        .fetch(QueryKey::MemberByDni("7".into()), || async {
            Ok::<_, ApiError>(2u32)
        })
        .await
        .unwrap();

    cache.invalidate_member_queries();

    let calls = AtomicUsize::new(0);
    let plans = cache
        .fetch(QueryKey::MembershipPlans, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ApiError>(9u32)
        })
        .await
        .unwrap();
    assert_eq!(*plans, 1, "plans were not part of the member invalidation");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let by_dni = cache
        .fetch(QueryKey::MemberByDni("7".into()), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ApiError>(9u32)
        })
        .await
        .unwrap();
    assert_eq!(*by_dni, 9, "the by-dni lookup was re-fetched");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
