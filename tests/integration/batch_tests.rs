//! Batch integration tests
//!
//! Full batches against the live stub and against delayed or broken
//! targets, checking the one-outcome-per-id and isolation guarantees.

#[cfg(test)]
mod tests {
    use crate::common::{RoutingFetcher, ids, relaxed_config, saturated_listener, start_stub};
    use fetch_fanout::{
        BatchDispatcher, BatchTracker, ClientConfig, FailureKind, FetchClient, Outcome, Record,
    };
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use wiremock::matchers::path;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ==================== Live Stub ====================

    #[tokio::test]
    async fn test_hundred_ids_against_live_stub() {
        let stub = start_stub().await;
        let client = FetchClient::new(relaxed_config(stub.base_url())).unwrap();
        let tracker = BatchTracker::new();

        let report = BatchDispatcher::from_client(client)
            .dispatch_tracked(ids(100), &tracker)
            .await;

        assert_eq!(report.len(), 100);
        assert!(report.all_succeeded(), "summary: {:?}", report.summary);
        for (index, item) in report.items.iter().enumerate() {
            assert_eq!(item.id, (index + 1).to_string());
            assert_eq!(item.outcome, Outcome::Success(vec![Record::new("1")]));
        }
        assert!(tracker.is_complete());

        stub.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_element_does_not_block_others() {
        let stub = start_stub().await;
        let fetcher = RoutingFetcher {
            primary: FetchClient::new(relaxed_config(stub.base_url())).unwrap(),
            detour: FetchClient::new(relaxed_config("http://127.0.0.1:1")).unwrap(),
            detoured: HashSet::from(["13".to_string()]),
        };

        let report = BatchDispatcher::new(Arc::new(fetcher))
            .dispatch(ids(30))
            .await;

        assert_eq!(report.len(), 30);
        assert_eq!(
            report.outcome_for("13"),
            Some(&Outcome::Failure(FailureKind::TransportError))
        );
        assert_eq!(report.summary.succeeded, 29);

        stub.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_strict_timeouts_still_yield_full_batch() {
        let stub = start_stub().await;
        let client = FetchClient::new(
            ClientConfig::for_base_url(stub.base_url())
                .with_connect_timeout(Duration::from_millis(1))
                .with_request_timeout(Duration::from_millis(1)),
        )
        .unwrap();

        let report = BatchDispatcher::from_client(client).dispatch(ids(100)).await;

        let summary = &report.summary;
        assert_eq!(report.len(), 100);
        assert_eq!(
            summary.succeeded
                + summary.connect_timeouts
                + summary.request_timeouts
                + summary.transport_errors,
            100
        );

        stub.stop().await.unwrap();
    }

    // ==================== Unresponsive Targets ====================

    #[tokio::test]
    async fn test_connect_timeout_against_unroutable_host() {
        let client = FetchClient::new(
            ClientConfig::for_base_url("http://10.255.255.1:9090")
                .with_connect_timeout(Duration::from_millis(1))
                .with_request_timeout(Duration::from_millis(1_000)),
        )
        .unwrap();

        let report = BatchDispatcher::from_client(client).dispatch(ids(10)).await;

        assert_eq!(report.len(), 10);
        for outcome in report.outcomes() {
            assert!(
                matches!(
                    outcome,
                    Outcome::Failure(FailureKind::ConnectTimeout | FailureKind::TransportError)
                ),
                "unexpected outcome: {}",
                outcome
            );
        }
    }

    #[tokio::test]
    async fn test_every_element_times_out_on_unanswered_connects() {
        let (listener, _held) = saturated_listener().await;
        let client = FetchClient::new(
            ClientConfig::for_base_url(format!("http://{}", listener.local_addr().unwrap()))
                .with_connect_timeout(Duration::from_millis(50))
                .with_request_timeout(Duration::from_millis(1_000)),
        )
        .unwrap();

        let report = BatchDispatcher::from_client(client).dispatch(ids(5)).await;

        assert_eq!(report.len(), 5);
        assert_eq!(report.summary.connect_timeouts, 5);
        for outcome in report.outcomes() {
            assert_eq!(outcome, &Outcome::Failure(FailureKind::ConnectTimeout));
        }
    }

    #[tokio::test]
    async fn test_placeholder_for_every_failure() {
        let client = FetchClient::new(relaxed_config("http://127.0.0.1:1")).unwrap();
        let report = BatchDispatcher::from_client(client).dispatch(ids(4)).await;

        for outcome in report.outcomes() {
            let records = outcome.records_or_placeholder();
            assert_eq!(records.len(), 1);
            assert!(records[0].is_placeholder());
        }
    }

    // ==================== Concurrency ====================

    #[tokio::test]
    async fn test_wall_clock_tracks_slowest_request() {
        let server = MockServer::start().await;
        Mock::given(path("/foo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"[{"id":"1"}]"#, "application/json")
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let client = FetchClient::new(relaxed_config(server.uri())).unwrap();

        let started = Instant::now();
        let report = BatchDispatcher::from_client(client).dispatch(ids(20)).await;
        let elapsed = started.elapsed();

        assert!(report.all_succeeded(), "summary: {:?}", report.summary);
        // Serialized, 20 requests would need at least 4 seconds.
        assert!(
            elapsed < Duration::from_millis(1_500),
            "batch took {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_lease_limit_runs_in_waves() {
        let server = MockServer::start().await;
        Mock::given(path("/foo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"[{"id":"1"}]"#, "application/json")
                    .set_delay(Duration::from_millis(100)),
            )
            .mount(&server)
            .await;

        let client = FetchClient::new(relaxed_config(server.uri()).with_max_connections(2)).unwrap();

        let started = Instant::now();
        let report = BatchDispatcher::from_client(client).dispatch(ids(6)).await;
        let elapsed = started.elapsed();

        assert!(report.all_succeeded(), "summary: {:?}", report.summary);
        assert!(
            elapsed >= Duration::from_millis(280),
            "six requests over two leases finished in {:?}",
            elapsed
        );
    }
}
