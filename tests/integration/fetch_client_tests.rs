//! Fetch client integration tests
//!
//! Round trips through the client against the live stub and a mock server.

#[cfg(test)]
mod tests {
    use crate::common::{relaxed_config, start_stub};
    use fetch_fanout::{FailureKind, FetchClient, Record};
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_live_stub_round_trip() {
        let stub = start_stub().await;
        let client = FetchClient::new(relaxed_config(stub.base_url())).unwrap();

        let records = client.fetch(&["1", "2"]).await.unwrap();
        assert_eq!(records, vec![Record::new("1")]);

        stub.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_serialized_records_decode_to_same_value() {
        let expected = vec![Record::new("1")];
        let body = serde_json::to_string(&expected).unwrap();
        assert_eq!(body, r#"[{"id":"1"}]"#);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo"))
            .and(query_param("input", "1"))
            .and(header("User-Agent", "Foo"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = FetchClient::new(relaxed_config(server.uri())).unwrap();
        assert_eq!(client.fetch(&["1"]).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_stopped_stub_is_transport_error() {
        let stub = start_stub().await;
        let base_url = stub.base_url();
        stub.stop().await.unwrap();

        let client = FetchClient::new(relaxed_config(base_url)).unwrap();
        let err = client.fetch(&["1"]).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::TransportError);
    }

    #[tokio::test]
    async fn test_custom_user_agent_is_sent() {
        let server = MockServer::start().await;
        Mock::given(path("/foo"))
            .and(header("User-Agent", "Bar/2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"[{"id":"1"}]"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut config = relaxed_config(server.uri());
        config.user_agent = "Bar/2".to_string();

        let client = FetchClient::new(config).unwrap();
        assert!(client.fetch(&["1"]).await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_retries_stay_within_request_budget() {
        let client = FetchClient::new(
            relaxed_config("http://10.255.255.1:9090")
                .with_connect_timeout(Duration::from_millis(50))
                .with_request_timeout(Duration::from_millis(120))
                .with_connect_attempts(10),
        )
        .unwrap();

        let started = std::time::Instant::now();
        let err = client.fetch(&["1"]).await.unwrap_err();

        assert!(started.elapsed() < Duration::from_millis(1_000));
        assert!(
            matches!(
                err.kind(),
                FailureKind::RequestTimeout | FailureKind::TransportError
            ),
            "unexpected error: {}",
            err
        );
    }
}
