#[cfg(test)]
mod tests {
    use super::super::utils::ClientUtils;
    use crate::config::ClientConfig;
    use std::time::Duration;

    // ==================== URL Path Tests ====================

    #[test]
    fn test_add_path_to_api_base() {
        assert_eq!(
            ClientUtils::add_path_to_api_base("http://localhost:9090", "/foo"),
            "http://localhost:9090/foo"
        );
        assert_eq!(
            ClientUtils::add_path_to_api_base("http://localhost:9090/", "foo"),
            "http://localhost:9090/foo"
        );
        assert_eq!(
            ClientUtils::add_path_to_api_base("http://localhost:9090/api//", "//foo"),
            "http://localhost:9090/api/foo"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = ClientUtils::endpoint("http://127.0.0.1:9090/svc", "/foo").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9090/svc/foo");
    }

    // ==================== URL Validation Tests ====================

    #[test]
    fn test_validate_url() {
        assert!(ClientUtils::validate_url("http://localhost:9090").is_ok());
        assert!(ClientUtils::validate_url("https://example.com/foo").is_ok());
        assert!(ClientUtils::validate_url("ftp://example.com").is_err());
        assert!(ClientUtils::validate_url("localhost:9090").is_err());
        assert!(ClientUtils::validate_url("").is_err());
    }

    #[test]
    fn test_validate_url_error_mentions_scheme() {
        let err = ClientUtils::validate_url("ws://localhost:9090").unwrap_err();
        assert!(err.to_string().contains("ws"));
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_join_ids() {
        assert_eq!(ClientUtils::join_ids(&["1"]), "1");
        assert_eq!(ClientUtils::join_ids(&["1", "2", "3"]), "1,2,3");
        assert_eq!(
            ClientUtils::join_ids(&["a".to_string(), "b".to_string()]),
            "a,b"
        );
        assert_eq!(ClientUtils::join_ids::<&str>(&[]), "");
    }

    // ==================== Client Construction Tests ====================

    #[test]
    fn test_create_http_client() {
        let config = ClientConfig::default()
            .with_connect_timeout(Duration::from_millis(1))
            .with_request_timeout(Duration::from_millis(1));
        assert!(ClientUtils::create_http_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_probe_unreachable_port() {
        // Port 1 on loopback is never listening in a test environment.
        assert!(!ClientUtils::probe("http://127.0.0.1:1/", Duration::from_millis(200)).await);
    }
}
