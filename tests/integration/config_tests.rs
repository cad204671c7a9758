//! Configuration integration tests

#[cfg(test)]
mod tests {
    use fetch_fanout::{Config, Preset};

    const EXAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/fanout.yaml.example");

    #[tokio::test]
    async fn test_example_config_matches_defaults() {
        let config = Config::from_file(EXAMPLE).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_example_file_overrides_preset() {
        let layered = Config::preset(Preset::Strict)
            .overlay_file(EXAMPLE)
            .await
            .unwrap();

        assert_eq!(layered.client().connect_timeout_ms, 500);
        assert_eq!(layered.client().request_timeout_ms, 2_000);
        assert_eq!(layered.batch().size, 100);
        assert!(layered.validate().is_ok());
    }

    #[tokio::test]
    async fn test_file_without_target_validates_once_flags_supply_one() {
        let mut config = Config::preset(Preset::Relaxed)
            .overlay_yaml("stub:\n  enabled: false\n")
            .unwrap();
        assert!(config.validate().is_err());

        config.client.base_url = Some("http://127.0.0.1:8080".to_string());
        assert!(config.validate().is_ok());
    }
}
