use super::*;

#[test]
fn defaults_match_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "http://localhost:8000");
    assert_eq!(config.storage_key, "authToken");
    assert_eq!(config.provider_prompt, "select_account");
}

#[test]
fn overrides_trim_trailing_slash() {
    let config = ClientConfig::from_overrides(Some("https://api.example.test/"), None, None);
    assert_eq!(config.api_base, "https://api.example.test");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn blank_overrides_fall_back_to_defaults() {
    let config = ClientConfig::from_overrides(Some("  "), Some(""), Some(" "));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn endpoint_joins_base_and_path() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint("/auth/user/"), "http://localhost:8000/auth/user/");
}
