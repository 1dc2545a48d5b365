use std::collections::HashMap;
use std::path::PathBuf;

use kudos_server::config::ServerConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.bind.to_string(), "0.0.0.0:8000");
    assert_eq!(config.media_dir, PathBuf::from("media"));
    assert_eq!(config.sender_config, PathBuf::from("sender.json"));
    assert_eq!(config.background_image, PathBuf::from("background.png"));
    assert_eq!(config.weasyprint, PathBuf::from("weasyprint"));
    assert!(config.public_url.is_none());
    assert!(config.debug_html.is_none());
}

#[test]
fn reads_overrides() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("KUDOS_BIND", "127.0.0.1:9090"),
        ("KUDOS_MEDIA_DIR", "/srv/kudos/media"),
        ("KUDOS_PUBLIC_URL", "https://letters.example.org/"),
        ("KUDOS_DEBUG_HTML", "debug.html"),
    ]))
    .unwrap();

    assert_eq!(config.bind.port(), 9090);
    assert_eq!(config.media_dir, PathBuf::from("/srv/kudos/media"));
    assert_eq!(config.public_url.as_deref(), Some("https://letters.example.org/"));

    let options = config.render_options();
    assert_eq!(options.debug_html, Some(PathBuf::from("debug.html")));
}

#[test]
fn empty_values_count_as_unset() {
    let config = ServerConfig::from_lookup(lookup(&[("KUDOS_PUBLIC_URL", "  ")])).unwrap();
    assert!(config.public_url.is_none());
}

#[test]
fn invalid_bind_address_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("KUDOS_BIND", "not-an-address")])).unwrap_err();
    assert!(err.to_string().contains("KUDOS_BIND"));
}
