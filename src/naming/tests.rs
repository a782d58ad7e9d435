use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::Url;

use super::*;

/// Transport answering every request with the same canned response
#[derive(Debug, Default, Clone)]
struct FakeTransport {
    response: Option<TransportResponse>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl FakeTransport {
    fn answering(status: u16, body: &str) -> Self {
        Self {
            response: Some(TransportResponse {
                status,
                body: body.to_string(),
            }),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_query(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let url = requests.last().unwrap();
        url.query_pairs()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value.into_owned())
            .unwrap()
    }
}

impl LookupTransport for FakeTransport {
    fn get(&self, url: &Url) -> Result<TransportResponse, NamingError> {
        self.requests.lock().unwrap().push(url.clone());
        self.response
            .clone()
            .ok_or_else(|| {
                NamingError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))
            })
    }
}

/// Resolver tagging names and counting its calls
#[derive(Debug, Default)]
struct CountingResolver {
    calls: Arc<AtomicUsize>,
}

impl PeakNameResolver for CountingResolver {
    fn resolve(&self, name: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        format!("resolved:{}", name)
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

fn sparql_body(label: &str) -> String {
    format!(
        r#"{{
  "head": {{ "vars": ["label"] }},
  "results": {{
    "bindings": [
      {{ "label": {{ "xml:lang": "fr", "type": "literal", "value": "{}" }} }}
    ]
  }}
}}"#,
        label
    )
}

const EMPTY_RESULTS: &str = r#"{ "head": { "vars": ["label"] }, "results": { "bindings": [] } }"#;

#[test]
fn test_passthrough() {
    assert_eq!(Passthrough.resolve("Methane"), "Methane");
    assert_eq!(Passthrough.resolve(""), "");
    assert_eq!(Passthrough.describe(), "passthrough");
}

#[test]
fn test_wikidata_returns_label() {
    let transport = FakeTransport::answering(200, &sparql_body("méthane"));
    let resolver = WikidataLabelResolver::with_transport(transport.clone());

    assert_eq!(resolver.resolve("Methane"), "méthane");
    assert_eq!(transport.request_count(), 1);

    let query = transport.last_query();
    assert!(query.contains(r#"mwapi:search "Methane""#));
    assert!(query.contains(r#"FILTER (LANG(?label) = "fr")"#));
    assert!(query.ends_with("LIMIT 1"));
}

#[test]
fn test_wikidata_request_url() {
    let transport = FakeTransport::answering(200, EMPTY_RESULTS);
    let resolver = WikidataLabelResolver::with_transport(transport.clone());
    resolver.resolve("Ethane");

    let requests = transport.requests.lock().unwrap();
    let url = &requests[0];
    assert_eq!(url.host_str(), Some("query.wikidata.org"));
    assert_eq!(url.path(), "/sparql");
    assert!(url
        .query_pairs()
        .any(|(key, value)| key == "format" && value == "json"));
}

#[test]
fn test_wikidata_no_match_keeps_name() {
    let resolver =
        WikidataLabelResolver::with_transport(FakeTransport::answering(200, EMPTY_RESULTS));
    assert_eq!(resolver.resolve("Unobtainium"), "Unobtainium");
}

#[test]
fn test_wikidata_error_status_keeps_name() {
    let resolver = WikidataLabelResolver::with_transport(FakeTransport::answering(
        503,
        "Service Unavailable",
    ));
    assert_eq!(resolver.resolve("Propane"), "Propane");
    assert!(matches!(
        resolver.lookup("Propane"),
        Err(NamingError::Status(503))
    ));
}

#[test]
fn test_wikidata_transport_failure_keeps_name() {
    let resolver = WikidataLabelResolver::with_transport(FakeTransport::failing());
    assert_eq!(resolver.resolve("Butane"), "Butane");
}

#[test]
fn test_wikidata_malformed_body_keeps_name() {
    let resolver =
        WikidataLabelResolver::with_transport(FakeTransport::answering(200, "<html>oops</html>"));
    assert_eq!(resolver.resolve("Pentane"), "Pentane");
    assert!(matches!(
        resolver.lookup("Pentane"),
        Err(NamingError::JsonError(_))
    ));
}

#[test]
fn test_wikidata_empty_name_skips_lookup() {
    let transport = FakeTransport::answering(200, &sparql_body("x"));
    let resolver = WikidataLabelResolver::with_transport(transport.clone());

    assert_eq!(resolver.resolve(""), "");
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_wikidata_escapes_quotes() {
    let resolver =
        WikidataLabelResolver::with_transport(FakeTransport::answering(200, EMPTY_RESULTS));
    let query = resolver.query_for(r#"2,2'-"bipyridine"\"#);
    assert!(query.contains(r#"mwapi:search "2,2'-\"bipyridine\"\\""#));
}

#[test]
fn test_wikidata_language() {
    let transport = FakeTransport::answering(200, &sparql_body("Methan"));
    let resolver = WikidataLabelResolver::with_transport(transport.clone()).language("de");

    assert_eq!(resolver.describe(), "wikidata(de)");
    resolver.resolve("Methane");
    assert!(transport
        .last_query()
        .contains(r#"FILTER (LANG(?label) = "de")"#));
}

#[test]
fn test_memory_cache_is_case_insensitive() {
    let inner = CountingResolver::default();
    let calls = inner.calls.clone();
    let cached = MemoryCacheResolver::new(inner);

    assert_eq!(cached.resolve("Acetone"), "resolved:Acetone");
    // Same key: the first resolution is served
    assert_eq!(cached.resolve("ACETONE"), "resolved:Acetone");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    cached.resolve("Benzene");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cached.cached_names(), 2);
}

#[test]
fn test_memory_cache_does_not_store_empty_name() {
    let inner = CountingResolver::default();
    let calls = inner.calls.clone();
    let cached = MemoryCacheResolver::new(inner);

    cached.resolve("");
    cached.resolve("");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cached.cached_names(), 0);
}

#[test]
fn test_memory_cache_over_wikidata() {
    let transport = FakeTransport::answering(200, &sparql_body("acétone"));
    let cached = MemoryCacheResolver::new(WikidataLabelResolver::with_transport(transport.clone()));

    assert_eq!(cached.resolve("Acetone"), "acétone");
    assert_eq!(cached.resolve("acetone"), "acétone");
    assert_eq!(transport.request_count(), 1);
    assert_eq!(cached.describe(), "memory-cache(wikidata(fr))");
}

#[test]
fn test_memory_cache_caches_failures() {
    let transport = FakeTransport::failing();
    let cached = MemoryCacheResolver::new(WikidataLabelResolver::with_transport(transport.clone()));

    assert_eq!(cached.resolve("Hexane"), "Hexane");
    assert_eq!(cached.resolve("Hexane"), "Hexane");
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_factory_composition() {
    let disabled = PeakNameConfig::default();
    let disabled_cached = PeakNameConfig {
        use_memory_cache: true,
        ..PeakNameConfig::default()
    };
    let enabled = PeakNameConfig {
        enable_external_lookup: true,
        ..PeakNameConfig::default()
    };
    let enabled_cached = PeakNameConfig {
        enable_external_lookup: true,
        use_memory_cache: true,
        ..PeakNameConfig::default()
    };

    assert_eq!(factory::create(None).describe(), "passthrough");
    assert_eq!(factory::create(Some(&disabled)).describe(), "passthrough");
    assert_eq!(
        factory::create(Some(&disabled_cached)).describe(),
        "passthrough"
    );
    assert_eq!(factory::create(Some(&enabled)).describe(), "wikidata(fr)");
    assert_eq!(
        factory::create(Some(&enabled_cached)).describe(),
        "memory-cache(wikidata(fr))"
    );
}

#[test]
fn test_factory_with_transport() {
    let transport = FakeTransport::answering(200, &sparql_body("toluène"));
    let config = PeakNameConfig {
        enable_external_lookup: true,
        use_memory_cache: true,
        ..PeakNameConfig::default()
    };

    let resolver = factory::create_with_transport(&config, transport.clone());
    assert_eq!(resolver.resolve("Toluene"), "toluène");
    assert_eq!(resolver.resolve("TOLUENE"), "toluène");
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_config_parsing() {
    let config = PeakNameConfig::from_json(
        r#"{ "enableWikidata": true, "useMemoryCache": true, "language": "es" }"#,
    )
    .unwrap();
    assert!(config.enable_external_lookup);
    assert!(config.use_memory_cache);
    assert_eq!(config.language, "es");
    assert_eq!(config.lookup_timeout_secs, 120);

    let config = PeakNameConfig::from_json(r#"{ "enableExternalLookup": true }"#).unwrap();
    assert!(config.enable_external_lookup);
    assert!(!config.use_memory_cache);

    assert_eq!(PeakNameConfig::from_json("{}").unwrap(), PeakNameConfig::default());
    assert!(PeakNameConfig::from_json("{ not json").is_err());
}

#[test]
fn test_factory_from_file() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("absent.json");
    assert_eq!(factory::create_from_file(&missing).describe(), "passthrough");
    assert!(factory::load_config(&missing).unwrap().is_none());

    let invalid = dir.path().join("invalid.json");
    std::fs::write(&invalid, "{ enableWikidata: yes").unwrap();
    assert_eq!(factory::create_from_file(&invalid).describe(), "passthrough");
    assert!(factory::load_config(&invalid).is_err());

    let valid = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(
        &valid,
        r#"{ "enableWikidata": true, "useMemoryCache": true, "lookupTimeoutSecs": 5 }"#,
    )
    .unwrap();
    assert_eq!(
        factory::create_from_file(&valid).describe(),
        "memory-cache(wikidata(fr))"
    );
    assert_eq!(
        factory::load_config(&valid).unwrap().unwrap().lookup_timeout_secs,
        5
    );
}
