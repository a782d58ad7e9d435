//! Peak name translation through the full conversion pipeline.
//!
//! A scripted transport stands in for the SPARQL endpoint so these tests
//! never touch the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chromasm::converter::ChromatographyConverter;
use chromasm::export::InjectionExport;
use chromasm::naming::{
    factory, LookupTransport, NamingError, PeakNameConfig, TransportResponse,
};
use reqwest::Url;

/// Answers every query with the French label of the searched compound
#[derive(Clone, Default)]
struct FrenchLabels {
    calls: Arc<AtomicUsize>,
}

impl LookupTransport for FrenchLabels {
    fn get(&self, url: &Url) -> Result<TransportResponse, NamingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let query = url
            .query_pairs()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value.to_lowercase())
            .unwrap_or_default();

        let label = if query.contains("\"benzene\"") {
            Some("benzène")
        } else if query.contains("\"toluene\"") {
            Some("toluène")
        } else {
            None
        };

        let bindings = match label {
            Some(label) => format!(r#"[{{ "label": {{ "type": "literal", "value": "{}" }} }}]"#, label),
            None => "[]".to_string(),
        };
        Ok(TransportResponse {
            status: 200,
            body: format!(r#"{{ "results": {{ "bindings": {} }} }}"#, bindings),
        })
    }
}

const EXPORT: &str = r#"{
    "name": "Solvents",
    "signals": [{
        "name": "FID",
        "timeUnit": "min",
        "signalUnit": "pA",
        "peakResults": [
            { "peak.name": "Benzene", "peak.retention_time": 2.0, "peak.start_time": 1.9,
              "peak.stop_time": 2.1, "peak.area": 10.0, "peak.height": 3.0 },
            { "peak.name": "Toluene", "peak.retention_time": 3.0, "peak.start_time": 2.9,
              "peak.stop_time": 3.1, "peak.area": 12.0, "peak.height": 4.0 },
            { "peak.name": "BENZENE", "peak.retention_time": 4.0, "peak.start_time": 3.9,
              "peak.stop_time": 4.1, "peak.area": 8.0, "peak.height": 2.0 },
            { "peak.name": "Unobtainium", "peak.retention_time": 5.0, "peak.start_time": 4.9,
              "peak.stop_time": 5.1, "peak.area": 1.0, "peak.height": 0.5 },
            { "peak.retention_time": 6.0, "peak.start_time": 5.9,
              "peak.stop_time": 6.1, "peak.area": 1.0, "peak.height": 0.5 }
        ]
    }]
}"#;

fn written_names(converter: &ChromatographyConverter) -> Vec<String> {
    let injection = InjectionExport::from_json(EXPORT).unwrap().into_injection();
    let document = converter.convert(&injection).unwrap();
    let measurement = document.measurements().next().unwrap();
    measurement.processed_data.documents[0]
        .peak_list
        .peak
        .iter()
        .map(|peak| peak.written_name.clone())
        .collect()
}

#[test]
fn test_names_translated_with_cache() {
    let transport = FrenchLabels::default();
    let config = PeakNameConfig::from_json(
        r#"{ "enableExternalLookup": true, "useMemoryCache": true }"#,
    )
    .unwrap();
    let resolver = factory::create_with_transport(&config, transport.clone());
    assert_eq!(resolver.describe(), "memory-cache(wikidata(fr))");

    let converter = ChromatographyConverter::with_name_resolver(resolver);
    let names = written_names(&converter);

    assert_eq!(
        names,
        vec!["benzène", "toluène", "benzène", "Unobtainium", "Peak 5"]
    );
    // Benzene and BENZENE share one cache entry
    assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_names_translated_without_cache() {
    let transport = FrenchLabels::default();
    let config = PeakNameConfig::from_json(r#"{ "enableWikidata": true }"#).unwrap();
    let converter = ChromatographyConverter::with_name_resolver(factory::create_with_transport(
        &config,
        transport.clone(),
    ));

    let names = written_names(&converter);
    assert_eq!(names[2], "benzène");
    assert_eq!(transport.calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_lookup_disabled_keeps_names() {
    let transport = FrenchLabels::default();
    let config = PeakNameConfig::from_json(
        r#"{ "enableExternalLookup": false, "useMemoryCache": true }"#,
    )
    .unwrap();
    let converter = ChromatographyConverter::with_name_resolver(factory::create_with_transport(
        &config,
        transport.clone(),
    ));

    let names = written_names(&converter);
    assert_eq!(
        names,
        vec!["Benzene", "Toluene", "BENZENE", "Unobtainium", "Peak 5"]
    );
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unreadable_config_falls_back_to_passthrough() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("peakname-config.json");
    std::fs::write(&path, "enableExternalLookup = true").unwrap();

    let converter = ChromatographyConverter::from_config_file(&path);
    assert_eq!(converter.name_resolver().describe(), "passthrough");
    assert_eq!(written_names(&converter)[0], "Benzene");
}
