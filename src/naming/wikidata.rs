use std::time::Duration;

use log::{error, info, warn};
use reqwest::Url;
use serde::Deserialize;

use super::{NamingError, PeakNameResolver};

/// Public Wikidata SPARQL endpoint
pub const WIKIDATA_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";

const USER_AGENT: &str = concat!("chromasm/", env!("CARGO_PKG_VERSION"), " (peak name lookup)");

/// Status and body of a lookup response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP GET used by [`WikidataLabelResolver`]
pub trait LookupTransport: Send + Sync {
    /// Fetch `url`
    fn get(&self, url: &Url) -> Result<TransportResponse, NamingError>;
}

/// [`LookupTransport`] over a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, NamingError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl LookupTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<TransportResponse, NamingError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/sparql-results+json")
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(TransportResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<LabelBinding>,
}

#[derive(Debug, Deserialize)]
struct LabelBinding {
    label: Option<BindingValue>,
}

#[derive(Debug, Deserialize)]
struct BindingValue {
    value: String,
}

/// Resolver translating names through a Wikidata entity search.
///
/// The name is searched among English labels and aliases, and the label of the
/// first matching entity in the target language is returned. One blocking
/// request is made per call; wrap it in a
/// [`MemoryCacheResolver`](super::MemoryCacheResolver) to avoid repeats.
#[derive(Debug)]
pub struct WikidataLabelResolver<T = ReqwestTransport> {
    transport: T,
    endpoint: String,
    language: String,
}

impl WikidataLabelResolver<ReqwestTransport> {
    /// Create a resolver using `reqwest` with the given timeout
    pub fn new(timeout: Duration) -> Result<Self, NamingError> {
        Ok(Self::with_transport(ReqwestTransport::new(timeout)?))
    }
}

impl<T: LookupTransport> WikidataLabelResolver<T> {
    /// Create a resolver on a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            endpoint: WIKIDATA_SPARQL_ENDPOINT.to_string(),
            language: "fr".to_string(),
        }
    }

    /// Set the language of the returned labels (ISO 639-1 code)
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Override the SPARQL endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// SPARQL query returning at most one label for `name`
    pub fn query_for(&self, name: &str) -> String {
        let search = name.replace('\\', "\\\\").replace('"', "\\\"");
        let language = self.language.replace('"', "");
        format!(
            r#"SELECT ?label WHERE {{
  SERVICE wikibase:mwapi {{
    bd:serviceParam wikibase:endpoint "www.wikidata.org";
                    wikibase:api "EntitySearch";
                    mwapi:search "{search}";
                    mwapi:language "en".
    ?item wikibase:apiOutputItem mwapi:item.
  }}
  ?item rdfs:label ?label .
  FILTER (LANG(?label) = "{language}")
}} LIMIT 1"#
        )
    }

    /// Look `name` up. `Ok(None)` when nothing matches.
    pub fn lookup(&self, name: &str) -> Result<Option<String>, NamingError> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[("query", self.query_for(name).as_str()), ("format", "json")],
        )
        .map_err(|e| NamingError::InvalidUrl(e.to_string()))?;

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(NamingError::Status(response.status));
        }

        let parsed: SparqlResponse = serde_json::from_str(&response.body)?;
        Ok(parsed
            .results
            .bindings
            .into_iter()
            .next()
            .and_then(|binding| binding.label)
            .map(|label| label.value)
            .filter(|label| !label.is_empty()))
    }
}

impl<T: LookupTransport> PeakNameResolver for WikidataLabelResolver<T> {
    fn resolve(&self, name: &str) -> String {
        if name.is_empty() {
            return name.to_string();
        }

        match self.lookup(name) {
            Ok(Some(label)) => {
                info!("Found '{}' label for {}: {}", self.language, name, label);
                label
            }
            Ok(None) => {
                warn!("No '{}' label found for {}", self.language, name);
                name.to_string()
            }
            Err(NamingError::Status(status)) => {
                warn!("Wikidata returned status code {} for {}", status, name);
                name.to_string()
            }
            Err(e) => {
                error!("Error querying Wikidata for {}: {}", name, e);
                name.to_string()
            }
        }
    }

    fn describe(&self) -> String {
        format!("wikidata({})", self.language)
    }
}
