//! # Peak Name Resolution
//!
//! Peak names reported by the data system can be rewritten before they reach
//! the output document, e.g. to translate component names into another
//! language. Resolution is a chain of [`PeakNameResolver`] strategies:
//!
//! - [`Passthrough`]: identity
//! - [`WikidataLabelResolver`]: looks the name up on the Wikidata SPARQL
//!   endpoint and returns its label in the configured language
//! - [`MemoryCacheResolver`]: memoises any other resolver, case-insensitively
//!
//! [`factory::create`] composes the chain from a [`PeakNameConfig`]. Resolvers
//! never fail: every error degrades to returning the input unchanged.
//!
//! ## Example
//!
//! ```rust
//! use chromasm::naming::{factory, PeakNameConfig, PeakNameResolver};
//!
//! let resolver = factory::create(Some(&PeakNameConfig::default()));
//! assert_eq!(resolver.describe(), "passthrough");
//! assert_eq!(resolver.resolve("Toluene"), "Toluene");
//! ```

mod cache;
mod config;
mod error;
pub mod factory;
mod passthrough;
mod wikidata;

#[cfg(test)]
mod tests;

pub use cache::MemoryCacheResolver;
pub use config::{PeakNameConfig, DEFAULT_CONFIG_FILE};
pub use error::NamingError;
pub use passthrough::Passthrough;
pub use wikidata::{
    LookupTransport, ReqwestTransport, TransportResponse, WikidataLabelResolver,
    WIKIDATA_SPARQL_ENDPOINT,
};

/// Strategy mapping a reported peak name to its display name.
///
/// Implementations must not fail: on any error the input is returned
/// unchanged.
pub trait PeakNameResolver: Send + Sync {
    /// Map `name` to the name written to the output document
    fn resolve(&self, name: &str) -> String;

    /// Short description of the strategy chain, e.g. `"memory-cache(wikidata(fr))"`
    fn describe(&self) -> String;
}

impl<T: PeakNameResolver + ?Sized> PeakNameResolver for Box<T> {
    fn resolve(&self, name: &str) -> String {
        (**self).resolve(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
