//! Composition of the peak name strategy chain.
//!
//! The core strategy is chosen first (pass-through, or the external lookup when
//! enabled), then the decorator layers selected by the configuration are
//! applied in order. Layers only apply on top of the external lookup.

use std::path::Path;

use log::{debug, error, warn};

use super::{
    LookupTransport, MemoryCacheResolver, NamingError, Passthrough, PeakNameConfig,
    PeakNameResolver, ReqwestTransport, WikidataLabelResolver, DEFAULT_CONFIG_FILE,
};

type Layer = fn(Box<dyn PeakNameResolver>) -> Box<dyn PeakNameResolver>;

fn memory_cache(inner: Box<dyn PeakNameResolver>) -> Box<dyn PeakNameResolver> {
    Box::new(MemoryCacheResolver::new(inner))
}

/// Decorators to wrap around the core strategy, innermost first
fn layers(config: &PeakNameConfig) -> Vec<Layer> {
    let mut layers: Vec<Layer> = Vec::new();
    if config.use_memory_cache {
        layers.push(memory_cache);
    }
    layers
}

fn compose(core: Box<dyn PeakNameResolver>, config: &PeakNameConfig) -> Box<dyn PeakNameResolver> {
    let resolver = layers(config)
        .into_iter()
        .fold(core, |inner, layer| layer(inner));
    debug!("Peak name strategy: {}", resolver.describe());
    resolver
}

/// Build the strategy chain for `config`.
///
/// `None` or a disabled external lookup always yields [`Passthrough`], whatever
/// the cache setting.
pub fn create(config: Option<&PeakNameConfig>) -> Box<dyn PeakNameResolver> {
    let Some(config) = config.filter(|c| c.enable_external_lookup) else {
        return Box::new(Passthrough);
    };

    match ReqwestTransport::new(config.lookup_timeout()) {
        Ok(transport) => create_with_transport(config, transport),
        Err(e) => {
            error!("Cannot create HTTP client for peak name lookup: {}", e);
            Box::new(Passthrough)
        }
    }
}

/// Build the strategy chain for `config` on a custom lookup transport
pub fn create_with_transport<T>(config: &PeakNameConfig, transport: T) -> Box<dyn PeakNameResolver>
where
    T: LookupTransport + 'static,
{
    if !config.enable_external_lookup {
        return Box::new(Passthrough);
    }
    let core = WikidataLabelResolver::with_transport(transport).language(config.language.clone());
    compose(Box::new(core), config)
}

/// Load the configuration file at `path` and build its strategy chain.
///
/// A missing or invalid file yields [`Passthrough`].
pub fn create_from_file<P: AsRef<Path>>(path: P) -> Box<dyn PeakNameResolver> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No peak name configuration at {}", path.display());
        return Box::new(Passthrough);
    }

    match PeakNameConfig::from_file(path) {
        Ok(config) => create(Some(&config)),
        Err(e) => {
            warn!(
                "Ignoring invalid peak name configuration {}: {}",
                path.display(),
                e
            );
            Box::new(Passthrough)
        }
    }
}

/// [`create_from_file`] on [`DEFAULT_CONFIG_FILE`] in the working directory
pub fn create_from_default_file() -> Box<dyn PeakNameResolver> {
    create_from_file(DEFAULT_CONFIG_FILE)
}

/// Load a configuration file, distinguishing "missing" from "invalid".
///
/// Used by callers that want to report configuration problems themselves.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Option<PeakNameConfig>, NamingError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    PeakNameConfig::from_file(path).map(Some)
}
