use crate::config::SkillConfig;
use crate::http_handler::http_client::HTTPClient;
use crate::storage::{ElementStore, FeatureStore, JsonFileStore};
use std::sync::Arc;

/// Shared handles to everything a request or job needs: the configuration,
/// both stores and the HTTP client of the element provider.
#[derive(Clone)]
pub struct Keychain {
    /// Immutable process-wide configuration.
    config: Arc<SkillConfig>,
    /// Store of two-line element records.
    elements: Arc<dyn ElementStore>,
    /// Store of geographic features.
    features: Arc<dyn FeatureStore>,
    /// HTTP client pointed at the element provider.
    client: Arc<HTTPClient>,
}

impl Keychain {
    /// Creates a `Keychain` backed by the JSON table files under the
    /// configured data directory.
    ///
    /// # Errors
    /// Returns the `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: SkillConfig) -> Result<Self, reqwest::Error> {
        let store = Arc::new(JsonFileStore::new(
            config.data_dir(),
            config.tle_table(),
            config.lon_lat_table(),
        ));
        Self::with_stores(config, Arc::clone(&store) as Arc<dyn ElementStore>, store)
    }

    /// Creates a `Keychain` around existing store implementations.
    ///
    /// # Errors
    /// Returns the `reqwest::Error` if the HTTP client cannot be built.
    pub fn with_stores(
        config: SkillConfig,
        elements: Arc<dyn ElementStore>,
        features: Arc<dyn FeatureStore>,
    ) -> Result<Self, reqwest::Error> {
        let client = Arc::new(HTTPClient::new(config.tle_provider_url())?);
        Ok(Self { config: Arc::new(config), elements, features, client })
    }

    /// Provides the process-wide configuration.
    pub fn config(&self) -> &SkillConfig { &self.config }

    /// Provides the element store.
    pub fn elements(&self) -> &dyn ElementStore { self.elements.as_ref() }

    /// Provides the geographic feature store.
    pub fn features(&self) -> &dyn FeatureStore { self.features.as_ref() }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }
}
