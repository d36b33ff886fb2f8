//! The seam between a source plugin and the connection pool that serves it.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;

use thiserror::Error;

use ndc_drill_configuration::ConfigurationError;

/// Driver-level connection properties passed through to the pool.
pub type ExtraProperties = BTreeMap<String, String>;

/// How pooled connections handle transactions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CommitMode {
    /// Every statement commits on its own.
    AutoCommit,
    /// The caller commits explicitly.
    ForceManualCommit,
    /// Leave whatever the driver does by default.
    #[default]
    DriverSpecified,
}

/// A pooled data source. Dropping it releases the pool; `close` does the same
/// but reports failures.
pub trait CloseableDataSource: Send + Sync {
    fn close(self: Box<Self>) -> Result<(), ConnectionError>;
}

/// Creates pooled data sources for a driver.
///
/// Retrying, timeouts and cancellation are the provider's business.
pub trait ConnectionPoolProvider: Send + Sync {
    fn new_pooled_data_source(
        &self,
        driver: &str,
        connection_string: &str,
        username: Option<&str>,
        password: Option<&str>,
        extra_properties: Option<&ExtraProperties>,
        commit_mode: CommitMode,
    ) -> Result<Box<dyn CloseableDataSource>, ConnectionError>;
}

/// A failure reported by the pool or the driver underneath it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConnectionError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ConnectionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// A data source could not be created.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Opens a data source on demand, using the pool provider handed in by the host.
pub type DataSourceFactory = Arc<
    dyn Fn(&dyn ConnectionPoolProvider) -> Result<Box<dyn CloseableDataSource>, DataSourceError>
        + Send
        + Sync,
>;
