//! The runtime configuration of a JDBC-style source plugin.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use query_engine_dialect::ArpDialect;

use crate::data_sources::{
    CloseableDataSource, ConnectionPoolProvider, DataSourceError, DataSourceFactory,
};

/// Rows fetched per round trip when the source does not say otherwise.
pub const DEFAULT_FETCH_SIZE: u32 = 200;

/// Everything the host needs to serve a source: how to talk to it and how to
/// connect to it.
///
/// The config does not hold a connection; `new_data_source` opens one when
/// asked. Equality ignores the data source factory.
#[derive(Clone)]
pub struct JdbcPluginConfig {
    dialect: &'static ArpDialect,
    fetch_size: u32,
    hidden_schemas: BTreeSet<String>,
    allow_external_query: bool,
    datasource_factory: DataSourceFactory,
}

impl JdbcPluginConfig {
    pub fn builder() -> JdbcPluginConfigBuilder {
        JdbcPluginConfigBuilder::default()
    }

    pub fn dialect(&self) -> &'static ArpDialect {
        self.dialect
    }

    pub fn fetch_size(&self) -> u32 {
        self.fetch_size
    }

    pub fn hidden_schemas(&self) -> &BTreeSet<String> {
        &self.hidden_schemas
    }

    /// Hidden schemas are left out of catalog listings but can still be queried
    /// by name. Matching ignores ASCII case.
    pub fn is_hidden_schema(&self, schema: &str) -> bool {
        self.hidden_schemas
            .iter()
            .any(|hidden| hidden.eq_ignore_ascii_case(schema))
    }

    pub fn allow_external_query(&self) -> bool {
        self.allow_external_query
    }

    /// Open a data source through the given pool provider.
    pub fn new_data_source(
        &self,
        pools: &dyn ConnectionPoolProvider,
    ) -> Result<Box<dyn CloseableDataSource>, DataSourceError> {
        (self.datasource_factory)(pools)
    }
}

impl PartialEq for JdbcPluginConfig {
    fn eq(&self, other: &Self) -> bool {
        (std::ptr::eq(self.dialect, other.dialect) || self.dialect == other.dialect)
            && self.fetch_size == other.fetch_size
            && self.hidden_schemas == other.hidden_schemas
            && self.allow_external_query == other.allow_external_query
    }
}

impl fmt::Debug for JdbcPluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JdbcPluginConfig")
            .field("dialect", &self.dialect.name())
            .field("fetch_size", &self.fetch_size)
            .field("hidden_schemas", &self.hidden_schemas)
            .field("allow_external_query", &self.allow_external_query)
            .finish_non_exhaustive()
    }
}

/// Assembles a `JdbcPluginConfig`. The dialect and the data source factory
/// are required; everything else has a default.
#[derive(Clone)]
pub struct JdbcPluginConfigBuilder {
    dialect: Option<&'static ArpDialect>,
    fetch_size: u32,
    hidden_schemas: BTreeSet<String>,
    allow_external_query: bool,
    datasource_factory: Option<DataSourceFactory>,
}

impl Default for JdbcPluginConfigBuilder {
    fn default() -> Self {
        Self {
            dialect: None,
            fetch_size: DEFAULT_FETCH_SIZE,
            hidden_schemas: BTreeSet::new(),
            allow_external_query: false,
            datasource_factory: None,
        }
    }
}

impl JdbcPluginConfigBuilder {
    #[must_use]
    pub fn with_dialect(mut self, dialect: &'static ArpDialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    #[must_use]
    pub fn with_fetch_size(mut self, fetch_size: u32) -> Self {
        self.fetch_size = fetch_size;
        self
    }

    #[must_use]
    pub fn with_datasource_factory(mut self, factory: DataSourceFactory) -> Self {
        self.datasource_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn clear_hidden_schemas(mut self) -> Self {
        self.hidden_schemas.clear();
        self
    }

    #[must_use]
    pub fn add_hidden_schema(mut self, schema: impl Into<String>) -> Self {
        self.hidden_schemas.insert(schema.into());
        self
    }

    #[must_use]
    pub fn add_hidden_schemas<I>(mut self, schemas: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.hidden_schemas
            .extend(schemas.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_allow_external_query(mut self, allow: bool) -> Self {
        self.allow_external_query = allow;
        self
    }

    pub fn build(self) -> Result<JdbcPluginConfig, PluginConfigError> {
        Ok(JdbcPluginConfig {
            dialect: self.dialect.ok_or(PluginConfigError::MissingDialect)?,
            fetch_size: self.fetch_size,
            hidden_schemas: self.hidden_schemas,
            allow_external_query: self.allow_external_query,
            datasource_factory: self
                .datasource_factory
                .ok_or(PluginConfigError::MissingDataSourceFactory)?,
        })
    }
}

/// A plugin config was built without one of its required parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginConfigError {
    #[error("plugin config has no dialect")]
    MissingDialect,
    #[error("plugin config has no data source factory")]
    MissingDataSourceFactory,
}
