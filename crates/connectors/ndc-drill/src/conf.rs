//! The source configuration's side of the plugin contract.

use std::sync::Arc;

use ndc_drill_configuration::{CredentialsService, DrillConf};
use query_engine_dialect::ArpDialect;

use crate::data_sources::{
    CloseableDataSource, CommitMode, ConnectionPoolProvider, DataSourceError,
};
use crate::dialect::dialect_singleton;
use crate::options::OptionManager;
use crate::plugin_config::{JdbcPluginConfig, JdbcPluginConfigBuilder, PluginConfigError};

/// Driver the pool loads for Drill connections.
pub const DRIVER: &str = "org.apache.drill.jdbc.Driver";

/// Schemas that only hold Drill's own bookkeeping.
pub const HIDDEN_SCHEMAS: [&str; 2] = ["information_schema", "sys"];

/// A source configuration that can be served through a pooled JDBC-style connection.
pub trait JdbcConf {
    /// Assemble the runtime configuration for this source. No connection is
    /// opened until the host asks the returned config for a data source.
    fn build_plugin_config(
        &self,
        builder: JdbcPluginConfigBuilder,
        credentials: &dyn CredentialsService,
        options: &dyn OptionManager,
    ) -> Result<JdbcPluginConfig, PluginConfigError>;

    /// Open a pooled data source for this source.
    fn new_data_source(
        &self,
        pools: &dyn ConnectionPoolProvider,
    ) -> Result<Box<dyn CloseableDataSource>, DataSourceError>;

    fn dialect(&self) -> &'static ArpDialect;
}

impl JdbcConf for DrillConf {
    fn build_plugin_config(
        &self,
        builder: JdbcPluginConfigBuilder,
        _credentials: &dyn CredentialsService,
        _options: &dyn OptionManager,
    ) -> Result<JdbcPluginConfig, PluginConfigError> {
        let conf = self.clone();
        let config = builder
            .with_dialect(self.dialect())
            .with_fetch_size(self.fetch_size)
            .with_datasource_factory(Arc::new(move |pools: &dyn ConnectionPoolProvider| {
                conf.new_data_source(pools)
            }))
            .clear_hidden_schemas()
            .add_hidden_schemas(HIDDEN_SCHEMAS)
            .with_allow_external_query(false)
            .build()?;

        tracing::debug!(
            fetch_size = config.fetch_size(),
            direct = self.direct,
            "built Drill plugin config"
        );
        Ok(config)
    }

    fn new_data_source(
        &self,
        pools: &dyn ConnectionPoolProvider,
    ) -> Result<Box<dyn CloseableDataSource>, DataSourceError> {
        let connection_string = self.to_connection_string()?;
        let _span = tracing::info_span!("new_data_source", driver = DRIVER).entered();
        tracing::info!("requesting pooled Drill data source");
        let data_source = pools.new_pooled_data_source(
            DRIVER,
            &connection_string,
            None,
            None,
            None,
            CommitMode::DriverSpecified,
        )?;
        Ok(data_source)
    }

    fn dialect(&self) -> &'static ArpDialect {
        dialect_singleton()
    }
}
