//! The Drill source plugin: turns a `DrillConf` into the runtime configuration
//! the host engine uses to reach a Drill cluster.

pub mod conf;
pub mod data_sources;
pub mod dialect;
pub mod options;
pub mod plugin_config;

pub use conf::{JdbcConf, DRIVER};
pub use data_sources::{
    CloseableDataSource, CommitMode, ConnectionError, ConnectionPoolProvider, DataSourceError,
};
pub use dialect::{dialect_singleton, try_dialect_singleton};
pub use options::{OptionManager, OptionValue};
pub use plugin_config::{JdbcPluginConfig, JdbcPluginConfigBuilder, PluginConfigError};
