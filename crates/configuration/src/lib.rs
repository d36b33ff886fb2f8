//! Configuration of a Drill source: the persisted record, its validation and
//! the connection string derived from it.

pub mod connection_settings;
pub mod connection_string;
pub mod credentials;
pub mod error;
pub mod field_tags;
pub mod version1;

pub use connection_settings::{DrillConf, MetadataIdentity};
pub use credentials::{CredentialsError, CredentialsService};
pub use error::{ConfigurationError, ParseConfigurationError, WriteParsedConfigurationError};
pub use version1::{parse_configuration, write_parsed_configuration, ParsedConfiguration};

/// Identifier of the source type in the host's catalog.
pub const SOURCE_TYPE: &str = "DRILL";
/// Human-readable name of the source type.
pub const SOURCE_LABEL: &str = "Drill";
/// Layout of the source settings form.
pub const UI_CONFIG: &str = "drill-layout.json";
