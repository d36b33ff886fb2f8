//! Drill source connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

pub const DEFAULT_DIRECTORY: &str = "drill";
pub const DEFAULT_CLUSTER_ID: &str = "drillbits1";
pub const DEFAULT_FETCH_SIZE: u32 = 200;

/// Configuration for a Drill source.
///
/// In discovery mode the connector finds a drillbit through the ZooKeeper
/// quorum at `host:port`, under `/<directory>/<clusterId>`. In direct mode it
/// connects to the drillbit at `host:port` and ignores the ZooKeeper path.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrillConf {
    #[serde(default)]
    #[schemars(title = "Direct Connection")]
    pub direct: bool,
    #[serde(default)]
    #[schemars(title = "Host")]
    pub host: Option<String>,
    #[serde(default)]
    #[schemars(title = "Port")]
    pub port: Option<String>,
    #[serde(default = "directory_default")]
    #[schemars(title = "Directory")]
    pub directory: Option<String>,
    #[serde(default = "cluster_id_default")]
    #[schemars(title = "Cluster ID")]
    pub cluster_id: Option<String>,
    /// Does not impact cached metadata.
    #[serde(default = "fetch_size_default")]
    #[schemars(title = "Record fetch size")]
    pub fetch_size: u32,
}

fn directory_default() -> Option<String> {
    Some(DEFAULT_DIRECTORY.to_string())
}

fn cluster_id_default() -> Option<String> {
    Some(DEFAULT_CLUSTER_ID.to_string())
}

fn fetch_size_default() -> u32 {
    DEFAULT_FETCH_SIZE
}

impl Default for DrillConf {
    fn default() -> Self {
        Self {
            direct: false,
            host: None,
            port: None,
            directory: directory_default(),
            cluster_id: cluster_id_default(),
            fetch_size: fetch_size_default(),
        }
    }
}

/// The part of a `DrillConf` that identifies the source's metadata.
///
/// Two configurations with the same identity see the same catalog, so cached
/// metadata can be kept when only the fetch size changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MetadataIdentity<'a> {
    pub direct: bool,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    pub directory: Option<&'a str>,
    pub cluster_id: Option<&'a str>,
}

impl DrillConf {
    /// A discovery-mode configuration with the default ZooKeeper path.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port.into()),
            ..Self::default()
        }
    }

    /// A direct-mode configuration.
    pub fn direct(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            direct: true,
            ..Self::new(host, port)
        }
    }

    /// Check the fields that must be set before a connection can be made and
    /// return the host and port.
    pub fn validate(&self) -> Result<(&str, &str), ConfigurationError> {
        let host = required(self.host.as_deref(), "host")?;
        let port = required(self.port.as_deref(), "port")?;
        Ok((host, port))
    }

    pub fn metadata_identity(&self) -> MetadataIdentity<'_> {
        MetadataIdentity {
            direct: self.direct,
            host: self.host.as_deref(),
            port: self.port.as_deref(),
            directory: self.directory.as_deref(),
            cluster_id: self.cluster_id.as_deref(),
        }
    }

    /// Equality that ignores settings which do not impact metadata.
    pub fn metadata_eq(&self, other: &DrillConf) -> bool {
        self.metadata_identity() == other.metadata_identity()
    }
}

/// Returns the value of a required field, failing if it is unset or blank.
fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ConfigurationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigurationError::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_persisted_defaults() {
        let parsed: DrillConf = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, DrillConf::default());
        assert_eq!(parsed.directory.as_deref(), Some("drill"));
        assert_eq!(parsed.cluster_id.as_deref(), Some("drillbits1"));
        assert_eq!(parsed.fetch_size, 200);
        assert!(!parsed.direct);
    }

    #[test]
    fn blank_host_or_port_is_rejected() {
        assert!(matches!(
            DrillConf::default().validate(),
            Err(ConfigurationError::MissingField { field: "host" })
        ));
        assert!(matches!(
            DrillConf::new("  ", "31010").validate(),
            Err(ConfigurationError::MissingField { field: "host" })
        ));
        assert!(matches!(
            DrillConf::new("10.0.0.1", "").validate(),
            Err(ConfigurationError::MissingField { field: "port" })
        ));
        assert_eq!(
            DrillConf::new("10.0.0.1", "31010").validate().unwrap(),
            ("10.0.0.1", "31010")
        );
    }

    #[test]
    fn fetch_size_does_not_impact_metadata() {
        let conf = DrillConf::new("10.0.0.1", "31010");
        let larger_fetch = DrillConf {
            fetch_size: 5000,
            ..conf.clone()
        };
        assert_ne!(conf, larger_fetch);
        assert!(conf.metadata_eq(&larger_fetch));

        let other_cluster = DrillConf {
            cluster_id: Some("prod1".into()),
            ..conf.clone()
        };
        assert!(!conf.metadata_eq(&other_cluster));
    }
}
