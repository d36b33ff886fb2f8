//! Derive the Drill JDBC connection string from a `DrillConf`.

use crate::connection_settings::DrillConf;
use crate::error::ConfigurationError;

pub const JDBC_PREFIX: &str = "jdbc:drill";

impl DrillConf {
    /// Build the connection string for this source.
    ///
    /// Direct mode yields `jdbc:drill:drillbit=<host>:<port>`. Discovery mode
    /// yields `jdbc:drill:zk=<host>:<port>` followed by `/<directory>` and
    /// `/<clusterId>` for each of them that is set and non-empty.
    pub fn to_connection_string(&self) -> Result<String, ConfigurationError> {
        let (host, port) = self.validate()?;

        let mut connection_string = String::from(JDBC_PREFIX);
        if self.direct {
            connection_string.push_str(&format!(":drillbit={host}:{port}"));
        } else {
            connection_string.push_str(&format!(":zk={host}:{port}"));
            for segment in [&self.directory, &self.cluster_id] {
                if let Some(segment) = segment.as_deref().filter(|s| !s.is_empty()) {
                    connection_string.push('/');
                    connection_string.push_str(segment);
                }
            }
        }

        tracing::info!("Drill connection string is: {connection_string}");
        Ok(connection_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_mode_appends_directory_then_cluster() {
        let conf = DrillConf {
            cluster_id: Some("prod1".into()),
            ..DrillConf::new("10.0.0.1", "31010")
        };
        assert_eq!(
            conf.to_connection_string().unwrap(),
            "jdbc:drill:zk=10.0.0.1:31010/drill/prod1"
        );
    }

    #[test]
    fn direct_mode_ignores_the_zookeeper_path() {
        let conf = DrillConf {
            directory: Some("ignored".into()),
            cluster_id: Some("ignored-too".into()),
            ..DrillConf::direct("10.0.0.1", "31010")
        };
        assert_eq!(
            conf.to_connection_string().unwrap(),
            "jdbc:drill:drillbit=10.0.0.1:31010"
        );
    }

    #[test]
    fn empty_segments_are_skipped() {
        let empty = DrillConf {
            directory: Some(String::new()),
            cluster_id: Some(String::new()),
            ..DrillConf::new("zk.internal", "2181")
        };
        assert_eq!(
            empty.to_connection_string().unwrap(),
            "jdbc:drill:zk=zk.internal:2181"
        );

        let unset = DrillConf {
            directory: None,
            cluster_id: Some("drillbits2".into()),
            ..DrillConf::new("zk.internal", "2181")
        };
        assert_eq!(
            unset.to_connection_string().unwrap(),
            "jdbc:drill:zk=zk.internal:2181/drillbits2"
        );
    }

    #[test]
    fn missing_host_is_reported_before_port() {
        let err = DrillConf::default().to_connection_string().unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingField { field: "host" }));
        assert_eq!(err.to_string(), "Missing host.");

        let no_port = DrillConf {
            host: Some("10.0.0.1".into()),
            ..DrillConf::default()
        };
        assert!(matches!(
            no_port.to_connection_string(),
            Err(ConfigurationError::MissingField { field: "port" })
        ));
    }

    #[test]
    fn connection_string_fails_exactly_when_validation_does() {
        let confs = [
            DrillConf::default(),
            DrillConf::new(" ", "31010"),
            DrillConf::new("10.0.0.1", "\t"),
            DrillConf::direct("", ""),
            DrillConf::direct("10.0.0.1", "31010"),
            DrillConf::new("zk.internal", "2181"),
        ];
        for conf in confs {
            match (conf.validate(), conf.to_connection_string()) {
                (Ok((host, port)), Ok(connection_string)) => {
                    assert!(connection_string.contains(&format!("={host}:{port}")));
                }
                (
                    Err(ConfigurationError::MissingField { field: expected }),
                    Err(ConfigurationError::MissingField { field }),
                ) => assert_eq!(field, expected),
                (validated, built) => panic!("{conf:?}: {validated:?} vs {built:?}"),
            }
        }
    }

    #[test]
    fn building_is_deterministic() {
        let conf = DrillConf::new("10.0.0.1", "31010");
        assert_eq!(
            conf.to_connection_string().unwrap(),
            conf.to_connection_string().unwrap()
        );
    }
}
