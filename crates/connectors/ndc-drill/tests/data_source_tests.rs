//! Opening pooled data sources for a Drill source.

pub mod common;

use std::error::Error;

use similar_asserts::assert_eq;

use ndc_drill::options::NoOptions;
use ndc_drill::{CommitMode, DataSourceError, JdbcConf, JdbcPluginConfig, DRIVER};
use ndc_drill_configuration::credentials::NoCredentials;
use ndc_drill_configuration::{ConfigurationError, DrillConf};

use common::{PoolRequest, RecordingPool, UnreachablePool};

#[test]
fn requests_a_driver_specified_pool_without_credentials() {
    let pool = RecordingPool::default();
    let conf = DrillConf {
        cluster_id: Some("prod1".into()),
        ..DrillConf::new("10.0.0.1", "31010")
    };

    let data_source = conf.new_data_source(&pool).unwrap();
    drop(data_source);

    assert_eq!(
        pool.requests(),
        vec![PoolRequest {
            driver: DRIVER.to_string(),
            connection_string: "jdbc:drill:zk=10.0.0.1:31010/drill/prod1".to_string(),
            username: None,
            password: None,
            extra_properties: None,
            commit_mode: CommitMode::DriverSpecified,
        }]
    );
    assert_eq!(pool.released(), 1);
}

#[test]
fn plugin_config_factory_opens_a_data_source_on_demand() {
    let pool = RecordingPool::default();
    let config = DrillConf::direct("drillbit1", "31010")
        .build_plugin_config(JdbcPluginConfig::builder(), &NoCredentials, &NoOptions)
        .unwrap();

    let data_source = config.new_data_source(&pool).unwrap();
    data_source.close().unwrap();

    let requests = pool.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].connection_string,
        "jdbc:drill:drillbit=drillbit1:31010"
    );
    assert_eq!(pool.released(), 1);
}

#[test]
fn missing_port_fails_before_reaching_the_pool() {
    let pool = RecordingPool::default();
    let conf = DrillConf {
        port: None,
        ..DrillConf::new("10.0.0.1", "31010")
    };

    let err = conf.new_data_source(&pool).err().unwrap();
    assert!(matches!(
        err,
        DataSourceError::Configuration(ConfigurationError::MissingField { field: "port" })
    ));
    assert!(pool.requests().is_empty());
}

#[test]
fn pool_failures_are_propagated_unchanged() {
    let err = DrillConf::new("10.0.0.1", "31010")
        .new_data_source(&UnreachablePool)
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        "failure connecting to jdbc:drill:zk=10.0.0.1:31010/drill/drillbits1"
    );
    let DataSourceError::Connection(connection_error) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(
        connection_error.source().unwrap().to_string(),
        "connection refused"
    );
}

#[test]
fn factory_can_be_called_concurrently() {
    let pool = RecordingPool::default();
    let config = DrillConf::new("10.0.0.1", "31010")
        .build_plugin_config(JdbcPluginConfig::builder(), &NoCredentials, &NoOptions)
        .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let data_source = config.new_data_source(&pool).unwrap();
                data_source.close().unwrap();
            });
        }
    });

    let requests = pool.requests();
    assert_eq!(requests.len(), 8);
    assert!(requests
        .iter()
        .all(|request| request.connection_string == "jdbc:drill:zk=10.0.0.1:31010/drill/drillbits1"));
    assert_eq!(pool.released(), 8);
}
