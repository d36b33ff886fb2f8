//! Pool providers that stand in for a real connection pool.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ndc_drill::data_sources::ExtraProperties;
use ndc_drill::{CloseableDataSource, CommitMode, ConnectionError, ConnectionPoolProvider};

/// The arguments of one `new_pooled_data_source` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolRequest {
    pub driver: String,
    pub connection_string: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub extra_properties: Option<ExtraProperties>,
    pub commit_mode: CommitMode,
}

/// Records every request and hands out data sources that count their releases.
#[derive(Default)]
pub struct RecordingPool {
    pub requests: Mutex<Vec<PoolRequest>>,
    pub released: Arc<AtomicUsize>,
}

impl RecordingPool {
    pub fn requests(&self) -> Vec<PoolRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl ConnectionPoolProvider for RecordingPool {
    fn new_pooled_data_source(
        &self,
        driver: &str,
        connection_string: &str,
        username: Option<&str>,
        password: Option<&str>,
        extra_properties: Option<&ExtraProperties>,
        commit_mode: CommitMode,
    ) -> Result<Box<dyn CloseableDataSource>, ConnectionError> {
        self.requests.lock().unwrap().push(PoolRequest {
            driver: driver.to_string(),
            connection_string: connection_string.to_string(),
            username: username.map(str::to_string),
            password: password.map(str::to_string),
            extra_properties: extra_properties.cloned(),
            commit_mode,
        });
        Ok(Box::new(CountingDataSource {
            released: self.released.clone(),
        }))
    }
}

pub struct CountingDataSource {
    released: Arc<AtomicUsize>,
}

impl CloseableDataSource for CountingDataSource {
    fn close(self: Box<Self>) -> Result<(), ConnectionError> {
        // release happens on drop
        Ok(())
    }
}

impl Drop for CountingDataSource {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// A pool whose driver cannot reach the cluster.
pub struct UnreachablePool;

impl ConnectionPoolProvider for UnreachablePool {
    fn new_pooled_data_source(
        &self,
        _driver: &str,
        connection_string: &str,
        _username: Option<&str>,
        _password: Option<&str>,
        _extra_properties: Option<&ExtraProperties>,
        _commit_mode: CommitMode,
    ) -> Result<Box<dyn CloseableDataSource>, ConnectionError> {
        Err(ConnectionError::with_source(
            format!("failure connecting to {connection_string}"),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        ))
    }
}
