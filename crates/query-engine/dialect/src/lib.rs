//! ARP dialect definitions: a declarative description of the SQL syntax and
//! pushdown capabilities of a target database.

pub mod arp;
pub mod error;

pub use arp::ArpDialect;
pub use error::DialectLoadError;
