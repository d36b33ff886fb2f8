//! The bundled Drill dialect definition.
//!
//! The definition is parsed on first use and shared by every source for the
//! rest of the process.

use std::sync::LazyLock;

use query_engine_dialect::{ArpDialect, DialectLoadError};

pub const ARP_FILENAME: &str = "arp/implementation/drill-arp.yaml";

const ARP_DEFINITION: &str = include_str!("../arp/implementation/drill-arp.yaml");

static DRILL_DIALECT: LazyLock<Result<ArpDialect, DialectLoadError>> =
    LazyLock::new(|| ArpDialect::from_yaml(ARP_DEFINITION));

/// The shared Drill dialect, or the reason the bundled definition is unusable.
pub fn try_dialect_singleton() -> Result<&'static ArpDialect, &'static DialectLoadError> {
    DRILL_DIALECT.as_ref()
}

/// The shared Drill dialect.
///
/// Panics if the bundled definition does not parse. That can only happen with
/// a broken build, so there is nothing to recover.
pub fn dialect_singleton() -> &'static ArpDialect {
    match try_dialect_singleton() {
        Ok(dialect) => dialect,
        Err(err) => panic!("bundled dialect definition {ARP_FILENAME} is invalid: {err}"),
    }
}
