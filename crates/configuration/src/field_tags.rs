//! The stable field numbering of the persisted Drill source record.
//!
//! Field names may be renamed in code but a tag, once assigned, keeps its
//! meaning forever. Reserved tags are never reused.

use crate::connection_settings::DrillConf;

/// Compares one field of two records.
pub type FieldComparison = fn(&DrillConf, &DrillConf) -> bool;

/// One entry of the persisted record's schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldTag {
    pub tag: u32,
    /// Name of the field in the serialized record.
    pub name: &'static str,
    /// Label shown next to the field in the source settings form.
    pub label: &'static str,
    /// Changing this field invalidates cached metadata.
    pub metadata_impacting: bool,
    /// Whether the field differs between two records. Reserved tags have none.
    pub differs: Option<FieldComparison>,
}

impl FieldTag {
    /// The tag is held for a field that is not supported yet.
    pub const fn is_reserved(&self) -> bool {
        self.differs.is_none()
    }
}

const fn active(
    tag: u32,
    name: &'static str,
    label: &'static str,
    differs: FieldComparison,
) -> FieldTag {
    FieldTag {
        tag,
        name,
        label,
        metadata_impacting: true,
        differs: Some(differs),
    }
}

const fn reserved(tag: u32, name: &'static str, label: &'static str) -> FieldTag {
    FieldTag {
        tag,
        name,
        label,
        metadata_impacting: true,
        differs: None,
    }
}

pub const FIELD_TAGS: &[FieldTag] = &[
    active(1, "direct", "Direct Connection", |old, new| {
        old.direct != new.direct
    }),
    active(2, "host", "Host", |old, new| old.host != new.host),
    active(3, "port", "Port", |old, new| old.port != new.port),
    active(4, "directory", "Directory", |old, new| {
        old.directory != new.directory
    }),
    active(5, "clusterId", "Cluster ID", |old, new| {
        old.cluster_id != new.cluster_id
    }),
    FieldTag {
        metadata_impacting: false,
        ..active(6, "fetchSize", "Record fetch size", |old, new| {
            old.fetch_size != new.fetch_size
        })
    },
    // credentials are not supported for Drill sources
    reserved(7, "username", "Username"),
    reserved(8, "password", "Password"),
];

pub fn field_by_tag(tag: u32) -> Option<&'static FieldTag> {
    FIELD_TAGS.iter().find(|field| field.tag == tag)
}

pub fn field_by_name(name: &str) -> Option<&'static FieldTag> {
    FIELD_TAGS.iter().find(|field| field.name == name)
}

/// Tags of the active fields whose values differ between two records.
pub fn changed_fields(old: &DrillConf, new: &DrillConf) -> Vec<&'static FieldTag> {
    FIELD_TAGS
        .iter()
        .filter(|field| field.differs.is_some_and(|differs| differs(old, new)))
        .collect()
}
