//! The ARP document model and its read-only lookups.
//!
//! An ARP file is a YAML document with five sections: `metadata`, `syntax`,
//! `data_types`, `relational_algebra` and `expressions`. Only `metadata` and
//! `syntax` are mandatory; every capability that is not mentioned is disabled.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DialectLoadError;

/// A parsed dialect definition.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct ArpDialect {
    pub metadata: DialectMetadata,
    pub syntax: Syntax,
    #[serde(default)]
    pub data_types: DataTypes,
    #[serde(default)]
    pub relational_algebra: RelationalAlgebra,
    #[serde(default)]
    pub expressions: Expressions,
}

/// Identification of the target database.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct DialectMetadata {
    pub name: String,
    pub apiname: String,
    #[serde(default = "spec_version_default")]
    pub spec_version: String,
}

fn spec_version_default() -> String {
    "1".to_string()
}

/// Lexical properties of the target SQL.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct Syntax {
    pub identifier_quote: String,
    #[serde(default)]
    pub identifier_length_limit: Option<u32>,
    #[serde(default)]
    pub allows_boolean_literal: bool,
    #[serde(default)]
    pub map_boolean_literal_to_bit: bool,
    #[serde(default)]
    pub supports_catalogs: bool,
    #[serde(default = "supports_schemas_default")]
    pub supports_schemas: bool,
}

fn supports_schemas_default() -> bool {
    true
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct DataTypes {
    #[serde(default)]
    pub mappings: Vec<DataTypeMapping>,
}

/// Maps a type reported by the source to the engine's own type.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct DataTypeMapping {
    pub source: TypeName,
    pub dremio: TypeName,
    #[serde(default)]
    pub required_cast_arguments: CastArguments,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct TypeName {
    pub name: String,
}

/// Which type parameters must be spelled out when casting to a mapped type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CastArguments {
    #[default]
    None,
    Precision,
    Scale,
    PrecisionScale,
}

/// A capability that is either on or off.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct Toggle {
    #[serde(default)]
    pub enable: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct RelationalAlgebra {
    pub aggregation: Aggregation,
    pub except: Toggle,
    pub project: Toggle,
    pub join: Join,
    pub sort: Sort,
    pub union: Union,
    pub values: Values,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Aggregation {
    pub enable: bool,
    pub group_by_ordinal: bool,
    pub distinct: bool,
    pub count_functions: CountFunctions,
    pub functions: Vec<FunctionSignatures>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct CountFunctions {
    pub count_star: Toggle,
    pub count: Toggle,
    pub count_distinct: Toggle,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Join {
    pub enable: bool,
    pub cross: Toggle,
    pub inner: InnerJoin,
    pub left: Toggle,
    pub right: Toggle,
    pub full: Toggle,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct InnerJoin {
    pub enable: bool,
    pub inequality: bool,
}

/// The join flavours a dialect may declare.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JoinKind {
    Cross,
    Inner,
    Left,
    Right,
    Full,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Sort {
    pub enable: bool,
    pub order_by: OrderBy,
    pub fetch_offset: FetchOffset,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct OrderBy {
    pub enable: bool,
    pub default_nulls_ordering: NullsOrdering,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NullsOrdering {
    First,
    Last,
    #[default]
    High,
    Low,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct FetchOffset {
    pub offset_fetch: PagingFormat,
    pub offset_only: PagingFormat,
    pub fetch_only: PagingFormat,
}

/// A paging clause template, e.g. `LIMIT {1} OFFSET {0}`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct PagingFormat {
    pub enable: bool,
    pub format: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Union {
    pub enable: bool,
    pub union_all: Toggle,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Values {
    pub enable: bool,
    pub method: ValuesMethod,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValuesMethod {
    #[default]
    Values,
    DummyTable,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Expressions {
    pub subqueries: Subqueries,
    pub supports_case: bool,
    pub supports_over: bool,
    pub operators: Vec<FunctionSignatures>,
    pub variable_length_operators: Vec<VariableLengthOperator>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Subqueries {
    pub enable: bool,
    pub correlated: bool,
    pub scalar: bool,
    pub in_clause: bool,
}

/// A group of operators or functions that share their signatures.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct FunctionSignatures {
    pub names: Vec<String>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct Signature {
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(rename = "return")]
    pub return_type: String,
    /// Template used instead of the default rendering, e.g. `CAST({0} AS DOUBLE)`.
    #[serde(default)]
    pub rewrite: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct VariableLengthOperator {
    pub names: Vec<String>,
    #[serde(default)]
    pub variable_signatures: Vec<VariableSignature>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct VariableSignature {
    #[serde(rename = "return")]
    pub return_type: String,
    pub arg_type: String,
}

impl ArpDialect {
    /// Parse and validate a dialect document.
    pub fn from_yaml(contents: &str) -> Result<Self, DialectLoadError> {
        let dialect: ArpDialect = serde_yaml::from_str(contents)?;
        dialect.validate()?;
        tracing::debug!(
            dialect = %dialect.metadata.name,
            mappings = dialect.data_types.mappings.len(),
            operators = dialect.expressions.operators.len(),
            "parsed dialect definition"
        );
        Ok(dialect)
    }

    fn validate(&self) -> Result<(), DialectLoadError> {
        if self.metadata.name.trim().is_empty() {
            return Err(DialectLoadError::EmptyName);
        }
        if self.metadata.apiname.trim().is_empty() {
            return Err(DialectLoadError::EmptyApiName);
        }
        if self.syntax.identifier_quote.is_empty() {
            return Err(DialectLoadError::EmptyIdentifierQuote);
        }

        let mut seen = BTreeSet::new();
        for (index, mapping) in self.data_types.mappings.iter().enumerate() {
            if mapping.source.name.trim().is_empty() {
                return Err(DialectLoadError::EmptyTypeName {
                    index,
                    side: "source",
                });
            }
            if mapping.dremio.name.trim().is_empty() {
                return Err(DialectLoadError::EmptyTypeName {
                    index,
                    side: "dremio",
                });
            }
            if !seen.insert(mapping.source.name.to_uppercase()) {
                return Err(DialectLoadError::DuplicateTypeMapping {
                    name: mapping.source.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn api_name(&self) -> &str {
        &self.metadata.apiname
    }

    pub fn identifier_quote(&self) -> &str {
        &self.syntax.identifier_quote
    }

    pub fn supports_catalogs(&self) -> bool {
        self.syntax.supports_catalogs
    }

    pub fn supports_schemas(&self) -> bool {
        self.syntax.supports_schemas
    }

    /// The engine type a source type maps to. Source type names compare
    /// case-insensitively.
    pub fn map_source_type(&self, source_name: &str) -> Option<&DataTypeMapping> {
        self.data_types
            .mappings
            .iter()
            .find(|mapping| mapping.source.name.eq_ignore_ascii_case(source_name))
    }

    /// Whether an expression operator (fixed or variable arity) can be pushed down.
    pub fn supports_operator(&self, name: &str) -> bool {
        self.operator_signatures(name).next().is_some()
            || self
                .expressions
                .variable_length_operators
                .iter()
                .any(|op| contains_name(&op.names, name))
    }

    /// All fixed-arity signatures declared for an operator.
    pub fn operator_signatures<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Signature> {
        self.expressions
            .operators
            .iter()
            .filter(move |group| contains_name(&group.names, name))
            .flat_map(|group| group.signatures.iter())
    }

    /// Whether an aggregate function can be pushed down.
    pub fn supports_function(&self, name: &str) -> bool {
        self.relational_algebra.aggregation.enable
            && self
                .relational_algebra
                .aggregation
                .functions
                .iter()
                .any(|group| contains_name(&group.names, name))
    }

    pub fn supports_join(&self, kind: JoinKind) -> bool {
        let join = &self.relational_algebra.join;
        join.enable
            && match kind {
                JoinKind::Cross => join.cross.enable,
                JoinKind::Inner => join.inner.enable,
                JoinKind::Left => join.left.enable,
                JoinKind::Right => join.right.enable,
                JoinKind::Full => join.full.enable,
            }
    }
}

fn contains_name(names: &[String], name: &str) -> bool {
    names.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}
