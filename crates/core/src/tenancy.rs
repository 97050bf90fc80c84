//! Per-tenant namespace resolution.
//!
//! Every hotel may keep its kitchen tables in a dedicated PostgreSQL schema.
//! The schema name comes from the hotel registry, never from the request, and
//! is validated against an allow-list before it is ever placed into SQL text.
//! Hotels without a schema read from the shared namespace, unqualified.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::types::DbId;

/// PostgreSQL truncates identifiers longer than this (NAMEDATALEN - 1).
pub const MAX_SCHEMA_NAME_LEN: usize = 63;

/// Schemas owned by PostgreSQL itself; a tenant must never resolve to these.
const RESERVED_SCHEMAS: &[&str] = &["information_schema"];

static SCHEMA_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex"));

/// A schema identifier that passed the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName(String);

impl SchemaName {
    /// Validate a raw schema name.
    ///
    /// Accepts lowercase ASCII letters, digits and `_`, not starting with a
    /// digit, at most [`MAX_SCHEMA_NAME_LEN`] bytes. Rejects system schemas
    /// and anything prefixed with `pg_`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() > MAX_SCHEMA_NAME_LEN {
            return Err(CoreError::InvalidSchema(format!(
                "'{raw}' exceeds {MAX_SCHEMA_NAME_LEN} bytes"
            )));
        }
        if !SCHEMA_NAME_RE.is_match(raw) {
            return Err(CoreError::InvalidSchema(format!(
                "'{raw}' contains characters outside [a-z0-9_]"
            )));
        }
        if raw.starts_with("pg_") || RESERVED_SCHEMAS.contains(&raw) {
            return Err(CoreError::InvalidSchema(format!("'{raw}' is reserved")));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The namespace a single request reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    hotel_id: DbId,
    schema: Option<SchemaName>,
}

impl TenantContext {
    /// Build a context from the hotel id and whatever the registry returned.
    ///
    /// `None`, an empty string and a whitespace-only string all mean the
    /// shared namespace. Non-positive hotel ids are rejected.
    pub fn resolve(hotel_id: DbId, raw_schema: Option<&str>) -> Result<Self, CoreError> {
        validate_hotel_id(hotel_id)?;

        let schema = match raw_schema.map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(SchemaName::parse(name)?),
        };

        Ok(Self { hotel_id, schema })
    }

    /// A context that reads from the shared namespace.
    pub fn shared(hotel_id: DbId) -> Self {
        Self {
            hotel_id,
            schema: None,
        }
    }

    pub fn hotel_id(&self) -> DbId {
        self.hotel_id
    }

    pub fn schema(&self) -> Option<&SchemaName> {
        self.schema.as_ref()
    }

    /// Qualify a table name with the tenant schema, if any.
    ///
    /// The schema is quoted so it is never case-folded or parsed as a keyword.
    /// `table` must be a compile-time constant.
    pub fn table(&self, table: &'static str) -> String {
        match &self.schema {
            Some(schema) => format!("\"{schema}\".{table}"),
            None => table.to_string(),
        }
    }
}

/// Hotel ids are BIGSERIAL keys and therefore strictly positive.
pub fn validate_hotel_id(hotel_id: DbId) -> Result<(), CoreError> {
    if hotel_id <= 0 {
        return Err(CoreError::Validation(format!(
            "hotel_id must be positive, got {hotel_id}"
        )));
    }
    Ok(())
}
