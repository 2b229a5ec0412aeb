//! Shared test fixtures.
//!
//! Two small record types with a mutual association (a developer owns an
//! address, an address points back at a developer) plus a recording
//! in-memory connection. Schema field order is alphabetical on purpose, so
//! reordering options show up in test expectations.

use once_cell::sync::Lazy;

use chrono::{DateTime, Utc};

use crate::connection::Connection;
use crate::error::ExecutionError;
use crate::model::{ColumnType, Model, Record, Schema, Value};

// =============================================================================
// Schemas
// =============================================================================

pub fn developer_schema() -> Schema {
    static SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new("developers")
            .field("created_at", ColumnType::Timestamp)
            .field("id", ColumnType::Integer)
            .field("name", ColumnType::Text)
            .field("salary", ColumnType::Integer)
            .field("updated_at", ColumnType::Timestamp)
            .association("address", address_schema)
    });
    SCHEMA.clone()
}

pub fn address_schema() -> Schema {
    static SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new("addresses")
            .field("city", ColumnType::Text)
            .field("developer_id", ColumnType::Integer)
            .field("id", ColumnType::Integer)
            .field("state", ColumnType::Text)
            .field("zip", ColumnType::Text)
            .association("developer", developer_schema)
    });
    SCHEMA.clone()
}

// =============================================================================
// Developer
// =============================================================================

/// A developer is valid when it has a non-empty name.
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    pub id: i64,
    pub name: String,
    pub salary: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub address: Option<Box<Address>>,
}

impl Developer {
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(Box::new(address));
        self
    }
}

impl Record for Developer {
    fn schema(&self) -> Schema {
        developer_schema()
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "created_at" => self.created_at.into(),
            "id" => self.id.into(),
            "name" => Value::Text(self.name.clone()),
            "salary" => self.salary.into(),
            "updated_at" => self.updated_at.into(),
            _ => Value::Null,
        }
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    fn association(&self, name: &str) -> Option<&dyn Record> {
        match name {
            "address" => self.address.as_deref().map(|a| a as &dyn Record),
            _ => None,
        }
    }
}

impl Model for Developer {
    fn model_schema() -> Schema {
        developer_schema()
    }

    fn from_attributes(attrs: &[(String, Value)]) -> Self {
        let mut dev = Developer {
            id: 0,
            name: String::new(),
            salary: 0,
            created_at: None,
            updated_at: None,
            address: None,
        };
        for (name, value) in attrs {
            match name.as_str() {
                "created_at" => dev.created_at = timestamp_of(value),
                "id" => dev.id = int_of(value),
                "name" => dev.name = text_of(value),
                "salary" => dev.salary = int_of(value),
                "updated_at" => dev.updated_at = timestamp_of(value),
                _ => {}
            }
        }
        dev
    }
}

pub fn sample_developer(id: i64, name: &str, salary: i64) -> Developer {
    Developer {
        id,
        name: name.to_string(),
        salary,
        created_at: None,
        updated_at: None,
        address: None,
    }
}

// =============================================================================
// Address
// =============================================================================

/// An address is valid when it has a non-empty city.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i64,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub developer_id: Option<i64>,
    pub developer: Option<Box<Developer>>,
}

impl Address {
    pub fn with_developer(mut self, developer: Developer) -> Self {
        self.developer = Some(Box::new(developer));
        self
    }
}

impl Record for Address {
    fn schema(&self) -> Schema {
        address_schema()
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "city" => Value::Text(self.city.clone()),
            "developer_id" => self.developer_id.into(),
            "id" => self.id.into(),
            "state" => Value::Text(self.state.clone()),
            "zip" => Value::Text(self.zip.clone()),
            _ => Value::Null,
        }
    }

    fn is_valid(&self) -> bool {
        !self.city.is_empty()
    }

    fn association(&self, name: &str) -> Option<&dyn Record> {
        match name {
            "developer" => self.developer.as_deref().map(|d| d as &dyn Record),
            _ => None,
        }
    }
}

impl Model for Address {
    fn model_schema() -> Schema {
        address_schema()
    }

    fn from_attributes(attrs: &[(String, Value)]) -> Self {
        let mut address = Address {
            id: 0,
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            developer_id: None,
            developer: None,
        };
        for (name, value) in attrs {
            match name.as_str() {
                "city" => address.city = text_of(value),
                "developer_id" => address.developer_id = Some(int_of(value)),
                "id" => address.id = int_of(value),
                "state" => address.state = text_of(value),
                "zip" => address.zip = text_of(value),
                _ => {}
            }
        }
        address
    }
}

pub fn sample_address(id: i64, city: &str, state: &str) -> Address {
    Address {
        id,
        city: city.to_string(),
        state: state.to_string(),
        zip: String::new(),
        developer_id: None,
        developer: None,
    }
}

// =============================================================================
// Attribute Coercion
// =============================================================================

fn int_of(value: &Value) -> i64 {
    match value {
        Value::Int(i) => *i,
        _ => 0,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn timestamp_of(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Timestamp(t) => Some(*t),
        _ => None,
    }
}

// =============================================================================
// Recording Connection
// =============================================================================

/// Connection fake that records executed statements.
#[derive(Debug, Default)]
pub struct MemoryConnection {
    /// Successfully executed statements, in execution order.
    pub executed: Vec<String>,
    fail_at: Option<usize>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connection whose statement at `index` (zero-based) fails.
    pub fn failing_at(index: usize) -> Self {
        Self {
            executed: Vec::new(),
            fail_at: Some(index),
        }
    }
}

impl Connection for MemoryConnection {
    fn execute(&mut self, sql: &str) -> Result<(), ExecutionError> {
        if self.fail_at == Some(self.executed.len()) {
            return Err(ExecutionError::new(format!(
                "forced failure at statement {}",
                self.executed.len()
            )));
        }
        self.executed.push(sql.to_string());
        Ok(())
    }
}
