//! JSON → Bolt parameter conversion for export properties.

use std::collections::HashMap;

use neo4rs::{BoltNull, BoltType};
use serde_json::{Map, Value};

/// Convert a property value into a Bolt parameter.
///
/// Neo4j properties cannot hold maps, so nested objects (including objects
/// inside arrays) are stored as JSON strings.
pub fn property_to_bolt(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull),
        Value::Bool(b) => BoltType::from(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => BoltType::from(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => BoltType::from(s.clone()),
        Value::Array(items) => {
            BoltType::from(items.iter().map(property_to_bolt).collect::<Vec<BoltType>>())
        }
        Value::Object(_) => BoltType::from(value.to_string()),
    }
}

/// Convert a property map into a Bolt map parameter, for `CREATE (n $props)`.
pub fn properties_to_bolt(props: &Map<String, Value>) -> BoltType {
    let map: HashMap<String, BoltType> = props
        .iter()
        .map(|(k, v)| (k.clone(), property_to_bolt(v)))
        .collect();
    BoltType::from(map)
}
