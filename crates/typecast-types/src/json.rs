//! JSON bridge for host values
//!
//! Plain JSON scalars and arrays map directly onto [`Value`]. Objects must be
//! tagged with one of the `$` keys below, since a bare JSON map has no class:
//!
//! - `{"$class": "Invoice", "$display": "INV-7", "$methods": ["total"], "$invocable": false}`
//! - `{"$markup": "42", "$tag": "qty"}`
//! - `{"$datetime": "2024-03-15T10:30:00+00:00"}`
//! - `{"$closure": "label"}` or `{"$closure": true}`
//! - `{"$resource": "stream", "$id": 3}`

use crate::object::{Closure, DynamicObject, MarkupElement, ObjectValue, ResourceHandle};
use crate::value::{render_float, Value};
use chrono::DateTime;
use serde_json::{Map, Number, Value as Json};
use typecast_diagnostics::{CoercionError, Result};

impl Value {
    /// Build a host value from JSON
    pub fn from_json(json: Json) -> Result<Self> {
        match json {
            Json::Null => Ok(Value::Null),
            Json::Bool(b) => Ok(Value::Boolean(b)),
            Json::Number(n) => Ok(number_to_value(&n)),
            Json::String(s) => Ok(Value::String(s)),
            Json::Array(items) => items
                .into_iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            Json::Object(map) => object_from_json(map),
        }
    }

    /// Render a host value as JSON, using the same tagging as [`Value::from_json`]
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(*b),
            Value::Integer(i) => Json::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or_else(|| Json::String(render_float(*f))),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(object) => object_to_json(object),
            Value::Resource(handle) => {
                let mut map = Map::new();
                map.insert("$resource".into(), Json::String(handle.kind.clone()));
                map.insert("$id".into(), Json::Number(handle.id.into()));
                Json::Object(map)
            }
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Integer(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn object_from_json(map: Map<String, Json>) -> Result<Value> {
    if let Some(class) = map.get("$class") {
        let class = class
            .as_str()
            .ok_or_else(|| CoercionError::input("$class must be a string"))?;
        let mut object = DynamicObject::new(class);
        if let Some(display) = map.get("$display").and_then(Json::as_str) {
            object = object.with_display(display);
        }
        if let Some(methods) = map.get("$methods").and_then(Json::as_array) {
            for method in methods {
                let method = method
                    .as_str()
                    .ok_or_else(|| CoercionError::input("$methods must list strings"))?;
                object = object.with_method(method);
            }
        }
        if map.get("$invocable").and_then(Json::as_bool).unwrap_or(false) {
            object = object.invocable();
        }
        return Ok(Value::Object(ObjectValue::instance(object)));
    }

    if let Some(text) = map.get("$markup") {
        let text = match text {
            Json::String(s) => s.clone(),
            Json::Number(n) => n.to_string(),
            Json::Bool(b) => b.to_string(),
            _ => return Err(CoercionError::input("$markup must hold scalar text")),
        };
        let tag = map.get("$tag").and_then(Json::as_str).unwrap_or("element");
        return Ok(Value::Object(ObjectValue::Markup(MarkupElement::new(tag, text))));
    }

    if let Some(stamp) = map.get("$datetime") {
        let stamp = stamp
            .as_str()
            .ok_or_else(|| CoercionError::input("$datetime must be a string"))?;
        let parsed = DateTime::parse_from_rfc3339(stamp)
            .map_err(|e| CoercionError::input(format!("Invalid $datetime '{}': {}", stamp, e)))?;
        return Ok(Value::Object(ObjectValue::DateTime(parsed)));
    }

    if let Some(label) = map.get("$closure") {
        let closure = match label.as_str() {
            Some(label) => Closure::labeled(label),
            None => Closure::new(),
        };
        return Ok(Value::Object(ObjectValue::Closure(closure)));
    }

    if let Some(kind) = map.get("$resource") {
        let kind = kind
            .as_str()
            .ok_or_else(|| CoercionError::input("$resource must be a string"))?;
        let id = map.get("$id").and_then(Json::as_u64).unwrap_or(0);
        return Ok(Value::Resource(ResourceHandle::new(kind, id)));
    }

    Err(CoercionError::input(
        "JSON objects must be tagged with $class, $markup, $datetime, $closure or $resource",
    ))
}

fn object_to_json(object: &ObjectValue) -> Json {
    let mut map = Map::new();
    match object {
        ObjectValue::Markup(element) => {
            map.insert("$markup".into(), Json::String(element.text.clone()));
            map.insert("$tag".into(), Json::String(element.tag.clone()));
        }
        ObjectValue::Closure(closure) => {
            let label = match &closure.label {
                Some(label) => Json::String(label.clone()),
                None => Json::Bool(true),
            };
            map.insert("$closure".into(), label);
        }
        ObjectValue::DateTime(dt) => {
            map.insert("$datetime".into(), Json::String(dt.to_rfc3339()));
        }
        ObjectValue::Instance(instance) => {
            map.insert("$class".into(), Json::String(instance.class_name().to_string()));
            if let Some(display) = instance.to_display_string() {
                map.insert("$display".into(), Json::String(display));
            }
            if instance.is_invocable() {
                map.insert("$invocable".into(), Json::Bool(true));
            }
        }
    }
    Json::Object(map)
}
