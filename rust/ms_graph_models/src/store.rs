/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A string-keyed store of JSON values, owned by a single model instance.
//!
//! Every model keeps the properties its schema doesn't declare here, so that
//! decoding and re-encoding a response doesn't lose anything. Entries keep
//! their insertion order.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Property};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyStore {
    values: Map<String, Value>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property. A missing key is [`Property::Absent`], a JSON
    /// `null` is [`Property::Null`].
    pub fn get(&self, key: &str) -> Property<&Value> {
        match self.values.get(key) {
            None => Property::Absent,
            Some(Value::Null) => Property::Null,
            Some(value) => Property::Value(value),
        }
    }

    /// Look up a property and decode it as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Property<T>, Error> {
        self.get(key).try_map(|value| {
            T::deserialize(value)
                .map_err(|err| Error::UnexpectedResponse(format!("{key}: {err} in {value:?}")))
        })
    }

    /// Store any serializable value under `key`, replacing a previous value in
    /// place.
    ///
    /// Keys aren't checked against the owning model's declared properties.
    /// An entry that shadows one is dropped on encode if the declared property
    /// is written, and otherwise decodes back into the declared property.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<(), Error> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.into(), value);
        Ok(())
    }

    /// Store a raw JSON value, returning the one it replaced.
    pub fn set_value(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

impl From<Map<String, Value>> for PropertyStore {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, Value)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: Map::from_iter(iter),
        }
    }
}

impl Serialize for PropertyStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyStore {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from)
    }
}
