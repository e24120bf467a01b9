/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Read-only cursor over a decoded JSON document.

use std::any::type_name;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};
use uuid::Uuid;

use crate::{Error, Parsable};

/// A position in a JSON document. Every typed accessor maps JSON `null` to
/// `Ok(None)` and a value of the wrong JSON type to
/// [`Error::UnexpectedResponse`].
#[derive(Clone, Copy, Debug)]
pub struct ParseNode<'a> {
    value: &'a Value,
}

impl<'a> ParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// The node for property `name`, if this node is an object that has it.
    pub fn child_node(&self, name: &str) -> Option<ParseNode<'a>> {
        self.value.get(name).map(ParseNode::new)
    }

    /// The properties of this object, in input order.
    pub fn fields(&self) -> Result<impl Iterator<Item = (&'a str, ParseNode<'a>)>, Error> {
        let object = self
            .value
            .as_object()
            .ok_or_else(|| self.unexpected("an object"))?;
        Ok(object
            .iter()
            .map(|(name, value)| (name.as_str(), ParseNode::new(value))))
    }

    pub fn string_value(&self) -> Result<Option<String>, Error> {
        self.str_value().map(|value| value.map(str::to_string))
    }

    pub fn str_value(&self) -> Result<Option<&'a str>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value)),
            _ => Err(self.unexpected("a string")),
        }
    }

    pub fn bool_value(&self) -> Result<Option<bool>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.unexpected("a boolean")),
        }
    }

    pub fn i32_value(&self) -> Result<Option<i32>, Error> {
        self.i64_value()?
            .map(|value| i32::try_from(value).map_err(|_| self.unexpected("a 32-bit integer")))
            .transpose()
    }

    pub fn i64_value(&self) -> Result<Option<i64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.unexpected("an integer")),
            _ => Err(self.unexpected("an integer")),
        }
    }

    pub fn f32_value(&self) -> Result<Option<f32>, Error> {
        self.f64_value()?
            .map(|value| {
                let narrowed = value as f32;
                if narrowed.is_finite() {
                    Ok(narrowed)
                } else {
                    Err(self.unexpected("a 32-bit float"))
                }
            })
            .transpose()
    }

    pub fn f64_value(&self) -> Result<Option<f64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.unexpected("a number")),
            _ => Err(self.unexpected("a number")),
        }
    }

    /// An RFC 3339 timestamp, e.g. `2024-03-01T09:30:00Z`.
    pub fn time_value(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.str_value()?
            .map(|value| OffsetDateTime::parse(value, &Rfc3339).map_err(Error::from))
            .transpose()
    }

    /// A calendar date, e.g. `2024-03-01`.
    pub fn date_value(&self) -> Result<Option<Date>, Error> {
        self.str_value()?
            .map(|value| {
                Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(Error::from)
            })
            .transpose()
    }

    pub fn uuid_value(&self) -> Result<Option<Uuid>, Error> {
        self.str_value()?
            .map(|value| Uuid::parse_str(value).map_err(Error::from))
            .transpose()
    }

    /// A string-valued enum member. Unknown members are an error.
    pub fn enum_value<E: FromStr>(&self) -> Result<Option<E>, Error> {
        self.str_value()?
            .map(|value| {
                E::from_str(value).map_err(|_| Error::UnknownEnumValue {
                    name: short_type_name::<E>(),
                    value: value.to_string(),
                })
            })
            .transpose()
    }

    /// Decode a nested model: create an instance from the discriminator, then
    /// fill in its properties.
    pub fn object_value<T: Parsable>(&self) -> Result<Option<T>, Error> {
        if self.is_null() {
            return Ok(None);
        }

        let mut model = T::create_from_discriminator_value(self)?;
        self.assign_field_values(&mut model)?;
        Ok(Some(model))
    }

    /// Dispatch every property of this object to the model's field
    /// deserializers. Properties without one are kept in the model's
    /// additional data.
    pub fn assign_field_values<T: Parsable>(&self, model: &mut T) -> Result<(), Error> {
        let fields = self.fields()?;
        let deserializers = model.field_deserializers();

        for (name, node) in fields {
            match deserializers.get(name) {
                Some(deserialize) => {
                    deserialize(model, &node).map_err(|err| err.in_property(name))?
                }
                None => {
                    log::trace!(
                        "keeping undeclared property `{name}` of {}",
                        short_type_name::<T>()
                    );
                    model
                        .additional_data_mut()
                        .set_value(name, node.value().clone());
                }
            }
        }

        Ok(())
    }

    /// A collection of models. `null` elements are kept as `None` at their
    /// index.
    pub fn collection_of_object_values<T: Parsable>(
        &self,
    ) -> Result<Option<Vec<Option<T>>>, Error> {
        self.collection_with(|node| node.object_value())
    }

    /// A collection of strings. `null` elements are kept as `None`.
    pub fn collection_of_string_values(&self) -> Result<Option<Vec<Option<String>>>, Error> {
        self.collection_with(|node| node.string_value())
    }

    /// A collection of any primitive serde can decode from JSON.
    pub fn collection_of_primitive_values<T: DeserializeOwned>(
        &self,
    ) -> Result<Option<Vec<T>>, Error> {
        self.collection_with(|node| {
            T::deserialize(node.value).map_err(|err| {
                Error::UnexpectedResponse(format!(
                    "expected {}: {err}",
                    short_type_name::<T>()
                ))
            })
        })
    }

    fn collection_with<T, F>(&self, mut element: F) -> Result<Option<Vec<T>>, Error>
    where
        F: FnMut(ParseNode<'a>) -> Result<T, Error>,
    {
        let elements = match self.value {
            Value::Null => return Ok(None),
            Value::Array(elements) => elements,
            _ => return Err(self.unexpected("an array")),
        };

        elements
            .iter()
            .enumerate()
            .map(|(index, value)| {
                element(ParseNode::new(value)).map_err(|err| err.in_property(index.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn unexpected(&self, expected: &str) -> Error {
        let found = match self.value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        Error::UnexpectedResponse(format!("expected {expected}, found {found}"))
    }
}

/// The last path segment of a type's name, for diagnostics.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
