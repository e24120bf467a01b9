/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Encoding of models into JSON.

use std::fmt::Display;

use serde_json::{Map, Number, Value};
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};
use uuid::Uuid;

use crate::{Error, Parsable, Property, PropertyStore};

/// How to encode a declared property that was never set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AbsentValues {
    /// Leave it out of the output.
    #[default]
    Omit,

    /// Write it as `null`, like an explicitly null property.
    Null,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterOptions {
    pub absent: AbsentValues,
}

/// A sink for the properties of one object.
///
/// Properties are written in the order the methods are called. Models write
/// their ancestors' properties before their own, and their additional data
/// last.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Property<&str>) -> Result<(), Error>;

    fn write_bool_value(&mut self, key: &str, value: Property<bool>) -> Result<(), Error>;

    fn write_i32_value(&mut self, key: &str, value: Property<i32>) -> Result<(), Error>;

    fn write_i64_value(&mut self, key: &str, value: Property<i64>) -> Result<(), Error>;

    fn write_f32_value(&mut self, key: &str, value: Property<f32>) -> Result<(), Error>;

    fn write_f64_value(&mut self, key: &str, value: Property<f64>) -> Result<(), Error>;

    fn write_object_value<T: Parsable>(
        &mut self,
        key: &str,
        value: Property<&T>,
    ) -> Result<(), Error>;

    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Property<&[Option<T>]>,
    ) -> Result<(), Error>;

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Property<&[Option<String>]>,
    ) -> Result<(), Error>;

    /// Write the undeclared properties of a model, in their stored order.
    fn write_additional_data(&mut self, data: &PropertyStore) -> Result<(), Error>;

    /// Write an RFC 3339 timestamp.
    fn write_time_value(
        &mut self,
        key: &str,
        value: Property<&OffsetDateTime>,
    ) -> Result<(), Error> {
        let formatted = value.try_map(|value| value.format(&Rfc3339))?;
        self.write_string_value(key, formatted.as_deref())
    }

    fn write_date_value(&mut self, key: &str, value: Property<&Date>) -> Result<(), Error> {
        let formatted =
            value.try_map(|value| value.format(format_description!("[year]-[month]-[day]")))?;
        self.write_string_value(key, formatted.as_deref())
    }

    fn write_uuid_value(&mut self, key: &str, value: Property<&Uuid>) -> Result<(), Error> {
        let formatted = value.map(|value| value.hyphenated().to_string());
        self.write_string_value(key, formatted.as_deref())
    }

    /// Write an enum member by its wire name.
    fn write_enum_value<E: Display>(&mut self, key: &str, value: Property<&E>) -> Result<(), Error> {
        let formatted = value.map(ToString::to_string);
        self.write_string_value(key, formatted.as_deref())
    }
}

/// Builds a JSON object, preserving the order properties are written in.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    options: WriterOptions,
    output: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            options,
            output: Map::new(),
        }
    }

    pub fn options(&self) -> WriterOptions {
        self.options
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.output)
    }

    pub fn into_string(self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.into_value())?)
    }

    /// Encode a nested model with the same options as this writer.
    fn object_to_value<T: Parsable>(&self, model: &T) -> Result<Value, Error> {
        let mut writer = Self::with_options(self.options);
        model.serialize_to(&mut writer)?;
        Ok(writer.into_value())
    }

    fn write_value(&mut self, key: &str, value: Property<Value>) -> Result<(), Error> {
        let value = match value {
            Property::Value(value) => value,
            Property::Null => Value::Null,
            Property::Absent => match self.options.absent {
                AbsentValues::Omit => return Ok(()),
                AbsentValues::Null => Value::Null,
            },
        };

        if self.output.insert(key.to_string(), value).is_some() {
            log::warn!("property `{key}` was written more than once");
        }

        Ok(())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Property<&str>) -> Result<(), Error> {
        self.write_value(key, value.map(|value| Value::String(value.to_string())))
    }

    fn write_bool_value(&mut self, key: &str, value: Property<bool>) -> Result<(), Error> {
        self.write_value(key, value.map(Value::Bool))
    }

    fn write_i32_value(&mut self, key: &str, value: Property<i32>) -> Result<(), Error> {
        self.write_value(key, value.map(Value::from))
    }

    fn write_i64_value(&mut self, key: &str, value: Property<i64>) -> Result<(), Error> {
        self.write_value(key, value.map(Value::from))
    }

    fn write_f32_value(&mut self, key: &str, value: Property<f32>) -> Result<(), Error> {
        self.write_f64_value(key, value.map(f64::from))
    }

    fn write_f64_value(&mut self, key: &str, value: Property<f64>) -> Result<(), Error> {
        let value = value.try_map(|value| {
            Number::from_f64(value)
                .map(Value::Number)
                .ok_or_else(|| Error::Unrepresentable(format!("`{key}` is {value}")))
        })?;
        self.write_value(key, value)
    }

    fn write_object_value<T: Parsable>(
        &mut self,
        key: &str,
        value: Property<&T>,
    ) -> Result<(), Error> {
        let value = value.try_map(|model| self.object_to_value(model))?;
        self.write_value(key, value)
    }

    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Property<&[Option<T>]>,
    ) -> Result<(), Error> {
        let values = values.try_map(|models| {
            models
                .iter()
                .map(|model| match model {
                    Some(model) => self.object_to_value(model),
                    None => Ok(Value::Null),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        })?;
        self.write_value(key, values)
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Property<&[Option<String>]>,
    ) -> Result<(), Error> {
        let values = values.map(|values| {
            Value::Array(
                values
                    .iter()
                    .map(|value| value.clone().map_or(Value::Null, Value::String))
                    .collect(),
            )
        });
        self.write_value(key, values)
    }

    fn write_additional_data(&mut self, data: &PropertyStore) -> Result<(), Error> {
        for (key, value) in data.iter() {
            if self.output.contains_key(key) {
                log::warn!("additional property `{key}` shadows a declared property, skipping");
                continue;
            }
            self.output.insert(key.to_string(), value.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::{date, datetime};
    use uuid::Uuid;

    use super::{AbsentValues, JsonSerializationWriter, SerializationWriter, WriterOptions};
    use crate::types::mailbox_settings::MailboxSettings;
    use crate::{Error, Property, PropertyStore};

    #[test]
    fn absent_values_follow_options() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("absent", Property::Absent).unwrap();
        writer.write_string_value("null", Property::Null).unwrap();
        assert_eq!(writer.into_value(), json!({ "null": null }));

        let mut writer = JsonSerializationWriter::with_options(WriterOptions {
            absent: AbsentValues::Null,
        });
        writer.write_string_value("absent", Property::Absent).unwrap();
        writer.write_string_value("null", Property::Null).unwrap();
        assert_eq!(writer.into_value(), json!({ "absent": null, "null": null }));
    }

    #[test]
    fn keeps_write_order() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_i32_value("zeta", Property::Value(1)).unwrap();
        writer.write_bool_value("alpha", Property::Value(false)).unwrap();
        writer.write_i64_value("mid", Property::Value(-2)).unwrap();
        writer
            .write_collection_of_string_values(
                "tags",
                Property::Value(&[Some("x".to_string()), None][..]),
            )
            .unwrap();

        assert_eq!(
            writer.into_string().unwrap(),
            r#"{"zeta":1,"alpha":false,"mid":-2,"tags":["x",null]}"#
        );
    }

    #[test]
    fn formatted_values() {
        let mut writer = JsonSerializationWriter::new();
        writer
            .write_time_value("when", Property::Value(&datetime!(2024-03-01 9:30 UTC)))
            .unwrap();
        writer
            .write_date_value("day", Property::Value(&date!(2024-03-01)))
            .unwrap();
        writer.write_f32_value("half", Property::Value(0.5)).unwrap();

        assert_eq!(
            writer.into_value(),
            json!({ "when": "2024-03-01T09:30:00Z", "day": "2024-03-01", "half": 0.5 })
        );
    }

    #[test]
    fn uuids_are_hyphenated_lowercase() {
        let id = Uuid::from_u128(0x1D0DBF2B_8E9C_4B4F_9A4A_4B8E2F8E0D8A);

        let mut writer = JsonSerializationWriter::new();
        writer.write_uuid_value("id", Property::Value(&id)).unwrap();
        writer.write_uuid_value("other", Property::Null).unwrap();

        assert_eq!(
            writer.into_value(),
            json!({ "id": "1d0dbf2b-8e9c-4b4f-9a4a-4b8e2f8e0d8a", "other": null })
        );
    }

    #[test]
    fn unformattable_time_is_an_error() {
        // RFC 3339 offsets have no seconds component.
        let mut writer = JsonSerializationWriter::new();
        let err = writer
            .write_time_value("when", Property::Value(&datetime!(2024-03-01 9:30 +01:00:30)))
            .unwrap_err();
        assert!(matches!(err, Error::TimeFormat(_)));
        assert_eq!(writer.into_value(), json!({}));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut writer = JsonSerializationWriter::new();
        let err = writer
            .write_f64_value("ratio", Property::Value(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, Error::Unrepresentable(_)));
        assert_eq!(writer.into_value(), json!({}));
    }

    #[test]
    fn declared_properties_win_over_additional_data() {
        let mut data = PropertyStore::new();
        data.set("text", "from additional data").unwrap();
        data.set("extra", 1).unwrap();

        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("text", Property::Value("declared")).unwrap();
        writer.write_additional_data(&data).unwrap();

        assert_eq!(
            writer.into_string().unwrap(),
            r#"{"text":"declared","extra":1}"#
        );
    }

    #[test]
    fn nested_objects_inherit_options() {
        let mut settings = MailboxSettings::new();
        settings.set_time_zone(Some("UTC".to_string()));

        let mut writer = JsonSerializationWriter::with_options(WriterOptions {
            absent: AbsentValues::Null,
        });
        writer
            .write_object_value("mailboxSettings", Property::Value(&settings))
            .unwrap();

        let value = writer.into_value();
        assert_eq!(value["mailboxSettings"]["timeZone"], json!("UTC"));
        assert_eq!(value["mailboxSettings"]["dateFormat"], json!(null));
        assert!(value["mailboxSettings"]
            .as_object()
            .unwrap()
            .contains_key("archiveFolder"));
    }
}
