/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Typed Microsoft Graph models.
//!
//! Each model is a plain struct whose declared properties are
//! [`Property`] values, plus a [`PropertyStore`] holding any properties the
//! schema doesn't know about. Polymorphic families (e.g. the subtypes of
//! `accessPackageQuestion`) are enums resolved from the `@odata.type`
//! discriminator through a static [`DiscriminatorRegistry`].
//!
//! Decoding walks a [`ParseNode`] and dispatches each input property through
//! the model's [`FieldDeserializers`]; encoding goes the other way through a
//! [`SerializationWriter`], in declaration order, with additional data last.

use serde_json::Value;
use thiserror::Error;

#[macro_use]
mod macros;

pub mod discriminator;
pub mod field_deserializers;
pub mod parsable;
pub mod parse_node;
pub mod property;
pub mod serialization_writer;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use discriminator::{DiscriminatorRegistry, ODATA_TYPE};
pub use field_deserializers::FieldDeserializers;
pub use parsable::Parsable;
pub use parse_node::ParseNode;
pub use property::Property;
pub use serialization_writer::{
    AbsentValues, JsonSerializationWriter, SerializationWriter, WriterOptions,
};
pub use store::PropertyStore;

#[derive(Debug, Error)]
pub enum Error {
    #[error("object does not have this property set")]
    NotFound,

    #[error("property has an unexpected type: {0}")]
    UnexpectedResponse(String),

    #[error("unknown value `{value}` for enum {name}")]
    UnknownEnumValue { name: &'static str, value: String },

    #[error("invalid value for property `{name}`: {source}")]
    Property { name: String, source: Box<Error> },

    #[error("an error occurred while (de)serializing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse a date or time value")]
    Time(#[from] time::error::Parse),

    #[error("failed to format a date or time value")]
    TimeFormat(#[from] time::error::Format),

    #[error("failed to parse a UUID value")]
    Uuid(#[from] uuid::Error),

    #[error("value cannot be represented in JSON: {0}")]
    Unrepresentable(String),
}

impl Error {
    /// Attribute this error to the named property of the enclosing object.
    pub fn in_property(self, name: impl Into<String>) -> Self {
        Error::Property {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The property names leading from the outermost object to the value that
    /// failed, e.g. `["questions", "0", "text"]`.
    pub fn property_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Error::Property { name, source } = current {
            path.push(name.as_str());
            current = source;
        }
        path
    }

    /// The innermost error, past any property attribution.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::Property { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Decode a model from JSON text.
pub fn parse<T: Parsable>(json: &str) -> Result<T, Error> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Decode a model from an already parsed JSON value.
pub fn from_value<T: Parsable>(value: &Value) -> Result<T, Error> {
    ParseNode::new(value)
        .object_value()?
        .ok_or_else(|| Error::UnexpectedResponse("expected an object, found null".to_string()))
}

/// Encode a model as a JSON value using the default [`WriterOptions`].
pub fn to_value<T: Parsable>(model: &T) -> Result<Value, Error> {
    to_value_with_options(model, WriterOptions::default())
}

pub fn to_value_with_options<T: Parsable>(
    model: &T,
    options: WriterOptions,
) -> Result<Value, Error> {
    let mut writer = JsonSerializationWriter::with_options(options);
    model.serialize_to(&mut writer)?;
    Ok(writer.into_value())
}

/// Encode a model as compact JSON text.
pub fn to_string<T: Parsable>(model: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(&to_value(model)?)?)
}

#[cfg(test)]
mod tests {
    use super::types::access_package_question::AnyAccessPackageQuestion;
    use super::types::entity::AnyEntity;
    use super::types::user::User;
    use super::{Error, Parsable, Property};

    #[test]
    fn deserialize_user() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
    "businessPhones": [],
    "displayName": "Adele Vance",
    "givenName": "Adele",
    "jobTitle": null,
    "mail": "AdeleV@M365x63639251.OnMicrosoft.com",
    "mobilePhone": null,
    "officeLocation": null,
    "preferredLanguage": null,
    "surname": "Vance",
    "userPrincipalName": "AdeleV@M365x63639251.OnMicrosoft.com",
    "id": "3a2bc284-f11c-4676-a9e1-6310eea60f26"
}"#;

        let parsed: User = serde_json::from_str(json).unwrap();

        // Decoding starts from `User::new()`, which is already tagged.
        let mut expected = User::new();
        expected.set_business_phones(Some(vec![]));
        expected.set_display_name(Some("Adele Vance".to_string()));
        expected.set_given_name(Some("Adele".to_string()));
        expected.set_job_title(None);
        expected.set_mail(Some("AdeleV@M365x63639251.OnMicrosoft.com".to_string()));
        expected.set_mobile_phone(None);
        expected.set_office_location(None);
        expected.set_preferred_language(None);
        expected.set_surname(Some("Vance".to_string()));
        expected.set_user_principal_name(Some("AdeleV@M365x63639251.OnMicrosoft.com".to_string()));
        expected
            .entity_mut()
            .set_id(Some("3a2bc284-f11c-4676-a9e1-6310eea60f26".to_string()));
        expected
            .additional_data_mut()
            .set(
                "@odata.context",
                "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
            )
            .unwrap();

        assert_eq!(parsed, expected);
        assert_eq!(
            parsed.entity().odata_type().unwrap(),
            Some("#microsoft.graph.user")
        );
        assert_eq!(parsed.job_title().unwrap(), None);
        assert!(matches!(parsed.account_enabled(), Err(Error::NotFound)));
    }

    /// The worked example: a text input question with an unknown property
    /// survives a decode/encode cycle.
    #[test]
    fn text_input_question_round_trip() {
        let json = r##"{"@odata.type":"#microsoft.graph.accessPackageTextInputQuestion","isSingleLineQuestion":true,"text":"Why?","unknownField":"x"}"##;

        let parsed: AnyAccessPackageQuestion = super::parse(json).unwrap();
        let AnyAccessPackageQuestion::TextInput(question) = &parsed else {
            panic!("expected a text input question, got {parsed:?}");
        };
        assert_eq!(question.is_single_line_question().unwrap(), Some(true));
        assert_eq!(question.question().text().unwrap(), Some("Why?"));
        assert_eq!(
            question.additional_data().get("unknownField"),
            Property::Value(&serde_json::json!("x"))
        );

        let encoded = super::to_string(&parsed).unwrap();
        assert_eq!(
            encoded,
            r##"{"@odata.type":"#microsoft.graph.accessPackageTextInputQuestion","text":"Why?","isSingleLineQuestion":true,"unknownField":"x"}"##
        );

        let reparsed: AnyAccessPackageQuestion = super::parse(&encoded).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn entity_family_dispatches_across_hierarchy() {
        let json = r##"{"@odata.type":"#microsoft.graph.user","id":"1","displayName":"Megan"}"##;
        let parsed: AnyEntity = super::parse(json).unwrap();
        let AnyEntity::User(user) = &parsed else {
            panic!("expected a user, got {parsed:?}");
        };
        assert_eq!(user.display_name().unwrap(), Some("Megan"));
        assert_eq!(parsed.entity().id().unwrap(), Some("1"));
    }

    #[test]
    fn malformed_json_reports_its_cause() {
        let err = super::parse::<User>(r#"{"id": "#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let message = err.to_string();
        assert!(
            message.starts_with("an error occurred while (de)serializing JSON: "),
            "{message}"
        );
        assert!(message.contains("line 1"), "{message}");
    }

    #[test]
    fn top_level_null_is_rejected() {
        let err = super::parse::<User>("null").unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn nested_errors_report_property_path() {
        let json = r##"{
            "@odata.type": "#microsoft.graph.accessPackageAssignmentPolicy",
            "questions": [
                {"@odata.type": "#microsoft.graph.accessPackageTextInputQuestion", "text": "ok"},
                {"@odata.type": "#microsoft.graph.accessPackageTextInputQuestion", "text": 42}
            ]
        }"##;
        let err = super::parse::<AnyEntity>(json).unwrap_err();
        assert_eq!(err.property_path(), vec!["questions", "1", "text"]);
        assert!(matches!(err.root_cause(), Error::UnexpectedResponse(_)));
    }
}
