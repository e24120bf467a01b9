/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::types::access_package_localized_text::AccessPackageLocalizedText;
use crate::types::access_package_multiple_choice_question::AccessPackageMultipleChoiceQuestion;
use crate::types::access_package_text_input_question::AccessPackageTextInputQuestion;
use crate::types::entity::Entity;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// A question asked of the requestor when they request an access package.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessPackageQuestion {
    entity: Entity,
    is_answer_editable: Property<bool>,
    is_required: Property<bool>,
    localizations: Property<Vec<Option<AccessPackageLocalizedText>>>,
    sequence: Property<i32>,
    text: Property<String>,
}

impl AccessPackageQuestion {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.accessPackageQuestion";

    pub fn new() -> Self {
        Self::tagged(Self::DISCRIMINATOR)
    }

    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            entity: Entity::tagged(odata_type),
            is_answer_editable: Property::Absent,
            is_required: Property::Absent,
            localizations: Property::Absent,
            sequence: Property::Absent,
            text: Property::Absent,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    property_accessors! {
        /// Specifies whether the requestor is allowed to edit answers to
        /// questions for an assignment by posting an update to
        /// accessPackageAssignmentRequest.
        is_answer_editable: copy bool;

        /// Whether the requestor is required to supply an answer or not.
        is_required: copy bool;

        /// The text of the question represented in a format for a specific
        /// locale.
        localizations: deref Vec<Option<AccessPackageLocalizedText>>;

        /// Relative position of this question when displaying a list of
        /// questions to the requestor.
        sequence: copy i32;

        /// The text of the question to show to the requestor.
        text: deref String;
    }
}

impl Default for AccessPackageQuestion {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for AccessPackageQuestion {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.entity.field_deserializers(), |question| {
            &mut question.entity
        })
        .boolean("isAnswerEditable", |question| &mut question.is_answer_editable)
        .boolean("isRequired", |question| &mut question.is_required)
        .objects("localizations", |question| &mut question.localizations)
        .int32("sequence", |question| &mut question.sequence)
        .string("text", |question| &mut question.text)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_bool_value("isAnswerEditable", self.is_answer_editable)?;
        writer.write_bool_value("isRequired", self.is_required)?;
        writer.write_collection_of_object_values("localizations", self.localizations.as_deref())?;
        writer.write_i32_value("sequence", self.sequence)?;
        writer.write_string_value("text", self.text.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.entity.additional_data_mut()
    }
}

impl AsRef<Entity> for AccessPackageQuestion {
    fn as_ref(&self) -> &Entity {
        &self.entity
    }
}

impl AsMut<Entity> for AccessPackageQuestion {
    fn as_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl_serde_via_parsable!(AccessPackageQuestion);

model_family! {
    /// A question of any of the kinds an access package policy can ask.
    pub enum AnyAccessPackageQuestion {
        Question(AccessPackageQuestion),
        TextInput(AccessPackageTextInputQuestion),
        MultipleChoice(AccessPackageMultipleChoiceQuestion),
    }
}

impl AnyAccessPackageQuestion {
    /// The properties shared by every kind of question.
    pub fn question(&self) -> &AccessPackageQuestion {
        match self {
            AnyAccessPackageQuestion::Question(question) => question,
            AnyAccessPackageQuestion::TextInput(question) => question.question(),
            AnyAccessPackageQuestion::MultipleChoice(question) => question.question(),
        }
    }

    pub fn question_mut(&mut self) -> &mut AccessPackageQuestion {
        match self {
            AnyAccessPackageQuestion::Question(question) => question,
            AnyAccessPackageQuestion::TextInput(question) => question.question_mut(),
            AnyAccessPackageQuestion::MultipleChoice(question) => question.question_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AccessPackageQuestion, AnyAccessPackageQuestion};
    use crate::test_utils::{assert_round_trip, assert_serialized_json};
    use crate::types::access_package_multiple_choice_question::AccessPackageMultipleChoiceQuestion;
    use crate::{Parsable, Property};

    #[test]
    fn base_question_with_localizations() {
        let parsed: AnyAccessPackageQuestion = assert_round_trip(
            r##"{"id":"q1","@odata.type":"#microsoft.graph.accessPackageQuestion","isAnswerEditable":true,"isRequired":false,"localizations":[{"languageCode":"es-ES","text":"¿Por qué?"}],"sequence":1,"text":"Why?"}"##,
        );

        let AnyAccessPackageQuestion::Question(question) = &parsed else {
            panic!("expected a base question, got {parsed:?}");
        };
        assert_eq!(question.sequence().unwrap(), Some(1));
        assert_eq!(question.is_required().unwrap(), Some(false));
        assert_eq!(
            question.localizations().unwrap().unwrap()[0]
                .as_ref()
                .unwrap()
                .text()
                .unwrap(),
            Some("¿Por qué?")
        );
    }

    #[test]
    fn unknown_question_kind_keeps_its_data() {
        let parsed: AnyAccessPackageQuestion = crate::parse(
            r##"{"@odata.type":"#microsoft.graph.accessPackageRatingQuestion","text":"Rate us","maxRating":5}"##,
        )
        .unwrap();

        assert!(matches!(parsed, AnyAccessPackageQuestion::Question(_)));
        assert_eq!(parsed.question().text().unwrap(), Some("Rate us"));
        assert_eq!(
            parsed.additional_data().get("maxRating"),
            Property::Value(&json!(5))
        );
    }

    #[test]
    fn table_includes_inherited_properties() {
        let table = AccessPackageMultipleChoiceQuestion::new().field_deserializers();
        for name in ["id", "@odata.type", "text", "sequence", "choices"] {
            assert!(table.contains(name), "{name} is missing");
        }

        let question = AnyAccessPackageQuestion::from(AccessPackageMultipleChoiceQuestion::new());
        assert_eq!(question.field_deserializers().len(), table.len());
    }

    #[test]
    fn question_constructor_presets_discriminator() {
        let mut question = AccessPackageQuestion::new();
        question.set_text(Some("Why?".to_string()));

        assert_serialized_json(
            &question,
            r##"{"@odata.type":"#microsoft.graph.accessPackageQuestion","text":"Why?"}"##,
        );
    }
}
