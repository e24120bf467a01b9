/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::types::access_package_answer_choice::AccessPackageAnswerChoice;
use crate::types::access_package_question::AccessPackageQuestion;
use crate::types::entity::Entity;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// A question answered by picking from a fixed set of choices.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessPackageMultipleChoiceQuestion {
    question: AccessPackageQuestion,
    allows_multiple_selection: Property<bool>,
    choices: Property<Vec<Option<AccessPackageAnswerChoice>>>,
}

impl AccessPackageMultipleChoiceQuestion {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.accessPackageMultipleChoiceQuestion";

    pub fn new() -> Self {
        Self {
            question: AccessPackageQuestion::tagged(Self::DISCRIMINATOR),
            allows_multiple_selection: Property::Absent,
            choices: Property::Absent,
        }
    }

    /// Accessor to inherited properties from `AccessPackageQuestion`.
    pub fn question(&self) -> &AccessPackageQuestion {
        &self.question
    }

    pub fn question_mut(&mut self) -> &mut AccessPackageQuestion {
        &mut self.question
    }

    pub fn entity(&self) -> &Entity {
        self.question.entity()
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        self.question.entity_mut()
    }

    property_accessors! {
        /// Indicates whether requestor can select multiple choices as their
        /// answer.
        allows_multiple_selection: copy bool;

        /// List of answer choices.
        choices: deref Vec<Option<AccessPackageAnswerChoice>>;
    }
}

impl Default for AccessPackageMultipleChoiceQuestion {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for AccessPackageMultipleChoiceQuestion {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.question.field_deserializers(), |question| {
            &mut question.question
        })
        .boolean("allowsMultipleSelection", |question| {
            &mut question.allows_multiple_selection
        })
        .objects("choices", |question| &mut question.choices)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.question.serialize_properties(writer)?;
        writer.write_bool_value("allowsMultipleSelection", self.allows_multiple_selection)?;
        writer.write_collection_of_object_values("choices", self.choices.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        self.question.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.question.additional_data_mut()
    }
}

impl AsRef<Entity> for AccessPackageMultipleChoiceQuestion {
    fn as_ref(&self) -> &Entity {
        self.entity()
    }
}

impl AsMut<Entity> for AccessPackageMultipleChoiceQuestion {
    fn as_mut(&mut self) -> &mut Entity {
        self.entity_mut()
    }
}

impl_serde_via_parsable!(AccessPackageMultipleChoiceQuestion);
