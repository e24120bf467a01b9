/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::types::access_package_question::AccessPackageQuestion;
use crate::types::entity::Entity;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// A question answered with free text.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessPackageTextInputQuestion {
    question: AccessPackageQuestion,
    is_single_line_question: Property<bool>,
    regex_pattern: Property<String>,
}

impl AccessPackageTextInputQuestion {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.accessPackageTextInputQuestion";

    pub fn new() -> Self {
        Self {
            question: AccessPackageQuestion::tagged(Self::DISCRIMINATOR),
            is_single_line_question: Property::Absent,
            regex_pattern: Property::Absent,
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
        /// Indicates whether the answer will be in single or multiple line
        /// format.
        is_single_line_question: copy bool;

        /// The regular expression pattern that any answer to this question
        /// must match.
        regex_pattern: deref String;
    }
}

impl Default for AccessPackageTextInputQuestion {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for AccessPackageTextInputQuestion {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.question.field_deserializers(), |question| {
            &mut question.question
        })
        .boolean("isSingleLineQuestion", |question| {
            &mut question.is_single_line_question
        })
        .string("regexPattern", |question| &mut question.regex_pattern)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.question.serialize_properties(writer)?;
        writer.write_bool_value("isSingleLineQuestion", self.is_single_line_question)?;
        writer.write_string_value("regexPattern", self.regex_pattern.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        self.question.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.question.additional_data_mut()
    }
}

impl AsRef<Entity> for AccessPackageTextInputQuestion {
    fn as_ref(&self) -> &Entity {
        self.entity()
    }
}

impl AsMut<Entity> for AccessPackageTextInputQuestion {
    fn as_mut(&mut self) -> &mut Entity {
        self.entity_mut()
    }
}

impl_serde_via_parsable!(AccessPackageTextInputQuestion);
