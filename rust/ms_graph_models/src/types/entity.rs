/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::types::access_package_assignment_policy::AccessPackageAssignmentPolicy;
use crate::types::access_package_multiple_choice_question::AccessPackageMultipleChoiceQuestion;
use crate::types::access_package_question::{AccessPackageQuestion, AnyAccessPackageQuestion};
use crate::types::access_package_text_input_question::AccessPackageTextInputQuestion;
use crate::types::directory_object::{AnyDirectoryObject, DirectoryObject};
use crate::types::mail_folder::MailFolder;
use crate::types::user::User;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
    ODATA_TYPE,
};

/// The root of every Graph entity type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    id: Property<String>,
    odata_type: Property<String>,
    additional_data: PropertyStore,
}

impl Entity {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.entity";

    /// An empty entity. Unlike the constructors of derived types, this leaves
    /// `@odata.type` unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty entity already carrying the discriminator of a derived type.
    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            odata_type: Property::Value(odata_type.to_string()),
            ..Self::default()
        }
    }

    property_accessors! {
        /// The unique identifier for an entity. Read-only.
        id: deref String;

        /// The fully qualified Graph type of this object, e.g.
        /// `#microsoft.graph.user`.
        odata_type: deref String;
    }
}

impl Parsable for Entity {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::new()
            .string("id", |entity| &mut entity.id)
            .string(ODATA_TYPE, |entity| &mut entity.odata_type)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value(ODATA_TYPE, self.odata_type.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        &mut self.additional_data
    }
}

impl AsRef<Entity> for Entity {
    fn as_ref(&self) -> &Entity {
        self
    }
}

impl AsMut<Entity> for Entity {
    fn as_mut(&mut self) -> &mut Entity {
        self
    }
}

impl_serde_via_parsable!(Entity);

model_family! {
    /// Any entity type known to this crate, resolved from `@odata.type`.
    pub enum AnyEntity {
        Entity(Entity),
        DirectoryObject(DirectoryObject),
        User(User),
        MailFolder(MailFolder),
        AccessPackageQuestion(AccessPackageQuestion),
        AccessPackageTextInputQuestion(AccessPackageTextInputQuestion),
        AccessPackageMultipleChoiceQuestion(AccessPackageMultipleChoiceQuestion),
        AccessPackageAssignmentPolicy(AccessPackageAssignmentPolicy),
    }
}

impl From<AnyDirectoryObject> for AnyEntity {
    fn from(object: AnyDirectoryObject) -> Self {
        match object {
            AnyDirectoryObject::DirectoryObject(object) => AnyEntity::DirectoryObject(object),
            AnyDirectoryObject::User(user) => AnyEntity::User(user),
        }
    }
}

impl From<AnyAccessPackageQuestion> for AnyEntity {
    fn from(question: AnyAccessPackageQuestion) -> Self {
        match question {
            AnyAccessPackageQuestion::Question(question) => AnyEntity::AccessPackageQuestion(question),
            AnyAccessPackageQuestion::TextInput(question) => {
                AnyEntity::AccessPackageTextInputQuestion(question)
            }
            AnyAccessPackageQuestion::MultipleChoice(question) => {
                AnyEntity::AccessPackageMultipleChoiceQuestion(question)
            }
        }
    }
}
