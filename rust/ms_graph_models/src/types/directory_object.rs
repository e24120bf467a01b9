/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use time::OffsetDateTime;

use crate::types::entity::Entity;
use crate::types::user::User;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// Represents a Microsoft Entra object.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryObject {
    entity: Entity,
    deleted_date_time: Property<OffsetDateTime>,
}

impl DirectoryObject {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.directoryObject";

    pub fn new() -> Self {
        Self::tagged(Self::DISCRIMINATOR)
    }

    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            entity: Entity::tagged(odata_type),
            deleted_date_time: Property::Absent,
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    property_accessors! {
        /// Date and time when this object was deleted. Always null when the
        /// object hasn't been deleted.
        deleted_date_time: copy OffsetDateTime;
    }
}

impl Default for DirectoryObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for DirectoryObject {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.entity.field_deserializers(), |object| {
            &mut object.entity
        })
        .time("deletedDateTime", |object| &mut object.deleted_date_time)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_time_value("deletedDateTime", self.deleted_date_time.as_ref())
    }

    fn additional_data(&self) -> &PropertyStore {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.entity.additional_data_mut()
    }
}

impl AsRef<Entity> for DirectoryObject {
    fn as_ref(&self) -> &Entity {
        &self.entity
    }
}

impl AsMut<Entity> for DirectoryObject {
    fn as_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl_serde_via_parsable!(DirectoryObject);

model_family! {
    /// A directory object or one of its derived types.
    pub enum AnyDirectoryObject {
        DirectoryObject(DirectoryObject),
        User(User),
    }
}

impl AnyDirectoryObject {
    /// The `directoryObject` part shared by every member of the family.
    pub fn directory_object(&self) -> &DirectoryObject {
        match self {
            AnyDirectoryObject::DirectoryObject(object) => object,
            AnyDirectoryObject::User(user) => user.directory_object(),
        }
    }

    pub fn directory_object_mut(&mut self) -> &mut DirectoryObject {
        match self {
            AnyDirectoryObject::DirectoryObject(object) => object,
            AnyDirectoryObject::User(user) => user.directory_object_mut(),
        }
    }
}
