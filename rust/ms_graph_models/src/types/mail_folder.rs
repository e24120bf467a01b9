/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::types::entity::Entity;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// A folder in a user's mailbox, such as Inbox and Drafts.
#[derive(Clone, Debug, PartialEq)]
pub struct MailFolder {
    entity: Entity,
    child_folder_count: Property<i32>,
    display_name: Property<String>,
    is_hidden: Property<bool>,
    parent_folder_id: Property<String>,
    total_item_count: Property<i32>,
    unread_item_count: Property<i32>,
}

impl MailFolder {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.mailFolder";

    pub fn new() -> Self {
        Self {
            entity: Entity::tagged(Self::DISCRIMINATOR),
            child_folder_count: Property::Absent,
            display_name: Property::Absent,
            is_hidden: Property::Absent,
            parent_folder_id: Property::Absent,
            total_item_count: Property::Absent,
            unread_item_count: Property::Absent,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    property_accessors! {
        /// The number of immediate child mailFolders in the current mailFolder.
        child_folder_count: copy i32;

        /// The mailFolder's display name.
        display_name: deref String;

        /// Indicates whether the mailFolder is hidden.
        is_hidden: copy bool;

        /// The unique identifier for the mailFolder's parent mailFolder.
        parent_folder_id: deref String;

        /// The number of items in the mailFolder.
        total_item_count: copy i32;

        /// The number of items in the mailFolder marked as unread.
        unread_item_count: copy i32;
    }
}

impl Default for MailFolder {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for MailFolder {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.entity.field_deserializers(), |folder| {
            &mut folder.entity
        })
        .int32("childFolderCount", |folder| &mut folder.child_folder_count)
        .string("displayName", |folder| &mut folder.display_name)
        .boolean("isHidden", |folder| &mut folder.is_hidden)
        .string("parentFolderId", |folder| &mut folder.parent_folder_id)
        .int32("totalItemCount", |folder| &mut folder.total_item_count)
        .int32("unreadItemCount", |folder| &mut folder.unread_item_count)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_i32_value("childFolderCount", self.child_folder_count)?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_bool_value("isHidden", self.is_hidden)?;
        writer.write_string_value("parentFolderId", self.parent_folder_id.as_deref())?;
        writer.write_i32_value("totalItemCount", self.total_item_count)?;
        writer.write_i32_value("unreadItemCount", self.unread_item_count)
    }

    fn additional_data(&self) -> &PropertyStore {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.entity.additional_data_mut()
    }
}

impl AsRef<Entity> for MailFolder {
    fn as_ref(&self) -> &Entity {
        &self.entity
    }
}

impl AsMut<Entity> for MailFolder {
    fn as_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl_serde_via_parsable!(MailFolder);

#[cfg(test)]
mod tests {
    use super::MailFolder;
    use crate::test_utils::assert_round_trip;
    use crate::types::entity::AnyEntity;
    use crate::Error;

    #[test]
    fn counts_and_flags() {
        let folder: MailFolder = assert_round_trip(
            r##"{"id":"AAMkAGVmMDEz","@odata.type":"#microsoft.graph.mailFolder","childFolderCount":2,"displayName":"Inbox","isHidden":false,"parentFolderId":"AQMkAGVmMDEz","totalItemCount":40,"unreadItemCount":11}"##,
        );

        assert_eq!(folder.child_folder_count().unwrap(), Some(2));
        assert_eq!(folder.is_hidden().unwrap(), Some(false));
        assert_eq!(folder.unread_item_count().unwrap(), Some(11));
        assert_eq!(folder.entity().id().unwrap(), Some("AAMkAGVmMDEz"));
    }

    #[test]
    fn count_out_of_range() {
        let err = crate::parse::<AnyEntity>(
            r##"{"@odata.type":"#microsoft.graph.mailFolder","totalItemCount":4294967296}"##,
        )
        .unwrap_err();
        assert_eq!(err.property_path(), vec!["totalItemCount"]);
        assert!(matches!(err.root_cause(), Error::UnexpectedResponse(_)));
    }
}
