/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use time::OffsetDateTime;

use crate::types::directory_object::DirectoryObject;
use crate::types::entity::Entity;
use crate::types::mailbox_settings::MailboxSettings;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// Represents a Microsoft Entra user account.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    directory_object: DirectoryObject,
    account_enabled: Property<bool>,
    business_phones: Property<Vec<Option<String>>>,
    created_date_time: Property<OffsetDateTime>,
    display_name: Property<String>,
    given_name: Property<String>,
    job_title: Property<String>,
    mail: Property<String>,
    mailbox_settings: Property<MailboxSettings>,
    mobile_phone: Property<String>,
    office_location: Property<String>,
    preferred_language: Property<String>,
    surname: Property<String>,
    user_principal_name: Property<String>,
}

impl User {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.user";

    pub fn new() -> Self {
        Self {
            directory_object: DirectoryObject::tagged(Self::DISCRIMINATOR),
            account_enabled: Property::Absent,
            business_phones: Property::Absent,
            created_date_time: Property::Absent,
            display_name: Property::Absent,
            given_name: Property::Absent,
            job_title: Property::Absent,
            mail: Property::Absent,
            mailbox_settings: Property::Absent,
            mobile_phone: Property::Absent,
            office_location: Property::Absent,
            preferred_language: Property::Absent,
            surname: Property::Absent,
            user_principal_name: Property::Absent,
        }
    }

    /// Accessor to inherited properties from `DirectoryObject`.
    pub fn directory_object(&self) -> &DirectoryObject {
        &self.directory_object
    }

    pub fn directory_object_mut(&mut self) -> &mut DirectoryObject {
        &mut self.directory_object
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&self) -> &Entity {
        self.directory_object.entity()
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        self.directory_object.entity_mut()
    }

    property_accessors! {
        /// true if the account is enabled; otherwise, false.
        account_enabled: copy bool;

        /// The telephone numbers for the user. Only one number can be set.
        business_phones: deref Vec<Option<String>>;

        /// The date and time the user was created, in ISO 8601 format and UTC.
        created_date_time: copy OffsetDateTime;

        /// The name displayed in the address book for the user.
        display_name: deref String;

        /// The given name (first name) of the user.
        given_name: deref String;

        /// The user's job title.
        job_title: deref String;

        /// The SMTP address for the user, for example, jeff@contoso.com.
        mail: deref String;

        /// Settings for the primary mailbox of the signed-in user.
        mailbox_settings: ref MailboxSettings;

        /// The primary cellular telephone number for the user.
        mobile_phone: deref String;

        /// The office location in the user's place of business.
        office_location: deref String;

        /// The preferred language for the user, e.g. `en-US`.
        preferred_language: deref String;

        /// The user's surname (family name or last name).
        surname: deref String;

        /// The user principal name (UPN) of the user.
        user_principal_name: deref String;
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for User {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.directory_object.field_deserializers(), |user| {
            &mut user.directory_object
        })
        .boolean("accountEnabled", |user| &mut user.account_enabled)
        .strings("businessPhones", |user| &mut user.business_phones)
        .time("createdDateTime", |user| &mut user.created_date_time)
        .string("displayName", |user| &mut user.display_name)
        .string("givenName", |user| &mut user.given_name)
        .string("jobTitle", |user| &mut user.job_title)
        .string("mail", |user| &mut user.mail)
        .object("mailboxSettings", |user| &mut user.mailbox_settings)
        .string("mobilePhone", |user| &mut user.mobile_phone)
        .string("officeLocation", |user| &mut user.office_location)
        .string("preferredLanguage", |user| &mut user.preferred_language)
        .string("surname", |user| &mut user.surname)
        .string("userPrincipalName", |user| &mut user.user_principal_name)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.directory_object.serialize_properties(writer)?;
        writer.write_bool_value("accountEnabled", self.account_enabled)?;
        writer.write_collection_of_string_values("businessPhones", self.business_phones.as_deref())?;
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("givenName", self.given_name.as_deref())?;
        writer.write_string_value("jobTitle", self.job_title.as_deref())?;
        writer.write_string_value("mail", self.mail.as_deref())?;
        writer.write_object_value("mailboxSettings", self.mailbox_settings.as_ref())?;
        writer.write_string_value("mobilePhone", self.mobile_phone.as_deref())?;
        writer.write_string_value("officeLocation", self.office_location.as_deref())?;
        writer.write_string_value("preferredLanguage", self.preferred_language.as_deref())?;
        writer.write_string_value("surname", self.surname.as_deref())?;
        writer.write_string_value("userPrincipalName", self.user_principal_name.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        self.directory_object.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.directory_object.additional_data_mut()
    }
}

impl AsRef<Entity> for User {
    fn as_ref(&self) -> &Entity {
        self.entity()
    }
}

impl AsMut<Entity> for User {
    fn as_mut(&mut self) -> &mut Entity {
        self.entity_mut()
    }
}

impl_serde_via_parsable!(User);
