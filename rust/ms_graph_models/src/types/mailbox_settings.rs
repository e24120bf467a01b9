/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use strum::{Display, EnumString};

use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
    ODATA_TYPE,
};

/// Who receives meeting messages and responses for a mailbox with
/// delegates.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum DelegateMeetingMessageDeliveryOptions {
    SendToDelegateAndInformationToPrincipal,
    SendToDelegateAndPrincipal,
    SendToDelegateOnly,
}

/// Settings for the primary mailbox of a user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MailboxSettings {
    odata_type: Property<String>,
    archive_folder: Property<String>,
    date_format: Property<String>,
    delegate_meeting_message_delivery_options: Property<DelegateMeetingMessageDeliveryOptions>,
    time_format: Property<String>,
    time_zone: Property<String>,
    additional_data: PropertyStore,
}

impl MailboxSettings {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.mailboxSettings";

    pub fn new() -> Self {
        Self::default()
    }

    property_accessors! {
        odata_type: deref String;

        /// Folder ID of an archive folder for the user.
        archive_folder: deref String;

        /// The date format for the user's mailbox.
        date_format: deref String;

        /// Who should receive meeting messages and meeting responses.
        delegate_meeting_message_delivery_options: copy DelegateMeetingMessageDeliveryOptions;

        /// The time format for the user's mailbox.
        time_format: deref String;

        /// The default time zone for the user's mailbox.
        time_zone: deref String;
    }
}

impl Parsable for MailboxSettings {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::new()
            .string(ODATA_TYPE, |settings| &mut settings.odata_type)
            .string("archiveFolder", |settings| &mut settings.archive_folder)
            .string("dateFormat", |settings| &mut settings.date_format)
            .enumeration("delegateMeetingMessageDeliveryOptions", |settings| {
                &mut settings.delegate_meeting_message_delivery_options
            })
            .string("timeFormat", |settings| &mut settings.time_format)
            .string("timeZone", |settings| &mut settings.time_zone)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_string_value(ODATA_TYPE, self.odata_type.as_deref())?;
        writer.write_string_value("archiveFolder", self.archive_folder.as_deref())?;
        writer.write_string_value("dateFormat", self.date_format.as_deref())?;
        writer.write_enum_value(
            "delegateMeetingMessageDeliveryOptions",
            self.delegate_meeting_message_delivery_options.as_ref(),
        )?;
        writer.write_string_value("timeFormat", self.time_format.as_deref())?;
        writer.write_string_value("timeZone", self.time_zone.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        &mut self.additional_data
    }
}

impl_serde_via_parsable!(MailboxSettings);

#[cfg(test)]
mod tests {
    use super::{DelegateMeetingMessageDeliveryOptions, MailboxSettings};
    use crate::test_utils::{assert_deserialized_content, assert_round_trip};
    use crate::Error;

    #[test]
    fn deserialize_mailbox_settings() {
        let mut expected = MailboxSettings::new();
        expected.set_odata_type(Some(MailboxSettings::DISCRIMINATOR.to_string()));
        expected.set_archive_folder(Some("AAMkAGI2TGuLAAA=".to_string()));
        expected.set_date_format(Some("MM/dd/yyyy".to_string()));
        expected.set_time_format(None);
        expected.set_time_zone(Some("UTC".to_string()));

        assert_deserialized_content(
            r##"{
                "@odata.type": "#microsoft.graph.mailboxSettings",
                "archiveFolder": "AAMkAGI2TGuLAAA=",
                "dateFormat": "MM/dd/yyyy",
                "timeFormat": null,
                "timeZone": "UTC"
            }"##,
            expected,
        );
    }

    #[test]
    fn enum_round_trip() {
        let settings: MailboxSettings = assert_round_trip(
            r#"{"delegateMeetingMessageDeliveryOptions":"sendToDelegateAndInformationToPrincipal"}"#,
        );
        assert_eq!(
            settings.delegate_meeting_message_delivery_options().unwrap(),
            Some(DelegateMeetingMessageDeliveryOptions::SendToDelegateAndInformationToPrincipal)
        );
    }

    #[test]
    fn unknown_enum_member_is_an_error() {
        let err = crate::parse::<MailboxSettings>(
            r#"{"delegateMeetingMessageDeliveryOptions":"sendToNobody"}"#,
        )
        .unwrap_err();

        assert_eq!(
            err.property_path(),
            vec!["delegateMeetingMessageDeliveryOptions"]
        );
        assert!(matches!(
            err.root_cause(),
            Error::UnknownEnumValue {
                name: "DelegateMeetingMessageDeliveryOptions",
                ..
            }
        ));
    }
}
