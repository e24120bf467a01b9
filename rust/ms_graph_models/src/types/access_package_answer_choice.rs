/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::types::access_package_localized_text::AccessPackageLocalizedText;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
    ODATA_TYPE,
};

/// One of the options offered by a multiple choice question.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessPackageAnswerChoice {
    odata_type: Property<String>,
    actual_value: Property<String>,
    localizations: Property<Vec<Option<AccessPackageLocalizedText>>>,
    text: Property<String>,
    additional_data: PropertyStore,
}

impl AccessPackageAnswerChoice {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.accessPackageAnswerChoice";

    pub fn new() -> Self {
        Self::default()
    }

    property_accessors! {
        odata_type: deref String;

        /// The actual value of the selected choice. This is typically a
        /// string value which is understandable by applications.
        actual_value: deref String;

        /// The text of the answer choice represented in a format for a
        /// specific locale.
        localizations: deref Vec<Option<AccessPackageLocalizedText>>;

        /// The string to display for this answer; if an Accept-Language
        /// header is provided, and there is a matching localization, that
        /// localization is used instead.
        text: deref String;
    }
}

impl Parsable for AccessPackageAnswerChoice {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::new()
            .string(ODATA_TYPE, |choice| &mut choice.odata_type)
            .string("actualValue", |choice| &mut choice.actual_value)
            .objects("localizations", |choice| &mut choice.localizations)
            .string("text", |choice| &mut choice.text)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_string_value(ODATA_TYPE, self.odata_type.as_deref())?;
        writer.write_string_value("actualValue", self.actual_value.as_deref())?;
        writer.write_collection_of_object_values("localizations", self.localizations.as_deref())?;
        writer.write_string_value("text", self.text.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        &mut self.additional_data
    }
}

impl_serde_via_parsable!(AccessPackageAnswerChoice);
