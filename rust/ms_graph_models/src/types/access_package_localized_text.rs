/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
    ODATA_TYPE,
};

/// A piece of text in a specific language.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessPackageLocalizedText {
    odata_type: Property<String>,
    language_code: Property<String>,
    text: Property<String>,
    additional_data: PropertyStore,
}

impl AccessPackageLocalizedText {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.accessPackageLocalizedText";

    pub fn new() -> Self {
        Self::default()
    }

    property_accessors! {
        odata_type: deref String;

        /// The language code that text is in, e.g. `en-GB`.
        language_code: deref String;

        /// The question in the specified language.
        text: deref String;
    }
}

impl Parsable for AccessPackageLocalizedText {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::new()
            .string(ODATA_TYPE, |localized| &mut localized.odata_type)
            .string("languageCode", |localized| &mut localized.language_code)
            .string("text", |localized| &mut localized.text)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_string_value(ODATA_TYPE, self.odata_type.as_deref())?;
        writer.write_string_value("languageCode", self.language_code.as_deref())?;
        writer.write_string_value("text", self.text.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        &mut self.additional_data
    }
}

impl_serde_via_parsable!(AccessPackageLocalizedText);
