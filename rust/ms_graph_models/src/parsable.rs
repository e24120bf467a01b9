/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::parse_node::short_type_name;
use crate::{Error, FieldDeserializers, ParseNode, PropertyStore, SerializationWriter};

/// A Graph model that can be decoded from a [`ParseNode`] and encoded through
/// a [`SerializationWriter`].
pub trait Parsable: Sized + 'static {
    /// Create an empty instance of the type described by `node`.
    ///
    /// For polymorphic families this inspects the `@odata.type` discriminator;
    /// concrete types return an instance of themselves. Properties are filled
    /// in afterwards through [`Self::field_deserializers`].
    fn create_from_discriminator_value(node: &ParseNode<'_>) -> Result<Self, Error>;

    /// The decoders for every property this instance declares, including
    /// those inherited from its ancestors.
    fn field_deserializers(&self) -> FieldDeserializers<Self>;

    /// Write every declared property, ancestors' first, in declaration order.
    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error>;

    /// Properties present in the input but not declared by the schema.
    fn additional_data(&self) -> &PropertyStore;

    fn additional_data_mut(&mut self) -> &mut PropertyStore;

    /// Write the declared properties, followed by the additional data.
    ///
    /// An additional entry named like a declared property is still written
    /// when the declared one is absent, and decodes back into the declared
    /// property.
    fn serialize_to<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        if !self.additional_data().is_empty() {
            let declared = self.field_deserializers();
            for key in self.additional_data().keys() {
                if declared.contains(key) {
                    log::warn!(
                        "additional property `{key}` of {} is also a declared property",
                        short_type_name::<Self>()
                    );
                }
            }
        }

        self.serialize_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
