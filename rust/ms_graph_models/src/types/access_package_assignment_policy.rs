/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use strum::{Display, EnumString};
use time::OffsetDateTime;

use crate::types::access_package_question::AnyAccessPackageQuestion;
use crate::types::entity::Entity;
use crate::{
    Error, FieldDeserializers, Parsable, ParseNode, Property, PropertyStore, SerializationWriter,
};

/// Principals that can be assigned an access package through a policy.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum AllowedTargetScope {
    NotSpecified,
    SpecificDirectoryUsers,
    SpecificConnectedOrganizationUsers,
    SpecificDirectoryServicePrincipals,
    AllMemberUsers,
    AllDirectoryUsers,
    AllDirectoryServicePrincipals,
    AllConfiguredConnectedOrganizationUsers,
    AllExternalUsers,
    UnknownFutureValue,
}

/// Specifies how an access package is assigned: who may request it, which
/// questions they are asked, and so on.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessPackageAssignmentPolicy {
    entity: Entity,
    allowed_target_scope: Property<AllowedTargetScope>,
    created_date_time: Property<OffsetDateTime>,
    description: Property<String>,
    display_name: Property<String>,
    modified_date_time: Property<OffsetDateTime>,
    questions: Property<Vec<Option<AnyAccessPackageQuestion>>>,
}

impl AccessPackageAssignmentPolicy {
    pub const DISCRIMINATOR: &'static str = "#microsoft.graph.accessPackageAssignmentPolicy";

    pub fn new() -> Self {
        Self {
            entity: Entity::tagged(Self::DISCRIMINATOR),
            allowed_target_scope: Property::Absent,
            created_date_time: Property::Absent,
            description: Property::Absent,
            display_name: Property::Absent,
            modified_date_time: Property::Absent,
            questions: Property::Absent,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    property_accessors! {
        /// Principals that can be assigned the access package through this
        /// policy.
        allowed_target_scope: copy AllowedTargetScope;

        created_date_time: copy OffsetDateTime;

        /// The description of the policy.
        description: deref String;

        /// The display name of the policy.
        display_name: deref String;

        modified_date_time: copy OffsetDateTime;

        /// Questions that are posed to the requestor.
        questions: deref Vec<Option<AnyAccessPackageQuestion>>;
    }
}

impl Default for AccessPackageAssignmentPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Parsable for AccessPackageAssignmentPolicy {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::inherit(self.entity.field_deserializers(), |policy| {
            &mut policy.entity
        })
        .enumeration("allowedTargetScope", |policy| &mut policy.allowed_target_scope)
        .time("createdDateTime", |policy| &mut policy.created_date_time)
        .string("description", |policy| &mut policy.description)
        .string("displayName", |policy| &mut policy.display_name)
        .time("modifiedDateTime", |policy| &mut policy.modified_date_time)
        .objects("questions", |policy| &mut policy.questions)
    }

    fn serialize_properties<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_enum_value("allowedTargetScope", self.allowed_target_scope.as_ref())?;
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_time_value("modifiedDateTime", self.modified_date_time.as_ref())?;
        writer.write_collection_of_object_values("questions", self.questions.as_deref())
    }

    fn additional_data(&self) -> &PropertyStore {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut PropertyStore {
        self.entity.additional_data_mut()
    }
}

impl AsRef<Entity> for AccessPackageAssignmentPolicy {
    fn as_ref(&self) -> &Entity {
        &self.entity
    }
}

impl AsMut<Entity> for AccessPackageAssignmentPolicy {
    fn as_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl_serde_via_parsable!(AccessPackageAssignmentPolicy);

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{AccessPackageAssignmentPolicy, AllowedTargetScope};
    use crate::test_utils::{assert_round_trip, assert_serialized_json};
    use crate::types::access_package_question::AnyAccessPackageQuestion;
    use crate::types::access_package_text_input_question::AccessPackageTextInputQuestion;
    use crate::types::entity::AnyEntity;
    use crate::Error;

    #[test]
    fn policy_with_mixed_questions() {
        let parsed: AnyEntity = assert_round_trip(
            r##"{"id":"p1","@odata.type":"#microsoft.graph.accessPackageAssignmentPolicy","allowedTargetScope":"allMemberUsers","createdDateTime":"2024-05-02T08:15:00Z","displayName":"Sales team","questions":[{"@odata.type":"#microsoft.graph.accessPackageTextInputQuestion","sequence":1,"text":"Why?","isSingleLineQuestion":false},{"@odata.type":"#microsoft.graph.accessPackageMultipleChoiceQuestion","sequence":2,"text":"Region","choices":[]},{"@odata.type":"#microsoft.graph.accessPackageQuestion","sequence":3,"text":"Anything else?"}]}"##,
        );

        let AnyEntity::AccessPackageAssignmentPolicy(policy) = &parsed else {
            panic!("expected a policy, got {parsed:?}");
        };
        assert_eq!(
            policy.allowed_target_scope().unwrap(),
            Some(AllowedTargetScope::AllMemberUsers)
        );
        assert_eq!(
            policy.created_date_time().unwrap(),
            Some(datetime!(2024-05-02 8:15 UTC))
        );
        assert!(matches!(policy.description(), Err(Error::NotFound)));

        let questions = policy.questions().unwrap().unwrap();
        assert!(matches!(
            questions[0],
            Some(AnyAccessPackageQuestion::TextInput(_))
        ));
        assert!(matches!(
            questions[1],
            Some(AnyAccessPackageQuestion::MultipleChoice(_))
        ));
        assert!(matches!(
            questions[2],
            Some(AnyAccessPackageQuestion::Question(_))
        ));

        let sequences: Vec<_> = questions
            .iter()
            .flatten()
            .map(|question| question.question().sequence().unwrap())
            .collect();
        assert_eq!(sequences, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn build_and_serialize() {
        let mut question = AccessPackageTextInputQuestion::new();
        question.question_mut().set_text(Some("Manager?".to_string()));

        let mut policy = AccessPackageAssignmentPolicy::new();
        policy.set_allowed_target_scope(Some(AllowedTargetScope::SpecificDirectoryUsers));
        policy.set_description(None);
        policy.set_questions(Some(vec![Some(question.into())]));

        assert_serialized_json(
            &policy,
            r##"{"@odata.type":"#microsoft.graph.accessPackageAssignmentPolicy","allowedTargetScope":"specificDirectoryUsers","description":null,"questions":[{"@odata.type":"#microsoft.graph.accessPackageTextInputQuestion","text":"Manager?"}]}"##,
        );
    }

    #[test]
    fn null_question_round_trips() {
        let parsed: AccessPackageAssignmentPolicy = assert_round_trip(
            r##"{"@odata.type":"#microsoft.graph.accessPackageAssignmentPolicy","questions":[null,{"@odata.type":"#microsoft.graph.accessPackageQuestion","text":"Why?"}]}"##,
        );

        let questions = parsed.questions().unwrap().unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].is_none());
        assert_eq!(
            questions[1].as_ref().unwrap().question().text().unwrap(),
            Some("Why?")
        );
    }

    #[test]
    fn every_target_scope_round_trips() {
        for scope in [
            "notSpecified",
            "specificDirectoryUsers",
            "specificConnectedOrganizationUsers",
            "specificDirectoryServicePrincipals",
            "allMemberUsers",
            "allDirectoryUsers",
            "allDirectoryServicePrincipals",
            "allConfiguredConnectedOrganizationUsers",
            "allExternalUsers",
            "unknownFutureValue",
        ] {
            let parsed: AllowedTargetScope = scope.parse().unwrap();
            assert_eq!(parsed.to_string(), scope);
        }
    }
}
