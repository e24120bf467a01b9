/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Graph models, grouped one type per module.
//!
//! Entity types embed their base type's struct and expose it through an
//! accessor (`entity()`, `directory_object()`, `question()`); the root
//! [`entity::Entity`] holds the additional data for the whole object.
//! Complex types stand alone.

pub mod access_package_answer_choice;
pub mod access_package_assignment_policy;
pub mod access_package_localized_text;
pub mod access_package_multiple_choice_question;
pub mod access_package_question;
pub mod access_package_text_input_question;
pub mod directory_object;
pub mod entity;
pub mod mail_folder;
pub mod mailbox_settings;
pub mod user;
