/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::Deserializer;

use crate::Parsable;

/// Assert the exact JSON text a model encodes to, including property order.
pub fn assert_serialized_json<T: Parsable>(data: &T, expected_json: &str) {
    let actual_json = crate::to_string(data).unwrap();
    assert_eq!(actual_json, expected_json);
}

/// Assert the expected result of JSON deserialization.
pub fn assert_deserialized_content<T>(content: &str, expected: T)
where
    T: for<'a> Deserialize<'a> + PartialEq + std::fmt::Debug,
{
    let mut deserializer = Deserializer::from_str(content);
    let deserialized_data: T = serde_path_to_error::deserialize(&mut deserializer).unwrap();
    assert_eq!(deserialized_data, expected);
}

/// Decode `content`, then check that encoding the result gives `content`
/// back unchanged.
pub fn assert_round_trip<T>(content: &str) -> T
where
    T: Parsable + PartialEq + std::fmt::Debug,
{
    let parsed: T = crate::parse(content).unwrap();
    assert_serialized_json(&parsed, content);

    let encoded = crate::to_string(&parsed).unwrap();
    let reparsed: T = crate::parse(&encoded).unwrap();
    assert_eq!(reparsed, parsed);
    parsed
}
