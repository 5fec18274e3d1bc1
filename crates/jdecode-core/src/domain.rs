//! Domain records produced by the decoder.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    decode::{integer_field, string_field, FromJsonObject},
    functional::{curry3, result},
    Result,
};

/// A user profile decoded from a timeline entry.
///
/// Only constructed whole: either every field is known or there is no `User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    name: String,
    description: String,
    followers_count: i64,
}

impl User {
    pub const fn new(name: String, description: String, followers_count: i64) -> Self {
        Self {
            name,
            description,
            followers_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn followers_count(&self) -> i64 {
        self.followers_count
    }
}

impl FromJsonObject for User {
    const ENVELOPE_KEY: &'static str = "user";

    /// Extracts the three fields independently, then feeds them to
    /// `User::new` left to right. The leftmost failing field is reported.
    fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let name = string_field(object, "name");
        let description = string_field(object, "description");
        let followers_count = integer_field(object, "followers_count");

        result::apply(
            result::apply(result::map(curry3(Self::new), name), description),
            followers_count,
        )
    }
}
