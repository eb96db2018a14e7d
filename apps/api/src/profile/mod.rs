pub mod handlers;

use serde_json::{json, Value};

use crate::models::person::PersonProfile;
use crate::normalize::decoded_field;

/// Builds a profile from the upstream bio body. A missing `person` object
/// yields an all-empty profile rather than an error.
pub fn normalize_profile(body: &Value) -> PersonProfile {
    let empty = Value::Null;
    let person = body.get("person").filter(|p| p.is_object()).unwrap_or(&empty);
    let location = person.get("location").unwrap_or(&empty);

    PersonProfile {
        name: decoded_field(person, "name"),
        professional_headline: decoded_field(person, "professionalHeadline"),
        summary_of_bio: decoded_field(person, "summaryOfBio"),
        location: decoded_field(location, "name"),
        picture: person.get("picture").cloned().unwrap_or_else(|| json!("")),
        links: person.get("links").cloned().unwrap_or_else(|| json!([])),
    }
}
