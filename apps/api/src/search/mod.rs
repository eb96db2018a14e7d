pub mod handlers;

use serde_json::Value;

use crate::models::person::PersonSummary;
use crate::normalize::{decoded_field, pick_picture, str_field};

/// Maps the upstream `results` array into normalized summaries.
/// Non-object entries and entries with neither name nor username are dropped.
pub fn normalize_results(body: &Value) -> Vec<PersonSummary> {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter(|result| result.is_object())
        .map(|result| PersonSummary {
            username: str_field(result, "username").to_string(),
            name: decoded_field(result, "name"),
            professional_headline: decoded_field(result, "professionalHeadline"),
            picture: pick_picture(result),
        })
        .filter(|person| !person.name.is_empty() || !person.username.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DEFAULT_PICTURE;
    use serde_json::json;

    #[test]
    fn test_full_record_is_normalized() {
        let body = json!({
            "results": [{
                "username": "jose",
                "name": "Jos&eacute; &amp; Associates",
                "professionalHeadline": "R&amp;D Lead",
                "picture": "https://img/jose.png"
            }]
        });

        assert_eq!(
            normalize_results(&body),
            vec![PersonSummary {
                username: "jose".into(),
                name: "José & Associates".into(),
                professional_headline: "R&D Lead".into(),
                picture: "https://img/jose.png".into(),
            }]
        );
    }

    #[test]
    fn test_records_without_identity_are_dropped() {
        let body = json!({
            "results": [
                { "professionalHeadline": "Ghost" },
                { "name": "", "username": "" },
                { "name": null, "username": "only-user" },
                { "name": "Only Name" }
            ]
        });

        let people = normalize_results(&body);
        assert_eq!(people.len(), 2);
        assert!(people
            .iter()
            .all(|p| !p.name.is_empty() || !p.username.is_empty()));
        assert_eq!(people[0].username, "only-user");
        assert_eq!(people[0].name, "");
        assert_eq!(people[1].name, "Only Name");
        assert_eq!(people[1].username, "");
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let body = json!({ "results": ["ann", 7, null, ["x"], { "username": "ann" }] });
        let people = normalize_results(&body);
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].username, "ann");
    }

    #[test]
    fn test_picture_defaults_and_image_url_fallback() {
        let body = json!({
            "results": [
                { "username": "a" },
                { "username": "b", "imageUrl": "https://img/b.png" }
            ]
        });

        let people = normalize_results(&body);
        assert_eq!(people[0].picture, DEFAULT_PICTURE);
        assert_eq!(people[1].picture, "https://img/b.png");
    }

    #[test]
    fn test_missing_or_malformed_results_yield_nothing() {
        assert!(normalize_results(&json!({})).is_empty());
        assert!(normalize_results(&json!({ "results": null })).is_empty());
        assert!(normalize_results(&json!({ "results": {} })).is_empty());
        assert!(normalize_results(&json!([1, 2, 3])).is_empty());
    }
}
