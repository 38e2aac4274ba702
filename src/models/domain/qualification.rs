use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Education or certification entry. The email is display-only and never
/// participates in authorization.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Qualification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub firstname: String,
    pub lastname: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualification_round_trips_without_optional_fields() {
        let qualification = Qualification {
            id: None,
            title: "BSc".to_string(),
            firstname: "Ana".to_string(),
            lastname: "Lopez".to_string(),
            description: "Computer science".to_string(),
            email: None,
            completion: None,
        };

        let json = serde_json::to_value(&qualification).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("completion").is_none());
    }
}
