use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Contact entry shown on the portfolio. The email is display-only.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
