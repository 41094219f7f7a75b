use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "mobileNumber")]
    pub mobile_number: String,
    #[sqlx(rename = "landlineNumber")]
    pub landline_number: Option<String>,
    pub photo: Option<String>,
    #[sqlx(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// Input for `create` and `update`: every Contact field except the
/// store-assigned id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub mobile_number: String,
    pub landline_number: Option<String>,
    pub photo: Option<String>,
    pub is_favorite: bool,
}
