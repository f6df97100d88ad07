use serde::{Deserialize, Serialize};

/// A single user as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserRecord {
    /// `title.firstName lastName`, as printed on the cards.
    pub fn display_name(&self) -> String {
        format!("{}.{} {}", self.title, self.first_name, self.last_name)
    }

    pub fn has_picture(&self) -> bool {
        self.picture.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// One page of the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserPage {
    pub data: Vec<UserRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Continent {
    pub name: String,
}

/// A country as requested by [`COUNTRIES_QUERY`](super::COUNTRIES_QUERY).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub native: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub continent: Continent,
}
