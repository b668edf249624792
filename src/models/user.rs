use serde::{Deserialize, Serialize};

pub type UserId = String;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub bio: String,
    pub email: Option<String>,
    pub born_in: Option<String>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
    /// Users this user follows. The catalog owns the only copy.
    pub following: Vec<UserId>,
}

impl User {
    pub fn initial(&self) -> String {
        self.username.chars().next().map(String::from).unwrap_or_default()
    }
}
