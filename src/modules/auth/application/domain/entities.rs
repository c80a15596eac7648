use serde::{Deserialize, Serialize};

/// Closed role vocabulary. The strings are the exact claim values the
/// legacy clients already send and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Gestionnaire,
    Encadrant,
    ChefCentreInformatique,
}

impl Role {
    pub const ALL: [Role; 3] = [
        Role::Gestionnaire,
        Role::Encadrant,
        Role::ChefCentreInformatique,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Gestionnaire => "Gestionnaire",
            Role::Encadrant => "Encadrant",
            Role::ChefCentreInformatique => "ChefCentreInformatique",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gestionnaire" => Ok(Role::Gestionnaire),
            "Encadrant" => Ok(Role::Encadrant),
            "ChefCentreInformatique" => Ok(Role::ChefCentreInformatique),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
