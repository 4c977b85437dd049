use serde::{Deserialize, Serialize};

/// Role flag of a signed-in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Auditor,
    CompanyUser,
    Admin,
}

/// The signed-in actor as resolved from the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub role: Role,
    /// Home company, absent for auditors who don't belong to a client company
    #[serde(rename = "company_id", default)]
    pub home_company_id: Option<String>,
}

impl Identity {
    pub fn is_auditor(&self) -> bool {
        self.role == Role::Auditor
    }
}

/// Token and user id written to durable storage by the external auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user_id: String,
}
