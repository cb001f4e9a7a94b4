//! Roster entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique, stable identifier for a roster account.
///
/// Same newtype pattern as the other ids in GradeUp: an `AccountId` can't
/// be mixed up with a row index or a count even though it's a `u32`
/// underneath. Serializes as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// Whether an account is currently in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    /// The capitalised label shown in the admin table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One account in the admin roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub status: AccountStatus,
    pub is_premium: bool,
}

impl Account {
    pub fn new(
        id: u32,
        username: impl Into<String>,
        status: AccountStatus,
        is_premium: bool,
    ) -> Self {
        Self {
            id: AccountId(id),
            username: username.into(),
            status,
            is_premium,
        }
    }
}
