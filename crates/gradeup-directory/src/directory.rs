//! The roster itself.

use crate::{Account, AccountId, AccountStatus, DirectoryError};

/// The fixed starting roster: `(id, username, status, premium)`.
const SEED: [(u32, &str, AccountStatus, bool); 6] = [
    (1, "john_doe", AccountStatus::Active, true),
    (2, "jane_smith", AccountStatus::Active, false),
    (3, "alex_wilson", AccountStatus::Active, true),
    (4, "maria_garcia", AccountStatus::Active, false),
    (5, "amit_patel", AccountStatus::Inactive, false),
    (6, "sara_khan", AccountStatus::Active, true),
];

/// The in-memory account roster.
///
/// Membership (ids, usernames, statuses) is fixed at construction. The
/// premium flag is the only thing [`toggle_premium`](Self::toggle_premium)
/// can change. Roster order is preserved everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl UserDirectory {
    /// Builds the fixed starting roster of six accounts.
    pub fn seed() -> Self {
        let accounts = SEED
            .iter()
            .map(|&(id, username, status, is_premium)| {
                Account::new(id, username, status, is_premium)
            })
            .collect();
        Self { accounts }
    }

    /// Builds a roster from explicit accounts.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// A copy of every account, in roster order.
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Flips the premium flag of the account with this id.
    ///
    /// Returns the account as it is after the flip.
    ///
    /// # Errors
    /// Returns [`DirectoryError::NotFound`] if no account has this id.
    /// The roster is unchanged in that case.
    pub fn toggle_premium(&mut self, id: AccountId) -> Result<Account, DirectoryError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DirectoryError::NotFound(id))?;

        account.is_premium = !account.is_premium;
        tracing::info!(
            %id,
            username = %account.username,
            is_premium = account.is_premium,
            "account entitlement toggled"
        );
        Ok(account.clone())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seed()
    }
}
