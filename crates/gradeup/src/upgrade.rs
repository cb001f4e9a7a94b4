//! The two-phase premium upgrade.
//!
//! Upgrading asks the user first. That question is a suspension point:
//! nothing changes until the answer comes back, and a "no" leaves the
//! session exactly as it was.
//!
//! ```text
//! request_upgrade() ──→ UpgradeRequest ──(ask user)──→ resolve_upgrade(accepted)
//!                                                        │            │
//!                                                      true         false
//!                                                        ▼            ▼
//!                                                    Upgraded      Declined
//! ```
//!
//! [`App::upgrade`](crate::App::upgrade) runs both phases around a
//! [`Confirm`] implementation. Front ends that ask the question
//! themselves can call the two phases directly.

/// The question put to the student before upgrading.
pub const UPGRADE_PROMPT: &str =
    "Would you like to upgrade to Premium for access to all resources?";

/// The notice shown once the upgrade has been applied.
pub const UPGRADE_SUCCESS_NOTICE: &str = "Congratulations! You are now a Premium Member.";

/// Asks the user a yes/no question.
///
/// The returned future is the suspension point of the upgrade flow; the
/// action doesn't continue until it resolves.
///
/// # Example
///
/// ```rust
/// use gradeup::Confirm;
///
/// /// Always says yes.
/// struct AutoAccept;
///
/// impl Confirm for AutoAccept {
///     async fn confirm(&mut self, _prompt: &str) -> bool {
///         true
///     }
/// }
/// ```
pub trait Confirm {
    /// Shows `prompt` and resolves to the user's answer.
    fn confirm(&mut self, prompt: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// Proof that the upgrade precondition held when the flow started.
///
/// Only [`App::request_upgrade`](crate::App::request_upgrade) creates
/// one, and [`App::resolve_upgrade`](crate::App::resolve_upgrade)
/// consumes it. The request is tied to the session it was made in: once
/// anyone logs in or out, it can no longer be resolved.
#[derive(Debug)]
pub struct UpgradeRequest {
    pub(crate) username: String,
    pub(crate) generation: u64,
}

impl UpgradeRequest {
    /// The question to put to the user.
    pub fn prompt(&self) -> &'static str {
        UPGRADE_PROMPT
    }

    /// The student the request was made for.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// How an upgrade flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// The student accepted; premium is now on and persisted.
    Upgraded { notice: &'static str },

    /// The student declined; nothing changed.
    Declined,
}
