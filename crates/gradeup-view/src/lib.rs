//! View projection for GradeUp.
//!
//! Given the current session (and the roster, in admin mode) this crate
//! computes *what should be visible*: which of the three views is active
//! and, on the student dashboard, which premium affordances are shown or
//! locked. It knows nothing about how that is drawn; front ends read a
//! [`ViewSpec`] and render it however they like.
//!
//! The projection is recomputed in full after every action. There is no
//! diffing and no retained view state, so the output is always
//! consistent with the session it was derived from.

mod catalog;
mod controller;
mod spec;

pub use catalog::{Catalog, ContentCard};
pub use controller::ViewController;
pub use spec::{
    ActiveView, AdminDashboard, AdminRow, CardView, Gate, StudentDashboard,
    ViewSpec,
};
