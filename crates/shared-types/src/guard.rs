//! Route authorization decisions.
//!
//! The UI wraps route groups in layouts that ask these functions whether to
//! render their children or redirect somewhere else.

use crate::session::Session;
use crate::user::UserRole;

/// Where a guard may send the user instead of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    AdminHome,
    ClientHome,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::AdminHome => "/admin/dashboard",
            Destination::ClientHome => "/",
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(Destination),
}

/// Routes only meant for signed-out visitors (the login page).
pub fn public_only(session: &Session) -> Access {
    match session.role() {
        Some(role) => Access::Redirect(role.home()),
        None => Access::Render,
    }
}

/// Routes that need a session, optionally restricted to some roles.
pub fn protected(session: &Session, allowed: Option<&[UserRole]>) -> Access {
    let Some(role) = session.role() else {
        return Access::Redirect(Destination::Login);
    };
    match allowed {
        Some(roles) if !roles.contains(&role) => Access::Redirect(role.home()),
        _ => Access::Render,
    }
}
