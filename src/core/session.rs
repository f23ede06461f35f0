//! Logged-in user, read once at start-up and passed to every screen.
//!
//! Screen gating here controls what is displayed. The backend enforces
//! permissions on its own.

use serde::{Deserialize, Serialize};

use super::text::capitalize;

/// Role of the logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Parse the stored user type. `"admin"` (any case) is an admin, anything else is staff.
    pub fn from_user_type(user_type: &str) -> Self {
        if user_type.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Staff
        }
    }
}

/// Back-office screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Inventory,
    Godowns,
    Booking,
    AllBookings,
    Billing,
    Dispatch,
    Ledger,
    Payments,
    Users,
}

impl Screen {
    /// Screens restricted to admins.
    pub fn admin_only(&self) -> bool {
        matches!(self, Self::Ledger | Self::Payments | Self::Users)
    }
}

/// Read-only session of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    username: String,
    role: Role,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Build from the stored username / user type pair.
    /// Returns `None` when nobody is logged in.
    pub fn from_stored(username: Option<&str>, user_type: Option<&str>) -> Option<Self> {
        let username = username.map(str::trim).filter(|u| !u.is_empty())?;
        let role = user_type.map_or(Role::Staff, Role::from_user_type);
        Some(Self::new(username, role))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in the header bar.
    pub fn display_name(&self) -> String {
        capitalize(&self.username)
    }

    pub fn can_access(&self, screen: Screen) -> bool {
        self.is_admin() || !screen.admin_only()
    }
}
