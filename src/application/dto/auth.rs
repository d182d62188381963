// src/application/dto/auth.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{Role, UserId};

/// The authenticated principal. Produced by the token authenticator port;
/// issuance lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn require_admin(&self) -> ApplicationResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("admin role required"))
        }
    }
}
