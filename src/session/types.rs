//! Session identity record

use serde::{Deserialize, Serialize};

/// Who is logged in.
///
/// This is what gets cached between loads, serialized as
/// `{"id":1,"email":"...","name":"...","company":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: u32,
    pub email: String,
    /// Display label derived from the email
    pub name: String,
    pub company: String,
}

impl UserIdentity {
    /// Single uppercase letter for the avatar, `U` when the name is empty
    pub fn avatar_initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}
