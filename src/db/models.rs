use serde::{Deserialize, Serialize};

/// One row of the ephemeral `users` table.
///
/// Tuple struct so it serializes as `[id, username, password]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRow(pub i64, pub String, pub String);

impl UserRow {
    pub fn id(&self) -> i64 {
        self.0
    }

    pub fn username(&self) -> &str {
        &self.1
    }
}
