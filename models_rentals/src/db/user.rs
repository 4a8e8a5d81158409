//! Database layer user model.

use serde::{Deserialize, Serialize};

/// User account row (database representation).
///
/// `password` holds the hash as stored; this layer never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}
