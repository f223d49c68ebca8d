use serde::Serialize;

use crate::entities::users;

/// User data without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub has_password: bool,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            username: model.username,
            has_password: model.password_hash.is_some(),
        }
    }
}
