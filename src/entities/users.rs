use sea_orm::entity::prelude::*;

/// The single account row. Always stored under [`SOLE_USER_ID`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    /// Display name shown in the page header
    pub name: String,

    pub username: String,

    /// Argon2id password hash. `None` until the `admin` command has run.
    pub password_hash: Option<String>,
}

/// Fixed key of the only user record.
pub const SOLE_USER_ID: i32 = 1;

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
