//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{AccountStatus, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    /// argon2 PHC string
    pub password_hash: String,
    pub status: String,
    pub address_id: Option<Uuid>,
    pub registration_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::AddressId"
    )]
    Address,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.user_id,
            email: model.email,
            password_hash: model.password_hash,
            status: AccountStatus::from(model.status.as_str()),
            address_id: model.address_id,
            registration_date: model.registration_date,
        }
    }
}
