//! Artisan database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{AccountStatus, Artisan};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artisans")]
pub struct Model {
    /// Same value as `users.user_id`
    #[sea_orm(primary_key, auto_increment = false)]
    pub artisan_id: Uuid,
    pub store_name: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ArtisanId",
        to = "super::user::Column::UserId",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Artisan {
    fn from(model: Model) -> Self {
        Artisan {
            artisan_id: model.artisan_id,
            store_name: model.store_name,
            phone: model.phone,
            bio: model.bio,
            status: AccountStatus::from(model.status.as_str()),
        }
    }
}
