//! Migration: Seed the initial product categories.

use sea_orm_migration::prelude::*;
use uuid::Uuid;

const CATEGORIES: [(&str, &str); 4] = [
    (
        "Cerâmica",
        "Produtos de cerâmica feitos à mão, como vasos, pratos e utensílios decorativos.",
    ),
    (
        "Têxtil",
        "Produtos têxteis artesanais, incluindo roupas, acessórios e itens de decoração.",
    ),
    (
        "Bijuterias",
        "Bijuterias artesanais, incluindo colares, brincos e pulseiras.",
    ),
    (
        "Madeira",
        "Produtos de madeira feitos à mão, como móveis, brinquedos e utensílios decorativos.",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Categories::Table).columns([
            Categories::CategoryId,
            Categories::Name,
            Categories::Description,
        ]);

        for (name, description) in CATEGORIES {
            insert
                .values([Uuid::new_v4().into(), name.into(), description.into()])
                .map_err(|e| DbErr::Custom(format!("Invalid category seed: {}", e)))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Name).is_in(CATEGORIES.map(|(name, _)| name)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    CategoryId,
    Name,
    Description,
}
