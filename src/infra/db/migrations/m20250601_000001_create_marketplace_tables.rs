//! Migration: Create addresses, users, artisans, buyers, categories and products.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Addresses::AddressId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Addresses::Street).string_len(255).not_null())
                    .col(ColumnDef::new(Addresses::Number).string_len(20).null())
                    .col(ColumnDef::new(Addresses::Complement).string_len(100).null())
                    .col(ColumnDef::new(Addresses::Neighborhood).string_len(100).not_null())
                    .col(ColumnDef::new(Addresses::City).string_len(100).not_null())
                    .col(ColumnDef::new(Addresses::State).string_len(2).not_null())
                    .col(ColumnDef::new(Addresses::ZipCode).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Addresses::Country)
                            .string_len(100)
                            .not_null()
                            .default("Brasil"),
                    )
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Addresses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path for address reuse on registration
        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_dedup_key")
                    .table(Addresses::Table)
                    .col(Addresses::ZipCode)
                    .col(Addresses::Street)
                    .col(Addresses::Number)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::UserId).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Users::AddressId).uuid().null())
                    .col(
                        ColumnDef::new(Users::RegistrationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_address_id")
                            .from(Users::Table, Users::AddressId)
                            .to(Addresses::Table, Addresses::AddressId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Artisans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Artisans::ArtisanId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Artisans::StoreName).string_len(255).not_null())
                    .col(ColumnDef::new(Artisans::Phone).string_len(20).null())
                    .col(ColumnDef::new(Artisans::Bio).text().null())
                    .col(
                        ColumnDef::new(Artisans::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisans_user_id")
                            .from(Artisans::Table, Artisans::ArtisanId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Buyers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Buyers::BuyerId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Buyers::FullName).string_len(255).not_null())
                    .col(ColumnDef::new(Buyers::Phone).string_len(20).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_buyers_user_id")
                            .from(Buyers::Table, Buyers::BuyerId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::CategoryId).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Categories::Description).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::ProductId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Description).text().null())
                    .col(
                        ColumnDef::new(Products::Price)
                            .decimal_len(10, 2)
                            .not_null()
                            .check(Expr::col(Products::Price).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Products::Stock)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Products::Stock).gte(0)),
                    )
                    .col(ColumnDef::new(Products::ImageUrl).string_len(255).null())
                    .col(
                        ColumnDef::new(Products::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Products::ArtisanId).uuid().not_null())
                    .col(ColumnDef::new(Products::CategoryId).uuid().not_null())
                    .col(
                        ColumnDef::new(Products::RegistrationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_artisan_id")
                            .from(Products::Table, Products::ArtisanId)
                            .to(Artisans::Table, Artisans::ArtisanId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category_id")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Product names are unique per artisan
        manager
            .create_index(
                Index::create()
                    .name("uq_products_artisan_id_name")
                    .table(Products::Table)
                    .col(Products::ArtisanId)
                    .col(Products::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buyers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artisans::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Addresses {
    Table,
    AddressId,
    Street,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
    ZipCode,
    Country,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
    Email,
    PasswordHash,
    Status,
    AddressId,
    RegistrationDate,
}

#[derive(Iden)]
enum Artisans {
    Table,
    ArtisanId,
    StoreName,
    Phone,
    Bio,
    Status,
}

#[derive(Iden)]
enum Buyers {
    Table,
    BuyerId,
    FullName,
    Phone,
}

#[derive(Iden)]
enum Categories {
    Table,
    CategoryId,
    Name,
    Description,
}

#[derive(Iden)]
enum Products {
    Table,
    ProductId,
    Name,
    Description,
    Price,
    Stock,
    ImageUrl,
    Status,
    ArtisanId,
    CategoryId,
    RegistrationDate,
}
