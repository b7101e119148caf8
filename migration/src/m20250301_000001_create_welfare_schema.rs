use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users table with unique email
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("family"),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Schemes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schemes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schemes::Name).string().not_null())
                    .col(ColumnDef::new(Schemes::Description).text().not_null())
                    .col(ColumnDef::new(Schemes::Eligibility).text().not_null())
                    .col(ColumnDef::new(Schemes::Category).string().not_null())
                    .col(ColumnDef::new(Schemes::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // user_id and scheme_id are loose string references on purpose;
        // no foreign keys are created for them.
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::UserId).string().not_null())
                    .col(ColumnDef::new(Applications::SchemeId).string().not_null())
                    .col(ColumnDef::new(Applications::SchemeName).string().not_null())
                    .col(ColumnDef::new(Applications::Notes).text().null())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmergencyContacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmergencyContacts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmergencyContacts::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmergencyContacts::Name).string().not_null())
                    .col(ColumnDef::new(EmergencyContacts::Phone).string().not_null())
                    .col(
                        ColumnDef::new(EmergencyContacts::Relationship)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmergencyContacts::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_emergency_contacts_user_id")
                    .table(EmergencyContacts::Table)
                    .col(EmergencyContacts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MarketplaceListings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MarketplaceListings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MarketplaceListings::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MarketplaceListings::ListingType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MarketplaceListings::Title).string().not_null())
                    .col(
                        ColumnDef::new(MarketplaceListings::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MarketplaceListings::ContactInfo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MarketplaceListings::PostedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Grievances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grievances::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grievances::UserId).string().not_null())
                    .col(ColumnDef::new(Grievances::Subject).string().not_null())
                    .col(ColumnDef::new(Grievances::Details).text().not_null())
                    .col(
                        ColumnDef::new(Grievances::Priority)
                            .string()
                            .not_null()
                            .default("low"),
                    )
                    .col(
                        ColumnDef::new(Grievances::Status)
                            .string()
                            .not_null()
                            .default("Open"),
                    )
                    .col(ColumnDef::new(Grievances::FiledAt).big_integer().not_null())
                    .col(ColumnDef::new(Grievances::ResolvedAt).big_integer().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grievances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MarketplaceListings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmergencyContacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schemes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum Schemes {
    Table,
    Id,
    Name,
    Description,
    Eligibility,
    Category,
    CreatedAt,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    UserId,
    SchemeId,
    SchemeName,
    Notes,
    Status,
    AppliedAt,
}

#[derive(Iden)]
enum EmergencyContacts {
    Table,
    Id,
    UserId,
    Name,
    Phone,
    Relationship,
    CreatedAt,
}

#[derive(Iden)]
enum MarketplaceListings {
    Table,
    Id,
    UserId,
    ListingType,
    Title,
    Description,
    ContactInfo,
    PostedAt,
}

#[derive(Iden)]
enum Grievances {
    Table,
    Id,
    UserId,
    Subject,
    Details,
    Priority,
    Status,
    FiledAt,
    ResolvedAt,
}
