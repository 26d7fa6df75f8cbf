use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users_table::Migration),
            Box::new(m20240301_000002_create_jobbers_tables::Migration),
            Box::new(m20240301_000003_create_lookup_tables::Migration),
            Box::new(m20240301_000004_create_materials_tables::Migration),
            Box::new(m20240301_000005_create_parties_table::Migration),
            Box::new(m20240301_000006_create_locations_table::Migration),
            Box::new(m20240301_000007_create_firms_table::Migration),
        ]
    }
}

mod m20240301_000001_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Users::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(Users::Username)
                                .string_len(150)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Users::Email)
                                .string_len(254)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(
                            ColumnDef::new(Users::FirstName)
                                .string_len(150)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Users::LastName)
                                .string_len(150)
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Users::Phone).string_len(20).null())
                        .col(ColumnDef::new(Users::Designation).string_len(80).null())
                        .col(ColumnDef::new(Users::Department).string_len(80).null())
                        .col(ColumnDef::new(Users::Address).text().null())
                        .col(
                            ColumnDef::new(Users::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Users::LastLoginAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Users::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        Username,
        Email,
        PasswordHash,
        FirstName,
        LastName,
        Phone,
        Designation,
        Department,
        Address,
        IsActive,
        LastLoginAt,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000002_create_jobbers_tables {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000001_create_users_table::Users;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_jobbers_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(JobberTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(JobberTypes::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(JobberTypes::OwnerId).uuid().not_null())
                        .col(ColumnDef::new(JobberTypes::Name).string_len(80).not_null())
                        .col(
                            ColumnDef::new(JobberTypes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(JobberTypes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_jobber_types_owner")
                                .from(JobberTypes::Table, JobberTypes::OwnerId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_jobber_types_owner_name")
                        .table(JobberTypes::Table)
                        .col(JobberTypes::OwnerId)
                        .col(JobberTypes::Name)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Jobbers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Jobbers::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Jobbers::OwnerId).uuid().not_null())
                        .col(ColumnDef::new(Jobbers::Name).string_len(120).not_null())
                        .col(ColumnDef::new(Jobbers::Phone).string_len(20).null())
                        .col(ColumnDef::new(Jobbers::Email).string_len(254).null())
                        .col(
                            ColumnDef::new(Jobbers::Role)
                                .string_len(30)
                                .not_null()
                                .default("Operator"),
                        )
                        .col(ColumnDef::new(Jobbers::JobberTypeId).big_integer().null())
                        .col(ColumnDef::new(Jobbers::Address).text().null())
                        .col(
                            ColumnDef::new(Jobbers::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Jobbers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Jobbers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_jobbers_owner")
                                .from(Jobbers::Table, Jobbers::OwnerId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_jobbers_type")
                                .from(Jobbers::Table, Jobbers::JobberTypeId)
                                .to(JobberTypes::Table, JobberTypes::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_jobbers_owner_name")
                        .table(Jobbers::Table)
                        .col(Jobbers::OwnerId)
                        .col(Jobbers::Name)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Jobbers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(JobberTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum JobberTypes {
        Table,
        Id,
        OwnerId,
        Name,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Jobbers {
        Table,
        Id,
        OwnerId,
        Name,
        Phone,
        Email,
        Role,
        JobberTypeId,
        Address,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000003_create_lookup_tables {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000001_create_users_table::Users;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_lookup_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaterialTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialTypes::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialTypes::OwnerId).uuid().not_null())
                        .col(
                            ColumnDef::new(MaterialTypes::MaterialKind)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialTypes::Name)
                                .string_len(120)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialTypes::Description).text().null())
                        .col(
                            ColumnDef::new(MaterialTypes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialTypes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_material_types_owner")
                                .from(MaterialTypes::Table, MaterialTypes::OwnerId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_material_types_kind")
                        .table(MaterialTypes::Table)
                        .col(MaterialTypes::MaterialKind)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(MaterialShades::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialShades::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialShades::OwnerId).uuid().not_null())
                        .col(
                            ColumnDef::new(MaterialShades::MaterialKind)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialShades::Name)
                                .string_len(120)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialShades::Code).string_len(50).null())
                        .col(ColumnDef::new(MaterialShades::Notes).text().null())
                        .col(
                            ColumnDef::new(MaterialShades::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialShades::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_material_shades_owner")
                                .from(MaterialShades::Table, MaterialShades::OwnerId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_material_shades_kind")
                        .table(MaterialShades::Table)
                        .col(MaterialShades::MaterialKind)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaterialShades::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(MaterialTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum MaterialTypes {
        Table,
        Id,
        OwnerId,
        MaterialKind,
        Name,
        Description,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum MaterialShades {
        Table,
        Id,
        OwnerId,
        MaterialKind,
        Name,
        Code,
        Notes,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000004_create_materials_tables {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000003_create_lookup_tables::{MaterialShades, MaterialTypes};

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_materials_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Materials::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Materials::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Materials::Kind).string_len(16).not_null())
                        .col(
                            ColumnDef::new(Materials::MaterialTypeId)
                                .big_integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Materials::MaterialShadeId)
                                .big_integer()
                                .null(),
                        )
                        .col(ColumnDef::new(Materials::Name).string_len(150).not_null())
                        .col(
                            ColumnDef::new(Materials::Remarks)
                                .text()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Materials::ImagePath).string().null())
                        .col(
                            ColumnDef::new(Materials::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Materials::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_materials_type")
                                .from(Materials::Table, Materials::MaterialTypeId)
                                .to(MaterialTypes::Table, MaterialTypes::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_materials_shade")
                                .from(Materials::Table, Materials::MaterialShadeId)
                                .to(MaterialShades::Table, MaterialShades::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_materials_kind")
                        .table(Materials::Table)
                        .col(Materials::Kind)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(MaterialDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialDetails::MaterialId)
                                .big_integer()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::Kind)
                                .string_len(16)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialDetails::YarnType).string_len(80).null())
                        .col(
                            ColumnDef::new(MaterialDetails::YarnSubtype)
                                .string_len(80)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::CountDenier)
                                .string_len(40)
                                .null(),
                        )
                        .col(ColumnDef::new(MaterialDetails::Color).string_len(60).null())
                        .col(
                            ColumnDef::new(MaterialDetails::FabricType)
                                .string_len(120)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::Construction)
                                .string_len(120)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::Gsm)
                                .decimal_len(8, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::Width)
                                .decimal_len(8, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::BaseFabricType)
                                .string_len(120)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialDetails::FinishType)
                                .string_len(20)
                                .null(),
                        )
                        .col(ColumnDef::new(MaterialDetails::EndUse).string_len(120).null())
                        .col(ColumnDef::new(MaterialDetails::TrimType).string_len(80).null())
                        .col(ColumnDef::new(MaterialDetails::Size).string_len(60).null())
                        .col(ColumnDef::new(MaterialDetails::Brand).string_len(80).null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_material_details_material")
                                .from(MaterialDetails::Table, MaterialDetails::MaterialId)
                                .to(Materials::Table, Materials::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaterialDetails::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Materials::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Materials {
        Table,
        Id,
        Kind,
        MaterialTypeId,
        MaterialShadeId,
        Name,
        Remarks,
        ImagePath,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum MaterialDetails {
        Table,
        MaterialId,
        Kind,
        YarnType,
        YarnSubtype,
        CountDenier,
        Color,
        FabricType,
        Construction,
        Gsm,
        Width,
        BaseFabricType,
        FinishType,
        EndUse,
        TrimType,
        Size,
        Brand,
    }
}

mod m20240301_000005_create_parties_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000005_create_parties_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Parties::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Parties::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Parties::PartyName)
                                .string_len(150)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Parties::FullName)
                                .string_len(200)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::Address)
                                .text()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::PanNumber)
                                .string_len(10)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::GstNumber)
                                .string_len(15)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::TanNumber)
                                .string_len(10)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::State)
                                .string_len(2)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::PhoneNumber)
                                .string_len(15)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::Email)
                                .string_len(254)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parties::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Parties::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Parties::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Parties {
        Table,
        Id,
        PartyName,
        FullName,
        Address,
        PanNumber,
        GstNumber,
        TanNumber,
        State,
        PhoneNumber,
        Email,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000006_create_locations_table {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000001_create_users_table::Users;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000006_create_locations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Locations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Locations::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Locations::OwnerId).uuid().not_null())
                        .col(ColumnDef::new(Locations::Name).string_len(120).not_null())
                        .col(
                            ColumnDef::new(Locations::City)
                                .string_len(80)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Locations::State)
                                .string_len(80)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Locations::Address)
                                .text()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Locations::Pincode)
                                .string_len(10)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Locations::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Locations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Locations::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_locations_owner")
                                .from(Locations::Table, Locations::OwnerId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_locations_owner_name")
                        .table(Locations::Table)
                        .col(Locations::OwnerId)
                        .col(Locations::Name)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Locations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Locations {
        Table,
        Id,
        OwnerId,
        Name,
        City,
        State,
        Address,
        Pincode,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000007_create_firms_table {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000001_create_users_table::Users;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000007_create_firms_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Firms::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Firms::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Firms::OwnerId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Firms::FirmName).string_len(180).not_null())
                        .col(ColumnDef::new(Firms::FirmType).string_len(30).not_null())
                        .col(
                            ColumnDef::new(Firms::AddressLine)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Firms::City).string_len(80).not_null())
                        .col(ColumnDef::new(Firms::State).string_len(80).not_null())
                        .col(ColumnDef::new(Firms::Pincode).string_len(10).not_null())
                        .col(
                            ColumnDef::new(Firms::Phone)
                                .string_len(20)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::Email)
                                .string_len(254)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::Website)
                                .string_len(200)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::GstNumber)
                                .string_len(15)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::PanNumber)
                                .string_len(10)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::TanNumber)
                                .string_len(10)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::CinNumber)
                                .string_len(21)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::BankName)
                                .string_len(120)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::AccountHolderName)
                                .string_len(120)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::AccountNumber)
                                .string_len(30)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::IfscCode)
                                .string_len(11)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::BranchName)
                                .string_len(120)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Firms::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_firms_owner")
                                .from(Firms::Table, Firms::OwnerId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Firms::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Firms {
        Table,
        Id,
        OwnerId,
        FirmName,
        FirmType,
        AddressLine,
        City,
        State,
        Pincode,
        Phone,
        Email,
        Website,
        GstNumber,
        PanNumber,
        TanNumber,
        CinNumber,
        BankName,
        AccountHolderName,
        AccountNumber,
        IfscCode,
        BranchName,
        UpdatedAt,
    }
}
