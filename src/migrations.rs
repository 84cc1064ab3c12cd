//! Schema migrations, run at startup before the server binds.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateAnimalsTable)]
    }
}

pub struct CreateAnimalsTable;

#[async_trait::async_trait]
impl MigrationName for CreateAnimalsTable {
    fn name(&self) -> &'static str {
        "m20250101_000001_create_animals_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateAnimalsTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(Animals)
            .if_not_exists()
            .col(
                ColumnDef::new(AnimalColumn::AnimalId)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(AnimalColumn::AnimalType).text().null())
            .col(ColumnDef::new(AnimalColumn::Name).text().null())
            .col(ColumnDef::new(AnimalColumn::Breed).text().null())
            .col(ColumnDef::new(AnimalColumn::Sex).text().null())
            .col(ColumnDef::new(AnimalColumn::Color).text().null())
            .col(ColumnDef::new(AnimalColumn::Age).text().null())
            .col(ColumnDef::new(AnimalColumn::Weight).integer().null())
            .col(ColumnDef::new(AnimalColumn::Description).text().null())
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Animals).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum AnimalColumn {
    AnimalId,
    AnimalType,
    Name,
    Breed,
    Sex,
    Color,
    Age,
    Weight,
    Description,
}

impl Iden for AnimalColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::AnimalId => "animal_id",
                Self::AnimalType => "animal_type",
                Self::Name => "name",
                Self::Breed => "breed",
                Self::Sex => "sex",
                Self::Color => "color",
                Self::Age => "age",
                Self::Weight => "weight",
                Self::Description => "description",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct Animals;

impl Iden for Animals {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "animals").unwrap();
    }
}
