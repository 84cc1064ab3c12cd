//! Sea-ORM entity for the `animals` table.
//!
//! The primary key is assigned by the database on insert; every other column
//! is nullable free-form data, so no field carries validation beyond its type.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "animals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub animal_id: i32,
    pub animal_type: Option<String>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub color: Option<String>,
    pub age: Option<String>,
    pub weight: Option<i32>,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
