use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nama_lengkap: String,
    pub email: Option<String>,
    pub tanggal_lahir: Option<Date>,
    pub jenis_kelamin: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::diagnoses::Entity")]
    Diagnoses,
}

impl Related<super::diagnoses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diagnoses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
