//! Operations history entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "operation_records")]
pub struct Model {
    /// Insertion order; breaks ties between equal `created_at` values
    #[sea_orm(primary_key)]
    pub seq: i32,
    #[sea_orm(unique)]
    pub id: String,
    pub ru_id: String,

    pub cell_number: String,
    pub cell_name: String,
    pub action: String,
    pub operator: String,
    /// Operator-supplied wall-clock time
    pub timestamp: DateTime,

    #[sea_orm(nullable)]
    pub reason: Option<String>,
    #[sea_orm(nullable)]
    pub document_type: Option<String>,
    #[sea_orm(nullable)]
    pub order_number: Option<String>,
    #[sea_orm(nullable)]
    pub work_order_number: Option<String>,
    #[sea_orm(nullable)]
    pub start_date: Option<Date>,
    #[sea_orm(nullable)]
    pub end_date: Option<Date>,
    #[sea_orm(nullable)]
    pub responsible_person: Option<String>,
    #[sea_orm(nullable)]
    pub comment: Option<String>,
    #[sea_orm(nullable)]
    pub severity: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ru::Entity",
        from = "Column::RuId",
        to = "super::ru::Column::Id"
    )]
    Ru,
}

impl Related<super::ru::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ru.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
