use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tagihan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sewa_id: i32,
    pub billing_month: i32,
    pub billing_year: i32,
    pub amount: i64,
    pub due_date: Date,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sewa::Entity",
        from = "Column::SewaId",
        to = "super::sewa::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Sewa,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::sewa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sewa.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
