use sea_orm::entity::prelude::*;

/// One row per detail-page view. Rows are never updated; `id` order is
/// insertion order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub media_id: i32,
    pub viewed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::media_entries::Entity",
        from = "Column::MediaId",
        to = "super::media_entries::Column::Id"
    )]
    MediaEntries,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::media_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
