use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image_url: String,
    pub moodboard_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::moodboard::Entity",
        from = "Column::MoodboardId",
        to = "super::moodboard::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Moodboard,
}

impl Related<super::moodboard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moodboard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
