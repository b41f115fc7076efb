use sea_orm_migration::{prelude::*, schema::*};

use super::m20250612_000001_create_moodboard_table::Moodboard;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(pk_auto(Image::Id))
                    .col(string(Image::ImageUrl))
                    .col(integer(Image::MoodboardId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_images_moodboard_id")
                            .from(Image::Table, Image::MoodboardId)
                            .to(Moodboard::Table, Moodboard::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_images_moodboard_id")
                    .table(Image::Table)
                    .col(Image::MoodboardId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    #[sea_orm(iden = "images")]
    Table,
    Id,
    ImageUrl,
    MoodboardId,
}
