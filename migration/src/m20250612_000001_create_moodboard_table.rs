use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Moodboard::Table)
                    .if_not_exists()
                    .col(pk_auto(Moodboard::Id))
                    .col(string(Moodboard::Title))
                    .col(text_null(Moodboard::Description))
                    .col(string_null(Moodboard::CoverImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Moodboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Moodboard {
    #[sea_orm(iden = "moodboards")]
    Table,
    Id,
    Title,
    Description,
    CoverImageUrl,
}
