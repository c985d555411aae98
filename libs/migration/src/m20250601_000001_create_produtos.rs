use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Produtos::Table)
                    .if_not_exists()
                    .col(big_integer(Produtos::Id).auto_increment().primary_key())
                    .col(string_len(Produtos::Nome, 100))
                    .col(string_len(Produtos::Ncm, 8))
                    .col(string_len_null(Produtos::DescricaoNcm, 255))
                    .col(decimal_len(Produtos::Preco, 19, 2))
                    .col(integer(Produtos::Quantidade))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Produtos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Produtos {
    Table,
    Id,
    Nome,
    Ncm,
    DescricaoNcm,
    Preco,
    Quantidade,
}
