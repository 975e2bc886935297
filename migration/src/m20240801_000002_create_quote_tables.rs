use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Authors
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Authors::Name).string_len(120).not_null().unique_key())
                    .col(
                        ColumnDef::new(Authors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Tags
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Tags::Name).string_len(60).not_null().unique_key())
                    .col(
                        ColumnDef::new(Tags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Quotes (author is mandatory, removing the author removes the quote)
        manager
            .create_table(
                Table::create()
                    .table(Quotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quotes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quotes::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Quotes::Text).string_len(3000).not_null())
                    .col(ColumnDef::new(Quotes::AuthorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Quotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quotes_author_id")
                            .from(Quotes::Table, Quotes::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. QuoteTags (Many-to-Many)
        manager
            .create_table(
                Table::create()
                    .table(QuoteTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuoteTags::QuoteId).big_integer().not_null())
                    .col(ColumnDef::new(QuoteTags::TagId).big_integer().not_null())
                    .primary_key(Index::create().col(QuoteTags::QuoteId).col(QuoteTags::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quote_tags_quote_id")
                            .from(QuoteTags::Table, QuoteTags::QuoteId)
                            .to(Quotes::Table, Quotes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quote_tags_tag_id")
                            .from(QuoteTags::Table, QuoteTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuoteTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    PublicId,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Tags {
    Table,
    Id,
    PublicId,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Quotes {
    Table,
    Id,
    PublicId,
    Text,
    AuthorId,
    CreatedAt,
}

#[derive(Iden)]
enum QuoteTags {
    Table,
    QuoteId,
    TagId,
}
