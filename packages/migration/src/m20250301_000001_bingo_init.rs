use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    GameId,
    Title,
    IsActive,
    GridSize,
}

#[derive(Iden)]
enum Events {
    Table,
    EventId,
    GameId,
    Description,
    Status,
}

#[derive(Iden)]
enum Boards {
    Table,
    BoardId,
    GameId,
    UserId,
    GridSize,
}

#[derive(Iden)]
enum BoardSquares {
    Table,
    BoardId,
    Row,
    #[iden = "column"]
    Col,
    EventId,
}

#[derive(Iden)]
enum Votes {
    Table,
    EventId,
    GameId,
    UserId,
    VotedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::GameId)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Title).string().not_null())
                    .col(
                        ColumnDef::new(Games::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::GridSize)
                            .integer()
                            .not_null()
                            .default(4),
                    )
                    .to_owned(),
            )
            .await?;

        // events: ids are per game, assigned 1..N in file order
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::EventId).big_integer().not_null())
                    .col(ColumnDef::new(Events::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .col(
                        ColumnDef::new(Events::Status)
                            .string_len(16)
                            .not_null()
                            .default("OPEN"),
                    )
                    .primary_key(Index::create().col(Events::EventId).col(Events::GameId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_game_id")
                            .from(Events::Table, Events::GameId)
                            .to(Games::Table, Games::GameId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // boards
        manager
            .create_table(
                Table::create()
                    .table(Boards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Boards::BoardId)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Boards::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Boards::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Boards::GridSize)
                            .integer()
                            .not_null()
                            .default(4),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boards_game_id")
                            .from(Boards::Table, Boards::GameId)
                            .to(Games::Table, Games::GameId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // one board per player per game
        manager
            .create_index(
                Index::create()
                    .name("ux_boards_game_user")
                    .table(Boards::Table)
                    .col(Boards::GameId)
                    .col(Boards::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // board_squares
        manager
            .create_table(
                Table::create()
                    .table(BoardSquares::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BoardSquares::BoardId).big_integer().not_null())
                    .col(ColumnDef::new(BoardSquares::Row).integer().not_null())
                    .col(ColumnDef::new(BoardSquares::Col).integer().not_null())
                    .col(ColumnDef::new(BoardSquares::EventId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BoardSquares::BoardId)
                            .col(BoardSquares::Row)
                            .col(BoardSquares::Col),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_squares_board_id")
                            .from(BoardSquares::Table, BoardSquares::BoardId)
                            .to(Boards::Table, Boards::BoardId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // votes
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Votes::EventId).big_integer().not_null())
                    .col(ColumnDef::new(Votes::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Votes::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Votes::VotedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Votes::EventId)
                            .col(Votes::GameId)
                            .col(Votes::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_game_id")
                            .from(Votes::Table, Votes::GameId)
                            .to(Games::Table, Games::GameId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // vote tallies are always per (game, event)
        manager
            .create_index(
                Index::create()
                    .name("ix_votes_game_event")
                    .table(Votes::Table)
                    .col(Votes::GameId)
                    .col(Votes::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_votes_game_event")
                    .table(Votes::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Votes::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(BoardSquares::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_boards_game_user")
                    .table(Boards::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Boards::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
