//! Creates the cinema tables and their foreign keys.
//!
//! Tables are created base-first (`user`, `movie`, `show_room`, `seat_type`),
//! then `seating` and `movie_session`, then `booking`. Foreign keys follow in
//! the same order. SQLite cannot add a constraint to an existing table, so on
//! that backend each foreign key is written into its owning table's
//! `CREATE TABLE` instead.
//!
//! The migration is forward-only: `down` leaves the schema untouched.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;
use tracing::{debug, info};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let inline_foreign_keys = manager.get_database_backend() == DbBackend::Sqlite;
        let mut created = Vec::with_capacity(CREATION_ORDER.len());

        for table in CREATION_ORDER {
            if manager.has_table(table.name()).await? {
                debug!(table = table.name(), "table already exists, skipping");
                continue;
            }

            let mut statement = table.create_statement();
            if inline_foreign_keys {
                for (_, mut foreign_key) in foreign_keys_of(table) {
                    statement.foreign_key(&mut foreign_key);
                }
            }

            info!(table = table.name(), "creating table");
            manager.create_table(statement).await?;
            created.push(table);
        }

        if inline_foreign_keys {
            return Ok(());
        }

        // Constraints are only added to tables created above so a re-run
        // against an existing schema does not duplicate them.
        for (table, foreign_key) in foreign_keys() {
            if created.contains(&table) {
                debug!(table = table.name(), "creating foreign key");
                manager.create_foreign_key(foreign_key).await?;
            }
        }

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        info!("cinema system migration is forward-only, nothing to revert");
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CinemaTable {
    User,
    Movie,
    ShowRoom,
    SeatType,
    Seating,
    MovieSession,
    Booking,
}

const CREATION_ORDER: [CinemaTable; 7] = [
    CinemaTable::User,
    CinemaTable::Movie,
    CinemaTable::ShowRoom,
    CinemaTable::SeatType,
    CinemaTable::Seating,
    CinemaTable::MovieSession,
    CinemaTable::Booking,
];

impl CinemaTable {
    fn name(self) -> &'static str {
        match self {
            CinemaTable::User => "user",
            CinemaTable::Movie => "movie",
            CinemaTable::ShowRoom => "show_room",
            CinemaTable::SeatType => "seat_type",
            CinemaTable::Seating => "seating",
            CinemaTable::MovieSession => "movie_session",
            CinemaTable::Booking => "booking",
        }
    }

    fn create_statement(self) -> TableCreateStatement {
        match self {
            CinemaTable::User => Table::create()
                .table(User::Table)
                .col(id(User::Id))
                .col(ColumnDef::new(User::FirstName).string().not_null())
                .col(ColumnDef::new(User::LastName).string().not_null())
                .col(ColumnDef::new(User::Email).string().not_null())
                .col(ColumnDef::new(User::Password).string().not_null())
                .col(ColumnDef::new(User::IsAdmin).boolean().not_null())
                .col(created_at(User::CreatedAt))
                .to_owned(),
            CinemaTable::Movie => Table::create()
                .table(Movie::Table)
                .col(id(Movie::Id))
                .col(ColumnDef::new(Movie::Title).string().not_null())
                .col(ColumnDef::new(Movie::Description).string().not_null())
                .col(created_at(Movie::CreatedAt))
                .to_owned(),
            CinemaTable::ShowRoom => Table::create()
                .table(ShowRoom::Table)
                .col(id(ShowRoom::Id))
                .col(ColumnDef::new(ShowRoom::Name).string().not_null())
                .col(ColumnDef::new(ShowRoom::TotalSeats).integer().not_null())
                .col(
                    ColumnDef::new(ShowRoom::TotalRemainingSeats)
                        .integer()
                        .not_null(),
                )
                .col(created_at(ShowRoom::CreatedAt))
                .to_owned(),
            CinemaTable::SeatType => Table::create()
                .table(SeatType::Table)
                .col(id(SeatType::Id))
                .col(ColumnDef::new(SeatType::Name).string().not_null())
                .col(created_at(SeatType::CreatedAt))
                .to_owned(),
            CinemaTable::Seating => Table::create()
                .table(Seating::Table)
                .col(id(Seating::Id))
                .col(ColumnDef::new(Seating::Code).string().not_null())
                .col(ColumnDef::new(Seating::ShowRoomId).integer().not_null())
                .col(ColumnDef::new(Seating::SeatTypeId).integer().not_null())
                .col(ColumnDef::new(Seating::AddOnPrice).decimal().not_null())
                .col(created_at(Seating::CreatedAt))
                .to_owned(),
            CinemaTable::MovieSession => Table::create()
                .table(MovieSession::Table)
                .col(id(MovieSession::Id))
                .col(ColumnDef::new(MovieSession::MovieId).integer().not_null())
                .col(ColumnDef::new(MovieSession::ShowRoomId).integer().not_null())
                .col(ColumnDef::new(MovieSession::Time).timestamp().not_null())
                .col(ColumnDef::new(MovieSession::Price).decimal().not_null())
                .col(created_at(MovieSession::CreatedAt))
                .to_owned(),
            CinemaTable::Booking => Table::create()
                .table(Booking::Table)
                .col(id(Booking::Id))
                .col(ColumnDef::new(Booking::UserId).integer().not_null())
                .col(ColumnDef::new(Booking::MovieSessionId).integer().not_null())
                .col(ColumnDef::new(Booking::SeatingId).integer().not_null())
                .col(ColumnDef::new(Booking::TotalPrice).decimal().not_null())
                .col(created_at(Booking::CreatedAt))
                .to_owned(),
        }
    }
}

fn id<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn created_at<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// Every foreign key, paired with the table that owns it, in creation order.
fn foreign_keys() -> Vec<(CinemaTable, ForeignKeyCreateStatement)> {
    vec![
        (
            CinemaTable::Seating,
            ForeignKey::create()
                .name("fk_seating_show_room_id")
                .from(Seating::Table, Seating::ShowRoomId)
                .to(ShowRoom::Table, ShowRoom::Id)
                .to_owned(),
        ),
        (
            CinemaTable::Seating,
            ForeignKey::create()
                .name("fk_seating_seat_type_id")
                .from(Seating::Table, Seating::SeatTypeId)
                .to(SeatType::Table, SeatType::Id)
                .to_owned(),
        ),
        (
            CinemaTable::MovieSession,
            ForeignKey::create()
                .name("fk_movie_session_movie_id")
                .from(MovieSession::Table, MovieSession::MovieId)
                .to(Movie::Table, Movie::Id)
                .to_owned(),
        ),
        (
            CinemaTable::MovieSession,
            ForeignKey::create()
                .name("fk_movie_session_show_room_id")
                .from(MovieSession::Table, MovieSession::ShowRoomId)
                .to(ShowRoom::Table, ShowRoom::Id)
                .to_owned(),
        ),
        (
            CinemaTable::Booking,
            ForeignKey::create()
                .name("fk_booking_user_id")
                .from(Booking::Table, Booking::UserId)
                .to(User::Table, User::Id)
                .to_owned(),
        ),
        (
            CinemaTable::Booking,
            ForeignKey::create()
                .name("fk_booking_movie_session_id")
                .from(Booking::Table, Booking::MovieSessionId)
                .to(MovieSession::Table, MovieSession::Id)
                .to_owned(),
        ),
        (
            CinemaTable::Booking,
            ForeignKey::create()
                .name("fk_booking_seating_id")
                .from(Booking::Table, Booking::SeatingId)
                .to(Seating::Table, Seating::Id)
                .to_owned(),
        ),
    ]
}

fn foreign_keys_of(table: CinemaTable) -> Vec<(CinemaTable, ForeignKeyCreateStatement)> {
    foreign_keys()
        .into_iter()
        .filter(|(owner, _)| *owner == table)
        .collect()
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    #[sea_orm(iden = "firstName")]
    FirstName,
    #[sea_orm(iden = "lastName")]
    LastName,
    Email,
    Password,
    #[sea_orm(iden = "isAdmin")]
    IsAdmin,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Description,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum ShowRoom {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "totalSeats")]
    TotalSeats,
    #[sea_orm(iden = "totalRemainingSeats")]
    TotalRemainingSeats,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum SeatType {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum Seating {
    Table,
    Id,
    Code,
    #[sea_orm(iden = "showRoomId")]
    ShowRoomId,
    #[sea_orm(iden = "seatTypeId")]
    SeatTypeId,
    #[sea_orm(iden = "addOnPrice")]
    AddOnPrice,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum MovieSession {
    Table,
    Id,
    #[sea_orm(iden = "movieId")]
    MovieId,
    #[sea_orm(iden = "showRoomId")]
    ShowRoomId,
    Time,
    Price,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    #[sea_orm(iden = "userId")]
    UserId,
    #[sea_orm(iden = "movieSessionId")]
    MovieSessionId,
    #[sea_orm(iden = "seatingId")]
    SeatingId,
    #[sea_orm(iden = "totalPrice")]
    TotalPrice,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}
