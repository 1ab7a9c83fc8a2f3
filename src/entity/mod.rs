//! Database entity models for the cinema schema.
//!
//! One module per table. Rust fields are snake_case and are mapped onto the
//! camelCase column names the migration creates.
//!
//! Foreign keys between the cinema tables:
//!
//! ```text
//! seating       -> show_room, seat_type
//! movie_session -> movie, show_room
//! booking       -> user, movie_session, seating
//! ```
//!
//! `menu_item` stands apart and references only itself.

pub mod booking;
pub mod menu_item;
pub mod movie;
pub mod movie_session;
pub mod seat_type;
pub mod seating;
pub mod show_room;
pub mod user;

/// Glob-importable aliases for every entity.
pub mod prelude {
    pub use super::booking::Entity as Booking;
    pub use super::menu_item::Entity as MenuItem;
    pub use super::movie::Entity as Movie;
    pub use super::movie_session::Entity as MovieSession;
    pub use super::seat_type::Entity as SeatType;
    pub use super::seating::Entity as Seating;
    pub use super::show_room::Entity as ShowRoom;
    pub use super::user::Entity as User;
}
