//! Record types returned by the repository, plus the journal entry DTO.
//!
//! Every struct derives `FromRow` generically so the same type decodes from
//! SQLite and PostgreSQL rows. Adapters alias columns to field names and
//! coalesce NULLs in SQL, so no field is optional.

pub mod book;
pub mod concert;
pub mod food_place;
pub mod journal_entry;
pub mod movie;
pub mod person;
pub mod photo;
pub mod tv_show;

pub use book::Book;
pub use concert::Concert;
pub use food_place::FoodPlace;
pub use journal_entry::{JournalEntry, NewJournalEntry};
pub use movie::Movie;
pub use person::Person;
pub use photo::Photo;
pub use tv_show::TvShow;
