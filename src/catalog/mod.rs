//! Book catalog wiring.
//!
//! This module holds the inventory surface: identity newtypes for titles and
//! authors, the `Book` record, and the `Bookstore` collection that answers
//! aggregate queries over it. Callers construct books, append them to a
//! store, and read answers back; nothing here touches disk or network.

pub mod identity;
pub mod model;
pub mod store;

pub use identity::{Author, Title};
pub use model::Book;
pub use store::Bookstore;
