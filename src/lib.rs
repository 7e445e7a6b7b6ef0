//! In-memory book catalog.
//!
//! The crate models a small bookstore inventory: immutable [`Book`] values
//! are appended to a [`Bookstore`] and queried in aggregate: total price,
//! title listing, author filtering, and a stable cheapest-entry lookup.
//! There is no persistence and no concurrency control; a store lives and
//! dies with its owning scope, and an empty store answers every query with
//! an empty or absent result instead of an error.

pub mod catalog;

pub use catalog::{Author, Book, Bookstore, Title};
