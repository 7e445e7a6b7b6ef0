//! The book record held by the catalog.
//!
//! Books are plain immutable values: construct one, hand it to a
//! [`Bookstore`](crate::catalog::Bookstore), and never touch it again. Two
//! books with identical fields are interchangeable for membership and
//! equality checks; there is no hidden identity.

use crate::catalog::identity::{Author, Title};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One catalog entry: title, author, and price.
///
/// `price` is a plain `f64` with no unit or range enforcement; negative or
/// zero prices are stored as-is. The float field rules out `Eq`, so equality
/// stays `PartialEq` structural comparison.
pub struct Book {
    pub title: Title,
    pub author: Author,
    pub price: f64,
}

impl Book {
    /// Build a book from field values.
    ///
    /// Accepts anything convertible into the identity newtypes so call sites
    /// can pass string literals directly.
    pub fn new(title: impl Into<Title>, author: impl Into<Author>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}
