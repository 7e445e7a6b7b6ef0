//! In-memory store for book records.
//!
//! The store is an append-only ordered collection: entries keep insertion
//! order, duplicates are permitted, and nothing is ever removed. Every query
//! is a single synchronous scan, so callers sharing a store across threads
//! must bring their own synchronization.

use crate::catalog::identity::{Author, Title};
use crate::catalog::model::Book;
use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
/// Ordered book inventory with aggregate queries.
///
/// Empty queries return empty or absent results rather than errors: summing
/// an empty store yields `0.0` and [`Bookstore::cheapest_book`] yields
/// `None`.
pub struct Bookstore {
    books: Vec<Book>,
}

impl Bookstore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to the end of the inventory.
    ///
    /// No validation is performed; the store accepts whatever the caller
    /// built, including repeated entries and negative prices.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// All entries in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when no book has been added yet.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Sum of all entry prices; `0.0` for an empty store.
    pub fn total_price(&self) -> f64 {
        self.books.iter().map(|book| book.price).sum()
    }

    /// Iterates titles in insertion order.
    pub fn book_titles(&self) -> impl Iterator<Item = &Title> {
        self.books.iter().map(|book| &book.title)
    }

    /// All entries whose author exactly equals `author`, in insertion order.
    ///
    /// Matching is case-sensitive; an author with no entries yields an empty
    /// vector rather than an error.
    pub fn find_books_by_author(&self, author: &Author) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| &book.author == author)
            .collect()
    }

    /// The lowest-priced entry, or `None` for an empty store.
    ///
    /// The strict `<` comparison keeps the earliest entry on price ties;
    /// `Iterator::min_by` would keep the last one.
    pub fn cheapest_book(&self) -> Option<&Book> {
        let mut cheapest: Option<&Book> = None;
        for book in &self.books {
            match cheapest {
                Some(current) if book.price < current.price => cheapest = Some(book),
                None => cheapest = Some(book),
                _ => {}
            }
        }
        cheapest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_empty_answers() {
        let store = Bookstore::new();
        assert!(store.is_empty());
        assert_eq!(store.total_price(), 0.0);
        assert_eq!(store.book_titles().count(), 0);
        assert!(store.find_books_by_author(&Author::from("anyone")).is_empty());
        assert!(store.cheapest_book().is_none());
    }

    #[test]
    fn duplicates_are_kept_and_counted() {
        let mut store = Bookstore::new();
        let book = Book::new("Dune", "Frank Herbert", 9.99);
        store.add_book(book.clone());
        store.add_book(book);
        assert_eq!(store.len(), 2);
        assert!((store.total_price() - 19.98).abs() < 1e-9);
    }

    #[test]
    fn cheapest_keeps_first_entry_on_ties() {
        let mut store = Bookstore::new();
        store.add_book(Book::new("First", "A", 5.0));
        store.add_book(Book::new("Second", "B", 5.0));
        store.add_book(Book::new("Third", "C", 7.5));

        let cheapest = store.cheapest_book().expect("store is not empty");
        assert_eq!(cheapest.title, Title::from("First"));
    }

    #[test]
    fn negative_prices_are_stored_verbatim() {
        let mut store = Bookstore::new();
        store.add_book(Book::new("Regular", "A", 12.0));
        store.add_book(Book::new("Refund", "A", -3.0));

        assert!((store.total_price() - 9.0).abs() < 1e-9);
        let cheapest = store.cheapest_book().expect("store is not empty");
        assert_eq!(cheapest.title, Title::from("Refund"));
    }
}
