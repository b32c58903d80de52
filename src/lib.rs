//! Bookshelf application library
//!
//! Resource modules for the bookshelf CRUD service.

pub mod modules;
