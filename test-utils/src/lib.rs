//! Venue Booking Test Utils
//!
//! Shared testing utilities for the venue booking backend. Tests build an in-memory SQLite
//! database from the entity definitions, optionally install the reservation overlap guard
//! triggers, and seed data through the factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn books_venue() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_venue_tables()
//!         .with_reservation_overlap_guard()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
