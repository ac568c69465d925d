use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Venue};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Venue)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw statements executed after every table exists, such as trigger definitions.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the booking domain in dependency order.
    ///
    /// Covers users, venue types, categories, amenities, occasions and their amenity links,
    /// venues and their amenity links, reservations, ratings and favourites.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_venue_tables(self) -> Self {
        self.with_table(User)
            .with_table(VenueType)
            .with_table(Category)
            .with_table(Amenity)
            .with_table(Occasion)
            .with_table(AmenityToOccasion)
            .with_table(Venue)
            .with_table(AmenityToVenue)
            .with_table(Reservation)
            .with_table(Rating)
            .with_table(Favourite)
    }

    /// Installs the triggers that reject overlapping active reservations.
    ///
    /// Requires the reservation table, so combine with `with_venue_tables()` or an
    /// explicit `with_table(Reservation)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reservation_overlap_guard(mut self) -> Self {
        self.statements.extend(
            migration::RESERVATION_OVERLAP_GUARD
                .iter()
                .map(|statement| statement.to_string()),
        );
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database, executes the configured CREATE TABLE
    /// statements and then any raw statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
