use sea_orm_migration::prelude::*;

/// Message raised by the overlap triggers, surfaced to callers inside the database error.
pub const RESERVATION_OVERLAP_ERROR: &str = "reservation_overlap";

/// Triggers rejecting an active reservation whose half-open `[date_start, date_end)`
/// range intersects another active reservation of the same venue.
///
/// Exposed so test databases built from entities rather than migrations can install
/// the same guard.
pub const RESERVATION_OVERLAP_GUARD: [&str; 2] = [
    r#"
CREATE TRIGGER IF NOT EXISTS reservation_overlap_on_insert
BEFORE INSERT ON reservation
WHEN NEW.is_pending_rating AND EXISTS (
    SELECT 1 FROM reservation
    WHERE venue_id = NEW.venue_id
      AND is_pending_rating
      AND date_start < NEW.date_end
      AND date_end > NEW.date_start
)
BEGIN
    SELECT RAISE(ABORT, 'reservation_overlap');
END;
"#,
    r#"
CREATE TRIGGER IF NOT EXISTS reservation_overlap_on_update
BEFORE UPDATE OF is_pending_rating ON reservation
WHEN NEW.is_pending_rating AND NOT OLD.is_pending_rating AND EXISTS (
    SELECT 1 FROM reservation
    WHERE venue_id = NEW.venue_id
      AND id <> NEW.id
      AND is_pending_rating
      AND date_start < NEW.date_end
      AND date_end > NEW.date_start
)
BEGIN
    SELECT RAISE(ABORT, 'reservation_overlap');
END;
"#,
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for statement in RESERVATION_OVERLAP_GUARD {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TRIGGER IF EXISTS reservation_overlap_on_update")
            .await?;
        db.execute_unprepared("DROP TRIGGER IF EXISTS reservation_overlap_on_insert")
            .await?;

        Ok(())
    }
}
