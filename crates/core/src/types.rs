/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar date without a time zone, stored as PostgreSQL `DATE`.
pub type Date = chrono::NaiveDate;

/// Fixed-point money amount, stored as PostgreSQL `NUMERIC(18, 2)`.
pub type Price = rust_decimal::Decimal;
