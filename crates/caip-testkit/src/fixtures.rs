//! SQLite fixture for exercising the relational-column bridge.
//!
//! The `value` column is declared without a type so tests can also store
//! integers and blobs and check how they are rejected.

use std::path::Path;

use rusqlite::types::ToSql;
use rusqlite::{params, Connection};

use caip_core::codec::sql;
use caip_core::CaipIdentifier;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS identifiers (
        row_id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL,            -- IdentifierKind label
        value                          -- canonical form, nullable
    );
    CREATE INDEX IF NOT EXISTS idx_identifiers_kind ON identifiers(kind);
"#;

/// A connection with the `identifiers` table in place.
pub struct SqlFixture {
    conn: Connection,
}

impl SqlFixture {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Self> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Store an identifier (or NULL) and return its row id.
    pub fn store<T: CaipIdentifier + ToSql>(&self, id: Option<&T>) -> rusqlite::Result<i64> {
        self.conn.execute(
            "INSERT INTO identifiers (kind, value) VALUES (?1, ?2)",
            params![T::KIND.as_str(), id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Store an arbitrary column value, bypassing the bridge.
    pub fn store_raw<T: CaipIdentifier>(&self, value: &dyn ToSql) -> rusqlite::Result<i64> {
        self.conn.execute(
            "INSERT INTO identifiers (kind, value) VALUES (?1, ?2)",
            params![T::KIND.as_str(), value],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Load a row through [`sql::read_column`].
    pub fn load<T: CaipIdentifier>(&self, row_id: i64) -> caip_core::Result<Option<T>> {
        self.conn.query_row(
            "SELECT value FROM identifiers WHERE row_id = ?1",
            params![row_id],
            |row| Ok(sql::read_column::<T, _>(row, 0)),
        )?
    }

    /// Load a row into an existing value through [`sql::scan_into`].
    pub fn scan<T: CaipIdentifier>(&self, row_id: i64, target: &mut T) -> caip_core::Result<()> {
        self.conn.query_row(
            "SELECT value FROM identifiers WHERE row_id = ?1",
            params![row_id],
            |row| Ok(sql::scan_into(target, row.get_ref(0)?)),
        )?
    }

    /// Number of stored rows for a kind.
    pub fn count<T: CaipIdentifier>(&self) -> rusqlite::Result<i64> {
        self.conn.query_row(
            "SELECT COUNT(*) FROM identifiers WHERE kind = ?1",
            params![T::KIND.as_str()],
            |row| row.get(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caip_core::{AccountId, ChainId};

    #[test]
    fn test_store_and_load() {
        let fixture = SqlFixture::open_memory().unwrap();
        let id = ChainId::must_parse("eip155:1");

        let row = fixture.store(Some(&id)).unwrap();
        assert_eq!(fixture.load::<ChainId>(row).unwrap(), Some(id));
        assert_eq!(fixture.count::<ChainId>().unwrap(), 1);
        assert_eq!(fixture.count::<AccountId>().unwrap(), 0);
    }

    #[test]
    fn test_null_row() {
        let fixture = SqlFixture::open_memory().unwrap();
        let row = fixture.store::<AccountId>(None).unwrap();
        assert_eq!(fixture.load::<AccountId>(row).unwrap(), None);
    }
}
