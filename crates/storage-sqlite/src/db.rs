//! Database connection management and the serialized write actor.
//!
//! Reads go straight to the r2d2 pool. All mutations flow through a single
//! dedicated writer thread so SQLite only ever sees one writer; each write
//! job executes inside an immediate transaction, which is what makes
//! delete-then-insert sequences (budget replacement) atomic to observers.

use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::warn;

use budgetwise_core::errors::{DatabaseError, Error, Result};

use crate::errors::StorageError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Ensures the database file's parent directory exists and returns the
/// resolved path.
pub fn init(db_path: &str) -> Result<String> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        }
    }
    Ok(db_path.to_string())
}

pub fn create_pool(db_path: &str) -> Result<DbPool> {
    Pool::builder()
        .max_size(8)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(ConnectionManager::<SqliteConnection>::new(db_path))
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()).into())
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()).into())
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()).into())
}

type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) + Send + 'static>;

/// Handle to the writer thread. Cheap to clone; every repository holds one.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<WriteJob>,
}

impl WriteHandle {
    /// Runs `job` on the writer thread inside an immediate transaction and
    /// awaits its result. A job that errors rolls the transaction back.
    pub async fn exec<T, F>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(Box::new(move |conn| {
                let result = conn
                    .immediate_transaction(|conn| job(conn).map_err(StorageError::from))
                    .map_err(Error::from);
                let _ = done_tx.send(result);
            }))
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "writer thread is not running".to_string(),
                ))
            })?;
        done_rx.await.map_err(|_| {
            Error::Database(DatabaseError::TransactionFailed(
                "write job was dropped before completion".to_string(),
            ))
        })?
    }
}

/// Spawns the writer thread with its own pooled connection.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, rx) = mpsc::channel::<WriteJob>();
    thread::spawn(move || {
        let mut conn = loop {
            match pool.get() {
                Ok(conn) => break conn,
                Err(e) => {
                    warn!("Writer could not acquire a connection yet: {}", e);
                    thread::sleep(Duration::from_millis(250));
                }
            }
        };
        while let Ok(job) = rx.recv() {
            job(&mut conn);
        }
    });
    WriteHandle { tx }
}
