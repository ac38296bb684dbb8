//! Synchronous Hive session adapter.
//!
//! A [`HiveClient`] owns two Thrift connections, one to HiveServer2
//! for query execution and one to the Hive Metastore for catalog
//! lookups, plus one open session. Queries run through the session:
//! `execute` submits a statement and stores its operation handle, and
//! the fetch methods read rows from whatever handle is current. There
//! is never more than one execution handle; running another query
//! replaces it.
//!
//! All calls block. The adapter holds no locks and spawns no threads,
//! so it is meant to be owned by a single caller.
//!
//! ```no_run
//! use hive_client::{Endpoint, HiveConfig, HiveConnection};
//!
//! fn main() -> hive_client::HiveResult<()> {
//!     let config = HiveConfig::new(
//!         "thrift://localhost:10000".parse::<Endpoint>()?,
//!         "thrift://localhost:9083".parse::<Endpoint>()?,
//!     );
//!     let mut hive = HiveConnection::connect(&config)?;
//!
//!     hive.execute("SELECT COUNT(*) FROM default.events")?;
//!     let count = hive.fetch_one()?;
//!     println!("count: {count:?}");
//!
//!     for name in hive.get_all_tables("default")? {
//!         println!("table: {name}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{HiveClient, HiveConnection};
pub use config::{Endpoint, HiveConfig, TimeoutConfig};
pub use error::{HiveError, HiveResult};

pub use hive_thrift::{Table, TColumnValue, TRow};
