//! # mes-data
//!
//! PostgreSQL data access for the MES lookup tables, master data, event logs
//! and notes. SQL is assembled with `mes-query`; this crate adds the executor
//! trait, row mapping, table descriptors, repository operations, pooling and
//! statement logging.
//!
//! ```ignore
//! use mes_data::{DbConfig, InstrumentedClient, create_pool, repo};
//! use mes_data::input::StateLogFilter;
//! use mes_data::model::StateLog;
//! use mes_query::Page;
//!
//! let config = DbConfig::from_env()?;
//! let pool = create_pool(&config)?;
//! let client = InstrumentedClient::new(pool.get().await?).with_config(config.log.monitor_config());
//!
//! let filter = StateLogFilter { asset_id: Some(3), ..Default::default() };
//! let logs: Vec<StateLog> = repo::list(&client, filter, Page::new(50, 0)).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod monitor;
pub mod note;
pub mod pool;
pub mod repo;
pub mod row;
pub mod table;

pub use client::GenericClient;
pub use config::{DbConfig, LogConfig};
pub use error::{DataError, DataResult};
pub use monitor::{InstrumentedClient, MonitorConfig};
pub use note::NoteKind;
pub use pool::{check_connection, create_pool, spawn_idle_reaper};
pub use row::{FromRow, RowExt};
pub use table::{Entity, Mutable, Table, visible};

pub use mes_query;
