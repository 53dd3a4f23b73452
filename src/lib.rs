//! # gazette-collector
//!
//! Municipal gazette collection pipeline and publications REST API.
//!
//! Once a month the collector scrapes the gazette site for the previous
//! month's PDF editions, downloads them, re-uploads them to an
//! anonymous file host, and records the resulting public URLs through
//! the publications API. The API persists one immutable row per unique
//! file URL, filterable by competence (`YYYY-MM`).
//!
//! ## Architecture
//!
//! ```text
//! collector (bin)
//!     │
//!     ├── Competence resolver (domain/)
//!     ├── GazetteClient (scrape/)
//!     ├── fetch → upload → record (pipeline/)
//!     │                       │ HTTP
//! gazette-api (bin)           ▼
//!     ├── REST Handlers (api/)
//!     ├── PublicationService (service/)
//!     └── PublicationStore (persistence/) — PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod pipeline;
pub mod scrape;
pub mod service;
