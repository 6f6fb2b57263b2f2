//! Typed client for the Metro Istanbul mobile API.
//!
//! Fetches lines, stations, directions, timetables, maps and FAQs, and
//! normalizes the API's PascalCase wire format into plain immutable values.
//!
//! # Example
//!
//! ```rust,ignore
//! use metro_istanbul::api::{MetroClient, MetroConfig, fetch_line_stations};
//! use metro_istanbul::domain::LineId;
//!
//! let client = MetroClient::new(MetroConfig::default())?;
//! let stations = fetch_line_stations(&client, LineId::M2).await?;
//! ```

pub mod api;
pub mod domain;
