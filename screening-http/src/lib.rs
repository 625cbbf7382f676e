//! # screening-http
//!
//! Talks to the screening backend over HTTP. [`HttpClient`] implements
//! [`ScoringService`](screening::ScoringService) for survey submission and
//! exposes the account endpoints alongside it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use screening::{AnswerStore, Session};
//! use screening_http::{ClientConfig, HttpClient};
//!
//! let config = ClientConfig::load(Some("screening.toml".as_ref()))?;
//! let client = HttpClient::new(&config)?;
//!
//! let auth = client.login("ada@example.com", "hunter22").await?;
//! let token = auth.auth_token.unwrap_or_default();
//!
//! let assessment = session.submit(&client, &token).await?;
//! ```

mod classify;
mod client;
mod config;

pub use client::HttpClient;
pub use config::{ClientConfig, ConfigError};
