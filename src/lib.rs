//! A [SonarQube] measures and quality-gate client for report generators.
//!
//! [SonarQube]: https://www.sonarsource.com/products/sonarqube/
//!
//! The crate performs exactly two read-only lookups against a server's REST
//! API and decodes the JSON payloads into typed results:
//!
//! - [`MeasureClient::measures`] lists the project's measures in server order.
//! - [`MeasureClient::quality_gate_status`] rebuilds the quality-gate
//!   conditions as an ordered `metric name -> status` map, resolving each
//!   condition's machine key to its display name through a secondary
//!   per-metric lookup.
//!
//! HTTP transport and authentication are not part of the crate. Both live
//! behind the [`Requester`] trait: one method that GETs a formatted URL and
//! returns the parsed JSON document, or one of the two failure kinds the
//! server distinguishes ([`Error::BadRequest`] and [`Error::Unavailable`]).
//! Those failures pass through the client untouched; responses of an
//! unexpected shape fail the operation with [`Error::DecodeResponse`].
//!
//! # Usage
//!
//! Implement [`Requester`] on top of whatever HTTP stack the application
//! already uses, then hand it to a client configured for one project:
//!
//! ```no_run
//! use serde_json::Value;
//! use sonarqube_measures::{Error, MeasureClient, Requester};
//!
//! struct StubTransport;
//!
//! impl Requester for StubTransport {
//!     fn request(&self, url: &str) -> Result<Value, Error> {
//!         // Issue an authenticated GET with your HTTP stack of choice and
//!         // parse the response body here.
//!         Err(Error::Unavailable(format!("no transport wired in for {url}").into()))
//!     }
//! }
//!
//! fn main() -> Result<(), Error> {
//!     let client = MeasureClient::new(
//!         StubTransport,
//!         "https://sonar.example.com",
//!         std::env::var("SONAR_TOKEN").unwrap_or_default(),
//!         "fr.cnes:example",
//!         "main",
//!     );
//!
//!     for measure in client.measures()? {
//!         println!("{}: {}", measure.metric_key, measure.value.unwrap_or_default());
//!     }
//!     for (metric, status) in client.quality_gate_status()? {
//!         println!("{metric}: {status}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every call is synchronous and blocks until the requester returns. The
//! quality-gate lookup issues `1 + C` requests for `C` conditions, strictly
//! in sequence, and aborts on the first failure without returning a partial
//! result.
#![doc(html_root_url = "https://docs.rs/sonarqube-measures/0.1.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod client;
mod error;
mod models;
mod requester;

pub use client::MeasureClient;
pub use error::Error;
pub use models::{Measure, QualityGateStatus};
pub use requester::Requester;
