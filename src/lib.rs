//! A single AWS Lambda handler that relays one todo from
//! [jsonplaceholder](https://jsonplaceholder.typicode.com).
//!
//! # Overview
//!
//! Each invocation issues exactly one HTTP GET to the fixed endpoint
//! [`TODO_URL`] and returns a [`RelayResponse`] carrying the upstream status
//! code verbatim and the response body decoded as JSON. The invocation event
//! and context are ignored; there are no parameters, no configuration, and no
//! state shared between invocations beyond the HTTP client's connection pool.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. Transport failures and
//! non-JSON upstream bodies are not caught or translated; they propagate out
//! of the handler and are reported through the Lambda runtime's own
//! error-reporting convention. Upstream 4xx/5xx statuses are not errors and
//! pass through in `statusCode` unchanged.
//!
//! # Logging
//!
//! The crate uses the [`log`](https://docs.rs/log/latest/log/) crate for
//! logging messages, under the `todo_relay` target. The binary initializes
//! `env_logger`.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod error;
mod relay;
mod response;

pub use error::{Error, Result};
pub use relay::{Relay, TODO_URL};
pub use response::RelayResponse;
