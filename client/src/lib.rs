//! Typed client for the parts of the EPGStation v2 REST API the exporter reads.
//!
//! Only `GET /rules` is modelled. The response is split into the 200 payload
//! ([`Rules`]) and the error envelope EPGStation sends with every other status
//! ([`ApiError`]).

#[macro_use]
extern crate tracing;

mod client;
mod error;
mod types;

pub use client::{
    parse_get_rules_response,
    Client,
};
pub use error::{
    Error,
    Result,
};
pub use reqwest::StatusCode;
pub use types::{
    ApiError,
    GetRulesParams,
    Rule,
    Rules,
};
