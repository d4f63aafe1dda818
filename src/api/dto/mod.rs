//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are camelCase JSON validated with `validator`; domain rules
//! are still enforced by the value objects and aggregates behind them.

pub mod ad;
pub mod health;
pub mod message;
pub mod search;
pub mod user;
