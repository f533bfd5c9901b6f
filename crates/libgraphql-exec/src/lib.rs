//! A GraphQL execution engine.
//!
//! A [`Schema`](schema::Schema) is built from Rust types and resolver
//! closures with a [`SchemaBuilder`](schema::SchemaBuilder). Queries are then
//! run through three steps:
//!
//! 1. [`operation::parse`] turns query text and variables into a
//!    [`Query`](operation::Query).
//! 2. [`validation::validate`] checks the query against the schema and
//!    decodes every selection's arguments.
//! 3. [`Executor::execute`](execution::Executor::execute) evaluates it into a
//!    result [`Value`](value::Value).
//!
//! [`Schema::execute_request`](schema::Schema::execute_request) chains the
//! three.

mod context;
pub mod error;
pub mod execution;
mod macros;
pub mod operation;
mod request;
pub mod schema;
pub mod types;
pub mod validation;
pub mod value;

pub use context::Context;
pub use request::Request;
pub use request::Response;
