//! # Holocron - a GraphQL API for Star Wars people and starships
//!
//! Holocron exposes create/read/update/delete operations for two independent
//! entities, `Person` and `Starship`, over GraphQL, persisting them in SQLite.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default holocron.toml
//! holocron init
//!
//! # Serve the API on http://127.0.0.1:3000/api
//! holocron serve
//!
//! # Run an operation without a server
//! holocron mutate 'createPerson(data: { name: "Luke", mass: 77 }) { id }'
//! holocron query '{ findPerson(where: { name: "Luke" }) { id mass } }'
//! ```
//!
//! ## Layers
//!
//! Requests flow `graphql` -> `service` -> `storage`, with [`query`] holding
//! the typed arguments every layer shares.
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (`Person`, `Starship`, `StarshipClass`)
//! - [`query`]: Operation arguments and the filter/update grammar
//! - [`service`]: Per-entity services
//! - [`storage`]: SQLite storage layer
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `holocron.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `HolocronError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for people and starships.
pub mod model;

pub mod query;

pub mod service;

/// SQLite storage layer.
pub mod storage;

/// Input validation utilities.
///
/// Validates names, ids and pagination arguments.
pub mod validation;
