// Composition root for the portfolio site.
//
// Responsibilities
// - Read config from environment.
// - Hold the shared state handed to every inbound adapter.
// - Assemble the HTTP and GraphQL surfaces.
//
// Concrete adapters are instantiated in main.rs.

pub mod config;
pub mod graphql;
pub mod http;
pub mod responses;
pub mod state;
