//! Gallery viewer over a JSONPlaceholder-style API.
//!
//! The [`domain`] holds the gallery service, image fallback resolution, and
//! the ports it drives. [`outbound`] adapters talk to the upstream API and
//! image hosts; [`inbound`] serves the HTML views, image routes, and JSON API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
