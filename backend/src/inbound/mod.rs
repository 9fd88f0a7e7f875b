//! Inbound adapters translating HTTP requests into gallery service calls.

pub mod http;
