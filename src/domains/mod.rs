//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! server, following Domain-Driven Design principles for better
//! organization and scalability.

pub mod tools;
