//! API route definitions
//!
//! The primary API is GraphQL at /graphql. Plain HTTP routes cover probes only.

pub mod health;
