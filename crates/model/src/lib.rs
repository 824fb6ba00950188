//! Provider-neutral request shapes for chat-completion models.
//!
//! This crate establishes an unified vocabulary between the code that
//! knows about agents and the code that knows about a specific model
//! provider. An agent is mapped into a [`ModelRequest`], and a provider
//! crate maps the request into its own wire payload.
//!
//! Types in this crate don't define any behavior beyond a few accessors,
//! they are the constraints that both sides should adhere to.

#![deny(missing_docs)]

mod request;

pub use request::*;
