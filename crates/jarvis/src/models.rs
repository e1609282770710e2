//! These models represent the objects passed around by the agent
//!
//! There are a few related formats we need to interact with:
//! - transcript messages, kept by the shell that talks to a user
//! - the single outbound request the agent assembles for each user message
//! - provider specific payloads (gemini, openai), sent from the agent to the LLM
//! - connector payloads, sent from the agent to the connector execution service
//!
//! Provider and connector payloads are private to their clients. Everything
//! else is converted into the structs here as soon as it enters the crate.
pub mod message;
pub mod request;
pub mod role;
