//! # RelayKit Client
//!
//! Twilio REST plumbing for the RelayKit helper library.
//!
//! This crate contains:
//! - The `TwilioClient` handle and its explicit singleton cell
//! - The reqwest-based HTTP wrapper and error normalization
//! - Cursor-based pagination accumulation
//! - One module per API area: conversations, content, studio, sync,
//!   taskrouter
//! - Serverless context and response helpers
//!
//! ## Architecture
//! - Depends on `relaykit-domain` for types, errors, and preconditions
//! - Contains all "impure" code (network I/O)
//! - Validation always runs before a request is issued; vendor failures
//!   are normalized into the domain error taxonomy

pub mod cell;
pub mod client;
pub mod content;
pub mod context;
pub mod conversations;
pub mod errors;
pub mod http;
pub mod page;
pub mod response;
pub mod studio;
pub mod sync;
pub mod taskrouter;

// Re-export commonly used items
pub use cell::{ClientCell, CreateClientOptions};
pub use client::{ClientOptions, ClientParams, ProductUrls, TwilioClient};
pub use content::ContentApi;
pub use context::{ClientFactory, ServerlessContext};
pub use conversations::ConversationsApi;
pub use page::Page;
pub use response::ServerlessResponse;
pub use studio::StudioApi;
pub use sync::SyncService;
pub use taskrouter::Workspace;
