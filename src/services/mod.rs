// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - external API clients.

pub mod completion;
pub mod identity;

pub use completion::{CompletionBackend, CompletionPayload, OpenAiClient};
pub use identity::{IdentityClient, IdentityUser};
