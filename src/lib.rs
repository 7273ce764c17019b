//! Inline NIP-19 mention and hashtag tagging for Nostr note content.
//!
//! Scans note text for entity references (`npub`, `nprofile`, `note`,
//! `nevent`, `naddr`) written as `@<id>` or `nostr:<id>`, rewrites them to
//! the canonical `nostr:<id>` form, and builds the `p`/`e`/`a` tags event
//! consumers use for indexing and notification. Hashtags become `t` tags
//! without the text changing.
//!
//! Relay-hint lookup for event mentions is delegated to a
//! [`RelayHintResolver`]; lookups run concurrently and the operation
//! completes once all of them have. Composing the final event, signing,
//! and transport stay with the caller.

pub mod pointer;
pub mod resolver;
pub mod tag;
pub mod tagger;

// Re-export commonly used types
pub use pointer::{decode_identifier, DecodeError, MentionPointer};
pub use resolver::{BoundedResolver, NoRelayHints, RelayHintResolver, StaticRelayHints};
pub use tag::{Tag, TagSet};
pub use tagger::{tag_content, TaggedContent};

// Re-export nostr-sdk for convenience
pub use nostr_sdk;
