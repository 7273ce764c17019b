//! NIP-19 identifier decoding into typed mention pointers.

use nostr_sdk::nips::nip19::{self, FromBech32, Nip19, Nip19Coordinate, Nip19Event, Nip19Profile};
use nostr_sdk::{EventId, PublicKey};
use thiserror::Error;

/// A decoded NIP-19 entity that can be mentioned inline in note content.
#[derive(Debug, Clone)]
pub enum MentionPointer {
    /// `npub`: a bare public key.
    Pubkey(PublicKey),
    /// `nprofile`: a public key with optional relay hints.
    Profile(Nip19Profile),
    /// `note`: a bare event id.
    Note(EventId),
    /// `nevent`: an event id with optional relay hints and author.
    Event(Nip19Event),
    /// `naddr`: an addressable-event coordinate with optional relay hints.
    Address(Nip19Coordinate),
}

/// Why an identifier could not be turned into a [`MentionPointer`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not valid NIP-19 bech32 (bad checksum, truncated payload, unknown
    /// prefix).
    #[error("malformed identifier: {0}")]
    Malformed(#[from] nip19::Error),
    /// Valid NIP-19, but not an entity kind that can be mentioned.
    #[error("unsupported entity kind: {0}")]
    Unsupported(&'static str),
}

/// Decode a bare NIP-19 identifier (no `@` or `nostr:` prefix) into a
/// typed pointer.
///
/// This is a pure parse: no network or cache access happens here. The
/// bech32/TLV layout itself is handled by `nostr-sdk`'s nip19 codec.
pub fn decode_identifier(identifier: &str) -> Result<MentionPointer, DecodeError> {
    match Nip19::from_bech32(identifier)? {
        Nip19::Pubkey(pubkey) => Ok(MentionPointer::Pubkey(pubkey)),
        Nip19::Profile(profile) => Ok(MentionPointer::Profile(profile)),
        Nip19::EventId(id) => Ok(MentionPointer::Note(id)),
        Nip19::Event(event) => Ok(MentionPointer::Event(event)),
        Nip19::Coordinate(coordinate) => Ok(MentionPointer::Address(coordinate)),
        Nip19::Secret(_) => Err(DecodeError::Unsupported("nsec")),
    }
}
