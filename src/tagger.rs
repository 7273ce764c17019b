//! Mention and hashtag scanning over note content.
//!
//! The mention pass rewrites recognized `@`/`nostr:` NIP-19 references to
//! the canonical `nostr:<identifier>` form and builds their index tags,
//! resolving relay hints for event-addressing mentions concurrently. The
//! hashtag pass then harvests `t` tags from the rewritten text without
//! touching it.

use std::sync::LazyLock;

use futures_util::stream::{FuturesUnordered, StreamExt};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pointer::{decode_identifier, MentionPointer};
use crate::resolver::RelayHintResolver;
use crate::tag::{Tag, TagSet};

/// Compiled regexes — allocated once.
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@|nostr:)(npub|nprofile|note|nevent|naddr)[a-zA-Z0-9]+").unwrap()
});
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

/// Role marker appended to `e`/`a` tags built from inline mentions.
const MENTION_MARKER: &str = "mention";

/// Canonicalized content plus the tags accumulated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedContent {
    pub content: String,
    pub tags: Vec<Tag>,
}

/// Scan `content` for inline NIP-19 mentions and hashtags.
///
/// Recognized mentions are rewritten to `nostr:<identifier>` (any leading
/// `@` or `nostr:` prefix stripped) and contribute `p`/`e`/`a` tags per
/// entity kind; hashtags contribute `t` tags and are left untouched in the
/// text. Tags are merged into `existing_tags`, keyed on their first two
/// fields; the first occurrence wins, so feeding a previous result back in
/// is a no-op.
///
/// Mention-like substrings that fail to decode are left byte-identical and
/// produce no tag; the operation itself never fails.
///
/// `npub`/`nprofile` mentions insert their tag during the scan pass.
/// `note`/`nevent`/`naddr` mentions each resolve their relay hint through
/// `resolver` concurrently, and the relative order of their tags in the
/// result is unspecified.
pub async fn tag_content<R>(content: &str, existing_tags: Vec<Tag>, resolver: &R) -> TaggedContent
where
    R: RelayHintResolver + ?Sized,
{
    let mut tags = TagSet::from(existing_tags);
    let mut lookups = FuturesUnordered::new();

    let mut rewritten = String::with_capacity(content.len());
    let mut scanned_to = 0;

    for m in MENTION_RE.find_iter(content) {
        rewritten.push_str(&content[scanned_to..m.start()]);
        scanned_to = m.end();

        let identifier = strip_mention_prefix(m.as_str());
        match decode_identifier(identifier) {
            Ok(pointer) => {
                match profile_tag(&pointer) {
                    Some(tag) => {
                        tags.insert_if_new(tag);
                    }
                    None => lookups.push(event_tags(pointer, identifier, resolver)),
                }
                rewritten.push_str("nostr:");
                rewritten.push_str(identifier);
            }
            Err(error) => {
                debug!(mention = m.as_str(), %error, "mention did not decode, leaving text unchanged");
                rewritten.push_str(m.as_str());
            }
        }
    }
    rewritten.push_str(&content[scanned_to..]);

    // Lookups complete in any order; this loop is the only writer, so the
    // duplicate check in TagSet is never racy.
    while let Some(built) = lookups.next().await {
        for tag in built {
            tags.insert_if_new(tag);
        }
    }

    for found in HASHTAG_RE.captures_iter(&rewritten) {
        tags.insert_if_new(vec!["t".to_string(), found[1].to_string()]);
    }

    TaggedContent {
        content: rewritten,
        tags: tags.into_inner(),
    }
}

/// Drop a single leading `@` or `nostr:` from a matched mention.
fn strip_mention_prefix(mention: &str) -> &str {
    mention
        .strip_prefix("nostr:")
        .or_else(|| mention.strip_prefix('@'))
        .unwrap_or(mention)
}

/// Tag for the pointers that need no relay lookup (`npub`, `nprofile`).
///
/// Relay hints on a profile pointer are not emitted into the tag.
fn profile_tag(pointer: &MentionPointer) -> Option<Tag> {
    match pointer {
        MentionPointer::Pubkey(pubkey) => Some(vec!["p".to_string(), pubkey.to_hex()]),
        MentionPointer::Profile(profile) => {
            Some(vec!["p".to_string(), profile.public_key.to_hex()])
        }
        _ => None,
    }
}

/// Tags for an event-addressing pointer (`note`, `nevent`, `naddr`),
/// consulting the resolver only when the pointer carries no relay hint of
/// its own.
async fn event_tags<R>(pointer: MentionPointer, identifier: &str, resolver: &R) -> Vec<Tag>
where
    R: RelayHintResolver + ?Sized,
{
    match pointer {
        MentionPointer::Note(id) => {
            let hint = resolver.resolve_relay_hint(identifier).await;
            vec![vec![
                "e".to_string(),
                id.to_hex(),
                hint,
                MENTION_MARKER.to_string(),
            ]]
        }
        MentionPointer::Event(event) => {
            let hint = match event.relays.first() {
                Some(relay) => relay.to_string(),
                None => resolver.resolve_relay_hint(identifier).await,
            };
            let mut built = vec![vec![
                "e".to_string(),
                event.event_id.to_hex(),
                hint,
                MENTION_MARKER.to_string(),
            ]];
            if let Some(author) = event.author {
                built.push(vec!["p".to_string(), author.to_hex()]);
            }
            built
        }
        MentionPointer::Address(address) => {
            let coordinate = format!(
                "{}:{}:{}",
                address.coordinate.kind.as_u16(),
                address.coordinate.public_key.to_hex(),
                address.coordinate.identifier,
            );
            let hint = match address.relays.first() {
                Some(relay) => relay.to_string(),
                None => resolver.resolve_relay_hint(identifier).await,
            };
            vec![
                vec![
                    "a".to_string(),
                    coordinate,
                    hint,
                    MENTION_MARKER.to_string(),
                ],
                vec!["p".to_string(), address.coordinate.public_key.to_hex()],
            ]
        }
        // npub/nprofile never reach here; the scanner inserts their tag inline.
        MentionPointer::Pubkey(_) | MentionPointer::Profile(_) => Vec::new(),
    }
}
