//! # Wire Codec
//!
//! Bidirectional converter between a [`Baggage`] store and the single-line
//! textual wire format carried in a propagation header.
//!
//! ## Wire Format
//! ```text
//! list-member ("," list-member)*
//! list-member := OWS key OWS "=" OWS value OWS (";" OWS property OWS)*
//! OWS         := *( SP / HTAB )
//! ```
//!
//! ## Posture
//! - `decode` never fails: malformed list-members are skipped and input
//!   beyond the entry cap is ignored (saturate-and-stop). Baggage is
//!   best-effort metadata; rejecting a whole inbound request over one bad
//!   member would be disproportionate.
//! - `encode` never fails: it emits the longest prefix of members that
//!   fits both the entry cap and the byte cap, truncating only on member
//!   boundaries. Output length never exceeds `limits.max_bytes`.

use crate::core::entry::Entry;
use crate::core::store::Baggage;
use crate::limits::{fits_count, fits_length, Limits};
use crate::utils::encoding::{decode_value, encode_value};
use tracing::debug;

/// Strip optional whitespace (space, horizontal tab) from both token ends.
///
/// Applied exactly once, to raw wire tokens only. Whitespace inside a
/// percent-encoded payload decodes back into the value untouched.
fn trim_ows(token: &str) -> &str {
    token.trim_matches(|c| c == ' ' || c == '\t')
}

/// Decode a wire string into a store with default limits. Never fails.
pub fn decode(text: &str) -> Baggage {
    decode_with_limits(text, Limits::default())
}

/// Decode a wire string into a store with explicit limits. Never fails:
/// members with no `=` or an empty key are skipped, and once accepting a
/// new key would exceed `limits.max_entries` the remaining wire content
/// is ignored.
pub fn decode_with_limits(text: &str, limits: Limits) -> Baggage {
    let mut entries: Vec<(String, Entry)> = Vec::new();

    // A comma is only legal as a member separator: raw commas inside a
    // value must already be percent-encoded by the producer.
    for member in text.split(',') {
        let member = trim_ows(member);
        if member.is_empty() {
            continue;
        }

        // First `;` separates the key=value pair from the metadata
        // properties. Properties stay raw apart from OWS trimming.
        let (pair, properties) = match member.find(';') {
            Some(at) => (&member[..at], &member[at + 1..]),
            None => (member, ""),
        };

        let Some(eq) = pair.find('=') else {
            debug!(member, "skipping baggage member without '='");
            continue;
        };

        let key = trim_ows(&pair[..eq]);
        if key.is_empty() {
            debug!(member, "skipping baggage member with empty key");
            continue;
        }

        let value = decode_value(trim_ows(&pair[eq + 1..]));
        let metadata: Vec<String> = if properties.is_empty() {
            Vec::new()
        } else {
            properties
                .split(';')
                .map(|prop| trim_ows(prop).to_string())
                .collect()
        };

        match entries.iter().position(|(k, _)| k == key) {
            Some(at) => entries[at].1 = Entry::with_metadata(value, metadata),
            None => {
                if !fits_count(entries.len() + 1, limits.max_entries) {
                    debug!(
                        max_entries = limits.max_entries,
                        "baggage entry cap reached while decoding, ignoring remaining members"
                    );
                    break;
                }
                entries.push((key.to_string(), Entry::with_metadata(value, metadata)));
            }
        }
    }

    Baggage::from_parts(entries, limits)
}

/// Encode a store into its wire string. Never fails.
///
/// Members are rendered as `key=encoded-value` followed by `;prop` for
/// each metadata property verbatim, joined with `,`. Caps are applied
/// first-fit in entry order: the first member that would push the output
/// over `max_bytes` or the member count over `max_entries` ends the
/// output. Entries dropped here are absent from the round-trip by design.
pub fn encode(baggage: &Baggage) -> String {
    let limits = baggage.limits();
    let mut out = String::new();
    let mut emitted = 0usize;

    for (key, entry) in baggage.entries() {
        let mut member = String::with_capacity(key.len() + entry.value().len() + 1);
        member.push_str(key);
        member.push('=');
        member.push_str(&encode_value(entry.value()));
        for property in entry.metadata() {
            member.push(';');
            member.push_str(property);
        }

        let separator = usize::from(!out.is_empty());
        if !fits_count(emitted + 1, limits.max_entries)
            || !fits_length(out.len() + separator + member.len(), limits.max_bytes)
        {
            debug!(
                emitted,
                max_bytes = limits.max_bytes,
                dropped_key = %key,
                "baggage byte or entry cap reached while encoding, dropping remaining members"
            );
            break;
        }

        if separator == 1 {
            out.push(',');
        }
        out.push_str(&member);
        emitted += 1;
    }

    out
}
