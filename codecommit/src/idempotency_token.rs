/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client request tokens for idempotent operations.
//!
//! `CreatePullRequest`, `PostCommentForComparedCommit`, `PostCommentForPullRequest` and
//! `PostCommentReply` accept a `client_request_token`. Repeating a request with the same
//! token lets the service recognise the retry instead of acting twice. When the caller
//! leaves the token unset, [`IdempotentInput::fill_client_request_token`] generates one
//! from the provider configured on [`Config`](crate::Config).

use std::sync::Mutex;

/// Formats 128 random bits as a version 4 UUID.
///
/// The version nibble is forced to `4` and the high bit of the variant nibble is set.
pub fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of client request tokens.
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

/// Random UUIDs from a freshly seeded generator.
pub fn default_provider() -> impl MakeIdempotencyToken {
    Mutex::new(fastrand::Rng::new())
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        // the generator holds no invariant a panic could break
        let input = match self.lock() {
            Ok(rng) => rng.u128(..),
            Err(poisoned) => poisoned.into_inner().u128(..),
        };
        uuid_v4(input)
    }
}

/// Always hands out the same token. Mostly useful in tests.
impl MakeIdempotencyToken for &'static str {
    fn make_idempotency_token(&self) -> String {
        self.to_string()
    }
}

/// An operation input carrying a `client_request_token`.
pub trait IdempotentInput {
    fn client_request_token_mut(&mut self) -> &mut Option<String>;

    /// Generates a token when none was supplied.
    ///
    /// Returns `true` if a token was generated. A caller-supplied token is never replaced.
    fn fill_client_request_token(&mut self, config: &crate::Config) -> bool {
        let token = self.client_request_token_mut();
        if token.is_some() {
            return false;
        }
        *token = Some(config.token_provider().make_idempotency_token());
        tracing::trace!("generated client request token");
        true
    }
}

#[cfg(test)]
mod test {
    use super::{default_provider, uuid_v4, IdempotentInput, MakeIdempotencyToken};
    use crate::input::{CreatePullRequestInput, PostCommentReplyInput};
    use crate::Config;
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[test]
    fn test_uuid() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(12341234), "2ff4cb00-0000-4000-8000-000000000000");
        assert_eq!(
            uuid_v4(u128::max_value()),
            "ffffffff-ffff-4fff-ffff-ffffffffffff"
        );
    }

    #[test]
    fn default_provider_makes_valid_tokens() {
        let provider = default_provider();
        let first = provider.make_idempotency_token();
        assert_valid(first.clone());
        assert_ne!(first, provider.make_idempotency_token());
    }

    #[test]
    fn seeded_providers_agree() {
        let a = Mutex::new(fastrand::Rng::with_seed(123));
        let b = Mutex::new(fastrand::Rng::with_seed(123));
        assert_eq!(a.make_idempotency_token(), b.make_idempotency_token());
        assert_eq!(a.make_idempotency_token(), b.make_idempotency_token());
    }

    #[test]
    fn missing_token_is_generated() {
        let config = Config::builder().token_provider("00000000-token").build();
        let mut input = CreatePullRequestInput::builder().title("fix").build();
        assert!(input.fill_client_request_token(&config));
        assert_eq!(input.client_request_token(), Some("00000000-token"));
    }

    #[test]
    fn supplied_token_is_kept() {
        let config = Config::builder().token_provider("generated").build();
        let mut input = PostCommentReplyInput::builder()
            .in_reply_to("abcdef01-comment")
            .content("agreed")
            .client_request_token("mine")
            .build();
        assert!(!input.fill_client_request_token(&config));
        assert_eq!(input.client_request_token(), Some("mine"));
    }

    fn assert_valid(uuid: String) {
        assert_eq!(uuid.len(), 36);
        let bytes = uuid.as_bytes();
        let dashes: Vec<usize> = uuid
            .chars()
            .enumerate()
            .filter_map(|(idx, chr)| if chr == '-' { Some(idx) } else { None })
            .collect();
        assert_eq!(dashes, vec![8, 13, 18, 23]);
        // Check version
        assert_eq!(bytes[14] as char, '4');
        // Check variant
        assert!(bytes[19] as char >= '8');
    }

    proptest! {
        #[test]
        fn doesnt_crash_uuid(v in any::<u128>()) {
            let uuid = uuid_v4(v);
            assert_valid(uuid);
        }
    }
}
