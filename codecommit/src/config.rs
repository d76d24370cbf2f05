/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::idempotency_token::{default_provider, MakeIdempotencyToken};
use std::fmt;

/// Client-side settings consulted when preparing operation inputs.
pub struct Config {
    pub(crate) token_provider: Box<dyn MakeIdempotencyToken>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut config = f.debug_struct("Config");
        config.finish_non_exhaustive()
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn token_provider(&self) -> &dyn MakeIdempotencyToken {
        self.token_provider.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    token_provider: Option<Box<dyn MakeIdempotencyToken>>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field(
                "token_provider",
                &self.token_provider.as_ref().map(|_| "<custom>"),
            )
            .finish()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how missing client request tokens are generated.
    pub fn token_provider(mut self, token_provider: impl MakeIdempotencyToken + 'static) -> Self {
        self.token_provider = Some(Box::new(token_provider));
        self
    }

    pub fn build(self) -> Config {
        Config {
            token_provider: self
                .token_provider
                .unwrap_or_else(|| Box::new(default_provider())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn custom_provider_is_used() {
        let config = Config::builder().token_provider("fixed").build();
        assert_eq!(config.token_provider().make_idempotency_token(), "fixed");
    }

    #[test]
    fn default_provider_generates_uuids() {
        let token = Config::default().token_provider().make_idempotency_token();
        assert_eq!(token.len(), 36);
        assert_eq!(token.as_bytes()[14], b'4');
    }
}
