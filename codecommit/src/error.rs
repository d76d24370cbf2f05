/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while building or parsing model values.
//!
//! Service-side failures are not represented here; this crate never talks to the service.

use thiserror::Error;

/// A key was added to a map field that already contained it.
///
/// Returned by the `add_<field>_entry` builder methods. Use the plain `<field>(k, v)`
/// setter to overwrite an existing entry instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate key `{key}` in map field `{field}`")]
pub struct DuplicateKeyError {
    field: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub(crate) fn new(field: &'static str, key: String) -> Self {
        tracing::debug!(field, key = %key, "rejected duplicate map entry");
        Self { field, key }
    }

    /// Name of the map field, e.g. `tags`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A string did not match any literal of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {kind}")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        tracing::debug!(kind, value, "rejected unknown enum literal");
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Name of the enumeration, e.g. `MergeOptionTypeEnum`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod test {
    use super::{DuplicateKeyError, UnknownVariantError};
    use crate::model::MergeOptionTypeEnum;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn duplicate_key_is_logged() {
        let err = DuplicateKeyError::new("tags", "env".to_string());
        assert_eq!(err.field(), "tags");
        assert_eq!(err.key(), "env");
        assert_eq!(err.to_string(), "duplicate key `env` in map field `tags`");
        assert!(logs_contain("rejected duplicate map entry"));
    }

    #[test]
    #[traced_test]
    fn unknown_literal_is_logged() {
        let err = "SQUASH".parse::<MergeOptionTypeEnum>().unwrap_err();
        assert_eq!(
            err,
            UnknownVariantError::new("MergeOptionTypeEnum", "SQUASH")
        );
        assert_eq!(err.kind(), "MergeOptionTypeEnum");
        assert_eq!(err.value(), "SQUASH");
        assert_eq!(
            err.to_string(),
            "`SQUASH` is not a valid MergeOptionTypeEnum"
        );
        assert!(logs_contain("rejected unknown enum literal"));
    }
}
