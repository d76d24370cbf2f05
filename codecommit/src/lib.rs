/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request, response and data model types for AWS CodeCommit.
//!
//! Every operation has an input shape in [`input`], an output shape in [`output`] and a
//! marker type in [`operation`] tying the two together. Shapes shared between operations
//! live in [`model`]. All shapes are built the same way:
//!
//! ```
//! let input = codecommit::input::CreateRepositoryInput::builder()
//!     .repository_name("MyDemoRepo")
//!     .repository_description("demo")
//!     .add_tags_entry("env", "dev")
//!     .unwrap()
//!     .build();
//! assert_eq!(input.repository_name(), Some("MyDemoRepo"));
//! ```

#![allow(clippy::module_inception)]
#![allow(clippy::wrong_self_convention)]

pub mod config;
pub mod error;
pub mod idempotency_token;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use config::Config;
pub use smithy_types::{Blob, Instant};

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
