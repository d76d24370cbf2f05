/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use codecommit::idempotency_token::IdempotentInput;
use codecommit::operation::{
    CreatePullRequest, GetFile, ListRepositories, OperationShape, PostCommentForPullRequest, NAMES,
};
use codecommit::Config;
use std::collections::HashSet;

fn name_of<O: OperationShape>(_: O) -> &'static str {
    O::NAME
}

#[test]
fn catalog_is_complete() {
    assert_eq!(NAMES.len(), 77);
    let unique: HashSet<&str> = NAMES.iter().copied().collect();
    assert_eq!(unique.len(), NAMES.len());
    assert!(NAMES.windows(2).all(|pair| pair[0] < pair[1]));
    for name in [
        name_of(CreatePullRequest),
        name_of(GetFile),
        name_of(ListRepositories),
    ] {
        assert!(NAMES.contains(&name), "{} missing", name);
    }
}

#[test]
fn operation_input_helpers_build_the_input_shape() {
    let input: <GetFile as OperationShape>::Input = GetFile::input()
        .repository_name("MyDemoRepo")
        .commit_specifier("main")
        .file_path("README.md")
        .build();
    assert_eq!(input.commit_specifier(), Some("main"));

    let output: <GetFile as OperationShape>::Output = codecommit::output::GetFileOutput::builder()
        .file_size(0)
        .build();
    assert_eq!(output.file_size(), Some(0));
}

#[test]
fn idempotent_inputs_receive_tokens() {
    let config = Config::builder()
        .token_provider("5a2b3c4d-token")
        .build();
    let mut input = PostCommentForPullRequest::input()
        .pull_request_id("42")
        .repository_name("MyDemoRepo")
        .content("LGTM")
        .build();
    assert!(input.fill_client_request_token(&config));
    assert_eq!(input.client_request_token(), Some("5a2b3c4d-token"));
    assert!(!input.fill_client_request_token(&config));

    let mut generated = CreatePullRequest::input().title("Add README").build();
    assert!(generated.fill_client_request_token(&Config::default()));
    assert_eq!(generated.client_request_token().map(str::len), Some(36));
}
