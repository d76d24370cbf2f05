/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]

use codecommit::model::{Comment, FileModeTypeEnum};
use codecommit::output::GetFileOutput;
use codecommit::{Blob, Instant};
use serde_json::json;

#[test]
fn shapes_round_trip_through_json() {
    let comment = Comment::builder()
        .comment_id("ff30b348EXAMPLE")
        .content("LGTM")
        .creation_date(Instant::from_epoch_seconds(1576540098))
        .deleted(false)
        .reaction_counts("THUMBSUP", 2)
        .build();
    let json = serde_json::to_value(&comment).unwrap();
    assert_eq!(json["creation_date"], json!("2019-12-16T23:48:18Z"));
    assert_eq!(json["reaction_counts"], json!({ "THUMBSUP": 2 }));
    let parsed: Comment = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, comment);
}

#[test]
fn enums_and_blobs_use_their_wire_strings() {
    let output = GetFileOutput::builder()
        .file_mode(FileModeTypeEnum::Symlink)
        .file_content(Blob::new("hi"))
        .build();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["file_mode"], json!("SYMLINK"));
    assert_eq!(json["file_content"], json!("aGk="));
    let parsed: GetFileOutput = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, output);
}

#[test]
fn unknown_enum_literal_fails_deserialization() {
    let err = serde_json::from_value::<FileModeTypeEnum>(json!("SOCKET")).unwrap_err();
    assert!(err.to_string().contains("SOCKET"));
}
