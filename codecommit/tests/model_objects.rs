/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use codecommit::input::{CreateRepositoryInput, GetFileInput, PutFileInput, TagResourceInput};
use codecommit::model::{Commit, FileModeTypeEnum, Target, UserInfo};
use codecommit::output::{GetFileOutput, ListTagsForResourceOutput};
use codecommit::Blob;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn fresh_shapes_are_empty() {
    let commit = Commit::builder().build();
    assert_eq!(commit, Commit::default());
    assert_eq!(commit.commit_id(), None);
    assert_eq!(commit.parents(), None);
    assert_eq!(format!("{:?}", commit), "Commit");
}

#[test]
fn accessors_return_what_was_set() {
    let output = GetFileOutput::builder()
        .commit_id("c0ffee")
        .file_mode(FileModeTypeEnum::Executable)
        .file_size(2048)
        .file_content(Blob::new("#!/bin/sh\n"))
        .build();
    assert_eq!(output.commit_id(), Some("c0ffee"));
    assert_eq!(output.file_mode(), Some(&FileModeTypeEnum::Executable));
    assert_eq!(output.file_size(), Some(2048));
    assert_eq!(
        output.file_content().map(|blob| blob.as_ref()),
        Some(&b"#!/bin/sh\n"[..])
    );
    assert_eq!(output.blob_id(), None);
}

#[test]
fn set_and_get_on_builders() {
    let builder = PutFileInput::builder()
        .repository_name("MyDemoRepo")
        .set_branch_name(Some("main".to_string()))
        .set_file_mode(None);
    assert_eq!(builder.get_repository_name().as_deref(), Some("MyDemoRepo"));
    assert_eq!(builder.get_branch_name().as_deref(), Some("main"));
    assert_eq!(builder.get_file_mode(), &None);

    let builder = builder.set_branch_name(None);
    assert_eq!(builder.get_branch_name(), &None);
}

#[test]
fn fields_are_mutable_after_build() {
    let mut input = GetFileInput::builder()
        .repository_name("MyDemoRepo")
        .build();
    input.file_path = Some("README.md".to_string());
    assert_eq!(input.file_path(), Some("README.md"));
    input.repository_name = None;
    assert_eq!(input.repository_name(), None);
}

#[test]
fn list_setters_accumulate() {
    let commit = Commit::builder()
        .parents("a1")
        .parents("b2")
        .parents("c3")
        .build();
    assert_eq!(
        commit.parents(),
        Some(&["a1".to_string(), "b2".to_string(), "c3".to_string()][..])
    );

    let replaced = commit
        .into_builder()
        .set_parents(Some(vec!["d4".to_string()]))
        .build();
    assert_eq!(replaced.parents(), Some(&["d4".to_string()][..]));
}

#[test]
fn nested_shapes_compose() {
    let target = Target::builder()
        .repository_name("MyDemoRepo")
        .source_reference("feature")
        .destination_reference("main")
        .build();
    let input = codecommit::input::CreatePullRequestInput::builder()
        .title("Add README")
        .targets(target.clone())
        .build();
    assert_eq!(input.targets(), Some(&[target][..]));
    assert_eq!(
        input.targets().unwrap()[0].source_reference(),
        Some("feature")
    );
}

#[test]
fn create_repository_scenario() {
    let input = CreateRepositoryInput::builder()
        .repository_name("my-repo")
        .repository_description("test")
        .add_tags_entry("env", "dev")
        .unwrap()
        .build();
    assert_eq!(input.repository_name(), Some("my-repo"));
    assert_eq!(input.repository_description(), Some("test"));
    assert_eq!(
        input.tags(),
        Some(&HashMap::from([("env".to_string(), "dev".to_string())]))
    );

    let debug = format!("{:?}", input);
    assert!(debug.contains("repository_name: \"my-repo\""), "{}", debug);
    assert!(
        debug.contains("repository_description: \"test\""),
        "{}",
        debug
    );
    assert!(debug.contains("tags: {\"env\": \"dev\"}"), "{}", debug);
}

#[test]
fn debug_omits_unset_fields() {
    let input = CreateRepositoryInput::builder()
        .repository_name("MyDemoRepo")
        .build();
    let debug = format!("{:?}", input);
    assert_eq!(
        debug,
        "CreateRepositoryInput { repository_name: \"MyDemoRepo\" }"
    );
}

#[test]
fn duplicate_tag_keys_are_rejected() {
    let err = CreateRepositoryInput::builder()
        .add_tags_entry("env", "dev")
        .unwrap()
        .add_tags_entry("env", "prod")
        .unwrap_err();
    assert_eq!(err.field(), "tags");
    assert_eq!(err.key(), "env");

    let input = TagResourceInput::builder()
        .add_tags_entry("env", "dev")
        .unwrap()
        .clear_tags_entries()
        .add_tags_entry("env", "prod")
        .unwrap()
        .build();
    assert_eq!(
        input.tags().unwrap().get("env").map(String::as_str),
        Some("prod")
    );
}

#[test]
fn plain_map_setter_overwrites() {
    let output = ListTagsForResourceOutput::builder()
        .tags("env", "dev")
        .tags("team", "core")
        .tags("env", "prod")
        .build();
    let tags = output.tags().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags["env"], "prod");
}

#[test]
fn cleared_map_is_unset() {
    let builder = TagResourceInput::builder()
        .tags("env", "dev")
        .clear_tags_entries();
    assert_eq!(builder.get_tags(), &None);
    assert_eq!(builder.build().tags(), None);
}

#[test]
fn equal_commits_hash_alike() {
    let build = || {
        let user = UserInfo::builder()
            .name("Mary Major")
            .email("mary_major@example.com")
            .date("1484167798 -0800")
            .build();
        Commit::builder()
            .commit_id("317f8570EXAMPLE")
            .tree_id("347a3408EXAMPLE")
            .parents("a")
            .parents("b")
            .message("Fixed a typo")
            .author(user.clone())
            .committer(user)
            .additional_data("")
            .build()
    };
    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut changed = b.clone();
    changed.message = Some("Fixed another typo".to_string());
    assert_ne!(a, changed);
    changed.message = None;
    assert_ne!(a, changed);
}

#[test]
fn into_builder_preserves_every_field() {
    let commit = Commit::builder()
        .commit_id("317f8570EXAMPLE")
        .tree_id("347a3408EXAMPLE")
        .parents("4c925148EXAMPLE")
        .additional_data("")
        .build();
    let rebuilt = commit.clone().into_builder().build();
    assert_eq!(rebuilt, commit);
    let rebuilt = codecommit::model::commit::Builder::from(commit.clone())
        .build();
    assert_eq!(rebuilt, commit);
}

fn commit_strategy() -> impl Strategy<Value = Commit> {
    (
        proptest::option::of("[0-9a-f]{8}"),
        proptest::option::of(".{0,16}"),
        proptest::option::of(proptest::collection::vec("[0-9a-f]{8}", 0..3)),
    )
        .prop_map(|(commit_id, message, parents)| {
            Commit::builder()
                .set_commit_id(commit_id)
                .set_message(message)
                .set_parents(parents)
                .build()
        })
}

proptest! {
    #[test]
    fn equality_is_consistent_with_hash(a in commit_strategy(), b in commit_strategy()) {
        prop_assert_eq!(a.clone(), a.clone());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        let copy = a.clone().into_builder().build();
        prop_assert_eq!(hash_of(&copy), hash_of(&a));
    }
}
