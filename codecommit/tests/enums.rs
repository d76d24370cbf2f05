/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use codecommit::input::{
    DescribeMergeConflictsInput, DescribePullRequestEventsInput, ListRepositoriesInput,
};
use codecommit::model::{
    ChangeTypeEnum, MergeOptionTypeEnum, OrderEnum, PullRequestEventType, PullRequestStatusEnum,
    SortByEnum,
};
use std::convert::TryFrom;
use std::str::FromStr;

#[test]
fn event_type_stores_its_literal() {
    let typed = DescribePullRequestEventsInput::builder()
        .pull_request_id("42")
        .pull_request_event_type(PullRequestEventType::PullRequestStatusChanged)
        .build();
    let parsed = DescribePullRequestEventsInput::builder()
        .pull_request_id("42")
        .pull_request_event_type("PULL_REQUEST_STATUS_CHANGED".parse().unwrap())
        .build();
    assert_eq!(typed, parsed);
    assert_eq!(
        typed.pull_request_event_type().map(|t| t.as_str()),
        Some("PULL_REQUEST_STATUS_CHANGED")
    );
    assert_eq!(PullRequestEventType::values().len(), 9);
}

#[test]
fn typed_and_parsed_values_are_equal() {
    let typed = ListRepositoriesInput::builder()
        .sort_by(SortByEnum::RepositoryName)
        .order(OrderEnum::Ascending)
        .build();
    let parsed = ListRepositoriesInput::builder()
        .sort_by("repositoryName".parse::<SortByEnum>().unwrap())
        .order(OrderEnum::try_from("ascending").unwrap())
        .build();
    assert_eq!(typed, parsed);
    assert_eq!(typed.sort_by(), Some(&SortByEnum::RepositoryName));
}

#[test]
fn literals_round_trip_through_display() {
    for literal in MergeOptionTypeEnum::values() {
        let value = MergeOptionTypeEnum::from_str(literal).unwrap();
        assert_eq!(value.as_str(), *literal);
        assert_eq!(value.to_string(), *literal);
        assert_eq!(value.as_ref(), *literal);
    }
    assert_eq!(ChangeTypeEnum::values(), &["A", "M", "D"]);
    assert_eq!(PullRequestStatusEnum::Closed.as_str(), "CLOSED");
}

#[test]
fn unknown_literals_are_rejected() {
    let err = "SQUASH".parse::<MergeOptionTypeEnum>().unwrap_err();
    assert_eq!(err.kind(), "MergeOptionTypeEnum");
    assert_eq!(err.value(), "SQUASH");

    // literals are case sensitive
    assert!(OrderEnum::from_str("ASCENDING").is_err());
    assert!(PullRequestStatusEnum::try_from("open").is_err());
    assert!(ChangeTypeEnum::from_str("").is_err());
}

#[test]
fn enum_fields_take_parsed_values() {
    let merge_option: MergeOptionTypeEnum = "THREE_WAY_MERGE".parse().unwrap();
    let input = DescribeMergeConflictsInput::builder()
        .repository_name("MyDemoRepo")
        .merge_option(merge_option)
        .max_merge_hunks(5)
        .build();
    assert_eq!(
        input.merge_option(),
        Some(&MergeOptionTypeEnum::ThreeWayMerge)
    );
    assert_eq!(input.max_merge_hunks(), Some(5));
}

#[test]
fn enums_order_by_declaration() {
    let mut values = vec![
        MergeOptionTypeEnum::ThreeWayMerge,
        MergeOptionTypeEnum::FastForwardMerge,
        MergeOptionTypeEnum::SquashMerge,
    ];
    values.sort();
    let sorted: Vec<&str> = values.iter().map(|v| v.as_str()).collect();
    assert_eq!(sorted, MergeOptionTypeEnum::values());
}
