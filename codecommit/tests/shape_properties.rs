/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Field-level properties checked on every structure in the crate: a value set on a builder can
//! be read back from the builder and from the built shape, converting back into a builder keeps
//! every field, and shapes that implement `Hash` hash consistently with `Eq`.

use codecommit::{input, model, output, Blob, Instant};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

macro_rules! shape_properties {
    ($(
        $test:ident: $shape:ty [$($hash:ident)?] {
            $($field:ident, $set:ident, $get:ident => $value:expr;)*
        }
    )*) => {
        $(
            #[test]
            #[allow(unused_mut, unused_variables)]
            fn $test() {
                let fields: &[&str] = &[$(stringify!($field)),*];
                let mut builder = <$shape>::builder();
                $(
                    builder = builder.$set(Some($value));
                    assert_eq!(builder.$get(), &Some($value));
                )*
                let shape = builder.clone().build();
                $(assert_eq!(shape.$field, Some($value));)*
                assert_eq!(builder.build(), shape);
                assert_eq!(shape.clone().into_builder().build(), shape);
                assert_eq!(shape == <$shape>::default(), fields.is_empty());

                let debug = format!("{:?}", shape);
                for field in fields {
                    assert!(debug.contains(&format!("{}: ", field)), "{}", debug);
                }
                $(
                    let $hash = hash_of(&shape);
                    assert_eq!($hash, hash_of(&shape.clone().into_builder().build()));
                )?

                let mut cleared = shape.clone().into_builder();
                $(cleared = cleared.$set(None);)*
                assert_eq!(cleared.build(), <$shape>::default());
            }
        )*
    };
}

shape_properties! {
    approval: model::Approval [hash] {
        user_arn, set_user_arn, get_user_arn => "userArn".to_string();
        approval_state, set_approval_state, get_approval_state => model::ApprovalState::Approve;
    }
    approval_rule: model::ApprovalRule [hash] {
        approval_rule_id, set_approval_rule_id, get_approval_rule_id =>
            "approvalRuleId".to_string();
        approval_rule_name, set_approval_rule_name, get_approval_rule_name =>
            "approvalRuleName".to_string();
        approval_rule_content, set_approval_rule_content, get_approval_rule_content =>
            "approvalRuleContent".to_string();
        rule_content_sha256, set_rule_content_sha256, get_rule_content_sha256 =>
            "ruleContentSha256".to_string();
        last_modified_date, set_last_modified_date, get_last_modified_date =>
            Instant::from_epoch_seconds(1600000007);
        creation_date, set_creation_date, get_creation_date =>
            Instant::from_epoch_seconds(1600000008);
        last_modified_user, set_last_modified_user, get_last_modified_user =>
            "lastModifiedUser".to_string();
        origin_approval_rule_template,
        set_origin_approval_rule_template,
        get_origin_approval_rule_template => model::OriginApprovalRuleTemplate::default();
    }
    approval_rule_event_metadata: model::ApprovalRuleEventMetadata [hash] {
        approval_rule_name, set_approval_rule_name, get_approval_rule_name =>
            "approvalRuleName".to_string();
        approval_rule_id, set_approval_rule_id, get_approval_rule_id =>
            "approvalRuleId".to_string();
        approval_rule_content, set_approval_rule_content, get_approval_rule_content =>
            "approvalRuleContent".to_string();
    }
    approval_rule_overridden_event_metadata: model::ApprovalRuleOverriddenEventMetadata [hash] {
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
        override_status, set_override_status, get_override_status =>
            model::OverrideStatus::Override;
    }
    approval_rule_template: model::ApprovalRuleTemplate [hash] {
        approval_rule_template_id, set_approval_rule_template_id, get_approval_rule_template_id =>
            "approvalRuleTemplateId".to_string();
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        approval_rule_template_description,
        set_approval_rule_template_description,
        get_approval_rule_template_description => "approvalRuleTemplateDescription".to_string();
        approval_rule_template_content,
        set_approval_rule_template_content,
        get_approval_rule_template_content => "approvalRuleTemplateContent".to_string();
        rule_content_sha256, set_rule_content_sha256, get_rule_content_sha256 =>
            "ruleContentSha256".to_string();
        last_modified_date, set_last_modified_date, get_last_modified_date =>
            Instant::from_epoch_seconds(1600000021);
        creation_date, set_creation_date, get_creation_date =>
            Instant::from_epoch_seconds(1600000022);
        last_modified_user, set_last_modified_user, get_last_modified_user =>
            "lastModifiedUser".to_string();
    }
    approval_state_changed_event_metadata: model::ApprovalStateChangedEventMetadata [hash] {
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
        approval_status, set_approval_status, get_approval_status => model::ApprovalState::Approve;
    }
    batch_associate_approval_rule_template_with_repositories_error:
        model::BatchAssociateApprovalRuleTemplateWithRepositoriesError [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        error_code, set_error_code, get_error_code => "errorCode".to_string();
        error_message, set_error_message, get_error_message => "errorMessage".to_string();
    }
    batch_describe_merge_conflicts_error: model::BatchDescribeMergeConflictsError [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        exception_name, set_exception_name, get_exception_name => "exceptionName".to_string();
        message, set_message, get_message => "message".to_string();
    }
    batch_disassociate_approval_rule_template_from_repositories_error:
        model::BatchDisassociateApprovalRuleTemplateFromRepositoriesError [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        error_code, set_error_code, get_error_code => "errorCode".to_string();
        error_message, set_error_message, get_error_message => "errorMessage".to_string();
    }
    batch_get_commits_error: model::BatchGetCommitsError [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        error_code, set_error_code, get_error_code => "errorCode".to_string();
        error_message, set_error_message, get_error_message => "errorMessage".to_string();
    }
    blob_metadata: model::BlobMetadata [hash] {
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        path, set_path, get_path => "path".to_string();
        mode, set_mode, get_mode => "mode".to_string();
    }
    branch_info: model::BranchInfo [hash] {
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
    }
    comment: model::Comment [] {
        comment_id, set_comment_id, get_comment_id => "commentId".to_string();
        content, set_content, get_content => "content".to_string();
        in_reply_to, set_in_reply_to, get_in_reply_to => "inReplyTo".to_string();
        creation_date, set_creation_date, get_creation_date =>
            Instant::from_epoch_seconds(1600000046);
        last_modified_date, set_last_modified_date, get_last_modified_date =>
            Instant::from_epoch_seconds(1600000047);
        author_arn, set_author_arn, get_author_arn => "authorArn".to_string();
        deleted, set_deleted, get_deleted => true;
        client_request_token, set_client_request_token, get_client_request_token =>
            "clientRequestToken".to_string();
        caller_reactions, set_caller_reactions, get_caller_reactions =>
            vec!["callerReactions".to_string()];
        reaction_counts, set_reaction_counts, get_reaction_counts =>
            HashMap::from([("reactionCounts".to_string(), 54)]);
    }
    comments_for_compared_commit: model::CommentsForComparedCommit [] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        before_blob_id, set_before_blob_id, get_before_blob_id => "beforeBlobId".to_string();
        after_blob_id, set_after_blob_id, get_after_blob_id => "afterBlobId".to_string();
        location, set_location, get_location => model::Location::default();
        comments, set_comments, get_comments => vec![model::Comment::default()];
    }
    comments_for_pull_request: model::CommentsForPullRequest [] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        before_blob_id, set_before_blob_id, get_before_blob_id => "beforeBlobId".to_string();
        after_blob_id, set_after_blob_id, get_after_blob_id => "afterBlobId".to_string();
        location, set_location, get_location => model::Location::default();
        comments, set_comments, get_comments => vec![model::Comment::default()];
    }
    commit: model::Commit [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
        parents, set_parents, get_parents => vec!["parents".to_string()];
        message, set_message, get_message => "message".to_string();
        author, set_author, get_author => model::UserInfo::default();
        committer, set_committer, get_committer => model::UserInfo::default();
        additional_data, set_additional_data, get_additional_data => "additionalData".to_string();
    }
    conflict: model::Conflict [hash] {
        conflict_metadata, set_conflict_metadata, get_conflict_metadata =>
            model::ConflictMetadata::default();
        merge_hunks, set_merge_hunks, get_merge_hunks => vec![model::MergeHunk::default()];
    }
    conflict_metadata: model::ConflictMetadata [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        file_sizes, set_file_sizes, get_file_sizes => model::FileSizes::default();
        file_modes, set_file_modes, get_file_modes => model::FileModes::default();
        object_types, set_object_types, get_object_types => model::ObjectTypes::default();
        number_of_conflicts, set_number_of_conflicts, get_number_of_conflicts => 87;
        is_binary_file, set_is_binary_file, get_is_binary_file => model::IsBinaryFile::default();
        content_conflict, set_content_conflict, get_content_conflict => true;
        file_mode_conflict, set_file_mode_conflict, get_file_mode_conflict => true;
        object_type_conflict, set_object_type_conflict, get_object_type_conflict => true;
        merge_operations, set_merge_operations, get_merge_operations =>
            model::MergeOperations::default();
    }
    conflict_resolution: model::ConflictResolution [hash] {
        replace_contents, set_replace_contents, get_replace_contents =>
            vec![model::ReplaceContentEntry::default()];
        delete_files, set_delete_files, get_delete_files => vec![model::DeleteFileEntry::default()];
        set_file_modes, set_set_file_modes, get_set_file_modes =>
            vec![model::SetFileModeEntry::default()];
    }
    delete_file_entry: model::DeleteFileEntry [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
    }
    difference: model::Difference [hash] {
        before_blob, set_before_blob, get_before_blob => model::BlobMetadata::default();
        after_blob, set_after_blob, get_after_blob => model::BlobMetadata::default();
        change_type, set_change_type, get_change_type => model::ChangeTypeEnum::A;
    }
    evaluation: model::Evaluation [hash] {
        approved, set_approved, get_approved => true;
        overridden, set_overridden, get_overridden => true;
        approval_rules_satisfied, set_approval_rules_satisfied, get_approval_rules_satisfied =>
            vec!["approvalRulesSatisfied".to_string()];
        approval_rules_not_satisfied,
        set_approval_rules_not_satisfied,
        get_approval_rules_not_satisfied => vec!["approvalRulesNotSatisfied".to_string()];
    }
    file: model::File [hash] {
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        absolute_path, set_absolute_path, get_absolute_path => "absolutePath".to_string();
        relative_path, set_relative_path, get_relative_path => "relativePath".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
    }
    file_metadata: model::FileMetadata [hash] {
        absolute_path, set_absolute_path, get_absolute_path => "absolutePath".to_string();
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
    }
    file_modes: model::FileModes [hash] {
        source, set_source, get_source => model::FileModeTypeEnum::Executable;
        destination, set_destination, get_destination => model::FileModeTypeEnum::Executable;
        base, set_base, get_base => model::FileModeTypeEnum::Executable;
    }
    file_sizes: model::FileSizes [hash] {
        source, set_source, get_source => 119;
        destination, set_destination, get_destination => 120;
        base, set_base, get_base => 121;
    }
    folder: model::Folder [hash] {
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
        absolute_path, set_absolute_path, get_absolute_path => "absolutePath".to_string();
        relative_path, set_relative_path, get_relative_path => "relativePath".to_string();
    }
    is_binary_file: model::IsBinaryFile [hash] {
        source, set_source, get_source => true;
        destination, set_destination, get_destination => true;
        base, set_base, get_base => true;
    }
    location: model::Location [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        file_position, set_file_position, get_file_position => 129;
        relative_file_version, set_relative_file_version, get_relative_file_version =>
            model::RelativeFileVersionEnum::Before;
    }
    merge_hunk: model::MergeHunk [hash] {
        is_conflict, set_is_conflict, get_is_conflict => true;
        source, set_source, get_source => model::MergeHunkDetail::default();
        destination, set_destination, get_destination => model::MergeHunkDetail::default();
        base, set_base, get_base => model::MergeHunkDetail::default();
    }
    merge_hunk_detail: model::MergeHunkDetail [hash] {
        start_line, set_start_line, get_start_line => 135;
        end_line, set_end_line, get_end_line => 136;
        hunk_content, set_hunk_content, get_hunk_content => "hunkContent".to_string();
    }
    merge_metadata: model::MergeMetadata [hash] {
        is_merged, set_is_merged, get_is_merged => true;
        merged_by, set_merged_by, get_merged_by => "mergedBy".to_string();
        merge_commit_id, set_merge_commit_id, get_merge_commit_id => "mergeCommitId".to_string();
        merge_option, set_merge_option, get_merge_option =>
            model::MergeOptionTypeEnum::FastForwardMerge;
    }
    merge_operations: model::MergeOperations [hash] {
        source, set_source, get_source => model::ChangeTypeEnum::A;
        destination, set_destination, get_destination => model::ChangeTypeEnum::A;
    }
    object_types: model::ObjectTypes [hash] {
        source, set_source, get_source => model::ObjectTypeEnum::File;
        destination, set_destination, get_destination => model::ObjectTypeEnum::File;
        base, set_base, get_base => model::ObjectTypeEnum::File;
    }
    origin_approval_rule_template: model::OriginApprovalRuleTemplate [hash] {
        approval_rule_template_id, set_approval_rule_template_id, get_approval_rule_template_id =>
            "approvalRuleTemplateId".to_string();
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
    }
    pull_request: model::PullRequest [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        title, set_title, get_title => "title".to_string();
        description, set_description, get_description => "description".to_string();
        last_activity_date, set_last_activity_date, get_last_activity_date =>
            Instant::from_epoch_seconds(1600000152);
        creation_date, set_creation_date, get_creation_date =>
            Instant::from_epoch_seconds(1600000153);
        pull_request_status, set_pull_request_status, get_pull_request_status =>
            model::PullRequestStatusEnum::Open;
        author_arn, set_author_arn, get_author_arn => "authorArn".to_string();
        pull_request_targets, set_pull_request_targets, get_pull_request_targets =>
            vec![model::PullRequestTarget::default()];
        client_request_token, set_client_request_token, get_client_request_token =>
            "clientRequestToken".to_string();
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
        approval_rules, set_approval_rules, get_approval_rules =>
            vec![model::ApprovalRule::default()];
    }
    pull_request_created_event_metadata: model::PullRequestCreatedEventMetadata [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        destination_commit_id, set_destination_commit_id, get_destination_commit_id =>
            "destinationCommitId".to_string();
        merge_base, set_merge_base, get_merge_base => "mergeBase".to_string();
    }
    pull_request_event: model::PullRequestEvent [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        event_date, set_event_date, get_event_date => Instant::from_epoch_seconds(1600000167);
        pull_request_event_type, set_pull_request_event_type, get_pull_request_event_type =>
            model::PullRequestEventType::PullRequestCreated;
        actor_arn, set_actor_arn, get_actor_arn => "actorArn".to_string();
        pull_request_created_event_metadata,
        set_pull_request_created_event_metadata,
        get_pull_request_created_event_metadata =>
            model::PullRequestCreatedEventMetadata::default();
        pull_request_status_changed_event_metadata,
        set_pull_request_status_changed_event_metadata,
        get_pull_request_status_changed_event_metadata =>
            model::PullRequestStatusChangedEventMetadata::default();
        pull_request_source_reference_updated_event_metadata,
        set_pull_request_source_reference_updated_event_metadata,
        get_pull_request_source_reference_updated_event_metadata =>
            model::PullRequestSourceReferenceUpdatedEventMetadata::default();
        pull_request_merged_state_changed_event_metadata,
        set_pull_request_merged_state_changed_event_metadata,
        get_pull_request_merged_state_changed_event_metadata =>
            model::PullRequestMergedStateChangedEventMetadata::default();
        approval_rule_event_metadata,
        set_approval_rule_event_metadata,
        get_approval_rule_event_metadata => model::ApprovalRuleEventMetadata::default();
        approval_state_changed_event_metadata,
        set_approval_state_changed_event_metadata,
        get_approval_state_changed_event_metadata =>
            model::ApprovalStateChangedEventMetadata::default();
        approval_rule_overridden_event_metadata,
        set_approval_rule_overridden_event_metadata,
        get_approval_rule_overridden_event_metadata =>
            model::ApprovalRuleOverriddenEventMetadata::default();
    }
    pull_request_merged_state_changed_event_metadata:
        model::PullRequestMergedStateChangedEventMetadata [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        destination_reference, set_destination_reference, get_destination_reference =>
            "destinationReference".to_string();
        merge_metadata, set_merge_metadata, get_merge_metadata => model::MergeMetadata::default();
    }
    pull_request_source_reference_updated_event_metadata:
        model::PullRequestSourceReferenceUpdatedEventMetadata [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        merge_base, set_merge_base, get_merge_base => "mergeBase".to_string();
    }
    pull_request_status_changed_event_metadata:
        model::PullRequestStatusChangedEventMetadata [hash] {
        pull_request_status, set_pull_request_status, get_pull_request_status =>
            model::PullRequestStatusEnum::Open;
    }
    pull_request_target: model::PullRequestTarget [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_reference, set_source_reference, get_source_reference =>
            "sourceReference".to_string();
        destination_reference, set_destination_reference, get_destination_reference =>
            "destinationReference".to_string();
        destination_commit, set_destination_commit, get_destination_commit =>
            "destinationCommit".to_string();
        source_commit, set_source_commit, get_source_commit => "sourceCommit".to_string();
        merge_base, set_merge_base, get_merge_base => "mergeBase".to_string();
        merge_metadata, set_merge_metadata, get_merge_metadata => model::MergeMetadata::default();
    }
    put_file_entry: model::PutFileEntry [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
        file_content, set_file_content, get_file_content => Blob::new("fileContent");
        source_file, set_source_file, get_source_file => model::SourceFileSpecifier::default();
    }
    reaction_for_comment: model::ReactionForComment [hash] {
        reaction, set_reaction, get_reaction => model::ReactionValueFormats::default();
        reaction_users, set_reaction_users, get_reaction_users => vec!["reactionUsers".to_string()];
        reactions_from_deleted_users_count,
        set_reactions_from_deleted_users_count,
        get_reactions_from_deleted_users_count => 199;
    }
    reaction_value_formats: model::ReactionValueFormats [hash] {
        emoji, set_emoji, get_emoji => "emoji".to_string();
        short_code, set_short_code, get_short_code => "shortCode".to_string();
        unicode, set_unicode, get_unicode => "unicode".to_string();
    }
    replace_content_entry: model::ReplaceContentEntry [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        replacement_type, set_replacement_type, get_replacement_type =>
            model::ReplacementTypeEnum::KeepBase;
        content, set_content, get_content => Blob::new("content");
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
    }
    repository_metadata: model::RepositoryMetadata [hash] {
        account_id, set_account_id, get_account_id => "accountId".to_string();
        repository_id, set_repository_id, get_repository_id => "repositoryId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        repository_description, set_repository_description, get_repository_description =>
            "repositoryDescription".to_string();
        default_branch, set_default_branch, get_default_branch => "defaultBranch".to_string();
        last_modified_date, set_last_modified_date, get_last_modified_date =>
            Instant::from_epoch_seconds(1600000212);
        creation_date, set_creation_date, get_creation_date =>
            Instant::from_epoch_seconds(1600000213);
        clone_url_http, set_clone_url_http, get_clone_url_http => "cloneUrlHttp".to_string();
        clone_url_ssh, set_clone_url_ssh, get_clone_url_ssh => "cloneUrlSsh".to_string();
        arn, set_arn, get_arn => "Arn".to_string();
    }
    repository_name_id_pair: model::RepositoryNameIdPair [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        repository_id, set_repository_id, get_repository_id => "repositoryId".to_string();
    }
    repository_trigger: model::RepositoryTrigger [hash] {
        name, set_name, get_name => "name".to_string();
        destination_arn, set_destination_arn, get_destination_arn => "destinationArn".to_string();
        custom_data, set_custom_data, get_custom_data => "customData".to_string();
        branches, set_branches, get_branches => vec!["branches".to_string()];
        events, set_events, get_events => vec![model::RepositoryTriggerEventEnum::All];
    }
    repository_trigger_execution_failure: model::RepositoryTriggerExecutionFailure [hash] {
        trigger, set_trigger, get_trigger => "trigger".to_string();
        failure_message, set_failure_message, get_failure_message => "failureMessage".to_string();
    }
    set_file_mode_entry: model::SetFileModeEntry [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
    }
    source_file_specifier: model::SourceFileSpecifier [hash] {
        file_path, set_file_path, get_file_path => "filePath".to_string();
        is_move, set_is_move, get_is_move => true;
    }
    sub_module: model::SubModule [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        absolute_path, set_absolute_path, get_absolute_path => "absolutePath".to_string();
        relative_path, set_relative_path, get_relative_path => "relativePath".to_string();
    }
    symbolic_link: model::SymbolicLink [hash] {
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        absolute_path, set_absolute_path, get_absolute_path => "absolutePath".to_string();
        relative_path, set_relative_path, get_relative_path => "relativePath".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
    }
    target: model::Target [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_reference, set_source_reference, get_source_reference =>
            "sourceReference".to_string();
        destination_reference, set_destination_reference, get_destination_reference =>
            "destinationReference".to_string();
    }
    user_info: model::UserInfo [hash] {
        name, set_name, get_name => "name".to_string();
        email, set_email, get_email => "email".to_string();
        date, set_date, get_date => "date".to_string();
    }
}

shape_properties! {
    associate_approval_rule_template_with_repository_input:
        input::AssociateApprovalRuleTemplateWithRepositoryInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
    }
    batch_associate_approval_rule_template_with_repositories_input:
        input::BatchAssociateApprovalRuleTemplateWithRepositoriesInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        repository_names, set_repository_names, get_repository_names =>
            vec!["repositoryNames".to_string()];
    }
    batch_describe_merge_conflicts_input: input::BatchDescribeMergeConflictsInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        merge_option, set_merge_option, get_merge_option =>
            model::MergeOptionTypeEnum::FastForwardMerge;
        max_merge_hunks, set_max_merge_hunks, get_max_merge_hunks => 254;
        max_conflict_files, set_max_conflict_files, get_max_conflict_files => 255;
        file_paths, set_file_paths, get_file_paths => vec!["filePaths".to_string()];
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    batch_disassociate_approval_rule_template_from_repositories_input:
        input::BatchDisassociateApprovalRuleTemplateFromRepositoriesInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        repository_names, set_repository_names, get_repository_names =>
            vec!["repositoryNames".to_string()];
    }
    batch_get_commits_input: input::BatchGetCommitsInput [hash] {
        commit_ids, set_commit_ids, get_commit_ids => vec!["commitIds".to_string()];
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
    }
    batch_get_repositories_input: input::BatchGetRepositoriesInput [hash] {
        repository_names, set_repository_names, get_repository_names =>
            vec!["repositoryNames".to_string()];
    }
    create_approval_rule_template_input: input::CreateApprovalRuleTemplateInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        approval_rule_template_content,
        set_approval_rule_template_content,
        get_approval_rule_template_content => "approvalRuleTemplateContent".to_string();
        approval_rule_template_description,
        set_approval_rule_template_description,
        get_approval_rule_template_description => "approvalRuleTemplateDescription".to_string();
    }
    create_branch_input: input::CreateBranchInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
    }
    create_commit_input: input::CreateCommitInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
        parent_commit_id, set_parent_commit_id, get_parent_commit_id =>
            "parentCommitId".to_string();
        author_name, set_author_name, get_author_name => "authorName".to_string();
        email, set_email, get_email => "email".to_string();
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        put_files, set_put_files, get_put_files => vec![model::PutFileEntry::default()];
        delete_files, set_delete_files, get_delete_files => vec![model::DeleteFileEntry::default()];
        set_file_modes, set_set_file_modes, get_set_file_modes =>
            vec![model::SetFileModeEntry::default()];
    }
    create_pull_request_input: input::CreatePullRequestInput [hash] {
        title, set_title, get_title => "title".to_string();
        description, set_description, get_description => "description".to_string();
        targets, set_targets, get_targets => vec![model::Target::default()];
        client_request_token, set_client_request_token, get_client_request_token =>
            "clientRequestToken".to_string();
    }
    create_pull_request_approval_rule_input: input::CreatePullRequestApprovalRuleInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        approval_rule_name, set_approval_rule_name, get_approval_rule_name =>
            "approvalRuleName".to_string();
        approval_rule_content, set_approval_rule_content, get_approval_rule_content =>
            "approvalRuleContent".to_string();
    }
    create_repository_input: input::CreateRepositoryInput [] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        repository_description, set_repository_description, get_repository_description =>
            "repositoryDescription".to_string();
        tags, set_tags, get_tags => HashMap::from([("tags".to_string(), "tags".to_string())]);
    }
    create_unreferenced_merge_commit_input: input::CreateUnreferencedMergeCommitInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        merge_option, set_merge_option, get_merge_option =>
            model::MergeOptionTypeEnum::FastForwardMerge;
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        author_name, set_author_name, get_author_name => "authorName".to_string();
        email, set_email, get_email => "email".to_string();
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        conflict_resolution, set_conflict_resolution, get_conflict_resolution =>
            model::ConflictResolution::default();
    }
    delete_approval_rule_template_input: input::DeleteApprovalRuleTemplateInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
    }
    delete_branch_input: input::DeleteBranchInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
    }
    delete_comment_content_input: input::DeleteCommentContentInput [hash] {
        comment_id, set_comment_id, get_comment_id => "commentId".to_string();
    }
    delete_file_input: input::DeleteFileInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
        file_path, set_file_path, get_file_path => "filePath".to_string();
        parent_commit_id, set_parent_commit_id, get_parent_commit_id =>
            "parentCommitId".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        name, set_name, get_name => "name".to_string();
        email, set_email, get_email => "email".to_string();
    }
    delete_pull_request_approval_rule_input: input::DeletePullRequestApprovalRuleInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        approval_rule_name, set_approval_rule_name, get_approval_rule_name =>
            "approvalRuleName".to_string();
    }
    delete_repository_input: input::DeleteRepositoryInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
    }
    describe_merge_conflicts_input: input::DescribeMergeConflictsInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        merge_option, set_merge_option, get_merge_option =>
            model::MergeOptionTypeEnum::FastForwardMerge;
        max_merge_hunks, set_max_merge_hunks, get_max_merge_hunks => 330;
        file_path, set_file_path, get_file_path => "filePath".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    describe_pull_request_events_input: input::DescribePullRequestEventsInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        pull_request_event_type, set_pull_request_event_type, get_pull_request_event_type =>
            model::PullRequestEventType::PullRequestCreated;
        actor_arn, set_actor_arn, get_actor_arn => "actorArn".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 339;
    }
    disassociate_approval_rule_template_from_repository_input:
        input::DisassociateApprovalRuleTemplateFromRepositoryInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
    }
    evaluate_pull_request_approval_rules_input:
        input::EvaluatePullRequestApprovalRulesInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
    }
    get_approval_rule_template_input: input::GetApprovalRuleTemplateInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
    }
    get_blob_input: input::GetBlobInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
    }
    get_branch_input: input::GetBranchInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
    }
    get_comment_input: input::GetCommentInput [hash] {
        comment_id, set_comment_id, get_comment_id => "commentId".to_string();
    }
    get_comment_reactions_input: input::GetCommentReactionsInput [hash] {
        comment_id, set_comment_id, get_comment_id => "commentId".to_string();
        reaction_user_arn, set_reaction_user_arn, get_reaction_user_arn =>
            "reactionUserArn".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 353;
    }
    get_comments_for_compared_commit_input: input::GetCommentsForComparedCommitInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 358;
    }
    get_comments_for_pull_request_input: input::GetCommentsForPullRequestInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 364;
    }
    get_commit_input: input::GetCommitInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
    }
    get_differences_input: input::GetDifferencesInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_specifier, set_before_commit_specifier, get_before_commit_specifier =>
            "beforeCommitSpecifier".to_string();
        after_commit_specifier, set_after_commit_specifier, get_after_commit_specifier =>
            "afterCommitSpecifier".to_string();
        before_path, set_before_path, get_before_path => "beforePath".to_string();
        after_path, set_after_path, get_after_path => "afterPath".to_string();
        max_results, set_max_results, get_max_results => 372;
        next_token, set_next_token, get_next_token => "NextToken".to_string();
    }
    get_file_input: input::GetFileInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        commit_specifier, set_commit_specifier, get_commit_specifier =>
            "commitSpecifier".to_string();
        file_path, set_file_path, get_file_path => "filePath".to_string();
    }
    get_folder_input: input::GetFolderInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        commit_specifier, set_commit_specifier, get_commit_specifier =>
            "commitSpecifier".to_string();
        folder_path, set_folder_path, get_folder_path => "folderPath".to_string();
    }
    get_merge_commit_input: input::GetMergeCommitInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
    }
    get_merge_conflicts_input: input::GetMergeConflictsInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        merge_option, set_merge_option, get_merge_option =>
            model::MergeOptionTypeEnum::FastForwardMerge;
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        max_conflict_files, set_max_conflict_files, get_max_conflict_files => 390;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    get_merge_options_input: input::GetMergeOptionsInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
    }
    get_pull_request_input: input::GetPullRequestInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
    }
    get_pull_request_approval_states_input: input::GetPullRequestApprovalStatesInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
    }
    get_pull_request_override_state_input: input::GetPullRequestOverrideStateInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
    }
    get_repository_input: input::GetRepositoryInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
    }
    get_repository_triggers_input: input::GetRepositoryTriggersInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
    }
    list_approval_rule_templates_input: input::ListApprovalRuleTemplatesInput [hash] {
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 406;
    }
    list_associated_approval_rule_templates_for_repository_input:
        input::ListAssociatedApprovalRuleTemplatesForRepositoryInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 409;
    }
    list_branches_input: input::ListBranchesInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_pull_requests_input: input::ListPullRequestsInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        author_arn, set_author_arn, get_author_arn => "authorArn".to_string();
        pull_request_status, set_pull_request_status, get_pull_request_status =>
            model::PullRequestStatusEnum::Open;
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 416;
    }
    list_repositories_input: input::ListRepositoriesInput [hash] {
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        sort_by, set_sort_by, get_sort_by => model::SortByEnum::RepositoryName;
        order, set_order, get_order => model::OrderEnum::Ascending;
    }
    list_repositories_for_approval_rule_template_input:
        input::ListRepositoriesForApprovalRuleTemplateInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        max_results, set_max_results, get_max_results => 422;
    }
    list_tags_for_resource_input: input::ListTagsForResourceInput [hash] {
        resource_arn, set_resource_arn, get_resource_arn => "resourceArn".to_string();
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    merge_branches_by_fast_forward_input: input::MergeBranchesByFastForwardInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        target_branch, set_target_branch, get_target_branch => "targetBranch".to_string();
    }
    merge_branches_by_squash_input: input::MergeBranchesBySquashInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        target_branch, set_target_branch, get_target_branch => "targetBranch".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        author_name, set_author_name, get_author_name => "authorName".to_string();
        email, set_email, get_email => "email".to_string();
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        conflict_resolution, set_conflict_resolution, get_conflict_resolution =>
            model::ConflictResolution::default();
    }
    merge_branches_by_three_way_input: input::MergeBranchesByThreeWayInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_specifier, set_source_commit_specifier, get_source_commit_specifier =>
            "sourceCommitSpecifier".to_string();
        destination_commit_specifier,
        set_destination_commit_specifier,
        get_destination_commit_specifier => "destinationCommitSpecifier".to_string();
        target_branch, set_target_branch, get_target_branch => "targetBranch".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        author_name, set_author_name, get_author_name => "authorName".to_string();
        email, set_email, get_email => "email".to_string();
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        conflict_resolution, set_conflict_resolution, get_conflict_resolution =>
            model::ConflictResolution::default();
    }
    merge_pull_request_by_fast_forward_input: input::MergePullRequestByFastForwardInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
    }
    merge_pull_request_by_squash_input: input::MergePullRequestBySquashInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        author_name, set_author_name, get_author_name => "authorName".to_string();
        email, set_email, get_email => "email".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        conflict_resolution, set_conflict_resolution, get_conflict_resolution =>
            model::ConflictResolution::default();
    }
    merge_pull_request_by_three_way_input: input::MergePullRequestByThreeWayInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        conflict_detail_level, set_conflict_detail_level, get_conflict_detail_level =>
            model::ConflictDetailLevelTypeEnum::FileLevel;
        conflict_resolution_strategy,
        set_conflict_resolution_strategy,
        get_conflict_resolution_strategy => model::ConflictResolutionStrategyTypeEnum::None;
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        author_name, set_author_name, get_author_name => "authorName".to_string();
        email, set_email, get_email => "email".to_string();
        keep_empty_folders, set_keep_empty_folders, get_keep_empty_folders => true;
        conflict_resolution, set_conflict_resolution, get_conflict_resolution =>
            model::ConflictResolution::default();
    }
    override_pull_request_approval_rules_input:
        input::OverridePullRequestApprovalRulesInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
        override_status, set_override_status, get_override_status =>
            model::OverrideStatus::Override;
    }
    post_comment_for_compared_commit_input: input::PostCommentForComparedCommitInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        location, set_location, get_location => model::Location::default();
        content, set_content, get_content => "content".to_string();
        client_request_token, set_client_request_token, get_client_request_token =>
            "clientRequestToken".to_string();
    }
    post_comment_for_pull_request_input: input::PostCommentForPullRequestInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        location, set_location, get_location => model::Location::default();
        content, set_content, get_content => "content".to_string();
        client_request_token, set_client_request_token, get_client_request_token =>
            "clientRequestToken".to_string();
    }
    post_comment_reply_input: input::PostCommentReplyInput [hash] {
        in_reply_to, set_in_reply_to, get_in_reply_to => "inReplyTo".to_string();
        client_request_token, set_client_request_token, get_client_request_token =>
            "clientRequestToken".to_string();
        content, set_content, get_content => "content".to_string();
    }
    put_comment_reaction_input: input::PutCommentReactionInput [hash] {
        comment_id, set_comment_id, get_comment_id => "commentId".to_string();
        reaction_value, set_reaction_value, get_reaction_value => "reactionValue".to_string();
    }
    put_file_input: input::PutFileInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        branch_name, set_branch_name, get_branch_name => "branchName".to_string();
        file_content, set_file_content, get_file_content => Blob::new("fileContent");
        file_path, set_file_path, get_file_path => "filePath".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
        parent_commit_id, set_parent_commit_id, get_parent_commit_id =>
            "parentCommitId".to_string();
        commit_message, set_commit_message, get_commit_message => "commitMessage".to_string();
        name, set_name, get_name => "name".to_string();
        email, set_email, get_email => "email".to_string();
    }
    put_repository_triggers_input: input::PutRepositoryTriggersInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        triggers, set_triggers, get_triggers => vec![model::RepositoryTrigger::default()];
    }
    tag_resource_input: input::TagResourceInput [] {
        resource_arn, set_resource_arn, get_resource_arn => "resourceArn".to_string();
        tags, set_tags, get_tags => HashMap::from([("tags".to_string(), "tags".to_string())]);
    }
    test_repository_triggers_input: input::TestRepositoryTriggersInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        triggers, set_triggers, get_triggers => vec![model::RepositoryTrigger::default()];
    }
    untag_resource_input: input::UntagResourceInput [hash] {
        resource_arn, set_resource_arn, get_resource_arn => "resourceArn".to_string();
        tag_keys, set_tag_keys, get_tag_keys => vec!["tagKeys".to_string()];
    }
    update_approval_rule_template_content_input:
        input::UpdateApprovalRuleTemplateContentInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        new_rule_content, set_new_rule_content, get_new_rule_content =>
            "newRuleContent".to_string();
        existing_rule_content_sha256,
        set_existing_rule_content_sha256,
        get_existing_rule_content_sha256 => "existingRuleContentSha256".to_string();
    }
    update_approval_rule_template_description_input:
        input::UpdateApprovalRuleTemplateDescriptionInput [hash] {
        approval_rule_template_name,
        set_approval_rule_template_name,
        get_approval_rule_template_name => "approvalRuleTemplateName".to_string();
        approval_rule_template_description,
        set_approval_rule_template_description,
        get_approval_rule_template_description => "approvalRuleTemplateDescription".to_string();
    }
    update_approval_rule_template_name_input: input::UpdateApprovalRuleTemplateNameInput [hash] {
        old_approval_rule_template_name,
        set_old_approval_rule_template_name,
        get_old_approval_rule_template_name => "oldApprovalRuleTemplateName".to_string();
        new_approval_rule_template_name,
        set_new_approval_rule_template_name,
        get_new_approval_rule_template_name => "newApprovalRuleTemplateName".to_string();
    }
    update_comment_input: input::UpdateCommentInput [hash] {
        comment_id, set_comment_id, get_comment_id => "commentId".to_string();
        content, set_content, get_content => "content".to_string();
    }
    update_default_branch_input: input::UpdateDefaultBranchInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        default_branch_name, set_default_branch_name, get_default_branch_name =>
            "defaultBranchName".to_string();
    }
    update_pull_request_approval_rule_content_input:
        input::UpdatePullRequestApprovalRuleContentInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        approval_rule_name, set_approval_rule_name, get_approval_rule_name =>
            "approvalRuleName".to_string();
        existing_rule_content_sha256,
        set_existing_rule_content_sha256,
        get_existing_rule_content_sha256 => "existingRuleContentSha256".to_string();
        new_rule_content, set_new_rule_content, get_new_rule_content =>
            "newRuleContent".to_string();
    }
    update_pull_request_approval_state_input: input::UpdatePullRequestApprovalStateInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        revision_id, set_revision_id, get_revision_id => "revisionId".to_string();
        approval_state, set_approval_state, get_approval_state => model::ApprovalState::Approve;
    }
    update_pull_request_description_input: input::UpdatePullRequestDescriptionInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        description, set_description, get_description => "description".to_string();
    }
    update_pull_request_status_input: input::UpdatePullRequestStatusInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        pull_request_status, set_pull_request_status, get_pull_request_status =>
            model::PullRequestStatusEnum::Open;
    }
    update_pull_request_title_input: input::UpdatePullRequestTitleInput [hash] {
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        title, set_title, get_title => "title".to_string();
    }
    update_repository_description_input: input::UpdateRepositoryDescriptionInput [hash] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        repository_description, set_repository_description, get_repository_description =>
            "repositoryDescription".to_string();
    }
    update_repository_name_input: input::UpdateRepositoryNameInput [hash] {
        old_name, set_old_name, get_old_name => "oldName".to_string();
        new_name, set_new_name, get_new_name => "newName".to_string();
    }
}

shape_properties! {
    associate_approval_rule_template_with_repository_output:
        output::AssociateApprovalRuleTemplateWithRepositoryOutput [hash] {
    }
    batch_associate_approval_rule_template_with_repositories_output:
        output::BatchAssociateApprovalRuleTemplateWithRepositoriesOutput [hash] {
        associated_repository_names,
        set_associated_repository_names,
        get_associated_repository_names => vec!["associatedRepositoryNames".to_string()];
        errors, set_errors, get_errors =>
            vec![model::BatchAssociateApprovalRuleTemplateWithRepositoriesError::default()];
    }
    batch_describe_merge_conflicts_output: output::BatchDescribeMergeConflictsOutput [hash] {
        conflicts, set_conflicts, get_conflicts => vec![model::Conflict::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        errors, set_errors, get_errors => vec![model::BatchDescribeMergeConflictsError::default()];
        destination_commit_id, set_destination_commit_id, get_destination_commit_id =>
            "destinationCommitId".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        base_commit_id, set_base_commit_id, get_base_commit_id => "baseCommitId".to_string();
    }
    batch_disassociate_approval_rule_template_from_repositories_output:
        output::BatchDisassociateApprovalRuleTemplateFromRepositoriesOutput [hash] {
        disassociated_repository_names,
        set_disassociated_repository_names,
        get_disassociated_repository_names => vec!["disassociatedRepositoryNames".to_string()];
        errors, set_errors, get_errors =>
            vec![model::BatchDisassociateApprovalRuleTemplateFromRepositoriesError::default()];
    }
    batch_get_commits_output: output::BatchGetCommitsOutput [hash] {
        commits, set_commits, get_commits => vec![model::Commit::default()];
        errors, set_errors, get_errors => vec![model::BatchGetCommitsError::default()];
    }
    batch_get_repositories_output: output::BatchGetRepositoriesOutput [hash] {
        repositories, set_repositories, get_repositories =>
            vec![model::RepositoryMetadata::default()];
        repositories_not_found, set_repositories_not_found, get_repositories_not_found =>
            vec!["repositoriesNotFound".to_string()];
    }
    create_approval_rule_template_output: output::CreateApprovalRuleTemplateOutput [hash] {
        approval_rule_template, set_approval_rule_template, get_approval_rule_template =>
            model::ApprovalRuleTemplate::default();
    }
    create_branch_output: output::CreateBranchOutput [hash] {
    }
    create_commit_output: output::CreateCommitOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
        files_added, set_files_added, get_files_added => vec![model::FileMetadata::default()];
        files_updated, set_files_updated, get_files_updated => vec![model::FileMetadata::default()];
        files_deleted, set_files_deleted, get_files_deleted => vec![model::FileMetadata::default()];
    }
    create_pull_request_output: output::CreatePullRequestOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    create_pull_request_approval_rule_output: output::CreatePullRequestApprovalRuleOutput [hash] {
        approval_rule, set_approval_rule, get_approval_rule => model::ApprovalRule::default();
    }
    create_repository_output: output::CreateRepositoryOutput [hash] {
        repository_metadata, set_repository_metadata, get_repository_metadata =>
            model::RepositoryMetadata::default();
    }
    create_unreferenced_merge_commit_output: output::CreateUnreferencedMergeCommitOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
    }
    delete_approval_rule_template_output: output::DeleteApprovalRuleTemplateOutput [hash] {
        approval_rule_template_id, set_approval_rule_template_id, get_approval_rule_template_id =>
            "approvalRuleTemplateId".to_string();
    }
    delete_branch_output: output::DeleteBranchOutput [hash] {
        deleted_branch, set_deleted_branch, get_deleted_branch => model::BranchInfo::default();
    }
    delete_comment_content_output: output::DeleteCommentContentOutput [] {
        comment, set_comment, get_comment => model::Comment::default();
    }
    delete_file_output: output::DeleteFileOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
        file_path, set_file_path, get_file_path => "filePath".to_string();
    }
    delete_pull_request_approval_rule_output: output::DeletePullRequestApprovalRuleOutput [hash] {
        approval_rule_id, set_approval_rule_id, get_approval_rule_id =>
            "approvalRuleId".to_string();
    }
    delete_repository_output: output::DeleteRepositoryOutput [hash] {
        repository_id, set_repository_id, get_repository_id => "repositoryId".to_string();
    }
    describe_merge_conflicts_output: output::DescribeMergeConflictsOutput [hash] {
        conflict_metadata, set_conflict_metadata, get_conflict_metadata =>
            model::ConflictMetadata::default();
        merge_hunks, set_merge_hunks, get_merge_hunks => vec![model::MergeHunk::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
        destination_commit_id, set_destination_commit_id, get_destination_commit_id =>
            "destinationCommitId".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        base_commit_id, set_base_commit_id, get_base_commit_id => "baseCommitId".to_string();
    }
    describe_pull_request_events_output: output::DescribePullRequestEventsOutput [hash] {
        pull_request_events, set_pull_request_events, get_pull_request_events =>
            vec![model::PullRequestEvent::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    disassociate_approval_rule_template_from_repository_output:
        output::DisassociateApprovalRuleTemplateFromRepositoryOutput [hash] {
    }
    evaluate_pull_request_approval_rules_output:
        output::EvaluatePullRequestApprovalRulesOutput [hash] {
        evaluation, set_evaluation, get_evaluation => model::Evaluation::default();
    }
    get_approval_rule_template_output: output::GetApprovalRuleTemplateOutput [hash] {
        approval_rule_template, set_approval_rule_template, get_approval_rule_template =>
            model::ApprovalRuleTemplate::default();
    }
    get_blob_output: output::GetBlobOutput [hash] {
        content, set_content, get_content => Blob::new("content");
    }
    get_branch_output: output::GetBranchOutput [hash] {
        branch, set_branch, get_branch => model::BranchInfo::default();
    }
    get_comment_output: output::GetCommentOutput [] {
        comment, set_comment, get_comment => model::Comment::default();
    }
    get_comment_reactions_output: output::GetCommentReactionsOutput [hash] {
        reactions_for_comment, set_reactions_for_comment, get_reactions_for_comment =>
            vec![model::ReactionForComment::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    get_comments_for_compared_commit_output: output::GetCommentsForComparedCommitOutput [] {
        comments_for_compared_commit_data,
        set_comments_for_compared_commit_data,
        get_comments_for_compared_commit_data => vec![model::CommentsForComparedCommit::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    get_comments_for_pull_request_output: output::GetCommentsForPullRequestOutput [] {
        comments_for_pull_request_data,
        set_comments_for_pull_request_data,
        get_comments_for_pull_request_data => vec![model::CommentsForPullRequest::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    get_commit_output: output::GetCommitOutput [hash] {
        commit, set_commit, get_commit => model::Commit::default();
    }
    get_differences_output: output::GetDifferencesOutput [hash] {
        differences, set_differences, get_differences => vec![model::Difference::default()];
        next_token, set_next_token, get_next_token => "NextToken".to_string();
    }
    get_file_output: output::GetFileOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        file_path, set_file_path, get_file_path => "filePath".to_string();
        file_mode, set_file_mode, get_file_mode => model::FileModeTypeEnum::Executable;
        file_size, set_file_size, get_file_size => 623;
        file_content, set_file_content, get_file_content => Blob::new("fileContent");
    }
    get_folder_output: output::GetFolderOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        folder_path, set_folder_path, get_folder_path => "folderPath".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
        sub_folders, set_sub_folders, get_sub_folders => vec![model::Folder::default()];
        files, set_files, get_files => vec![model::File::default()];
        symbolic_links, set_symbolic_links, get_symbolic_links =>
            vec![model::SymbolicLink::default()];
        sub_modules, set_sub_modules, get_sub_modules => vec![model::SubModule::default()];
    }
    get_merge_commit_output: output::GetMergeCommitOutput [hash] {
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        destination_commit_id, set_destination_commit_id, get_destination_commit_id =>
            "destinationCommitId".to_string();
        base_commit_id, set_base_commit_id, get_base_commit_id => "baseCommitId".to_string();
        merged_commit_id, set_merged_commit_id, get_merged_commit_id =>
            "mergedCommitId".to_string();
    }
    get_merge_conflicts_output: output::GetMergeConflictsOutput [hash] {
        mergeable, set_mergeable, get_mergeable => true;
        destination_commit_id, set_destination_commit_id, get_destination_commit_id =>
            "destinationCommitId".to_string();
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        base_commit_id, set_base_commit_id, get_base_commit_id => "baseCommitId".to_string();
        conflict_metadata_list, set_conflict_metadata_list, get_conflict_metadata_list =>
            vec![model::ConflictMetadata::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    get_merge_options_output: output::GetMergeOptionsOutput [hash] {
        merge_options, set_merge_options, get_merge_options =>
            vec![model::MergeOptionTypeEnum::FastForwardMerge];
        source_commit_id, set_source_commit_id, get_source_commit_id =>
            "sourceCommitId".to_string();
        destination_commit_id, set_destination_commit_id, get_destination_commit_id =>
            "destinationCommitId".to_string();
        base_commit_id, set_base_commit_id, get_base_commit_id => "baseCommitId".to_string();
    }
    get_pull_request_output: output::GetPullRequestOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    get_pull_request_approval_states_output: output::GetPullRequestApprovalStatesOutput [hash] {
        approvals, set_approvals, get_approvals => vec![model::Approval::default()];
    }
    get_pull_request_override_state_output: output::GetPullRequestOverrideStateOutput [hash] {
        overridden, set_overridden, get_overridden => true;
        overrider, set_overrider, get_overrider => "overrider".to_string();
    }
    get_repository_output: output::GetRepositoryOutput [hash] {
        repository_metadata, set_repository_metadata, get_repository_metadata =>
            model::RepositoryMetadata::default();
    }
    get_repository_triggers_output: output::GetRepositoryTriggersOutput [hash] {
        configuration_id, set_configuration_id, get_configuration_id =>
            "configurationId".to_string();
        triggers, set_triggers, get_triggers => vec![model::RepositoryTrigger::default()];
    }
    list_approval_rule_templates_output: output::ListApprovalRuleTemplatesOutput [hash] {
        approval_rule_template_names,
        set_approval_rule_template_names,
        get_approval_rule_template_names => vec!["approvalRuleTemplateNames".to_string()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_associated_approval_rule_templates_for_repository_output:
        output::ListAssociatedApprovalRuleTemplatesForRepositoryOutput [hash] {
        approval_rule_template_names,
        set_approval_rule_template_names,
        get_approval_rule_template_names => vec!["approvalRuleTemplateNames".to_string()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_branches_output: output::ListBranchesOutput [hash] {
        branches, set_branches, get_branches => vec!["branches".to_string()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_pull_requests_output: output::ListPullRequestsOutput [hash] {
        pull_request_ids, set_pull_request_ids, get_pull_request_ids =>
            vec!["pullRequestIds".to_string()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_repositories_output: output::ListRepositoriesOutput [hash] {
        repositories, set_repositories, get_repositories =>
            vec![model::RepositoryNameIdPair::default()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_repositories_for_approval_rule_template_output:
        output::ListRepositoriesForApprovalRuleTemplateOutput [hash] {
        repository_names, set_repository_names, get_repository_names =>
            vec!["repositoryNames".to_string()];
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    list_tags_for_resource_output: output::ListTagsForResourceOutput [] {
        tags, set_tags, get_tags => HashMap::from([("tags".to_string(), "tags".to_string())]);
        next_token, set_next_token, get_next_token => "nextToken".to_string();
    }
    merge_branches_by_fast_forward_output: output::MergeBranchesByFastForwardOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
    }
    merge_branches_by_squash_output: output::MergeBranchesBySquashOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
    }
    merge_branches_by_three_way_output: output::MergeBranchesByThreeWayOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
    }
    merge_pull_request_by_fast_forward_output: output::MergePullRequestByFastForwardOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    merge_pull_request_by_squash_output: output::MergePullRequestBySquashOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    merge_pull_request_by_three_way_output: output::MergePullRequestByThreeWayOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    override_pull_request_approval_rules_output:
        output::OverridePullRequestApprovalRulesOutput [hash] {
    }
    post_comment_for_compared_commit_output: output::PostCommentForComparedCommitOutput [] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        before_blob_id, set_before_blob_id, get_before_blob_id => "beforeBlobId".to_string();
        after_blob_id, set_after_blob_id, get_after_blob_id => "afterBlobId".to_string();
        location, set_location, get_location => model::Location::default();
        comment, set_comment, get_comment => model::Comment::default();
    }
    post_comment_for_pull_request_output: output::PostCommentForPullRequestOutput [] {
        repository_name, set_repository_name, get_repository_name => "repositoryName".to_string();
        pull_request_id, set_pull_request_id, get_pull_request_id => "pullRequestId".to_string();
        before_commit_id, set_before_commit_id, get_before_commit_id =>
            "beforeCommitId".to_string();
        after_commit_id, set_after_commit_id, get_after_commit_id => "afterCommitId".to_string();
        before_blob_id, set_before_blob_id, get_before_blob_id => "beforeBlobId".to_string();
        after_blob_id, set_after_blob_id, get_after_blob_id => "afterBlobId".to_string();
        location, set_location, get_location => model::Location::default();
        comment, set_comment, get_comment => model::Comment::default();
    }
    post_comment_reply_output: output::PostCommentReplyOutput [] {
        comment, set_comment, get_comment => model::Comment::default();
    }
    put_comment_reaction_output: output::PutCommentReactionOutput [hash] {
    }
    put_file_output: output::PutFileOutput [hash] {
        commit_id, set_commit_id, get_commit_id => "commitId".to_string();
        blob_id, set_blob_id, get_blob_id => "blobId".to_string();
        tree_id, set_tree_id, get_tree_id => "treeId".to_string();
    }
    put_repository_triggers_output: output::PutRepositoryTriggersOutput [hash] {
        configuration_id, set_configuration_id, get_configuration_id =>
            "configurationId".to_string();
    }
    tag_resource_output: output::TagResourceOutput [hash] {
    }
    test_repository_triggers_output: output::TestRepositoryTriggersOutput [hash] {
        successful_executions, set_successful_executions, get_successful_executions =>
            vec!["successfulExecutions".to_string()];
        failed_executions, set_failed_executions, get_failed_executions =>
            vec![model::RepositoryTriggerExecutionFailure::default()];
    }
    untag_resource_output: output::UntagResourceOutput [hash] {
    }
    update_approval_rule_template_content_output:
        output::UpdateApprovalRuleTemplateContentOutput [hash] {
        approval_rule_template, set_approval_rule_template, get_approval_rule_template =>
            model::ApprovalRuleTemplate::default();
    }
    update_approval_rule_template_description_output:
        output::UpdateApprovalRuleTemplateDescriptionOutput [hash] {
        approval_rule_template, set_approval_rule_template, get_approval_rule_template =>
            model::ApprovalRuleTemplate::default();
    }
    update_approval_rule_template_name_output: output::UpdateApprovalRuleTemplateNameOutput [hash] {
        approval_rule_template, set_approval_rule_template, get_approval_rule_template =>
            model::ApprovalRuleTemplate::default();
    }
    update_comment_output: output::UpdateCommentOutput [] {
        comment, set_comment, get_comment => model::Comment::default();
    }
    update_default_branch_output: output::UpdateDefaultBranchOutput [hash] {
    }
    update_pull_request_approval_rule_content_output:
        output::UpdatePullRequestApprovalRuleContentOutput [hash] {
        approval_rule, set_approval_rule, get_approval_rule => model::ApprovalRule::default();
    }
    update_pull_request_approval_state_output: output::UpdatePullRequestApprovalStateOutput [hash] {
    }
    update_pull_request_description_output: output::UpdatePullRequestDescriptionOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    update_pull_request_status_output: output::UpdatePullRequestStatusOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    update_pull_request_title_output: output::UpdatePullRequestTitleOutput [hash] {
        pull_request, set_pull_request, get_pull_request => model::PullRequest::default();
    }
    update_repository_description_output: output::UpdateRepositoryDescriptionOutput [hash] {
    }
    update_repository_name_output: output::UpdateRepositoryNameOutput [hash] {
    }
}
