// ABOUTME: Integration tests for user and questionnaire-result persistence
// ABOUTME: Runs against in-memory and file-backed SQLite databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use helena_core::errors::ErrorCode;
use helena_core::models::{Gender, NewQuestionnaireResult, User};
use helena_ir_server::database::Database;
use uuid::Uuid;

fn submission(user_id: Uuid, questionnaire_id: &str) -> NewQuestionnaireResult {
    NewQuestionnaireResult {
        user_id,
        questionnaire_id: questionnaire_id.to_owned(),
        gender: Gender::Female,
        vo2max: 40.0,
        bmi: None,
        fmi: Some(10.0),
        tv_hours: Some(2.0),
        score: 25,
        classification: "medium".to_owned(),
    }
}

#[tokio::test]
async fn test_user_round_trip() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "kid@example.com")
        .await
        .unwrap();

    let by_email = database
        .get_user_by_email("kid@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
    assert_eq!(by_email.full_name.as_deref(), Some("Test Child"));
    assert!(!by_email.disabled);
    assert!(by_email.hashed_password.starts_with("$2"));

    let by_id = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "kid@example.com");

    assert!(database
        .get_user_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(database.get_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let database = common::create_test_database().await.unwrap();
    common::create_test_user(&database, "kid@example.com")
        .await
        .unwrap();

    let duplicate = User::new("kid@example.com".into(), "hash".into(), None);
    let error = database.create_user(&duplicate).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(error.message, "Email already registered");
}

#[tokio::test]
async fn test_concurrent_registrations_conflict_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("helena.db").display());
    let database = Database::new(&url).await.unwrap();

    let first = User::new("twin@example.com".into(), "hash".into(), None);
    let second = User::new("twin@example.com".into(), "hash".into(), None);
    let (a, b) = tokio::join!(database.create_user(&first), database.create_user(&second));

    let errors: Vec<_> = [a, b].into_iter().filter_map(Result::err).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(errors[0].message, "Email already registered");
}

#[tokio::test]
async fn test_disable_user() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "kid@example.com")
        .await
        .unwrap();

    database.set_user_disabled(user.id, true).await.unwrap();
    assert!(database.get_user(user.id).await.unwrap().unwrap().disabled);

    database.set_user_disabled(user.id, false).await.unwrap();
    assert!(!database.get_user(user.id).await.unwrap().unwrap().disabled);
}

#[tokio::test]
async fn test_questionnaire_results_are_unique_per_user() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "kid@example.com")
        .await
        .unwrap();

    let stored = database
        .create_questionnaire_result(&submission(user.id, "q-001"))
        .await
        .unwrap();
    assert_eq!(stored.score, 25);
    assert_eq!(stored.gender, Gender::Female);

    let error = database
        .create_questionnaire_result(&submission(user.id, "q-001"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert!(error.message.contains("q-001"));

    let listed = database.list_questionnaire_results(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id);
    assert_eq!(listed[0].fmi, Some(10.0));
    assert_eq!(listed[0].bmi, None);
    assert_eq!(listed[0].classification, "medium");
}

#[tokio::test]
async fn test_result_for_unknown_user_violates_foreign_key() {
    let database = common::create_test_database().await.unwrap();

    let result = database
        .create_questionnaire_result(&submission(Uuid::new_v4(), "q-001"))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("helena.db").display());

    let user = {
        let database = Database::new(&url).await.unwrap();
        let user = common::create_test_user(&database, "kid@example.com")
            .await
            .unwrap();
        database
            .create_questionnaire_result(&submission(user.id, "q-001"))
            .await
            .unwrap();
        database.pool().close().await;
        user
    };

    let reopened = Database::new(&url).await.unwrap();
    reopened.ping().await.unwrap();
    let listed = reopened.list_questionnaire_results(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].questionnaire_id, "q-001");
}
