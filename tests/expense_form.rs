use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use expense_draft_form::{
    entities::{
        Attachment, DraftStorage, ExpenseField, ExpenseRecord, ExpenseSubmitter, FormConfig,
        NotificationKind, SubmissionPhase, SubmitOutcome,
    },
    errors::SubmissionFailed,
    ext::standard_storages::{FileDraftStorage, InMemoryDraftStorage},
    util::{DraftStore, ExpenseFormUtil},
};
use fractic_server_error::ServerError;

fn acme() -> [(ExpenseField, &'static str); 8] {
    [
        (ExpenseField::Vendor, "ACME"),
        (ExpenseField::Date, "2024-01-01"),
        (ExpenseField::BillRef, "INV-1"),
        (ExpenseField::Description, "Supplies"),
        (ExpenseField::AccountCode, "6001"),
        (ExpenseField::Quantity, "2"),
        (ExpenseField::Amount, "10.50"),
        (ExpenseField::Taxes, "1.05"),
    ]
}

fn fill<D: DraftStorage, S: ExpenseSubmitter>(form: &mut ExpenseFormUtil<D, S>) {
    for (field, value) in acme() {
        form.update_field(field, value);
    }
}

struct FlakySubmitter {
    calls: AtomicUsize,
}

#[async_trait]
impl ExpenseSubmitter for FlakySubmitter {
    async fn submit(
        &self,
        _record: &ExpenseRecord,
        _attachment: Option<&Attachment>,
    ) -> Result<(), ServerError> {
        // Fails the first time, succeeds afterwards.
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(SubmissionFailed::new("gateway timeout"))
        } else {
            Ok(())
        }
    }
}

#[tokio::test(start_paused = true)]
async fn acme_scenario_end_to_end() {
    let storage = InMemoryDraftStorage::new();
    let config = FormConfig::default();
    let mut form = ExpenseFormUtil::new(storage.clone(), config.clone());
    fill(&mut form);
    assert_eq!(form.compute_total(), "22.05");
    assert_eq!(form.estimated_total(), "22.05");
    assert!(form.missing_fields().is_empty());

    form.save().unwrap();
    assert!(storage.contains(&config.storage_key));

    let phases = form.subscribe_phase();
    let outcome = form.submit().await;
    assert!(outcome.is_submitted());
    assert_eq!(*phases.borrow(), SubmissionPhase::Idle);
    assert!(!storage.contains(&config.storage_key));
    assert_eq!(form.field(ExpenseField::Vendor), "ACME");

    let fresh = ExpenseFormUtil::new(storage, config);
    assert_eq!(fresh.record(), &ExpenseRecord::empty());
}

#[tokio::test(start_paused = true)]
async fn empty_form_rejects_submit_but_saves() {
    let storage = InMemoryDraftStorage::new();
    let config = FormConfig::default();
    let mut form = ExpenseFormUtil::new(storage.clone(), config.clone());

    assert!(matches!(form.submit().await, SubmitOutcome::Invalid { .. }));
    assert!(form.validate().is_err());
    assert_eq!(
        form.notification().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
    assert!(!storage.contains(&config.storage_key));

    form.save().unwrap();
    assert_eq!(
        form.notification().map(|n| n.kind),
        Some(NotificationKind::Success)
    );
    let stored = DraftStore::new(storage, config.storage_key.as_str());
    assert_eq!(stored.try_load().unwrap(), Some(ExpenseRecord::empty()));
}

#[tokio::test(start_paused = true)]
async fn last_save_wins() {
    let storage = InMemoryDraftStorage::new();
    let config = FormConfig::default();
    let mut form = ExpenseFormUtil::new(storage.clone(), config.clone());
    form.update_field(ExpenseField::Vendor, "ACME");
    form.save().unwrap();
    form.update_field(ExpenseField::Vendor, "Globex");
    form.save().unwrap();

    let fresh = ExpenseFormUtil::new(storage, config);
    assert_eq!(fresh.field(ExpenseField::Vendor), "Globex");
}

#[tokio::test(start_paused = true)]
async fn draft_survives_in_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = FormConfig::from_ron(r#"(storage_key: "accounting-app:draft")"#).unwrap();

    let mut form = ExpenseFormUtil::new(FileDraftStorage::new(dir.path()), config.clone());
    fill(&mut form);
    form.set_attachment(Some(Attachment::new("receipt.pdf", 52_000)));
    form.save().unwrap();
    drop(form);

    let storage = FileDraftStorage::new(dir.path());
    assert!(storage.path_for(&config.storage_key).exists());
    let restored = ExpenseFormUtil::new(storage, config);
    for (field, value) in acme() {
        assert_eq!(restored.field(field), value);
    }
    assert!(!restored.has_attachment());
}

#[tokio::test(start_paused = true)]
async fn corrupt_file_draft_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = FormConfig::default();
    let storage = FileDraftStorage::new(dir.path());
    storage.set(&config.storage_key, "not json at all").unwrap();

    let form = ExpenseFormUtil::new(storage, config);
    assert_eq!(form.record(), &ExpenseRecord::empty());
    assert!(form.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn forms_with_different_keys_keep_separate_drafts() {
    let storage = InMemoryDraftStorage::new();
    let config_a = FormConfig::from_ron(r#"(storage_key: "a")"#).unwrap();
    let config_b = FormConfig::from_ron(r#"(storage_key: "b")"#).unwrap();

    let mut a = ExpenseFormUtil::new(storage.clone(), config_a.clone());
    fill(&mut a);
    a.save().unwrap();

    let mut b = ExpenseFormUtil::new(storage.clone(), config_b);
    assert_eq!(b.record(), &ExpenseRecord::empty());
    fill(&mut b);
    assert!(b.submit().await.is_submitted());

    assert!(storage.contains(&config_a.storage_key));
    let reloaded = ExpenseFormUtil::new(storage, config_a);
    assert_eq!(reloaded.field(ExpenseField::Vendor), "ACME");
}

#[tokio::test(start_paused = true)]
async fn failed_submission_can_be_retried() {
    let storage = InMemoryDraftStorage::new();
    let config = FormConfig::default();
    let submitter = FlakySubmitter {
        calls: AtomicUsize::new(0),
    };
    let mut form = ExpenseFormUtil::with_submitter(storage.clone(), submitter, config.clone());
    fill(&mut form);
    form.save().unwrap();

    assert!(matches!(form.submit().await, SubmitOutcome::Failed { .. }));
    assert!(storage.contains(&config.storage_key));
    assert!(form.can_submit());

    assert!(form.submit().await.is_submitted());
    assert!(!storage.contains(&config.storage_key));
}

#[tokio::test(start_paused = true)]
async fn configured_latency_and_toast_duration() {
    let config =
        FormConfig::from_ron("(submit_latency_ms: 50, toast_duration_ms: 500)").unwrap();
    let mut form = ExpenseFormUtil::new(InMemoryDraftStorage::new(), config);
    fill(&mut form);

    let start = tokio::time::Instant::now();
    assert!(form.submit().await.is_submitted());
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(800));

    assert_eq!(form.notification_remaining(), Some(Duration::from_millis(500)));
    tokio::time::advance(Duration::from_millis(500)).await;
    assert!(form.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn dismissing_and_resetting() {
    let storage = InMemoryDraftStorage::new();
    let config = FormConfig::default();
    let mut form = ExpenseFormUtil::new(storage.clone(), config.clone());
    fill(&mut form);
    form.save().unwrap();
    form.dismiss_notification();
    assert!(form.notification().is_none());

    form.reset();
    assert_eq!(form.record(), &ExpenseRecord::empty());
    assert_eq!(form.estimated_total(), "0.00");
    let stored = DraftStore::new(storage, config.storage_key);
    assert_eq!(stored.load().bill_ref, "INV-1");
    stored.clear().unwrap();
    assert_eq!(stored.try_load().unwrap(), None);
}
