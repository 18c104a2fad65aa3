// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use prose_blocking::app::dtos::{BlockedRowFields, RowPhase, ThreadRow};
use prose_blocking::domain::block_list::models::BlockSet;
use prose_blocking::domain::contacts::models::Contact;
use prose_blocking::domain::threads::models::{Thread, ThreadState};
use prose_blocking::infra::general::QueuedUiDispatcher;
use prose_blocking::phone;
use prose_blocking::services::{RowError, ThreadRowPresenter};
use prose_blocking::test::{MockThreadRowPresenterDependencies, StaticNameResolver};

fn presenter() -> ThreadRowPresenter {
    ThreadRowPresenter::from(MockThreadRowPresenterDependencies::default().into_deps())
}

#[test]
fn test_configures_row_from_thread() -> Result<()> {
    let resolver = StaticNameResolver::new([("+15551234567", "Jane Doe")]);
    let thread = Thread::contact("t1", "+15551234567")
        .with_snippet("See you tomorrow")
        .with_last_message_at(Utc.with_ymd_and_hms(2023, 9, 14, 14, 5, 0).unwrap())
        .with_unread_count(3);

    let mut presenter = presenter();
    let row = presenter.configure_from_thread(&thread, &resolver, &BlockSet::default())?;

    assert_eq!(
        row,
        &ThreadRow {
            thread_id: Some("t1".into()),
            recipient_id: Some(phone!("+15551234567")),
            name: "Jane Doe".to_string(),
            snippet: Some("See you tomorrow".to_string()),
            timestamp: Some("14:05".to_string()),
            unread_badge: Some("3".to_string()),
            is_blocked: false,
            blocked_badge: None,
            state: ThreadState::Inbox,
        }
    );

    Ok(())
}

#[test]
fn test_formats_timestamps_and_unread_counts() -> Result<()> {
    let resolver = StaticNameResolver::default();
    let block_set = BlockSet::default();
    let mut presenter = presenter();

    let row = presenter.configure_from_thread(
        &Thread::contact("t1", "+15551234567")
            .with_last_message_at(Utc.with_ymd_and_hms(2023, 9, 12, 9, 0, 0).unwrap())
            .with_unread_count(150),
        &resolver,
        &block_set,
    )?;
    assert_eq!(row.timestamp.as_deref(), Some("Tue"));
    assert_eq!(row.unread_badge.as_deref(), Some("99+"));

    let row = presenter.configure_from_thread(
        &Thread::contact("t1", "+15551234567")
            .with_last_message_at(Utc.with_ymd_and_hms(2023, 8, 1, 9, 0, 0).unwrap()),
        &resolver,
        &block_set,
    )?;
    assert_eq!(row.timestamp.as_deref(), Some("01/08/23"));
    assert_eq!(row.unread_badge, None);

    Ok(())
}

#[test]
fn test_blocked_fields_match_for_threads_and_prospective_contacts() -> Result<()> {
    let resolver = StaticNameResolver::default();
    let block_set = BlockSet::new([phone!("+15551234567")]);
    let contact = Contact::new("c1")
        .with_full_name("Jane Doe")
        .with_phone_number("+1 555 123 4567")
        .with_phone_number("+49301234");

    let mut presenter = presenter();

    for (id, expected_fields) in [
        (
            "+1 555 123 4567",
            BlockedRowFields {
                is_blocked: true,
                blocked_badge: Some("Blocked".to_string()),
            },
        ),
        (
            "+49301234",
            BlockedRowFields {
                is_blocked: false,
                blocked_badge: None,
            },
        ),
    ] {
        let thread_fields = presenter
            .configure_from_thread(&Thread::contact("t1", id), &resolver, &block_set)?
            .blocked_fields();
        let prospective_fields = presenter
            .configure_from_prospective_contact(
                &contact,
                &phone!(id),
                &resolver,
                block_set.contains(&phone!(id)),
            )?
            .blocked_fields();

        assert_eq!(thread_fields, expected_fields);
        assert_eq!(prospective_fields, expected_fields);
    }

    Ok(())
}

#[test]
fn test_prospective_contact_has_no_conversation_fields() -> Result<()> {
    let resolver = StaticNameResolver::new([("+49301234", "Johnny")]);
    let mut presenter = presenter();

    let row = presenter.configure_from_prospective_contact(
        &Contact::new("c1").with_phone_number("+49301234"),
        &phone!("+49301234"),
        &resolver,
        false,
    )?;

    assert_eq!(
        row,
        &ThreadRow {
            thread_id: None,
            recipient_id: Some(phone!("+49301234")),
            name: "Johnny".to_string(),
            snippet: None,
            timestamp: None,
            unread_badge: None,
            is_blocked: false,
            blocked_badge: None,
            state: ThreadState::Inbox,
        }
    );

    Ok(())
}

#[test]
fn test_configures_group_and_archived_rows() -> Result<()> {
    let resolver = StaticNameResolver::default();
    let block_set = BlockSet::new([phone!("+15551234567")]);
    let mut presenter = presenter();

    let row = presenter.configure_from_thread(
        &Thread::group("g1", vec![phone!("+15551234567"), phone!("+49301234")]),
        &resolver,
        &block_set,
    )?;
    assert_eq!(row.name, "New Group");
    assert_eq!(row.recipient_id, None);
    assert!(!row.is_blocked);

    let row = presenter.configure_from_thread(
        &Thread::group("g1", vec![phone!("+15551234567")]).with_group_name("Hiking"),
        &resolver,
        &block_set,
    )?;
    assert_eq!(row.name, "Hiking");

    let row = presenter.configure_from_thread(
        &Thread::contact("t1", "+15551234567").with_state(ThreadState::Archived),
        &resolver,
        &block_set,
    )?;
    assert_eq!(row.state, ThreadState::Archived);
    assert_eq!(row.name, "+15551234567");
    assert!(row.is_blocked);

    Ok(())
}

#[tokio::test]
async fn test_animates_row_disappearance() -> Result<()> {
    let ui_dispatcher = Arc::new(QueuedUiDispatcher::default());

    let mut deps = MockThreadRowPresenterDependencies::default();
    deps.ui_dispatcher = ui_dispatcher.clone();

    let mut presenter = ThreadRowPresenter::from(deps.into_deps());
    let resolver = StaticNameResolver::default();
    let thread = Thread::contact("t1", "+15551234567");

    presenter.configure_from_thread(&thread, &resolver, &BlockSet::default())?;

    let did_finish = Arc::new(AtomicBool::new(false));
    let finished = did_finish.clone();

    presenter.animate_disappear(Box::new(move || finished.store(true, Ordering::SeqCst)));
    assert_eq!(presenter.phase(), RowPhase::Disappearing);
    assert_eq!(
        presenter
            .configure_from_thread(&thread, &resolver, &BlockSet::default())
            .err(),
        Some(RowError::RowDisappearing)
    );

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!did_finish.load(Ordering::SeqCst));
    assert_eq!(presenter.phase(), RowPhase::Disappearing);
    assert_eq!(ui_dispatcher.drain(), 1);
    assert!(did_finish.load(Ordering::SeqCst));
    assert_eq!(presenter.phase(), RowPhase::Disappeared);

    presenter.configure_from_thread(&thread, &resolver, &BlockSet::default())?;
    assert_eq!(presenter.phase(), RowPhase::Visible);

    Ok(())
}
