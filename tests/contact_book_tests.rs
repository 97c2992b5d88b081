use rolodex::domain::contact::{Contact, ContactFields, Field};
use rolodex::domain::notification::Severity;
use rolodex::repository::mock::{StoreCall, StoreOperation};
use rolodex::services::MutationOutcome;
use rolodex::test_helpers::TestContext;
use tokio::time::Duration;

fn names(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name.clone()).collect()
}

#[tokio::test]
async fn test_create_appends_one_contact_to_the_tail() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", ""), ("Ben", "", "Main St")]);
    let book = ctx.open_book().await.unwrap();

    let outcome = book
        .create_contact(ContactFields::new("Cara", "222", ""))
        .await;

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(names(&book.contacts()), vec!["Ann", "Ben", "Cara"]);
    let created = book.contacts().pop().unwrap();
    assert_eq!(created.user_id, ctx.identity.id);
    assert_eq!(book.notification().unwrap().message, "Cara added!");
    assert_eq!(ctx.store.rows().len(), 3);
}

#[tokio::test]
async fn test_create_failure_leaves_list_unchanged() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    ctx.store.fail_next(StoreOperation::Insert, 1);
    book.open_new();
    book.set_new_field(Field::Name, "Cara");

    let outcome = book.save_new().await;

    assert_eq!(outcome, MutationOutcome::Rejected);
    assert_eq!(names(&book.contacts()), vec!["Ann"]);
    let toast = book.notification().unwrap();
    assert_eq!(toast.message, "Failed to save contact");
    assert_eq!(toast.severity, Severity::Error);

    // A failed save still closes and resets the form
    let view = book.view();
    assert!(!view.adding);
    assert_eq!(view.new_draft.fields, ContactFields::default());
    assert!(!view.new_draft.saving);
}

#[tokio::test]
async fn test_create_trims_fields_before_sending() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();

    book.create_contact(ContactFields::new("  Jane Smith ", " 555 ", "  "))
        .await;

    assert_eq!(
        ctx.store.get_call_history().last(),
        Some(&StoreCall::Insert {
            owner: ctx.identity.id,
            fields: ContactFields::new("Jane Smith", "555", ""),
        })
    );
}

#[tokio::test]
async fn test_blank_name_sends_nothing() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    let ann = book.contacts()[0].clone();

    let created = book.create_contact(ContactFields::new("   ", "555", "")).await;
    let updated = book
        .update_contact(ann.id, ContactFields::new("", "999", ""))
        .await;

    assert_eq!(created, MutationOutcome::Skipped);
    assert_eq!(updated, MutationOutcome::Skipped);
    assert_eq!(ctx.store.call_count(StoreOperation::Insert), 0);
    assert_eq!(ctx.store.call_count(StoreOperation::Update), 0);
    assert_eq!(book.contacts(), vec![ann]);
    assert!(book.notification().is_none());
}

#[tokio::test]
async fn test_update_preserves_length_and_position() {
    let ctx = TestContext::new_for_test().with_contacts(&[
        ("Ann", "111", ""),
        ("Ben", "", "Main St"),
        ("Cara", "", ""),
    ]);
    let book = ctx.open_book().await.unwrap();
    let ben = book.contacts()[1].clone();

    let outcome = book
        .update_contact(ben.id, ContactFields::new("Benjamin", "333", "Elm St"))
        .await;

    assert_eq!(outcome, MutationOutcome::Applied);
    let contacts = book.contacts();
    assert_eq!(names(&contacts), vec!["Ann", "Benjamin", "Cara"]);
    assert_eq!(contacts[1].id, ben.id);
    assert_eq!(contacts[1].phone, "333");
    assert_eq!(contacts[1].created_at, ben.created_at);
    assert_eq!(book.notification().unwrap().message, "Contact updated!");
}

#[tokio::test]
async fn test_update_failure_keeps_old_values_and_exits_edit_mode() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    let ann = book.contacts()[0].clone();
    ctx.store.set_failing(StoreOperation::Update, true);

    assert!(book.start_edit(ann.id));
    book.set_edit_field(Field::Phone, "999");
    let outcome = book.save_edit().await;

    assert_eq!(outcome, MutationOutcome::Rejected);
    assert_eq!(book.contacts()[0].phone, "111");
    assert_eq!(book.notification().unwrap().message, "Failed to update");
    assert!(book.view().edit_draft.is_none());
}

#[tokio::test]
async fn test_update_unknown_id_is_skipped() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();

    let outcome = book
        .update_contact(uuid::Uuid::new_v4(), ContactFields::new("Ghost", "", ""))
        .await;

    assert_eq!(outcome, MutationOutcome::Skipped);
    assert_eq!(ctx.store.call_count(StoreOperation::Update), 0);
}

#[tokio::test]
async fn test_delete_removes_only_that_contact() {
    let ctx = TestContext::new_for_test().with_contacts(&[
        ("Ann", "111", ""),
        ("Ben", "", "Main St"),
        ("Cara", "", ""),
    ]);
    let book = ctx.open_book().await.unwrap();
    let ben = book.contacts()[1].clone();

    let outcome = book.delete_contact(ben.id).await;

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(names(&book.contacts()), vec!["Ann", "Cara"]);
    assert!(!book.contacts().iter().any(|c| c.id == ben.id));
    assert_eq!(book.notification().unwrap().message, "Ben removed");
    assert!(!book.is_deleting(ben.id));
}

#[tokio::test]
async fn test_delete_failure_keeps_contact() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    let ann = book.contacts()[0].clone();
    ctx.store.fail_next(StoreOperation::Delete, 1);

    let outcome = book.delete_contact(ann.id).await;

    assert_eq!(outcome, MutationOutcome::Rejected);
    assert_eq!(book.contacts(), vec![ann.clone()]);
    assert_eq!(book.notification().unwrap().message, "Failed to delete");
    assert!(!book.is_deleting(ann.id));
}

#[tokio::test]
async fn test_create_then_delete_round_trip() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();
    assert!(book.is_empty());

    book.create_contact(ContactFields::new("Jane Smith", "", ""))
        .await;

    let contacts = book.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].fields(), ContactFields::new("Jane Smith", "", ""));

    book.delete_contact(contacts[0].id).await;
    assert!(book.is_empty());
    assert!(ctx.store.rows().is_empty());
}

#[tokio::test]
async fn test_stats_count_phone_and_address_separately() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", ""), ("Ben", "", "Main St")]);
    let book = ctx.open_book().await.unwrap();

    let stats = book.stats();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.with_phone, 1);
    assert_eq!(stats.with_address, 1);
    assert_eq!(book.view().count_label(), "2 people saved");
}

#[tokio::test(start_paused = true)]
async fn test_only_the_deleting_row_is_flagged() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", ""), ("Ben", "", "")]);
    let book = ctx.open_book().await.unwrap();
    let (ann, ben) = (book.contacts()[0].id, book.contacts()[1].id);
    ctx.store
        .queue_delay(StoreOperation::Delete, Duration::from_millis(500));

    let pending = tokio::spawn({
        let book = book.clone();
        async move { book.delete_contact(ann).await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(book.is_deleting(ann));
    assert!(!book.is_deleting(ben));
    assert_eq!(book.len(), 2);

    assert_eq!(pending.await.unwrap(), MutationOutcome::Applied);
    assert!(!book.is_deleting(ann));
    assert_eq!(names(&book.contacts()), vec!["Ben"]);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_updates_last_response_wins() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    let ann = book.contacts()[0].id;
    ctx.store
        .queue_delay(StoreOperation::Update, Duration::from_millis(300));
    ctx.store
        .queue_delay(StoreOperation::Update, Duration::from_millis(100));

    let slow = tokio::spawn({
        let book = book.clone();
        async move {
            book.update_contact(ann, ContactFields::new("Slow", "", ""))
                .await
        }
    });
    tokio::task::yield_now().await;
    let fast = tokio::spawn({
        let book = book.clone();
        async move {
            book.update_contact(ann, ContactFields::new("Fast", "", ""))
                .await
        }
    });

    assert_eq!(fast.await.unwrap(), MutationOutcome::Applied);
    assert_eq!(book.contacts()[0].name, "Fast");
    assert_eq!(slow.await.unwrap(), MutationOutcome::Applied);
    assert_eq!(book.contacts()[0].name, "Slow");
    assert_eq!(book.len(), 1);
}

#[tokio::test]
async fn test_copy_ignores_clipboard_failure() {
    let ctx = TestContext::new_for_test().with_failing_clipboard();
    let book = ctx.open_book().await.unwrap();

    book.copy("555-0100");

    assert!(ctx.clipboard.writes().is_empty());
    assert_eq!(book.notification().unwrap().message, "Copied!");
}

#[tokio::test]
async fn test_copy_writes_text() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();
    let before = book.contacts();

    book.copy("123 Main St");

    assert_eq!(ctx.clipboard.writes(), vec!["123 Main St"]);
    assert_eq!(book.contacts(), before);
}

#[tokio::test]
async fn test_toggle_adding_cancels_edit() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    let ann = book.contacts()[0].clone();

    book.start_edit(ann.id);
    assert!(book.view().is_editing(ann.id));

    book.toggle_adding();
    let view = book.view();
    assert!(view.adding);
    assert!(view.edit_draft.is_none());

    book.toggle_adding();
    assert!(!book.view().adding);
}

#[tokio::test]
async fn test_start_edit_closes_new_form() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Ann", "111", "")]);
    let book = ctx.open_book().await.unwrap();
    let ann = book.contacts()[0].clone();
    book.open_new();
    book.set_new_field(Field::Name, "Half typed");

    assert!(book.start_edit(ann.id));

    let view = book.view();
    assert!(!view.adding);
    assert_eq!(view.new_draft.fields.name, "");
    assert_eq!(view.edit_draft.unwrap().fields, ann.fields());
}

#[tokio::test]
async fn test_save_new_with_blank_draft_is_skipped() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();
    book.open_new();
    book.set_new_field(Field::Phone, "555");

    assert_eq!(book.save_new().await, MutationOutcome::Skipped);
    assert!(book.view().adding);
    assert_eq!(ctx.store.call_count(StoreOperation::Insert), 0);
}

#[tokio::test(start_paused = true)]
async fn test_new_draft_is_marked_saving_while_in_flight() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();
    ctx.store
        .queue_delay(StoreOperation::Insert, Duration::from_millis(200));
    book.open_new();
    book.set_new_field(Field::Name, "Jane");

    let pending = tokio::spawn({
        let book = book.clone();
        async move { book.save_new().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let view = book.view();
    assert!(view.new_draft.saving);
    assert!(!view.can_save_new());
    // A second save while the first is in flight is a no-op
    assert_eq!(book.save_new().await, MutationOutcome::Skipped);

    assert_eq!(pending.await.unwrap(), MutationOutcome::Applied);
    assert_eq!(ctx.store.call_count(StoreOperation::Insert), 1);
    assert!(!book.view().new_draft.saving);
}

#[tokio::test]
async fn test_subscribers_see_every_change() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();
    let mut changes = book.subscribe();

    book.create_contact(ContactFields::new("Jane", "", ""))
        .await;

    assert!(changes.has_changed().unwrap());
    changes.borrow_and_update();
    assert!(!changes.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_creates_all_land() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();
    ctx.store
        .queue_delay(StoreOperation::Insert, Duration::from_millis(300));
    ctx.store
        .queue_delay(StoreOperation::Insert, Duration::from_millis(100));

    let outcomes = futures::future::join_all(
        ["Slow", "Fast", "Instant"]
            .into_iter()
            .map(|name| book.create_contact(ContactFields::new(name, "", ""))),
    )
    .await;

    assert!(outcomes.iter().all(|o| *o == MutationOutcome::Applied));
    // Appended in response order, not request order
    assert_eq!(names(&book.contacts()), vec!["Instant", "Fast", "Slow"]);
}
