use rolodex::domain::contact::ContactFields;
use rolodex::services::{BookSettings, MutationOutcome};
use rolodex::test_helpers::TestContext;
use rstest::rstest;
use tokio::time::{sleep, Duration};

fn visible_names(book: &rolodex::services::ContactBook) -> Vec<String> {
    book.visible().into_iter().map(|c| c.name).collect()
}

#[tokio::test(start_paused = true)]
async fn test_toast_clears_after_display_window() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();

    book.copy("555-0100");
    sleep(Duration::from_millis(2999)).await;
    assert_eq!(book.notification().unwrap().message, "Copied!");

    sleep(Duration::from_millis(2)).await;
    assert!(book.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_second_toast_replaces_first_and_restarts_window() {
    let ctx = TestContext::new_for_test();
    let book = ctx.open_book().await.unwrap();

    book.copy("first");
    sleep(Duration::from_millis(1000)).await;
    let outcome = book
        .create_contact(ContactFields::new("Jane Doe", "", ""))
        .await;
    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(book.notification().unwrap().message, "Jane Doe added!");

    // The first toast's deadline passes without clearing the second
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(book.notification().unwrap().message, "Jane Doe added!");

    sleep(Duration::from_millis(499)).await;
    assert!(book.notification().is_some());
    sleep(Duration::from_millis(2)).await;
    assert!(book.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_toast_duration_comes_from_settings() {
    let ctx = TestContext::new_for_test();
    let settings = BookSettings {
        toast_duration: Duration::from_millis(500),
        ..BookSettings::default()
    };
    let book = ctx.open_book_with(settings).await.unwrap();

    book.copy("x");
    sleep(Duration::from_millis(501)).await;

    assert!(book.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_search_applies_after_typing_pauses() {
    let ctx = TestContext::new_for_test().with_contacts(&[
        ("Jane Doe", "555-0100", ""),
        ("Bob Stone", "", "12 Oak Lane"),
    ]);
    let book = ctx.open_book().await.unwrap();

    book.set_search("ja");
    sleep(Duration::from_millis(100)).await;
    book.set_search("jane");
    sleep(Duration::from_millis(100)).await;

    // Still inside the window of the latest keystroke
    assert_eq!(visible_names(&book).len(), 2);
    assert_eq!(book.view().search_raw, "jane");

    sleep(Duration::from_millis(100)).await;
    assert_eq!(visible_names(&book), vec!["Jane Doe"]);
    assert_eq!(book.view().results_heading(), "1 result for \"jane\"");
}

#[tokio::test(start_paused = true)]
async fn test_clear_search_restores_full_list() {
    let ctx = TestContext::new_for_test().with_contacts(&[
        ("Jane Doe", "555-0100", ""),
        ("Bob Stone", "", "12 Oak Lane"),
    ]);
    let book = ctx.open_book().await.unwrap();
    book.set_search("oak");
    sleep(Duration::from_millis(200)).await;
    assert_eq!(visible_names(&book), vec!["Bob Stone"]);

    book.clear_search();
    sleep(Duration::from_millis(200)).await;

    assert_eq!(visible_names(&book), vec!["Jane Doe", "Bob Stone"]);
    assert_eq!(book.view().results_heading(), "All People");
}

#[rstest]
#[case("jane", true)]
#[case("JANE", true)]
#[case("555-0100", true)]
#[case("555-0200", false)]
#[case("   ", true)]
#[tokio::test(start_paused = true)]
async fn test_search_matches_jane_doe(#[case] query: &str, #[case] expected: bool) {
    let ctx = TestContext::new_for_test().with_contacts(&[("Jane Doe", "555-0100", "")]);
    let book = ctx.open_book().await.unwrap();

    book.set_search(query);
    sleep(Duration::from_millis(200)).await;

    assert_eq!(!book.visible().is_empty(), expected);
}

#[tokio::test(start_paused = true)]
async fn test_search_shows_empty_state_when_nothing_matches() {
    let ctx = TestContext::new_for_test().with_contacts(&[("Jane Doe", "555-0100", "")]);
    let book = ctx.open_book().await.unwrap();

    book.set_search("zzz");
    sleep(Duration::from_millis(200)).await;

    let view = book.view();
    assert!(view.visible.is_empty());
    assert_eq!(view.results_heading(), "0 results for \"zzz\"");
    assert_eq!(view.empty_state().0, "No matches found");
    // The full list is untouched by filtering
    assert_eq!(view.contacts.len(), 1);
}
