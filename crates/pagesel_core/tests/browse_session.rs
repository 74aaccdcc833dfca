use pagesel_core::{
    BrowseConfig, BrowseEvent, BrowseSession, FetchFailure, FetchOutcome, InMemoryPageSource,
    InvalidBulkCount, Item, PageController, PageSource, SelectionStore, SessionError,
};

fn dataset(count: i64) -> Vec<Item> {
    (1..=count)
        .map(|id| Item::new(id, format!("artwork {id}")))
        .collect()
}

fn started_session(source: InMemoryPageSource) -> BrowseSession<InMemoryPageSource> {
    let mut session = BrowseSession::new(source, BrowseConfig::default());
    assert_eq!(session.start().unwrap(), FetchOutcome::Applied);
    session
}

fn selected_ids(session: &BrowseSession<InMemoryPageSource>) -> Vec<i64> {
    let mut ids: Vec<i64> = session.store().iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids
}

fn visible_ids(session: &BrowseSession<InMemoryPageSource>) -> Vec<i64> {
    session
        .controller()
        .visible_selection()
        .iter()
        .map(|item| item.id)
        .collect()
}

#[test]
fn navigation_round_trip_keeps_selection() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));

    let page1 = session.controller().items().to_vec();
    session
        .dispatch(BrowseEvent::SelectionChanged(page1.clone()))
        .unwrap();
    assert_eq!(session.store().len(), 10);

    session.dispatch(BrowseEvent::PageIndexChanged(2)).unwrap();
    assert!(session.controller().visible_selection().is_empty());
    let picks: Vec<Item> = session.controller().items()[..2].to_vec();
    session.dispatch(BrowseEvent::SelectionChanged(picks)).unwrap();
    assert_eq!(session.store().len(), 12);
    assert_eq!(visible_ids(&session), vec![11, 12]);

    session.dispatch(BrowseEvent::PageIndexChanged(1)).unwrap();
    assert_eq!(session.controller().visible_selection(), page1.as_slice());
}

#[test]
fn each_navigation_issues_exactly_one_fetch() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));
    assert_eq!(session.source().fetch_count(), 1);

    session.dispatch(BrowseEvent::PageIndexChanged(3)).unwrap();
    session.dispatch(BrowseEvent::PageSizeChanged(5)).unwrap();

    assert_eq!(session.source().fetch_count(), 3);
    assert_eq!(session.controller().page_index(), 1);
    assert_eq!(session.controller().items().len(), 5);
}

#[test]
fn bulk_select_first_five_on_fresh_page() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));

    session
        .dispatch(BrowseEvent::BulkSelectSubmitted("5".to_string()))
        .unwrap();

    assert_eq!(selected_ids(&session), vec![1, 2, 3, 4, 5]);
    assert_eq!(visible_ids(&session), vec![1, 2, 3, 4, 5]);
    assert_eq!(session.source().fetch_count(), 1);
}

#[test]
fn bulk_select_spans_unfetched_pages() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));
    session.dispatch(BrowseEvent::PageIndexChanged(3)).unwrap();

    session
        .dispatch(BrowseEvent::BulkSelectSubmitted("15".to_string()))
        .unwrap();

    assert_eq!(selected_ids(&session), (1..=15).collect::<Vec<_>>());
    assert_eq!(session.controller().page_index(), 3);
    assert!(session.controller().visible_selection().is_empty());
}

#[test]
fn bulk_select_clamps_to_dataset_size() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));

    session
        .dispatch(BrowseEvent::BulkSelectSubmitted("1000".to_string()))
        .unwrap();

    assert_eq!(session.store().len(), 25);
}

#[test]
fn invalid_bulk_input_leaves_selection_untouched() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));
    let picks = session.controller().items()[..3].to_vec();
    session.dispatch(BrowseEvent::SelectionChanged(picks)).unwrap();
    let before = session.store().selected_items();

    for input in ["abc", "0", "-3", ""] {
        let err = session
            .dispatch(BrowseEvent::BulkSelectSubmitted(input.to_string()))
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidBulkCount(_)), "{input}");
    }

    let err = session
        .dispatch(BrowseEvent::BulkSelectSubmitted("-3".to_string()))
        .unwrap_err();
    match err {
        SessionError::InvalidBulkCount(InvalidBulkCount::NotPositive(value)) => {
            assert_eq!(value, -3)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.store().selected_items(), before);
}

#[test]
fn bulk_select_fetch_failure_leaves_selection_untouched() {
    let source = InMemoryPageSource::new(dataset(25)).with_failing_page(2);
    let mut session = started_session(source);

    let err = session
        .dispatch(BrowseEvent::BulkSelectSubmitted("12".to_string()))
        .unwrap_err();

    assert!(matches!(err, SessionError::Fetch(FetchFailure::Source(_))));
    assert!(session.store().is_empty());
}

#[test]
fn failed_navigation_keeps_previous_page_and_selection() {
    let source = InMemoryPageSource::new(dataset(25)).with_failing_page(2);
    let mut session = started_session(source);
    let page1 = session.controller().items().to_vec();
    session
        .dispatch(BrowseEvent::SelectionChanged(page1[..4].to_vec()))
        .unwrap();

    let err = session
        .dispatch(BrowseEvent::PageIndexChanged(2))
        .unwrap_err();

    assert!(matches!(err, SessionError::Fetch(_)));
    assert_eq!(session.controller().items(), page1.as_slice());
    assert_eq!(session.controller().page_index(), 1);
    assert!(!session.controller().is_loading());
    assert!(session.controller().last_error().is_some());
    assert_eq!(selected_ids(&session), vec![1, 2, 3, 4]);
}

#[test]
fn clear_resets_drawer_and_visible_selection() {
    let mut session = started_session(InMemoryPageSource::new(dataset(25)));
    session
        .dispatch(BrowseEvent::BulkSelectSubmitted("7".to_string()))
        .unwrap();
    assert_eq!(session.drawer().count(), 7);

    session.dispatch(BrowseEvent::ClearRequested).unwrap();

    assert_eq!(session.drawer().count(), 0);
    assert!(session.controller().visible_selection().is_empty());
}

#[test]
fn slow_earlier_fetch_cannot_overwrite_later_page() {
    let source = InMemoryPageSource::new(dataset(25));
    let store = SelectionStore::new();
    let mut controller = PageController::new(BrowseConfig::default());

    let slow = controller.set_page_index(2);
    let fast = controller.set_page_index(3);
    let slow_result = source.fetch_page(slow.request());

    let applied = controller
        .complete_fetch(fast, source.fetch_page(fast.request()), &store)
        .unwrap();
    let stale = controller.complete_fetch(slow, slow_result, &store).unwrap();

    assert_eq!(applied, FetchOutcome::Applied);
    assert_eq!(stale, FetchOutcome::Stale);
    assert_eq!(controller.current_page().unwrap().page_index, 3);
    assert_eq!(controller.items()[0].id, 21);
}

#[test]
fn loading_flag_stays_set_until_latest_fetch_completes() {
    let source = InMemoryPageSource::new(dataset(25));
    let store = SelectionStore::new();
    let mut controller = PageController::new(BrowseConfig::default());

    let first = controller.set_page_index(1);
    let second = controller.set_page_index(2);
    controller
        .complete_fetch(first, source.fetch_page(first.request()), &store)
        .unwrap();
    assert!(controller.is_loading());
    assert!(controller.current_page().is_none());

    controller
        .complete_fetch(second, source.fetch_page(second.request()), &store)
        .unwrap();
    assert!(!controller.is_loading());
}
