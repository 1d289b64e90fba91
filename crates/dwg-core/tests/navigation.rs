use std::sync::{Arc, Mutex};

use dwg_core::{NavAction, NavigationPath, NavigationState, NavigationStore};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("00".to_string()),
        Just("01".to_string()),
        Just("구조".to_string()),
        Just("A".to_string()),
        Just("R1".to_string()),
        "[a-z0-9]{1,6}",
    ]
}

fn path_strategy() -> impl Strategy<Value = NavigationPath> {
    (
        name_strategy(),
        proptest::option::of(name_strategy()),
        proptest::option::of(name_strategy()),
        proptest::option::of(name_strategy()),
    )
        .prop_map(|(drawing_id, discipline, region, revision)| NavigationPath {
            drawing_id,
            discipline,
            region,
            revision,
        })
}

fn action_strategy() -> impl Strategy<Value = NavAction> {
    prop_oneof![
        name_strategy().prop_map(NavAction::SelectDrawing),
        proptest::option::of(name_strategy()).prop_map(NavAction::SelectDiscipline),
        proptest::option::of(name_strategy()).prop_map(NavAction::SelectRegion),
        proptest::option::of(name_strategy()).prop_map(NavAction::SelectRevision),
        path_strategy().prop_map(NavAction::NavigateTo),
        Just(NavAction::ToggleSidebar),
        any::<bool>().prop_map(NavAction::SetSidebarOpen),
        "[a-z ]{0,8}".prop_map(NavAction::SetSearchText),
    ]
}

fn state_strategy() -> impl Strategy<Value = NavigationState> {
    proptest::collection::vec(action_strategy(), 0..12).prop_map(|actions| {
        actions
            .into_iter()
            .fold(NavigationState::default(), |state, action| state.apply(action))
    })
}

proptest! {
    #[test]
    fn select_drawing_always_clears_finer_fields(state in state_strategy(), id in name_strategy()) {
        let next = state.apply(NavAction::SelectDrawing(id.clone()));
        prop_assert_eq!(next.drawing_id(), id.as_str());
        prop_assert!(next.discipline().is_none());
        prop_assert!(next.region().is_none());
        prop_assert!(next.revision().is_none());
        prop_assert_eq!(next.sidebar_open, state.sidebar_open);
    }

    #[test]
    fn select_discipline_clears_region_and_revision(
        state in state_strategy(),
        name in proptest::option::of(name_strategy()),
    ) {
        let next = state.apply(NavAction::SelectDiscipline(name.clone()));
        prop_assert_eq!(next.discipline(), name.as_deref());
        prop_assert_eq!(next.drawing_id(), state.drawing_id());
        prop_assert!(next.region().is_none());
        prop_assert!(next.revision().is_none());
    }

    #[test]
    fn select_region_keeps_coarser_fields(
        state in state_strategy(),
        name in proptest::option::of(name_strategy()),
    ) {
        let next = state.apply(NavAction::SelectRegion(name.clone()));
        prop_assert_eq!(next.region(), name.as_deref());
        prop_assert_eq!(next.discipline(), state.discipline());
        prop_assert_eq!(next.drawing_id(), state.drawing_id());
        prop_assert!(next.revision().is_none());
    }

    #[test]
    fn navigate_to_sets_exact_tuple(state in state_strategy(), path in path_strategy()) {
        let next = state.apply(NavAction::NavigateTo(path.clone()));
        prop_assert_eq!(&next.selection, &path);
        prop_assert_eq!(&next.search_text, &state.search_text);
    }

    #[test]
    fn ui_actions_never_touch_selection(state in state_strategy(), open in any::<bool>()) {
        for action in [
            NavAction::ToggleSidebar,
            NavAction::SetSidebarOpen(open),
            NavAction::SetSearchText("query".to_string()),
        ] {
            let next = state.apply(action);
            prop_assert_eq!(&next.selection, &state.selection);
        }
    }
}

#[test]
fn store_delivers_every_transition_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut store = NavigationStore::new(NavigationState::default());
    let id = store.subscribe(move |state| {
        sink.lock()
            .expect("lock")
            .push(state.selection.clone());
    });

    store.dispatch(NavAction::SelectDrawing("01".into()));
    store.dispatch(NavAction::SelectDiscipline(Some("구조".into())));
    store.dispatch(NavAction::SelectRegion(Some("A".into())));
    assert!(store.unsubscribe(id));
    store.dispatch(NavAction::SelectRevision(Some("R1".into())));

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], NavigationPath::drawing("01"));
    assert_eq!(
        seen[2],
        NavigationPath::drawing("01")
            .with_discipline(Some("구조"))
            .with_region(Some("A"))
    );
    assert_eq!(store.state().revision(), Some("R1"));
}
