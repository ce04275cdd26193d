use docmark::annotation::{ActionState, AnnotationAction, AnnotationEvent};
use docmark::replay::{self, ScriptBuilder};
use docmark::{AnnotationActionType, AnnotationColor, AnnotationSettings, AnnotationType, TextMarkupType};

fn begin_settings(events: &[AnnotationEvent]) -> Vec<AnnotationSettings> {
    events
        .iter()
        .filter_map(|e| match e {
            AnnotationEvent::BeginAddAnnot(settings) => Some(*settings),
            _ => None,
        })
        .collect()
}

#[test]
fn test_select_emits_in_contract_order() {
    let mut action = AnnotationAction::new();
    let rx = action.subscribe();

    action.select_annotation(AnnotationActionType::Underline);

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            AnnotationEvent::Activated,
            AnnotationEvent::CancelAddAnnot,
            AnnotationEvent::BeginAddAnnot(AnnotationSettings {
                annot_type: AnnotationType::TextMarkup,
                markup: TextMarkupType::Underline,
                color: AnnotationColor::None,
            }),
        ]
    );
    assert_eq!(
        action.state(),
        ActionState::Armed(AnnotationActionType::Underline)
    );
}

#[test]
fn test_every_concrete_type_resolves_to_fixed_settings() {
    for annot_type in AnnotationActionType::ALL
        .into_iter()
        .filter(|t| *t != AnnotationActionType::Highlight)
    {
        let mut action = AnnotationAction::new();
        let rx = action.subscribe();
        action.select_annotation(annot_type);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(begin_settings(&events), vec![annot_type.settings()], "{annot_type}");
        assert_eq!(action.active_annot_type(), annot_type);
    }
}

#[test]
fn test_generic_highlight_defaults_to_yellow() {
    let mut action = AnnotationAction::new();
    let rx = action.subscribe();

    action.select_annotation(AnnotationActionType::Highlight);

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        begin_settings(&events),
        vec![AnnotationSettings {
            annot_type: AnnotationType::TextMarkup,
            markup: TextMarkupType::Highlight,
            color: AnnotationColor::Yellow,
        }]
    );
    assert_eq!(action.active_annot_type(), AnnotationActionType::HighlightYellow);
}

#[test]
fn test_generic_highlight_follows_last_color() {
    let mut action = AnnotationAction::new();
    action.select_annotation(AnnotationActionType::HighlightBlue);
    action.select_annotation(AnnotationActionType::Squiggly);

    let rx = action.subscribe();
    action.select_annotation(AnnotationActionType::Highlight);

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(begin_settings(&events)[0].color, AnnotationColor::Cyan);
    assert_eq!(action.active_annot_type(), AnnotationActionType::HighlightBlue);
    assert_eq!(
        action.last_used_highlight_color(),
        AnnotationActionType::HighlightBlue
    );
    // The button shows what was asked for
    assert_eq!(action.icon_name(), "marker-symbolic");
}

#[test]
fn test_active_type_is_never_the_alias() {
    let mut action = AnnotationAction::new();
    for annot_type in AnnotationActionType::ALL {
        action.select_annotation(annot_type);
        assert_ne!(action.active_annot_type(), AnnotationActionType::Highlight);
    }
}

#[test]
fn test_cancel_strictly_precedes_begin_on_reselect() {
    let mut action = AnnotationAction::new();
    action.select_annotation(AnnotationActionType::Note);

    let rx = action.subscribe();
    action.select_annotation(AnnotationActionType::StrikeOut);

    let events: Vec<_> = rx.try_iter().collect();
    let cancel = events
        .iter()
        .position(|e| *e == AnnotationEvent::CancelAddAnnot)
        .unwrap();
    let begin = events
        .iter()
        .position(|e| matches!(e, AnnotationEvent::BeginAddAnnot(_)))
        .unwrap();
    assert!(cancel < begin);
    assert_eq!(begin_settings(&events).len(), 1);
}

#[test]
fn test_finished_releases_without_events() {
    let mut action = AnnotationAction::new();
    action.select_annotation(AnnotationActionType::Note);
    assert!(action.is_armed());

    let rx = action.subscribe();
    action.add_annot_finished();

    assert!(!action.is_armed());
    assert_eq!(action.state(), ActionState::Idle);
    assert!(rx.is_empty());
}

#[test]
fn test_finished_while_idle_is_noop() {
    let mut action = AnnotationAction::new();
    let rx = action.subscribe();

    action.add_annot_finished();
    action.add_annot_finished();

    assert_eq!(action.state(), ActionState::Idle);
    assert!(rx.is_empty());
}

#[test]
fn test_user_press_after_finish_rearms_same_mode() {
    let mut action = AnnotationAction::new();
    let steps = ScriptBuilder::new()
        .select(AnnotationActionType::HighlightGreen)
        .finish()
        .press()
        .build();

    let log = replay::run(&mut action, &steps);
    assert_eq!(
        log[2].1,
        vec![AnnotationEvent::BeginAddAnnot(
            AnnotationActionType::HighlightGreen.settings()
        )]
    );
    assert_eq!(
        action.state(),
        ActionState::Armed(AnnotationActionType::HighlightGreen)
    );
}

#[test]
fn test_select_while_armed_does_not_double_begin() {
    let mut action = AnnotationAction::new();
    action.toggle_pressed();

    let rx = action.subscribe();
    action.select_annotation(AnnotationActionType::Underline);

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.len(), 3);
    assert_eq!(begin_settings(&events).len(), 1);
}

#[test]
fn test_events_reach_every_subscriber() {
    let mut action = AnnotationAction::new();
    let first = action.subscribe();
    let second = action.subscribe();

    action.select_annotation(AnnotationActionType::Note);

    let a: Vec<_> = first.try_iter().collect();
    let b: Vec<_> = second.try_iter().collect();
    assert_eq!(a.len(), 3);
    assert_eq!(a, b);
}

#[test]
fn test_events_can_be_consumed_on_another_thread() {
    let mut action = AnnotationAction::new();
    let rx = action.subscribe();

    let consumer = std::thread::spawn(move || rx.iter().take(3).collect::<Vec<_>>());
    action.select_annotation(AnnotationActionType::HighlightPink);

    let events = consumer.join().unwrap();
    assert_eq!(events[0], AnnotationEvent::Activated);
    assert_eq!(events[1], AnnotationEvent::CancelAddAnnot);
    assert_eq!(
        events[2],
        AnnotationEvent::BeginAddAnnot(AnnotationActionType::HighlightPink.settings())
    );
}
