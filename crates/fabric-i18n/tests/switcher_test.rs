//! Language switcher behavior against document-level events.

use fabric_common::test_utils::{init_test_logging, RecordingListener};
use fabric_common::{DocumentEvent, ElementId, EventSource, Scope};
use fabric_i18n::{CopyCatalog, I18nContext, I18nSnapshot, LanguageSwitcher, Locale};
use proptest::prelude::*;

const ROOT: &str = "language-switcher";

struct Fixture {
    context: I18nContext,
    switcher: LanguageSwitcher,
    events: EventSource<DocumentEvent>,
}

fn fixture() -> Fixture {
    init_test_logging();
    let scope = Scope::root();
    I18nContext::with_default(CopyCatalog::embedded().unwrap()).provide(&scope);
    let context = I18nContext::from_scope(&scope).unwrap();
    let switcher = LanguageSwitcher::new(context.clone(), ElementId::new(ROOT));
    Fixture {
        context,
        switcher,
        events: EventSource::new(),
    }
}

#[test]
fn test_outside_press_closes_without_language_change() {
    let f = fixture();
    let _mounted = f.switcher.mount(&f.events);
    f.context.set_language(Locale::Ru);

    f.switcher.toggle();
    f.events.emit(&DocumentEvent::pointer_down(["metric-card", "app-wrapper"]));

    assert!(!f.switcher.is_open());
    assert_eq!(f.context.language(), Locale::Ru);
}

#[test]
fn test_escape_closes_without_language_change() {
    let f = fixture();
    let _mounted = f.switcher.mount(&f.events);

    f.switcher.toggle();
    f.events.emit(&DocumentEvent::key_down("Escape"));

    assert!(!f.switcher.is_open());
    assert_eq!(f.context.language(), Locale::En);
}

#[test]
fn test_press_inside_keeps_list_open() {
    let f = fixture();
    let _mounted = f.switcher.mount(&f.events);

    f.switcher.toggle();
    f.events.emit(&DocumentEvent::pointer_down([
        "language-switcher__list",
        ROOT,
        "header-actions",
    ]));

    assert!(f.switcher.is_open());
}

#[test]
fn test_selecting_option_switches_and_closes() {
    let f = fixture();
    let changes = RecordingListener::<I18nSnapshot>::new();
    let _sub = f.context.subscribe(changes.listener());

    f.switcher.toggle();
    f.switcher.select(Locale::Zh);

    assert!(!f.switcher.is_open());
    assert_eq!(f.context.language(), Locale::Zh);
    assert_eq!(changes.count(), 1);
    assert_eq!(f.switcher.active_option().label, "中文");
}

#[test]
fn test_unmounted_switcher_ignores_events() {
    let f = fixture();
    {
        let _mounted = f.switcher.mount(&f.events);
        assert_eq!(f.events.listener_count(), 1);
    }
    assert_eq!(f.events.listener_count(), 0);

    f.switcher.toggle();
    f.events.emit(&DocumentEvent::key_down("Escape"));
    assert!(f.switcher.is_open());
}

#[derive(Debug, Clone)]
enum Action {
    Toggle,
    Select(Locale),
    Escape,
    PressInside,
    PressOutside,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Toggle),
        (0usize..6).prop_map(|i| Action::Select(Locale::ALL[i])),
        Just(Action::Escape),
        Just(Action::PressInside),
        Just(Action::PressOutside),
    ]
}

proptest! {
    #[test]
    fn prop_switcher_tracks_model(actions in prop::collection::vec(action(), 0..40)) {
        let f = fixture();
        let _mounted = f.switcher.mount(&f.events);
        let mut open = false;
        let mut language = Locale::En;

        for action in actions {
            match action {
                Action::Toggle => {
                    f.switcher.toggle();
                    open = !open;
                }
                Action::Select(locale) => {
                    f.switcher.select(locale);
                    open = false;
                    language = locale;
                }
                Action::Escape => {
                    f.events.emit(&DocumentEvent::key_down("Escape"));
                    open = false;
                }
                Action::PressInside => {
                    f.events.emit(&DocumentEvent::pointer_down([ROOT]));
                }
                Action::PressOutside => {
                    f.events.emit(&DocumentEvent::pointer_down(["elsewhere"]));
                    open = false;
                }
            }
            prop_assert_eq!(f.switcher.is_open(), open);
            prop_assert_eq!(f.context.language(), language);
        }
    }
}
