//! End-to-end tests of the mounted shell and the preview driver.

use fabric_common::test_utils::{create_temp_dir, init_test_logging};
use fabric_common::{ClickEvent, Document, DocumentTarget, Modifiers, PointerButton, Scope};
use fabric_config::ConfigCache;
use fabric_i18n::{CopyCatalog, Locale};
use fabric_router::Outlet;
use fabric_site::{HostBundle, Outcome, Page, Preview, SiteApp, SiteError};
use fabric_theme::{FileStore, MemoryStore, PreferenceStore, ThemeMode, DARK_CLASS};
use proptest::prelude::*;
use std::sync::Arc;

fn mount_with(host: &HostBundle, store: Arc<dyn PreferenceStore>) -> SiteApp {
    SiteApp::mount(
        Arc::new(ConfigCache::default()),
        CopyCatalog::embedded().unwrap(),
        host,
        store,
    )
    .unwrap()
}

fn preview(host: HostBundle) -> Preview {
    let app = mount_with(&host, Arc::new(MemoryStore::new()));
    Preview::new(app, host)
}

fn run(preview: &Preview, line: &str) -> String {
    match preview.run_line(line).unwrap() {
        Outcome::Continue(text) => text,
        Outcome::Quit => panic!("unexpected quit on '{line}'"),
    }
}

#[test]
fn test_title_follows_page_and_language() {
    init_test_logging();
    let host = HostBundle::default();
    let app = mount_with(&host, Arc::new(MemoryStore::new()));
    let catalog = CopyCatalog::embedded().unwrap();

    assert_eq!(host.document.title(), catalog.get(Locale::En).landing.document_title);

    app.navigate("/plan-my-workflow");
    assert_eq!(app.page(), Page::PlanWorkflow);
    assert_eq!(host.document.title(), catalog.get(Locale::En).planner.document_title);

    app.set_language(Locale::Ar);
    assert_eq!(host.document.title(), catalog.get(Locale::Ar).planner.document_title);
    assert_eq!(host.document.root_attribute("lang").as_deref(), Some("ar"));
    assert_eq!(host.document.root_attribute("dir").as_deref(), Some("rtl"));

    host.history.back();
    assert_eq!(app.page(), Page::Landing);
    assert_eq!(host.document.title(), catalog.get(Locale::Ar).landing.document_title);
}

#[test]
fn test_language_change_resets_selection() {
    let host = HostBundle::default();
    let app = mount_with(&host, Arc::new(MemoryStore::new()));

    assert!(app.select_goal("governance"));
    assert_eq!(app.toggle_tier("tier-1"), Some(false));
    app.set_language(Locale::Bg);

    assert_eq!(app.selection().selected_goal().as_deref(), Some("intake"));
    assert_eq!(app.selection().active_tier().as_deref(), Some("tier-1"));
}

#[test]
fn test_leaving_a_page_resets_selection() {
    let host = HostBundle::default();
    let app = mount_with(&host, Arc::new(MemoryStore::new()));

    assert_eq!(app.toggle_tier("tier-2"), Some(true));
    app.navigate("/plan-my-workflow");
    assert!(app.select_goal("governance"));
    assert_eq!(app.selection().active_tier().as_deref(), Some("tier-1"));

    app.navigate("/plan-my-workflow/");
    assert_eq!(app.selection().selected_goal().as_deref(), Some("governance"));

    app.navigate("/");
    app.navigate("/plan-my-workflow");
    assert_eq!(app.selection().selected_goal().as_deref(), Some("intake"));
}

#[test]
fn test_modified_click_is_left_to_host() {
    let host = HostBundle::default();
    let app = mount_with(&host, Arc::new(MemoryStore::new()));

    let mut click = ClickEvent::new(
        PointerButton::Primary,
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
    );
    assert!(!app.click_link("/plan-my-workflow", &mut click));
    assert!(!click.default_prevented());
    assert_eq!(app.page(), Page::Landing);

    let mut click = ClickEvent::primary();
    assert!(app.click_link("/plan-my-workflow", &mut click));
    assert!(click.default_prevented());
    assert_eq!(app.page(), Page::PlanWorkflow);
    assert_eq!(host.history.len(), 2);
}

#[test]
fn test_outlet_outside_site_scope_fails() {
    let err: SiteError = Outlet::<Page>::new(&Scope::root()).unwrap_err().into();
    assert!(matches!(err, SiteError::Router(_)));
}

#[test]
fn test_switcher_session() {
    let preview = preview(HostBundle::default());

    assert_eq!(run(&preview, "pick ko"), "language list is closed; open it with 'menu'");
    assert_eq!(run(&preview, "menu"), "language-switcher open");
    assert!(preview.app().render().contains(r#"role="listbox""#));

    run(&preview, "pick ko");
    assert_eq!(preview.app().i18n().language(), Locale::Ko);
    assert!(!preview.app().switcher().is_open());

    run(&preview, "menu");
    assert_eq!(run(&preview, "click-outside"), "language-switcher closed");
    run(&preview, "menu");
    assert_eq!(run(&preview, "escape"), "language-switcher closed");
    assert_eq!(preview.app().i18n().language(), Locale::Ko);
}

#[test]
fn test_navigation_session() {
    let preview = preview(HostBundle::default());

    let status = run(&preview, "go /explore-delivery-playbook/");
    assert!(status.starts_with("path=/explore-delivery-playbook page=delivery-playbook"));
    assert_eq!(
        run(&preview, "go /explore-delivery-playbook"),
        "already at /explore-delivery-playbook"
    );
    assert!(run(&preview, "back").starts_with("path=/ page=landing"));
    assert!(run(&preview, "forward").starts_with("path=/explore-delivery-playbook"));
    assert_eq!(run(&preview, "forward"), "nothing to go forward to");
    assert_eq!(run(&preview, ""), "");
    assert_eq!(preview.run_line("quit").unwrap(), Outcome::Quit);
}

#[test]
fn test_ambient_followed_until_explicit_choice() {
    let preview = preview(HostBundle::new("/", Some(false)));
    let document = Arc::clone(&preview.host().document);

    assert_eq!(run(&preview, "scheme dark"), "ambient dark -> theme dark");
    assert!(document.has_class(DocumentTarget::Root, DARK_CLASS));

    assert_eq!(run(&preview, "theme"), "theme light");
    assert_eq!(run(&preview, "scheme light"), "ambient light -> theme light");
    assert_eq!(run(&preview, "scheme dark"), "ambient dark -> theme light");
    assert!(!document.has_class(DocumentTarget::Body, DARK_CLASS));
}

#[test]
fn test_no_scheme_uses_fallback() {
    let host = HostBundle::new("/", None);
    let app = mount_with(&host, Arc::new(MemoryStore::unavailable()));
    assert_eq!(app.theme().mode(), ThemeMode::Dark);
    assert_eq!(app.toggle_theme(), ThemeMode::Light);
}

#[test]
fn test_theme_choice_survives_restart() {
    let dir = create_temp_dir();
    let path = dir.path().join("prefs").join("preferences.json");

    {
        let host = HostBundle::new("/", Some(true));
        let app = mount_with(&host, Arc::new(FileStore::open(&path).unwrap()));
        assert_eq!(app.toggle_theme(), ThemeMode::Light);
    }

    let host = HostBundle::new("/", Some(true));
    let app = mount_with(&host, Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(app.theme().mode(), ThemeMode::Light);
    assert!(app.render_header().contains(r#"aria-label="Switch to dark theme""#));
}

proptest! {
    #[test]
    fn prop_title_always_matches_page_and_language(
        steps in prop::collection::vec((0usize..3, 0usize..6), 1..12),
    ) {
        let host = HostBundle::default();
        let app = mount_with(&host, Arc::new(MemoryStore::new()));
        let catalog = CopyCatalog::embedded().unwrap();

        for (page, locale) in steps {
            let page = Page::ALL[page];
            let locale = Locale::ALL[locale];
            app.navigate(page.path());
            app.set_language(locale);

            let copy = catalog.get(locale);
            prop_assert_eq!(app.page(), page);
            prop_assert_eq!(host.document.title(), page.document_title(&copy).to_string());
            prop_assert_eq!(host.document.root_attribute("lang"), Some(locale.code().to_string()));
        }
    }
}
