//! The application shell.
//!
//! [`SiteApp::mount`] builds the root scope and provides the router,
//! language context and theme controller to it, mounts the language
//! switcher on the host's document events and keeps the document title and
//! `lang`/`dir` attributes in step with the active page and language.
//! Link classes are read from the [`ConfigCache`] at render time, so an
//! updated configuration restyles the header without remounting.
//! Dropping the app unmounts everything it registered.

use crate::error::SiteResult;
use crate::host::HostBundle;
use crate::pages::{render_page, route_table, Page, PageSelection};
use fabric_common::markup::{escape_html, Element};
use fabric_common::{ClickEvent, Document, ElementId, Scope, Signal, Subscription};
use fabric_config::ConfigCache;
use fabric_i18n::{CopyCatalog, I18nContext, I18nSnapshot, LanguageSwitcher, Locale, MountedSwitcher};
use fabric_router::{History, Link, Outlet, Router};
use fabric_theme::{PreferenceStore, ThemeController, ThemeMode, ThemeToggleState};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Element id of the language switcher root.
pub const SWITCHER_ROOT_ID: &str = "language-switcher";

/// Point-in-time view of the shell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatus {
    /// Current normalized path
    pub path: String,
    /// Page the path resolves to
    pub page: Page,
    /// Active language
    pub language: Locale,
    /// Active theme mode
    pub theme: ThemeMode,
    /// Whether the language list is open
    pub menu_open: bool,
    /// Current document title
    pub title: String,
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path={} page={} lang={} theme={} menu={} title={:?}",
            self.path,
            self.page,
            self.language,
            self.theme,
            if self.menu_open { "open" } else { "closed" },
            self.title
        )
    }
}

/// The mounted site.
pub struct SiteApp {
    scope: Scope,
    router: Router<Page>,
    i18n: I18nContext,
    theme: ThemeController,
    switcher: LanguageSwitcher,
    selection: PageSelection,
    page: Signal<Page>,
    document: Arc<dyn Document>,
    config: Arc<ConfigCache>,
    _mounted_switcher: MountedSwitcher,
    _subscriptions: Vec<Subscription>,
}

impl fmt::Debug for SiteApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteApp")
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl SiteApp {
    /// Mounts the shell on `host`. Language and theme settings are taken
    /// from the configuration current at mount time.
    ///
    /// # Errors
    ///
    /// Fails when a consumer cannot reach its provider, which indicates a
    /// wiring mistake.
    pub fn mount(
        config: Arc<ConfigCache>,
        catalog: Arc<CopyCatalog>,
        host: &HostBundle,
        store: Arc<dyn PreferenceStore>,
    ) -> SiteResult<Self> {
        let settings = config.get();
        let scope = Scope::root();
        let document: Arc<dyn Document> = host.document.clone();

        let history: Arc<dyn History> = host.history.clone();
        let router = Router::new(route_table(), history);
        router.provide(&scope);

        let i18n = I18nContext::new(catalog, settings.site.default_language);
        i18n.provide(&scope);

        let theme = ThemeController::new(
            settings.theme_options(),
            store,
            host.scheme.clone(),
            Arc::clone(&document),
        );
        theme.provide(&scope);

        let outlet = Outlet::<Page>::new(&scope)?;
        let page = Signal::new(outlet.view().unwrap_or(Page::Landing));
        let selection = PageSelection::new(&i18n.copy());
        sync_document(document.as_ref(), page.get(), &i18n.snapshot());

        let on_route = {
            let page = page.clone();
            let i18n = i18n.clone();
            let selection = selection.clone();
            let document = Arc::clone(&document);
            outlet.on_change(move |view| {
                let next = view.unwrap_or(Page::Landing);
                let copy = i18n.copy();
                if page.set_if_changed(next) {
                    selection.reset(&copy);
                }
                document.set_title(next.document_title(&copy));
                debug!(page = %next, "page activated");
            })
        };

        let on_language = {
            let page = page.clone();
            let selection = selection.clone();
            let document = Arc::clone(&document);
            i18n.subscribe(move |snapshot| {
                selection.reset(&snapshot.copy);
                sync_document(document.as_ref(), page.get(), snapshot);
            })
        };

        let switcher = LanguageSwitcher::new(i18n.clone(), ElementId::new(SWITCHER_ROOT_ID));
        let mounted_switcher = switcher.mount(&host.events);

        info!(
            path = %router.path(),
            language = %i18n.language(),
            theme = %theme.mode(),
            "site mounted"
        );

        Ok(Self {
            scope,
            router,
            i18n,
            theme,
            switcher,
            selection,
            page,
            document,
            config,
            _mounted_switcher: mounted_switcher,
            _subscriptions: vec![on_route, on_language],
        })
    }

    /// Root scope the providers live in.
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The router.
    pub const fn router(&self) -> &Router<Page> {
        &self.router
    }

    /// The language context.
    pub const fn i18n(&self) -> &I18nContext {
        &self.i18n
    }

    /// The theme controller.
    pub const fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// The header language switcher.
    pub const fn switcher(&self) -> &LanguageSwitcher {
        &self.switcher
    }

    /// The configuration the shell reads link classes from.
    pub const fn config(&self) -> &Arc<ConfigCache> {
        &self.config
    }

    /// Landing tier and planner goal selection.
    pub const fn selection(&self) -> &PageSelection {
        &self.selection
    }

    /// The active page.
    pub fn page(&self) -> Page {
        self.page.get()
    }

    /// Navigates to `path`. Returns false when already there.
    pub fn navigate(&self, path: &str) -> bool {
        self.router.navigate(path)
    }

    /// Clicks a header link to `path`. Returns whether the router took over
    /// the click.
    pub fn click_link(&self, path: &str, click: &mut ClickEvent) -> bool {
        self.nav_link(path).activate(&self.router, click)
    }

    /// Switches the language.
    pub fn set_language(&self, language: Locale) -> bool {
        self.i18n.set_language(language)
    }

    /// Flips the theme and stores the choice.
    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.toggle()
    }

    /// Opens or closes a landing tier. `None` for an unknown id.
    pub fn toggle_tier(&self, id: &str) -> Option<bool> {
        self.selection.toggle_tier(&self.i18n.copy(), id)
    }

    /// Chooses a planner goal. False for an unknown id.
    pub fn select_goal(&self, id: &str) -> bool {
        self.selection.select_goal(&self.i18n.copy(), id)
    }

    /// Current shell state.
    pub fn status(&self) -> SiteStatus {
        SiteStatus {
            path: self.router.path(),
            page: self.page(),
            language: self.i18n.language(),
            theme: self.theme.mode(),
            menu_open: self.switcher.is_open(),
            title: self.document.title(),
        }
    }

    fn nav_link(&self, path: &str) -> Link {
        let config = self.config.get();
        Link::new(path)
            .class(&config.router.nav_link_class)
            .active_class(&config.router.nav_active_class)
    }

    fn home_link(&self) -> Link {
        Link::new(Page::Landing.path())
            .class("brand-mark")
            .active_class(&self.config.get().router.active_class)
    }

    /// Renders the header bar.
    pub fn render_header(&self) -> String {
        let copy = self.i18n.copy();
        let header = &copy.header;

        let nav = Page::ALL.into_iter().fold(
            Element::new("nav")
                .class("primary-nav")
                .attr("aria-label", "Primary navigation"),
            |nav, page| {
                let label = escape_html(page.nav_label(&copy));
                nav.raw(&self.nav_link(page.path()).render(&self.router, &label))
            },
        );

        let actions = Element::new("div")
            .class("utility-actions")
            .raw(&self.switcher.render())
            .raw(&ThemeToggleState::for_mode(self.theme.mode()).render());

        Element::new("header")
            .class("app-bar")
            .child(
                Element::new("div")
                    .class("brand-lockup")
                    .child(Element::new("p").class("eyebrow eyebrow--muted").text(&header.eyebrow))
                    .raw(&self.home_link().render(&self.router, &escape_html(&header.brand)))
                    .child(Element::new("p").class("brand-copy").text(&header.copy)),
            )
            .child(
                Element::new("div")
                    .class("header-actions")
                    .child(nav)
                    .child(actions),
            )
            .render()
    }

    /// Renders the whole shell: header and active page.
    pub fn render(&self) -> String {
        let copy = self.i18n.copy();
        let body = render_page(self.page(), &copy, &self.selection);
        Element::new("div")
            .class("app-shell")
            .child(
                Element::new("main")
                    .class("app-wrapper")
                    .raw(&self.render_header())
                    .raw(&body),
            )
            .render()
    }
}

/// Applies the title of `page` and the language attributes of `snapshot`.
fn sync_document(document: &dyn Document, page: Page, snapshot: &I18nSnapshot) {
    document.set_title(page.document_title(&snapshot.copy));
    document.set_root_attribute("lang", snapshot.language.code());
    document.set_root_attribute("dir", snapshot.language.direction().as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabric_theme::MemoryStore;

    fn mount(host: &HostBundle) -> SiteApp {
        SiteApp::mount(
            Arc::new(ConfigCache::default()),
            CopyCatalog::embedded().unwrap(),
            host,
            Arc::new(MemoryStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_mount_sets_title_and_language_attributes() {
        let host = HostBundle::new("/plan-my-workflow/", Some(false));
        let app = mount(&host);

        let copy = app.i18n().copy();
        assert_eq!(app.page(), Page::PlanWorkflow);
        assert_eq!(host.document.title(), copy.planner.document_title);
        assert_eq!(host.document.root_attribute("lang").as_deref(), Some("en"));
        assert_eq!(host.document.root_attribute("dir").as_deref(), Some("ltr"));
        assert_eq!(app.theme().mode(), ThemeMode::Light);
    }

    #[test]
    fn test_header_marks_current_page() {
        let host = HostBundle::default();
        let app = mount(&host);
        app.navigate("/explore-delivery-playbook");

        let header = app.render_header();
        assert!(header.contains(
            r#"<a href="/explore-delivery-playbook" class="nav-link nav-link--active" aria-current="page">"#
        ));
        assert!(header.contains(r#"<a href="/" class="nav-link">"#));
        assert!(header.contains(r#"aria-label="Primary navigation""#));
    }

    #[test]
    fn test_link_classes_follow_config_updates() {
        let host = HostBundle::default();
        let app = mount(&host);
        assert!(app
            .render_header()
            .contains(r#"<a href="/" class="brand-mark is-active" aria-current="page">"#));

        let mut config = (*app.config().get()).clone();
        config.router.active_class = "is-current".to_string();
        config.router.nav_active_class = "nav-link--current".to_string();
        app.config().update(config);

        let header = app.render_header();
        assert!(header.contains(r#"class="brand-mark is-current""#));
        assert!(header.contains(r#"class="nav-link nav-link--current""#));

        app.navigate("/plan-my-workflow");
        let header = app.render_header();
        assert!(header.contains(r#"<a href="/" class="brand-mark">"#));
        assert!(!header.contains("is-current"));
    }

    #[test]
    fn test_unmount_releases_listeners() {
        let host = HostBundle::default();
        let app = mount(&host);
        assert_eq!(host.events.listener_count(), 1);
        assert!(host.history.listener_count() > 0);
        assert_eq!(host.scheme.listener_count(), 1);

        drop(app);
        assert_eq!(host.events.listener_count(), 0);
        assert_eq!(host.history.listener_count(), 0);
        assert_eq!(host.scheme.listener_count(), 0);
    }
}
