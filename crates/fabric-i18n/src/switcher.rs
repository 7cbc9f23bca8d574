//! Language switcher disclosure control.
//!
//! The switcher is a button that opens a list of the supported languages.
//! Picking an option selects that language and closes the list. While the
//! switcher is mounted it also listens to document-level events: a pointer
//! press outside its root element or an Escape key closes the list.

use crate::context::I18nContext;
use crate::locale::Locale;
use fabric_common::markup::{join_classes, Element};
use fabric_common::{DocumentEvent, ElementId, EventSource, Signal, Subscription};
use tracing::{debug, trace};

/// One entry of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Language this option selects
    pub locale: Locale,
    /// Native language name
    pub label: &'static str,
    /// Upper-cased code
    pub badge: String,
    /// Whether this is the active language
    pub active: bool,
}

/// Open/closed state of a language switcher bound to an [`I18nContext`].
#[derive(Debug, Clone)]
pub struct LanguageSwitcher {
    context: I18nContext,
    root: ElementId,
    open: Signal<bool>,
}

impl LanguageSwitcher {
    /// Creates a closed switcher whose root element is `root`.
    pub fn new(context: I18nContext, root: ElementId) -> Self {
        Self {
            context,
            root,
            open: Signal::new(false),
        }
    }

    /// Whether the option list is shown.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Root element; presses inside it do not close the list.
    pub const fn root(&self) -> &ElementId {
        &self.root
    }

    /// Opens a closed list and closes an open one.
    pub fn toggle(&self) {
        self.open.update_if(|open| Some(!open));
    }

    /// Closes the list. Returns whether it was open.
    pub fn close(&self) -> bool {
        self.open.set_if_changed(false)
    }

    /// Selects `locale` and closes the list.
    pub fn select(&self, locale: Locale) {
        self.context.set_language(locale);
        self.close();
        debug!(%locale, "language picked from switcher");
    }

    /// Every option, in display order.
    pub fn options(&self) -> Vec<LanguageOption> {
        let active = self.context.language();
        Locale::ALL
            .into_iter()
            .map(|locale| LanguageOption {
                locale,
                label: locale.display_name(),
                badge: locale.badge(),
                active: locale == active,
            })
            .collect()
    }

    /// The option shown on the button: the active language, else the first.
    pub fn active_option(&self) -> LanguageOption {
        let options = self.options();
        options
            .iter()
            .find(|option| option.active)
            .unwrap_or(&options[0])
            .clone()
    }

    /// Registers a listener called with the open state after each change.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn on_open_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.open.subscribe(listener)
    }

    /// Reacts to a document-level event. Returns whether the list closed.
    pub fn handle_document_event(&self, event: &DocumentEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        if event.is_escape() || event.is_pointer_outside(&self.root) {
            trace!(root = %self.root, "switcher dismissed");
            return self.close();
        }
        false
    }

    /// Installs the document listeners.
    ///
    /// They stay installed until the returned guard is dropped.
    #[must_use = "dropping the mount guard immediately removes the document listeners"]
    pub fn mount(&self, events: &EventSource<DocumentEvent>) -> MountedSwitcher {
        let switcher = self.clone();
        let subscription = events.subscribe(move |event| {
            switcher.handle_document_event(event);
        });
        debug!(root = %self.root, "language switcher mounted");
        MountedSwitcher {
            _subscription: subscription,
        }
    }

    /// Renders the control.
    pub fn render(&self) -> String {
        let open = self.is_open();
        let active = self.active_option();

        let button = Element::new("button")
            .attr("type", "button")
            .class("language-switcher__button")
            .attr("aria-haspopup", "listbox")
            .attr("aria-expanded", if open { "true" } else { "false" })
            .child(
                Element::new("span")
                    .class("language-switcher__icon")
                    .attr("aria-hidden", "true"),
            )
            .child(
                Element::new("span")
                    .class("language-switcher__label")
                    .text(active.label),
            );

        let mut root = Element::new("div")
            .attr("id", self.root.as_str())
            .class("language-switcher")
            .child(button);

        if open {
            let list = self.options().into_iter().fold(
                Element::new("ul")
                    .class("language-switcher__list")
                    .attr("role", "listbox"),
                |list, option| {
                    let class = join_classes([
                        "language-switcher__option",
                        if option.active { "is-active" } else { "" },
                    ]);
                    list.child(
                        Element::new("li").child(
                            Element::new("button")
                                .attr("type", "button")
                                .class(&class)
                                .attr("data-code", option.locale.code())
                                .child(
                                    Element::new("span")
                                        .class("language-switcher__option-code")
                                        .text(&option.badge),
                                )
                                .child(Element::new("span").text(option.label)),
                        ),
                    )
                },
            );
            root = root.child(list);
        }

        root.render()
    }
}

/// Keeps a switcher's document listeners installed. Dropping it unmounts.
#[derive(Debug)]
pub struct MountedSwitcher {
    _subscription: Subscription,
}
