//! The three pages of the site and their route table.
//!
//! Page bodies are rendered as hero summaries plus the interactive parts
//! that carry state: the landing tier accordion and the planner goal tabs.

use fabric_common::markup::{join_classes, Element};
use fabric_common::Signal;
use fabric_i18n::copy::{PageHero, PlannerCopy, WorkflowGoal};
use fabric_i18n::AppCopy;
use fabric_router::RouteTable;
use std::fmt;
use tracing::debug;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// `/`, also the fallback
    Landing,
    /// `/explore-delivery-playbook`
    DeliveryPlaybook,
    /// `/plan-my-workflow`
    PlanWorkflow,
}

impl Page {
    /// All pages in route table order.
    pub const ALL: [Self; 3] = [Self::Landing, Self::DeliveryPlaybook, Self::PlanWorkflow];

    /// Path the page is registered under.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::DeliveryPlaybook => "/explore-delivery-playbook",
            Self::PlanWorkflow => "/plan-my-workflow",
        }
    }

    /// Document title of the page in `copy`'s language.
    pub fn document_title(self, copy: &AppCopy) -> &str {
        match self {
            Self::Landing => &copy.landing.document_title,
            Self::DeliveryPlaybook => &copy.playbook.document_title,
            Self::PlanWorkflow => &copy.planner.document_title,
        }
    }

    /// Header navigation label of the page.
    pub fn nav_label(self, copy: &AppCopy) -> &str {
        match self {
            Self::Landing => &copy.header.nav.landing,
            Self::DeliveryPlaybook => &copy.header.nav.playbook,
            Self::PlanWorkflow => &copy.header.nav.planner,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landing => "landing",
            Self::DeliveryPlaybook => "delivery-playbook",
            Self::PlanWorkflow => "plan-workflow",
        };
        f.write_str(name)
    }
}

/// The site's route table. The landing page comes first and is the fallback.
pub fn route_table() -> RouteTable<Page> {
    Page::ALL
        .into_iter()
        .fold(RouteTable::new(), |table, page| table.route(page.path(), page))
}

/// Per-page selection: the open landing tier and the chosen planner goal.
///
/// Both reset to the first entry of the current copy tree whenever the
/// language or the active page changes.
#[derive(Debug, Clone)]
pub struct PageSelection {
    active_tier: Signal<Option<String>>,
    selected_goal: Signal<Option<String>>,
}

impl PageSelection {
    /// Selection opened on the first tier and the first goal of `copy`.
    pub fn new(copy: &AppCopy) -> Self {
        Self {
            active_tier: Signal::new(first_tier(copy)),
            selected_goal: Signal::new(first_goal(copy)),
        }
    }

    /// Returns both selections to the first entries of `copy`.
    pub fn reset(&self, copy: &AppCopy) {
        self.active_tier.set_if_changed(first_tier(copy));
        self.selected_goal.set_if_changed(first_goal(copy));
    }

    /// Id of the open tier, if any.
    pub fn active_tier(&self) -> Option<String> {
        self.active_tier.get()
    }

    /// Opens the tier `id`, or closes it when it is already open.
    ///
    /// Returns `None` for an id `copy` does not contain, else whether the
    /// tier is open afterwards.
    pub fn toggle_tier(&self, copy: &AppCopy, id: &str) -> Option<bool> {
        if !copy.landing.adaptive.tiers.iter().any(|tier| tier.id == id) {
            return None;
        }
        let open = self.active_tier.with(|current| current.as_deref() != Some(id));
        self.active_tier.set(open.then(|| id.to_string()));
        debug!(tier = id, open, "tier toggled");
        Some(open)
    }

    /// Id of the chosen goal, if any.
    pub fn selected_goal(&self) -> Option<String> {
        self.selected_goal.get()
    }

    /// Chooses goal `id`. Returns false for an id `copy` does not contain.
    pub fn select_goal(&self, copy: &AppCopy, id: &str) -> bool {
        if !copy.planner.workflow_goals.iter().any(|goal| goal.id == id) {
            return false;
        }
        self.selected_goal.set_if_changed(Some(id.to_string()));
        true
    }

    /// The goal shown in the planner panel: the chosen one, else the first.
    pub fn active_goal<'a>(&self, planner: &'a PlannerCopy) -> Option<&'a WorkflowGoal> {
        let selected = self.selected_goal();
        planner
            .workflow_goals
            .iter()
            .find(|goal| Some(goal.id.as_str()) == selected.as_deref())
            .or_else(|| planner.workflow_goals.first())
    }
}

fn first_tier(copy: &AppCopy) -> Option<String> {
    copy.landing.adaptive.tiers.first().map(|tier| tier.id.clone())
}

fn first_goal(copy: &AppCopy) -> Option<String> {
    copy.planner.workflow_goals.first().map(|goal| goal.id.clone())
}

/// Renders the body of `page`.
pub fn render_page(page: Page, copy: &AppCopy, selection: &PageSelection) -> String {
    match page {
        Page::Landing => render_landing(copy, selection),
        Page::DeliveryPlaybook => render_playbook(copy),
        Page::PlanWorkflow => render_planner(copy, selection),
    }
}

fn cta(label: &str, route: &str, variant: &str) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class(&join_classes(["button", variant]))
        .attr("data-route", route)
        .text(label)
}

fn hero_section(class: &str, hero: &PageHero, primary: &str, secondary: &str) -> Element {
    Element::new("section").class(class).child(
        Element::new("div")
            .class("hero-content")
            .child(Element::new("p").class("eyebrow").text(&hero.eyebrow))
            .child(Element::new("h1").class("hero-heading").text(&hero.heading))
            .child(Element::new("p").class("lead hero-lead").text(&hero.lead))
            .child(
                Element::new("div")
                    .class("hero-actions")
                    .child(cta(&hero.primary_cta, primary, "button--primary"))
                    .child(cta(&hero.secondary_cta, secondary, "button--ghost")),
            ),
    )
}

fn render_landing(copy: &AppCopy, selection: &PageSelection) -> String {
    let landing = &copy.landing;
    let active_tier = selection.active_tier();

    let hero = Element::new("section").class("hero-card").child(
        Element::new("div")
            .class("hero-content")
            .child(Element::new("h1").class("hero-heading").text(&landing.hero.heading))
            .child(Element::new("p").class("lead hero-lead").text(&landing.hero.lead))
            .child(
                Element::new("div")
                    .class("cta-group")
                    .child(cta(
                        &landing.hero.primary_cta,
                        Page::PlanWorkflow.path(),
                        "button--primary",
                    ))
                    .child(cta(
                        &landing.hero.secondary_cta,
                        Page::DeliveryPlaybook.path(),
                        "button--secondary",
                    )),
            ),
    );

    let mut accordion = Element::new("div")
        .class("accordion-list")
        .attr("role", "list");
    for tier in &landing.adaptive.tiers {
        let open = active_tier.as_deref() == Some(tier.id.as_str());
        let panel_id = format!("{}-content", tier.id);
        accordion = accordion.child(
            Element::new("article")
                .class(&join_classes(["accordion-card", if open { "is-open" } else { "" }]))
                .attr("role", "listitem")
                .child(
                    Element::new("button")
                        .class("accordion-trigger")
                        .attr("aria-expanded", bool_attr(open))
                        .attr("aria-controls", &panel_id)
                        .attr("data-tier", &tier.id)
                        .child(Element::new("span").class("accordion-label").text(&tier.label))
                        .child(Element::new("span").class("accordion-title").text(&tier.tagline)),
                )
                .child(
                    Element::new("div")
                        .attr("id", &panel_id)
                        .class("accordion-panel")
                        .attr("aria-hidden", bool_attr(!open))
                        .child(Element::new("p").class("accordion-summary").text(&tier.summary)),
                ),
        );
    }

    let adaptive = Element::new("section")
        .class("section-card adaptive-grid")
        .child(
            Element::new("div")
                .class("section-header")
                .child(Element::new("p").class("eyebrow").text(&landing.adaptive.eyebrow))
                .child(
                    Element::new("h2")
                        .class("section-heading")
                        .text(&landing.adaptive.heading),
                ),
        )
        .child(accordion);

    hero.render() + &adaptive.render()
}

fn render_playbook(copy: &AppCopy) -> String {
    let playbook = &copy.playbook;
    let hero = hero_section(
        "hero-card playbook-hero",
        &playbook.hero,
        Page::PlanWorkflow.path(),
        Page::Landing.path(),
    );

    let mut moments = Element::new("div").class("playbook-card-grid");
    for moment in &playbook.immersion.moments {
        moments = moments.child(
            Element::new("article")
                .class("content-card")
                .child(Element::new("h3").class("card-title").text(&moment.title))
                .child(Element::new("p").class("card-text").text(&moment.outcome)),
        );
    }
    let immersion = Element::new("section")
        .class("section-card playbook-grid")
        .child(
            Element::new("div")
                .class("section-header")
                .child(Element::new("p").class("eyebrow").text(&playbook.immersion.eyebrow))
                .child(
                    Element::new("h2")
                        .class("section-heading")
                        .text(&playbook.immersion.heading),
                ),
        )
        .child(moments);

    hero.render() + &immersion.render()
}

fn render_planner(copy: &AppCopy, selection: &PageSelection) -> String {
    let planner = &copy.planner;
    let hero = hero_section(
        "hero-card planner-hero",
        &planner.hero,
        Page::DeliveryPlaybook.path(),
        Page::Landing.path(),
    );
    let active = selection.active_goal(planner);

    let mut tabs = Element::new("div")
        .class("goal-selector")
        .attr("role", "tablist")
        .attr("aria-label", "Workflow goals");
    for goal in &planner.workflow_goals {
        let selected = active.is_some_and(|active| active.id == goal.id);
        tabs = tabs.child(
            Element::new("button")
                .attr("type", "button")
                .class(&join_classes(["goal-card", if selected { "is-active" } else { "" }]))
                .attr("role", "tab")
                .attr("aria-selected", bool_attr(selected))
                .attr("data-goal", &goal.id)
                .child(Element::new("span").text(&goal.label))
                .child(Element::new("span").class("goal-card__metric").text(&goal.metric)),
        );
    }

    let mut workspace = Element::new("section").class("section-card").child(tabs);
    if let Some(goal) = active {
        let mut steps = Element::new("ul").class("goal-steps");
        for step in &goal.steps {
            steps = steps.child(Element::new("li").text(step));
        }
        workspace = workspace.child(
            Element::new("div")
                .class("goal-panel")
                .child(Element::new("p").class("goal-panel__summary").text(&goal.summary))
                .child(
                    Element::new("p")
                        .class("goal-panel__metric")
                        .child(Element::new("span").text(&planner.goal_metric_label))
                        .child(Element::new("strong").text(&goal.metric)),
                )
                .child(steps),
        );
    }

    hero.render() + &workspace.render()
}

const fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
