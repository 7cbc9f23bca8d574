//! Typed copy tree.
//!
//! One [`AppCopy`] holds every display string for one language. The JSON
//! documents under `locales/` use camelCase keys and map field for field
//! onto these types; unknown keys are rejected.

use serde::{Deserialize, Serialize};

/// All display strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppCopy {
    /// Site header
    pub header: HeaderCopy,
    /// Landing page
    pub landing: LandingCopy,
    /// Delivery playbook page
    pub playbook: PlaybookCopy,
    /// Workflow planner page
    pub planner: PlannerCopy,
}

/// Site header copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderCopy {
    /// Small caps line above the brand
    pub eyebrow: String,
    /// Brand name
    pub brand: String,
    /// Tagline
    pub copy: String,
    /// Navigation labels
    pub nav: NavCopy,
}

/// Navigation labels, one per page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavCopy {
    /// Landing page label
    pub landing: String,
    /// Playbook page label
    pub playbook: String,
    /// Planner page label
    pub planner: String,
}

/// A titled card with an optional highlight line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Feature {
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
    /// Optional emphasized line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

/// A step of a delivery timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimelineStep {
    /// Step title
    pub title: String,
    /// Optional duration label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    /// Step body
    pub description: String,
}

/// A headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Metric {
    /// Metric name
    pub label: String,
    /// Metric figure
    pub value: String,
    /// Supporting detail
    pub detail: String,
}

/// Section hero with two calls to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageHero {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Lead paragraph
    pub lead: String,
    /// Primary button label
    pub primary_cta: String,
    /// Secondary button label
    pub secondary_cta: String,
}

/// Landing page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LandingCopy {
    /// Document title while the page is active
    pub document_title: String,
    /// Hero block
    pub hero: LandingHero,
    /// Headline metrics
    pub metrics: Vec<Metric>,
    /// Adaptive deployment tiers
    pub adaptive: AdaptiveCopy,
    /// Capability cards
    pub capabilities: CapabilitiesSection,
    /// Delivery pipeline
    pub delivery_playbook: PipelineSection,
    /// Sustainability cards
    pub sustainability: SustainabilitySection,
    /// Technology stack
    pub stack: StackSection,
    /// Case studies
    pub field_notes: FieldNotes,
    /// Closing banner
    pub cta_banner: CtaBanner,
}

/// Landing hero with a promotional aside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LandingHero {
    /// Heading
    pub heading: String,
    /// Lead paragraph
    pub lead: String,
    /// Promo label
    pub promo_label: String,
    /// Promo text
    pub promo_copy: String,
    /// Primary button label
    pub primary_cta: String,
    /// Secondary button label
    pub secondary_cta: String,
}

/// Adaptive deployment section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdaptiveCopy {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// List captions
    pub labels: TierLabels,
    /// Deployment tiers
    pub tiers: Vec<Tier>,
    /// Sidebar copy
    pub sidebar: AdaptiveSidebar,
}

/// Captions for the per-tier lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TierLabels {
    /// Benefits caption
    pub benefits: String,
    /// Use cases caption
    pub use_cases: String,
}

/// A deployment tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tier {
    /// Stable identifier, identical across languages
    pub id: String,
    /// Tier name
    pub label: String,
    /// One-line pitch
    pub tagline: String,
    /// Summary paragraph
    pub summary: String,
    /// Where it runs
    pub location: String,
    /// Benefit bullets
    pub benefits: Vec<String>,
    /// Use case bullets
    pub use_cases: Vec<String>,
}

/// Sidebar of the adaptive section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdaptiveSidebar {
    /// Blending block small caps line
    pub blending_eyebrow: String,
    /// Blending block heading
    pub blending_heading: String,
    /// Blending block body
    pub blending_body: String,
    /// Blending block callout
    pub blending_callout: String,
    /// Blending block bullets
    pub blending_highlights: Vec<String>,
    /// Sustainability block small caps line
    pub sustainability_eyebrow: String,
    /// Sustainability block heading
    pub sustainability_heading: String,
    /// Sustainability block bullets
    pub sustainability_highlights: Vec<String>,
}

/// Capability cards section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CapabilitiesSection {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// Cards
    pub features: Vec<Feature>,
}

/// Sustainability cards section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SustainabilitySection {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// Cards
    pub highlights: Vec<Feature>,
}

/// The delivery pipeline section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PipelineSection {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// Ordered steps
    pub pipeline: Vec<TimelineStep>,
}

/// Technology stack section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackSection {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// Stack entries
    pub items: Vec<String>,
}

/// Case study section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldNotes {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Case studies
    pub case_studies: Vec<CaseStudy>,
}

/// A customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudy {
    /// Customer
    pub company: String,
    /// Outcome
    pub result: String,
    /// Quote
    pub quote: String,
}

/// Closing call-to-action banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtaBanner {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Body
    pub description: String,
    /// Primary button label
    pub primary_cta: String,
    /// Secondary button label
    pub secondary_cta: String,
}

/// Delivery playbook page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaybookCopy {
    /// Document title while the page is active
    pub document_title: String,
    /// Hero block
    pub hero: PageHero,
    /// Immersion moments
    pub immersion: Immersion,
    /// Instrumentation beats
    pub instrumentation: Instrumentation,
    /// Experiment tracks
    pub experiments: Experiments,
}

/// Immersion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Immersion {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// Moments
    pub moments: Vec<Moment>,
}

/// An immersion moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Moment {
    /// Title
    pub title: String,
    /// Outcome line
    pub outcome: String,
    /// Detail paragraph
    pub detail: String,
}

/// Instrumentation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Instrumentation {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Beats
    pub beats: Vec<Beat>,
    /// Safety list heading
    pub safety_heading: String,
    /// Safety bullets
    pub safety_signals: Vec<String>,
}

/// An instrumentation beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Beat {
    /// Label
    pub label: String,
    /// Body
    pub description: String,
}

/// Experiments section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Experiments {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Intro paragraph
    pub description: String,
    /// Tracks
    pub tracks: Vec<ExperimentTrack>,
    /// Add button label
    pub add_button: String,
}

/// An experiment track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperimentTrack {
    /// Title
    pub title: String,
    /// Summary
    pub summary: String,
    /// Milestone bullets
    pub milestones: Vec<String>,
}

/// Workflow planner page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlannerCopy {
    /// Document title while the page is active
    pub document_title: String,
    /// Hero block
    pub hero: PageHero,
    /// Caption for a goal's metric
    pub goal_metric_label: String,
    /// Selectable workflow goals
    pub workflow_goals: Vec<WorkflowGoal>,
    /// Assurance tracks
    pub assurance: Assurance,
    /// Milestones
    pub milestones: Milestones,
    /// Insight tiles
    pub insights: Insights,
}

/// A selectable workflow goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkflowGoal {
    /// Stable identifier, identical across languages
    pub id: String,
    /// Label
    pub label: String,
    /// Summary
    pub summary: String,
    /// Target metric
    pub metric: String,
    /// Steps
    pub steps: Vec<String>,
}

/// Assurance section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Assurance {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Tracks
    pub tracks: Vec<AssuranceTrack>,
}

/// An assurance track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssuranceTrack {
    /// Title
    pub title: String,
    /// Detail
    pub detail: String,
}

/// Milestones section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Milestones {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Highlights
    pub highlights: Vec<MilestoneHighlight>,
}

/// A tagged milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MilestoneHighlight {
    /// Tag
    pub tag: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
}

/// Insights section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Insights {
    /// Small caps line
    pub eyebrow: String,
    /// Heading
    pub heading: String,
    /// Tiles
    pub tiles: Vec<InsightTile>,
}

/// An insight tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InsightTile {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
}
