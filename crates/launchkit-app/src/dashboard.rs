//! Dashboard synchronizer: reconciles a route identifier with the
//! campaign store and exposes a render-ready view model.
//!
//! Resolution is epoch-guarded: each `begin_resolve` supersedes every
//! earlier in-flight resolution, and applying a stale outcome is a
//! no-op ("latest request wins").

use launchkit_core::{
    BudgetKpi, CalendarItem, Campaign, Messaging, Persona, RiskAnalysis,
};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::tabs::TabState;

/// Fixed risk shown when a campaign has no generated risk analysis.
pub const PLACEHOLDER_RISK_SCORE: i64 = 6;
pub const PLACEHOLDER_RISK_JUSTIFICATION: &str =
    "Moderate risk due to competitive market landscape and the execution demands of an early-stage launch.";

/// Fixed competitor list shown when a campaign has none.
pub const PLACEHOLDER_COMPETITORS: [&str; 5] = [
    "Acme Corp",
    "Global Solutions Inc",
    "Market Leaders Ltd",
    "Innovation Partners",
    "Strategic Ventures Group",
];

#[must_use]
pub fn placeholder_risk() -> RiskAnalysis {
    RiskAnalysis {
        risk_score: Some(PLACEHOLDER_RISK_SCORE),
        justification: Some(PLACEHOLDER_RISK_JUSTIFICATION.to_string()),
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The regenerate affordance exists in the UI but has no contract yet.
    #[error("regenerate is not implemented")]
    RegenerateUnsupported,
}

/// Whether a merged section came from the generator or is synthetic
/// filler. Placeholders must stay distinguishable from real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSource {
    Generated,
    Placeholder,
}

/// A section value tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: SectionSource,
}

impl<T> Sourced<T> {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.source == SectionSource::Placeholder
    }
}

/// Render state for the sections that get no synthetic filler: either
/// data or an explicit empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView<T> {
    Data(T),
    NoData,
}

fn view_list<T>(list: Option<&[T]>) -> SectionView<&[T]> {
    match list {
        Some(items) if !items.is_empty() => SectionView::Data(items),
        _ => SectionView::NoData,
    }
}

/// A switcher entry for one of the alternate campaigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSummary {
    pub id: String,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Campaign> for CampaignSummary {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.clone(),
            title: campaign.title.clone(),
            created_at: campaign.created_at,
        }
    }
}

/// The reconciled view of one selected campaign.
#[derive(Debug)]
pub struct DashboardViewModel {
    pub campaign: Campaign,
    pub alternates: Vec<CampaignSummary>,
    pub risk: Sourced<RiskAnalysis>,
    pub competitors: Sourced<Vec<String>>,
    pub tabs: TabState,
}

impl DashboardViewModel {
    /// Merge a fetched campaign with its alternates, substituting the
    /// deterministic placeholders for absent risk/competitor sections.
    #[must_use]
    pub fn from_campaign(campaign: Campaign, alternates: Vec<CampaignSummary>) -> Self {
        let risk = match campaign.risk_analysis.clone() {
            Some(value) => Sourced {
                value,
                source: SectionSource::Generated,
            },
            None => Sourced {
                value: placeholder_risk(),
                source: SectionSource::Placeholder,
            },
        };
        let competitors = match campaign.competitors.clone() {
            Some(list) if !list.is_empty() => Sourced {
                value: list,
                source: SectionSource::Generated,
            },
            _ => Sourced {
                value: PLACEHOLDER_COMPETITORS
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
                source: SectionSource::Placeholder,
            },
        };
        Self {
            campaign,
            alternates,
            risk,
            competitors,
            tabs: TabState::new(),
        }
    }

    #[must_use]
    pub fn personas(&self) -> SectionView<&[Persona]> {
        view_list(self.campaign.personas.as_deref())
    }

    #[must_use]
    pub fn messaging(&self) -> SectionView<&Messaging> {
        match self.campaign.messaging.as_ref() {
            Some(messaging) => SectionView::Data(messaging),
            None => SectionView::NoData,
        }
    }

    #[must_use]
    pub fn channels(&self) -> SectionView<&[String]> {
        view_list(self.campaign.channels.as_deref())
    }

    #[must_use]
    pub fn calendar(&self) -> SectionView<&[CalendarItem]> {
        view_list(self.campaign.calendar.as_deref())
    }

    #[must_use]
    pub fn budget_kpis(&self) -> SectionView<&BudgetKpi> {
        match self.campaign.budget_kpis.as_ref() {
            Some(budget) => SectionView::Data(budget),
            None => SectionView::NoData,
        }
    }
}

/// Synchronizer state machine: `Loading -> {Selected, Empty, Error}`,
/// with a fresh `Loading` on every identifier change.
#[derive(Debug)]
pub enum DashboardState {
    Loading,
    Selected(DashboardViewModel),
    /// No campaigns exist yet; distinct from a fetch failure.
    Empty,
    /// Resolution failed; the UI offers a path back to the unscoped
    /// dashboard.
    Error(String),
}

/// Route-level effect of a resolution: the initial default selection
/// replaces the current location, a user switch pushes a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteChange {
    Replace(String),
    Push(String),
}

/// Ticket identifying one resolution cycle. Outcomes applied with a
/// superseded ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveTicket {
    epoch: u64,
}

/// Fetched data for one resolution cycle, before it is applied.
#[derive(Debug)]
pub enum ResolveOutcome {
    Selected {
        campaign: Campaign,
        all: Vec<Campaign>,
        /// Set when the selection came from defaulting rather than the route.
        defaulted: bool,
    },
    Empty,
    Failed(String),
}

/// Controller owning the dashboard screen state.
#[derive(Debug)]
pub struct DashboardController {
    state: DashboardState,
    epoch: u64,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self {
            state: DashboardState::Loading,
            epoch: 0,
        }
    }
}

impl DashboardController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen state; `Loading` until the first apply.
    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Start a resolution cycle: enter `Loading` and supersede any
    /// in-flight cycle.
    pub fn begin_resolve(&mut self) -> ResolveTicket {
        self.epoch += 1;
        self.state = DashboardState::Loading;
        ResolveTicket { epoch: self.epoch }
    }

    /// Apply a fetched outcome. Stale tickets are ignored and the state
    /// is left untouched.
    pub fn apply(&mut self, ticket: ResolveTicket, outcome: ResolveOutcome) -> Option<RouteChange> {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                stale_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "discarding stale dashboard resolution"
            );
            return None;
        }
        match outcome {
            ResolveOutcome::Selected {
                campaign,
                all,
                defaulted,
            } => {
                let alternates: Vec<CampaignSummary> =
                    all.iter().map(CampaignSummary::from).collect();
                let route = defaulted.then(|| RouteChange::Replace(campaign.id.clone()));
                self.state = DashboardState::Selected(DashboardViewModel::from_campaign(
                    campaign, alternates,
                ));
                route
            }
            ResolveOutcome::Empty => {
                self.state = DashboardState::Empty;
                None
            }
            ResolveOutcome::Failed(message) => {
                self.state = DashboardState::Error(message);
                None
            }
        }
    }

    /// Resolve the dashboard for an optional route identifier.
    ///
    /// With an identifier, the specific campaign and the full list are
    /// fetched concurrently and both must succeed. Without one, the
    /// newest campaign is selected and a replace-style route change is
    /// returned so the location reflects the resolved selection.
    pub async fn resolve(
        &mut self,
        pool: &SqlitePool,
        route_id: Option<&str>,
    ) -> Option<RouteChange> {
        let ticket = self.begin_resolve();
        let outcome = fetch_outcome(pool, route_id).await;
        self.apply(ticket, outcome)
    }

    /// User picked a different entry from the alternates switcher:
    /// re-resolve against it and push a navigable route change.
    pub async fn switch_to(&mut self, pool: &SqlitePool, id: &str) -> Option<RouteChange> {
        let ticket = self.begin_resolve();
        let outcome = fetch_outcome(pool, Some(id)).await;
        self.apply(ticket, outcome);
        match self.state() {
            DashboardState::Selected(_) => Some(RouteChange::Push(id.to_string())),
            _ => None,
        }
    }

    /// Regeneration has no contract yet; this is an explicit stub.
    ///
    /// # Errors
    ///
    /// Always returns [`DashboardError::RegenerateUnsupported`].
    pub fn regenerate(&self) -> Result<(), DashboardError> {
        tracing::info!("regenerate requested");
        Err(DashboardError::RegenerateUnsupported)
    }
}

/// Fetch the data for one resolution cycle. A failure of either
/// concurrent fetch fails the whole cycle; there is no partial render.
pub async fn fetch_outcome(pool: &SqlitePool, route_id: Option<&str>) -> ResolveOutcome {
    match route_id {
        Some(id) => {
            match tokio::try_join!(
                launchkit_db::get_campaign(pool, id),
                launchkit_db::list_campaigns(pool)
            ) {
                Ok((campaign, all)) => ResolveOutcome::Selected {
                    campaign,
                    all,
                    defaulted: false,
                },
                Err(e) => {
                    tracing::warn!(campaign_id = %id, error = %e, "dashboard resolution failed");
                    ResolveOutcome::Failed(e.to_string())
                }
            }
        }
        None => match launchkit_db::list_campaigns(pool).await {
            Ok(all) if all.is_empty() => ResolveOutcome::Empty,
            Ok(all) => {
                let campaign = all[0].clone();
                ResolveOutcome::Selected {
                    campaign,
                    all,
                    defaulted: true,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "campaign list fetch failed");
                ResolveOutcome::Failed(e.to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Tab;
    use chrono::Utc;

    fn bare_campaign(id: &str) -> Campaign {
        Campaign {
            id: id.to_string(),
            title: "AI CRM".to_string(),
            tag: None,
            personas: None,
            messaging: None,
            channels: None,
            calendar: None,
            budget_kpis: None,
            competitors: None,
            risk_analysis: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn absent_risk_gets_the_tagged_placeholder() {
        let vm = DashboardViewModel::from_campaign(bare_campaign("c1"), vec![]);
        assert!(vm.risk.is_placeholder());
        assert_eq!(vm.risk.value.risk_score, Some(PLACEHOLDER_RISK_SCORE));
        assert_eq!(
            vm.risk.value.justification.as_deref(),
            Some(PLACEHOLDER_RISK_JUSTIFICATION)
        );
    }

    #[test]
    fn explicit_risk_is_never_replaced() {
        let mut campaign = bare_campaign("c1");
        campaign.risk_analysis = Some(RiskAnalysis {
            risk_score: Some(2),
            justification: Some("tiny addressable market".to_string()),
        });
        let vm = DashboardViewModel::from_campaign(campaign, vec![]);
        assert!(!vm.risk.is_placeholder());
        assert_eq!(vm.risk.value.risk_score, Some(2));
    }

    #[test]
    fn empty_competitors_get_the_five_name_placeholder() {
        let mut campaign = bare_campaign("c1");
        campaign.competitors = Some(vec![]);
        let vm = DashboardViewModel::from_campaign(campaign, vec![]);
        assert!(vm.competitors.is_placeholder());
        assert_eq!(vm.competitors.value.len(), 5);
        assert_eq!(vm.competitors.value[0], PLACEHOLDER_COMPETITORS[0]);
    }

    #[test]
    fn non_empty_competitors_are_used_verbatim() {
        let mut campaign = bare_campaign("c1");
        campaign.competitors = Some(vec!["Rival One".to_string()]);
        let vm = DashboardViewModel::from_campaign(campaign, vec![]);
        assert!(!vm.competitors.is_placeholder());
        assert_eq!(vm.competitors.value, vec!["Rival One".to_string()]);
    }

    #[test]
    fn other_absent_sections_render_no_data_not_filler() {
        let vm = DashboardViewModel::from_campaign(bare_campaign("c1"), vec![]);
        assert_eq!(vm.personas(), SectionView::NoData);
        assert_eq!(vm.messaging(), SectionView::NoData);
        assert_eq!(vm.channels(), SectionView::NoData);
        assert_eq!(vm.calendar(), SectionView::NoData);
        assert_eq!(vm.budget_kpis(), SectionView::NoData);
    }

    #[test]
    fn view_model_defaults_to_the_personas_tab() {
        let vm = DashboardViewModel::from_campaign(bare_campaign("c1"), vec![]);
        assert_eq!(vm.tabs.active(), Tab::Personas);
    }

    #[test]
    fn stale_ticket_outcomes_are_discarded() {
        let mut controller = DashboardController::new();
        let stale = controller.begin_resolve();
        let current = controller.begin_resolve();

        let ignored = controller.apply(
            stale,
            ResolveOutcome::Selected {
                campaign: bare_campaign("old"),
                all: vec![],
                defaulted: false,
            },
        );
        assert!(ignored.is_none());
        assert!(matches!(controller.state(), DashboardState::Loading));

        controller.apply(
            current,
            ResolveOutcome::Selected {
                campaign: bare_campaign("new"),
                all: vec![],
                defaulted: false,
            },
        );
        match controller.state() {
            DashboardState::Selected(vm) => assert_eq!(vm.campaign.id, "new"),
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[test]
    fn defaulted_selection_reports_a_replace_route() {
        let mut controller = DashboardController::new();
        let ticket = controller.begin_resolve();
        let route = controller.apply(
            ticket,
            ResolveOutcome::Selected {
                campaign: bare_campaign("newest"),
                all: vec![bare_campaign("newest"), bare_campaign("older")],
                defaulted: true,
            },
        );
        assert_eq!(route, Some(RouteChange::Replace("newest".to_string())));
        match controller.state() {
            DashboardState::Selected(vm) => assert_eq!(vm.alternates.len(), 2),
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[test]
    fn empty_and_error_states_are_distinct() {
        let mut controller = DashboardController::new();
        let ticket = controller.begin_resolve();
        controller.apply(ticket, ResolveOutcome::Empty);
        assert!(matches!(controller.state(), DashboardState::Empty));

        let ticket = controller.begin_resolve();
        controller.apply(ticket, ResolveOutcome::Failed("record not found".to_string()));
        assert!(
            matches!(controller.state(), DashboardState::Error(msg) if msg == "record not found")
        );
    }

    #[test]
    fn regenerate_is_an_explicit_stub() {
        let controller = DashboardController::new();
        assert!(matches!(
            controller.regenerate(),
            Err(DashboardError::RegenerateUnsupported)
        ));
    }
}
