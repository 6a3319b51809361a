use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use shared::{CashflowMonth, ForecastPoint};

/// Lifecycle of the demo session's dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Nothing ingested yet; pages show their empty states.
    #[default]
    Empty,
    /// The server holds a freshly analyzed upload but the client caches
    /// are cold.
    Analyzed,
    /// Monthly cashflow is cached locally.
    Uploaded,
    /// A forecast is cached locally.
    ForecastReady,
}

/// Min/max of the "YYYY-MM" tags in a cashflow series. Zero-padded ISO
/// tags sort the same way textually and chronologically, so plain string
/// ordering is enough.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthBounds {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl MonthBounds {
    pub fn of(series: &[CashflowMonth]) -> Self {
        let mut tags: Vec<&str> = series.iter().map(|entry| entry.month.as_str()).collect();
        tags.sort_unstable();
        Self {
            min: tags.first().map(|tag| tag.to_string()),
            max: tags.last().map(|tag| tag.to_string()),
        }
    }
}

/// Active dashboard filter. The filter only applies when both endpoints
/// are present; anything else means "show all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Client-side source of truth for the session. Pages read from this
/// instead of fetching for themselves, so navigating between views never
/// refetches what is already cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinanceState {
    pub app_state: AppState,
    pub has_uploaded_data: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub monthly_cashflow: Vec<CashflowMonth>,
    pub forecast: Vec<ForecastPoint>,
    pub available_months: MonthBounds,
    pub date_range: DateRange,
}

/// Pure state transitions. Async work lives on the store handle; the
/// reducer never touches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceAction {
    CashflowLoaded(Vec<CashflowMonth>),
    ForecastLoaded(Vec<ForecastPoint>),
    DateRangeChanged(DateRange),
    HydrationStarted,
    HydrationFailed(String),
    HydrationFinished,
    AnalyticsInvalidated,
    Reset,
}

impl Reducible for FinanceState {
    type Action = FinanceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FinanceAction::CashflowLoaded(series) => {
                next.available_months = MonthBounds::of(&series);
                next.monthly_cashflow = series;
                next.app_state = AppState::Uploaded;
                next.has_uploaded_data = true;
            }
            FinanceAction::ForecastLoaded(points) => {
                // Cashflow data stays; the two series coexist.
                next.forecast = points;
                next.app_state = AppState::ForecastReady;
            }
            FinanceAction::DateRangeChanged(range) => {
                next.date_range = range;
            }
            FinanceAction::HydrationStarted => {
                next.is_loading = true;
                next.error = None;
            }
            FinanceAction::HydrationFailed(message) => {
                // Cached data stays usable while the banner shows.
                next.error = Some(message);
            }
            FinanceAction::HydrationFinished => {
                next.is_loading = false;
            }
            FinanceAction::AnalyticsInvalidated => {
                // A fresh upload makes the cached analytics stale. Clearing
                // the caches is what makes pages re-hydrate on next mount.
                // The loading flag is cleared too: any fetch still in flight
                // was just orphaned and will never dispatch its finisher.
                next.monthly_cashflow = Vec::new();
                next.forecast = Vec::new();
                next.available_months = MonthBounds::default();
                next.app_state = AppState::Analyzed;
                next.is_loading = false;
                next.error = None;
            }
            FinanceAction::Reset => {
                next = FinanceState::default();
            }
        }
        Rc::new(next)
    }
}
