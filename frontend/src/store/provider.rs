use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::SessionIdentity;

use crate::services::{ApiClient, Logger};
use crate::store::sequence::{FetchKey, FetchSequences};
use crate::store::state::{DateRange, FinanceAction, FinanceState};

/// Banner text for a failed cashflow hydration.
pub const CASHFLOW_FETCH_ERROR: &str = "Failed to load data. Please try again.";
/// Banner text for a failed forecast hydration.
pub const FORECAST_FETCH_ERROR: &str = "Failed to generate forecast.";

/// Handle passed through context: the reducer state plus everything the
/// async actions need. Cloning is cheap, all fields are shared.
#[derive(Clone)]
pub struct FinanceStore {
    state: UseReducerHandle<FinanceState>,
    client: ApiClient,
    identity: SessionIdentity,
    sequences: FetchSequences,
}

impl PartialEq for FinanceStore {
    // Context consumers only re-render on state value changes.
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl FinanceStore {
    fn new(
        state: UseReducerHandle<FinanceState>,
        client: ApiClient,
        identity: SessionIdentity,
        sequences: FetchSequences,
    ) -> Self {
        Self {
            state,
            client,
            identity,
            sequences,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &FinanceState {
        &self.state
    }

    /// The client shared with hooks so every request goes through the same
    /// error normalization.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Identity every request in this session is issued for.
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// Hydrate the monthly cashflow cache from the server.
    pub fn fetch_monthly_cashflow(&self) {
        let store = self.clone();
        let ticket = self.sequences.begin(FetchKey::Cashflow);
        self.state.dispatch(FinanceAction::HydrationStarted);

        spawn_local(async move {
            let result = store.client.fetch_cashflow(store.identity.user_id).await;
            if !store.sequences.is_current(FetchKey::Cashflow, ticket) {
                // A newer fetch owns the loading flag and the cache now.
                Logger::debug_with_component("store", "discarding stale cashflow response");
                return;
            }
            match result {
                Ok(series) => store.state.dispatch(FinanceAction::CashflowLoaded(series)),
                Err(e) => {
                    Logger::error_with_component(
                        "store",
                        &format!("cashflow hydration failed: {}", e),
                    );
                    store
                        .state
                        .dispatch(FinanceAction::HydrationFailed(CASHFLOW_FETCH_ERROR.into()));
                }
            }
            store.state.dispatch(FinanceAction::HydrationFinished);
        });
    }

    /// Hydrate the forecast cache from the server.
    pub fn fetch_forecast_data(&self) {
        let store = self.clone();
        let ticket = self.sequences.begin(FetchKey::Forecast);
        self.state.dispatch(FinanceAction::HydrationStarted);

        spawn_local(async move {
            let result = store.client.fetch_forecast(store.identity.user_id).await;
            if !store.sequences.is_current(FetchKey::Forecast, ticket) {
                Logger::debug_with_component("store", "discarding stale forecast response");
                return;
            }
            match result {
                Ok(points) => store.state.dispatch(FinanceAction::ForecastLoaded(points)),
                Err(e) => {
                    Logger::error_with_component(
                        "store",
                        &format!("forecast hydration failed: {}", e),
                    );
                    store
                        .state
                        .dispatch(FinanceAction::HydrationFailed(FORECAST_FETCH_ERROR.into()));
                }
            }
            store.state.dispatch(FinanceAction::HydrationFinished);
        });
    }

    /// Drop the cached analytics so pages re-hydrate on their next mount,
    /// and mark any fetch still in flight stale so it cannot resurrect them.
    pub fn invalidate_analytics(&self) {
        self.sequences.invalidate_all();
        self.state.dispatch(FinanceAction::AnalyticsInvalidated);
    }

    /// Replace the active dashboard date filter.
    pub fn set_date_range(&self, range: DateRange) {
        self.state.dispatch(FinanceAction::DateRangeChanged(range));
    }

    /// Return the session to its pristine state.
    pub fn reset(&self) {
        self.sequences.invalidate_all();
        self.state.dispatch(FinanceAction::Reset);
    }
}

#[derive(Properties, PartialEq)]
pub struct FinanceStoreProviderProps {
    pub children: Html,
}

/// Owns the single store instance for the browser session and shares it
/// with the component tree via context.
#[function_component(FinanceStoreProvider)]
pub fn finance_store_provider(props: &FinanceStoreProviderProps) -> Html {
    let state = use_reducer(FinanceState::default);
    let session = use_memo((), |_| {
        (
            ApiClient::new(),
            SessionIdentity::demo(),
            FetchSequences::new(),
        )
    });
    let (client, identity, sequences) = (*session).clone();
    let store = FinanceStore::new(state, client, identity, sequences);

    html! {
        <ContextProvider<FinanceStore> context={store}>
            { props.children.clone() }
        </ContextProvider<FinanceStore>>
    }
}

/// Read the finance store from context. Panics with a descriptive message
/// when called outside a `FinanceStoreProvider` subtree; that is a wiring
/// bug, not a recoverable condition.
#[hook]
pub fn use_finance_store() -> FinanceStore {
    require_store(use_context::<FinanceStore>())
}

fn require_store(context: Option<FinanceStore>) -> FinanceStore {
    match context {
        Some(store) => store,
        None => panic!("use_finance_store must be called from within a FinanceStoreProvider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "must be called from within a FinanceStoreProvider")]
    fn reading_the_store_outside_the_provider_panics() {
        require_store(None);
    }
}
