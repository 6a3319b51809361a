use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{DecisionType, SimulationOutcome, SimulationRequest};

use crate::services::{date_utils, Logger};
use crate::store::use_finance_store;

pub const SIMULATION_FALLBACK_ERROR: &str = "Simulation failed";

/// What the form collects; the hook fills in the session identity and the
/// start date before sending.
#[derive(Clone, PartialEq)]
pub struct SimulationDraft {
    pub decision_type: DecisionType,
    pub amount: f64,
    pub description: String,
}

#[derive(Clone, PartialEq)]
pub struct SimulationState {
    pub running: bool,
    pub outcome: Option<SimulationOutcome>,
    pub error: Option<String>,
    /// Transient confirmation flag, auto-cleared after three seconds.
    pub just_completed: bool,
}

pub struct UseSimulationResult {
    pub state: SimulationState,
    pub actions: UseSimulationActions,
}

#[derive(Clone)]
pub struct UseSimulationActions {
    pub run: Callback<SimulationDraft>,
}

/// What-if simulation flow. Outcomes are page-local on purpose: a scenario
/// is an exploration, not session data, so navigating away discards it.
#[hook]
pub fn use_simulation() -> UseSimulationResult {
    let store = use_finance_store();
    let running = use_state(|| false);
    let outcome = use_state(|| Option::<SimulationOutcome>::None);
    let error = use_state(|| Option::<String>::None);
    let just_completed = use_state(|| false);

    let run = {
        let store = store.clone();
        let running = running.clone();
        let outcome = outcome.clone();
        let error = error.clone();
        let just_completed = just_completed.clone();

        use_callback((), move |draft: SimulationDraft, _| {
            let store = store.clone();
            let running = running.clone();
            let outcome = outcome.clone();
            let error = error.clone();
            let just_completed = just_completed.clone();

            spawn_local(async move {
                running.set(true);
                error.set(None);

                let request = SimulationRequest {
                    user_id: store.identity().user_id,
                    decision_type: draft.decision_type,
                    amount: draft.amount,
                    description: draft.description,
                    start_date: date_utils::today_iso(),
                    duration_months: None,
                };

                match store.client().run_simulation(&request).await {
                    Ok(result) => {
                        outcome.set(Some(result));
                        just_completed.set(true);

                        let just_completed = just_completed.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(3000).await;
                            just_completed.set(false);
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "simulation",
                            &format!("simulation failed: {}", e),
                        );
                        error.set(Some(e.user_message(SIMULATION_FALLBACK_ERROR)));
                    }
                }

                running.set(false);
            });
        })
    };

    UseSimulationResult {
        state: SimulationState {
            running: *running,
            outcome: (*outcome).clone(),
            error: (*error).clone(),
            just_completed: *just_completed,
        },
        actions: UseSimulationActions { run },
    }
}
