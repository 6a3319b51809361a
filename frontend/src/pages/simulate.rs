use yew::prelude::*;

use crate::components::{SimulationForm, SimulationResultCard};
use crate::hooks::use_simulation;
use crate::pages::Page;
use crate::services::format::signed_dollars;
use crate::store::selectors::CashflowSummary;
use crate::store::{use_finance_store, AppState};

#[derive(Properties, PartialEq)]
pub struct SimulatePageProps {
    pub on_navigate: Callback<Page>,
}

/// What-if page: decision form on the left, projected outcome on the right.
#[function_component(SimulatePage)]
pub fn simulate_page(props: &SimulatePageProps) -> Html {
    let store = use_finance_store();
    let simulation = use_simulation();

    {
        let store = store.clone();
        let cache_empty = store.state().monthly_cashflow.is_empty();
        use_effect_with(cache_empty, move |cache_empty| {
            if *cache_empty {
                store.fetch_monthly_cashflow();
            }
        });
    }

    let state = store.state();
    let data_missing = state.app_state == AppState::Empty;
    // Buffer context uses the full series; the dashboard date filter does not
    // apply here.
    let context = CashflowSummary::from_series(&state.monthly_cashflow);

    let go_upload = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Upload))
    };

    html! {
        <main class="page simulate-page">
            <header class="page-intro">
                <h1>{"Decision Simulator"}</h1>
                <p class="page-lead">
                    {"Test financial decisions before you make them. See how big purchases \
                      affect your future runway and financial health."}
                </p>
            </header>

            <div class="simulate-layout">
                <aside class="simulate-side">
                    {if data_missing {
                        html! {
                            <div class="panel notice-card">
                                <h4>{"Data Recommended"}</h4>
                                <p>{"Simulations are more accurate with your transaction history."}</p>
                                <button class="btn btn-outline" onclick={go_upload}>
                                    {"Upload Data"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <SimulationForm
                        running={simulation.state.running}
                        on_submit={simulation.actions.run.clone()}
                    />

                    {if let Some(error) = simulation.state.error.clone() {
                        html! { <p class="form-error">{error}</p> }
                    } else {
                        html! {}
                    }}
                </aside>

                <section class="simulate-main">
                    {if let Some(outcome) = simulation.state.outcome.clone() {
                        html! {
                            <SimulationResultCard
                                {outcome}
                                just_completed={simulation.state.just_completed}
                            />
                        }
                    } else {
                        html! {
                            <div class="panel placeholder-card">
                                <h3>{"Ready to Analyze"}</h3>
                                {if let Some(context) = &context {
                                    html! {
                                        <p>
                                            {"Based on your average monthly buffer of "}
                                            <strong class="value-positive">
                                                {signed_dollars(context.net_buffer)}
                                            </strong>
                                            {", see how a new expense fits in."}
                                        </p>
                                    }
                                } else {
                                    html! {
                                        <p>{"Enter decision details on the left to generate \
                                            a projection."}</p>
                                    }
                                }}
                            </div>
                        }
                    }}
                </section>
            </div>
        </main>
    }
}
