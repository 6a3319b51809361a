use yew::prelude::*;

use crate::components::charts::ForecastChart;
use crate::pages::Page;
use crate::store::use_finance_store;

#[derive(Properties, PartialEq)]
pub struct ForecastPageProps {
    pub on_navigate: Callback<Page>,
}

/// Projection view: forecast chart on the left, confidence and reading-guide
/// cards on the right once data is in.
#[function_component(ForecastPage)]
pub fn forecast_page(props: &ForecastPageProps) -> Html {
    let store = use_finance_store();

    {
        let store = store.clone();
        let cache_empty = store.state().forecast.is_empty();
        use_effect_with(cache_empty, move |cache_empty| {
            if *cache_empty {
                store.fetch_forecast_data();
            }
        });
    }

    let state = store.state();
    let show_loading = state.is_loading;
    let show_content = !state.forecast.is_empty();
    let coverage_note = if state.forecast.len() > 3 {
        "sufficient"
    } else {
        "limited"
    };

    let go_upload = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Upload))
    };

    html! {
        <main class="page forecast-page">
            <header class="page-header">
                <div>
                    <h2>{"Cashflow Forecast"}</h2>
                    <p class="page-lead">{"Probabilistic projection of your future finances."}</p>
                </div>
            </header>

            {if let Some(error) = &state.error {
                html! { <div class="error-banner">{error.clone()}</div> }
            } else {
                html! {}
            }}

            <div class="forecast-layout">
                <section class="forecast-main">
                    {if show_loading {
                        html! {
                            <div class="panel loading-panel">
                                <div class="loading-spinner"></div>
                                <p>{"Generating forecast..."}</p>
                            </div>
                        }
                    } else if show_content {
                        html! { <ForecastChart data={state.forecast.clone()} /> }
                    } else {
                        html! {
                            <div class="panel empty-card">
                                <h3>{"No Forecast Data"}</h3>
                                <p>{"Upload your transaction history to see a projection \
                                    of your future finances."}</p>
                                <button class="btn btn-primary" onclick={go_upload}>
                                    {"Upload Transactions"}
                                </button>
                            </div>
                        }
                    }}
                </section>

                {if show_content {
                    html! {
                        <aside class="forecast-side">
                            <div class="panel confidence-card">
                                <h4>{"Model Confidence"}</h4>
                                <div class="confidence-headline">{"85%"}</div>
                                <div class="confidence-track">
                                    <div class="confidence-fill" style="width: 85%"></div>
                                </div>
                                <p class="confidence-note">{format!(
                                    "Based on {coverage_note} historical data. Confidence \
                                     may decrease for months further out."
                                )}</p>
                            </div>

                            <div class="panel guide-card">
                                <h4>{"Understanding This Chart"}</h4>
                                <div class="guide-item">
                                    <span class="guide-swatch guide-swatch-line"></span>
                                    <div>
                                        <strong>{"Blue Line"}</strong>
                                        <p>{"Your most likely future balance based on spending patterns."}</p>
                                    </div>
                                </div>
                                <div class="guide-item">
                                    <span class="guide-swatch guide-swatch-band"></span>
                                    <div>
                                        <strong>{"Shaded Area"}</strong>
                                        <p>{"Range of possible outcomes (think of it as \
                                            \"best case\" to \"worst case\")."}</p>
                                    </div>
                                </div>
                                <p class="guide-tip">
                                    <strong>{"Tip:"}</strong>
                                    {" A wider band means more uncertainty. Keep tracking \
                                      your expenses to improve accuracy!"}
                                </p>
                            </div>
                        </aside>
                    }
                } else {
                    html! {}
                }}
            </div>
        </main>
    }
}
