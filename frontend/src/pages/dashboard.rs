use yew::prelude::*;

use crate::components::charts::CashflowChart;
use crate::components::{DateRangeSelector, SummaryCards};
use crate::pages::Page;
use crate::services::date_utils::format_month_short;
use crate::store::selectors::{filter_by_range, CashflowSummary};
use crate::store::use_finance_store;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub on_navigate: Callback<Page>,
}

/// Monthly income/expense overview with summary cards and the history chart.
///
/// Hydrates the cashflow cache on first mount; revisits reuse whatever the
/// store already holds.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let store = use_finance_store();

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
    let filtered = filter_by_range(&state.monthly_cashflow, &state.date_range);
    let summary = CashflowSummary::from_series(&filtered);

    let coverage = match (&state.available_months.min, &state.available_months.max) {
        (Some(min), Some(max)) => Some(format!(
            "Data coverage: {} to {}",
            format_month_short(min),
            format_month_short(max)
        )),
        _ => None,
    };

    let go_upload = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Upload))
    };

    html! {
        <main class="page dashboard-page">
            <header class="page-header">
                <h2>{"Dashboard"}</h2>
                <DateRangeSelector />
            </header>

            {if let Some(error) = &state.error {
                html! { <div class="error-banner">{error.clone()}</div> }
            } else {
                html! {}
            }}

            {if !state.has_uploaded_data {
                html! {
                    <div class="panel empty-card">
                        <h3>{"Financial Overview Missing"}</h3>
                        <p>{"We need your transaction history to analyze your income, \
                            expenses, and savings rate."}</p>
                        <button class="btn btn-outline" onclick={go_upload}>
                            {"Upload Transactions"}
                        </button>
                    </div>
                }
            } else if let Some(summary) = summary {
                html! { <SummaryCards {summary} /> }
            } else {
                html! {}
            }}

            <section class="panel chart-widget">
                <div class="panel-header">
                    <div>
                        <h3>{"Cashflow History"}</h3>
                        <p class="panel-subtitle">{"Income vs Expenses over time"}</p>
                    </div>
                    {if let Some(coverage) = coverage {
                        html! { <span class="coverage-note">{coverage}</span> }
                    } else {
                        html! {}
                    }}
                </div>

                {if state.is_loading {
                    html! {
                        <div class="chart-skeleton">
                            <div class="skeleton-block"></div>
                        </div>
                    }
                } else if filtered.is_empty() {
                    html! {
                        <p class="chart-empty-note">
                            {"No cashflow recorded for the selected period."}
                        </p>
                    }
                } else {
                    html! { <CashflowChart data={filtered.clone()} /> }
                }}
            </section>
        </main>
    }
}
