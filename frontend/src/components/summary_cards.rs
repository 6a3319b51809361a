use yew::prelude::*;

use crate::services::format::format_whole_dollars;
use crate::store::selectors::CashflowSummary;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: CashflowSummary,
}

/// The four dashboard headline cards. Buffer and savings rate carry their
/// sign/threshold coloring; averages are plain.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let summary = &props.summary;

    let buffer_class = if summary.net_buffer >= 0.0 {
        "card-value value-positive"
    } else {
        "card-value value-negative"
    };
    let buffer_text = if summary.net_buffer >= 0.0 {
        format!("+${}", format_whole_dollars(summary.net_buffer))
    } else {
        format!("-${}", format_whole_dollars(summary.net_buffer))
    };

    html! {
        <div class="summary-grid">
            <div class="summary-card">
                <span class="card-label">{"Avg Monthly Income"}</span>
                <span class="card-value">
                    {format!("${}", format_whole_dollars(summary.avg_income))}
                </span>
            </div>
            <div class="summary-card">
                <span class="card-label">{"Avg Monthly Expense"}</span>
                <span class="card-value">
                    {format!("${}", format_whole_dollars(summary.avg_expense))}
                </span>
            </div>
            <div class="summary-card">
                <span class="card-label">{"Net Monthly Buffer"}</span>
                <span class={buffer_class}>{buffer_text}</span>
            </div>
            <div class="summary-card">
                <span class="card-label">{"Savings Rate"}</span>
                <span class={classes!("card-value", savings_rate_class(summary.savings_rate))}>
                    {format!("{:.1}%", summary.savings_rate)}
                </span>
            </div>
        </div>
    }
}

fn savings_rate_class(rate: f64) -> &'static str {
    if rate >= 20.0 {
        "value-positive"
    } else if rate > 0.0 {
        "value-warning"
    } else {
        "value-negative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_rate_thresholds_match_the_card_coloring() {
        assert_eq!(savings_rate_class(25.0), "value-positive");
        assert_eq!(savings_rate_class(20.0), "value-positive");
        assert_eq!(savings_rate_class(10.0), "value-warning");
        assert_eq!(savings_rate_class(0.0), "value-negative");
        assert_eq!(savings_rate_class(-5.0), "value-negative");
    }
}
