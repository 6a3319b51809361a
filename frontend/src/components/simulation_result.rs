use yew::prelude::*;

use shared::{Recommendation, SimulationOutcome};

use crate::services::format::signed_dollars;

#[derive(Properties, PartialEq)]
pub struct SimulationResultCardProps {
    pub outcome: SimulationOutcome,
    /// Briefly true right after a run finishes; shows the confirmation note.
    pub just_completed: bool,
}

#[function_component(SimulationResultCard)]
pub fn simulation_result_card(props: &SimulationResultCardProps) -> Html {
    let outcome = &props.outcome;
    let impact = &outcome.projected_impact;

    html! {
        <div class="panel result-card">
            {if props.just_completed {
                html! { <div class="result-toast">{"Simulation complete"}</div> }
            } else { html! {} }}

            <div class="result-header">
                <h3>{"Analysis Result"}</h3>
                <span class={classes!("badge", badge_class(outcome.recommendation))}>
                    {outcome.recommendation.label()}
                </span>
            </div>

            <div class="confidence">
                <div class="confidence-labels">
                    <span>{"Confidence (based on available data)"}</span>
                    <span>{format!("{}%", outcome.confidence)}</span>
                </div>
                <div class="confidence-track">
                    <div
                        class="confidence-fill"
                        style={format!("width: {}%", outcome.confidence.min(100))}
                    ></div>
                </div>
            </div>

            <div class="assessment">
                <h4>{"Assessment"}</h4>
                <p>{&outcome.explanation}</p>
            </div>

            <div class="impact">
                <h4>{"Projected Impact"}</h4>
                <div class="impact-grid">
                    <div class="impact-cell">
                        <span class="impact-label">{"Lowest Projected Balance"}</span>
                        <span class="impact-value">{signed_dollars(impact.lowest_balance)}</span>
                    </div>
                    <div class="impact-cell">
                        <span class="impact-label">{"Months Affected"}</span>
                        <span class="impact-value">{impact.months_affected}</span>
                    </div>
                    <div class="impact-cell">
                        <span class="impact-label">{"Total Estimated Cost"}</span>
                        <span class="impact-value">{signed_dollars(impact.total_cost)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn badge_class(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Safe => "badge-safe",
        Recommendation::Caution => "badge-caution",
        Recommendation::Avoid => "badge-avoid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_recommendation_has_a_badge_class() {
        assert_eq!(badge_class(Recommendation::Safe), "badge-safe");
        assert_eq!(badge_class(Recommendation::Caution), "badge-caution");
        assert_eq!(badge_class(Recommendation::Avoid), "badge-avoid");
    }
}
