use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::DecisionType;

use crate::hooks::SimulationDraft;

#[derive(Properties, PartialEq)]
pub struct SimulationFormProps {
    pub running: bool,
    pub on_submit: Callback<SimulationDraft>,
}

/// Scenario input form. Holds its own draft state; validation happens here
/// so the hook only ever sees complete drafts.
#[function_component(SimulationForm)]
pub fn simulation_form(props: &SimulationFormProps) -> Html {
    let decision_type = use_state(|| DecisionType::OneTime);
    let amount = use_state(String::new);
    let description = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let pick_type = |target: DecisionType| {
        let decision_type = decision_type.clone();
        Callback::from(move |_| decision_type.set(target))
    };

    let onsubmit = {
        let decision_type = decision_type.clone();
        let amount = amount.clone();
        let description = description.clone();
        let form_error = form_error.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match parse_draft(*decision_type, &amount, &description) {
                Some(draft) => {
                    form_error.set(None);
                    on_submit.emit(draft);
                }
                None => {
                    form_error.set(Some("Please fill in all fields".to_string()));
                }
            }
        })
    };

    let type_button_class = |target: DecisionType| {
        if *decision_type == target {
            "btn btn-toggle btn-toggle-active"
        } else {
            "btn btn-toggle"
        }
    };

    html! {
        <div class="panel simulation-form">
            <div class="panel-header">
                <h3>{"Scenario Analysis"}</h3>
                <p>{"Analyze how a purchase impacts your long-term financial health."}</p>
            </div>

            <form {onsubmit}>
                <div class="form-group">
                    <label>{"Expense Type"}</label>
                    <div class="toggle-row">
                        <button
                            type="button"
                            class={type_button_class(DecisionType::OneTime)}
                            onclick={pick_type(DecisionType::OneTime)}
                        >
                            {"One-Time"}
                        </button>
                        <button
                            type="button"
                            class={type_button_class(DecisionType::Recurring)}
                            onclick={pick_type(DecisionType::Recurring)}
                        >
                            {"Recurring"}
                        </button>
                    </div>
                </div>

                <div class="form-group">
                    <label for="sim-amount">{"Amount ($)"}</label>
                    <input
                        id="sim-amount"
                        type="number"
                        placeholder="5000"
                        min="0"
                        value={(*amount).clone()}
                        onchange={on_amount_change}
                        disabled={props.running}
                    />
                </div>

                <div class="form-group">
                    <label for="sim-description">{"Description"}</label>
                    <input
                        id="sim-description"
                        type="text"
                        placeholder="e.g., Annual Vacation, Gym Membership"
                        value={(*description).clone()}
                        onchange={on_description_change}
                        disabled={props.running}
                    />
                </div>

                {if let Some(error) = (*form_error).clone() {
                    html! { <p class="form-error">{error}</p> }
                } else { html! {} }}

                <button type="submit" class="btn btn-primary btn-block" disabled={props.running}>
                    {if props.running { "Analyzing..." } else { "Analyze Impact" }}
                </button>
            </form>
        </div>
    }
}

/// None when either field is missing or the amount does not parse.
fn parse_draft(
    decision_type: DecisionType,
    amount: &str,
    description: &str,
) -> Option<SimulationDraft> {
    let amount = amount.trim();
    let description = description.trim();
    if amount.is_empty() || description.is_empty() {
        return None;
    }
    let amount = amount.parse::<f64>().ok()?;

    Some(SimulationDraft {
        decision_type,
        amount,
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_inputs_produce_a_draft() {
        let draft = parse_draft(DecisionType::Recurring, "49.99", "Gym Membership").unwrap();
        assert_eq!(draft.decision_type, DecisionType::Recurring);
        assert_eq!(draft.amount, 49.99);
        assert_eq!(draft.description, "Gym Membership");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(parse_draft(DecisionType::OneTime, "", "Vacation").is_none());
        assert!(parse_draft(DecisionType::OneTime, "5000", "").is_none());
        assert!(parse_draft(DecisionType::OneTime, "  ", "  ").is_none());
    }

    #[test]
    fn unparseable_amounts_are_rejected() {
        assert!(parse_draft(DecisionType::OneTime, "lots", "Vacation").is_none());
    }
}
