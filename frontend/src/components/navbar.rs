use yew::prelude::*;

use crate::pages::Page;
use crate::store::{use_finance_store, AppState};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

const LINKS: [(Page, &str); 4] = [
    (Page::Upload, "Upload"),
    (Page::Dashboard, "Dashboard"),
    (Page::Forecast, "Forecast"),
    (Page::Simulate, "Scenarios"),
];

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let store = use_finance_store();
    let status = status_label(store.state().app_state);

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <span class="navbar-brand">{"Pocket CFO"}</span>
                <div class="navbar-links">
                    {for LINKS.iter().map(|(page, label)| {
                        let is_active = *page == props.active;
                        let on_navigate = props.on_navigate.clone();
                        let target = *page;
                        let onclick = Callback::from(move |_| on_navigate.emit(target));

                        html! {
                            <button
                                class={classes!("nav-link", is_active.then_some("nav-link-active"))}
                                {onclick}
                            >
                                {*label}
                            </button>
                        }
                    })}
                </div>
                <span class="navbar-status">{status}</span>
            </div>
        </nav>
    }
}

fn status_label(state: AppState) -> &'static str {
    match state {
        AppState::Empty => "No data loaded",
        AppState::Analyzed => "Data uploaded",
        AppState::Uploaded => "Cashflow ready",
        AppState::ForecastReady => "Forecast ready",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_state_has_a_status_label() {
        assert_eq!(status_label(AppState::Empty), "No data loaded");
        assert_eq!(status_label(AppState::Analyzed), "Data uploaded");
        assert_eq!(status_label(AppState::Uploaded), "Cashflow ready");
        assert_eq!(status_label(AppState::ForecastReady), "Forecast ready");
    }
}
