mod components;
mod hooks;
mod pages;
mod services;
mod store;

use yew::prelude::*;

use components::Navbar;
use pages::{DashboardPage, ForecastPage, Page, SimulatePage, UploadPage};
use store::FinanceStoreProvider;

/// Navbar plus whichever page is active. Navigation is plain component state;
/// the app is a single document with no router.
#[function_component(AppShell)]
fn app_shell() -> Html {
    let page = use_state(|| Page::Upload);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    html! {
        <>
            <Navbar active={*page} on_navigate={on_navigate.clone()} />
            {match *page {
                Page::Upload => html! { <UploadPage on_navigate={on_navigate.clone()} /> },
                Page::Dashboard => html! { <DashboardPage on_navigate={on_navigate.clone()} /> },
                Page::Forecast => html! { <ForecastPage on_navigate={on_navigate.clone()} /> },
                Page::Simulate => html! { <SimulatePage on_navigate={on_navigate.clone()} /> },
            }}
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <FinanceStoreProvider>
            <AppShell />
        </FinanceStoreProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
