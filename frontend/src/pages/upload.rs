use yew::prelude::*;

use crate::components::CsvUpload;
use crate::hooks::use_upload_transactions;
use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct UploadPageProps {
    pub on_navigate: Callback<Page>,
}

/// Landing page: CSV import plus a short privacy note.
#[function_component(UploadPage)]
pub fn upload_page(props: &UploadPageProps) -> Html {
    let upload = use_upload_transactions();

    let on_go_to_dashboard = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Dashboard))
    };

    html! {
        <main class="page upload-page">
            <header class="page-intro">
                <h1>{"Import Your Financial Data"}</h1>
                <p class="page-lead">
                    {"Upload your transaction history to unlock financial insights, \
                      cashflow forecasting, and scenario analysis."}
                </p>
            </header>

            <CsvUpload
                uploading={upload.state.uploading}
                summary={upload.state.summary.clone()}
                error={upload.state.error.clone()}
                on_file_selected={upload.actions.upload.clone()}
                {on_go_to_dashboard}
                on_start_over={upload.actions.start_over.clone()}
            />

            <aside class="info-card">
                <h4>{"Privacy & Security"}</h4>
                <p>
                    {"Your data is processed locally and never shared with third parties. \
                      We only use the Description, Date, and Amount fields to generate insights."}
                </p>
            </aside>
        </main>
    }
}
