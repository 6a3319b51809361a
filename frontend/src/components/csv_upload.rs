use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use shared::UploadSummary;

#[derive(Properties, PartialEq)]
pub struct CsvUploadProps {
    pub uploading: bool,
    pub summary: Option<UploadSummary>,
    pub error: Option<String>,
    pub on_file_selected: Callback<File>,
    pub on_go_to_dashboard: Callback<()>,
    pub on_start_over: Callback<()>,
}

/// CSV file picker with inline progress, success and error states. The
/// upload itself lives in the hook; this component only validates that the
/// chosen file looks like a CSV before handing it over.
#[function_component(CsvUpload)]
pub fn csv_upload(props: &CsvUploadProps) -> Html {
    let validation_error = use_state(|| Option::<String>::None);

    let on_change = {
        let validation_error = validation_error.clone();
        let on_file_selected = props.on_file_selected.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|list| list.item(0));
            // Reset so picking the same file again still fires onchange.
            input.set_value("");

            if let Some(file) = file {
                if !is_csv_file(&file.name(), &file.type_()) {
                    validation_error.set(Some("Please upload a CSV file.".to_string()));
                    return;
                }
                validation_error.set(None);
                on_file_selected.emit(file);
            }
        })
    };

    let shown_error = (*validation_error)
        .clone()
        .or_else(|| props.error.clone());

    if let Some(summary) = &props.summary {
        let on_go = {
            let on_go_to_dashboard = props.on_go_to_dashboard.clone();
            Callback::from(move |_| on_go_to_dashboard.emit(()))
        };
        let on_restart = {
            let validation_error = validation_error.clone();
            let on_start_over = props.on_start_over.clone();
            Callback::from(move |_| {
                validation_error.set(None);
                on_start_over.emit(());
            })
        };

        return html! {
            <div class="upload-card">
                <div class="upload-success">
                    <div class="upload-success-icon">{"✓"}</div>
                    <h3>{"Upload Complete"}</h3>
                    <p>{"Your data is ready for analysis."}</p>
                    <p class="upload-rows">
                        {format!("{} rows ingested", summary.rows_ingested)}
                    </p>
                    <button class="btn btn-primary" onclick={on_go}>
                        {"Go to Dashboard"}
                    </button>
                    <button class="btn btn-ghost" onclick={on_restart}>
                        {"Upload another file"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="upload-card">
            <h3 class="upload-title">{"Upload Transactions"}</h3>
            <p class="upload-subtitle">{"Drag and drop your bank statement CSV here."}</p>

            <label class={classes!(
                "upload-dropzone",
                props.uploading.then_some("upload-dropzone-disabled"),
            )}>
                <input
                    type="file"
                    accept=".csv,text/csv"
                    onchange={on_change}
                    disabled={props.uploading}
                />
                <p class="upload-hint">{"Click to browse or drag file"}</p>
                <p class="upload-note">{"Supports CSV files up to 10MB"}</p>
            </label>

            {if props.uploading {
                html! {
                    <div class="upload-progress">
                        <div class="upload-progress-bar"></div>
                        <span>{"Uploading..."}</span>
                    </div>
                }
            } else { html! {} }}

            {if let Some(error) = shown_error {
                html! { <p class="upload-error">{error}</p> }
            } else { html! {} }}
        </div>
    }
}

fn is_csv_file(name: &str, mime: &str) -> bool {
    mime == "text/csv" || name.ends_with(".csv")
}
