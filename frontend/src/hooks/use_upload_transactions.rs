use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use shared::UploadSummary;

use crate::services::Logger;
use crate::store::use_finance_store;

pub const UPLOAD_FALLBACK_ERROR: &str = "Failed to upload transactions.";

#[derive(Clone, PartialEq)]
pub struct UploadState {
    pub uploading: bool,
    pub summary: Option<UploadSummary>,
    pub error: Option<String>,
}

pub struct UseUploadTransactionsResult {
    pub state: UploadState,
    pub actions: UseUploadTransactionsActions,
}

#[derive(Clone)]
pub struct UseUploadTransactionsActions {
    pub upload: Callback<File>,
    pub start_over: Callback<()>,
}

/// Upload flow for the CSV ingestion endpoint. A successful upload
/// invalidates the store's analytics caches so the dashboard and forecast
/// re-hydrate against the new dataset; the confirmation summary sticks
/// around until the user navigates away or starts over.
#[hook]
pub fn use_upload_transactions() -> UseUploadTransactionsResult {
    let store = use_finance_store();
    let uploading = use_state(|| false);
    let summary = use_state(|| Option::<UploadSummary>::None);
    let error = use_state(|| Option::<String>::None);

    let upload = {
        let store = store.clone();
        let uploading = uploading.clone();
        let summary = summary.clone();
        let error = error.clone();

        use_callback((), move |file: File, _| {
            let store = store.clone();
            let uploading = uploading.clone();
            let summary = summary.clone();
            let error = error.clone();

            spawn_local(async move {
                uploading.set(true);
                error.set(None);

                match store
                    .client()
                    .upload_transactions(store.identity(), file)
                    .await
                {
                    Ok(result) => {
                        Logger::info_with_component(
                            "upload",
                            &format!("ingested {} rows", result.rows_ingested),
                        );
                        summary.set(Some(result));
                        store.invalidate_analytics();
                    }
                    Err(e) => {
                        Logger::error_with_component("upload", &format!("upload failed: {}", e));
                        error.set(Some(e.user_message(UPLOAD_FALLBACK_ERROR)));
                    }
                }

                uploading.set(false);
            });
        })
    };

    let start_over = {
        let store = store.clone();
        let uploading = uploading.clone();
        let summary = summary.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            uploading.set(false);
            summary.set(None);
            error.set(None);
            store.reset();
        })
    };

    UseUploadTransactionsResult {
        state: UploadState {
            uploading: *uploading,
            summary: (*summary).clone(),
            error: (*error).clone(),
        },
        actions: UseUploadTransactionsActions { upload, start_over },
    }
}
