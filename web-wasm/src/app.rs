//! メインアプリケーションコンポーネント

use crate::api::predict::FetchClient;
use crate::browser_file::{read_as_data_url, BrowserFile};
use crate::components::{
    analyze_button::AnalyzeButton,
    header::Header,
    progress_bar::ProgressBar,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use cotton_common::{render, PredictionClient, UploadWorkflow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[component]
pub fn App() -> impl IntoView {
    // web_sys::File は Send ではないのでローカルシグナル
    let workflow = RwSignal::new_local(UploadWorkflow::<BrowserFile>::new());

    let loading = Signal::derive(move || workflow.with(|wf| wf.state().loading));
    let can_submit = Signal::derive(move || workflow.with(|wf| wf.can_submit()));

    // ファイル選択ハンドラ
    let on_file_selected = move |file: Option<File>| {
        let Some(file) = file else {
            workflow.update(|wf| wf.clear_feedback());
            return;
        };

        let selected = workflow.try_update(|wf| wf.select_file(BrowserFile::new(file.clone())));
        if let Some(Ok(ticket)) = selected {
            read_as_data_url(&file, move |result| {
                if let Err(e) = &result {
                    gloo::console::error!(format!("Error: {}", e));
                }
                let _ = workflow.try_update(|wf| wf.finish_preview(ticket, result));
            });
        }
    };

    // 解析ハンドラ（送信中は begin_submit が拒否する）
    let on_analyze = move |_| {
        let Some(Ok(ticket)) = workflow.try_update(|wf| wf.begin_submit()) else {
            return;
        };

        spawn_local(async move {
            let client = FetchClient::from_config();
            let outcome = client.predict(&ticket.file).await;
            let _ = workflow.try_update(|wf| wf.finish_submit(ticket.id, outcome));
        });
    };

    let preview = move || workflow.with(|wf| wf.state().preview_data_uri.clone());
    let error = move || workflow.with(|wf| wf.state().error.clone());
    let result = move || workflow.with(|wf| wf.state().prediction.as_ref().map(render));

    view! {
        <main class="container">
            <div class="card">
                <Header />

                <UploadArea on_file_selected=on_file_selected />

                {move || preview().map(|src| view! {
                    <img src=src alt="Preview" class="preview-image" />
                })}

                {move || error().map(|message| view! {
                    <p class="text-danger">{message}</p>
                })}

                <AnalyzeButton can_submit=can_submit loading=loading on_analyze=on_analyze />

                <Show when=move || loading.get()>
                    <ProgressBar />
                </Show>

                {move || result().map(|result| view! { <ResultPanel result=result /> })}
            </div>
        </main>
    }
}
