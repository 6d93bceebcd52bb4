//! 解析ボタン

use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<F>(
    #[prop(into)] can_submit: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-success"
            disabled=move || !can_submit.get()
            on:click=move |_| on_analyze(())
        >
            {move || if loading.get() { "Processing..." } else { "Analyze Image" }}
        </button>
    }
}
