//! ヘッダーコンポーネント

use cotton_common::disease_info::known_labels;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let labels = known_labels().collect::<Vec<_>>().join(", ");

    view! {
        <header class="header">
            <h1>"Cotton Disease " <span class="accent">"Classifier"</span></h1>
            <p class="text-muted">"Upload an image to check the health status of your cotton plant."</p>
        </header>
        <div class="info-banner">
            <span>"ℹ"</span>
            <p class="text-muted">{format!("Model can identify: {}.", labels)}</p>
        </div>
    }
}
