//! 判定結果の表示

use crate::components::progress_bar::ProgressBar;
use cotton_common::ResultView;
use leptos::prelude::*;

#[component]
pub fn ResultPanel(result: ResultView) -> impl IntoView {
    let color = result.severity.css_class();
    let (tone, icon) = match (result.known, result.is_diseased) {
        (false, _) => ("unknown", "❔"),
        (true, true) => ("diseased", "⚠️"),
        (true, false) => ("healthy", "🌿"),
    };
    let title = result.title().to_string();
    let percent_text = result.confidence_percent_text.clone();
    let chip_text = format!("{} Confidence", percent_text);
    let percent = result.confidence_percent;
    let description = result.description;
    let care = result.care;

    view! {
        <div class="results">
            <div class=format!("card result-card {}", tone)>
                <div class="result-summary">
                    <div class="result-icon">{icon}</div>
                    <div>
                        <p class="text-muted">"Analysis Result"</p>
                        <h3 class="result-label">{title}</h3>
                    </div>
                </div>
                <span class=format!("chip chip-{}", color)>{chip_text}</span>
            </div>

            <div class="card">
                <div class="confidence-header">
                    <span>"Confidence Level"</span>
                    <span>{percent_text}</span>
                </div>
                <ProgressBar percent=percent color=color label="Classification Confidence" />
            </div>

            <div class="card">
                <h4>"🍃 Condition Details"</h4>
                <p>{description}</p>
            </div>

            <div class="card">
                <h4>"💧 Recommended Actions"</h4>
                <div class="care-box">
                    <p>{care}</p>
                </div>
            </div>
        </div>
    }
}
