//! プログレスバーコンポーネント
//!
//! `percent` 省略時は処理中の不定表示

use leptos::prelude::*;

#[component]
pub fn ProgressBar(
    #[prop(optional)] percent: Option<f64>,
    #[prop(default = "primary")] color: &'static str,
    #[prop(default = "Loading...")] label: &'static str,
) -> impl IntoView {
    let (fill_class, style) = fill_attrs(percent, color);

    view! {
        <div class="progress-bar" role="progressbar" aria-label=label>
            <div class=fill_class style=style />
        </div>
    }
}

/// 塗りつぶし部分の (class, style)
fn fill_attrs(percent: Option<f64>, color: &str) -> (String, String) {
    match percent {
        Some(p) => (
            format!("progress-fill progress-{}", color),
            format!("width: {}%", p.clamp(0.0, 100.0)),
        ),
        None => (
            format!("progress-fill indeterminate progress-{}", color),
            String::new(),
        ),
    }
}
