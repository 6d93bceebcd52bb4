//! 画像選択エリア（クリックまたはドラッグ&ドロップ、1枚のみ）

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |_| {
            let Some(input) = input_ref.get() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            // 同じファイルを選び直してもchangeが発火するようにする
            input.set_value("");
            on_file_selected(file);
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if file.is_some() {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                id="imageUpload"
                on:change=on_change
            />
            <button class="btn btn-primary" on:click=open_picker>
                "Select Image"
            </button>
            <p class="text-muted">"or drop an image here"</p>
        </div>
    }
}
