//! ブラウザの `File` をワークフローに渡すためのラッパー

use cotton_common::{FileLike, PreviewError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

#[derive(Clone, Debug)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl FileLike for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// FileReaderでData URIを読み込む
///
/// `on_done` は成功・失敗のどちらかで1回だけ呼ばれる。
pub fn read_as_data_url<F>(file: &File, on_done: F)
where
    F: FnOnce(Result<String, PreviewError>) + 'static,
{
    let callback = Rc::new(RefCell::new(Some(on_done)));
    let finish = {
        let callback = callback.clone();
        move |result: Result<String, PreviewError>| {
            let on_done = callback.borrow_mut().take();
            if let Some(on_done) = on_done {
                on_done(result);
            }
        }
    };
    let finish = Rc::new(finish);

    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            finish(Err(PreviewError(format!("{:?}", e))));
            return;
        }
    };

    let reader_clone = reader.clone();
    let finish_load = finish.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let result = reader_clone
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| PreviewError("FileReader returned no data".to_string()));
        finish_load(result);
    }) as Box<dyn FnMut(_)>);

    let finish_error = finish.clone();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        finish_error(Err(PreviewError("FileReader failed to read the file".to_string())));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        finish(Err(PreviewError(format!("{:?}", e))));
    }
}
