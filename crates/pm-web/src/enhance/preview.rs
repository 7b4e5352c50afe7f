use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, FileReader, HtmlInputElement};

use super::dom;
use crate::logging;

const TAG: &str = "preview";
const SELECTOR: &str = r#"input[type="file"][accept*="image"]"#;

/// Show a selected image in the element named by the input's `data-preview` selector.
pub fn init(document: &Document) -> Result<(), JsValue> {
    for input in dom::query_all::<HtmlInputElement>(document, SELECTOR)? {
        let document = document.clone();
        let target = input.clone();
        dom::on(&input, "change", move |_| {
            if let Err(e) = show_preview(&document, &target) {
                logging::error(TAG, "failed to preview image", &e);
            }
        })?;
    }
    Ok(())
}

fn show_preview(document: &Document, input: &HtmlInputElement) -> Result<(), JsValue> {
    let Some(selector) = dom::data_attr(input, "preview") else {
        return Ok(());
    };
    let Some(preview) = document.query_selector(&selector)? else {
        return Ok(());
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };

    let reader = FileReader::new()?;
    let loaded = reader.clone();
    let onload = Closure::once_into_js(move || match loaded.result() {
        Ok(result) => {
            if let Some(data_url) = result.as_string() {
                if let Err(e) = preview.set_attribute("src", &data_url) {
                    logging::error(TAG, "failed to set preview source", &e);
                }
            }
        }
        Err(e) => logging::error(TAG, "failed to read file", &e),
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(&file)
}
