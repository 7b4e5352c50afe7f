use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlInputElement};

use super::dom;
use crate::format;

type Formatter = fn(&str) -> Option<String>;

/// Attach the price, phone and bank-card masks.
pub fn init(document: &Document) -> Result<(), JsValue> {
    bind(document, r#"input[data-type="price"]"#, "blur", format::format_price)?;
    bind(document, r#"input[type="tel"], input[name="phone"]"#, "input", format::format_phone)?;
    bind(document, r#"input[name="bank_card"]"#, "input", |raw| Some(format::format_card(raw)))?;
    Ok(())
}

fn bind(document: &Document, selector: &str, event: &str, formatter: Formatter) -> Result<(), JsValue> {
    for input in dom::query_all::<HtmlInputElement>(document, selector)? {
        let target = input.clone();
        dom::on(&input, event, move |_| {
            let raw = target.value();
            // Only write when the value changes, so the caret stays put
            if let Some(formatted) = formatter(&raw).filter(|formatted| *formatted != raw) {
                target.set_value(&formatted);
            }
        })?;
    }
    Ok(())
}
