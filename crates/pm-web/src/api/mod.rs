mod http;

pub use http::{get_json, get_text};
