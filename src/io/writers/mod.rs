pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
