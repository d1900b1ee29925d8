mod markdown;
mod pages;

pub use markdown::render_markdown;
pub use pages::{ErrorPage, IndexPage, ModelOption, PAGE_TITLE, ResultPage, render_page};
