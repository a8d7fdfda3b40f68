pub mod page;

pub use page::{escape_html, render_page, PageView};
