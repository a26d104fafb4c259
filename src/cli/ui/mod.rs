pub mod formatting;
pub mod table_renderer;
