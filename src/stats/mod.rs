pub mod parse;
pub mod schema;
pub mod store;
