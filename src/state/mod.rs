pub mod app_state;
pub mod focus;
pub mod header_table;
pub mod mode;
pub mod request_state;
pub mod response_state;
pub mod text_field;
