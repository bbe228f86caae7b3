pub mod env_placeholder;
pub mod layout;
pub mod request;
pub mod response;
pub mod status_bar;
