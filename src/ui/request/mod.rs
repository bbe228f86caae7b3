pub mod body_editor;
pub mod headers_editor;
pub mod tab_bar;
pub mod url_bar;
