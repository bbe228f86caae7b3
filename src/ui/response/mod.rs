pub mod body_viewer;
