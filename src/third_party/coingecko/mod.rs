pub mod api_path;
