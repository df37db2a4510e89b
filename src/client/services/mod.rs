pub mod analysis_service;
pub mod article_file;
