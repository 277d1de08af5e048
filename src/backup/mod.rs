pub mod archive;
pub mod logger;
pub mod result_error;
pub mod runner;
pub mod settings;
pub mod validate;
