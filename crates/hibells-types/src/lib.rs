pub mod message;
pub mod event;
pub mod resource;
pub mod tab;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod keys;


pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
