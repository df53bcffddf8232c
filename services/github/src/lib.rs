pub mod config;
pub mod error;
pub mod handlers;
pub mod mode;
pub mod release;
pub mod router;
pub mod state;
