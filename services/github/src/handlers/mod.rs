pub mod download;
pub mod release;
