pub mod context;
pub mod dto;
pub mod errors;
pub mod ports;
pub mod query;
pub mod use_cases;
