//! REST API layer

pub mod dto;
pub mod encoder;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
