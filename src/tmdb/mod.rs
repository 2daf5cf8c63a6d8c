pub mod client;
pub mod endpoints;
pub mod handlers;
pub mod types;

pub use client::*;
pub use endpoints::{Endpoint, Shape, ENDPOINTS};
pub use handlers::*;
pub use types::*;
