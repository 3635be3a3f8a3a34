//! Shared wire types and utilities used by both the HTTP server and the client.

pub mod types;
pub mod utils;

pub use types::{ErrorBody, Health, NewService, NewWorker, Service, Worker};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }
}
