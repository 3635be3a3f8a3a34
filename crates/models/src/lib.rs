//! Catalog entities (`workers`, `services`), their validation rules and the
//! pool helpers shared by the store and the server.

pub mod errors;
pub mod db;
pub mod worker;
pub mod service;

#[cfg(test)]
mod tests;
