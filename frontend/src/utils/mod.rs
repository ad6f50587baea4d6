pub mod api;
pub mod controller;
pub mod navigator;
pub mod router;
pub mod search;
pub mod server;
