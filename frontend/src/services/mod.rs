pub mod api;
pub mod confirm;
pub mod date_utils;
pub mod gateway;
pub mod logging;
pub mod refresh;
