pub mod app;
pub mod env;
pub mod http;
pub mod site;
pub mod smtp;
