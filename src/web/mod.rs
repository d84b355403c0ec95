pub mod contact;
pub mod cors;
pub mod fallback;
pub mod rate_limit;
pub mod router;
pub mod site;
