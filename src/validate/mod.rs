pub mod email;
pub mod phone;
pub mod url;
