pub mod html;
pub mod uri;
