pub mod circuit;
pub mod ghost;
pub mod projects;
