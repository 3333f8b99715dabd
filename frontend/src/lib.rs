pub mod behavior;
pub mod config;
pub mod dom;
pub mod error;
pub mod pages;

pub use pages::landing::Landing;
