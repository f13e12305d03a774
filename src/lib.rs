pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod nlp;
pub mod processor;
