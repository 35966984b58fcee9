// src/handlers.rs

pub mod calls;
pub mod clients;
pub mod import;
pub mod opportunities;
pub mod pipelines;
pub mod tasks;
