// src/services.rs

pub mod csv_import;

pub mod import_service;
pub use import_service::ImportService;

pub mod opportunity_service;
pub use opportunity_service::OpportunityService;

pub mod client_service;
pub use client_service::ClientService;

pub mod call_service;
pub use call_service::CallService;

pub mod task_service;
pub use task_service::TaskService;
