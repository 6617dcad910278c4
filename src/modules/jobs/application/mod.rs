pub mod service;

pub use service::JobsService;
