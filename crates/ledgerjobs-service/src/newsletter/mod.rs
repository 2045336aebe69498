//! Newsletter subscription proxy.

pub mod service;

pub use service::NewsletterService;
