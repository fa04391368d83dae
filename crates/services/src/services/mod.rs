pub mod form_session;
pub mod sinks;
pub mod store_api;
