//! Async collaborators for the form core: the store API client, the
//! navigation and notification sinks, and the session driver that executes
//! controller effects against them.

pub mod services;
