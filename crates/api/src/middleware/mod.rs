//! Request middleware: authentication, role gating, response metadata.

pub mod auth;
pub mod rbac;
pub mod request_meta;
