//! Built-in collection generators, one per service

pub mod asset;
pub mod helpdesk;
pub mod notification;
