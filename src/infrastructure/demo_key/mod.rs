//! Demo key request orchestration

mod service;

pub use service::{DemoKeyService, RequestStage};
