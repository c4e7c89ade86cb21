pub mod application;
pub mod dto;
pub mod error;
pub mod panel;
pub mod repository;
pub mod service;
