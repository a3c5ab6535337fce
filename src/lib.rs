//! Mergington High School extracurricular activity signups.
//!
//! An in-memory activity directory behind a small axum JSON API.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;
