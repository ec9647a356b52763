// ABOUTME: Library crate for gh-pair exposing the session controller and its collaborators

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod hook;
pub mod models;
pub mod store;
