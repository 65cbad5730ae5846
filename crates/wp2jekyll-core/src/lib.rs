//! wp2jekyll Core
//!
//! This crate provides the shared types and error definitions
//! for the wp2jekyll converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Post`], [`Comment`] - Records extracted from a WordPress export feed
//! - [`AssetEntry`], [`Rendered`] - The output of the content pipeline
//! - [`Wp2JekyllError`] - Error types

pub mod error;
pub mod post;

pub use error::{Result, Wp2JekyllError};
pub use post::{AssetEntry, Comment, Post, Rendered};
