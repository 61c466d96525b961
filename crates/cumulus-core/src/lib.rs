//! Cumulus Core Types and Definitions
//!
//! This crate provides the foundational types for the Cumulus infrastructure
//! diagram tool. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Resources**: The cloud-resource semantic model ([`resource`] module)
//! - **Catalog**: Static icon and brand-color tables per resource kind
//!   ([`catalog`] module)

pub mod catalog;
pub mod color;
pub mod geometry;
pub mod resource;
