//! Trellis Core Types
//!
//! This crate provides the geometric vocabulary shared by the Trellis flow
//! layout engine and its front ends:
//!
//! - **Geometry**: [`geometry::Point`], [`geometry::Size`] and [`geometry::Bounds`]

pub mod geometry;
