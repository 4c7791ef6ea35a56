#![no_std]
extern crate alloc;

pub mod controls;
pub mod display_list;
pub mod math;
pub mod render;
pub mod scene;
pub mod surface;
mod vector;

pub use vector::Vector2D;
