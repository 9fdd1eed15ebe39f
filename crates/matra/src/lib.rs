//! matra — scalar abstraction and fixed-size transform types
//!
//! Foundation crate for the matra linear-algebra workspace. Generic over
//! scalar type so f32 and f64 share one implementation.
//!
//! # Design principles
//! - Generic over `Scalar` type (f32, f64)
//! - `#[repr(C)]` everywhere for predictable layout
//! - No nalgebra dependency — full control of the stack
//! - The 4x4 affine helper is independent of the dense engine in `matra-la`

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod scalar;
mod vec3;
mod vec4;
mod mat4;

pub use scalar::Scalar;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
