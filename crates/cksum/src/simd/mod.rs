//! Hardware carryless-multiply backends.
//!
//! Every kernel here is `unsafe` and feature-gated; the dispatcher only hands
//! one out after the capability probe has confirmed the required extensions.

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;
