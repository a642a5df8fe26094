// ============================================================================
// Numeric Module
// Exact rational arithmetic for share computation
// ============================================================================
//
// This module provides:
// - Fraction: immutable rational number, always kept in lowest terms
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations until amounts are produced
// - All arithmetic returns Result (no panics)
// - i64 storage with i128 intermediates, overflow is reported, never wrapped

mod errors;
mod fraction;

pub use errors::{NumericError, NumericResult};
pub use fraction::Fraction;
