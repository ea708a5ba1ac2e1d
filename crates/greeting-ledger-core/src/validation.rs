//! Input validation: length bounds and membership checks.
//!
//! All checks are pure and side-effect free. Lengths are measured in bytes of
//! the UTF-8 encoding, not code points; callers depend on the byte boundary,
//! so a multibyte character counts for more than one.

use crate::error::ValidationError;
use crate::types::Principal;

/// Personal greeting length bounds, in bytes.
pub const PERSONAL_GREETING_MIN: usize = 1;
pub const PERSONAL_GREETING_MAX: usize = 280;

/// Public greeting length bounds, in bytes.
pub const PUBLIC_GREETING_MIN: usize = 1;
pub const PUBLIC_GREETING_MAX: usize = 500;

/// Direct greeting length bounds, in bytes.
pub const DIRECT_GREETING_MIN: usize = 1;
pub const DIRECT_GREETING_MAX: usize = 280;

/// Username length bounds, in bytes.
pub const USERNAME_MIN: usize = 1;
pub const USERNAME_MAX: usize = 50;

/// Bio length bounds, in bytes.
pub const BIO_MIN: usize = 0;
pub const BIO_MAX: usize = 200;

/// Validate that `text` is within `[min, max]` bytes.
pub fn validate_text(
    field: &'static str,
    text: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = text.len();
    if len < min || len > max {
        return Err(ValidationError::TextLength {
            field,
            len,
            min,
            max,
        });
    }
    Ok(())
}

/// Case-sensitive exact membership test against an ordered set.
///
/// Linear scan: the category and language sets stay in the tens of entries.
pub fn is_member(set: &[String], value: &str) -> bool {
    set.iter().any(|member| member == value)
}

/// Reject the null principal where a concrete target is required.
pub fn validate_principal(
    field: &'static str,
    principal: &Principal,
) -> Result<(), ValidationError> {
    if principal.is_null() {
        return Err(ValidationError::NullPrincipal(field));
    }
    Ok(())
}
