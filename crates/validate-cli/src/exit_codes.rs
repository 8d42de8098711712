//! Exit codes for the `validate` binary.
//! API errors map through `ValidateError::exit_code`; anything else is internal.

use validate_client::ValidateError;

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 3; // Output or setup failure outside the API client

pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ValidateError>()
        .map(ValidateError::exit_code)
        .unwrap_or(INTERNAL_ERROR)
}
