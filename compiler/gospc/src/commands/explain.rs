//! The `explain` command: describe an error code.

use gosp_diagnostic::ErrorCode;
use gospc::DriverError;

pub fn explain_error(code: &str) -> Result<(), DriverError> {
    let Some(code) = ErrorCode::parse(code) else {
        return Err(DriverError::UnknownErrorCode(code.to_owned()));
    };
    println!("{code}: {}", code.description());
    println!("phase: {:?}", code.phase());
    Ok(())
}
