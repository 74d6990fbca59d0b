use anchor_lang::error::Error;

use crate::error::ErrorCode;

pub fn assert_error(err: Error, expected: ErrorCode) {
    match err {
        Error::AnchorError(anchor) => {
            assert_eq!(anchor.error_code_number, u32::from(expected), "{anchor:?}")
        }
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
