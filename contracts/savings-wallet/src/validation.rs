//! Input validation for goal creation and balance changes

use soroban_sdk::String;

use crate::types::MAX_LABEL_LEN;
use crate::WalletError;

/// Validates a goal target amount
pub fn validate_target(target: u128) -> Result<(), WalletError> {
    if target == 0 {
        return Err(WalletError::InvalidTarget);
    }
    Ok(())
}

/// Validates a goal label: at most `MAX_LABEL_LEN` bytes, ASCII only.
/// Empty labels and control characters are accepted.
pub fn validate_label(label: &String) -> Result<(), WalletError> {
    let len = label.len();
    if len > MAX_LABEL_LEN {
        return Err(WalletError::LabelTooLong);
    }

    let mut buf = [0u8; MAX_LABEL_LEN as usize];
    let bytes = &mut buf[..len as usize];
    label.copy_into_slice(bytes);

    if !bytes.is_ascii() {
        return Err(WalletError::InvalidLabel);
    }
    Ok(())
}

/// Validates a deposit amount
pub fn validate_amount(amount: u128) -> Result<(), WalletError> {
    if amount == 0 {
        return Err(WalletError::InvalidAmount);
    }
    Ok(())
}
