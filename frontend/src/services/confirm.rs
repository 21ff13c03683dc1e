/// Blocking yes/no prompt guarding destructive operations
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

pub const CONFIRM_REMOVE_ACCOUNT: &str = "Вы действительно хотите удалить счёт?";
pub const CONFIRM_REMOVE_TRANSACTION: &str = "Вы действительно хотите удалить эту транзакцию?";

/// `window.confirm`; no window or a thrown exception counts as a decline
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, declining prompt: {}", message);
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("Confirmation prompt failed: {:?}", e);
                false
            }
        }
    }
}
