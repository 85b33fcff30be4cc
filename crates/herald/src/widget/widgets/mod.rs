//! Concrete widgets.

mod notification_text_block;
mod push_button;

pub use notification_text_block::NotificationTextBlock;
pub use push_button::PushButton;
