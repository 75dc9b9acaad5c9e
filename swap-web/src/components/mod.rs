//! UI Components

pub mod amount_input;
pub mod confirm_dialog;
pub mod navbar;
pub mod quote_panel;
pub mod swap_button;
pub mod token_select;

pub use amount_input::AmountInput;
pub use confirm_dialog::ConfirmDialog;
pub use navbar::Navbar;
pub use quote_panel::QuotePanel;
pub use swap_button::SwapButton;
pub use token_select::TokenPicker;
