mod input_with_datalist;
mod invalid_chain_warning;
mod wallet_button;

pub use input_with_datalist::InputWithDatalist;
pub use invalid_chain_warning::InvalidChainWarning;
pub use wallet_button::WalletButton;
