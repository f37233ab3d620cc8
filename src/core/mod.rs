pub mod chain;
pub mod form;
pub mod settings;
pub mod wallet;
