//! Demo pages, one per wallet capability

pub mod balance;
pub mod connect;
pub mod network;
pub mod sign;
pub mod transfer;
pub mod view_function;

pub use balance::BalancePage;
pub use connect::ConnectPage;
pub use network::NetworkPage;
pub use sign::SignMessagePage;
pub use transfer::TransferPage;
pub use view_function::ViewFunctionPage;
