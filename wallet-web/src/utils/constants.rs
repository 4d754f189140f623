//! Application constants

/// Where users get the extension.
pub const STARKEY_INSTALL_URL: &str = "https://starkey.app";

/// StarKey mobile app's in-app dApp browser.
pub const STARKEY_DAPP_BROWSER: &str = "https://starkey.app/dApps";

/// Query flag the mobile app sets when it opens a dApp.
pub const AUTO_CONNECT_PARAM: &str = "wallet_connect_onload";

pub const SUPRA_COIN: &str = "0x1::supra_coin::SupraCoin";
