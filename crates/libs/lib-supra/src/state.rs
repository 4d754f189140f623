//! # Session State
//!
//! The wallet session moves through four phases. Every change is a named
//! [`Transition`] applied through [`WalletPhase::next`]; pairs not in the
//! table keep the current phase.
//!
//! | From              | Transition          | To                |
//! |-------------------|---------------------|-------------------|
//! | `Uninitialized`   | `ExtensionDetected` | `Disconnected`    |
//! | `Uninitialized`   | `ExtensionTimedOut` | `ExtensionAbsent` |
//! | `ExtensionAbsent` | `ExtensionDetected` | `Disconnected`    |
//! | `Disconnected`    | `AccountSynced`     | `Connected`       |
//! | `Connected`       | `AccountSynced`     | `Connected`       |
//! | `Connected`       | `SessionReset`      | `Disconnected`    |
//! | any               | `NetworkChanged`    | unchanged         |

use lib_core::SupraChainId;
use shared::dto::wallet::AccountDetails;

/// Balance shown while nothing better is known.
pub const DEFAULT_BALANCE: &str = "0.00";

/// Chain of a fresh session.
pub const INITIAL_CHAIN: SupraChainId = SupraChainId::Testnet;

/// Chain a session falls back to after a reset.
pub const RESET_CHAIN: SupraChainId = SupraChainId::Mainnet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalletPhase {
    #[default]
    Uninitialized,
    ExtensionAbsent,
    Disconnected,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The extension object was found in the page.
    ExtensionDetected,
    /// Polling for the extension ran out of time.
    ExtensionTimedOut,
    /// The extension reported an account and its chain.
    AccountSynced,
    /// Explicit disconnect, revoked accounts, or the extension's `disconnect` event.
    SessionReset,
    /// The extension switched network.
    NetworkChanged,
}

impl WalletPhase {
    pub fn next(self, transition: Transition) -> WalletPhase {
        use Transition::*;
        use WalletPhase::*;

        match (self, transition) {
            (Uninitialized, ExtensionDetected) | (ExtensionAbsent, ExtensionDetected) => Disconnected,
            (Uninitialized, ExtensionTimedOut) => ExtensionAbsent,
            (Disconnected, AccountSynced) | (Connected, AccountSynced) => Connected,
            (Connected, SessionReset) => Disconnected,
            (phase, _) => phase,
        }
    }
}

/// Everything a dApp UI renders about the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: WalletPhase,
    pub is_installed: bool,
    pub account: Option<AccountDetails>,
    /// SUPRA, decimal string.
    pub balance: String,
    pub chain_id: SupraChainId,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: WalletPhase::default(),
            is_installed: false,
            account: None,
            balance: DEFAULT_BALANCE.to_string(),
            chain_id: INITIAL_CHAIN,
        }
    }
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.phase == WalletPhase::Connected
    }

    pub fn address(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.address.as_str())
    }

    pub fn domain(&self) -> Option<&str> {
        self.account
            .as_ref()
            .map(|a| a.domain.as_str())
            .filter(|d| !d.is_empty())
    }

    /// Apply a transition to the phase and return the new phase.
    pub fn apply(&mut self, transition: Transition) -> WalletPhase {
        self.phase = self.phase.next(transition);
        self.phase
    }

    /// Drop the account and return balance and chain to their reset values.
    pub fn reset(&mut self) {
        self.apply(Transition::SessionReset);
        self.account = None;
        self.balance = DEFAULT_BALANCE.to_string();
        self.chain_id = RESET_CHAIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_transitions() {
        assert_eq!(
            WalletPhase::Uninitialized.next(Transition::ExtensionDetected),
            WalletPhase::Disconnected
        );
        assert_eq!(
            WalletPhase::Uninitialized.next(Transition::ExtensionTimedOut),
            WalletPhase::ExtensionAbsent
        );
        assert_eq!(
            WalletPhase::ExtensionAbsent.next(Transition::ExtensionDetected),
            WalletPhase::Disconnected
        );
    }

    #[test]
    fn test_session_transitions() {
        assert_eq!(
            WalletPhase::Disconnected.next(Transition::AccountSynced),
            WalletPhase::Connected
        );
        assert_eq!(
            WalletPhase::Connected.next(Transition::AccountSynced),
            WalletPhase::Connected
        );
        assert_eq!(
            WalletPhase::Connected.next(Transition::SessionReset),
            WalletPhase::Disconnected
        );
    }

    #[test]
    fn test_unlisted_pairs_keep_phase() {
        for phase in [
            WalletPhase::Uninitialized,
            WalletPhase::ExtensionAbsent,
            WalletPhase::Disconnected,
            WalletPhase::Connected,
        ] {
            assert_eq!(phase.next(Transition::NetworkChanged), phase);
        }
        assert_eq!(
            WalletPhase::ExtensionAbsent.next(Transition::AccountSynced),
            WalletPhase::ExtensionAbsent
        );
        assert_eq!(
            WalletPhase::Connected.next(Transition::ExtensionTimedOut),
            WalletPhase::Connected
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = SessionState {
            phase: WalletPhase::Connected,
            is_installed: true,
            account: Some(AccountDetails::new("0xabc")),
            balance: "12.3400".to_string(),
            chain_id: SupraChainId::Testnet,
        };

        state.reset();

        assert!(!state.is_connected());
        assert_eq!(state.phase, WalletPhase::Disconnected);
        assert!(state.is_installed);
        assert_eq!(state.address(), None);
        assert_eq!(state.balance, DEFAULT_BALANCE);
        assert_eq!(state.chain_id, RESET_CHAIN);
    }

    #[test]
    fn test_domain_hides_empty_string() {
        let mut state = SessionState::default();
        state.account = Some(AccountDetails::new("0xabc"));
        assert_eq!(state.domain(), None);
    }
}
