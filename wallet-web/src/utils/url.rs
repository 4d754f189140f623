//! URL helpers for the StarKey mobile hand-off

use std::cell::Cell;

use web_sys::window;

use crate::utils::constants::{AUTO_CONNECT_PARAM, STARKEY_DAPP_BROWSER};

/// Get a query parameter from the current URL
///
/// Reads `window.location.search` directly so it also works before the
/// router has parsed the URL.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    query_param(&search, key)
}

/// Look `key` up in a `?a=b&c` query string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => {
                return Some(
                    urlencoding::decode(param_value)
                        .unwrap_or_else(|_| param_value.into())
                        .into_owned(),
                );
            }
            // key without a value
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}

/// Whether the page was opened by the StarKey app asking for auto-connect.
pub fn wallet_connect_onload() -> bool {
    get_query_param(AUTO_CONNECT_PARAM).is_some_and(|v| v == "true")
}

/// StarKey dApp-browser link that reopens `href` with auto-connect requested.
///
/// The flag is appended with `?` whatever `href` already carries.
pub fn mobile_handoff_url(href: &str) -> String {
    let target = format!("{}?{}=true", href, AUTO_CONNECT_PARAM);
    format!("{}?url={}", STARKEY_DAPP_BROWSER, urlencoding::encode(&target))
}

/// Lets the mobile hand-off happen once per page load.
///
/// The locator is consulted on every poll tick and again before each
/// operation, so opening the dApp browser from it needs a latch.
#[derive(Debug, Default)]
pub struct HandoffLatch {
    fired: Cell<bool>,
}

impl HandoffLatch {
    /// Run `open` the first time only. Returns whether it ran.
    pub fn fire(&self, open: impl FnOnce()) -> bool {
        if self.fired.replace(true) {
            return false;
        }
        open();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use lib_supra::{poll_for_extension, Extension};

    #[test]
    fn test_query_param() {
        assert_eq!(
            query_param("?wallet_connect_onload=true&x=1", "wallet_connect_onload").as_deref(),
            Some("true")
        );
        assert_eq!(query_param("a=hello%20world", "a").as_deref(), Some("hello world"));
        assert_eq!(query_param("?flag", "flag").as_deref(), Some(""));
        assert_eq!(query_param("?a=1", "b"), None);
        assert_eq!(query_param("", "a"), None);
    }

    #[test]
    fn test_mobile_handoff_url() {
        assert_eq!(
            mobile_handoff_url("https://dapp.example/swap"),
            "https://starkey.app/dApps?url=https%3A%2F%2Fdapp.example%2Fswap%3Fwallet_connect_onload%3Dtrue"
        );
    }

    #[tokio::test]
    async fn test_handoff_opens_once_across_a_full_poll() {
        let latch = HandoffLatch::default();
        let looks = Cell::new(0u32);
        let opened = Cell::new(0u32);
        let locator = || {
            looks.set(looks.get() + 1);
            latch.fire(|| opened.set(opened.get() + 1));
            Extension::Absent
        };

        let outcome =
            poll_for_extension(&locator, Duration::from_millis(2), Duration::from_millis(10)).await;
        assert!(!outcome.is_found());
        assert_eq!(looks.get(), 6);
        assert_eq!(opened.get(), 1);

        // later operations look again
        assert!(!latch.fire(|| opened.set(opened.get() + 1)));
        assert_eq!(opened.get(), 1);
    }
}
