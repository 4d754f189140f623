//! # Entry-Function Transactions
//!
//! The wallet kit does not encode transactions. An external Supra client
//! (`supra-l1-sdk` in the browser) looks up the sender's sequence number and
//! builds the serialized raw transaction; the provider only hex-encodes the
//! bytes and submits them through the extension.

use std::rc::Rc;

use async_trait::async_trait;
use lib_core::Result;
use shared::dto::transaction::AccountInfo;

/// Everything the client needs to build one raw transaction.
#[derive(Debug, Clone, Copy)]
pub struct RawTxRequest<'a> {
    pub sender: &'a str,
    pub sequence_number: u64,
    pub module_address: &'a str,
    pub module_name: &'a str,
    pub function_name: &'a str,
    pub type_args: &'a [String],
    /// BCS-encoded arguments.
    pub function_args: &'a [Vec<u8>],
}

/// External transaction-building client.
#[async_trait(?Send)]
pub trait SupraClient {
    async fn get_account_info(&self, address: &str) -> Result<AccountInfo>;

    async fn create_serialized_raw_tx_object(&self, request: RawTxRequest<'_>) -> Result<Vec<u8>>;
}

/// Parameters of [`WalletProvider::execute_entry_function`](crate::WalletProvider::execute_entry_function).
#[derive(Clone)]
pub struct EntryFunctionParams {
    pub contract_address: String,
    pub module_name: String,
    pub function_name: String,
    pub function_args: Vec<Vec<u8>>,
    pub type_args: Vec<String>,
    pub client: Rc<dyn SupraClient>,
}

impl EntryFunctionParams {
    pub fn new(
        client: Rc<dyn SupraClient>,
        contract_address: impl Into<String>,
        module_name: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            contract_address: contract_address.into(),
            module_name: module_name.into(),
            function_name: function_name.into(),
            function_args: Vec::new(),
            type_args: Vec::new(),
            client,
        }
    }

    pub fn with_args(mut self, function_args: Vec<Vec<u8>>) -> Self {
        self.function_args = function_args;
        self
    }

    pub fn with_type_args(mut self, type_args: Vec<String>) -> Self {
        self.type_args = type_args;
        self
    }

    pub(crate) fn raw_tx_request<'a>(&'a self, sender: &'a str, sequence_number: u64) -> RawTxRequest<'a> {
        RawTxRequest {
            sender,
            sequence_number,
            module_address: &self.contract_address,
            module_name: &self.module_name,
            function_name: &self.function_name,
            type_args: &self.type_args,
            function_args: &self.function_args,
        }
    }
}
