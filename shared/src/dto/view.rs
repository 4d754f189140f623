//! View-function DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `POST /rpc/v2/view` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewFunctionBody {
    /// `"<address>::<module>::<function>"`
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

impl ViewFunctionBody {
    pub fn new(contract_address: &str, module_name: &str, function_name: &str) -> Self {
        Self {
            function: function_id(contract_address, module_name, function_name),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        }
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<String>) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<Value>) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Fully qualified Move function identifier.
pub fn function_id(contract_address: &str, module_name: &str, function_name: &str) -> String {
    format!("{}::{}::{}", contract_address, module_name, function_name)
}

/// The `{ "result": ... }` envelope returned by the view endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewResult<T> {
    pub result: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_wire_format() {
        let body = ViewFunctionBody::new("0x1", "coin", "balance")
            .with_type_arguments(vec!["0x1::supra_coin::SupraCoin".to_string()])
            .with_arguments(vec![json!("0xabc")]);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "function": "0x1::coin::balance",
                "type_arguments": ["0x1::supra_coin::SupraCoin"],
                "arguments": ["0xabc"],
            })
        );
    }

    #[test]
    fn test_result_envelope() {
        let res: ViewResult<Vec<String>> =
            serde_json::from_value(json!({ "result": ["42"] })).unwrap();
        assert_eq!(res.result, vec!["42".to_string()]);
    }
}
