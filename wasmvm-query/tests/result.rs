use cosmwasm_std::Binary;
use serde_json::json;
use wasmvm_query::{QuerierResult, QueryResult, SystemError};

#[test]
fn empty_result_encodes_as_empty_success() {
    let expected = br#"{"ok":""}"#.to_vec();
    assert_eq!(serde_json::to_vec(&QueryResult::default()).unwrap(), expected);
    assert_eq!(
        serde_json::to_vec(&QueryResult::Ok(Binary::default())).unwrap(),
        expected
    );
    assert_eq!(
        serde_json::to_vec(&QueryResult::Err(String::new())).unwrap(),
        expected
    );

    let decoded: QueryResult = serde_json::from_slice(&expected).unwrap();
    assert_eq!(decoded, QueryResult::Ok(Binary::default()));
}

#[test]
fn missing_fields_decode_as_empty_success() {
    let decoded: QueryResult = serde_json::from_str("{}").unwrap();
    assert_eq!(decoded, QueryResult::Ok(Binary::default()));
    assert!(decoded.is_ok());

    let decoded: QueryResult = serde_json::from_str(r#"{"error":""}"#).unwrap();
    assert_eq!(decoded, QueryResult::Ok(Binary::default()));
}

#[test]
fn single_branch_forms() {
    let ok = QueryResult::Ok(Binary::from(b"{}"));
    assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"ok":"e30="}));
    assert_eq!(serde_json::from_value::<QueryResult>(json!({"ok":"e30="})).unwrap(), ok);

    let err = QueryResult::Err("validator not found".into());
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({"error":"validator not found"})
    );
    assert_eq!(
        serde_json::from_value::<QueryResult>(json!({"error":"validator not found"})).unwrap(),
        err
    );
    assert_eq!(err.into_result(), Err("validator not found".to_owned()));
}

#[test]
fn both_branches_are_rejected() {
    assert!(serde_json::from_value::<QueryResult>(json!({"ok":"e30=","error":"boom"})).is_err());
}

#[test]
fn querier_result_nests_both_levels() {
    let result = QuerierResult::contract_err("not found");
    let bytes = result.to_vec().unwrap();
    assert_eq!(bytes, br#"{"ok":{"error":"not found"}}"#.to_vec());
    assert_eq!(QuerierResult::from_slice(&bytes).unwrap(), result);

    let result = QuerierResult::ok(Binary::default());
    assert_eq!(result.to_vec().unwrap(), br#"{"ok":{"ok":""}}"#.to_vec());

    let result = QuerierResult::system_err(SystemError::UnsupportedRequest {
        kind: "ibc".into(),
    });
    let bytes = result.to_vec().unwrap();
    assert_eq!(bytes, br#"{"error":{"unsupported_request":{"kind":"ibc"}}}"#.to_vec());
    assert_eq!(QuerierResult::from_slice(&bytes).unwrap(), result);
}

#[test]
fn querier_result_with_empty_inner_object() {
    let result = QuerierResult::from_slice(br#"{"ok":{}}"#).unwrap();
    assert_eq!(result, QuerierResult::Ok(QueryResult::default()));
}

#[test]
fn querier_result_rejects_both_branches() {
    assert!(QuerierResult::from_slice(br#"{"ok":{"ok":""},"error":{"unknown":{}}}"#).is_err());
    assert!(QuerierResult::from_slice(b"{}").is_err());
}

#[test]
fn system_error_wire_forms() {
    let cases = [
        (
            SystemError::InvalidRequest {
                error: "expected value".into(),
                request: Binary::from(b"xx"),
            },
            json!({"invalid_request":{"error":"expected value","request":"eHg="}}),
        ),
        (
            SystemError::NoSuchContract {
                addr: "contract".into(),
            },
            json!({"no_such_contract":{"addr":"contract"}}),
        ),
        (SystemError::NoSuchCode { code_id: 3 }, json!({"no_such_code":{"code_id":3}})),
        (SystemError::Unknown {}, json!({"unknown":{}})),
        (
            SystemError::OutOfGas {
                descriptor: "iter next flat".into(),
                limit: 10,
            },
            json!({"out_of_gas":{"descriptor":"iter next flat","limit":10}}),
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(serde_json::to_value(&error).unwrap(), expected);
        assert_eq!(serde_json::from_value::<SystemError>(expected).unwrap(), error);
    }
}

#[test]
fn system_error_display() {
    let error = SystemError::InvalidRequest {
        error: "expected value".into(),
        request: Binary::from(b"xx"),
    };
    assert_eq!(error.to_string(), "Cannot parse request: expected value in: xx");
}
