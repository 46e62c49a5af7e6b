use std::fmt::Debug;

use cosmwasm_std::{Binary, Decimal, Decimal256, Uint128};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use wasmvm_query::{
    query::*,
    types::{
        Checksum, Coin, DecCoin, Delegation, DelegatorReward, DenomMetadata, DenomUnit,
        FullDelegation, IbcChannel, IbcEndpoint, IbcOrder, PageRequest, Validator,
    },
    DecodeError,
};

fn decode(value: serde_json::Value) -> Result<QueryRequest, DecodeError> {
    QueryRequest::from_slice(&serde_json::to_vec(&value).unwrap())
}

#[test]
fn balance_request_from_wire() {
    let request = decode(json!({"bank":{"balance":{"address":"addr1","denom":"utoken"}}})).unwrap();
    assert_eq!(
        request,
        QueryRequest::Bank(BankQuery::Balance(BalanceQuery {
            address: "addr1".into(),
            denom: "utoken".into(),
        }))
    );
    assert_eq!(request.kind(), "bank/balance");
}

#[test]
fn wasm_queries_name_their_contract() {
    let query = WasmQuery::Raw(RawQuery {
        contract_addr: "contract".into(),
        key: Binary::from(b"k"),
    });
    assert_eq!(query.contract_addr(), Some("contract"));
    assert_eq!(query.kind(), "raw");
    assert_eq!(WasmQuery::CodeInfo(CodeInfoQuery { code_id: 1 }).contract_addr(), None);
}

fn round_trip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let bytes = serde_json::to_vec(value).unwrap();
    assert_eq!(&serde_json::from_slice::<T>(&bytes).unwrap(), value);
}

fn coin(amount: u128) -> Coin {
    Coin::new(amount, "uatom")
}

fn dec_coin(percent: u64) -> DecCoin {
    DecCoin::new(Decimal256::percent(percent), "uatom")
}

fn validator() -> Validator {
    Validator {
        address: "cosmosvaloper1".into(),
        commission: Decimal::percent(5),
        max_commission: Decimal::percent(20),
        max_change_rate: Decimal::percent(1),
    }
}

fn channel() -> IbcChannel {
    IbcChannel {
        endpoint: IbcEndpoint {
            port_id: "wasm.contract".into(),
            channel_id: "channel-0".into(),
        },
        counterparty_endpoint: IbcEndpoint {
            port_id: "transfer".into(),
            channel_id: "channel-7".into(),
        },
        order: IbcOrder::Ordered,
        version: "ics20-1".into(),
        connection_id: "connection-0".into(),
    }
}

fn metadata() -> DenomMetadata {
    DenomMetadata {
        description: "staking token".into(),
        denom_units: vec![
            DenomUnit {
                denom: "uatom".into(),
                exponent: 0,
                aliases: vec!["microatom".into()],
            },
            DenomUnit {
                denom: "atom".into(),
                exponent: 6,
                aliases: vec![],
            },
        ],
        base: "uatom".into(),
        display: "atom".into(),
        name: "Atom".into(),
        symbol: "ATOM".into(),
        uri: "https://example.org/atom.svg".into(),
        uri_hash: "abcd".into(),
    }
}

#[test]
fn request_round_trip_every_operation() {
    let requests: Vec<QueryRequest> = vec![
        BankQuery::Supply(SupplyQuery {
            denom: "uatom".into(),
        })
        .into(),
        BankQuery::Balance(BalanceQuery {
            address: "addr1".into(),
            denom: "uatom".into(),
        })
        .into(),
        BankQuery::AllBalances(AllBalancesQuery {
            address: "addr1".into(),
        })
        .into(),
        BankQuery::DenomMetadata(DenomMetadataQuery {
            denom: "uatom".into(),
        })
        .into(),
        BankQuery::AllDenomMetadata(AllDenomMetadataQuery { pagination: None }).into(),
        BankQuery::AllDenomMetadata(AllDenomMetadataQuery {
            pagination: Some(PageRequest {
                key: Some(Binary::from(b"uatom")),
                limit: 10,
                reverse: true,
            }),
        })
        .into(),
        QueryRequest::Custom(json!({"price":{"pair":["a","b"]}})),
        IbcQuery::PortId(PortIdQuery {}).into(),
        IbcQuery::ListChannels(ListChannelsQuery { port_id: None }).into(),
        IbcQuery::ListChannels(ListChannelsQuery {
            port_id: Some("transfer".into()),
        })
        .into(),
        IbcQuery::Channel(ChannelQuery {
            port_id: None,
            channel_id: "channel-0".into(),
        })
        .into(),
        StakingQuery::AllValidators(AllValidatorsQuery {}).into(),
        StakingQuery::Validator(ValidatorQuery {
            address: "cosmosvaloper1".into(),
        })
        .into(),
        StakingQuery::AllDelegations(AllDelegationsQuery {
            delegator: "delegator".into(),
        })
        .into(),
        StakingQuery::Delegation(DelegationQuery {
            delegator: "delegator".into(),
            validator: "cosmosvaloper1".into(),
        })
        .into(),
        StakingQuery::BondedDenom(BondedDenomQuery {}).into(),
        DistributionQuery::DelegatorWithdrawAddress(DelegatorWithdrawAddressQuery {
            delegator_address: "delegator".into(),
        })
        .into(),
        DistributionQuery::DelegationRewards(DelegationRewardsQuery {
            delegator_address: "delegator".into(),
            validator_address: "validator".into(),
        })
        .into(),
        DistributionQuery::DelegationTotalRewards(DelegationTotalRewardsQuery {
            delegator_address: "delegator".into(),
        })
        .into(),
        DistributionQuery::DelegatorValidators(DelegatorValidatorsQuery {
            delegator_address: "delegator".into(),
        })
        .into(),
        StargateQuery {
            path: "/cosmos.bank.v1beta1.Query/Balance".into(),
            data: Binary::from(vec![0x0a, 0x01, 0x61]),
        }
        .into(),
        GrpcQuery {
            path: "/cosmos.auth.v1beta1.Query/Params".into(),
            data: Binary::default(),
        }
        .into(),
        WasmQuery::Smart(SmartQuery {
            contract_addr: "contract".into(),
            msg: Binary::from(br#"{"count":{}}"#),
        })
        .into(),
        WasmQuery::Raw(RawQuery {
            contract_addr: "contract".into(),
            key: Binary::from(b"config"),
        })
        .into(),
        WasmQuery::ContractInfo(ContractInfoQuery {
            contract_addr: "contract".into(),
        })
        .into(),
        WasmQuery::CodeInfo(CodeInfoQuery { code_id: 7 }).into(),
        WasmQuery::RawRange(RawRangeQuery {
            contract_addr: "contract".into(),
            start: Some(Binary::from(b"a")),
            end: Some(Binary::from(b"z")),
            limit: 5,
            order: Order::Descending,
        })
        .into(),
    ];

    for request in &requests {
        let bytes = request.to_vec().unwrap();
        assert_eq!(&QueryRequest::from_slice(&bytes).unwrap(), request);
    }
}

#[test]
fn response_round_trip_every_operation() {
    round_trip(&SupplyResponse { amount: coin(150) });
    round_trip(&BalanceResponse { amount: coin(0) });
    round_trip(&AllBalancesResponse {
        amount: vec![coin(1), Coin::new(2u128, "uosmo")],
    });
    round_trip(&DenomMetadataResponse {
        metadata: metadata(),
    });
    round_trip(&AllDenomMetadataResponse {
        metadata: vec![metadata()],
        next_key: Some(Binary::from(b"uosmo")),
    });
    round_trip(&AllDenomMetadataResponse {
        metadata: vec![],
        next_key: None,
    });

    round_trip(&PortIdResponse {
        port_id: "wasm.contract".into(),
    });
    round_trip(&ListChannelsResponse {
        channels: vec![channel()],
    });
    round_trip(&ChannelResponse {
        channel: Some(channel()),
    });
    round_trip(&ChannelResponse { channel: None });

    round_trip(&AllValidatorsResponse {
        validators: vec![validator()],
    });
    round_trip(&ValidatorResponse {
        validator: Some(validator()),
    });
    round_trip(&ValidatorResponse { validator: None });
    round_trip(&AllDelegationsResponse {
        delegations: vec![Delegation {
            delegator: "delegator".into(),
            validator: "cosmosvaloper1".into(),
            amount: coin(10),
        }],
    });
    round_trip(&DelegationResponse {
        delegation: Some(FullDelegation {
            delegator: "delegator".into(),
            validator: "cosmosvaloper1".into(),
            amount: coin(10),
            accumulated_rewards: vec![coin(1)],
            can_redelegate: coin(5),
        }),
    });
    round_trip(&DelegationResponse { delegation: None });
    round_trip(&BondedDenomResponse {
        denom: "uatom".into(),
    });

    round_trip(&DelegatorWithdrawAddressResponse {
        withdraw_address: "rewards".into(),
    });
    round_trip(&DelegationRewardsResponse {
        rewards: vec![dec_coin(150)],
    });
    round_trip(&DelegationTotalRewardsResponse {
        rewards: vec![
            DelegatorReward {
                reward: vec![dec_coin(150)],
                validator_address: "val1".into(),
            },
            DelegatorReward {
                reward: vec![dec_coin(50)],
                validator_address: "val2".into(),
            },
        ],
        total: vec![dec_coin(200)],
    });
    round_trip(&DelegatorValidatorsResponse {
        validators: vec!["val1".into(), "val2".into()],
    });

    round_trip(&ContractInfoResponse {
        code_id: 1,
        creator: "creator".into(),
        admin: Some("admin".into()),
        pinned: true,
        ibc_port: Some("wasm.contract".into()),
        ibc2_port: Some("wasm2contract".into()),
    });
    round_trip(&CodeInfoResponse {
        code_id: 7,
        creator: "creator".into(),
        checksum: Checksum::from([0x11; 32]),
    });
    round_trip(&RawRangeResponse {
        data: vec![RawRangeEntry::new(b"a", b"1"), RawRangeEntry::new(b"b", b"")],
        next_key: Some(Binary::from(b"c")),
    });
}

#[test]
fn encoding_omits_absent_optional_fields() {
    let request = QueryRequest::Ibc(IbcQuery::ListChannels(ListChannelsQuery { port_id: None }));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"ibc":{"list_channels":{}}})
    );

    let request = QueryRequest::Wasm(WasmQuery::RawRange(RawRangeQuery {
        contract_addr: "contract".into(),
        start: None,
        end: None,
        limit: 1,
        order: Order::Ascending,
    }));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"wasm":{"raw_range":{"contract_addr":"contract","limit":1,"order":"ascending"}}})
    );
}

#[test]
fn rejects_zero_or_many_branches() {
    assert!(decode(json!({})).is_err());
    assert!(decode(json!({"bank":{}})).is_err());
    assert!(decode(json!({"bank":null})).is_err());
    assert!(decode(json!({"custom":null})).is_err());
    assert!(decode(json!({"ibc":{"port_id":null}})).is_err());
    assert!(decode(json!({"unknown_field":1})).is_err());
    assert!(decode(json!({
        "bank":{"supply":{"denom":"uatom"}},
        "wasm":{"code_info":{"code_id":1}}
    }))
    .is_err());
    assert!(decode(json!({
        "bank":{"supply":{"denom":"uatom"},"balance":{"address":"a","denom":"uatom"}}
    }))
    .is_err());
}

#[test]
fn decode_error_keeps_original_bytes() {
    let raw = br#"{"unknown_field": 1}"#;
    let err = QueryRequest::from_slice(raw).unwrap_err();
    assert_eq!(err.request, Binary::from(raw));
    assert!(!err.message.is_empty());
}

#[test]
fn order_accepts_short_aliases() {
    let query: RawRangeQuery = serde_json::from_value(json!({
        "contract_addr":"contract","start":"YQ==","end":"YQ==","limit":10,"order":"asc"
    }))
    .unwrap();
    assert_eq!(query.order, Order::Ascending);
    assert_eq!(
        serde_json::from_value::<Order>(json!("desc")).unwrap(),
        Order::Descending
    );
    assert_eq!(serde_json::to_value(Order::Descending).unwrap(), json!("descending"));
}

#[test]
fn raw_range_entry_is_a_pair() {
    let entry = RawRangeEntry::new(b"key".as_slice(), b"value".as_slice());
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value, json!(["a2V5", "dmFsdWU="]));
    assert_eq!(serde_json::from_value::<RawRangeEntry>(value).unwrap(), entry);

    assert!(serde_json::from_value::<RawRangeEntry>(json!(["a2V5"])).is_err());
    assert!(serde_json::from_value::<RawRangeEntry>(json!(["a2V5", "a2V5", "a2V5"])).is_err());
    assert!(serde_json::from_value::<RawRangeEntry>(json!({"key":"a2V5","value":"a2V5"})).is_err());
}

#[test]
fn raw_range_response_encodes_absent_next_key_as_null() {
    let response = RawRangeResponse::default();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"data":[],"next_key":null})
    );
    let decoded: RawRangeResponse = serde_json::from_value(json!({"data":null,"next_key":null})).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn optional_response_fields() {
    assert_eq!(
        serde_json::to_value(ValidatorResponse { validator: None }).unwrap(),
        json!({"validator":null})
    );
    assert_eq!(
        serde_json::to_value(DelegationResponse { delegation: None }).unwrap(),
        json!({})
    );
    assert_eq!(
        serde_json::to_value(ChannelResponse { channel: None }).unwrap(),
        json!({})
    );
    assert_eq!(
        serde_json::to_value(AllDenomMetadataResponse {
            metadata: vec![],
            next_key: None
        })
        .unwrap(),
        json!({"metadata":[]})
    );
}

#[test]
fn lists_decode_null_as_empty() {
    let response: AllBalancesResponse = serde_json::from_value(json!({"amount":null})).unwrap();
    assert!(response.amount.is_empty());
    let response: AllValidatorsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.validators.is_empty());
}

#[test]
fn value_types_use_string_amounts() {
    let response = BalanceResponse {
        amount: Coin::new(Uint128::new(1_000_000), "uatom"),
    };
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"amount":{"denom":"uatom","amount":"1000000"}})
    );

    let validator: Validator = serde_json::from_value(json!({
        "address":"cosmosvaloper1",
        "commission":"0.05",
        "max_commission":"0.2",
        "max_change_rate":"0.01"
    }))
    .unwrap();
    assert_eq!(validator.commission, Decimal::percent(5));
}

#[test]
fn ibc_channel_wire_form() {
    let channel = IbcChannel {
        endpoint: IbcEndpoint {
            port_id: "wasm.contract".into(),
            channel_id: "channel-0".into(),
        },
        counterparty_endpoint: IbcEndpoint {
            port_id: "transfer".into(),
            channel_id: "channel-7".into(),
        },
        order: IbcOrder::Unordered,
        version: "ics20-1".into(),
        connection_id: "connection-0".into(),
    };
    let value = serde_json::to_value(&channel).unwrap();
    assert_eq!(value["order"], json!("ORDER_UNORDERED"));
    assert_eq!(serde_json::from_value::<IbcChannel>(value).unwrap(), channel);
}

#[test]
fn code_info_checksum_is_hex() {
    let response = CodeInfoResponse {
        code_id: 7,
        creator: "creator".into(),
        checksum: Checksum::from([0x11; 32]),
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["checksum"], json!("11".repeat(32)));
    assert_eq!(serde_json::from_value::<CodeInfoResponse>(value).unwrap(), response);
}

#[test]
fn contract_info_omits_unset_ports() {
    let response: ContractInfoResponse = serde_json::from_value(json!({
        "code_id": 1, "creator": "creator", "pinned": false
    }))
    .unwrap();
    assert_eq!(response.admin, None);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"code_id":1,"creator":"creator","pinned":false})
    );
}
