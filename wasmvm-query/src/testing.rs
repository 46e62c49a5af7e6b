//! In-memory responders simulating a host chain.
//!
//! Useful for exercising guests and dispatchers without a running node. Each
//! responder charges gas from its [`GasConfig`] the way a KV store backed
//! keeper would.
use std::{collections::BTreeMap, ops::Bound};

use cosmwasm_std::{Binary, Decimal256, Uint128};

use crate::{
    error::{QueryError, SystemError},
    gas::GasMeter,
    params::{GasConfig, QuerierParams},
    query::*,
    range::raw_range,
    router::{
        BankResponder, DistributionResponder, GrpcResponder, IbcResponder,
        StakingResponder, WasmResponder,
    },
    types::{
        Coin, DecCoin, DelegatorReward, DenomMetadata, FullDelegation, IbcChannel, Validator,
    },
};

/// Bank balances and denom metadata. Unknown accounts hold nothing, so
/// their balance is zero rather than an error.
#[derive(Debug, Clone)]
pub struct MockBank {
    pub gas: GasConfig,
    pub default_page_limit: u32,
    balances: BTreeMap<String, BTreeMap<String, Uint128>>,
    metadata: BTreeMap<String, DenomMetadata>,
}

impl Default for MockBank {
    fn default() -> Self {
        Self::new(&QuerierParams::default())
    }
}

impl MockBank {
    /// Empty bank charging gas and paging as configured in `params`.
    pub fn new(params: &QuerierParams) -> Self {
        Self {
            gas: params.gas,
            default_page_limit: params.default_page_limit,
            balances: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_balance(mut self, address: impl Into<String>, coins: impl IntoIterator<Item = Coin>) -> Self {
        let account = self.balances.entry(address.into()).or_default();
        for Coin { denom, amount } in coins {
            account.insert(denom, amount);
        }
        self
    }

    /// Registers metadata keyed by its `base` denomination.
    pub fn with_metadata(mut self, metadata: DenomMetadata) -> Self {
        self.metadata.insert(metadata.base.clone(), metadata);
        self
    }

    fn account(&self, address: &str) -> Option<&BTreeMap<String, Uint128>> {
        self.balances.get(address)
    }
}

impl BankResponder for MockBank {
    fn supply(&self, query: &SupplyQuery, gas: &mut GasMeter) -> Result<SupplyResponse, QueryError> {
        let mut total = Uint128::zero();
        for account in self.balances.values() {
            gas.consume(self.gas.iter_next_cost_flat, "supply iter")?;
            if let Some(amount) = account.get(&query.denom) {
                total = total
                    .checked_add(*amount)
                    .map_err(|e| QueryError::failed(e.to_string()))?;
            }
        }
        Ok(SupplyResponse {
            amount: Coin::new(total, query.denom.clone()),
        })
    }

    fn balance(&self, query: &BalanceQuery, gas: &mut GasMeter) -> Result<BalanceResponse, QueryError> {
        let amount = self
            .account(&query.address)
            .and_then(|account| account.get(&query.denom))
            .copied()
            .unwrap_or_default();
        self.gas.charge_read(gas, 16)?;
        Ok(BalanceResponse {
            amount: Coin::new(amount, query.denom.clone()),
        })
    }

    fn all_balances(
        &self,
        query: &AllBalancesQuery,
        gas: &mut GasMeter,
    ) -> Result<AllBalancesResponse, QueryError> {
        let mut amount = Vec::new();
        for (denom, value) in self.account(&query.address).into_iter().flatten() {
            self.gas.charge_iter_next(gas, denom.len() + 16)?;
            if !value.is_zero() {
                amount.push(Coin::new(*value, denom.clone()));
            }
        }
        Ok(AllBalancesResponse { amount })
    }

    fn denom_metadata(
        &self,
        query: &DenomMetadataQuery,
        gas: &mut GasMeter,
    ) -> Result<DenomMetadataResponse, QueryError> {
        self.gas.charge_read(gas, query.denom.len())?;
        let metadata = self
            .metadata
            .get(&query.denom)
            .cloned()
            .ok_or_else(|| QueryError::failed(format!("client metadata for denom {}", query.denom)))?;
        Ok(DenomMetadataResponse { metadata })
    }

    fn all_denom_metadata(
        &self,
        query: &AllDenomMetadataQuery,
        gas: &mut GasMeter,
    ) -> Result<AllDenomMetadataResponse, QueryError> {
        let page = query.pagination.clone().unwrap_or_default();
        let limit = match page.limit {
            0 => self.default_page_limit,
            limit => limit,
        };
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let start = page
            .key
            .map(|key| String::from_utf8(key.to_vec()))
            .transpose()
            .map_err(|_| QueryError::failed("invalid pagination key"))?;

        let entries: Box<dyn Iterator<Item = (&String, &DenomMetadata)>> = match (&start, page.reverse) {
            (None, false) => Box::new(self.metadata.iter()),
            (None, true) => Box::new(self.metadata.iter().rev()),
            (Some(key), false) => Box::new(
                self.metadata
                    .range::<str, _>((Bound::Included(key.as_str()), Bound::Unbounded)),
            ),
            (Some(key), true) => Box::new(
                self.metadata
                    .range::<str, _>((Bound::Unbounded, Bound::Included(key.as_str())))
                    .rev(),
            ),
        };

        let mut metadata = Vec::new();
        let mut next_key = None;
        for (base, entry) in entries.take(limit.saturating_add(1)) {
            self.gas.charge_iter_next(gas, base.len())?;
            if metadata.len() == limit {
                next_key = Some(Binary::from(base.as_bytes()));
                break;
            }
            metadata.push(entry.clone());
        }

        Ok(AllDenomMetadataResponse { metadata, next_key })
    }
}

/// Channels bound to a single contract port.
#[derive(Debug, Clone)]
pub struct MockIbc {
    pub port_id: String,
    pub channels: Vec<IbcChannel>,
}

impl MockIbc {
    pub fn new(port_id: impl Into<String>, channels: Vec<IbcChannel>) -> Self {
        Self {
            port_id: port_id.into(),
            channels,
        }
    }

    fn port<'a>(&'a self, port_id: &'a Option<String>) -> &'a str {
        port_id.as_deref().unwrap_or(&self.port_id)
    }
}

impl IbcResponder for MockIbc {
    fn port_id(&self, _query: &PortIdQuery, _gas: &mut GasMeter) -> Result<PortIdResponse, QueryError> {
        Ok(PortIdResponse {
            port_id: self.port_id.clone(),
        })
    }

    fn list_channels(
        &self,
        query: &ListChannelsQuery,
        _gas: &mut GasMeter,
    ) -> Result<ListChannelsResponse, QueryError> {
        let port = self.port(&query.port_id);
        let channels = self
            .channels
            .iter()
            .filter(|channel| channel.endpoint.port_id == port)
            .cloned()
            .collect();
        Ok(ListChannelsResponse { channels })
    }

    fn channel(&self, query: &ChannelQuery, _gas: &mut GasMeter) -> Result<ChannelResponse, QueryError> {
        let port = self.port(&query.port_id);
        let channel = self
            .channels
            .iter()
            .find(|channel| {
                channel.endpoint.port_id == port && channel.endpoint.channel_id == query.channel_id
            })
            .cloned();
        Ok(ChannelResponse { channel })
    }
}

#[derive(Debug, Clone)]
pub struct MockStaking {
    pub gas: GasConfig,
    pub denom: String,
    pub validators: Vec<Validator>,
    pub delegations: Vec<FullDelegation>,
}

impl MockStaking {
    pub fn new(denom: impl Into<String>, validators: Vec<Validator>, delegations: Vec<FullDelegation>) -> Self {
        Self {
            gas: GasConfig::default(),
            denom: denom.into(),
            validators,
            delegations,
        }
    }
}

impl StakingResponder for MockStaking {
    fn all_validators(
        &self,
        _query: &AllValidatorsQuery,
        gas: &mut GasMeter,
    ) -> Result<AllValidatorsResponse, QueryError> {
        for validator in &self.validators {
            self.gas.charge_iter_next(gas, validator.address.len())?;
        }
        Ok(AllValidatorsResponse {
            validators: self.validators.clone(),
        })
    }

    fn validator(&self, query: &ValidatorQuery, gas: &mut GasMeter) -> Result<ValidatorResponse, QueryError> {
        self.gas.charge_read(gas, query.address.len())?;
        let validator = self
            .validators
            .iter()
            .find(|validator| validator.address == query.address)
            .cloned();
        Ok(ValidatorResponse { validator })
    }

    fn all_delegations(
        &self,
        query: &AllDelegationsQuery,
        gas: &mut GasMeter,
    ) -> Result<AllDelegationsResponse, QueryError> {
        let mut delegations = Vec::new();
        for delegation in self.delegations.iter().filter(|d| d.delegator == query.delegator) {
            self.gas.charge_iter_next(gas, delegation.validator.len())?;
            delegations.push(delegation.clone().into());
        }
        Ok(AllDelegationsResponse { delegations })
    }

    fn delegation(
        &self,
        query: &DelegationQuery,
        gas: &mut GasMeter,
    ) -> Result<DelegationResponse, QueryError> {
        self.gas
            .charge_read(gas, query.delegator.len() + query.validator.len())?;
        let delegation = self
            .delegations
            .iter()
            .find(|d| d.delegator == query.delegator && d.validator == query.validator)
            .cloned();
        Ok(DelegationResponse { delegation })
    }

    fn bonded_denom(
        &self,
        _query: &BondedDenomQuery,
        _gas: &mut GasMeter,
    ) -> Result<BondedDenomResponse, QueryError> {
        Ok(BondedDenomResponse {
            denom: self.denom.clone(),
        })
    }
}

/// Distribution state: withdraw addresses and outstanding rewards per
/// delegator/validator pair.
#[derive(Debug, Clone, Default)]
pub struct MockDistribution {
    pub gas: GasConfig,
    withdraw_addresses: BTreeMap<String, String>,
    rewards: BTreeMap<String, BTreeMap<String, Vec<DecCoin>>>,
}

impl MockDistribution {
    pub fn with_withdraw_address(
        mut self,
        delegator: impl Into<String>,
        withdraw: impl Into<String>,
    ) -> Self {
        self.withdraw_addresses.insert(delegator.into(), withdraw.into());
        self
    }

    pub fn with_rewards(
        mut self,
        delegator: impl Into<String>,
        validator: impl Into<String>,
        rewards: Vec<DecCoin>,
    ) -> Self {
        self.rewards
            .entry(delegator.into())
            .or_default()
            .insert(validator.into(), rewards);
        self
    }

    fn delegations(&self, delegator: &str) -> impl Iterator<Item = (&String, &Vec<DecCoin>)> {
        self.rewards.get(delegator).into_iter().flatten()
    }
}

impl DistributionResponder for MockDistribution {
    fn delegator_withdraw_address(
        &self,
        query: &DelegatorWithdrawAddressQuery,
        gas: &mut GasMeter,
    ) -> Result<DelegatorWithdrawAddressResponse, QueryError> {
        self.gas.charge_read(gas, query.delegator_address.len())?;
        // Rewards go to the delegator itself unless another address was set.
        let withdraw_address = self
            .withdraw_addresses
            .get(&query.delegator_address)
            .unwrap_or(&query.delegator_address)
            .clone();
        Ok(DelegatorWithdrawAddressResponse { withdraw_address })
    }

    fn delegation_rewards(
        &self,
        query: &DelegationRewardsQuery,
        gas: &mut GasMeter,
    ) -> Result<DelegationRewardsResponse, QueryError> {
        self.gas.charge_read(gas, query.validator_address.len())?;
        let rewards = self
            .rewards
            .get(&query.delegator_address)
            .and_then(|validators| validators.get(&query.validator_address))
            .cloned()
            .ok_or_else(|| QueryError::failed("no delegation for (address, validator) tuple"))?;
        Ok(DelegationRewardsResponse { rewards })
    }

    fn delegation_total_rewards(
        &self,
        query: &DelegationTotalRewardsQuery,
        gas: &mut GasMeter,
    ) -> Result<DelegationTotalRewardsResponse, QueryError> {
        let mut rewards = Vec::new();
        let mut total = BTreeMap::<String, Decimal256>::new();
        for (validator, reward) in self.delegations(&query.delegator_address) {
            self.gas.charge_iter_next(gas, validator.len())?;
            for coin in reward {
                let sum = total.entry(coin.denom.clone()).or_default();
                *sum = sum
                    .checked_add(coin.amount)
                    .map_err(|e| QueryError::failed(e.to_string()))?;
            }
            rewards.push(DelegatorReward {
                reward: reward.clone(),
                validator_address: validator.clone(),
            });
        }
        let total = total
            .into_iter()
            .map(|(denom, amount)| DecCoin::new(amount, denom))
            .collect();
        Ok(DelegationTotalRewardsResponse { rewards, total })
    }

    fn delegator_validators(
        &self,
        query: &DelegatorValidatorsQuery,
        gas: &mut GasMeter,
    ) -> Result<DelegatorValidatorsResponse, QueryError> {
        let mut validators = Vec::new();
        for (validator, _) in self.delegations(&query.delegator_address) {
            self.gas.charge_iter_next(gas, validator.len())?;
            validators.push(validator.clone());
        }
        Ok(DelegatorValidatorsResponse { validators })
    }
}

/// Canned protobuf responses keyed by query path. Stargate and gRPC queries
/// share the table.
#[derive(Debug, Clone, Default)]
pub struct MockGrpc {
    pub gas: GasConfig,
    responses: BTreeMap<String, Binary>,
}

impl MockGrpc {
    pub fn with_response(mut self, path: impl Into<String>, response: impl Into<Binary>) -> Self {
        self.responses.insert(path.into(), response.into());
        self
    }

    fn answer(&self, path: &str, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        let response = self
            .responses
            .get(path)
            .cloned()
            .ok_or_else(|| QueryError::unsupported(format!("'{path}' path is not supported")))?;
        self.gas.charge_read(gas, response.len())?;
        Ok(response)
    }
}

impl GrpcResponder for MockGrpc {
    fn stargate(&self, query: &StargateQuery, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        self.answer(&query.path, gas)
    }

    fn grpc(&self, query: &GrpcQuery, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        self.answer(&query.path, gas)
    }
}

#[derive(Debug, Clone)]
pub struct MockContract {
    pub info: ContractInfoResponse,
    pub storage: BTreeMap<Vec<u8>, Vec<u8>>,
    /// Responses to smart queries keyed by the exact message bytes.
    pub smart_responses: BTreeMap<Vec<u8>, Binary>,
}

impl MockContract {
    pub fn new(code_id: u64, creator: impl Into<String>) -> Self {
        Self {
            info: ContractInfoResponse {
                code_id,
                creator: creator.into(),
                admin: None,
                pinned: false,
                ibc_port: None,
                ibc2_port: None,
            },
            storage: BTreeMap::new(),
            smart_responses: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.storage.insert(key.into(), value.into());
        self
    }

    pub fn with_smart_response(mut self, msg: impl Into<Vec<u8>>, response: impl Into<Binary>) -> Self {
        self.smart_responses.insert(msg.into(), response.into());
        self
    }
}

/// Contracts and stored codes.
#[derive(Debug, Clone, Default)]
pub struct MockWasm {
    pub gas: GasConfig,
    contracts: BTreeMap<String, MockContract>,
    codes: BTreeMap<u64, CodeInfoResponse>,
}

impl MockWasm {
    pub fn with_contract(mut self, addr: impl Into<String>, contract: MockContract) -> Self {
        self.contracts.insert(addr.into(), contract);
        self
    }

    pub fn with_code(mut self, code: CodeInfoResponse) -> Self {
        self.codes.insert(code.code_id, code);
        self
    }

    fn contract(&self, addr: &str, gas: &mut GasMeter) -> Result<&MockContract, QueryError> {
        gas.consume(self.gas.read_cost_flat, "contract lookup")?;
        self.contracts
            .get(addr)
            .ok_or_else(|| QueryError::no_such_contract(addr))
    }
}

impl WasmResponder for MockWasm {
    fn smart(&self, query: &SmartQuery, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        let contract = self.contract(&query.contract_addr, gas)?;
        contract
            .smart_responses
            .get(query.msg.as_slice())
            .cloned()
            .ok_or_else(|| {
                QueryError::failed(format!("unknown query for contract {}", query.contract_addr))
            })
    }

    fn raw(&self, query: &RawQuery, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        let contract = self.contract(&query.contract_addr, gas)?;
        let value = contract
            .storage
            .get(query.key.as_slice())
            .map(|value| Binary::from(value.as_slice()))
            .unwrap_or_default();
        self.gas.charge_read(gas, value.len())?;
        Ok(value)
    }

    fn contract_info(
        &self,
        query: &ContractInfoQuery,
        gas: &mut GasMeter,
    ) -> Result<ContractInfoResponse, QueryError> {
        Ok(self.contract(&query.contract_addr, gas)?.info.clone())
    }

    fn code_info(&self, query: &CodeInfoQuery, gas: &mut GasMeter) -> Result<CodeInfoResponse, QueryError> {
        gas.consume(self.gas.read_cost_flat, "code lookup")?;
        self.codes
            .get(&query.code_id)
            .cloned()
            .ok_or(QueryError::System(SystemError::NoSuchCode {
                code_id: query.code_id,
            }))
    }

    fn raw_range(&self, query: &RawRangeQuery, gas: &mut GasMeter) -> Result<RawRangeResponse, QueryError> {
        let contract = self.contract(&query.contract_addr, gas)?;
        raw_range(&contract.storage, query, gas, &self.gas)
    }
}
