//! Ordered scan over a contract's raw key space.
use std::{collections::BTreeMap, ops::Bound};

use cosmwasm_std::Binary;

use crate::{
    error::QueryError,
    gas::GasMeter,
    params::GasConfig,
    query::{Order, RawRangeEntry, RawRangeQuery, RawRangeResponse},
};

/// Byte-ordered key value storage that can be iterated in both directions.
pub trait RangeStore {
    /// Entries with `start <= key < end` in the given order. A `None` bound
    /// is open. Callers guarantee `start < end` when both are set.
    fn range<'a>(
        &'a self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = (&'a [u8], &'a [u8])> + 'a>;
}

impl RangeStore for BTreeMap<Vec<u8>, Vec<u8>> {
    fn range<'a>(
        &'a self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = (&'a [u8], &'a [u8])> + 'a> {
        let bounds = (
            start.map_or(Bound::Unbounded, Bound::Included),
            end.map_or(Bound::Unbounded, Bound::Excluded),
        );
        let iter = BTreeMap::range::<[u8], _>(self, bounds)
            .map(|(key, value)| (key.as_slice(), value.as_slice()));
        match order {
            Order::Ascending => Box::new(iter),
            Order::Descending => Box::new(iter.rev()),
        }
    }
}

/// Answers a [`RawRangeQuery`] from `store`.
///
/// Reads at most `limit + 1` entries. The extra one is not returned, its key
/// becomes `next_key`. Every visited entry is charged as one iterator step.
pub fn raw_range<S: RangeStore + ?Sized>(
    store: &S,
    query: &RawRangeQuery,
    gas: &mut GasMeter,
    costs: &GasConfig,
) -> Result<RawRangeResponse, QueryError> {
    if query.is_empty_range() {
        return Ok(RawRangeResponse::default());
    }

    let limit = usize::from(query.limit);
    let mut data = Vec::with_capacity(limit);
    let mut next_key = None;

    let entries = store.range(
        query.start.as_ref().map(Binary::as_slice),
        query.end.as_ref().map(Binary::as_slice),
        query.order,
    );
    for (key, value) in entries.take(limit + 1) {
        costs.charge_iter_next(gas, key.len() + value.len())?;
        if data.len() == limit {
            next_key = Some(Binary::from(key));
            break;
        }
        data.push(RawRangeEntry::new(key, value));
    }

    Ok(RawRangeResponse { data, next_key })
}
