//! RediSearch module commands.
//!
//! `FT.SEARCH` modifiers are order-sensitive on the wire, so each option
//! state only offers the options still legal at its position; an option once
//! taken disappears from every later state.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    FtSearch,
    FtSearchIndex,
    FtSearchQuery,
    FtSearchNocontent,
    FtSearchVerbatim,
    FtSearchWithscores,
    FtSearchFilter,
    FtSearchInkeys,
    FtSearchReturn,
    FtSearchSortby,
    FtSearchSortbyOrder,
    FtSearchLimit,
    FtSearchParams,
    FtSearchDialect,
    FtAggregate,
    FtAggregateIndex,
    FtAggregateQuery,
    FtAggregateLoad,
    FtAggregateGroupby,
    FtAggregateReduce,
    FtAggregateSortby,
    FtAggregateLimit,
    FtAggregateDialect,
    FtConfigGet,
    FtConfigGetOption,
    FtConfigSet,
    FtConfigSetOption,
    FtConfigSetValue,
}

impl Builder {
    /// `FT.SEARCH index query [modifiers ...]`
    pub fn ft_search(self) -> FtSearch {
        FtSearch(self.cmd(CommandFlags::READONLY, &["FT.SEARCH"]))
    }

    /// `FT.AGGREGATE index query [pipeline ...]`
    pub fn ft_aggregate(self) -> FtAggregate {
        FtAggregate(self.cmd(CommandFlags::READONLY, &["FT.AGGREGATE"]))
    }

    /// `FT.CONFIG GET option`
    pub fn ft_config_get(self) -> FtConfigGet {
        FtConfigGet(self.cmd(CommandFlags::READONLY, &["FT.CONFIG", "GET"]))
    }

    /// `FT.CONFIG SET option value`
    pub fn ft_config_set(self) -> FtConfigSet {
        FtConfigSet(self.cmd(CommandFlags::NONE, &["FT.CONFIG", "SET"]))
    }
}

impl FtSearch {
    pub fn index(self, index: impl Into<String>) -> FtSearchIndex {
        FtSearchIndex(self.0.arg(index))
    }
}

impl FtSearchIndex {
    pub fn query(self, query: impl Into<String>) -> FtSearchQuery {
        FtSearchQuery(self.0.arg(query))
    }
}

keyword! {
    FtSearchQuery => nocontent ["NOCONTENT"] -> FtSearchNocontent;
    FtSearchQuery => verbatim ["VERBATIM"] -> FtSearchVerbatim;
    FtSearchNocontent => verbatim ["VERBATIM"] -> FtSearchVerbatim;
    FtSearchQuery => withscores ["WITHSCORES"] -> FtSearchWithscores;
    FtSearchNocontent => withscores ["WITHSCORES"] -> FtSearchWithscores;
    FtSearchVerbatim => withscores ["WITHSCORES"] -> FtSearchWithscores;
    FtSearchSortby => asc ["ASC"] -> FtSearchSortbyOrder;
    FtSearchSortby => desc ["DESC"] -> FtSearchSortbyOrder;
}

/// `FILTER numeric_field min max`; repeatable.
macro_rules! ft_search_filter {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn filter(self, field: impl Into<String>, min: f64, max: f64) -> FtSearchFilter {
                FtSearchFilter(self.0.arg("FILTER").arg(field).float(min).float(max))
            }
        }
    )+};
}

/// `INKEYS count key [key ...]`; the keys limit the search, they do not
/// route it, so they skip slot accumulation.
macro_rules! ft_search_inkeys {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn inkeys<I, K>(self, keys: I) -> FtSearchInkeys
            where
                I: IntoIterator<Item = K>,
                K: Into<String>,
            {
                let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
                FtSearchInkeys(self.0.arg("INKEYS").int(keys.len() as i64).args(keys))
            }
        }
    )+};
}

/// `RETURN count identifier [identifier ...]`
macro_rules! ft_search_return {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn return_fields<I, T>(self, fields: I) -> FtSearchReturn
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
                FtSearchReturn(self.0.arg("RETURN").int(fields.len() as i64).args(fields))
            }
        }
    )+};
}

/// `SORTBY attribute [ASC|DESC]`
macro_rules! ft_search_sortby {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn sortby(self, attribute: impl Into<String>) -> FtSearchSortby {
                FtSearchSortby(self.0.arg("SORTBY").arg(attribute))
            }
        }
    )+};
}

/// `LIMIT offset num`
macro_rules! ft_search_limit {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn limit(self, offset: i64, num: i64) -> FtSearchLimit {
                FtSearchLimit(self.0.arg("LIMIT").int(offset).int(num))
            }
        }
    )+};
}

/// `PARAMS nargs name value [name value ...]`
macro_rules! ft_search_params {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn params<I, N, V>(self, params: I) -> FtSearchParams
            where
                I: IntoIterator<Item = (N, V)>,
                N: Into<String>,
                V: Into<String>,
            {
                let params: Vec<(String, String)> = params
                    .into_iter()
                    .map(|(n, v)| (n.into(), v.into()))
                    .collect();
                let mut state = self.0.arg("PARAMS").int(params.len() as i64 * 2);
                for (name, value) in params {
                    state = state.arg(name).arg(value);
                }
                FtSearchParams(state)
            }
        }
    )+};
}

/// `DIALECT dialect`
macro_rules! ft_search_dialect {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn dialect(self, dialect: i64) -> FtSearchDialect {
                FtSearchDialect(self.0.arg("DIALECT").int(dialect))
            }
        }
    )+};
}

ft_search_filter! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter
}
ft_search_inkeys! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter
}
ft_search_return! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter, FtSearchInkeys
}
ft_search_sortby! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter, FtSearchInkeys, FtSearchReturn
}
ft_search_limit! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter, FtSearchInkeys, FtSearchReturn, FtSearchSortby,
    FtSearchSortbyOrder
}
ft_search_params! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter, FtSearchInkeys, FtSearchReturn, FtSearchSortby,
    FtSearchSortbyOrder, FtSearchLimit
}
ft_search_dialect! {
    FtSearchQuery, FtSearchNocontent, FtSearchVerbatim, FtSearchWithscores,
    FtSearchFilter, FtSearchInkeys, FtSearchReturn, FtSearchSortby,
    FtSearchSortbyOrder, FtSearchLimit, FtSearchParams
}

impl FtAggregate {
    pub fn index(self, index: impl Into<String>) -> FtAggregateIndex {
        FtAggregateIndex(self.0.arg(index))
    }
}

impl FtAggregateIndex {
    pub fn query(self, query: impl Into<String>) -> FtAggregateQuery {
        FtAggregateQuery(self.0.arg(query))
    }
}

/// `LOAD count identifier [identifier ...]`
macro_rules! ft_aggregate_load {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn load<I, T>(self, identifiers: I) -> FtAggregateLoad
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let identifiers: Vec<String> =
                    identifiers.into_iter().map(Into::into).collect();
                FtAggregateLoad(
                    self.0.arg("LOAD").int(identifiers.len() as i64).args(identifiers),
                )
            }
        }
    )+};
}

/// `GROUPBY nargs property [property ...]`; repeatable, each may chain
/// `REDUCE` steps.
macro_rules! ft_aggregate_groupby {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn groupby<I, T>(self, properties: I) -> FtAggregateGroupby
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let properties: Vec<String> =
                    properties.into_iter().map(Into::into).collect();
                FtAggregateGroupby(
                    self.0.arg("GROUPBY").int(properties.len() as i64).args(properties),
                )
            }
        }
    )+};
}

/// `REDUCE function nargs arg [arg ...]`; repeatable.
macro_rules! ft_aggregate_reduce {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn reduce<I, T>(self, function: impl Into<String>, args: I) -> FtAggregateReduce
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let args: Vec<String> = args.into_iter().map(Into::into).collect();
                FtAggregateReduce(
                    self.0.arg("REDUCE").arg(function).int(args.len() as i64).args(args),
                )
            }
        }
    )+};
}

/// `SORTBY nargs property [ASC|DESC] [property [ASC|DESC] ...]`
macro_rules! ft_aggregate_sortby {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn sortby<I, T>(self, args: I) -> FtAggregateSortby
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let args: Vec<String> = args.into_iter().map(Into::into).collect();
                FtAggregateSortby(self.0.arg("SORTBY").int(args.len() as i64).args(args))
            }
        }
    )+};
}

/// `LIMIT offset num`
macro_rules! ft_aggregate_limit {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn limit(self, offset: i64, num: i64) -> FtAggregateLimit {
                FtAggregateLimit(self.0.arg("LIMIT").int(offset).int(num))
            }
        }
    )+};
}

/// `DIALECT dialect`
macro_rules! ft_aggregate_dialect {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn dialect(self, dialect: i64) -> FtAggregateDialect {
                FtAggregateDialect(self.0.arg("DIALECT").int(dialect))
            }
        }
    )+};
}

ft_aggregate_load! { FtAggregateQuery }
ft_aggregate_groupby! {
    FtAggregateQuery, FtAggregateLoad, FtAggregateGroupby, FtAggregateReduce
}
ft_aggregate_reduce! { FtAggregateGroupby, FtAggregateReduce }
ft_aggregate_sortby! {
    FtAggregateQuery, FtAggregateLoad, FtAggregateGroupby, FtAggregateReduce
}
ft_aggregate_limit! {
    FtAggregateQuery, FtAggregateLoad, FtAggregateGroupby, FtAggregateReduce,
    FtAggregateSortby
}
ft_aggregate_dialect! {
    FtAggregateQuery, FtAggregateLoad, FtAggregateGroupby, FtAggregateReduce,
    FtAggregateSortby, FtAggregateLimit
}

impl FtConfigGet {
    pub fn option(self, option: impl Into<String>) -> FtConfigGetOption {
        FtConfigGetOption(self.0.arg(option))
    }
}

impl FtConfigSet {
    pub fn option(self, option: impl Into<String>) -> FtConfigSetOption {
        FtConfigSetOption(self.0.arg(option))
    }
}

impl FtConfigSetOption {
    pub fn value(self, value: impl Into<String>) -> FtConfigSetValue {
        FtConfigSetValue(self.0.arg(value))
    }
}

build_terminal! {
    FtSearchQuery,
    FtSearchNocontent,
    FtSearchVerbatim,
    FtSearchWithscores,
    FtSearchFilter,
    FtSearchInkeys,
    FtSearchReturn,
    FtSearchSortby,
    FtSearchSortbyOrder,
    FtSearchLimit,
    FtSearchParams,
    FtSearchDialect,
    FtAggregateQuery,
    FtAggregateLoad,
    FtAggregateGroupby,
    FtAggregateReduce,
    FtAggregateSortby,
    FtAggregateLimit,
    FtAggregateDialect,
    FtConfigGetOption,
    FtConfigSetValue,
}
