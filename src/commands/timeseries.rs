//! RedisTimeSeries module commands.
//!
//! `TS.MGET` selects series by label filter, not by key, so it never touches
//! the slot word and carries no readonly bit.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    TsAdd,
    TsAddKey,
    TsAddTimestamp,
    TsAddValue,
    TsAddRetention,
    TsAddEncoding,
    TsAddChunkSize,
    TsAddOnDuplicate,
    TsAddLabels,
    TsCreate,
    TsCreateKey,
    TsCreateRetention,
    TsCreateEncoding,
    TsCreateChunkSize,
    TsCreateDuplicatePolicy,
    TsCreateLabels,
    TsGet,
    TsGetKey,
    TsGetLatest,
    TsMget,
    TsMgetLatest,
    TsMgetWithlabels,
    TsMgetFilter,
    TsRange,
    TsRangeKey,
    TsRangeFrom,
    TsRangeTo,
    TsRangeFilterByValue,
    TsRangeCount,
    TsRangeAlign,
    TsRangeAggregation,
    TsRangeBucketDuration,
}

impl Builder {
    /// `TS.ADD key timestamp value [RETENTION] [ENCODING] [CHUNK_SIZE] [ON_DUPLICATE policy] [LABELS ...]`
    pub fn ts_add(self) -> TsAdd {
        TsAdd(self.cmd(CommandFlags::NONE, &["TS.ADD"]))
    }

    /// `TS.CREATE key [RETENTION] [ENCODING] [CHUNK_SIZE] [DUPLICATE_POLICY policy] [LABELS ...]`
    pub fn ts_create(self) -> TsCreate {
        TsCreate(self.cmd(CommandFlags::NONE, &["TS.CREATE"]))
    }

    /// `TS.GET key [LATEST]`
    pub fn ts_get(self) -> TsGet {
        TsGet(self.cmd(CommandFlags::READONLY, &["TS.GET"]))
    }

    /// `TS.MGET [LATEST] [WITHLABELS|SELECTED_LABELS label ...] FILTER filter [filter ...]`
    pub fn ts_mget(self) -> TsMget {
        TsMget(self.cmd(CommandFlags::NONE, &["TS.MGET"]))
    }

    /// `TS.RANGE key from to [FILTER_BY_VALUE] [COUNT] [ALIGN] [AGGREGATION aggregator bucket]`
    pub fn ts_range(self) -> TsRange {
        TsRange(self.cmd(CommandFlags::READONLY, &["TS.RANGE"]))
    }
}

impl TsAdd {
    pub fn key(self, key: impl Into<String>) -> TsAddKey {
        TsAddKey(self.0.key(key))
    }
}

impl TsAddKey {
    /// The sample timestamp, or `*` for the server clock.
    pub fn timestamp(self, timestamp: impl Into<String>) -> TsAddTimestamp {
        TsAddTimestamp(self.0.arg(timestamp))
    }
}

impl TsAddTimestamp {
    pub fn value(self, value: f64) -> TsAddValue {
        TsAddValue(self.0.float(value))
    }
}

macro_rules! ts_retention {
    ($($from:ident -> $to:ident;)+) => {$(
        impl $from {
            pub fn retention(self, milliseconds: i64) -> $to {
                $to(self.0.arg("RETENTION").int(milliseconds))
            }
        }
    )+};
}

ts_retention! {
    TsAddValue -> TsAddRetention;
    TsCreateKey -> TsCreateRetention;
}

keyword! {
    TsAddValue => compressed ["ENCODING", "COMPRESSED"] -> TsAddEncoding;
    TsAddValue => uncompressed ["ENCODING", "UNCOMPRESSED"] -> TsAddEncoding;
    TsAddRetention => compressed ["ENCODING", "COMPRESSED"] -> TsAddEncoding;
    TsAddRetention => uncompressed ["ENCODING", "UNCOMPRESSED"] -> TsAddEncoding;
    TsCreateKey => compressed ["ENCODING", "COMPRESSED"] -> TsCreateEncoding;
    TsCreateKey => uncompressed ["ENCODING", "UNCOMPRESSED"] -> TsCreateEncoding;
    TsCreateRetention => compressed ["ENCODING", "COMPRESSED"] -> TsCreateEncoding;
    TsCreateRetention => uncompressed ["ENCODING", "UNCOMPRESSED"] -> TsCreateEncoding;
}

macro_rules! ts_chunk_size {
    ($($from:ident -> $to:ident;)+) => {$(
        impl $from {
            pub fn chunk_size(self, bytes: i64) -> $to {
                $to(self.0.arg("CHUNK_SIZE").int(bytes))
            }
        }
    )+};
}

ts_chunk_size! {
    TsAddValue -> TsAddChunkSize;
    TsAddRetention -> TsAddChunkSize;
    TsAddEncoding -> TsAddChunkSize;
    TsCreateKey -> TsCreateChunkSize;
    TsCreateRetention -> TsCreateChunkSize;
    TsCreateEncoding -> TsCreateChunkSize;
}

macro_rules! ts_duplicate_policy {
    ($token:literal => $($from:ident -> $to:ident;)+) => {$(
        impl $from {
            pub fn on_duplicate_block(self) -> $to {
                $to(self.0.arg($token).arg("BLOCK"))
            }

            pub fn on_duplicate_first(self) -> $to {
                $to(self.0.arg($token).arg("FIRST"))
            }

            pub fn on_duplicate_last(self) -> $to {
                $to(self.0.arg($token).arg("LAST"))
            }

            pub fn on_duplicate_min(self) -> $to {
                $to(self.0.arg($token).arg("MIN"))
            }

            pub fn on_duplicate_max(self) -> $to {
                $to(self.0.arg($token).arg("MAX"))
            }

            pub fn on_duplicate_sum(self) -> $to {
                $to(self.0.arg($token).arg("SUM"))
            }
        }
    )+};
}

ts_duplicate_policy! { "ON_DUPLICATE" =>
    TsAddValue -> TsAddOnDuplicate;
    TsAddRetention -> TsAddOnDuplicate;
    TsAddEncoding -> TsAddOnDuplicate;
    TsAddChunkSize -> TsAddOnDuplicate;
}

ts_duplicate_policy! { "DUPLICATE_POLICY" =>
    TsCreateKey -> TsCreateDuplicatePolicy;
    TsCreateRetention -> TsCreateDuplicatePolicy;
    TsCreateEncoding -> TsCreateDuplicatePolicy;
    TsCreateChunkSize -> TsCreateDuplicatePolicy;
}

keyword! {
    TsAddValue => labels ["LABELS"] -> TsAddLabels;
    TsAddRetention => labels ["LABELS"] -> TsAddLabels;
    TsAddEncoding => labels ["LABELS"] -> TsAddLabels;
    TsAddChunkSize => labels ["LABELS"] -> TsAddLabels;
    TsAddOnDuplicate => labels ["LABELS"] -> TsAddLabels;
    TsCreateKey => labels ["LABELS"] -> TsCreateLabels;
    TsCreateRetention => labels ["LABELS"] -> TsCreateLabels;
    TsCreateEncoding => labels ["LABELS"] -> TsCreateLabels;
    TsCreateChunkSize => labels ["LABELS"] -> TsCreateLabels;
    TsCreateDuplicatePolicy => labels ["LABELS"] -> TsCreateLabels;
}

macro_rules! ts_label_pair {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn label(self, label: impl Into<String>, value: impl Into<String>) -> $state {
                $state(self.0.arg(label).arg(value))
            }
        }
    )+};
}

ts_label_pair! { TsAddLabels, TsCreateLabels }

impl TsCreate {
    pub fn key(self, key: impl Into<String>) -> TsCreateKey {
        TsCreateKey(self.0.key(key))
    }
}

impl TsGet {
    pub fn key(self, key: impl Into<String>) -> TsGetKey {
        TsGetKey(self.0.key(key))
    }
}

keyword! {
    TsGetKey => latest ["LATEST"] -> TsGetLatest;
    TsMget => latest ["LATEST"] -> TsMgetLatest;
    TsMget => withlabels ["WITHLABELS"] -> TsMgetWithlabels;
    TsMgetLatest => withlabels ["WITHLABELS"] -> TsMgetWithlabels;
}

macro_rules! ts_mget_selected_labels {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn selected_labels<I, T>(self, labels: I) -> TsMgetWithlabels
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                TsMgetWithlabels(self.0.arg("SELECTED_LABELS").args(labels))
            }
        }
    )+};
}

ts_mget_selected_labels! { TsMget, TsMgetLatest }

macro_rules! ts_mget_filter {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn filter<I, T>(self, filters: I) -> TsMgetFilter
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                TsMgetFilter(self.0.arg("FILTER").args(filters))
            }
        }
    )+};
}

ts_mget_filter! { TsMget, TsMgetLatest, TsMgetWithlabels, TsMgetFilter }

impl TsRange {
    pub fn key(self, key: impl Into<String>) -> TsRangeKey {
        TsRangeKey(self.0.key(key))
    }
}

impl TsRangeKey {
    /// The range start, or `-` for the earliest sample.
    pub fn from(self, from: impl Into<String>) -> TsRangeFrom {
        TsRangeFrom(self.0.arg(from))
    }
}

impl TsRangeFrom {
    /// The range end, or `+` for the latest sample.
    pub fn to(self, to: impl Into<String>) -> TsRangeTo {
        TsRangeTo(self.0.arg(to))
    }
}

macro_rules! ts_range_filter_by_value {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn filter_by_value(self, min: f64, max: f64) -> TsRangeFilterByValue {
                TsRangeFilterByValue(self.0.arg("FILTER_BY_VALUE").float(min).float(max))
            }
        }
    )+};
}

ts_range_filter_by_value! { TsRangeTo }

macro_rules! ts_range_count {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn count(self, count: i64) -> TsRangeCount {
                TsRangeCount(self.0.arg("COUNT").int(count))
            }
        }
    )+};
}

ts_range_count! { TsRangeTo, TsRangeFilterByValue }

macro_rules! ts_range_align {
    ($($state:ident),+) => {$(
        impl $state {
            /// `ALIGN value`, where value is a timestamp, `-`, or `+`.
            pub fn align(self, value: impl Into<String>) -> TsRangeAlign {
                TsRangeAlign(self.0.arg("ALIGN").arg(value))
            }
        }
    )+};
}

ts_range_align! { TsRangeTo, TsRangeFilterByValue, TsRangeCount }

macro_rules! ts_range_aggregation {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn aggregation_avg(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("AVG"))
            }

            pub fn aggregation_sum(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("SUM"))
            }

            pub fn aggregation_min(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("MIN"))
            }

            pub fn aggregation_max(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("MAX"))
            }

            pub fn aggregation_count(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("COUNT"))
            }

            pub fn aggregation_first(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("FIRST"))
            }

            pub fn aggregation_last(self) -> TsRangeAggregation {
                TsRangeAggregation(self.0.arg("AGGREGATION").arg("LAST"))
            }
        }
    )+};
}

ts_range_aggregation! { TsRangeTo, TsRangeFilterByValue, TsRangeCount, TsRangeAlign }

impl TsRangeAggregation {
    /// An aggregation is incomplete without its bucket width.
    pub fn bucket_duration(self, milliseconds: i64) -> TsRangeBucketDuration {
        TsRangeBucketDuration(self.0.int(milliseconds))
    }
}

build_terminal! {
    TsAddValue,
    TsAddRetention,
    TsAddEncoding,
    TsAddChunkSize,
    TsAddOnDuplicate,
    TsAddLabels,
    TsCreateKey,
    TsCreateRetention,
    TsCreateEncoding,
    TsCreateChunkSize,
    TsCreateDuplicatePolicy,
    TsCreateLabels,
    TsGetKey,
    TsGetLatest,
    TsMgetFilter,
    TsRangeTo,
    TsRangeFilterByValue,
    TsRangeCount,
    TsRangeAlign,
    TsRangeBucketDuration,
}
