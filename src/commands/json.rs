//! RedisJSON module commands.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    JsonGet,
    JsonGetKey,
    JsonGetPath,
    JsonSet,
    JsonSetKey,
    JsonSetPath,
    JsonSetValue,
    JsonSetCondition,
    JsonDel,
    JsonDelKey,
    JsonDelPath,
    JsonMget,
    JsonMgetKey,
    JsonMgetPath,
    JsonMset,
    JsonMsetTriplet,
    JsonType,
    JsonTypeKey,
    JsonTypePath,
}

impl Builder {
    /// `JSON.GET key [path ...]`
    pub fn json_get(self) -> JsonGet {
        JsonGet(self.cmd(CommandFlags::READONLY, &["JSON.GET"]))
    }

    /// `JSON.SET key path value [NX|XX]`
    pub fn json_set(self) -> JsonSet {
        JsonSet(self.cmd(CommandFlags::NONE, &["JSON.SET"]))
    }

    /// `JSON.DEL key [path]`
    pub fn json_del(self) -> JsonDel {
        JsonDel(self.cmd(CommandFlags::NONE, &["JSON.DEL"]))
    }

    /// `JSON.MGET key [key ...] path`
    pub fn json_mget(self) -> JsonMget {
        JsonMget(self.cmd(CommandFlags::MT_GET, &["JSON.MGET"]))
    }

    /// `JSON.MSET key path value [key path value ...]`
    pub fn json_mset(self) -> JsonMset {
        JsonMset(self.cmd(CommandFlags::NONE, &["JSON.MSET"]))
    }

    /// `JSON.TYPE key [path]`
    pub fn json_type(self) -> JsonType {
        JsonType(self.cmd(CommandFlags::READONLY, &["JSON.TYPE"]))
    }
}

impl JsonGet {
    pub fn key(self, key: impl Into<String>) -> JsonGetKey {
        JsonGetKey(self.0.key(key))
    }
}

impl JsonGetKey {
    pub fn path(self, path: impl Into<String>) -> JsonGetPath {
        JsonGetPath(self.0.arg(path))
    }
}

impl JsonGetPath {
    pub fn path(self, path: impl Into<String>) -> JsonGetPath {
        JsonGetPath(self.0.arg(path))
    }
}

impl JsonSet {
    pub fn key(self, key: impl Into<String>) -> JsonSetKey {
        JsonSetKey(self.0.key(key))
    }
}

impl JsonSetKey {
    pub fn path(self, path: impl Into<String>) -> JsonSetPath {
        JsonSetPath(self.0.arg(path))
    }
}

impl JsonSetPath {
    pub fn value(self, value: impl Into<String>) -> JsonSetValue {
        JsonSetValue(self.0.arg(value))
    }
}

keyword! {
    JsonSetValue => nx ["NX"] -> JsonSetCondition;
    JsonSetValue => xx ["XX"] -> JsonSetCondition;
}

impl JsonDel {
    pub fn key(self, key: impl Into<String>) -> JsonDelKey {
        JsonDelKey(self.0.key(key))
    }
}

impl JsonDelKey {
    pub fn path(self, path: impl Into<String>) -> JsonDelPath {
        JsonDelPath(self.0.arg(path))
    }
}

impl JsonMget {
    pub fn key<I, K>(self, keys: I) -> JsonMgetKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        JsonMgetKey(self.0.keys(keys))
    }
}

impl JsonMgetKey {
    pub fn key<I, K>(self, keys: I) -> JsonMgetKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        JsonMgetKey(self.0.keys(keys))
    }

    /// The single trailing path applied to every key.
    pub fn path(self, path: impl Into<String>) -> JsonMgetPath {
        JsonMgetPath(self.0.arg(path))
    }
}

impl JsonMset {
    pub fn key_path_value(
        self,
        key: impl Into<String>,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> JsonMsetTriplet {
        JsonMsetTriplet(self.0.key(key).arg(path).arg(value))
    }
}

impl JsonMsetTriplet {
    pub fn key_path_value(
        self,
        key: impl Into<String>,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> JsonMsetTriplet {
        JsonMsetTriplet(self.0.key(key).arg(path).arg(value))
    }
}

impl JsonType {
    pub fn key(self, key: impl Into<String>) -> JsonTypeKey {
        JsonTypeKey(self.0.key(key))
    }
}

impl JsonTypeKey {
    pub fn path(self, path: impl Into<String>) -> JsonTypePath {
        JsonTypePath(self.0.arg(path))
    }
}

build_terminal! {
    JsonGetKey,
    JsonGetPath,
    JsonSetValue,
    JsonSetCondition,
    JsonDelKey,
    JsonDelPath,
    JsonMgetPath,
    JsonMsetTriplet,
    JsonTypeKey,
    JsonTypePath,
}

cache_terminal! {
    JsonGetKey,
    JsonGetPath,
    JsonMgetPath,
    JsonTypeKey,
    JsonTypePath,
}
