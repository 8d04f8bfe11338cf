//! Slot-grouped assemblers for multi-key commands.
//!
//! A cluster cannot serve `MGET a b` when `a` and `b` live on different
//! shards, so these helpers split the inputs into one command per slot.  The
//! returned map is consumed by the cluster scheduler, which dispatches the
//! groups in parallel.  Input order is preserved within each group.

use std::collections::HashMap;

use crate::cmd::Completed;
use crate::commands::CommandState;
use crate::flags::CommandFlags;
use crate::slot;

fn group<'a>(
    groups: &'a mut HashMap<u16, CommandState>,
    name: &'static str,
    flags: CommandFlags,
    key: &str,
) -> &'a mut CommandState {
    let ks = slot::slot(key);
    groups.entry(ks).or_insert_with(|| {
        log::trace!("{name}: new slot group {ks}");
        CommandState::new(ks, flags).arg(name)
    })
}

fn finish(groups: HashMap<u16, CommandState>) -> HashMap<u16, Completed> {
    groups
        .into_iter()
        .map(|(ks, state)| (ks, state.into_completed()))
        .collect()
}

/// Groups `MGET key [key ...]` by key slot.
pub fn mgets<I, K>(keys: I) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut groups = HashMap::new();
    for key in keys {
        let key = key.into();
        group(&mut groups, "MGET", CommandFlags::MT_GET, &key).push_key(key);
    }
    finish(groups)
}

/// Groups `DEL key [key ...]` by key slot.
pub fn dels<I, K>(keys: I) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut groups = HashMap::new();
    for key in keys {
        let key = key.into();
        group(&mut groups, "DEL", CommandFlags::NONE, &key).push_key(key);
    }
    finish(groups)
}

/// Groups `MSET key value [key value ...]` by key slot.
///
/// Takes ordered pairs rather than a map so the caller's order survives
/// within each group.
pub fn msets<I, K, V>(pairs: I) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    mset_like("MSET", pairs)
}

/// Groups `MSETNX key value [key value ...]` by key slot.
pub fn msetnxs<I, K, V>(pairs: I) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    mset_like("MSETNX", pairs)
}

fn mset_like<I, K, V>(name: &'static str, pairs: I) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut groups = HashMap::new();
    for (key, value) in pairs {
        let key = key.into();
        let state = group(&mut groups, name, CommandFlags::NONE, &key);
        state.push_key(key);
        state.push_arg(value.into());
    }
    finish(groups)
}

/// Groups `JSON.MGET key [key ...] path` by key slot; the path lands at the
/// tail of every group.
pub fn json_mgets<I, K>(keys: I, path: &str) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut groups = HashMap::new();
    for key in keys {
        let key = key.into();
        group(&mut groups, "JSON.MGET", CommandFlags::MT_GET, &key).push_key(key);
    }
    groups
        .into_iter()
        .map(|(ks, state)| (ks, state.arg(path).into_completed()))
        .collect()
}

/// Groups `JSON.MSET key path value [key path value ...]` by key slot.
pub fn json_msets<I, K, P, V>(triples: I) -> HashMap<u16, Completed>
where
    I: IntoIterator<Item = (K, P, V)>,
    K: Into<String>,
    P: Into<String>,
    V: Into<String>,
{
    let mut groups = HashMap::new();
    for (key, path, value) in triples {
        let key = key.into();
        let state = group(&mut groups, "JSON.MSET", CommandFlags::NONE, &key);
        state.push_key(key);
        state.push_arg(path.into());
        state.push_arg(value.into());
    }
    finish(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::slot;

    #[test]
    fn mgets_groups_by_slot() {
        let keys = ["{a}1", "{b}1", "{a}2"];
        let groups = mgets(keys);
        assert_eq!(groups.len(), 2);
        let a = &groups[&slot("a")];
        assert_eq!(a.tokens(), &["MGET", "{a}1", "{a}2"]);
        assert!(a.flags().is_mt_get());
        assert_eq!(a.slot(), slot("a"));
        let b = &groups[&slot("b")];
        assert_eq!(b.tokens(), &["MGET", "{b}1"]);
    }

    #[test]
    fn mgets_disjoint_union_covers_all_keys() {
        let keys = ["q", "w", "e", "r", "t", "y"];
        let groups = mgets(keys);
        let mut collected: Vec<String> = groups
            .values()
            .flat_map(|c| c.tokens().iter().skip(1).cloned())
            .collect();
        collected.sort();
        let mut expected: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        expected.sort();
        assert_eq!(collected, expected);
    }

    #[test]
    fn msets_keeps_pairs_adjacent() {
        let groups = msets([("{s}a", "1"), ("{s}b", "2")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[&slot("s")].tokens(),
            &["MSET", "{s}a", "1", "{s}b", "2"]
        );
        assert!(groups[&slot("s")].flags().is_write());
    }

    #[test]
    fn dels_carry_no_flags() {
        let groups = dels(["k"]);
        assert_eq!(groups[&slot("k")].flags().bits(), 0);
    }

    #[test]
    fn json_mgets_appends_path_per_group() {
        let groups = json_mgets(["{a}1", "{b}1"], "$.x");
        assert_eq!(groups[&slot("a")].tokens(), &["JSON.MGET", "{a}1", "$.x"]);
        assert_eq!(groups[&slot("b")].tokens(), &["JSON.MGET", "{b}1", "$.x"]);
    }

    #[test]
    fn json_msets_triples_stay_together() {
        let groups = json_msets([("{j}1", "$", "1"), ("{j}2", "$", "2")]);
        assert_eq!(
            groups[&slot("j")].tokens(),
            &["JSON.MSET", "{j}1", "$", "1", "{j}2", "$", "2"]
        );
    }
}
