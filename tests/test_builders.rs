//! End-to-end checks of the builder surface: token sequences, flag words,
//! slot accumulation, caching context, and fan-out grouping.

use redis_cmds::{fanout, predefined, slot, Builder, CommandFlags, Completed, InitialSlot};

fn root() -> Builder {
    Builder::new(InitialSlot::InitSlot)
}

#[test]
fn first_token_is_the_command_name() {
    let cases: Vec<(Completed, &str)> = vec![
        (root().get().key("k").build(), "GET"),
        (root().del().key(["k"]).build(), "DEL"),
        (root().pfadd().key("k").build(), "PFADD"),
        (root().subscribe().channel(["c"]).build(), "SUBSCRIBE"),
        (
            root().ft_search().index("i").query("q").build(),
            "FT.SEARCH",
        ),
        (root().json_get().key("k").build(), "JSON.GET"),
        (
            root().eval().script("return 1").numkeys(0).build(),
            "EVAL",
        ),
        (
            root().xadd().key("s").id("*").field_value("f", "v").build(),
            "XADD",
        ),
        (root().ts_get().key("k").build(), "TS.GET"),
    ];
    for (cmd, name) in cases {
        assert_eq!(cmd.tokens()[0], name);
    }
}

#[test]
fn tagged_multi_key_command_routes_to_one_slot() {
    let cmd = root().pfcount().key(["{u}a", "{u}b"]).build();
    assert_eq!(cmd.tokens(), &["PFCOUNT", "{u}a", "{u}b"]);
    assert!(cmd.flags().is_read_only());
    assert_eq!(cmd.slot(), slot::slot("u"));
}

#[test]
#[should_panic(expected = "multi key command with different key slots are not allowed")]
fn divergent_keys_abort_before_build() {
    root().pfcount().key(["a", "b"]);
}

#[test]
fn ft_search_matches_server_grammar() {
    let cmd = root()
        .ft_search()
        .index("idx")
        .query("hello")
        .limit(0, 10)
        .dialect(2)
        .build();
    assert_eq!(
        cmd.tokens(),
        &["FT.SEARCH", "idx", "hello", "LIMIT", "0", "10", "DIALECT", "2"]
    );
    assert!(cmd.flags().is_read_only());
}

#[test]
fn mget_fanout_splits_by_slot_and_keeps_order() {
    let keys = ["{g1}a", "{g2}b", "{g1}c"];
    let groups = fanout::mgets(keys);
    assert_eq!(groups.len(), 2);
    assert_eq!(
        groups[&slot::slot("g1")].tokens(),
        &["MGET", "{g1}a", "{g1}c"]
    );
    assert_eq!(groups[&slot::slot("g2")].tokens(), &["MGET", "{g2}b"]);
    for group in groups.values() {
        assert!(group.flags().is_mt_get());
        assert!(group.flags().is_read_only());
    }
}

#[test]
fn eval_ro_cache_scope() {
    let c = root()
        .eval_ro()
        .script("script")
        .numkeys(1)
        .key(["k"])
        .arg(["a"])
        .cache();
    assert_eq!(c.cache_key(), ("k", "EVAL_ROscript1a".to_string()));
}

#[test]
fn snapshots_are_shareable_across_threads() {
    let cmd = root().get().key("k").build();
    let clone = cmd.clone();
    let handle = std::thread::spawn(move || clone.tokens().join(" "));
    assert_eq!(handle.join().unwrap(), "GET k");
    assert_eq!(cmd.tokens(), &["GET", "k"]);
}

#[test]
fn mutators_operate_on_value_copies() {
    let cmd = root().get().key("k").build();
    let piped = cmd.clone().to_pipe();
    assert!(piped.flags().is_pipe());
    assert!(!cmd.flags().is_pipe());
    assert_eq!(piped.flags(), piped.clone().to_pipe().flags());
}

#[test]
fn with_slot_on_keyless_command_keeps_marker() {
    let role = predefined::ROLE.clone();
    let hinted = role.with_slot("foo");
    assert_eq!(hinted.slot() & redis_cmds::NO_SLOT, redis_cmds::NO_SLOT);
    assert_eq!(
        hinted.slot() & !redis_cmds::NO_SLOT,
        slot::slot("foo")
    );
}

#[test]
fn default_completed_is_only_empty() {
    let cmd = Completed::default();
    assert!(cmd.is_empty());
    assert_eq!(cmd.flags(), CommandFlags::NONE);
}

#[test]
fn readonly_classification_table() {
    assert!(root().get().key("k").build().flags().is_read_only());
    assert!(root().set().key("k").value("v").build().flags().is_write());
    assert!(root().blpop().key(["k"]).timeout(0.0).build().flags().is_block());
    let xread = root().xread().block(0).streams().key(["s"]).id(["$"]).build();
    assert!(xread.flags().is_block() && xread.flags().is_read_only());
    assert!(root().ts_range().key("k").from("-").to("+").build().flags().is_read_only());
    let sub = root().subscribe().channel(["c"]).build();
    assert!(sub.flags().is_no_reply() && sub.flags().is_pipe());
    let unsub = root().unsubscribe().build();
    assert!(unsub.flags().is_unsub() && unsub.flags().is_read_only());
}
