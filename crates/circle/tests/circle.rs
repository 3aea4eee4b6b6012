use proptest::prelude::*;
use tulip_circle::{
    DigestError, Identifier, KEY_SIZE, Node, U256, derive, digest, distance, fresh_identity,
    keyspace_size, magnitude, nearest, normalize,
};

type Id8 = Identifier<8>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn id(s: &str) -> Id8 {
    s.parse().unwrap()
}

#[test]
fn hello_scenario() {
    init_tracing();

    assert_eq!(
        digest(b"hello"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(derive::<8, _>(b"hello").unwrap().to_string(), "2cf24dba");
    assert_eq!(
        Node::<KEY_SIZE>::new("hello").unwrap().to_string(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e"
    );
}

#[test]
fn nearest_orders_small_addresses() {
    init_tracing();

    let candidates = [id("0000000a"), id("00000001"), id("00000005")];
    let ordered: Vec<String> = nearest(&id("00000000"), candidates)
        .map(|c| c.to_string())
        .collect();
    assert_eq!(ordered, ["00000001", "00000005", "0000000a"]);
}

#[test]
fn nearest_keeps_equidistant_candidates() {
    init_tracing();

    let target = id("00000100");
    let below = id("000000fd");
    let above = id("00000103");
    let far = id("00000200");

    let ordered: Vec<_> = nearest(&target, [far, above, below]).collect();
    assert_eq!(ordered, vec![above, below, far]);
    assert_eq!(magnitude(&target, &above), U256::from(3u8));
    assert_eq!(magnitude(&target, &below), U256::from(3u8));
}

#[test]
fn identifiers_convert_to_numbers() {
    let a = id("0000beef");
    let value: U256 = a.into();
    assert_eq!(value, U256::from(0xbeefu16));
    assert_eq!(Id8::try_from(value), Ok(a));
    assert_eq!(Id8::default(), Id8::ZERO);
}

#[test]
fn digest_one_short_is_rejected() {
    let short = &digest(b"hello")[..63];
    assert_eq!(
        normalize::<8>(short),
        Err(DigestError::Length {
            expected: 64,
            got: 63
        })
    );
}

#[test]
fn fresh_identities_spread_over_keyspace() {
    init_tracing();

    let nodes: Vec<Node> = (0..32).map(|_| fresh_identity().unwrap()).collect();
    let target = nodes[0].as_identifier();

    let ordered: Vec<&Node> = nearest(&target, &nodes).collect();
    assert_eq!(ordered.len(), nodes.len());
    assert_eq!(ordered[0], &nodes[0]);
}

#[test]
fn identities_generate_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| fresh_identity::<KEY_SIZE>().unwrap()))
        .collect();
    let nodes: std::collections::HashSet<_> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(nodes.len(), 4);
}

proptest! {
    #[test]
    fn derive_is_deterministic(artefact in any::<Vec<u8>>()) {
        let a = derive::<KEY_SIZE, _>(&artefact).unwrap();
        let b = derive::<KEY_SIZE, _>(&artefact).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn normalize_stays_in_keyspace(d in "[0-9a-f]{64}") {
        let id = normalize::<KEY_SIZE>(&d).unwrap();
        prop_assert!(id.value() < keyspace_size::<KEY_SIZE>());

        let text = id.to_string();
        prop_assert_eq!(text.len(), KEY_SIZE);
        prop_assert_eq!(&text[..], &d[..KEY_SIZE]);
    }

    #[test]
    fn zero_prefixed_digests_keep_padding(zeros in 1usize..8, rest in "[0-9a-f]{64}") {
        let d = format!("{}{}", "0".repeat(zeros), &rest[zeros..]);
        let text = normalize::<8>(&d).unwrap().to_string();
        prop_assert_eq!(text.len(), 8);
        prop_assert!(text.starts_with(&"0".repeat(zeros)));
    }

    #[test]
    fn distance_is_antisymmetric(a in "[0-9a-f]{48}", b in "[0-9a-f]{48}") {
        let a: Identifier = a.parse().unwrap();
        let b: Identifier = b.parse().unwrap();
        prop_assert_eq!(distance(&a, &b), -distance(&b, &a));
        prop_assert_eq!(distance(&a, &b).unsigned_abs(), magnitude(&a, &b));
    }

    #[test]
    fn nearest_is_sorted_and_complete(
        target in "[0-9a-f]{8}",
        candidates in prop::collection::vec("[0-9a-f]{8}", 0..64),
    ) {
        let target = id(&target);
        let candidates: Vec<Id8> = candidates.iter().map(|s| id(s)).collect();

        let ordered: Vec<Id8> = nearest(&target, candidates.iter().copied()).collect();
        prop_assert_eq!(ordered.len(), candidates.len());

        for pair in ordered.windows(2) {
            prop_assert!(magnitude(&target, &pair[0]) <= magnitude(&target, &pair[1]));
        }

        let mut expected = candidates.clone();
        let mut got = ordered.clone();
        expected.sort();
        got.sort();
        prop_assert_eq!(expected, got);
    }
}
