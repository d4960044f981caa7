//! Commitment and strict-decoding behaviour of sequencer records.

use proptest::prelude::*;
use seqcommit_canonical::{Commitment, RawCommitmentBuilder};
use seqcommit_types::{Committable, DecodeError, Header, NmtRoot};

fn make_header() -> Header {
    Header {
        height: 1,
        timestamp: 2,
        l1_head: 3,
        transactions_root: NmtRoot::new(b"root".to_vec()),
    }
}

/// Rebuilds a header commitment with caller-chosen field order.
fn commit_in_order(header: &Header, order: &[&str]) -> Commitment {
    order
        .iter()
        .fold(RawCommitmentBuilder::new("BLOCK"), |builder, name| match *name {
            "height" => builder.u64_field("height", header.height),
            "timestamp" => builder.u64_field("timestamp", header.timestamp),
            "l1_head" => builder.u64_field("l1_head", header.l1_head),
            "transactions_root" => {
                builder.field("transactions_root", header.transactions_root.commit())
            }
            other => panic!("unknown field {other}"),
        })
        .finalize()
}

#[test]
fn header_commitment_matches_golden_digest() {
    assert_eq!(
        make_header().commit().to_string(),
        "b8a86a0c8f9de174f48eb0a3ea4d94fa64079176a398853834c4db0e214aaeb0"
    );
}

#[test]
fn nmt_root_commitment_matches_golden_digest() {
    assert_eq!(
        NmtRoot::new(b"root".to_vec()).commit().to_string(),
        "47748abb998b71fba94515be4fb1b8c17c247663c9ef8098e8afd9b73ebc2116"
    );
}

#[test]
fn declared_order_reproduces_commit() {
    let header = make_header();
    let declared = commit_in_order(
        &header,
        &["height", "timestamp", "l1_head", "transactions_root"],
    );
    assert_eq!(declared, header.commit());
}

#[test]
fn permuted_order_changes_commitment() {
    let header = make_header();
    let permuted = commit_in_order(
        &header,
        &["timestamp", "height", "l1_head", "transactions_root"],
    );
    assert_ne!(permuted, header.commit());

    let root_first = commit_in_order(
        &header,
        &["transactions_root", "height", "timestamp", "l1_head"],
    );
    assert_ne!(root_first, header.commit());
}

#[test]
fn nmt_root_and_header_never_share_commitment() {
    let header = make_header();

    // An NMT root whose bytes are exactly the header's field payloads.
    let mut raw = Vec::new();
    raw.extend_from_slice(&header.height.to_be_bytes());
    raw.extend_from_slice(&header.timestamp.to_be_bytes());
    raw.extend_from_slice(&header.l1_head.to_be_bytes());
    raw.extend_from_slice(header.transactions_root.commit().as_bytes());
    let root = NmtRoot::new(raw);
    assert_ne!(root.commit(), header.commit());

    // Identical fields under the other record's tag still differ.
    let retagged = RawCommitmentBuilder::new("NMTROOT")
        .u64_field("height", header.height)
        .u64_field("timestamp", header.timestamp)
        .u64_field("l1_head", header.l1_head)
        .field("transactions_root", header.transactions_root.commit())
        .finalize();
    assert_ne!(retagged, header.commit());
}

#[test]
fn header_commits_to_root_commitment_not_bytes() {
    let header = make_header();
    let via_raw_bytes = RawCommitmentBuilder::new("BLOCK")
        .u64_field("height", header.height)
        .u64_field("timestamp", header.timestamp)
        .u64_field("l1_head", header.l1_head)
        .var_size_field("transactions_root", &header.transactions_root.root)
        .finalize();
    assert_ne!(via_raw_bytes, header.commit());
}

#[test]
fn missing_transactions_root_is_rejected() {
    let err = Header::from_json(r#"{"height":1,"timestamp":2,"l1_head":3}"#).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingField {
            field: "transactions_root",
            record: "Header"
        }
    ));
    assert!(err.to_string().contains("transactions_root"));
}

#[test]
fn each_missing_field_is_named() {
    let full = serde_json::json!({
        "height": 1,
        "timestamp": 2,
        "l1_head": 3,
        "transactions_root": {"root": ""}
    });
    for field in ["height", "timestamp", "l1_head", "transactions_root"] {
        let mut value = full.clone();
        value.as_object_mut().unwrap().remove(field);
        let err = Header::from_json(&value.to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("field {field} of type Header is required")
        );
    }
}

#[test]
fn zero_valued_header_is_accepted() {
    let header = Header::from_json(
        r#"{"height":0,"timestamp":0,"l1_head":0,"transactions_root":{"root":""}}"#,
    )
    .unwrap();
    assert_eq!(header, Header::default());
    assert_eq!(
        header.commit().to_string(),
        "93c05ea361c8c55c2580c95a92c97a7c72db6194e29d194f7908c8b1fadb7960"
    );
}

#[test]
fn null_values_decode_as_zero() {
    let header = Header::from_json(
        r#"{"height":null,"timestamp":0,"l1_head":0,"transactions_root":null}"#,
    )
    .unwrap();
    assert_eq!(header, Header::default());
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(matches!(
        Header::from_json(r#"{"height":1"#),
        Err(DecodeError::Json(_))
    ));
    assert!(Header::from_json("42").is_err());
}

#[test]
fn commitments_agree_across_threads() {
    let header = make_header();
    let expected = header.commit();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let header = header.clone();
            std::thread::spawn(move || header.commit())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    /// Property: committing the same header twice yields the same digest.
    #[test]
    fn prop_header_commit_is_deterministic(
        height in any::<u64>(),
        timestamp in any::<u64>(),
        l1_head in any::<u64>(),
        root in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        let header = Header {
            height,
            timestamp,
            l1_head,
            transactions_root: NmtRoot::new(root),
        };
        prop_assert_eq!(header.commit(), header.commit());
        prop_assert_eq!(header.commit(), header.clone().commit());
    }

    /// Property: strict decoding of an encoded header reproduces it.
    #[test]
    fn prop_header_json_round_trip(
        height in any::<u64>(),
        timestamp in any::<u64>(),
        l1_head in any::<u64>(),
        root in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        let header = Header {
            height,
            timestamp,
            l1_head,
            transactions_root: NmtRoot::new(root),
        };
        let text = serde_json::to_string(&header).unwrap();
        prop_assert_eq!(Header::from_json(&text).unwrap(), header);
    }

    /// Property: swapping two distinct u64 fields changes the commitment.
    #[test]
    fn prop_swapped_fields_change_commitment(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let header = Header { height: a, timestamp: b, ..Header::default() };
        let swapped = Header { height: b, timestamp: a, ..Header::default() };
        prop_assert_ne!(header.commit(), swapped.commit());
    }
}
