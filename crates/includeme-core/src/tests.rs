//! Unit tests for includeme-core

use crate::*;

fn sample_index() -> SymbolIndex {
    SymbolIndex::build(vec![
        ("cout", TableValue::headers(["iostream"])),
        ("printf", TableValue::headers(["stdio.h"])),
    ])
}

/// Keys `k0000..k{n}` fed in a scrambled order.
fn scrambled_keys(n: usize) -> Vec<String> {
    let mut keys: Vec<String> = (0..n).map(|i| format!("k{:04}", i)).collect();
    keys.reverse();
    let (evens, odds): (Vec<_>, Vec<_>) = keys
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    odds.into_iter().chain(evens).map(|(_, k)| k).collect()
}

#[test]
fn test_lookup_direct_entry() {
    let index = sample_index();

    let cout = index.lookup("cout").unwrap();
    assert_eq!(cout.canonical_name, "cout");
    assert_eq!(cout.headers, vec!["iostream".to_string()]);

    assert!(index.lookup("missing").is_none());
}

#[test]
fn test_lookup_follows_alias_once() {
    let index = SymbolIndex::build(vec![
        ("MyClass", TableValue::alias("lol::MyClass")),
        (
            "lol::MyClass",
            TableValue::headers(["lol/MyClass.h", "lol/class_defs.h"]),
        ),
    ]);

    let resolved = index.lookup("MyClass").unwrap();
    insta::assert_json_snapshot!(resolved, @r###"
    {
      "canonical_name": "lol::MyClass",
      "headers": [
        "lol/MyClass.h",
        "lol/class_defs.h"
      ]
    }
    "###);
}

#[test]
fn test_alias_to_alias_is_not_followed() {
    let index = SymbolIndex::build(vec![
        ("a", TableValue::alias("b")),
        ("b", TableValue::alias("c")),
        ("c", TableValue::headers(["c.h"])),
    ]);

    assert!(index.lookup("a").is_none());
    assert_eq!(index.lookup("b").unwrap().canonical_name, "c");
}

#[test]
fn test_dangling_alias_is_not_found() {
    let index = SymbolIndex::build(vec![("cout", TableValue::alias("std::cout"))]);
    assert!(index.lookup("cout").is_none());
}

#[test]
fn test_self_alias_does_not_loop() {
    let index = SymbolIndex::build(vec![("loop", TableValue::alias("loop"))]);
    assert!(index.lookup("loop").is_none());
}

#[test]
fn test_lookup_is_exact_match() {
    let index = sample_index();
    assert!(index.lookup("Cout").is_none());
    assert!(index.lookup("cou").is_none());
    assert!(index.lookup("std::cout").is_none());
    assert!(index.lookup("").is_none());
}

#[test]
fn test_balanced_height_and_sorted_traversal() {
    for n in 0..300usize {
        let keys = scrambled_keys(n);
        let index: SymbolIndex = keys
            .iter()
            .map(|k| (k.clone(), TableValue::headers(["h.h"])))
            .collect();

        assert_eq!(index.len(), n);

        // ceil(log2(n + 1)) is the bit length of n.
        let bound = (usize::BITS - n.leading_zeros()) as usize;
        assert!(index.height() <= bound, "height {} > {} for n={}", index.height(), bound, n);

        let mut expected = keys.clone();
        expected.sort();
        let traversed: Vec<&str> = index.keys().collect();
        assert_eq!(traversed, expected);
    }
}

#[test]
fn test_every_inserted_key_is_found() {
    let keys = scrambled_keys(257);
    let index = SymbolIndex::build(
        keys.iter()
            .map(|k| (k.clone(), TableValue::headers([format!("{}.h", k)]))),
    );

    for key in &keys {
        let resolved = index.lookup(key).unwrap();
        assert_eq!(resolved.canonical_name, *key);
        assert_eq!(resolved.headers, vec![format!("{}.h", key)]);
    }
}

#[test]
fn test_duplicate_keys_last_wins() {
    let index = SymbolIndex::build(vec![
        ("size_t", TableValue::headers(["stddef.h"])),
        ("abs", TableValue::headers(["stdlib.h"])),
        ("size_t", TableValue::headers(["cstddef"])),
    ]);

    assert_eq!(index.len(), 2);
    assert_eq!(index.lookup("size_t").unwrap().headers, vec!["cstddef".to_string()]);
}

#[test]
fn test_header_order_is_preserved() {
    let index = SymbolIndex::build(vec![(
        "std::thread",
        TableValue::headers(["thread", "chrono", "atomic"]),
    )]);
    assert_eq!(
        index.lookup("std::thread").unwrap().headers,
        vec!["thread", "chrono", "atomic"]
    );
}

#[test]
fn test_empty_index() {
    let index = SymbolIndex::build(Vec::<IndexEntry>::new());
    assert!(index.is_empty());
    assert_eq!(index.height(), 0);
    assert!(index.lookup("anything").is_none());
    assert_eq!(
        SymbolIndex::try_build(Vec::<IndexEntry>::new()).unwrap_err(),
        IndexError::Empty
    );
}

#[test]
fn test_table_value_deserialization() {
    let pairs: Vec<(String, TableValue)> =
        serde_json::from_str(r#"[["cout", "std::cout"], ["std::cout", ["iostream"]]]"#).unwrap();

    assert_eq!(pairs[0].1, TableValue::alias("std::cout"));
    assert_eq!(pairs[1].1, TableValue::headers(["iostream"]));
}

#[test]
fn test_using_for() {
    let resolved = ResolvedSymbol {
        canonical_name: "std::cout".to_string(),
        headers: vec!["iostream".to_string()],
    };
    assert_eq!(resolved.using_for("cout"), Some("std::cout"));
    assert_eq!(resolved.using_for("std::cout"), None);

    let c_symbol = ResolvedSymbol {
        canonical_name: "printf".to_string(),
        headers: vec!["stdio.h".to_string()],
    };
    assert_eq!(c_symbol.using_for("printf"), None);
}

#[test]
fn test_validate_token() {
    assert!(validate_token("cout"));
    assert!(validate_token("std::chrono::seconds"));
    assert!(validate_token("uint8_t"));
    assert!(!validate_token(""));
    assert!(!validate_token("foo bar"));
    assert!(!validate_token("a->b"));
}

#[test]
fn test_token_at() {
    let line = "    std::cout << value;";
    assert_eq!(token_at(line, 4), Some("std::cout"));
    assert_eq!(token_at(line, 10), Some("std::cout"));
    // Cursor right after the word.
    assert_eq!(token_at(line, 13), Some("std::cout"));
    assert_eq!(token_at(line, 15), None);
    assert_eq!(token_at(line, 18), Some("value"));
    assert_eq!(token_at("::printf(x)", 3), Some("printf"));
    assert_eq!(token_at("", 0), None);
    assert_eq!(token_at("abc", 99), Some("abc"));
}

#[test]
fn test_token_at_non_ascii_line() {
    // 'é' occupies bytes 0..2.
    assert_eq!(token_at("é = cout;", 1), None);
    assert_eq!(token_at("é = cout;", 6), Some("cout"));
    assert_eq!(token_at("x = \"日本\"; printf", 6), None);
    assert_eq!(token_at("x = \"日本\"; printf", 14), Some("printf"));
    assert_eq!(token_at("naïve", 3), Some("na"));
}
