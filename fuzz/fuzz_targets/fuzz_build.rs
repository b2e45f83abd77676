#![no_main]

use libfuzzer_sys::fuzz_target;
use trie_index::{BuildConfig, ThreadConfig, Trie};

/// Fuzz construction strategies against each other.
/// The first byte picks the partition prefix length; the rest is split on
/// 0x0a into the corpus, so empty and duplicate strings occur naturally.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let prefix_len = usize::from(selector % 4);
    let strings: Vec<&[u8]> = rest.split(|&b| b == b'\n').collect();

    let sequential = Trie::sequential(&strings);
    let config = BuildConfig::new()
        .with_partition_prefix_len(prefix_len)
        .with_threads(ThreadConfig::Fixed(2));
    let parallel = Trie::build(&strings, &config).unwrap();

    assert_eq!(parallel.node_count(), sequential.node_count());

    for string in &strings {
        for len in 0..=string.len() {
            let prefix = &string[..len];
            let mut expected = sequential.search(prefix);
            let mut actual = parallel.search(prefix);
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(expected, actual);
        }
        assert!(parallel.get(string).is_some());
    }
});
