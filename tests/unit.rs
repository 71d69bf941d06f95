use treeclip::{
    Aggregate, BinaryDetection, BinaryMarker, ExportOptions, ExportOptionsBuilder, MemNode,
    Segment, collect_stats, export_tree, is_binary, is_binary_node, is_binary_with,
    strip_base_prefix,
};
#[test]
fn test_printable_text_is_not_binary() {
    let content = b"fn main() {\n\tprintln!(\"hi\");\r\n}\n";
    assert!(!is_binary(content));
    assert!(!is_binary(b""));
    assert!(!is_binary(b"vertical\x0btab and form\x0cfeed"));
    assert!(!is_binary("héllo wörld ✓".as_bytes()));
    assert!(!is_binary(b"delete \x7f is allowed"));
}
#[test]
fn test_control_bytes_are_binary() {
    assert!(is_binary(&[0x00]));
    assert!(is_binary(&[0x1b]));
    assert!(is_binary(b"text\x08backspace"));
    assert!(is_binary(b"shift out \x0e"));
    assert!(is_binary(b"unit separator \x1f"));
    assert!(!is_binary(b"space \x20"));
}
#[test]
fn test_is_binary_is_deterministic() {
    let samples: [&[u8]; 3] = [b"plain", b"\x00\x01", b"mixed\x1bescape"];
    for sample in samples {
        assert_eq!(is_binary(sample), is_binary(sample));
    }
}
#[test]
fn test_detection_strategies() {
    assert!(is_binary_with(b"\x00\x01\x02", BinaryDetection::Inspector));
    assert!(!is_binary_with(b"hello world", BinaryDetection::Inspector));
    assert!(!is_binary_with(b"\x00\x01\x02", BinaryDetection::None));
}
#[test]
fn test_unreadable_node_is_binary() {
    let node = MemNode::unreadable("/proj/locked.txt", 10);
    assert!(is_binary_node(&node, BinaryDetection::ControlBytes));
    assert!(is_binary_node(&node, BinaryDetection::None));
}
#[test]
fn test_strip_base_prefix() {
    assert_eq!(strip_base_prefix("/proj/src/a.rs", "/proj"), "src/a.rs");
    assert_eq!(strip_base_prefix("/other/a.rs", "/proj"), "/other/a.rs");
    assert_eq!(strip_base_prefix("/projects/a.rs", "/proj"), "/projects/a.rs");
    assert_eq!(strip_base_prefix("/proj", "/proj"), "/proj");
}
#[test]
fn test_aggregate_arithmetic() {
    let total: Aggregate = [Aggregate::file(3), Aggregate::ZERO, Aggregate::new(2, 7)]
        .into_iter()
        .sum();
    assert_eq!(total, Aggregate::new(3, 10));
    assert_eq!(Aggregate::new(0, 512).rounded_kb(), 1);
    assert_eq!(Aggregate::new(0, 1536).rounded_kb(), 2);
    assert_eq!(Aggregate::new(0, 1000).rounded_kb(), 1);
    assert_eq!(Aggregate::new(0, 2048).size_kb(), 2.0);
}
#[test]
fn test_empty_directory() {
    let root = MemNode::dir("/empty", vec![]);
    let options = ExportOptions::default();
    assert_eq!(collect_stats(&root, &options), Aggregate::ZERO);
    let result = export_tree(&root, "/empty", &options);
    assert_eq!(result.stats, Aggregate::ZERO);
    assert!(result.buffer.is_empty());
    assert_eq!(result.buffer.as_text(), "");
}
#[test]
fn test_single_text_file() {
    let root = MemNode::dir("/proj", vec![MemNode::file("/proj/a.txt", "hello")]);
    let options = ExportOptions::default();
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(result.buffer.as_text(), "File: a.txt\nhello\n\n");
    assert_eq!(result.stats, Aggregate::new(1, 5));
    assert_eq!(collect_stats(&root, &options), Aggregate::new(1, 5));
}
#[test]
fn test_null_byte_file_leaves_marker() {
    let root = MemNode::dir("/proj", vec![MemNode::file("/proj/blob.bin", vec![0u8])]);
    let options = ExportOptions::default();
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(result.buffer.as_text(), "Error reading file: blob.bin\n\n");
    assert_eq!(result.stats, Aggregate::ZERO);
    assert_eq!(collect_stats(&root, &options), Aggregate::ZERO);
}
#[test]
fn test_leaf_root() {
    let root = MemNode::file("/proj/notes.md", "# notes\n");
    let options = ExportOptions::default();
    assert_eq!(collect_stats(&root, &options), Aggregate::new(1, 8));
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(result.buffer.as_text(), "File: notes.md\n# notes\n\n\n");
}
fn sample_tree() -> MemNode {
    MemNode::dir(
        "/proj",
        vec![
            MemNode::file("/proj/README.md", "readme"),
            MemNode::dir(
                "/proj/src",
                vec![
                    MemNode::file("/proj/src/main.rs", "fn main() {}"),
                    MemNode::dir(
                        "/proj/src/util",
                        vec![MemNode::file("/proj/src/util/mod.rs", "pub mod x;")],
                    ),
                    MemNode::file("/proj/src/logo.png", vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]),
                ],
            ),
            MemNode::file("/proj/z.txt", "last"),
        ],
    )
}
#[test]
fn test_depth_first_listed_order() {
    let result = export_tree(&sample_tree(), "/proj", &ExportOptions::default());
    let expected = concat!(
        "File: README.md\nreadme\n\n",
        "File: src/main.rs\nfn main() {}\n\n",
        "File: src/util/mod.rs\npub mod x;\n\n",
        "Error reading file: logo.png\n\n",
        "File: z.txt\nlast\n\n",
    );
    assert_eq!(result.buffer.as_text(), expected);
    assert_eq!(result.stats, Aggregate::new(4, 6 + 12 + 10 + 4));
}
#[test]
fn test_collect_matches_export_for_text_trees() {
    let root = MemNode::dir(
        "/proj",
        vec![
            MemNode::file("/proj/a.txt", "alpha\n"),
            MemNode::dir(
                "/proj/docs",
                vec![
                    MemNode::file("/proj/docs/b.md", "beta\r\n\tgamma"),
                    MemNode::dir("/proj/docs/empty", vec![]),
                ],
            ),
            MemNode::file("/proj/c.txt", "naïve café"),
        ],
    );
    let options = ExportOptions::default();
    assert_eq!(
        collect_stats(&root, &options),
        export_tree(&root, "/proj", &options).stats
    );
}
#[test]
fn test_sibling_order_does_not_change_aggregate() {
    let files = || {
        vec![
            MemNode::file("/p/a.txt", "aaa"),
            MemNode::file("/p/b.bin", vec![0u8, 1]),
            MemNode::dir("/p/d", vec![MemNode::file("/p/d/c.txt", "cc")]),
        ]
    };
    let forward = MemNode::dir("/p", files());
    let mut reversed_children = files();
    reversed_children.reverse();
    let reversed = MemNode::dir("/p", reversed_children);
    let options = ExportOptions::default();
    let a = export_tree(&forward, "/p", &options);
    let b = export_tree(&reversed, "/p", &options);
    assert_eq!(a.stats, b.stats);
    assert_eq!(collect_stats(&forward, &options), collect_stats(&reversed, &options));
    assert_ne!(a.buffer.as_text(), b.buffer.as_text());
    assert_eq!(a.buffer.len(), b.buffer.len());
}
#[test]
fn test_unreadable_file_is_dropped_from_count() {
    let root = MemNode::dir(
        "/proj",
        vec![
            MemNode::unreadable("/proj/secret.txt", 42),
            MemNode::file("/proj/ok.txt", "ok"),
        ],
    );
    let options = ExportOptions::default();
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(
        result.buffer.as_text(),
        "Error reading file: secret.txt\n\nFile: ok.txt\nok\n\n"
    );
    assert_eq!(result.stats, Aggregate::new(1, 2));
    assert_eq!(collect_stats(&root, &options), Aggregate::new(1, 2));
}
#[test]
fn test_binary_marker_variants() {
    let root = MemNode::dir(
        "/proj",
        vec![
            MemNode::file("/proj/img.bin", vec![0u8, 0, 0]),
            MemNode::unreadable("/proj/gone.txt", 3),
        ],
    );
    let distinct = ExportOptionsBuilder::new()
        .binary_marker(BinaryMarker::Distinct)
        .build();
    let result = export_tree(&root, "/proj", &distinct);
    assert_eq!(
        result.buffer.segments(),
        &[
            Segment::Binary {
                name: "img.bin".to_string()
            },
            Segment::ReadError {
                name: "gone.txt".to_string()
            },
        ]
    );
    assert_eq!(
        result.buffer.as_text(),
        "Skipped binary file: img.bin\n\nError reading file: gone.txt\n\n"
    );
    let omit = ExportOptionsBuilder::new()
        .binary_marker(BinaryMarker::Omit)
        .build();
    let result = export_tree(&root, "/proj", &omit);
    assert_eq!(result.buffer.as_text(), "Error reading file: gone.txt\n\n");
    assert_eq!(result.stats, Aggregate::ZERO);
}
#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let root = MemNode::dir("/proj", vec![MemNode::file("/proj/latin1.txt", vec![b'c', b'a', b'f', 0xe9])]);
    let options = ExportOptions::default();
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(result.buffer.as_text(), "File: latin1.txt\ncaf\u{fffd}\n\n");
    // Export counts the re-encoded text, the preview counts raw bytes.
    assert_eq!(result.stats, Aggregate::new(1, 6));
    assert_eq!(collect_stats(&root, &options), Aggregate::new(1, 4));
}
#[test]
fn test_deep_tree_does_not_recurse() {
    let mut node = MemNode::file("/deep/leaf.txt", "bottom");
    for i in 0..10_000 {
        node = MemNode::dir(format!("/deep/d{}", i), vec![node]);
    }
    let options = ExportOptions::default();
    assert_eq!(collect_stats(&node, &options), Aggregate::new(1, 6));
    let result = export_tree(&node, "/deep", &options);
    assert_eq!(result.buffer.as_text(), "File: leaf.txt\nbottom\n\n");
}
#[test]
fn test_unlistable_directory_is_skipped() {
    let root = MemNode::dir(
        "/proj",
        vec![
            MemNode::file("/proj/a.txt", "a"),
            MemNode::unlistable("/proj/locked"),
            MemNode::file("/proj/b.txt", "bb"),
        ],
    );
    let options = ExportOptions::default();
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(result.buffer.as_text(), "File: a.txt\na\n\nFile: b.txt\nbb\n\n");
    assert_eq!(result.stats, Aggregate::new(2, 3));
    assert_eq!(collect_stats(&root, &options), Aggregate::new(2, 3));
    assert_eq!(
        collect_stats(&MemNode::unlistable("/proj/locked"), &options),
        Aggregate::ZERO
    );
}
#[cfg(unix)]
#[test]
fn test_non_utf8_path_leaves_marker() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    let path = OsStr::from_bytes(b"/proj/\xff.txt");
    let root = MemNode::dir("/proj", vec![MemNode::file(path, "hello")]);
    let options = ExportOptions::default();
    let result = export_tree(&root, "/proj", &options);
    assert_eq!(result.buffer.as_text(), "Error reading file: \u{fffd}.txt\n\n");
    assert_eq!(result.stats, Aggregate::ZERO);
    // The preview never looks at paths, so it still counts the file.
    assert_eq!(collect_stats(&root, &options), Aggregate::new(1, 5));
}
