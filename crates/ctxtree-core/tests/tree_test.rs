use std::path::Path;

use ctxtree_core::{build_tree, render_tree};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, len: usize) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, vec![b'x'; len]).unwrap();
}

// ── Construction ──

#[test]
fn single_file_node_has_its_byte_length() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "data.bin", 42);

    let node = build_tree(&tmp.path().join("data.bin")).unwrap();
    assert_eq!(node.name, "data.bin");
    assert_eq!(node.size, 42);
    assert!(!node.is_dir);
    assert!(node.children.is_empty());
}

#[test]
fn directory_size_is_sum_of_descendants() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "a.txt", 100);
    write_file(tmp.path(), "sub/b.txt", 200);
    write_file(tmp.path(), "sub/deeper/c.txt", 300);

    let root = build_tree(tmp.path()).unwrap();
    assert_eq!(root.size, 600);

    let sub = root.children.iter().find(|c| c.name == "sub").unwrap();
    assert_eq!(sub.size, 500);
}

#[test]
fn empty_directory_has_zero_size() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("empty")).unwrap();

    let root = build_tree(tmp.path()).unwrap();
    assert_eq!(root.size, 0);
    assert_eq!(root.children.len(), 1);
    assert!(root.children[0].is_dir);
}

#[test]
fn missing_root_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let result = build_tree(&tmp.path().join("nope"));

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("context root"), "got: {err}");
}

// ── Sibling ordering ──

#[test]
fn directories_sort_before_files() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "aaa.txt", 1);
    write_file(tmp.path(), "zzz/inner.txt", 1);

    let root = build_tree(tmp.path()).unwrap();
    let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zzz", "aaa.txt"]);
}

#[test]
fn siblings_of_same_kind_sort_lexicographically() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "b.txt", 1);
    write_file(tmp.path(), "a.txt", 1);
    write_file(tmp.path(), "c.txt", 1);
    std::fs::create_dir(tmp.path().join("beta")).unwrap();
    std::fs::create_dir(tmp.path().join("alpha")).unwrap();

    let root = build_tree(tmp.path()).unwrap();
    let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta", "a.txt", "b.txt", "c.txt"]);
}

#[test]
fn ordering_is_byte_wise_case_sensitive() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "Zebra.txt", 1);
    write_file(tmp.path(), "apple.txt", 1);

    let root = build_tree(tmp.path()).unwrap();
    let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    // Uppercase sorts before lowercase in byte order
    assert_eq!(names, vec!["Zebra.txt", "apple.txt"]);
}

// ── Rendering a built tree ──

#[test]
fn rendered_fixture_matches_expected_output() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "app.conf", 512);
    write_file(tmp.path(), "src/main.c", 1024);
    write_file(tmp.path(), "src/util.c", 512);

    let root = build_tree(tmp.path()).unwrap();
    let out = render_tree(&root, -1);
    let root_name = tmp.path().file_name().unwrap().to_str().unwrap();

    assert_eq!(
        out,
        format!(
            "{root_name} (2.0 KB)\n\
             ├── src (1.5 KB)\n\
             │   ├── main.c (1.0 KB)\n\
             │   └── util.c (512 B)\n\
             └── app.conf (512 B)\n"
        )
    );
}

#[test]
fn depth_bound_hides_deeper_levels() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "a/b/c/deep.txt", 10);

    let root = build_tree(tmp.path()).unwrap();

    let depth_one = render_tree(&root, 1);
    assert!(depth_one.contains("a (10 B)"));
    assert!(!depth_one.contains("b ("));

    let depth_two = render_tree(&root, 2);
    assert!(depth_two.contains("b (10 B)"));
    assert!(!depth_two.contains("c ("));

    let unlimited = render_tree(&root, -1);
    assert!(unlimited.contains("deep.txt (10 B)"));
}
