use super::*;

fn temp_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "alchemaker_{name}_{}_{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn save_assigns_ids_and_default_names() {
    let mut g = MemGallery::new();
    let a = g
        .save(Some("Philosopher's Stone"), CircleConfig::default(), vec![1, 2], 10)
        .unwrap()
        .id;
    let b = g.save(None, CircleConfig::default(), Vec::new(), 20).unwrap();
    assert_eq!(b.name, DEFAULT_CIRCLE_NAME);
    let b = b.id;
    let c = g.save(Some("  "), CircleConfig::default(), Vec::new(), 30).unwrap();
    assert_eq!(c.name, DEFAULT_CIRCLE_NAME);
    assert_eq!((a, b), (1, 2));
    assert_eq!(g.get(a).unwrap().image_png, vec![1, 2]);
}

#[test]
fn save_rejects_invalid_config() {
    let mut g = MemGallery::new();
    let bad = CircleConfig {
        complexity: 0,
        ..CircleConfig::default()
    };
    assert!(matches!(
        g.save(None, bad, Vec::new(), 0),
        Err(CircleError::Validation(_))
    ));
    assert!(g.is_empty());
}

#[test]
fn all_lists_newest_first() {
    let mut g = MemGallery::new();
    g.save(Some("old"), CircleConfig::default(), Vec::new(), 100)
        .unwrap();
    g.save(Some("new"), CircleConfig::default(), Vec::new(), 300)
        .unwrap();
    g.save(Some("mid"), CircleConfig::default(), Vec::new(), 200)
        .unwrap();
    let names: Vec<&str> = g.all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["new", "mid", "old"]);
}

#[test]
fn delete_and_clear() {
    let mut g = MemGallery::new();
    let id = g.save(None, CircleConfig::default(), Vec::new(), 1).unwrap().id;
    assert!(g.delete(id));
    assert!(!g.delete(id));
    g.save(None, CircleConfig::default(), Vec::new(), 2).unwrap();
    g.clear();
    assert_eq!(g.len(), 0);
    let next = g.save(None, CircleConfig::default(), Vec::new(), 3).unwrap().id;
    assert_eq!(next, 3);
}

#[test]
fn snapshot_roundtrip_keeps_records_and_counter() {
    let path = temp_file("gallery_roundtrip");
    assert!(MemGallery::load(&path).unwrap().is_empty());

    let mut g = MemGallery::new();
    g.save(Some("one"), CircleConfig::default(), vec![9, 9, 9], 5)
        .unwrap();
    g.save_to(&path).unwrap();

    let mut back = MemGallery::load(&path).unwrap();
    assert_eq!(back, g);
    let id = back.save(None, CircleConfig::default(), Vec::new(), 6).unwrap().id;
    assert_eq!(id, 2);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn malformed_snapshot_is_a_serde_error() {
    let path = temp_file("gallery_bad");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(MemGallery::load(&path), Err(CircleError::Serde(_))));
    std::fs::remove_file(&path).unwrap();
}
