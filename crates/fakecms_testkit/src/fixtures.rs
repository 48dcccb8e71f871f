//! Fixture helpers and pre-built scenarios.

use fakecms_core::Db;
use tracing_subscriber::EnvFilter;

/// A fixture database with ergonomic deref to [`Db`].
pub struct TestDb {
    /// The fixture instance.
    pub db: Db,
}

impl TestDb {
    /// Creates a fixture bound to the default `"master"` store.
    #[must_use]
    pub fn new() -> Self {
        Self { db: Db::new() }
    }

    /// Creates a fixture bound to a named store.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            db: Db::named(name),
        }
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestDb {
    type Target = Db;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

impl std::ops::DerefMut for TestDb {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.db
    }
}

/// Runs a test with a fresh fixture database.
///
/// # Example
///
/// ```rust
/// use fakecms_testkit::with_db;
/// use fakecms_core::DbItem;
///
/// with_db(|db| {
///     db.add_item(DbItem::new("Home")).unwrap();
///     assert!(db.get_item("/content/Home").unwrap().is_some());
/// });
/// ```
pub fn with_db<F, R>(f: F) -> R
where
    F: FnOnce(&mut Db) -> R,
{
    let mut test_db = TestDb::new();
    f(&mut test_db.db)
}

/// Runs a test with a fresh fixture database bound to a named store.
pub fn with_named_db<F, R>(name: &str, f: F) -> R
where
    F: FnOnce(&mut Db) -> R,
{
    let mut test_db = TestDb::named(name);
    f(&mut test_db.db)
}

/// Initializes a tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call from multiple tests; only the first call installs the
/// subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Pre-built fixture scenarios.
pub mod scenarios {
    use super::TestDb;
    use fakecms_core::DbItem;

    /// A fixture with a single `/content/Home` item carrying a Title.
    #[must_use]
    pub fn home_page() -> TestDb {
        let mut db = TestDb::new();
        db.add_item(DbItem::new("Home").field("Title", "Welcome"))
            .expect("fixture construction should not fail");
        db
    }

    /// A fixture with a uniform tree of `breadth` children per node,
    /// `depth` levels deep, rooted at `/content/Site`.
    ///
    /// Node names encode their position (`Node-<level>-<index>`), so
    /// paths are predictable for assertions.
    #[must_use]
    pub fn site_tree(depth: usize, breadth: usize) -> TestDb {
        fn build(level: usize, depth: usize, breadth: usize) -> Vec<DbItem> {
            if level >= depth {
                return Vec::new();
            }
            (0..breadth)
                .map(|index| {
                    let mut item = DbItem::new(format!("Node-{level}-{index}"));
                    for child in build(level + 1, depth, breadth) {
                        item = item.child(child);
                    }
                    item
                })
                .collect()
        }

        let mut root = DbItem::new("Site");
        for child in build(0, depth, breadth) {
            root = root.child(child);
        }

        let mut db = TestDb::new();
        db.add_item(root)
            .expect("fixture construction should not fail");
        db
    }
}
