#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::process::{Command, Output, Stdio};

use parking_lot::Mutex;
use tempfile::TempDir;

use dexbrowse::{CatalogError, CatalogSource, Category, Entry, NamePage, Result, Stat};

/// Build a test entry
pub fn entry(id: u32, name: &str, categories: &[&str]) -> Entry {
    Entry {
        id,
        name: name.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        image_ref: Some(format!("https://img.example/{id}.png")),
        height: 4,
        weight: 60,
        abilities: vec!["static".to_string()],
        stats: vec![Stat {
            name: "hp".to_string(),
            value: 35,
        }],
    }
}

/// In-memory catalog that records every call made to it
#[derive(Default)]
pub struct FakeCatalog {
    entries: Vec<Entry>,
    categories: BTreeMap<String, Vec<String>>,
    failing_entries: HashSet<String>,
    categories_unavailable: bool,
    listings_unavailable: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self.entries.sort_by_key(|e| e.id);
        self
    }

    /// Add `count` entries named `mon-001`, `mon-002`, ... with ids 1..=count
    pub fn with_numbered_entries(mut self, count: u32, category: &str) -> Self {
        for id in 1..=count {
            self = self.with_entry(entry(id, &format!("mon-{id:03}"), &[category]));
        }
        self
    }

    /// Add a category whose members are every entry already tagged with it
    pub fn with_category(mut self, name: &str) -> Self {
        let members = self
            .entries
            .iter()
            .filter(|e| e.categories.iter().any(|c| c == name))
            .map(|e| e.name.clone())
            .collect();
        self.categories.insert(name.to_string(), members);
        self
    }

    /// Add a category with an explicit member list
    pub fn with_members(mut self, name: &str, members: &[&str]) -> Self {
        self.categories.insert(
            name.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    /// Make lookups of `name` fail with a network error
    pub fn with_failing_entry(mut self, name: &str) -> Self {
        self.failing_entries.insert(name.to_string());
        self
    }

    pub fn without_categories(mut self) -> Self {
        self.categories_unavailable = true;
        self
    }

    /// Make category member lists and name pages fail
    pub fn without_listings(mut self) -> Self {
        self.listings_unavailable = true;
        self
    }

    /// Every call, in order, e.g. `category:water` or `entry:pikachu`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of calls starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

fn offline() -> CatalogError {
    CatalogError::Network("connection refused".to_string())
}

impl CatalogSource for FakeCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.record("categories".to_string());
        if self.categories_unavailable {
            return Err(offline());
        }
        Ok(self.categories.keys().map(Category::new).collect())
    }

    async fn fetch_category_names(&self, category: &str) -> Result<Vec<String>> {
        self.record(format!("category:{category}"));
        if self.listings_unavailable {
            return Err(offline());
        }
        self.categories
            .get(category)
            .cloned()
            .ok_or_else(|| CatalogError::Http {
                status: 404,
                url: format!("fake://type/{category}"),
            })
    }

    async fn fetch_name_page(&self, limit: usize, offset: usize) -> Result<NamePage> {
        self.record(format!("page:{limit}:{offset}"));
        if self.listings_unavailable {
            return Err(offline());
        }
        Ok(NamePage {
            count: self.entries.len() as u64,
            names: self
                .entries
                .iter()
                .skip(offset)
                .take(limit)
                .map(|e| e.name.clone())
                .collect(),
        })
    }

    async fn lookup_entry(&self, name_or_id: &str) -> Result<Entry> {
        self.record(format!("entry:{name_or_id}"));
        if self.failing_entries.contains(name_or_id) {
            return Err(offline());
        }
        self.entries
            .iter()
            .find(|e| e.name == name_or_id || e.id.to_string() == name_or_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name_or_id.to_string()))
    }
}

/// Runs the dexbrowse binary against an isolated data directory
pub struct DexTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl DexTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        DexTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_dexbrowse").to_string(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .arg("--data-dir")
            .arg(self.temp_dir.path())
            .arg("--no-color")
            .env_remove("DEXBROWSE_DATA_DIR")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute dexbrowse command")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(&self.binary_path)
            .args(args)
            .arg("--data-dir")
            .arg(self.temp_dir.path())
            .arg("--no-color")
            .env_remove("DEXBROWSE_DATA_DIR")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn dexbrowse");
        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for dexbrowse")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
    }

    pub fn read_file(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.temp_dir.path().join(name)).ok()
    }
}
