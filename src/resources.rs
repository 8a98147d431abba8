//! The preloaded resource table.
//!
//! Every servable file is read into memory once at startup. Handlers share
//! the table read-only through an `Arc` for the life of the process; there
//! is nothing to lock.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

/// The files the site consists of, with their MIME types. New files can be
/// added in one place.
pub const WEB_FILES: &[(&str, &str)] = &[
    ("Main.html", "text/html"),
    ("Script.js", "text/javascript"),
    ("Colors.json", "application/json"),
    ("Style.css", "text/css"),
];

/// File served for the empty path.
pub const INDEX_FILE: &str = "Main.html";

/// A single in-memory resource. Immutable once constructed.
///
/// The body is a `Bytes` so each response clones a handle, not the content.
#[derive(Debug, Clone)]
pub struct Resource {
    pub name: String,
    pub mime: String,
    pub body: Bytes,
}

/// Immutable file name → resource mapping, built once before the listener
/// starts.
#[derive(Debug)]
pub struct ResourceTable {
    entries: HashMap<String, Resource>,
    index: String,
}

impl ResourceTable {
    /// Reads every manifest file under `web_root` into memory.
    ///
    /// A missing or unreadable file is an error; the caller treats it as
    /// fatal to startup.
    pub fn preload(web_root: &Path) -> Result<Self> {
        let mut resources = Vec::with_capacity(WEB_FILES.len());
        for (name, mime) in WEB_FILES {
            let path = web_root.join(name);
            let body = std::fs::read(&path)
                .with_context(|| format!("failed to read web file {}", path.display()))?;
            resources.push(Resource {
                name: (*name).to_string(),
                mime: (*mime).to_string(),
                body: Bytes::from(body),
            });
        }
        Self::from_entries(resources, INDEX_FILE)
    }

    /// Builds a table from already-loaded resources. The index name must
    /// refer to one of the entries.
    pub fn from_entries(resources: Vec<Resource>, index: &str) -> Result<Self> {
        let entries: HashMap<String, Resource> = resources
            .into_iter()
            .map(|r| (r.name.clone(), r))
            .collect();

        anyhow::ensure!(
            entries.contains_key(index),
            "index resource {index} is not among the loaded entries"
        );

        Ok(Self {
            entries,
            index: index.to_string(),
        })
    }

    /// Exact, case-sensitive lookup by file name.
    pub fn lookup(&self, name: &str) -> Option<&Resource> {
        self.entries.get(name)
    }

    /// The resource served for the empty path. `from_entries` guarantees
    /// the entry exists.
    pub fn index(&self) -> &Resource {
        &self.entries[self.index.as_str()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
