//! # Type Catalog Scanner
//!
//! Enumerates the public types of a compiled-unit tree. The tree layout
//! mirrors the package hierarchy: `root/org/opengis/util/CodeList.class`
//! is the type `org.opengis.util.CodeList`.
//!
//! The scanner only finds candidate names. Turning a name into something
//! usable is delegated to a [`TypeResolver`], so the same walk serves a
//! class loader, a code-list catalog, or a plain name collector in tests.
//!
//! Scanning is best effort: unreadable entries and unresolvable names are
//! logged and skipped, never returned as errors.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use geoapi_core::{catalog, CodeList, GenericName};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

/// Separator between package segments in qualified type names.
pub const PACKAGE_SEPARATOR: &str = ".";

/// Turns a fully qualified type name into a handle.
pub trait TypeResolver {
    /// What a resolved type is represented by.
    type Handle;

    /// Resolve `qualified_name`, or `None` if no such type exists.
    fn resolve(&self, qualified_name: &str) -> Option<Self::Handle>;
}

impl<F, H> TypeResolver for F
where
    F: Fn(&str) -> Option<H>,
{
    type Handle = H;

    fn resolve(&self, qualified_name: &str) -> Option<H> {
        self(qualified_name)
    }
}

/// Resolves qualified names to the predefined code-list registries.
#[derive(Debug, Clone)]
pub struct CodeListCatalog {
    entries: BTreeMap<&'static str, &'static CodeList>,
}

impl CodeListCatalog {
    /// Catalog of every predefined family.
    pub fn predefined() -> Self {
        let entries = catalog()
            .into_iter()
            .map(|entry| (entry.qualified_name, entry.code_list))
            .collect();
        Self { entries }
    }

    /// Add a family under its qualified name.
    pub fn with(mut self, qualified_name: &'static str, code_list: &'static CodeList) -> Self {
        self.entries.insert(qualified_name, code_list);
        self
    }

    /// Number of families the catalog resolves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog resolves no family.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeResolver for CodeListCatalog {
    type Handle = &'static CodeList;

    fn resolve(&self, qualified_name: &str) -> Option<&'static CodeList> {
        self.entries.get(qualified_name).copied()
    }
}

/// A type found by the scanner.
///
/// Ordered and compared by qualified name only, so a discovered set is
/// sorted by name and holds at most one record per name.
#[derive(Debug, Clone)]
pub struct DiscoveredType<H> {
    /// Dotted fully qualified name.
    pub qualified_name: String,
    /// Resolver output for that name.
    pub handle: H,
}

impl<H> DiscoveredType<H> {
    /// Qualified name as a generic name.
    pub fn name(&self) -> Option<GenericName> {
        GenericName::parse(&self.qualified_name, PACKAGE_SEPARATOR).ok()
    }
}

impl<H> PartialEq for DiscoveredType<H> {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl<H> Eq for DiscoveredType<H> {}

impl<H> PartialOrd for DiscoveredType<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H> Ord for DiscoveredType<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.qualified_name.cmp(&other.qualified_name)
    }
}

/// Counters collected during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Regular files seen inside entered directories.
    pub visited_files: usize,
    /// Files that passed every filter and were handed to the resolver.
    pub candidates: usize,
    /// Candidate names the resolver did not recognize.
    pub unresolved: Vec<String>,
    /// Directory entries that could not be read.
    pub unreadable: usize,
}

/// Discover the types under `config.package_prefix` in `config.root`.
pub fn discover<R: TypeResolver>(config: &ScanConfig, resolver: &R) -> BTreeSet<DiscoveredType<R::Handle>> {
    discover_with_report(config, resolver).0
}

/// Like [`discover`], also returning scan counters.
pub fn discover_with_report<R: TypeResolver>(
    config: &ScanConfig,
    resolver: &R,
) -> (BTreeSet<DiscoveredType<R::Handle>>, ScanReport) {
    let mut found = BTreeSet::new();
    let mut report = ScanReport::default();
    let root = config.root.as_path();

    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "scan root is not a directory");
        return (found, report);
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|entry| {
            !entry.file_type().is_dir()
                || relative_segments(root, entry.path())
                    .is_some_and(|package| config.should_descend(&package))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                report.unreadable += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        report.visited_files += 1;

        let Some(qualified_name) = candidate_name(config, root, entry.path()) else {
            continue;
        };
        report.candidates += 1;

        match resolver.resolve(&qualified_name) {
            Some(handle) => {
                tracing::trace!(name = %qualified_name, "resolved type");
                found.insert(DiscoveredType {
                    qualified_name,
                    handle,
                });
            }
            None => {
                tracing::warn!(name = %qualified_name, "cannot resolve type, skipping");
                report.unresolved.push(qualified_name);
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        visited = report.visited_files,
        found = found.len(),
        unresolved = report.unresolved.len(),
        "scan complete"
    );
    (found, report)
}

/// Qualified name of the type stored in `path`, if the file passes the
/// leaf filters.
fn candidate_name(config: &ScanConfig, root: &Path, path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != config.extension {
        return None;
    }
    let base_name = path.file_stem()?.to_str()?;
    if !config.accepts_unit(base_name) {
        return None;
    }
    let mut segments = relative_segments(root, path.parent()?)?;
    if !config.is_inside_prefix(&segments) {
        return None;
    }
    segments.push(base_name.to_string());
    match GenericName::from_components(segments) {
        Ok(name) => Some(name.to_fully_qualified(PACKAGE_SEPARATOR)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping file with malformed name");
            None
        }
    }
}

/// Path segments of `path` relative to `root`; `None` when `path` is outside
/// `root` or not valid UTF-8.
fn relative_segments(root: &Path, path: &Path) -> Option<Vec<String>> {
    path.strip_prefix(root)
        .ok()?
        .components()
        .map(|c| c.as_os_str().to_str().map(String::from))
        .collect()
}

/// Plain files before directories, then by file name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk upward from `marker` to the nearest ancestor named `namespace_head`
/// and return that ancestor's parent, which is the scan root.
///
/// For `/build/classes/org/opengis/Marker.class` and head `org`, returns
/// `/build/classes`.
pub fn locate_root(marker: &Path, namespace_head: &str) -> Option<PathBuf> {
    marker
        .ancestors()
        .skip(1)
        .find(|dir| dir.file_name().and_then(|n| n.to_str()) == Some(namespace_head))
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn names<H>(set: &BTreeSet<DiscoveredType<H>>) -> Vec<&str> {
        set.iter().map(|t| t.qualified_name.as_str()).collect()
    }

    #[test]
    fn test_locate_root() {
        let marker = Path::new("/build/classes/org/opengis/Marker.class");
        assert_eq!(locate_root(marker, "org"), Some(PathBuf::from("/build/classes")));
        assert_eq!(locate_root(marker, "com"), None);
    }

    #[test]
    fn test_locate_root_nearest_ancestor() {
        let marker = Path::new("/a/org/b/org/X.class");
        assert_eq!(locate_root(marker, "org"), Some(PathBuf::from("/a/org/b")));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let config = ScanConfig::new("/definitely/not/here", "org");
        let (found, report) = discover_with_report(&config, &|name: &str| Some(name.len()));
        assert!(found.is_empty());
        assert_eq!(report, ScanReport::default());
    }

    #[test]
    fn test_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "org/opengis/util/CodeList.class");
        touch(root, "org/opengis/util/package-info.class");
        touch(root, "org/opengis/util/CodeList$Filter.class");
        touch(root, "org/opengis/util/DeprecatedName.class");
        touch(root, "org/opengis/util/Notes.txt");
        touch(root, "org/opengis/internal/Helper.class");
        touch(root, "org/apache/Other.class");
        touch(root, "org/Top.class");

        let config = ScanConfig::new(root, "org.opengis");
        let (found, report) = discover_with_report(&config, &|_: &str| Some(()));
        assert_eq!(names(&found), vec!["org.opengis.util.CodeList"]);
        assert_eq!(report.candidates, 1);
        assert!(report.unresolved.is_empty());
    }

    #[test]
    fn test_unresolved_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "org/opengis/A.class");
        touch(dir.path(), "org/opengis/B.class");

        let config = ScanConfig::new(dir.path(), "org.opengis");
        let resolver = |name: &str| (name != "org.opengis.B").then_some(name.len());
        let (found, report) = discover_with_report(&config, &resolver);
        assert_eq!(names(&found), vec!["org.opengis.A"]);
        assert_eq!(found.iter().next().unwrap().handle, "org.opengis.A".len());
        assert_eq!(report.unresolved, vec!["org.opengis.B".to_string()]);
    }

    #[test]
    fn test_code_list_catalog_resolves_families() {
        let catalog = CodeListCatalog::predefined();
        assert_eq!(catalog.len(), 5);
        let list = catalog
            .resolve("org.opengis.referencing.cs.AxisDirection")
            .unwrap();
        assert_eq!(list.family(), "org.opengis.referencing.cs.AxisDirection");
        assert_eq!(list.simple_name(), "AxisDirection");
        assert!(catalog.resolve("org.opengis.referencing.cs.CoordinateSystem").is_none());
    }

    #[test]
    fn test_discovered_type_name() {
        let t = DiscoveredType {
            qualified_name: "org.opengis.util.CodeList".to_string(),
            handle: (),
        };
        let name = t.name().unwrap();
        assert_eq!(name.depth(), 4);
        assert_eq!(name.tip(), "CodeList");
    }
}
