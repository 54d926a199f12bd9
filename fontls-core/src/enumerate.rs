//! Enumeration driver and collection pipeline (made by FontLab https://www.fontlab.com/)

use std::collections::BTreeSet;

use crate::error::EnumerateError;
use crate::normalize::{normalized_name, NormalizeOptions};
use crate::record::FontlsFamilyRecord;

/// Broad "report every charset" selector in the host API's numbering.
pub const DEFAULT_CHARSET: u8 = 1;

/// Filter descriptor scoping which records the host service reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyQuery {
    charset: u8,
}

impl Default for FamilyQuery {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET,
        }
    }
}

impl FamilyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow the query to a single charset selector.
    pub fn with_charset(mut self, charset: u8) -> Self {
        self.charset = charset;
        self
    }

    pub fn charset(&self) -> u8 {
        self.charset
    }
}

/// Trait for host services that report installed font families (GDI,
/// scripted sources in tests, etc.).
///
/// Implementations invoke `visit` once per matching record, on the calling
/// thread, strictly within the dynamic extent of `for_each_family`. A
/// `false` return from `visit` asks the host to stop early. Errors are
/// reserved for failing to reach the host service at all; individual
/// records never fail.
pub trait FamilySource {
    fn for_each_family(
        &self,
        query: &FamilyQuery,
        visit: &mut dyn FnMut(&FontlsFamilyRecord) -> bool,
    ) -> Result<(), EnumerateError>;
}

/// Options for one [`list_families`] call.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub query: FamilyQuery,
    pub normalize: NormalizeOptions,
}

/// Accumulator for the names admitted during one enumeration call.
///
/// Created empty when the call starts, fed from the host callback, drained
/// into a sorted list when the call ends. Never shared across calls.
#[derive(Debug, Default)]
pub struct FamilyCollector {
    options: NormalizeOptions,
    seen: BTreeSet<String>,
}

impl FamilyCollector {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            seen: BTreeSet::new(),
        }
    }

    /// Run one host record through filtering; duplicates collapse silently.
    pub fn offer(&mut self, record: &FontlsFamilyRecord) {
        if let Some(name) = normalized_name(record, &self.options) {
            self.seen.insert(name);
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Ascending, duplicate-free list of everything admitted so far.
    pub fn into_sorted(self) -> Vec<String> {
        self.seen.into_iter().collect()
    }
}

/// Run the full pipeline against an explicit host source.
pub fn collect_families(
    source: &dyn FamilySource,
    opts: &ListOptions,
) -> Result<Vec<String>, EnumerateError> {
    let mut collector = FamilyCollector::new(opts.normalize.clone());
    let mut reported = 0usize;

    source.for_each_family(&opts.query, &mut |record| {
        reported += 1;
        collector.offer(record);
        true
    })?;

    let families = collector.into_sorted();
    log::debug!(
        "host reported {reported} records, kept {} families",
        families.len()
    );
    Ok(families)
}

/// Enumerate installed families through the platform's host service.
///
/// Every call performs a fresh enumeration. On hosts without a GDI library
/// this reports [`EnumerateError::LibraryUnavailable`].
#[cfg(windows)]
pub fn list_families(opts: &ListOptions) -> Result<Vec<String>, EnumerateError> {
    collect_families(&crate::gdi::GdiFamilySource::new(), opts)
}

/// Enumerate installed families through the platform's host service.
///
/// Every call performs a fresh enumeration. On hosts without a GDI library
/// this reports [`EnumerateError::LibraryUnavailable`].
#[cfg(not(windows))]
pub fn list_families(_opts: &ListOptions) -> Result<Vec<String>, EnumerateError> {
    Err(EnumerateError::LibraryUnavailable("gdi32.dll".to_string()))
}
