//! Category grouping and ordering.

#![allow(missing_docs)]

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};
use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::error::PanelError;
use crate::site::SiteEntry;

/// Category assigned to sites configured without one. Always the first page.
pub const DEFAULT_CATEGORY: &str = "General";

/// Normalized site list plus the page order derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// Sites in configuration order, every one with a non-empty category.
    pub sites: Vec<SiteEntry>,
    /// Distinct categories in display order.
    pub categories: Vec<SmolStr>,
}

impl Catalog {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Sites filed under `category`, in configuration order.
    pub fn sites_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a SiteEntry> + 'a {
        self.sites
            .iter()
            .filter(move |site| site.category == category)
    }
}

/// Sort tier of a category. Pinned categories precede every lexicographic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CategoryTier {
    Pinned,
    Lexicographic,
}

/// Two-tier ordering key for page categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryKey {
    tier: CategoryTier,
    label: SmolStr,
}

impl CategoryKey {
    #[must_use]
    pub fn new(label: &str) -> Self {
        let tier = if label == DEFAULT_CATEGORY {
            CategoryTier::Pinned
        } else {
            CategoryTier::Lexicographic
        };
        Self {
            tier,
            label: SmolStr::new(label),
        }
    }

    #[must_use]
    pub fn tier(&self) -> CategoryTier {
        self.tier
    }

    #[must_use]
    pub fn label(&self) -> &SmolStr {
        &self.label
    }
}

/// Page order: tier first, then Unicode collation (CLDR root) within a tier.
///
/// Punctuation is non-ignorable and lowercase sorts before uppercase on ties.
pub struct CategoryOrder {
    collator: Collator,
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self {
            collator: Collator::new(Tailoring::Cldr(Locale::Root), false, true),
        }
    }
}

impl CategoryOrder {
    pub fn compare(&mut self, a: &CategoryKey, b: &CategoryKey) -> Ordering {
        a.tier
            .cmp(&b.tier)
            .then_with(|| self.collator.collate(a.label.as_str(), b.label.as_str()))
    }

    pub fn sort(&mut self, keys: &mut [CategoryKey]) {
        keys.sort_by(|a, b| self.compare(a, b));
    }
}

/// Files uncategorized sites under [`DEFAULT_CATEGORY`] and orders the pages.
///
/// Entries containing the widget identifier delimiter are rejected.
///
/// The input is left untouched; an empty list yields an empty catalog.
pub fn normalize(entries: &[SiteEntry]) -> Result<Catalog, PanelError> {
    let mut sites = Vec::with_capacity(entries.len());
    for entry in entries {
        entry.check_delimiters()?;
        let mut site = entry.clone();
        if site.category.is_empty() {
            site.category = SmolStr::new_inline(DEFAULT_CATEGORY);
        }
        sites.push(site);
    }

    let distinct = sites
        .iter()
        .map(|site| site.category.clone())
        .collect::<IndexSet<_>>();
    let mut keys = distinct
        .iter()
        .map(|category| CategoryKey::new(category))
        .collect::<Vec<_>>();
    CategoryOrder::default().sort(&mut keys);
    let categories = keys.into_iter().map(|key| key.label).collect::<Vec<_>>();

    tracing::info!(categories = ?categories, "page categories discovered");
    Ok(Catalog { sites, categories })
}
