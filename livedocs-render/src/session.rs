//! Session grouping.
//!
//! Partitions a document's code regions by session identifier. Groups keep
//! document order internally and are iterated in the order their session
//! was first seen, so "the first region of a session" and the order of the
//! rendered controls are both deterministic.

use indexmap::IndexMap;
use livedocs_core::CodeRegion;

/// One session and its regions, in document order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGroup<'a> {
    id: &'a str,
    first: &'a CodeRegion,
    regions: Vec<&'a CodeRegion>,
}

impl<'a> SessionGroup<'a> {
    fn starting_with(region: &'a CodeRegion) -> Self {
        Self {
            id: region.session.as_str(),
            first: region,
            regions: vec![region],
        }
    }

    /// Session identifier.
    #[must_use]
    pub const fn id(&self) -> &'a str {
        self.id
    }

    /// The region that appears first in the document.
    #[must_use]
    pub const fn first(&self) -> &'a CodeRegion {
        self.first
    }

    /// Regions belonging to the session.
    #[must_use]
    pub fn regions(&self) -> &[&'a CodeRegion] {
        &self.regions
    }

    /// Number of regions in the session, at least one.
    #[must_use]
    pub fn size(&self) -> usize {
        self.regions.len()
    }
}

/// All sessions of a document, keyed by identifier in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGroups<'a> {
    groups: IndexMap<&'a str, SessionGroup<'a>>,
}

impl<'a> SessionGroups<'a> {
    /// Groups `regions` by their session identifier.
    #[must_use]
    pub fn from_regions(regions: &'a [CodeRegion]) -> Self {
        let mut groups: IndexMap<&'a str, SessionGroup<'a>> = IndexMap::new();
        for region in regions {
            groups
                .entry(region.session.as_str())
                .and_modify(|group| group.regions.push(region))
                .or_insert_with(|| SessionGroup::starting_with(region));
        }
        Self { groups }
    }

    /// Number of distinct sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the document had no code regions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks up a session by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SessionGroup<'a>> {
        self.groups.get(id)
    }

    /// Sessions in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &SessionGroup<'a>> {
        self.groups.values()
    }

    /// Size of the largest session, or `0` when there are none.
    #[must_use]
    pub fn max_group_size(&self) -> usize {
        self.groups.values().map(SessionGroup::size).max().unwrap_or(0)
    }
}

/// Groups `regions` by session. Shorthand for [`SessionGroups::from_regions`].
#[must_use]
pub fn group_sessions(regions: &[CodeRegion]) -> SessionGroups<'_> {
    SessionGroups::from_regions(regions)
}
