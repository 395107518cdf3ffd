//! Home list: search, filters and urgency sections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scheduler::{ItemBucket, ReminderScheduler};
use crate::models::{Item, ItemCategory, VaultId};

/// Home screen filters; the default matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Case-insensitive substring of the title or issuer
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub vault: Option<VaultId>,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    /// Hide items that expired before today
    #[serde(default)]
    pub upcoming_only: bool,
}

impl ItemQuery {
    fn matches(&self, item: &Item, scheduler: &ReminderScheduler, now: DateTime<Utc>) -> bool {
        let text_ok = match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                item.title.to_lowercase().contains(&query)
                    || item
                        .issuer
                        .as_deref()
                        .is_some_and(|issuer| issuer.to_lowercase().contains(&query))
            }
        };
        let vault_ok = self.vault.is_none() || item.vault_id == self.vault;
        let category_ok = self.category.map_or(true, |c| item.category == c);
        let upcoming_ok = !self.upcoming_only || scheduler.days_until_expiry(item, now) >= 0;

        text_ok && vault_ok && category_ok && upcoming_ok
    }
}

/// Matching items split by urgency, each section in expiry order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeSections<'a> {
    pub soon: Vec<&'a Item>,
    pub later: Vec<&'a Item>,
    pub expired: Vec<&'a Item>,
}

impl<'a> HomeSections<'a> {
    pub fn is_empty(&self) -> bool {
        self.soon.is_empty() && self.later.is_empty() && self.expired.is_empty()
    }

    pub fn len(&self) -> usize {
        self.soon.len() + self.later.len() + self.expired.len()
    }

    /// Sections in display order with their bucket
    pub fn sections(&self) -> [(ItemBucket, &[&'a Item]); 3] {
        [
            (ItemBucket::Soon, self.soon.as_slice()),
            (ItemBucket::Later, self.later.as_slice()),
            (ItemBucket::Expired, self.expired.as_slice()),
        ]
    }
}

/// Builds the home list from a snapshot
pub struct ItemListService<'a> {
    scheduler: &'a ReminderScheduler,
}

impl<'a> ItemListService<'a> {
    pub fn new(scheduler: &'a ReminderScheduler) -> Self {
        Self { scheduler }
    }

    /// Items matching `query`, sorted by expiry date
    pub fn search<'i>(
        &self,
        items: &'i [Item],
        query: &ItemQuery,
        now: DateTime<Utc>,
    ) -> Vec<&'i Item> {
        let mut matches: Vec<&'i Item> = items
            .iter()
            .filter(|item| query.matches(item, self.scheduler, now))
            .collect();
        matches.sort_by_key(|item| item.expiry_date);
        matches
    }

    /// Matching items partitioned into soon/later/expired
    pub fn sections<'i>(
        &self,
        items: &'i [Item],
        query: &ItemQuery,
        now: DateTime<Utc>,
    ) -> HomeSections<'i> {
        let mut sections = HomeSections::default();
        for item in self.search(items, query, now) {
            match self.scheduler.bucket(item, now) {
                ItemBucket::Soon => sections.soon.push(item),
                ItemBucket::Later => sections.later.push(item),
                ItemBucket::Expired => sections.expired.push(item),
            }
        }
        sections
    }

    /// Find an item by id reference or case-insensitive title
    pub fn find<'i>(items: &'i [Item], reference: &str) -> Option<&'i Item> {
        let needle = reference.trim().to_lowercase();
        items
            .iter()
            .find(|item| item.title.to_lowercase() == needle)
            .or_else(|| items.iter().find(|item| item.id.matches_reference(reference)))
    }
}
