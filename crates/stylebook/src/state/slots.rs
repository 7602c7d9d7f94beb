//! The engine's named slots.

use std::collections::BTreeMap;

use super::Slot;
use crate::model::StyleRecord;

pub const SNAPSHOT: Slot<Vec<StyleRecord>> = Slot::new("snapshot");
pub const EDIT_CACHE: Slot<Vec<StyleRecord>> = Slot::new("editCache");
pub const SELECTION: Slot<Vec<String>> = Slot::new("selection");
pub const ALL_SELECTED: Slot<bool> = Slot::new("allSelected");

pub const SEARCH_GROUP: Slot<String> = Slot::new("search.group");
pub const SEARCH_NAME: Slot<String> = Slot::new("search.name");
pub const SEARCH_FAMILY: Slot<String> = Slot::new("search.family");
pub const SEARCH_STYLE: Slot<String> = Slot::new("search.style");
pub const SEARCH_FONT_SIZE: Slot<String> = Slot::new("search.fontSize");
pub const SEARCH_LINE_HEIGHT: Slot<String> = Slot::new("search.lineHeight");

/// Group path to visibility, for the group overview.
pub const SHOW_TYPO_GROUP: Slot<BTreeMap<String, bool>> = Slot::new("showTypoGroup");
/// Duplicate label to visibility, for the duplicates view.
pub const SHOW_DUPLICATE_TYPO_GROUP: Slot<BTreeMap<String, bool>> =
    Slot::new("showDuplicateTypoGroup");
