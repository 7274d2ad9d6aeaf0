//! Contextual hint copy
//!
//! English strings shown in contextual feature recommendation bubbles.

// Tab tray
pub const INACTIVE_TABS_BODY: &str = "Tabs you haven’t viewed for two weeks get moved here.";
pub const INACTIVE_TABS_ACTION: &str = "Turn off in settings";

// Homepage, jump back in
pub const JUMP_BACK_IN_PERSONALIZED_HOME: &str =
    "Meet your personalized homepage. Recent tabs, bookmarks, and search results will appear here.";
pub const JUMP_BACK_IN_PERSONALIZED_HOME_OLD: &str =
    "Your personalized Firefox homepage now makes it easier to pick up where you left off. Find your recent tabs, bookmarks, and search results.";
pub const JUMP_BACK_IN_SYNCED_TAB: &str =
    "Your tabs are syncing! Pick up where you left off on your other device.";

// Toolbar
pub const SEARCH_BAR_PLACEMENT_BUTTON: &str = "Toolbar Settings";
pub const SEARCH_BAR_TOP_PLACEMENT: &str =
    "Move the toolbar to the top if that’s more your style.";
pub const SEARCH_BAR_BOTTOM_PLACEMENT: &str =
    "Move the toolbar to the bottom if that’s more your style.";
pub const SEARCH_BAR_PLACEMENT_NEW_USERS: &str =
    "To make entering info a little easier, the toolbar is now at the bottom by default.";
pub const SEARCH_BAR_PLACEMENT_EXISTING_USERS: &str =
    "New: your toolbar can now be placed at the bottom for easier one-handed browsing.";
