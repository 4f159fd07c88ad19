// Reusable components live here.

pub mod content_card;
pub mod curated_topic;
pub mod external_tracked_link;
pub mod nav_link;
pub mod spinner;
