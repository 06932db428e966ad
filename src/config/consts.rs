// src/config/consts.rs

// Net config
pub const SITE_BASE: &str = "https://dandwiki.com";
pub const INDEX_URL: &str = "https://www.dandwiki.com/wiki/5e_Monsters";
pub const USER_AGENT: &str = concat!("monster_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Discovery: creature pages are titled "<Name> (5e Creature)"
pub const CREATURE_LINK_PATTERN: &str = r"\(5e_Creature\)";

// Scrape
pub const FIRST_MONSTER_ID: u32 = 1;
pub const WORKERS: usize = 1;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "monsters";
