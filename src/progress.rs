// src/progress.rs
/// Lightweight progress reporting used by the crawl.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of creature pages found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One creature page was fetched and assembled.
    fn item_done(&mut self, _monster_id: u32, _name: &str) {}

    /// One creature page could not be fetched or did not fully extract.
    fn item_failed(&mut self, _monster_id: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
