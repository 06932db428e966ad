// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use crate::{
    assemble::{ self, Assembly, FailurePolicy },
    config::{ consts::SITE_BASE, options::ScrapeOptions },
    core::net::PageSource,
    dataset::Dataset,
    error::{ NetError, ScrapeError },
    progress::Progress,
    specs::index,
};

/// One worker result: id, page URL, and the fetched-and-assembled page.
type Outcome = (u32, String, Result<Assembly, NetError>);

/// Discover creature pages on the index, assign ids in link order, and build the
/// dataset. Pages that fail to fetch are skipped; pages that fail to extract are
/// handled per `scrape.policy`.
pub fn collect_creatures(
    source: &dyn PageSource,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset, ScrapeError> {

    let index_html = source.fetch(&scrape.index_url)?;
    let mut links = index::creature_links(&index_html, SITE_BASE);
    if let Some(n) = scrape.limit {
        links.truncate(n);
    }
    logf!("{} creature pages to fetch from {}", links.len(), scrape.index_url);

    let jobs = assign_ids(scrape.first_id, links)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(jobs.len());
        p.log(&format!("Fetching {} creature pages…", jobs.len()));
    }

    // Concurrency
    let counter = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();
    let workers = scrape.workers.min(jobs.len()).max(1);
    let extract = scrape.extract;
    let abort_on_failure = scrape.policy == FailurePolicy::Abort;
    let keep_partial = scrape.policy == FailurePolicy::Partial;

    let mut outcomes: Vec<Outcome> = Vec::with_capacity(jobs.len());

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (jobs, counter, stop) = (&jobs, &counter, &stop);

            s.spawn(move || {
                loop {
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some((id, url)) = jobs.get(i) else { break };

                    // A page that did not come back OK never reaches the extractors.
                    let result = source
                        .fetch(url)
                        .map(|html| assemble::assemble_page(&html, *id, &extract));
                    if tx.send((*id, url.clone(), result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results
        for outcome in res_rx.iter() {
            let (id, url, result) = &outcome;
            match result {
                Ok(a) if a.is_complete() => {
                    let name = a.record.monster_name.as_deref().unwrap_or("?");
                    logd!("Creature {id}: {name}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(*id, name);
                    }
                }
                Ok(a) if keep_partial => {
                    for f in &a.failures {
                        logw!("Creature {id} ({url}) kept without {}: {f}", f.field());
                    }
                    let name = a.record.monster_name.as_deref().unwrap_or("?");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(*id, name);
                    }
                }
                Ok(a) => {
                    for f in &a.failures {
                        loge!("Creature {id} ({url}): {f}");
                    }
                    if let Some(p) = progress.as_deref_mut() {
                        let reason = a.failures.first().map(|f| f.to_string()).unwrap_or_default();
                        p.item_failed(*id, &reason);
                    }
                    if abort_on_failure {
                        stop.store(true, Ordering::Relaxed);
                    }
                }
                Err(e) => {
                    loge!("Creature {id}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(*id, &e.to_string());
                    }
                }
            }
            outcomes.push(outcome);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Workers finish out of order
    outcomes.sort_by_key(|(id, _, _)| *id);
    build_dataset(outcomes, scrape.policy)
}

/// Pair each link with its monster_id, counting up from `first_id`.
fn assign_ids(first_id: u32, links: Vec<String>) -> Result<Vec<(u32, String)>, ScrapeError> {
    let count = links.len();
    links
        .into_iter()
        .enumerate()
        .map(|(i, url)| {
            u32::try_from(i)
                .ok()
                .and_then(|i| first_id.checked_add(i))
                .map(|id| (id, url))
                .ok_or(ScrapeError::IdRange { first_id, count })
        })
        .collect()
}

fn build_dataset(outcomes: Vec<Outcome>, policy: FailurePolicy) -> Result<Dataset, ScrapeError> {
    let total = outcomes.len();
    let mut dataset = Dataset::new();
    let mut fetch_failed = 0usize;
    let mut skipped = 0usize;

    for (id, url, result) in outcomes {
        let Ok(mut assembly) = result else {
            fetch_failed += 1;
            continue;
        };

        if assembly.is_complete() || policy == FailurePolicy::Partial {
            dataset.push(assembly.record)?;
            continue;
        }
        match policy {
            FailurePolicy::Abort => {
                return Err(ScrapeError::Extract {
                    monster_id: id,
                    url,
                    source: assembly.failures.swap_remove(0),
                });
            }
            _ => skipped += 1,
        }
    }

    logf!(
        "Collected {} of {} creatures ({} not fetched, {} skipped)",
        dataset.len(), total, fetch_failed, skipped
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::StaticSource;

    const INDEX: &str = r#"<a href="/wiki/A_(5e_Creature)">A</a><a href="/wiki/B_(5e_Creature)">B</a>"#;

    fn page(name: &str, hp: &str) -> String {
        format!(r#"<html><body><span class="mw-headline">{name}</span>
<table><tr><td><i>Tiny beast, unaligned</i>
<p><b><a href="/wiki/Armor_Class">Armor Class</a></b> 12<br>
<b><a href="/wiki/Hit_Points">Hit Points</a></b> {hp}<br>
<b><a href="/wiki/Movement">Speed</a></b> 30 ft.</p>
<table>
<tr><th><a href="/wiki/Strength">STR</a></th></tr>
<tr><td>3 (-4)</td><td>15 (+2)</td><td>10 (+0)</td><td>3 (-4)</td><td>12 (+1)</td><td>7 (-2)</td></tr>
</table></td></tr></table></body></html>"#)
    }

    fn source(second_hp: &str) -> StaticSource {
        StaticSource::new()
            .with_page("https://index", INDEX)
            .with_page("https://dandwiki.com/wiki/A_(5e_Creature)", page("A", "2 (1d4)"))
            .with_page("https://dandwiki.com/wiki/B_(5e_Creature)", page("B", second_hp))
    }

    fn opts(policy: FailurePolicy, workers: usize) -> ScrapeOptions {
        ScrapeOptions { index_url: s!("https://index"), policy, workers, ..ScrapeOptions::default() }
    }

    #[test]
    fn ids_follow_link_order_with_any_worker_count() {
        for workers in [1, 2, 4] {
            let ds = collect_creatures(&source("5 (2d4)"), &opts(FailurePolicy::Skip, workers), None)
                .unwrap();
            let names: Vec<_> = ds.records().iter()
                .map(|r| (r.monster_id, r.monster_name.clone().unwrap()))
                .collect();
            assert_eq!(names, vec![(1, s!("A")), (2, s!("B"))]);
        }
    }

    #[test]
    fn policies_on_broken_page() {
        let ds = collect_creatures(&source("n/a"), &opts(FailurePolicy::Skip, 1), None).unwrap();
        assert_eq!(ds.len(), 1);

        let ds = collect_creatures(&source("n/a"), &opts(FailurePolicy::Partial, 1), None).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.get(2).unwrap().vitality.is_none());

        let err = collect_creatures(&source("n/a"), &opts(FailurePolicy::Abort, 1), None).unwrap_err();
        assert!(matches!(err, ScrapeError::Extract { monster_id: 2, .. }));
    }

    #[test]
    fn unfetchable_page_is_skipped() {
        let src = StaticSource::new()
            .with_page("https://index", INDEX)
            .with_page("https://dandwiki.com/wiki/A_(5e_Creature)", page("A", "2 (1d4)"));
        let ds = collect_creatures(&src, &opts(FailurePolicy::Abort, 1), None).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.get(2).is_none());
    }

    #[derive(Default)]
    struct Tally {
        done: Vec<u32>,
        failed: Vec<u32>,
    }

    impl Progress for Tally {
        fn item_done(&mut self, monster_id: u32, _name: &str) { self.done.push(monster_id); }
        fn item_failed(&mut self, monster_id: u32, _reason: &str) { self.failed.push(monster_id); }
    }

    #[test]
    fn partial_records_are_reported_done() {
        let mut tally = Tally::default();
        collect_creatures(&source("n/a"), &opts(FailurePolicy::Partial, 1), Some(&mut tally)).unwrap();
        tally.done.sort();
        assert_eq!(tally.done, vec![1, 2]);
        assert!(tally.failed.is_empty());

        let mut tally = Tally::default();
        collect_creatures(&source("n/a"), &opts(FailurePolicy::Skip, 1), Some(&mut tally)).unwrap();
        assert_eq!(tally.done, vec![1]);
        assert_eq!(tally.failed, vec![2]);
    }

    #[test]
    fn ids_up_to_u32_max() {
        let one = StaticSource::new()
            .with_page("https://index", r#"<a href="/wiki/A_(5e_Creature)">A</a>"#)
            .with_page("https://dandwiki.com/wiki/A_(5e_Creature)", page("A", "2 (1d4)"));
        let scrape = ScrapeOptions { first_id: u32::MAX, ..opts(FailurePolicy::Skip, 1) };

        let ds = collect_creatures(&one, &scrape, None).unwrap();
        assert_eq!(ds.records()[0].monster_id, u32::MAX);

        let err = collect_creatures(&source("5 (2d4)"), &scrape, None).unwrap_err();
        assert!(matches!(err, ScrapeError::IdRange { first_id: u32::MAX, count: 2 }));
    }

    #[test]
    fn missing_index_is_an_error() {
        let err = collect_creatures(&StaticSource::new(), &opts(FailurePolicy::Skip, 1), None)
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Net(NetError::Missing(_))));
    }
}
