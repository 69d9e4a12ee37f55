//! Behavioural tests for the in-memory task store: seeding, filtering,
//! pagination, and mutation semantics.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::rstest;

use crate::tasks::{
    adapters::{memory::InMemoryTaskStore, seed::StaticSeed},
    domain::{NewTask, Task, TaskId, TaskPatch, TaskQuery, TaskStatus},
    ports::{SeedSource, SeedSourceError},
};

fn make_task(title: &str, status: TaskStatus) -> Task {
    let input = NewTask::new(title, status).expect("valid title");
    Task::new(input, &DefaultClock)
}

fn seeded_store(tasks: Vec<Task>) -> InMemoryTaskStore<DefaultClock> {
    InMemoryTaskStore::new(Box::new(StaticSeed::new(tasks)), Arc::new(DefaultClock))
}

/// Seed source that always fails, for the empty-fallback path.
struct FailingSeed;

#[async_trait]
impl SeedSource for FailingSeed {
    async fn load(&self) -> Result<Vec<Task>, SeedSourceError> {
        Err(SeedSourceError::Io(std::io::Error::other("seed offline")))
    }
}

/// Seed source counting how many times it is consulted.
struct CountingSeed {
    loads: Arc<AtomicUsize>,
}

#[async_trait]
impl SeedSource for CountingSeed {
    async fn load(&self) -> Result<Vec<Task>, SeedSourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(vec![make_task("Seeded entry", TaskStatus::Pending)])
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status() {
    let pending = make_task("Pay rent", TaskStatus::Pending);
    let store = seeded_store(vec![
        pending.clone(),
        make_task("Write Report", TaskStatus::InProgress),
    ]);

    let page = store
        .list(&TaskQuery::default().with_status(TaskStatus::Pending))
        .await;

    assert_eq!(page.data, vec![pending]);
    assert_eq!(page.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_paginates_with_remainder_and_empty_overflow() {
    let tasks: Vec<Task> = (0..5)
        .map(|n| make_task(&format!("Task {n}"), TaskStatus::Pending))
        .collect();
    let store = seeded_store(tasks);

    let last = store.list(&TaskQuery::page(3).with_limit(2)).await;
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.total, 5);

    let overflow = store.list(&TaskQuery::page(4).with_limit(2)).await;
    assert!(overflow.data.is_empty());
    assert_eq!(overflow.total, 5);
}

#[rstest]
#[case("report")]
#[case("REPORT")]
#[tokio::test(flavor = "multi_thread")]
async fn list_search_is_case_insensitive(#[case] term: &str) {
    let report = make_task("Write Report", TaskStatus::Pending);
    let store = seeded_store(vec![
        report.clone(),
        make_task("Pay rent", TaskStatus::Pending),
    ]);

    let page = store.list(&TaskQuery::default().with_search(term)).await;

    assert_eq!(page.data, vec![report]);
    assert_eq!(page.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_prepends_and_appears_once_in_list() {
    let store = seeded_store(vec![make_task("Pay rent", TaskStatus::Pending)]);
    let input = NewTask::new("Write Report", TaskStatus::Pending).expect("valid title");

    let created = store.create(input).await;
    let page = store.list(&TaskQuery::default()).await;

    assert_eq!(page.total, 2);
    assert_eq!(page.data.first(), Some(&created));
    let occurrences = page
        .data
        .iter()
        .filter(|task| task.id() == created.id())
        .count();
    assert_eq!(occurrences, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_merges_fields_and_refreshes_timestamp() {
    let store = seeded_store(Vec::new());
    let input = NewTask::new("X", TaskStatus::Pending).expect("valid title");
    let created = store.create(input).await;

    // The wall clock needs a visible tick between create and update.
    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = store
        .update(
            created.id(),
            TaskPatch::new().with_status(TaskStatus::Completed),
        )
        .await
        .expect("task exists");

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.title(), "X");
    assert!(updated.updated_at() > updated.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_id_returns_none_and_leaves_collection() {
    let store = seeded_store(vec![make_task("Pay rent", TaskStatus::Pending)]);

    let result = store
        .update(TaskId::new(), TaskPatch::new().with_title("Y").expect("valid title"))
        .await;
    let page = store.list(&TaskQuery::default()).await;

    assert_eq!(result, None);
    assert_eq!(page.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_existing_task() {
    let victim = make_task("Pay rent", TaskStatus::Pending);
    let store = seeded_store(vec![victim.clone()]);

    assert!(store.delete(victim.id()).await);
    let page = store.list(&TaskQuery::default()).await;
    assert_eq!(page.total, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_id_returns_false_and_leaves_collection() {
    let store = seeded_store(vec![make_task("Pay rent", TaskStatus::Pending)]);

    assert!(!store.delete(TaskId::new()).await);
    let page = store.list(&TaskQuery::default()).await;
    assert_eq!(page.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_returns_seeded_task_or_none() {
    let seeded = make_task("Pay rent", TaskStatus::Pending);
    let store = seeded_store(vec![seeded.clone()]);

    assert_eq!(store.find(seeded.id()).await, Some(seeded));
    assert_eq!(store.find(TaskId::new()).await, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_seed_falls_back_to_empty_collection() {
    let store = InMemoryTaskStore::new(Box::new(FailingSeed), Arc::new(DefaultClock));

    let page = store.list(&TaskQuery::default()).await;

    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_seed_does_not_block_subsequent_mutation() {
    let store = InMemoryTaskStore::new(Box::new(FailingSeed), Arc::new(DefaultClock));
    let input = NewTask::new("Fresh start", TaskStatus::Pending).expect("valid title");

    let created = store.create(input).await;
    let page = store.list(&TaskQuery::default()).await;

    assert_eq!(page.data, vec![created]);
    assert_eq!(page.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_is_memoized_across_concurrent_first_calls() {
    let loads = Arc::new(AtomicUsize::new(0));
    let store = Arc::new(InMemoryTaskStore::new(
        Box::new(CountingSeed {
            loads: Arc::clone(&loads),
        }),
        Arc::new(DefaultClock),
    ));

    let query = TaskQuery::default();
    let (first, second) = tokio::join!(store.list(&query), store.list(&query));
    let third = store.list(&TaskQuery::default()).await;

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(first.total, 1);
    assert_eq!(second.total, 1);
    assert_eq!(third.total, 1);
}
