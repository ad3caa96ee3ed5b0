use chrono::Utc;
use domain_workslip::{
    model::entity::{DraftRecord, WorkSlip},
    repository::{MutableRepository, ReadOnlyRepository, SoCounterRepo},
};
use indoc::indoc;
use infrastructure_client::{ClientConfig, FileSoCounterRepo, JsonFileDraftRepo};

fn draft(so_number: &str) -> DraftRecord {
    DraftRecord::new(
        WorkSlip {
            so_number: so_number.to_owned(),
            ..Default::default()
        },
        Utc::now(),
    )
}

fn config(dir: &tempfile::TempDir) -> ClientConfig {
    ClientConfig {
        data_dir: dir.path().join("nested"),
        ..Default::default()
    }
}

#[tokio::test]
async fn drafts_are_listed_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileDraftRepo::new(config(&dir).drafts_path());
    assert!(repo.get_all().await.unwrap().is_empty());

    let first = draft("25-000001");
    let second = draft("25-000002");
    repo.insert(&first).await.unwrap();
    assert!(repo.save_changed().await.unwrap());
    repo.insert(&second).await.unwrap();
    repo.save_changed().await.unwrap();

    let numbers: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|el| el.slip().so_number.clone())
        .collect();
    assert_eq!(numbers, ["25-000002", "25-000001"]);
    assert_eq!(repo.get_by_id(first.id()).await.unwrap(), Some(first));
}

#[tokio::test]
async fn staged_changes_wait_for_save() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileDraftRepo::new(config(&dir).drafts_path());
    let kept = draft("25-000001");
    let dropped = draft("25-000002");
    repo.insert(&kept).await.unwrap();
    repo.insert(&dropped).await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());
    repo.save_changed().await.unwrap();

    repo.delete_by_id(dropped.id()).await.unwrap();
    repo.delete_by_id("draft-unknown").await.unwrap();
    repo.save_changed().await.unwrap();
    assert!(!repo.save_changed().await.unwrap());

    let left = repo.get_all().await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id(), kept.id());
}

#[tokio::test]
async fn legacy_drafts_file_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drafts.json");
    std::fs::write(
        &path,
        indoc! {r#"
            [
                {
                    "id": "draft-1700000000000-abc1234",
                    "soNumber": "24-000003",
                    "date": "2024-07-09",
                    "areaInHouse": true,
                    "office": "CTO",
                    "actionDone": "Computer isolation",
                    "recommendation": "",
                    "createdAt": "2024-07-09T01:02:03.004Z"
                }
            ]
        "#},
    )
    .unwrap();

    let repo = JsonFileDraftRepo::new(&path);
    let drafts = repo.get_all().await.unwrap();
    assert_eq!(drafts.len(), 1);
    let slip = drafts[0].slip();
    assert_eq!(slip.offices, ["CTO"]);
    assert_eq!(slip.technical_reports[0].request, "Computer isolation");
    assert_eq!(slip.quarter.number(), 3);
}

#[tokio::test]
async fn unreadable_drafts_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drafts.json");
    std::fs::write(&path, "{ not json").unwrap();

    let repo = JsonFileDraftRepo::new(&path);
    assert!(repo.get_all().await.unwrap().is_empty());
    assert!(repo.get_by_id("draft-1").await.unwrap().is_none());
}

#[tokio::test]
async fn unreadable_drafts_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drafts.json");
    std::fs::write(&path, "{ not json").unwrap();

    let repo = JsonFileDraftRepo::new(&path);
    repo.insert(&draft("25-000009")).await.unwrap();
    assert!(repo.save_changed().await.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn odd_entries_do_not_cost_the_other_drafts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drafts.json");
    let first = draft("25-000001");
    let second = draft("25-000002");
    let stored = serde_json::json!([
        first,
        second,
        { "id": "draft-odd", "soNumber": "25-000003", "office": "CTO", "offices": "CTO" },
        42
    ]);
    std::fs::write(&path, stored.to_string()).unwrap();

    let repo = JsonFileDraftRepo::new(&path);
    let drafts = repo.get_all().await.unwrap();
    assert_eq!(drafts.len(), 3);
    assert_eq!(drafts[2].slip().offices, ["CTO"]);

    let added = draft("25-000009");
    repo.insert(&added).await.unwrap();
    repo.delete_by_id(second.id()).await.unwrap();
    assert!(repo.save_changed().await.unwrap());

    let numbers: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|el| el.slip().so_number.clone())
        .collect();
    assert_eq!(numbers, ["25-000009", "25-000001", "25-000003"]);
    let text = std::fs::read_to_string(&path).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[3], 42);
}

#[tokio::test]
async fn so_counter_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSoCounterRepo::new(config(&dir).so_counter_path());
    assert_eq!(repo.load().await.unwrap(), None);
    repo.store("25-000009").await.unwrap();
    assert_eq!(repo.load().await.unwrap().as_deref(), Some("25-000009"));
}
