// tests/git_repository_test.rs
use std::fs;
use std::path::Path;

use git2::{Oid, Repository as Git2Repo, Signature, Time};
use tempfile::TempDir;
use verscout::analyzer::BumpClassifier;
use verscout::cli::orchestration::{latest_version, next_version};
use verscout::domain::SemanticVersion;
use verscout::git::{Git2Repository, Repository};

fn signature(seconds: i64) -> Signature<'static> {
    Signature::new("Test User", "test@example.com", &Time::new(seconds, 0))
        .expect("Could not create signature")
}

// Helper function to setup an empty temporary git repo for testing
fn setup_test_repo() -> (TempDir, Git2Repo) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Git2Repo::init(temp_dir.path()).expect("Could not init git repo");
    (temp_dir, repo)
}

fn commit(repo: &Git2Repo, dir: &Path, message: &str, seconds: i64) -> Oid {
    let content_path = dir.join("README.md");
    fs::write(&content_path, format!("{}\n", message)).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    let sig = signature(seconds);

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Could not create commit")
}

fn lightweight_tag(repo: &Git2Repo, name: &str, oid: Oid) {
    repo.tag_lightweight(name, &repo.find_object(oid, None).unwrap(), false)
        .expect("Could not create tag");
}

fn annotated_tag(repo: &Git2Repo, name: &str, oid: Oid, seconds: i64) {
    repo.tag(
        name,
        &repo.find_object(oid, None).unwrap(),
        &signature(seconds),
        "Annotated tag",
        false,
    )
    .expect("Could not create annotated tag");
}

#[test]
fn test_open_non_repository_fails() {
    let temp_dir = TempDir::new().unwrap();
    // discover walks up, so point at a path that cannot exist
    let missing = temp_dir.path().join("missing").join("deeper");
    assert!(Git2Repository::open(&missing).is_err());
}

#[test]
fn test_lists_lightweight_tags_with_commit_time() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    lightweight_tag(&repo, "1.0.0", first);

    let tags = Git2Repository::from_git2(repo).list_tags_with_commits().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "1.0.0");
    assert_eq!(tags[0].commit, first);
    assert_eq!(tags[0].timestamp, 1_000);
}

#[test]
fn test_annotated_tags_resolve_to_commit() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    // tagger time far in the future must not be used
    annotated_tag(&repo, "v1.0.0", first, 9_000);

    let tags = Git2Repository::from_git2(repo).list_tags_with_commits().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].commit, first);
    assert_eq!(tags[0].timestamp, 1_000);
}

#[test]
fn test_tags_on_non_commits_are_skipped() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    lightweight_tag(&repo, "1.0.0", first);
    let tree_id = repo.find_commit(first).unwrap().tree_id();
    lightweight_tag(&repo, "2.0.0", tree_id);

    let tags = Git2Repository::from_git2(repo).list_tags_with_commits().unwrap();
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["1.0.0"]);
}

#[test]
fn test_annotated_tag_on_tree_is_skipped() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    lightweight_tag(&repo, "1.0.0", first);
    let tree_id = repo.find_commit(first).unwrap().tree_id();
    annotated_tag(&repo, "2.0.0", tree_id, 2_000);

    let tags = Git2Repository::from_git2(repo).list_tags_with_commits().unwrap();
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["1.0.0"]);
}

#[test]
fn test_tag_on_missing_object_is_error() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    lightweight_tag(&repo, "1.0.0", first);

    // A ref to an object the database does not contain
    fs::write(
        repo.path().join("refs").join("tags").join("2.0.0"),
        format!("{}\n", "7".repeat(40)),
    )
    .expect("Could not write dangling tag ref");

    let result = Git2Repository::from_git2(repo).list_tags_with_commits();
    assert!(result.is_err());
}

#[test]
fn test_commit_messages_since_are_newest_first() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    commit(&repo, dir.path(), "fix: second", 2_000);
    commit(&repo, dir.path(), "feat: third", 3_000);

    let messages = Git2Repository::from_git2(repo)
        .commit_messages_since(first)
        .unwrap();
    assert_eq!(messages, vec!["feat: third", "fix: second"]);
}

#[test]
fn test_commit_messages_since_head_is_empty() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);

    let messages = Git2Repository::from_git2(repo)
        .commit_messages_since(first)
        .unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_latest_version_from_real_repository() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    let second = commit(&repo, dir.path(), "fix: second", 2_000);
    let third = commit(&repo, dir.path(), "chore: third", 3_000);
    lightweight_tag(&repo, "1.0.0", first);
    annotated_tag(&repo, "v1.0.1", second, 2_500);
    lightweight_tag(&repo, "not-a-semver", third);

    let repo = Git2Repository::from_git2(repo);
    assert_eq!(latest_version(&repo).unwrap(), SemanticVersion::new(1, 0, 1));
}

#[test]
fn test_next_version_from_real_repository() {
    let (dir, repo) = setup_test_repo();
    let first = commit(&repo, dir.path(), "Initial commit", 1_000);
    annotated_tag(&repo, "1.0.0", first, 1_000);
    commit(
        &repo,
        dir.path(),
        "feat: add thing\n\nBREAKING CHANGE: removes old thing",
        2_000,
    );

    let repo = Git2Repository::open(dir.path()).unwrap();
    let next = next_version(
        &repo,
        &BumpClassifier::default(),
        SemanticVersion::new(1, 0, 0),
    )
    .unwrap();
    assert_eq!(next, SemanticVersion::new(2, 0, 0));
}
