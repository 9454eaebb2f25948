//! End-to-end flows across the workspace crates
//!
//! config file on disk -> repository -> stored files -> listing / decoding

use async_trait::async_trait;
use nb_fs::NormalizedPath;
use nb_model::{IpynbFormat, NotebookFormat, TEXT_LANGUAGE};
use nb_store::config::CONFIG_FILE_NAME;
use nb_store::{
    Error, ErrorKind, FileSystemNotebookRepository, Fetcher, Ingestion, NotebookRepository,
    StoreConfig,
};
use nb_test_utils::fixtures::{IPYNB_NOTEBOOK, ZEPPELIN_NOTE};
use pretty_assertions::assert_eq;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Serves one document for one URI; everything else is unreachable.
struct OneDocument {
    uri: &'static str,
    body: &'static str,
}

#[async_trait]
impl Fetcher for OneDocument {
    async fn fetch(&self, uri: &str) -> nb_store::Result<String> {
        if uri == self.uri {
            Ok(self.body.to_string())
        } else {
            Err(Error::Fetch {
                uri: uri.to_string(),
                message: "404 Not Found".to_string(),
            })
        }
    }
}

/// A workspace with `nbstore.toml` next to a `notebooks/` root.
fn setup_workspace(extra_config: &str) -> (TempDir, StoreConfig) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("notebooks");
    let config_path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(
        &config_path,
        format!(
            "[storage]\ndir = {:?}\nmax_depth = 3\n{extra_config}",
            root.display().to_string()
        ),
    )
    .unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    (temp, config)
}

fn open(config: &StoreConfig) -> FileSystemNotebookRepository {
    let fetcher = OneDocument {
        uri: "https://notebooks.example/shared.ipynb",
        body: IPYNB_NOTEBOOK,
    };
    FileSystemNotebookRepository::new(config, Arc::new(fetcher))
}

#[tokio::test]
async fn test_full_notebook_lifecycle() {
    let (_temp, config) = setup_workspace("");
    let repo = open(&config);
    repo.init_storage().await.unwrap();

    let blank = repo.create_notebook("/drafts/ideas", Ingestion::Blank).await.unwrap();
    let imported = repo
        .create_notebook("legacy/sales.json", Ingestion::Content(ZEPPELIN_NOTE.into()))
        .await
        .unwrap();
    let shared = repo
        .create_notebook(
            "shared",
            Ingestion::Remote("https://notebooks.example/shared.ipynb".into()),
        )
        .await
        .unwrap();

    assert_eq!(blank, "drafts/ideas.ipynb");
    assert_eq!(imported, "legacy/sales.ipynb");
    assert_eq!(shared, "shared.ipynb");

    let mut listed = repo.list_notebooks().await.unwrap();
    listed.sort();
    assert_eq!(
        listed,
        vec!["drafts/ideas.ipynb", "legacy/sales.ipynb", "shared.ipynb"]
    );
    for path in &listed {
        assert!(repo.notebook_exists(path).await);
        assert!(repo.validate_notebook_path(path));
    }

    // Remote content is stored byte for byte
    let on_disk = fs::read_to_string(repo.notebook_location(&shared)).unwrap();
    assert_eq!(on_disk, IPYNB_NOTEBOOK);

    let sales = repo.load_notebook(&imported).await.unwrap();
    let languages: Vec<&str> = sales.cells.iter().map(|c| c.language.as_str()).collect();
    assert_eq!(languages, vec![TEXT_LANGUAGE, "python", "sql"]);

    repo.delete_notebook(&blank).await.unwrap();
    assert!(!repo.notebook_exists(&blank).await);
}

#[tokio::test]
async fn test_stored_files_are_valid_jupyter_documents() {
    let (_temp, config) = setup_workspace("");
    let repo = open(&config);

    let path = repo
        .create_notebook("sales.json", Ingestion::Content(ZEPPELIN_NOTE.into()))
        .await
        .unwrap();

    let text = fs::read_to_string(repo.notebook_location(&path)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["nbformat"], 4);
    assert_eq!(value["cells"].as_array().unwrap().len(), 3);
    assert_eq!(value["cells"][0]["cell_type"], "markdown");
    assert_eq!(value["cells"][1]["cell_type"], "code");

    // Decoding with the format directly agrees with the repository
    let decoded = IpynbFormat.decode(&path, &text).unwrap();
    assert_eq!(decoded, repo.load_notebook(&path).await.unwrap());
}

#[tokio::test]
async fn test_configured_defaults_reach_blank_notebooks() {
    let (_temp, config) = setup_workspace(
        r#"
[notebook]
exclusions = ["org.slf4j:slf4j-log4j12"]

[notebook.dependencies]
python = ["pandas==2.2"]
"#,
    );
    let repo = open(&config);

    let path = repo.create_notebook("configured", Ingestion::Blank).await.unwrap();
    let notebook = repo.load_notebook(&path).await.unwrap();

    let settings = notebook.config.expect("blank notebook carries configuration");
    assert_eq!(
        settings.exclusions,
        Some(vec!["org.slf4j:slf4j-log4j12".to_string()])
    );
    assert_eq!(
        settings.dependencies.unwrap()["python"],
        vec!["pandas==2.2".to_string()]
    );
    assert!(settings.repositories.is_none());
}

#[tokio::test]
async fn test_depth_limit_from_config_governs_create_and_list() {
    let (_temp, config) = setup_workspace("");
    let repo = open(&config);

    let err = repo
        .create_notebook("a/b/c/d", Ingestion::Blank)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!config.storage.dir.join("a").exists());

    repo.create_notebook("a/b/c", Ingestion::Blank).await.unwrap();

    // Seeded deeper than the limit: present on disk, absent from the listing
    let deep = config.storage.dir.join("w/x/y/z.ipynb");
    fs::create_dir_all(deep.parent().unwrap()).unwrap();
    fs::write(&deep, IPYNB_NOTEBOOK).unwrap();

    let listed = repo.list_notebooks().await.unwrap();
    assert_eq!(listed, vec!["a/b/c.ipynb"]);
}

#[tokio::test]
async fn test_failed_creations_leave_no_trace() {
    let (_temp, config) = setup_workspace("");
    let repo = open(&config);
    repo.init_storage().await.unwrap();

    let unreachable = repo
        .create_notebook("mirror", Ingestion::Remote("https://elsewhere/x".into()))
        .await
        .unwrap_err();
    assert_eq!(unreachable.kind(), ErrorKind::Transport);

    let broken = repo
        .create_notebook("bad.json", Ingestion::Content("{\"paragraphs\": 3".into()))
        .await
        .unwrap_err();
    assert_eq!(broken.kind(), ErrorKind::Conversion);

    assert!(repo.list_notebooks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listed_paths_resolve_back_to_files() {
    let (_temp, config) = setup_workspace("");
    let repo = open(&config);
    repo.create_notebook("team/q3/review", Ingestion::Blank)
        .await
        .unwrap();

    for listed in repo.list_notebooks().await.unwrap() {
        let normalized = NormalizedPath::new(&listed);
        assert!(normalized.has_extension("ipynb"));
        assert!(repo.notebook_location(&listed).is_file());
    }
}
