use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use librqbit::{AddTorrent, AddTorrentOptions, Session};
use transfer::{FetchError, FetchedFile, Fetcher};

use crate::utils;

/// [`Fetcher`] implementation over an in-process librqbit session.
///
/// A fresh session is created per fetch, with its output folder set to
/// the request's workspace, so concurrent fetches never share engine
/// state or disk paths.
#[derive(Clone, Default)]
pub struct RqbitFetcher;

impl RqbitFetcher {
    pub fn new() -> Self {
        Self
    }

    async fn download(&self, session: &Arc<Session>, link: &str) -> anyhow::Result<()> {
        let add = AddTorrent::from_cli_argument(link)?;
        let response = session
            .add_torrent(
                add,
                Some(AddTorrentOptions {
                    overwrite: true,
                    ..Default::default()
                }),
            )
            .await?;

        let handle = response
            .into_handle()
            .ok_or_else(|| anyhow::anyhow!("torrent was not added to the session"))?;

        if let Some(hash) = utils::extract_info_hash(link) {
            tracing::info!("Downloading torrent {}", hash);
        }

        handle.wait_until_completed().await?;
        Ok(())
    }
}

#[async_trait]
impl Fetcher for RqbitFetcher {
    async fn fetch(
        &self,
        link: &str,
        dest: &Path,
        budget: Duration,
    ) -> Result<Vec<FetchedFile>, FetchError> {
        if !utils::is_supported_link(link) {
            return Err(FetchError::InvalidLink(link.to_string()));
        }

        let session = Session::new(dest.to_path_buf())
            .await
            .map_err(|err| FetchError::Engine { source: err.into() })?;

        // The session spawns detached tasks that keep writing into
        // `dest` until stopped; stop it before returning on every
        // path so workspace cleanup never races a live engine.
        let downloaded = tokio::time::timeout(budget, self.download(&session, link)).await;
        session.stop().await;

        match downloaded {
            Ok(Ok(())) => {}
            Ok(Err(err)) => return Err(FetchError::Engine { source: err.into() }),
            Err(_) => return Err(FetchError::Timeout(budget)),
        }

        let files = walk_files(dest).map_err(|err| FetchError::Engine { source: Box::new(err) })?;
        tracing::info!("Fetch complete: {} file(s) in {}", files.len(), dest.display());
        Ok(files)
    }
}

/// Enumerate every regular file under `dir`, depth-first, in sorted
/// order so uploads are deterministic.
pub fn walk_files(dir: &Path) -> io::Result<Vec<FetchedFile>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<FetchedFile>) -> io::Result<()> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    entries.sort();

    for path in entries {
        let metadata = std::fs::metadata(&path)?;
        if metadata.is_dir() {
            collect(&path, files)?;
        } else if metadata.is_file() {
            files.push(FetchedFile::new(path, metadata.len()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_rejects_invalid_link_before_engine_start() {
        let fetcher = RqbitFetcher::new();
        let result = fetcher
            .fetch("not a link", Path::new("/nonexistent"), Duration::from_secs(1))
            .await;
        assert!(matches!(result, Err(FetchError::InvalidLink(_))));
    }

    #[test]
    fn test_walk_files_recurses_and_sorts() {
        let root = std::env::temp_dir().join("leechbot-walk-test");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("b.txt"), b"bb").unwrap();
        std::fs::write(root.join("a.txt"), b"a").unwrap();
        std::fs::write(root.join("sub").join("c.bin"), b"ccc").unwrap();

        let files = walk_files(&root).unwrap();
        let names: Vec<String> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.bin"]);
        assert_eq!(files[0].size, 1);
        assert_eq!(files[1].size, 2);
        assert_eq!(files[2].size, 3);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_walk_files_empty_dir() {
        let root = std::env::temp_dir().join("leechbot-walk-empty");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        assert!(walk_files(&root).unwrap().is_empty());
        std::fs::remove_dir_all(&root).unwrap();
    }
}
