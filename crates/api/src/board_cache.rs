//! Server-side mirror of the launchpad board.
//!
//! The board is fetched once when a session starts (or lazily on the first
//! authenticated read) and then kept in step with every successful write,
//! so reads never go back to the store until a reload is requested.

use launchpad_core::board::Board;
use launchpad_db::repositories::BoardRepo;
use launchpad_db::DbPool;
use tokio::sync::RwLock;

/// Cached board snapshot. `None` until the first load.
#[derive(Debug, Default)]
pub struct BoardCache {
    inner: RwLock<Option<Board>>,
}

impl BoardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the board from the store and replace the cached copy.
    ///
    /// The write lock is held across the fetch so a write mirrored while
    /// loading cannot be overwritten by the older result.
    pub async fn reload(&self, pool: &DbPool) -> Board {
        let mut guard = self.inner.write().await;
        let board = BoardRepo::load(pool).await;
        *guard = Some(board.clone());
        board
    }

    /// Current board, loading it first if nothing is cached yet.
    pub async fn snapshot(&self, pool: &DbPool) -> Board {
        if let Some(board) = self.inner.read().await.as_ref() {
            return board.clone();
        }

        let mut guard = self.inner.write().await;
        // Another request may have loaded it while we waited for the lock.
        if let Some(board) = guard.as_ref() {
            return board.clone();
        }
        let board = BoardRepo::load(pool).await;
        *guard = Some(board.clone());
        board
    }

    /// Apply a mirrored write to the cached board.
    ///
    /// Returns `None` when nothing is cached; the next snapshot reads the
    /// write back from the store.
    pub async fn apply<R>(&self, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        self.inner.write().await.as_mut().map(f)
    }

    /// Drop the cached board.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
