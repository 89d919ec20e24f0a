//! Background search worker
//!
//! Runs an [`Engine`] on its own thread so the caller stays responsive while
//! the opponent thinks. Requests go in over one channel and replies come back
//! over another; at most one request is outstanding at a time.
//!
//! ```rust,ignore
//! let mut worker = SearchWorker::spawn(engine)?;
//! worker.submit(game, Difficulty::Medium)?;
//! loop {
//!     if let Some(reply) = worker.try_recv() {
//!         break reply;
//!     }
//!     // keep rendering, handle input...
//! }
//! ```

use anyhow::{bail, Context, Result};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use opponent_engine::{Engine, EngineResult, Game, SearchLimits, SearchOutcome};
use std::thread::{self, JoinHandle};
use std::time::Duration;

struct SearchRequest {
    game: Game,
    limits: SearchLimits,
}

/// Finished search, with the position handed back to the caller
#[derive(Debug)]
pub struct SearchReply {
    pub game: Game,
    pub result: EngineResult<SearchOutcome>,
}

pub struct SearchWorker {
    requests: Option<Sender<SearchRequest>>,
    replies: Receiver<SearchReply>,
    handle: Option<JoinHandle<()>>,
    pending: bool,
}

impl SearchWorker {
    /// Move `engine` onto a dedicated search thread
    pub fn spawn(mut engine: Engine) -> Result<Self> {
        let (request_tx, request_rx) = crossbeam_channel::bounded::<SearchRequest>(1);
        let (reply_tx, reply_rx) = crossbeam_channel::bounded::<SearchReply>(1);

        let handle = thread::Builder::new()
            .name("opponent-search".to_string())
            .spawn(move || {
                for SearchRequest { mut game, limits } in request_rx {
                    let result = engine.select_move_with_limits(&mut game, limits);
                    if reply_tx.send(SearchReply { game, result }).is_err() {
                        break;
                    }
                }
                tracing::debug!("[ENGINE] Search thread exiting");
            })
            .context("failed to spawn search thread")?;

        Ok(Self {
            requests: Some(request_tx),
            replies: reply_rx,
            handle: Some(handle),
            pending: false,
        })
    }

    /// Start a search; fails while a previous one is still running
    pub fn submit(&mut self, game: Game, limits: impl Into<SearchLimits>) -> Result<()> {
        if self.pending {
            bail!("a search is already in progress");
        }
        let requests = self
            .requests
            .as_ref()
            .context("search worker is shut down")?;
        requests
            .send(SearchRequest {
                game,
                limits: limits.into(),
            })
            .context("search thread is gone")?;
        self.pending = true;
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Poll for the reply without blocking
    pub fn try_recv(&mut self) -> Option<SearchReply> {
        match self.replies.try_recv() {
            Ok(reply) => {
                self.pending = false;
                Some(reply)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block up to `timeout` for the reply
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<SearchReply>> {
        if !self.pending {
            bail!("no search in progress");
        }
        match self.replies.recv_timeout(timeout) {
            Ok(reply) => {
                self.pending = false;
                Ok(Some(reply))
            }
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => bail!("search thread is gone"),
        }
    }

    /// Block until the reply arrives
    pub fn wait(&mut self) -> Result<SearchReply> {
        if !self.pending {
            bail!("no search in progress");
        }
        let reply = self.replies.recv().context("search thread is gone")?;
        self.pending = false;
        Ok(reply)
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("[ENGINE] Search thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opponent_engine::{EngineConfig, EngineError, MoveSource};

    fn worker() -> SearchWorker {
        let engine = Engine::new(EngineConfig {
            use_book: false,
            ..EngineConfig::default()
        })
        .unwrap();
        SearchWorker::spawn(engine).unwrap()
    }

    fn shallow() -> SearchLimits {
        SearchLimits::new(Duration::from_secs(30), 1)
    }

    #[test]
    fn test_search_round_trip() {
        //! The move comes back with the untouched position
        let mut worker = worker();
        let game = Game::new();
        let fen = game.fen();

        worker.submit(game, shallow()).unwrap();
        assert!(worker.is_pending());
        let reply = worker.wait().unwrap();
        assert!(!worker.is_pending());

        let outcome = reply.result.unwrap();
        assert_eq!(outcome.source, MoveSource::Search);
        assert!(reply.game.is_legal(&outcome.best_move));
        assert_eq!(reply.game.fen(), fen);
    }

    #[test]
    fn test_second_submit_rejected_while_pending() {
        let mut worker = worker();
        worker.submit(Game::new(), shallow()).unwrap();
        assert!(worker.submit(Game::new(), shallow()).is_err());

        worker.wait().unwrap();
        worker.submit(Game::new(), shallow()).unwrap();
        worker.wait().unwrap();
    }

    #[test]
    fn test_poll_until_done() {
        let mut worker = worker();
        assert!(worker.try_recv().is_none());

        worker.submit(Game::new(), shallow()).unwrap();
        let reply = loop {
            if let Some(reply) = worker.recv_timeout(Duration::from_millis(50)).unwrap() {
                break reply;
            }
        };
        assert!(reply.result.is_ok());
        assert!(worker.recv_timeout(Duration::from_millis(1)).is_err());
    }

    #[test]
    fn test_engine_errors_are_forwarded() {
        let mut worker = worker();
        let mut game = Game::new();
        for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.push_uci(uci).unwrap();
        }
        worker.submit(game, shallow()).unwrap();
        let reply = worker.wait().unwrap();
        assert!(matches!(reply.result, Err(EngineError::GameOver { .. })));
    }

    #[test]
    fn test_wait_without_submit_fails() {
        let mut worker = worker();
        assert!(worker.wait().is_err());
    }
}
