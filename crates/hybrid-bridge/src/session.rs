//! Process-wide browser session shared by every view.
//!
//! Each view gets its own `wry::WebContext`, but all of them point at the
//! same data directory, so cookies and storage persist across views.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, warn};

static SHARED: OnceLock<SessionPool> = OnceLock::new();

#[derive(Debug)]
pub struct SessionPool {
    data_directory: Option<PathBuf>,
}

impl SessionPool {
    /// Initialise the process-wide pool. Only the first call decides the
    /// data directory; later calls get the existing pool.
    pub fn init(data_directory: Option<PathBuf>) -> &'static SessionPool {
        let pool = SHARED.get_or_init(|| {
            debug!(data_directory = ?data_directory, "session pool initialised");
            SessionPool {
                data_directory: data_directory.clone(),
            }
        });
        if pool.data_directory != data_directory {
            warn!(
                requested = ?data_directory,
                active = ?pool.data_directory,
                "session pool already initialised, keeping the active data directory"
            );
        }
        pool
    }

    /// The process-wide pool, initialised with the engine default directory
    /// if nobody called [`SessionPool::init`] first.
    pub fn shared() -> &'static SessionPool {
        SHARED.get_or_init(|| SessionPool {
            data_directory: None,
        })
    }

    pub fn data_directory(&self) -> Option<&Path> {
        self.data_directory.as_deref()
    }

    /// A fresh engine context bound to the shared data directory.
    pub fn web_context(&self) -> wry::WebContext {
        wry::WebContext::new(self.data_directory.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_a_process_singleton() {
        let first = SessionPool::shared();
        let second = SessionPool::init(Some(PathBuf::from("/tmp/hybrid-shell-other")));
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.data_directory(), second.data_directory());
    }
}
