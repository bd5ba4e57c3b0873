#![allow(dead_code)]

use paginator_core::error::Error;
use paginator_core::source::{PageSource, VecSource};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The integers 1 to 25 in ascending order.
pub fn numbers() -> VecSource<u32> {
    (1..=25).collect()
}

#[derive(Debug, PartialEq, Eq, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BackendError {
    #[from]
    #[display("{source}")]
    Paging { source: Error },
    #[display("backend unavailable during {stage}")]
    Unavailable {
        #[error(not(source))]
        stage: &'static str,
    },
}

/// A source whose count and fetch fail, with its own error type.
#[derive(Debug, Clone)]
pub struct BrokenSource {
    pub fail_count: bool,
    pub fail_fetch: bool,
}

#[async_trait::async_trait]
impl PageSource for BrokenSource {
    type Item = u32;
    type Error = BackendError;

    fn skip_take(&self, _skip: u64, _take: u64) -> Self {
        self.clone()
    }

    async fn count(&self) -> Result<u64, Self::Error> {
        if self.fail_count {
            Err(BackendError::Unavailable { stage: "count" })
        } else {
            Ok(0)
        }
    }

    async fn fetch(&self) -> Result<Vec<Self::Item>, Self::Error> {
        if self.fail_fetch {
            Err(BackendError::Unavailable { stage: "fetch" })
        } else {
            Ok(vec![])
        }
    }
}
