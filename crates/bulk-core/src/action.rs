//! Per-item action plumbing.
//!
//! An action is the asynchronous operation applied to one item of a bulk run
//! (delete a template, relaunch a job, ...). Its only failure signal is an
//! `Err(Rejection)`; no retries or rollbacks happen on top of it.
use std::{error::Error as StdError, future::Future};

use async_trait::async_trait;
use thiserror::Error;

use bulk_model::UNKNOWN_ERROR;

/// Failure value produced by an item action.
#[derive(Debug)]
pub enum Rejection {
    /// Structured error; its message is shown to the operator.
    Error(Box<dyn StdError + Send + Sync>),
    /// Arbitrary payload without a usable message.
    Value(serde_json::Value),
}

#[derive(Debug, Error)]
#[error("{0}")]
struct Message(String);

impl Rejection {
    /// Reject with a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Rejection::Error(Box::new(Message(message.into())))
    }

    /// Reject with a value that is not an error.
    pub fn value(value: impl Into<serde_json::Value>) -> Self {
        Rejection::Value(value.into())
    }

    /// Message recorded in the outcome map for this rejection.
    ///
    /// Non-error values and errors with a blank message map to [`UNKNOWN_ERROR`].
    pub fn failure_message(&self) -> String {
        match self {
            Rejection::Error(err) => {
                let msg = err.to_string();
                if msg.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    msg
                }
            }
            Rejection::Value(_) => UNKNOWN_ERROR.to_string(),
        }
    }
}

impl<E> From<E> for Rejection
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Rejection::Error(Box::new(err))
    }
}

/// Asynchronous operation applied to every item of a bulk run.
///
/// Implemented for any `Fn(&T) -> impl Future<Output = Result<(), Rejection>>`
/// whose future owns its data (copy what you need out of the item before the
/// `async move` block), so most callers pass a closure.
#[async_trait]
pub trait BulkAction<T: Sync>: Send + Sync {
    async fn run(&self, item: &T) -> Result<(), Rejection>;
}

#[async_trait]
impl<T, F, Fut> BulkAction<T> for F
where
    T: Sync,
    F: Fn(&T) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), Rejection>> + Send + 'static,
{
    async fn run(&self, item: &T) -> Result<(), Rejection> {
        (self)(item).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("")]
    struct Blank;

    #[test]
    fn error_message_is_kept() {
        let rej = Rejection::msg("conflict");
        assert_eq!(rej.failure_message(), "conflict");
    }

    #[test]
    fn io_error_converts_via_from() {
        let rej: Rejection = std::io::Error::other("disk full").into();
        assert_eq!(rej.failure_message(), "disk full");
    }

    #[test]
    fn plain_value_is_unknown_error() {
        let rej = Rejection::value("nope");
        assert_eq!(rej.failure_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn blank_message_is_unknown_error() {
        let rej = Rejection::from(Blank);
        assert_eq!(rej.failure_message(), UNKNOWN_ERROR);
    }

    #[tokio::test]
    async fn closures_are_actions() {
        let action = |n: &u32| {
            let n = *n;
            async move {
                if n % 2 == 0 {
                    Ok(())
                } else {
                    Err(Rejection::msg(format!("odd: {n}")))
                }
            }
        };

        assert!(BulkAction::run(&action, &2u32).await.is_ok());
        let err = BulkAction::run(&action, &3u32).await.unwrap_err();
        assert_eq!(err.failure_message(), "odd: 3");
    }
}
