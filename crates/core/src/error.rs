//! Error types for the piece containers and the exchange moves.

/// Which exchange move failed its size check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// Queue front with stack top.
    Single,
    /// First three queued pieces with the full reserve.
    Block,
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exchange::Single => f.write_str("swap"),
            Exchange::Block => f.write_str("block swap"),
        }
    }
}

/// Recoverable failures of core operations.
///
/// Every operation that returns one of these left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("queue is full")]
    QueueFull,

    #[error("queue is empty")]
    QueueEmpty,

    #[error("reserve is full")]
    StackFull,

    #[error("reserve is empty")]
    StackEmpty,

    /// Not enough pieces on one side of an exchange.
    #[error("{operation} needs {required} piece(s) in queue and reserve (queue has {queue_len}, reserve has {stack_len})")]
    ExchangePrecondition {
        operation: Exchange,
        required: usize,
        queue_len: usize,
        stack_len: usize,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
