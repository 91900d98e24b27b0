/// Process-termination primitive invoked after a `fault` record is emitted.
///
/// Kept separate from the sinks so tests can swap it for one that panics
/// instead of ending the process.
pub trait Terminator: Send + Sync {
    /// Never returns. `body` is the rendered record that triggered it.
    fn terminate(&self, body: &str) -> !;
}

/// Aborts the process: no unwinding, no destructors, no exit handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbortTerminator;

impl Terminator for AbortTerminator {
    fn terminate(&self, _body: &str) -> ! {
        std::process::abort()
    }
}
