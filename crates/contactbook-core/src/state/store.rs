use super::events::Event;
use super::types::Command;

/// Trait for dispatching contact commands.
///
/// Decouples command definitions from their execution, so front ends can be
/// written against the trait and tested with a stub store.
///
/// # Semantics
///
/// - **Ordering**: Commands execute synchronously in the order received.
/// - **Atomicity**: A command either commits fully or is rejected with no
///   state change.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in chronological order. A command that changes nothing (for
///   example leaving edit mode while idle) returns an empty vector.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
