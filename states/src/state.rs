use std::any::Any;

/// A piece of application state stored in a [`crate::StateCtx`].
///
/// States are owned by the UI thread. Async work never touches them
/// directly: commands receive a cloned snapshot up front and publish
/// replacement values through an [`crate::Updater`], which the UI thread
/// applies on the next `sync()`.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone this state into a boxed value for a command snapshot.
    fn snapshot(&self) -> Box<dyn Any + Send>;
}
