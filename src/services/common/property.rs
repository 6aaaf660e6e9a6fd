use std::fmt::{self, Debug};

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive value a display layer can watch.
///
/// Setting a value equal to the current one is a no-op, so watchers only
/// wake on real changes. Each watcher gets the current value immediately
/// when subscribing.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
    rx: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Set a new value and notify all watchers if it differs.
    ///
    /// Returns whether the stored value changed. Only accessible within
    /// the crate so the owning component stays the single writer.
    pub(crate) fn set(&self, new_value: T) -> bool
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current != new_value {
                *current = new_value;
                true
            } else {
                false
            }
        })
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Watch for changes to this property.
    ///
    /// The stream immediately yields the current value, then yields
    /// whenever the value changes.
    pub fn watch(&self) -> impl Stream<Item = T> + Send {
        WatchStream::new(self.rx.clone())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    #[test]
    fn set_reports_only_real_changes() {
        let property = Property::new(3u16);

        assert!(!property.set(3));
        assert!(property.set(4));
        assert_eq!(property.get(), 4);
    }

    #[tokio::test]
    async fn watch_yields_current_value_first() {
        let property = Property::new(String::from("…"));
        property.set(String::from("Song — Artist"));

        let mut stream = Box::pin(property.watch());
        assert_eq!(stream.next().await.as_deref(), Some("Song — Artist"));
    }
}
