use std::future::Future;
use tokio::sync::OnceCell;

/// A lazily-filled slot owned by a single instance.
///
/// The first successful [`get_or_try_init`](Self::get_or_try_init) stores
/// the computed value; every later call hands back the stored value without
/// running the computation again. A failed computation leaves the slot empty.
#[derive(Debug)]
pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memoized<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub async fn get_or_try_init<E, F, Fut>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        tracing::debug!("computing memoized value");
        self.cell.get_or_try_init(f).await
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        calls: Cell<u32>,
        value: Memoized<u32>,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                value: Memoized::new(),
            }
        }

        fn a_method(&self) -> u32 {
            self.calls.set(self.calls.get() + 1);
            42
        }

        async fn a_property(&self) -> u32 {
            *self
                .value
                .get_or_try_init(|| async move { Ok::<_, ()>(self.a_method()) })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn computes_once_per_instance() {
        let counter = Counter::new();
        assert!(!counter.value.is_computed());

        assert_eq!(counter.a_property().await, 42);
        assert_eq!(counter.a_property().await, 42);

        assert_eq!(counter.calls.get(), 1);
        assert!(counter.value.is_computed());
        assert_eq!(counter.value.get(), Some(&42));
    }

    #[tokio::test]
    async fn instances_do_not_share_slots() {
        let first = Counter::new();
        let second = Counter::new();

        first.a_property().await;
        assert!(!second.value.is_computed());

        second.a_property().await;
        assert_eq!(first.calls.get(), 1);
        assert_eq!(second.calls.get(), 1);
    }

    #[tokio::test]
    async fn failure_is_not_cached() {
        let slot: Memoized<u32> = Memoized::new();
        let attempts = Cell::new(0);
        let attempts = &attempts;

        let err = slot
            .get_or_try_init(|| async move {
                attempts.set(attempts.get() + 1);
                Err::<u32, _>("boom")
            })
            .await
            .unwrap_err();
        assert_eq!(err, "boom");
        assert!(!slot.is_computed());

        let value = slot
            .get_or_try_init(|| async move {
                attempts.set(attempts.get() + 1);
                Ok::<_, &str>(7)
            })
            .await
            .unwrap();
        assert_eq!(*value, 7);
        assert_eq!(attempts.get(), 2);
    }
}
