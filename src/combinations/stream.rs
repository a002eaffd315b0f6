use super::{binomial, CombinationError, Combinations};
use crossbeam::channel::{bounded, Receiver};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Combinations produced on a worker thread and handed over through a bounded
/// channel, so generation runs ahead of consumption by at most `capacity`
/// subsets.
///
/// Dropping the stream (or calling [`CombinationStream::cancel`]) signals the
/// producer to stop and joins it; no generation continues unobserved.
///
/// ```
/// use poker_equity::combinations::CombinationStream;
///
/// let stream = CombinationStream::spawn(vec![1, 2, 3, 4, 5], 3, 8).unwrap();
/// assert_eq!(stream.count(), 10);
/// ```
#[derive(Debug)]
pub struct CombinationStream<T> {
    receiver: Option<Receiver<Vec<T>>>,
    stop: Arc<AtomicBool>,
    produced: Arc<AtomicU64>,
    worker: Option<JoinHandle<()>>,
    expected: u64,
    received: u64,
}

impl<T: Copy + Send + 'static> CombinationStream<T> {
    /// Start a producer enumerating every `k`-subset of `source`.
    pub fn spawn(source: Vec<T>, k: usize, capacity: usize) -> Result<Self, CombinationError> {
        let expected = binomial(source.len(), k);
        let (sender, receiver) = bounded(capacity);
        let stop = Arc::new(AtomicBool::new(false));
        let produced = Arc::new(AtomicU64::new(0));

        let worker = {
            let stop = Arc::clone(&stop);
            let produced = Arc::clone(&produced);
            thread::Builder::new().name("combinations".into()).spawn(move || {
                for combo in Combinations::new(&source, k) {
                    if stop.load(Ordering::Relaxed) || sender.send(combo).is_err() {
                        log::debug!(
                            "combination producer stopped after {} of {}",
                            produced.load(Ordering::Relaxed),
                            expected
                        );
                        return;
                    }
                    produced.fetch_add(1, Ordering::Relaxed);
                }
                log::trace!("combination producer finished ({expected} subsets)");
            })?
        };

        Ok(Self {
            receiver: Some(receiver),
            stop,
            produced,
            worker: Some(worker),
            expected,
            received: 0,
        })
    }
}

impl<T> CombinationStream<T> {
    /// Total subsets the producer will generate if not cancelled.
    pub fn expected(&self) -> u64 {
        self.expected
    }

    /// Subsets handed to the channel so far.
    pub fn produced(&self) -> u64 {
        self.produced.load(Ordering::Relaxed)
    }

    /// Stop the producer and wait for it to exit. Later calls to `next`
    /// return `None`.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        // unblocks a producer parked on a full channel
        self.receiver.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("combination producer panicked");
            }
        }
    }
}

impl<T> Iterator for CombinationStream<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let combo = self.receiver.as_ref()?.recv().ok()?;
        self.received += 1;
        Some(combo)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.receiver.is_none() {
            return (0, Some(0));
        }
        let left = usize::try_from(self.expected - self.received).unwrap_or(usize::MAX);
        (0, Some(left))
    }
}

impl<T> Drop for CombinationStream<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
