use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown flag shared between a mounted canvas and its browser callbacks.
///
/// The frame loop and the resize listener check it on every call and tear
/// themselves down once the component has been cleaned up.
#[derive(Clone, Debug)]
pub struct LoopGuard {
	shutdown: Arc<AtomicBool>,
}

impl LoopGuard {
	pub fn new() -> Self {
		Self {
			shutdown: Arc::new(AtomicBool::new(false)),
		}
	}

	pub fn stop(&self) {
		self.shutdown.store(true, Ordering::Relaxed);
	}

	pub fn is_alive(&self) -> bool {
		!self.shutdown.load(Ordering::Relaxed)
	}
}
