use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

/// Capacity given to freshly allocated line buffers.
const LINE_CAPACITY: usize = 256;
/// Buffers kept around between calls.
const MAX_BUFFERS: usize = 64;
/// Buffers that grew past this are dropped instead of being pooled.
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

lazy_static::lazy_static! {
    static ref GLOBAL_POOL: BufferPool = BufferPool::new(LINE_CAPACITY, MAX_BUFFERS);
}

/// The process-wide pool used to format log lines.
pub fn global_pool() -> &'static BufferPool {
    &GLOBAL_POOL
}

/// A pool of reusable scratch strings.
///
/// Checkout and return are safe from any number of threads. The pool is
/// elastic: when it is empty a new buffer is allocated, and at most
/// `max_buffers` are kept when returned.
#[derive(Clone)]
pub struct BufferPool {
    inner: Arc<Mutex<BufferPoolInner>>,
}

struct BufferPoolInner {
    buffers: Vec<String>,
    buffer_capacity: usize,
    max_buffers: usize,
}

/// RAII wrapper for a pooled buffer. Returns the buffer to the pool on drop.
pub struct PooledBuffer {
    data: String,
    pool: Arc<Mutex<BufferPoolInner>>,
}

impl BufferPool {
    pub fn new(buffer_capacity: usize, max_buffers: usize) -> BufferPool {
        BufferPool {
            inner: Arc::new(Mutex::new(BufferPoolInner {
                buffers: Vec::with_capacity(max_buffers),
                buffer_capacity,
                max_buffers,
            })),
        }
    }

    /// Checks out an empty buffer.
    pub fn get(&self) -> PooledBuffer {
        let mut data = {
            let mut inner = lock(&self.inner);
            let capacity = inner.buffer_capacity;
            inner
                .buffers
                .pop()
                .unwrap_or_else(|| String::with_capacity(capacity))
        };

        data.clear();

        PooledBuffer {
            data,
            pool: self.inner.clone(),
        }
    }

    /// Number of idle buffers currently held.
    pub fn size(&self) -> usize {
        lock(&self.inner).buffers.len()
    }
}

fn lock(inner: &Mutex<BufferPoolInner>) -> MutexGuard<'_, BufferPoolInner> {
    // A panic while holding the lock cannot leave the free list inconsistent.
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Deref for PooledBuffer {
    type Target = String;
    fn deref(&self) -> &String {
        &self.data
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.data
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if self.data.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }

        let data = std::mem::take(&mut self.data);
        let mut inner = lock(&self.pool);
        if inner.buffers.len() < inner.max_buffers {
            inner.buffers.push(data);
        }
    }
}
