pub mod fibonacci_heap;
pub mod thread_pool;

pub use fibonacci_heap::{FibonacciHeap, MergedHandles, NodeHandle};
pub use thread_pool::{TaskHandle, ThreadPool};
