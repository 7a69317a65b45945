//! Benchmark harness crate for psichat. The benchmarks live in `benches/`.
