//! Test-only crate. The integration tests under `tests/` exercise whole
//! pipeline runs across crate boundaries; there is no library code here.
