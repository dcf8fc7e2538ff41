//! Property-based tests over the whole input domain.
