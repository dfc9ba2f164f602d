//! Base trait for mutations.

/// Marker trait for mutation objects.
///
/// Mutations never perform I/O. They are produced by actions once a
/// request has completed and are handed to a reducer.
pub trait Mutation: Send + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
