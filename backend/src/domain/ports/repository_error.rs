//! Error surface shared by the repository ports.

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by repository adapters.
    ///
    /// The catalogue stores are homogeneous, so the district, property, and
    /// room ports share one error surface. Absence of a row is not an error;
    /// lookups report it as `None` and the domain decides what it means.
    pub enum RepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } => "repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
    }
}
