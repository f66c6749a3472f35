use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied graph cannot be used, e.g. it is directed.
    InvalidArgument(String),

    /// An operation was invoked before its required state was configured.
    PreconditionViolated(String),

    /// An edge endpoint exceeds the vertex count the graph was built with.
    VertexIndexOutOfBounds(usize),

    /// Indicates a structural inconsistency found during graph processing or validation.
    InvalidGraph,

    /// Failed to trace the full cycle path, usually due to broken parent chains.
    CycleReconstructionFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),

            Error::PreconditionViolated(msg) => write!(f, "Precondition violated: {}", msg),

            Error::VertexIndexOutOfBounds(v) => write!(f, "Vertex index {} is out of bounds.", v),

            Error::InvalidGraph => write!(f, "Graph structure is invalid or inconsistent."),

            Error::CycleReconstructionFailed => write!(
                f,
                "Cycle path reconstruction failed due to broken parent chain."
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = Error::InvalidArgument("Graph must be undirected".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Graph must be undirected");

        let err = Error::PreconditionViolated("no graph".to_string());
        assert_eq!(err.to_string(), "Precondition violated: no graph");

        assert_eq!(
            Error::VertexIndexOutOfBounds(7).to_string(),
            "Vertex index 7 is out of bounds."
        );
    }
}
