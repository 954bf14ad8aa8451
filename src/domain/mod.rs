// Domain layer - Records and pure computations
pub mod code_host;
pub mod dashboard;
pub mod path_roots;
pub mod source_provider;
pub mod stacktrace_link;
pub mod validation;
