// Application layer: the concrete pipeline plus the console, template and report collaborators around the core.

pub mod pipelines;
pub mod report;
pub mod summary;
pub mod template;
