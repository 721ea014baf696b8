// Incident triage engine.
// Implements: keyword classification, SOP playbook lookup, prompt
// composition, and the pipeline that ties them to the completion backend.
// All model calls go through completion, never the Bedrock SDK directly.

pub mod classifier;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod playbook;
pub mod prompts;
