mod due_policy;
mod support;
