//! Integration suite: one scenario set, run against every kind of
//! collaborator substitute, plus full refereed sessions.

mod substitutes;
mod session;
