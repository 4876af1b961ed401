//! SQL access, one module per aggregate. Handlers call these through
//! qualified paths (`repositories::task::create`).

pub mod task;
pub mod user;
