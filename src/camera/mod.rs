pub(crate) mod handle;
pub(crate) mod state;
pub(crate) mod turntable;
