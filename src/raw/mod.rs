mod arena;
mod handle;
mod height;
mod node;
mod raw_skiplist;

pub(crate) use handle::Handle;
pub(crate) use height::random_height;
pub(crate) use raw_skiplist::RawSkipList;
