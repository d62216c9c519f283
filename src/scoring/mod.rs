pub mod award;
pub mod consts;
pub mod distance;
pub mod verdict;
