#[cfg(feature = "std")]
pub trait TargetKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> TargetKey for T {}

#[cfg(not(feature = "std"))]
pub trait TargetKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> TargetKey for T {}
