//! Wire contracts shared between the admin frontend and the tour platform API.

pub mod domain;
pub mod shared;
pub mod usecases;
