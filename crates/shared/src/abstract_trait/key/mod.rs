mod repository;
mod service;

pub use self::repository::{
    DynKeyCommandRepository, DynKeyQueryRepository, KeyCommandRepositoryTrait,
    KeyQueryRepositoryTrait,
};
pub use self::service::{
    DynKeyCommandService, DynKeyQueryService, KeyCommandServiceTrait, KeyQueryServiceTrait,
};
